//! # Sequence Operations
//!
//! Pure editing operations over an ordered block list. Every function takes
//! the current sequence and returns the next one; the input is never
//! touched, so a caller can always swap the whole document in one step.
//!
//! ## Semantics
//!
//! - Indices are clamped, never rejected.
//! - An id that is not in the sequence makes the operation a no-op.
//! - No operation introduces a duplicate id or drops an unrelated block.
//!
//! ### Drag reorder
//!
//! Drop targets are numbered against the sequence *before* the dragged block
//! is lifted out. Target `t` sits just before block `t`:
//!
//! ```text
//!  t=0   t=1   t=2   t=3
//!   | A   | B   | C   |
//! ```
//!
//! Dropping block `k` on target `k` or `k + 1` leaves it where it is. Any
//! other target past `k` shifts down by one once `k` is removed.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use serde_json::Value;
use webbuilder_model::{Block, IdGenerator, Props};
use webbuilder_style::{clamp_spacing, parse_spacing, Spacing, SPACING_MIN};

/// One step toward the head or the tail of the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn offset(self) -> isize {
        match self {
            Direction::Up => -1,
            Direction::Down => 1,
        }
    }
}

/// Clamp a raw index into `[0, len]`
pub fn clamp_index(index: isize, len: usize) -> usize {
    if index <= 0 {
        0
    } else {
        (index as usize).min(len)
    }
}

/// Insert `block` at `index`, clamped to `[0, len]`
pub fn insert_at(seq: &[Block], index: isize, block: Block) -> Vec<Block> {
    if seq.iter().any(|b| b.id == block.id) {
        warn!(block_id = %block.id, "Refusing to insert block with duplicate id");
        return seq.to_vec();
    }

    let at = clamp_index(index, seq.len());
    let mut next = Vec::with_capacity(seq.len() + 1);
    next.extend_from_slice(&seq[..at]);
    next.push(block);
    next.extend_from_slice(&seq[at..]);
    next
}

/// Lift the block at `from` out and re-insert it at `to`, where `to` is an
/// index into the list after removal (clamped to its end)
pub fn move_within_sequence(seq: &[Block], from: usize, to: usize) -> Vec<Block> {
    if from >= seq.len() {
        return seq.to_vec();
    }

    let mut next = seq.to_vec();
    let moved = next.remove(from);
    let to = to.min(next.len());
    next.insert(to, moved);
    next
}

/// Move the block at `from` to drop target `raw_target`
pub fn drag_reorder(seq: &[Block], from: usize, raw_target: isize) -> Vec<Block> {
    if from >= seq.len() {
        debug!(from, len = seq.len(), "Drag source out of range");
        return seq.to_vec();
    }

    let target = clamp_index(raw_target, seq.len());
    if target == from || target == from + 1 {
        return seq.to_vec();
    }

    let normalized = if from < target { target - 1 } else { target };
    move_within_sequence(seq, from, normalized)
}

/// Copy the block `id` under a fresh id, right after the original
pub fn duplicate(seq: &[Block], id: &str, ids: &mut IdGenerator) -> Vec<Block> {
    let Some(index) = seq.iter().position(|b| b.id == id) else {
        return seq.to_vec();
    };

    let copy = seq[index].duplicate_as(ids.new_id());
    let mut next = seq.to_vec();
    next.insert(index + 1, copy);
    next
}

/// Drop the block `id`
pub fn remove(seq: &[Block], id: &str) -> Vec<Block> {
    seq.iter().filter(|b| b.id != id).cloned().collect()
}

/// Move the block `id` one position toward the head or the tail
pub fn move_by_selection(seq: &[Block], id: &str, direction: Direction) -> Vec<Block> {
    let Some(index) = seq.iter().position(|b| b.id == id) else {
        return seq.to_vec();
    };

    let to = index as isize + direction.offset();
    if to < 0 || to as usize >= seq.len() {
        return seq.to_vec();
    }

    let mut next = seq.to_vec();
    next.swap(index, to as usize);
    next
}

/// Shallow-merge `patch` into the props of block `id`
pub fn patch_props(seq: &[Block], id: &str, patch: &Props) -> Vec<Block> {
    let patch = normalize_spacing(patch);
    seq.iter()
        .map(|b| {
            if b.id == id {
                let mut patched = b.clone();
                patched.merge_props(&patch);
                patched
            } else {
                b.clone()
            }
        })
        .collect()
}

/// Copy of `patch` with spacing keys stored as steps in `0..=16`.
///
/// Non-numeric spacing input becomes the minimum step.
pub fn normalize_spacing(patch: &Props) -> Props {
    patch
        .iter()
        .map(|(key, value)| {
            let value = match Spacing::from_key(key) {
                Some(_) => Value::from(match value {
                    Value::Number(n) => n.as_f64().map(clamp_spacing).unwrap_or(SPACING_MIN),
                    Value::String(s) => parse_spacing(s),
                    _ => SPACING_MIN,
                }),
                None => value.clone(),
            };
            (key.clone(), value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use webbuilder_model::BlockKind;

    fn block(id: &str) -> Block {
        Block::new(id, BlockKind::Text, Props::new())
    }

    fn seq(ids: &[&str]) -> Vec<Block> {
        ids.iter().map(|id| block(id)).collect()
    }

    fn ids_of(seq: &[Block]) -> Vec<&str> {
        seq.iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn test_insert_clamps_index() {
        let s = seq(&["a", "b"]);
        assert_eq!(ids_of(&insert_at(&s, -5, block("x"))), vec!["x", "a", "b"]);
        assert_eq!(ids_of(&insert_at(&s, 1, block("x"))), vec!["a", "x", "b"]);
        assert_eq!(ids_of(&insert_at(&s, 99, block("x"))), vec!["a", "b", "x"]);
        assert_eq!(insert_at(&s, 99, block("x")), insert_at(&s, 2, block("x")));
    }

    #[test]
    fn test_insert_into_empty() {
        assert_eq!(ids_of(&insert_at(&[], 3, block("x"))), vec!["x"]);
    }

    #[test]
    fn test_insert_refuses_duplicate_id() {
        let s = seq(&["a", "b"]);
        assert_eq!(insert_at(&s, 0, block("b")), s);
    }

    #[test]
    fn test_move_within_sequence() {
        let s = seq(&["a", "b", "c", "d"]);
        assert_eq!(ids_of(&move_within_sequence(&s, 0, 3)), vec!["b", "c", "d", "a"]);
        assert_eq!(ids_of(&move_within_sequence(&s, 3, 0)), vec!["d", "a", "b", "c"]);
        assert_eq!(ids_of(&move_within_sequence(&s, 1, 50)), vec!["a", "c", "d", "b"]);
        assert_eq!(move_within_sequence(&s, 4, 0), s);
    }

    #[test]
    fn test_drag_to_head() {
        let s = seq(&["a", "b", "c"]);
        assert_eq!(ids_of(&drag_reorder(&s, 1, 0)), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_drag_to_tail() {
        let s = seq(&["a", "b", "c"]);
        assert_eq!(ids_of(&drag_reorder(&s, 0, 3)), vec!["b", "c", "a"]);
        assert_eq!(ids_of(&drag_reorder(&s, 0, 2)), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_drag_adjacent_is_noop() {
        let s = seq(&["a", "b", "c"]);
        for k in 0..s.len() {
            assert_eq!(drag_reorder(&s, k, k as isize), s);
            assert_eq!(drag_reorder(&s, k, k as isize + 1), s);
        }
    }

    #[test]
    fn test_drag_out_of_range() {
        let s = seq(&["a", "b", "c"]);
        assert_eq!(drag_reorder(&s, 7, 0), s);
        assert_eq!(ids_of(&drag_reorder(&s, 0, 40)), vec!["b", "c", "a"]);
        assert_eq!(ids_of(&drag_reorder(&s, 2, -3)), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_duplicate_inserts_after_original() {
        let mut ids = IdGenerator::from_seed("t");
        let mut s = seq(&["a", "b"]);
        s[0].props = json!({"text": "Hi"}).as_object().cloned().unwrap();

        let next = duplicate(&s, "a", &mut ids);
        assert_eq!(ids_of(&next), vec!["a", "t-1", "b"]);
        assert_eq!(next[1].props, s[0].props);
        assert_eq!(next[1].kind, s[0].kind);
    }

    #[test]
    fn test_missing_id_is_noop() {
        let mut ids = IdGenerator::from_seed("t");
        let s = seq(&["a", "b"]);
        let patch = json!({"text": "x"}).as_object().cloned().unwrap();

        assert_eq!(remove(&s, "zz"), s);
        assert_eq!(duplicate(&s, "zz", &mut ids), s);
        assert_eq!(patch_props(&s, "zz", &patch), s);
        assert_eq!(move_by_selection(&s, "zz", Direction::Up), s);
        assert_eq!(ids.new_id(), "t-1");
    }

    #[test]
    fn test_patch_clamps_spacing() {
        let s = seq(&["a"]);
        let patch = json!({"px": "abc", "mb": 40, "py": "2.7", "mt": null, "text": "5"})
            .as_object()
            .cloned()
            .unwrap();

        let next = patch_props(&s, "a", &patch);
        let props = &next[0].props;
        assert_eq!(props["px"], 0);
        assert_eq!(props["mb"], 16);
        assert_eq!(props["py"], 2);
        assert_eq!(props["mt"], 0);
        assert_eq!(props["text"], "5");
    }

    #[test]
    fn test_remove() {
        let s = seq(&["a", "b", "c"]);
        assert_eq!(ids_of(&remove(&s, "b")), vec!["a", "c"]);
    }

    #[test]
    fn test_move_by_selection_respects_bounds() {
        let s = seq(&["a", "b", "c"]);
        assert_eq!(ids_of(&move_by_selection(&s, "b", Direction::Up)), vec!["b", "a", "c"]);
        assert_eq!(ids_of(&move_by_selection(&s, "b", Direction::Down)), vec!["a", "c", "b"]);
        assert_eq!(move_by_selection(&s, "a", Direction::Up), s);
        assert_eq!(move_by_selection(&s, "c", Direction::Down), s);
    }

    #[test]
    fn test_patch_props_shallow_merge() {
        let mut s = seq(&["a"]);
        s[0].props = json!({"text": "Hi", "align": "left", "style": {"a": 1}})
            .as_object()
            .cloned()
            .unwrap();
        let patch = json!({"align": "center", "style": {"b": 2}})
            .as_object()
            .cloned()
            .unwrap();

        let next = patch_props(&s, "a", &patch);
        assert_eq!(
            serde_json::Value::Object(next[0].props.clone()),
            json!({"text": "Hi", "align": "center", "style": {"b": 2}})
        );
    }

    #[test]
    fn test_direction_serde() {
        assert_eq!(serde_json::to_string(&Direction::Up).unwrap(), "\"up\"");
    }
}
