//! Tests for longer mutation sequences
//!
//! This tests:
//! - Document integrity after chains of edits
//! - Clamping and no-op behavior across every operation

use webbuilder_editor::sequence::{
    drag_reorder, duplicate, insert_at, move_by_selection, patch_props, remove,
};
use webbuilder_editor::{Direction, Mutation};
use webbuilder_model::{Block, BlockKind, Document, IdGenerator, Props};

fn blocks(n: usize) -> Vec<Block> {
    (0..n)
        .map(|i| Block::new(format!("b{}", i), BlockKind::Text, Props::new()))
        .collect()
}

fn sorted_ids(seq: &[Block]) -> Vec<String> {
    let mut ids: Vec<String> = seq.iter().map(|b| b.id.clone()).collect();
    ids.sort();
    ids
}

#[test]
fn test_insert_out_of_range_matches_clamped() {
    for len in 0..4 {
        let seq = blocks(len);
        for raw in [-10isize, -1, len as isize + 1, len as isize + 50] {
            let clamped = raw.clamp(0, len as isize);
            let block = Block::new("new", BlockKind::Image, Props::new());
            assert_eq!(
                insert_at(&seq, raw, block.clone()),
                insert_at(&seq, clamped, block)
            );
        }
    }
}

#[test]
fn test_every_drag_is_a_permutation() {
    let seq = blocks(5);
    for from in 0..5 {
        for target in -1..=6 {
            let next = drag_reorder(&seq, from, target);
            assert_eq!(next.len(), seq.len());
            assert_eq!(sorted_ids(&next), sorted_ids(&seq));
            assert!(Document::from_blocks(next).has_unique_ids());
        }
    }
}

#[test]
fn test_drag_lands_block_at_effective_index() {
    let seq = blocks(5);
    for from in 0..5usize {
        for target in 0..=5usize {
            let next = drag_reorder(&seq, from, target as isize);
            if target == from || target == from + 1 {
                assert_eq!(next, seq);
            } else {
                let expected = if target > from { target - 1 } else { target };
                assert_eq!(next[expected].id, seq[from].id);
            }
        }
    }
}

#[test]
fn test_missing_id_leaves_sequence_unchanged() {
    let seq = blocks(3);
    let mut ids = IdGenerator::from_seed("m");
    let patch = Props::new();

    assert_eq!(remove(&seq, "ghost"), seq);
    assert_eq!(duplicate(&seq, "ghost", &mut ids), seq);
    assert_eq!(patch_props(&seq, "ghost", &patch), seq);
    assert_eq!(move_by_selection(&seq, "ghost", Direction::Down), seq);
}

#[test]
fn test_duplicate_then_remove_chain() {
    let mut ids = IdGenerator::from_seed("m");
    let mutations = vec![
        Mutation::DuplicateBlock {
            block_id: "b1".to_string(),
        },
        Mutation::NudgeBlock {
            block_id: "m-1".to_string(),
            direction: Direction::Up,
        },
        Mutation::RemoveBlock {
            block_id: "b0".to_string(),
        },
        Mutation::DragBlock { from: 2, target: 0 },
    ];

    let seq = mutations
        .iter()
        .fold(blocks(3), |seq, m| m.apply(&seq, &mut ids));

    let order: Vec<&str> = seq.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(order, vec!["b2", "m-1", "b1"]);
    assert!(Document::from_blocks(seq).has_unique_ids());
}

#[test]
fn test_ids_are_never_reused_after_delete() {
    let mut ids = IdGenerator::from_seed("m");
    let seq = duplicate(&blocks(1), "b0", &mut ids);
    let seq = remove(&seq, "m-1");
    let seq = duplicate(&seq, "b0", &mut ids);

    assert_eq!(seq[1].id, "m-2");
}
