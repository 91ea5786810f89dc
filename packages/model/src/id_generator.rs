use uuid::Uuid;

/// Number of hex digits taken from a random UUID for the session seed
const SEED_LEN: usize = 12;

/// Generate a random session seed
pub fn new_session_seed() -> String {
    let mut seed = Uuid::new_v4().simple().to_string();
    seed.truncate(SEED_LEN);
    seed
}

/// Sequential ID generator for blocks and graph nodes within a session.
///
/// Ids are `{seed}-{count}`: the random seed separates sessions, the
/// monotonic counter separates ids within one session, so an id is never
/// handed out twice even after the block holding it is deleted.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    seed: String,
    count: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::from_seed(new_session_seed())
    }

    pub fn from_seed(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            count: 0,
        }
    }

    /// Generate next sequential ID
    pub fn new_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sequential_ids() {
        let mut gen = IdGenerator::from_seed("abc");

        assert_eq!(gen.new_id(), "abc-1");
        assert_eq!(gen.new_id(), "abc-2");
        assert_eq!(gen.new_id(), "abc-3");
    }

    #[test]
    fn test_sessions_get_distinct_seeds() {
        let a = IdGenerator::new();
        let b = IdGenerator::new();

        assert_eq!(a.seed().len(), SEED_LEN);
        assert_ne!(a.seed(), b.seed());
    }

    #[test]
    fn test_ids_never_repeat() {
        let mut gen = IdGenerator::new();
        let ids: HashSet<String> = (0..1000).map(|_| gen.new_id()).collect();
        assert_eq!(ids.len(), 1000);
    }
}
