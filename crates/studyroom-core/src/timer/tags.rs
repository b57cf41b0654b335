use serde::{Deserialize, Serialize};

/// Ordered set of unique labels attached to the current session.
///
/// Scoped to one session: the engine clears it on mode switch and reset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSet {
    tags: Vec<String>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tag, preserving insertion order.
    ///
    /// Input is trimmed; empty-after-trim and exact duplicates (case
    /// sensitive) are rejected as no-ops. Returns whether the tag was added.
    pub fn add(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() || self.tags.iter().any(|t| t == text) {
            return false;
        }
        self.tags.push(text.to_string());
        true
    }

    /// Remove the first exact match; no-op if absent.
    pub fn remove(&mut self, text: &str) -> bool {
        match self.tags.iter().position(|t| t == text) {
            Some(index) => {
                self.tags.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.tags.clear();
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_preserves_insertion_order() {
        let mut tags = TagSet::new();
        assert!(tags.add("math"));
        assert!(tags.add("physics"));
        assert!(tags.add("reading"));
        assert_eq!(tags.as_slice(), ["math", "physics", "reading"]);
    }

    #[test]
    fn duplicates_rejected() {
        let mut tags = TagSet::new();
        assert!(tags.add("math"));
        assert!(!tags.add("math"));
        assert!(!tags.add("  math  "));
        assert_eq!(tags.len(), 1);
    }

    #[test]
    fn dedup_is_case_sensitive() {
        let mut tags = TagSet::new();
        assert!(tags.add("Math"));
        assert!(tags.add("math"));
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn empty_after_trim_rejected() {
        let mut tags = TagSet::new();
        assert!(!tags.add(""));
        assert!(!tags.add("   "));
        assert!(tags.is_empty());
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut tags = TagSet::new();
        tags.add("math");
        assert!(!tags.remove("physics"));
        assert_eq!(tags.as_slice(), ["math"]);
    }

    #[test]
    fn remove_drops_first_exact_match() {
        let mut tags = TagSet::new();
        tags.add("math");
        tags.add("physics");
        assert!(tags.remove("math"));
        assert_eq!(tags.as_slice(), ["physics"]);
    }

    #[test]
    fn clear_empties_the_set() {
        let mut tags = TagSet::new();
        tags.add("math");
        tags.add("physics");
        tags.clear();
        assert!(tags.is_empty());
    }
}
