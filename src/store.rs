// src/store.rs

//! In-memory release store.
//!
//! Populated once from the startup scrape pass and read-only afterwards.
//! Concurrent reads from request handlers are safe because nothing writes
//! after construction.

use crate::models::Release;

/// Ordered collection of all releases from a single scrape pass.
#[derive(Debug, Default)]
pub struct ReleaseStore {
    releases: Vec<Release>,
}

impl ReleaseStore {
    /// Create a store from an extraction pass, preserving insertion order.
    pub fn new(releases: Vec<Release>) -> Self {
        Self { releases }
    }

    /// Find the first release with the given id.
    ///
    /// Ids are not unique across release groups, so "first in document order"
    /// is the observable contract.
    pub fn get(&self, id: i32) -> Option<&Release> {
        self.releases.iter().find(|r| r.id == id)
    }

    /// All releases in insertion order.
    pub fn all(&self) -> &[Release] {
        &self.releases
    }

    /// Number of stored releases.
    pub fn len(&self) -> usize {
        self.releases.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: i32, title: &str) -> Release {
        Release {
            id,
            title: title.to_string(),
            price: "$100".to_string(),
            date: "1/Jan/2019".to_string(),
            image: String::new(),
            provider: "SOLECOLLECTOR".to_string(),
        }
    }

    #[test]
    fn get_finds_first_match_in_insertion_order() {
        let store = ReleaseStore::new(vec![sample(1, "a"), sample(2, "b"), sample(1, "c")]);
        assert_eq!(store.get(1).unwrap().title, "a");
        assert_eq!(store.get(2).unwrap().title, "b");
    }

    #[test]
    fn get_returns_none_for_absent_id() {
        let store = ReleaseStore::new(vec![sample(1, "a")]);
        assert!(store.get(999).is_none());
    }

    #[test]
    fn all_preserves_insertion_order() {
        let store = ReleaseStore::new(vec![sample(1, "a"), sample(2, "b")]);
        let titles: Vec<_> = store.all().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b"]);
    }

    #[test]
    fn empty_store() {
        let store = ReleaseStore::default();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }
}
