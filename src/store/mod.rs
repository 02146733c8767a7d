//! # Person Store
//!
//! Keyed CRUD over person records. The HTTP layer only ever talks to the
//! [`PersonStore`] trait, so any backend (or a test fake) can sit behind it.
//!
//! Identifiers are passed in their raw transport form. Parsing them is the
//! store's job, and a value that is not a valid key surfaces as
//! [`StoreError::Cast`].

mod errors;
mod memory;

pub use errors::{StoreError, StoreResult};
pub use memory::InMemoryPersonStore;

use crate::person::{Person, PersonId};

/// Store trait for person records
pub trait PersonStore: Send + Sync {
    /// All persons in insertion order
    fn find_all(&self) -> StoreResult<Vec<Person>>;

    /// Look up a person by id
    fn find_by_id(&self, id: &str) -> StoreResult<Option<Person>>;

    /// Look up a person by exact name
    fn find_by_name(&self, name: &str) -> StoreResult<Option<Person>>;

    /// Insert a new person, assigning a fresh id
    fn insert(&self, name: &str, number: &str) -> StoreResult<Person>;

    /// Overwrite the number of an existing person
    ///
    /// Returns `None` when no person has this id. The name is never touched.
    fn update_number(&self, id: &str, number: &str) -> StoreResult<Option<Person>>;

    /// Delete a person, returning whether one was removed
    fn delete_by_id(&self, id: &str) -> StoreResult<bool>;

    /// Number of stored persons
    fn count(&self) -> StoreResult<usize> {
        self.find_all().map(|all| all.len())
    }
}

/// Parse a raw identifier into a store key
pub fn parse_id(raw: &str) -> StoreResult<PersonId> {
    raw.parse().map_err(|_| StoreError::Cast(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        let id = PersonId::generate();
        assert_eq!(parse_id(&id.to_string()).unwrap(), id);
        assert_eq!(parse_id("42"), Err(StoreError::Cast("42".to_string())));
    }
}
