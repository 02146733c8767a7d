//! In-memory person store
//!
//! Default backend for the service and the fake used by the HTTP tests.
//! Name uniqueness is checked under the write lock, so two concurrent
//! inserts of the same name cannot both succeed here.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::errors::{StoreError, StoreResult};
use super::{parse_id, PersonStore};
use crate::person::{Person, PersonId};

/// Entries loaded by [`InMemoryPersonStore::with_sample_data`]
const SAMPLE_PERSONS: [(&str, &str); 4] = [
    ("Arto Hellas", "040-123456"),
    ("Ada Lovelace", "39-44-5323523"),
    ("Dan Abramov", "12-43-234345"),
    ("Mary Poppendieck", "39-23-6423122"),
];

/// Person store backed by a vector behind a lock
#[derive(Debug, Default)]
pub struct InMemoryPersonStore {
    persons: RwLock<Vec<Person>>,
}

impl InMemoryPersonStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with a handful of sample persons
    pub fn with_sample_data() -> Self {
        let persons = SAMPLE_PERSONS
            .iter()
            .map(|(name, number)| Person::new(PersonId::generate(), *name, *number))
            .collect();
        Self {
            persons: RwLock::new(persons),
        }
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Vec<Person>>> {
        self.persons.read().map_err(poisoned)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Vec<Person>>> {
        self.persons.write().map_err(poisoned)
    }
}

fn poisoned<T>(_: PoisonError<T>) -> StoreError {
    StoreError::Backend("person store lock poisoned".to_string())
}

fn require(field: &str, value: &str) -> StoreResult<()> {
    if value.is_empty() {
        return Err(StoreError::Validation(format!("{} is missing", field)));
    }
    Ok(())
}

impl PersonStore for InMemoryPersonStore {
    fn find_all(&self) -> StoreResult<Vec<Person>> {
        Ok(self.read()?.clone())
    }

    fn find_by_id(&self, id: &str) -> StoreResult<Option<Person>> {
        let id = parse_id(id)?;
        Ok(self.read()?.iter().find(|p| p.id == id).cloned())
    }

    fn find_by_name(&self, name: &str) -> StoreResult<Option<Person>> {
        Ok(self.read()?.iter().find(|p| p.name == name).cloned())
    }

    fn insert(&self, name: &str, number: &str) -> StoreResult<Person> {
        require("name", name)?;
        require("number", number)?;

        let mut persons = self.write()?;
        if persons.iter().any(|p| p.name == name) {
            return Err(StoreError::DuplicateName(name.to_string()));
        }

        let person = Person::new(PersonId::generate(), name, number);
        persons.push(person.clone());
        Ok(person)
    }

    fn update_number(&self, id: &str, number: &str) -> StoreResult<Option<Person>> {
        let id = parse_id(id)?;
        require("number", number)?;

        let mut persons = self.write()?;
        Ok(persons.iter_mut().find(|p| p.id == id).map(|person| {
            person.number = number.to_string();
            person.clone()
        }))
    }

    fn delete_by_id(&self, id: &str) -> StoreResult<bool> {
        let id = parse_id(id)?;

        let mut persons = self.write()?;
        let before = persons.len();
        persons.retain(|p| p.id != id);
        Ok(persons.len() != before)
    }

    fn count(&self) -> StoreResult<usize> {
        Ok(self.read()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_then_find() {
        let store = InMemoryPersonStore::new();
        let created = store.insert("Arto Hellas", "040-123456").unwrap();

        let found = store.find_by_id(&created.id.to_string()).unwrap();
        assert_eq!(found, Some(created.clone()));
        assert_eq!(store.find_by_name("Arto Hellas").unwrap(), Some(created));
        assert_eq!(store.find_by_name("Arto").unwrap(), None);
    }

    #[test]
    fn test_find_all_keeps_insertion_order() {
        let store = InMemoryPersonStore::new();
        store.insert("B", "1").unwrap();
        store.insert("A", "2").unwrap();
        store.insert("C", "3").unwrap();

        let names: Vec<_> = store
            .find_all()
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_duplicate_name_rejected_without_mutation() {
        let store = InMemoryPersonStore::new();
        store.insert("Ada Lovelace", "1").unwrap();

        let err = store.insert("Ada Lovelace", "2").unwrap_err();
        assert_eq!(err, StoreError::DuplicateName("Ada Lovelace".to_string()));
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_insert_validates_fields() {
        let store = InMemoryPersonStore::new();
        assert_eq!(
            store.insert("", "1").unwrap_err(),
            StoreError::Validation("name is missing".to_string())
        );
        assert_eq!(
            store.insert("Dan", "").unwrap_err(),
            StoreError::Validation("number is missing".to_string())
        );
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_update_number_only() {
        let store = InMemoryPersonStore::new();
        let created = store.insert("Dan Abramov", "12-43-234345").unwrap();
        let id = created.id.to_string();

        let updated = store.update_number(&id, "555").unwrap().unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Dan Abramov");
        assert_eq!(updated.number, "555");
        assert_eq!(store.find_by_id(&id).unwrap(), Some(updated));
    }

    #[test]
    fn test_update_missing_person() {
        let store = InMemoryPersonStore::new();
        let id = PersonId::generate().to_string();
        assert_eq!(store.update_number(&id, "555").unwrap(), None);
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let store = InMemoryPersonStore::new();
        let created = store.insert("Mary Poppendieck", "39-23-6423122").unwrap();
        let id = created.id.to_string();

        assert!(store.delete_by_id(&id).unwrap());
        assert!(!store.delete_by_id(&id).unwrap());
        assert_eq!(store.find_by_id(&id).unwrap(), None);
    }

    #[test]
    fn test_malformed_ids_are_cast_errors() {
        let store = InMemoryPersonStore::new();
        assert!(matches!(store.find_by_id("1"), Err(StoreError::Cast(_))));
        assert!(matches!(store.delete_by_id("zz"), Err(StoreError::Cast(_))));
        assert!(matches!(
            store.update_number("abc", "1"),
            Err(StoreError::Cast(_))
        ));
    }

    #[test]
    fn test_sample_data() {
        let store = InMemoryPersonStore::with_sample_data();
        assert_eq!(store.count().unwrap(), 4);
        assert!(store.find_by_name("Arto Hellas").unwrap().is_some());
    }
}
