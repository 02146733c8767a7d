//! # REST API Handler
//!
//! Request validation and store calls for the person collection, kept
//! apart from axum so the rules can be exercised directly.
//!
//! Create validation runs in a fixed order and stops at the first failure:
//!
//! 1. name and number both absent
//! 2. number absent
//! 3. name absent
//! 4. name already taken
//!
//! The uniqueness check here is check-then-insert and is not atomic on its
//! own. A store that enforces uniqueness reports a conflict through
//! [`StoreError::DuplicateName`](crate::store::StoreError::DuplicateName),
//! which ends up as the same 400 response.

use std::sync::Arc;

use crate::observability::Logger;
use crate::person::{Person, PersonPayload};
use crate::store::PersonStore;

use super::errors::{RestError, RestResult, DUPLICATE_NAME};

pub const NAME_AND_NUMBER_MISSING: &str = "name and number are missing";
pub const NUMBER_MISSING: &str = "number is missing";
pub const NAME_MISSING: &str = "name is missing";

/// Person operations over an injected store
pub struct PersonHandler<S: PersonStore> {
    store: Arc<S>,
}

impl<S: PersonStore> PersonHandler<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// All persons
    pub fn list(&self) -> RestResult<Vec<Person>> {
        Ok(self.store.find_all()?)
    }

    /// Number of persons, for the info page
    pub fn count(&self) -> RestResult<usize> {
        Ok(self.store.count()?)
    }

    /// A single person by id
    pub fn get(&self, id: &str) -> RestResult<Person> {
        self.store.find_by_id(id)?.ok_or(RestError::NotFound)
    }

    /// Delete a person; deleting an absent person is not an error
    pub fn delete(&self, id: &str) -> RestResult<()> {
        if self.store.delete_by_id(id)? {
            Logger::info("PERSON_DELETED", &[("id", id)]);
        }
        Ok(())
    }

    /// Validate and insert a new person
    pub fn create(&self, payload: PersonPayload) -> RestResult<Person> {
        let (name, number) = validate_new(payload)?;

        if self.store.find_by_name(&name)?.is_some() {
            return Err(RestError::validation(DUPLICATE_NAME));
        }

        let person = self.store.insert(&name, &number)?;
        Logger::info(
            "PERSON_CREATED",
            &[("id", person.id.to_string().as_str()), ("name", person.name.as_str())],
        );
        Ok(person)
    }

    /// Replace the number of an existing person
    ///
    /// A missing person ends the request with 404 before anything is
    /// written. The name in the payload, if any, is ignored.
    pub fn update_number(&self, id: &str, payload: PersonPayload) -> RestResult<Person> {
        if self.store.find_by_id(id)?.is_none() {
            return Err(RestError::NotFound);
        }

        let number = payload
            .number
            .ok_or_else(|| RestError::validation(NUMBER_MISSING))?;

        let person = self
            .store
            .update_number(id, &number)?
            .ok_or(RestError::NotFound)?;
        Logger::info("PERSON_UPDATED", &[("id", id), ("number", person.number.as_str())]);
        Ok(person)
    }
}

/// Check required fields of a new person in precedence order
fn validate_new(payload: PersonPayload) -> RestResult<(String, String)> {
    match (payload.name, payload.number) {
        (None, None) => Err(RestError::validation(NAME_AND_NUMBER_MISSING)),
        (_, None) => Err(RestError::validation(NUMBER_MISSING)),
        (None, Some(_)) => Err(RestError::validation(NAME_MISSING)),
        (Some(name), Some(number)) => Ok((name, number)),
    }
}
