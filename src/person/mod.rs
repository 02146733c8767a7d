//! # Person Domain
//!
//! The single entity the phonebook stores: a name and a phone number,
//! keyed by a store-assigned identifier.

mod model;
mod payload;

pub use model::{Person, PersonId};
pub use payload::PersonPayload;
