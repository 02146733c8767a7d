//! # Phonebook REST API Module
//!
//! Maps HTTP verb, path and body onto person store operations and a fixed
//! set of status codes and response shapes.

pub mod errors;
pub mod handler;
pub mod response;
pub mod server;

pub use errors::{ErrorResponse, RestError, RestResult};
pub use handler::PersonHandler;
pub use server::RestServer;
