//! Observability for the phonebook service
//!
//! - Structured JSON logging
//! - Per-request access log middleware
//!
//! # Usage
//!
//! ```ignore
//! use phonebook::observability::Logger;
//!
//! Logger::info("PERSON_CREATED", &[("name", "Arto Hellas")]);
//! ```

mod access;
mod logger;

pub use access::{access_log, body_summary, record, response_length, AccessLogEntry, MAX_LOGGED_BODY};
pub use logger::{format_line, Logger, Severity};
