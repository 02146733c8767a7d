//! phonebook - a small REST service for names and phone numbers
//!
//! The HTTP layer validates requests and maps them onto a [`store::PersonStore`];
//! the bundled backend keeps everything in memory.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod person;
pub mod rest_api;
pub mod store;
