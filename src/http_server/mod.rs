//! # Phonebook HTTP Server Module
//!
//! Serves the REST API over HTTP.
//!
//! # Endpoints
//!
//! - `/` - Greeting page
//! - `/info` - Phonebook summary
//! - `/api/persons` - Person collection

pub mod config;
pub mod server;

pub use config::HttpServerConfig;
pub use server::HttpServer;
