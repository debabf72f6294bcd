//! Linkshelf - a self-contained URL shortener
//!
//! Mints short aliases for long URLs, keeps a bounded history of the most
//! recent mappings, and resolves short paths back to their targets with a
//! simulated redirect or 404, all without a server.
//!
//! # Features
//! - **cli**: Command-line front end (default)
//!
//! # Architecture
//! - `storage`: History model, the bounded history store and its backends
//! - `services`: Short code resolution, redirect simulation, link service
//! - `utils`: Short code generation and URL validation
//! - `config`: Configuration management
//! - `interfaces`: User interfaces (CLI)
//! - `system`: Logging and signal handling

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod errors;
#[cfg(feature = "cli")]
pub mod interfaces;
pub mod services;
pub mod storage;
pub mod system;
pub mod utils;
