//! # Taskdeck Shared Library
//!
//! This crate contains the domain types and the in-memory store behind the
//! Taskdeck API server.
//!
//! ## Module Organization
//!
//! - `models`: User and task records plus their create/update inputs
//! - `store`: Insertion-ordered in-memory tables with cascade delete

pub mod models;
pub mod store;

/// Current version of the Taskdeck shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
