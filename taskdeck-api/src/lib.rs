//! # Taskdeck API Server Library
//!
//! This library provides the core functionality for the Taskdeck API server,
//! an in-memory users/tasks backend used as a target for OpenAPI tool loaders.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `config`: Configuration management
//! - `error`: Error handling and HTTP response mapping
//! - `openapi`: Generated OpenAPI document
//! - `routes`: API route handlers

pub mod app;
pub mod config;
pub mod error;
pub mod openapi;
pub mod routes;
