//! QueueBoard Core - Shared types library.
//!
//! This crate provides the common types used across QueueBoard components:
//! - `admin` - Internal administration dashboard
//! - `integration-tests` - End-to-end tests against a running server
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Backend record schemas and the filter projections stashed
//!   in the provider registry

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
