//! Roar Threads Core - Shared types library.
//!
//! This crate provides the domain types used by the storefront:
//! - `storefront` - Session gate, auth services and the HTTP shell
//! - `integration-tests` - End-to-end tests against the HTTP shell
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access,
//! no HTTP. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Validated emails, prices, ratings, products, user profiles
//!   and the persisted session record

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
