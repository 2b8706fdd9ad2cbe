//! Roar Threads storefront library.
//!
//! The session gate and auth flows are plain Rust over a key-value store and
//! a clock; the HTTP shell in [`routes`] runs them against tower-sessions.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod filters;
pub mod gate;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

pub use routes::app;
