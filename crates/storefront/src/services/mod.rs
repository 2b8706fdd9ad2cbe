//! Business logic services for the storefront.
//!
//! # Services
//!
//! - `auth` - Form validation and the command handlers that drive the session gate
//! - `provider` - Identity providers for Google/Apple sign-in
//! - `catalog` - The static product catalog and search

pub mod auth;
pub mod catalog;
pub mod provider;
