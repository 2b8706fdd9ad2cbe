//! Core types for Roar Threads.
//!
//! This module provides type-safe wrappers for the storefront's domain concepts.

pub mod email;
pub mod price;
pub mod product;
pub mod profile;
pub mod session;

pub use email::{Email, EmailError};
pub use price::{CurrencyCode, Price};
pub use product::{Product, Rating};
pub use profile::{AuthMethod, UserProfile};
pub use session::{AUTH_STORAGE_KEY, SESSION_TTL, SessionRecord};
