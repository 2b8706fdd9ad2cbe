//! Domain models for the storefront shell.
//!
//! Types here live in the browser's tower-sessions session next to the
//! gate's session record.

pub mod notice;
pub mod session;

pub use notice::{Notice, NoticeLevel};
pub use session::keys as session_keys;
