//! Session-related types.

/// Keys the storefront keeps in a browser's session.
pub mod keys {
    /// Serialized session record owned by the gate.
    pub const AUTH: &str = roar_threads_core::AUTH_STORAGE_KEY;

    /// One-shot notice shown on the next page render.
    pub const NOTICE: &str = "notice";

    /// Cosmetic cart counter.
    pub const CART_COUNT: &str = "cart_count";

    /// Keys the gate is allowed to read and write.
    pub const GATE_KEYS: &[&str] = &[AUTH];
}
