//! Collection route handler.

use axum::{extract::Path, response::Redirect};
use tracing::instrument;

use super::notify;
use crate::error::Result;
use crate::middleware::RequireSignedIn;
use crate::models::Notice;

/// Featured collections on the homepage, as `(name, blurb)`.
pub const FEATURED: &[(&str, &str)] = &[
    ("Heritage", "Timeless pieces rooted in tradition"),
    ("Couture", "Handcrafted elegance for every occasion"),
    ("Essentials", "Refined staples for the modern wardrobe"),
];

/// Browse a collection.
#[instrument(skip(gate))]
pub async fn show(
    RequireSignedIn(gate): RequireSignedIn,
    Path(name): Path<String>,
) -> Result<Redirect> {
    notify(gate, Notice::collection(&name)).await
}
