//! Header navigation, footer page and social link handlers.
//!
//! None of these pages exist; each link queues a notice saying so.

use axum::{extract::Path, response::Redirect};
use tracing::instrument;

use super::notify;
use crate::error::Result;
use crate::middleware::RequireSignedIn;
use crate::models::Notice;

/// Header navigation categories.
pub const NAV_CATEGORIES: &[&str] = &["New Arrivals", "Women", "Men", "Accessories", "Sale"];

/// Footer columns, as `(heading, links)`.
pub const FOOTER_COLUMNS: &[(&str, &[&str])] = &[
    ("Shop", &["New Arrivals", "Best Sellers", "Gift Cards"]),
    ("Customer Care", &["Contact Us", "Shipping & Returns", "Size Guide"]),
    ("Company", &["About Us", "Careers", "Sustainability"]),
];

/// Social platforms linked from the footer.
pub const SOCIAL_PLATFORMS: &[&str] = &["instagram", "facebook", "twitter", "pinterest"];

/// Browse a header navigation category.
#[instrument(skip(gate))]
pub async fn nav(
    RequireSignedIn(gate): RequireSignedIn,
    Path(category): Path<String>,
) -> Result<Redirect> {
    notify(gate, Notice::navigation(&category)).await
}

/// Open a footer page.
#[instrument(skip(gate))]
pub async fn show(
    RequireSignedIn(gate): RequireSignedIn,
    Path(name): Path<String>,
) -> Result<Redirect> {
    notify(gate, Notice::page(&name)).await
}

/// Follow a social link.
#[instrument(skip(gate))]
pub async fn social(
    RequireSignedIn(gate): RequireSignedIn,
    Path(platform): Path<String>,
) -> Result<Redirect> {
    notify(gate, Notice::social(&platform)).await
}
