//! Product route handlers.

use axum::{extract::Path, response::Redirect};
use tracing::instrument;

use super::notify;
use crate::error::{AppError, Result};
use crate::middleware::RequireSignedIn;
use crate::models::Notice;
use crate::services::catalog;

/// Display product details.
///
/// There is no product page; clicking a card shows a notice.
#[instrument(skip(gate))]
pub async fn show(
    RequireSignedIn(gate): RequireSignedIn,
    Path(handle): Path<String>,
) -> Result<Redirect> {
    let product = catalog::find_by_handle(&handle)
        .ok_or_else(|| AppError::NotFound(format!("Product: {handle}")))?;
    notify(gate, Notice::product_details(product.name)).await
}
