//! Cart route handlers.
//!
//! The cart is a counter in the browser's session. Nothing is stored
//! per item.

use axum::{Form, response::Redirect};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::middleware::{RequireSignedIn, increment_cart, set_notice};
use crate::models::Notice;
use crate::services::catalog;

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub handle: String,
}

/// Add a product to the cart.
#[instrument(skip(gate))]
pub async fn add(
    RequireSignedIn(gate): RequireSignedIn,
    Form(form): Form<AddToCartForm>,
) -> Result<Redirect> {
    let product = catalog::find_by_handle(&form.handle)
        .ok_or_else(|| AppError::NotFound(format!("Product: {}", form.handle)))?;

    let session = gate.commit().await?;
    let count = increment_cart(&session).await?;
    tracing::info!(product = product.name, count, "Added to cart");

    set_notice(&session, Notice::added_to_cart(product.name)).await?;
    Ok(Redirect::to("/"))
}
