//! Search route handler.

use axum::{extract::Query, response::Redirect};
use serde::Deserialize;
use tracing::instrument;

use super::notify;
use crate::error::Result;
use crate::middleware::RequireSignedIn;
use crate::services::catalog;

/// Search query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// Report how many products match. Blank queries do nothing.
#[instrument(skip(gate))]
pub async fn search(
    RequireSignedIn(gate): RequireSignedIn,
    Query(query): Query<SearchQuery>,
) -> Result<Redirect> {
    match catalog::search_notice(&query.q) {
        Some(notice) => notify(gate, notice).await,
        None => {
            gate.commit().await?;
            Ok(Redirect::to("/"))
        }
    }
}
