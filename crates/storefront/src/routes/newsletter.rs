//! Newsletter signup route handler.

use axum::{Form, response::Redirect};
use roar_threads_core::Email;
use serde::Deserialize;
use tracing::instrument;

use super::notify;
use crate::error::Result;
use crate::middleware::RequireSignedIn;
use crate::models::Notice;

/// Newsletter signup form data.
#[derive(Debug, Deserialize)]
pub struct NewsletterForm {
    #[serde(default)]
    pub email: String,
}

/// Subscribe to the newsletter.
///
/// Nothing is sent anywhere; a valid address gets the welcome notice.
#[instrument(skip_all)]
pub async fn subscribe(
    RequireSignedIn(gate): RequireSignedIn,
    Form(form): Form<NewsletterForm>,
) -> Result<Redirect> {
    let notice = match Email::parse(form.email.trim()) {
        Ok(_) => Notice::newsletter_subscribed(),
        Err(err) => {
            tracing::debug!(error = %err, "Newsletter signup rejected");
            Notice::error("Please enter a valid email address.")
        }
    };
    notify(gate, notice).await
}
