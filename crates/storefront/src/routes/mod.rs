//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Auth page (signed out) or homepage (signed in)
//! GET  /health                 - Health check
//!
//! # Auth
//! POST /auth/login             - Email/password sign-in
//! POST /auth/signup            - Account creation
//! POST /auth/logout            - Sign-out
//! POST /auth/oauth/{provider}  - Google / Apple sign-in
//!
//! # Homepage (signed in, otherwise redirected to /)
//! GET  /search?q=              - Catalog search, reported as a notice
//! GET  /products/{handle}      - Product details notice
//! POST /cart/add               - Bump the cart counter
//! POST /newsletter             - Newsletter signup
//! GET  /collections/{name}     - Collection notice
//! GET  /nav/{category}         - Category navigation notice
//! GET  /pages/{name}           - Footer page notice
//! GET  /social/{platform}      - Social link notice
//! ```
//!
//! Every action answers with a redirect to `/`, which renders whatever notice
//! the action queued.

pub mod auth;
pub mod cart;
pub mod collections;
pub mod home;
pub mod newsletter;
pub mod pages;
pub mod products;
pub mod search;

use axum::{
    Router, middleware as axum_middleware,
    response::Redirect,
    routing::{get, post},
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::error::Result;
use crate::middleware::{
    BrowserGate, create_session_layer, request_id_middleware, security_headers_middleware,
    set_notice,
};
use crate::models::Notice;
use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/signup", post(auth::signup))
        .route("/logout", post(auth::logout))
        .route("/oauth/{provider}", post(auth::oauth))
}

/// Create all page and action routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .nest("/auth", auth_routes())
        .route("/search", get(search::search))
        .route("/products/{handle}", get(products::show))
        .route("/cart/add", post(cart::add))
        .route("/newsletter", post(newsletter::subscribe))
        .route("/collections/{name}", get(collections::show))
        .route("/nav/{category}", get(pages::nav))
        .route("/pages/{name}", get(pages::show))
        .route("/social/{platform}", get(pages::social))
}

/// Build the complete application: routes, static files and middleware.
///
/// Sentry layers are added by the binary around this router.
pub fn app(state: AppState) -> Router {
    let session_layer = create_session_layer(state.session_store().clone(), state.config());

    Router::new()
        .route("/health", get(health))
        .merge(routes())
        .nest_service("/static", ServeDir::new(static_dir()))
        .layer(session_layer)
        .layer(axum_middleware::from_fn(security_headers_middleware))
        .layer(axum_middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running.
async fn health() -> &'static str {
    "ok"
}

fn static_dir() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("static")
}

/// Write the gate's changes, queue `notice` and go back to `/`.
async fn notify(gate: BrowserGate, notice: Notice) -> Result<Redirect> {
    notify_at(gate, notice, "/").await
}

async fn notify_at(gate: BrowserGate, notice: Notice, to: &str) -> Result<Redirect> {
    let session = gate.commit().await?;
    set_notice(&session, notice).await?;
    Ok(Redirect::to(to))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::str::FromStr;
    use std::sync::Arc;
    use std::time::Duration;

    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
        response::Response,
    };
    use chrono::{TimeDelta, Utc};
    use tower::ServiceExt;
    use tower_sessions::{SessionStore, session::Id};

    use super::*;
    use crate::config::StorefrontConfig;
    use crate::gate::ManualClock;
    use crate::models::session_keys;
    use crate::services::provider::SimulatedProvider;

    fn test_app() -> Router {
        app(AppState::new(StorefrontConfig::default()))
    }

    fn state_with_clock(clock: Arc<ManualClock>) -> AppState {
        AppState::with_parts(
            StorefrontConfig::default(),
            Arc::new(SimulatedProvider::new(Duration::ZERO)),
            clock,
        )
    }

    /// Sign in through the login form and return the session cookie.
    async fn sign_in(state: &AppState) -> String {
        let resp = app(state.clone())
            .oneshot(
                Request::post("/auth/login")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("email=ada%40example.com&password=secret123"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers()[header::LOCATION], "/");
        let set_cookie = resp.headers()[header::SET_COOKIE].to_str().unwrap();
        set_cookie.split(';').next().unwrap().to_string()
    }

    fn session_id(cookie: &str) -> Id {
        let (_, value) = cookie.split_once('=').unwrap();
        Id::from_str(value).unwrap()
    }

    async fn stored_record(state: &AppState, cookie: &str) -> Option<serde_json::Value> {
        let record = state
            .session_store()
            .load(&session_id(cookie))
            .await
            .unwrap()
            .unwrap();
        record.data.get(session_keys::AUTH).cloned()
    }

    async fn corrupt_record(state: &AppState, cookie: &str) {
        let store = state.session_store();
        let mut record = store.load(&session_id(cookie)).await.unwrap().unwrap();
        record.data.insert(
            session_keys::AUTH.to_string(),
            serde_json::Value::String("not json".to_string()),
        );
        store.save(&record).await.unwrap();
    }

    async fn send(state: &AppState, request: Request<Body>) -> Response {
        app(state.clone()).oneshot(request).await.unwrap()
    }

    async fn body_text(resp: Response) -> String {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn get_with(uri: &str, cookie: &str) -> Request<Body> {
        Request::get(uri)
            .header(header::COOKIE, cookie)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let resp = test_app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.headers().contains_key("x-request-id"));
        assert!(resp.headers().contains_key("content-security-policy"));
    }

    #[tokio::test]
    async fn test_signed_out_actions_redirect_home() {
        let resp = test_app()
            .oneshot(Request::get("/search?q=silk").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers()[header::LOCATION], "/");
    }

    #[tokio::test]
    async fn test_root_renders_auth_page() {
        let resp = test_app()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let content_type = resp.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/html"));
    }

    #[tokio::test]
    async fn test_signed_in_root_renders_homepage() {
        let state = state_with_clock(Arc::new(ManualClock::at(Utc::now())));
        let cookie = sign_in(&state).await;

        let body = body_text(send(&state, get_with("/", &cookie)).await).await;
        assert!(body.contains("products-grid"));
        assert!(!body.contains("auth-container"));
        assert!(stored_record(&state, &cookie).await.is_some());
    }

    #[tokio::test]
    async fn test_expired_record_shows_auth_page_and_is_removed() {
        let clock = Arc::new(ManualClock::at(Utc::now()));
        let state = state_with_clock(Arc::clone(&clock));
        let cookie = sign_in(&state).await;

        clock.advance(TimeDelta::days(3));
        let resp = send(&state, get_with("/", &cookie)).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_text(resp).await;
        assert!(body.contains("auth-container"));
        assert!(!body.contains("products-grid"));
        assert!(stored_record(&state, &cookie).await.is_none());
    }

    #[tokio::test]
    async fn test_expired_record_is_removed_when_action_redirects() {
        let clock = Arc::new(ManualClock::at(Utc::now()));
        let state = state_with_clock(Arc::clone(&clock));
        let cookie = sign_in(&state).await;

        clock.advance(TimeDelta::days(3));
        let resp = send(&state, get_with("/search?q=silk", &cookie)).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers()[header::LOCATION], "/");
        assert!(stored_record(&state, &cookie).await.is_none());
    }

    #[tokio::test]
    async fn test_malformed_record_shows_auth_page_and_is_removed() {
        let state = state_with_clock(Arc::new(ManualClock::at(Utc::now())));
        let cookie = sign_in(&state).await;
        corrupt_record(&state, &cookie).await;

        let body = body_text(send(&state, get_with("/", &cookie)).await).await;
        assert!(body.contains("auth-container"));
        assert!(stored_record(&state, &cookie).await.is_none());
    }

    #[tokio::test]
    async fn test_malformed_record_is_removed_when_oauth_provider_is_unknown() {
        let state = state_with_clock(Arc::new(ManualClock::at(Utc::now())));
        let cookie = sign_in(&state).await;
        corrupt_record(&state, &cookie).await;

        let resp = send(
            &state,
            Request::post("/auth/oauth/myspace")
                .header(header::COOKIE, &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert!(stored_record(&state, &cookie).await.is_none());
    }
}
