//! Integration test harness for the Roar Threads storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p roar-threads-integration-tests
//! ```
//!
//! Each test boots its own server on `127.0.0.1:0` with the simulated
//! identity provider set to answer instantly. A [`Browser`] is a
//! `reqwest` client with its own cookie jar, so two browsers never share a
//! session.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::net::SocketAddr;
use std::time::Duration;

use reqwest::{Client, Response, redirect};
use roar_threads_storefront::{config::StorefrontConfig, state::AppState};

/// A running storefront.
pub struct TestServer {
    addr: SocketAddr,
}

impl TestServer {
    /// Start a storefront with test configuration.
    pub async fn spawn() -> Self {
        let config = StorefrontConfig {
            oauth_delay: Duration::ZERO,
            ..StorefrontConfig::default()
        };
        let app = roar_threads_storefront::app(AppState::new(config));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                panic!("test server failed: {e}");
            }
        });

        Self { addr }
    }

    /// Absolute URL for `path`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// A fresh browser that follows redirects.
    #[must_use]
    pub fn browser(&self) -> Browser<'_> {
        Browser::new(self, redirect::Policy::limited(5))
    }

    /// A fresh browser that stops at redirects.
    #[must_use]
    pub fn browser_without_redirects(&self) -> Browser<'_> {
        Browser::new(self, redirect::Policy::none())
    }
}

/// One browser: an HTTP client with its own cookie jar.
pub struct Browser<'a> {
    server: &'a TestServer,
    client: Client,
}

impl<'a> Browser<'a> {
    fn new(server: &'a TestServer, policy: redirect::Policy) -> Self {
        let client = Client::builder()
            .cookie_store(true)
            .redirect(policy)
            .build()
            .unwrap();
        Self { server, client }
    }

    /// GET `path`.
    pub async fn get(&self, path: &str) -> Response {
        self.client.get(self.server.url(path)).send().await.unwrap()
    }

    /// POST `fields` as a form to `path`.
    pub async fn post(&self, path: &str, fields: &[(&str, &str)]) -> Response {
        self.client
            .post(self.server.url(path))
            .form(fields)
            .send()
            .await
            .unwrap()
    }

    /// GET `path` and return the body.
    pub async fn page(&self, path: &str) -> String {
        self.get(path).await.text().await.unwrap()
    }

    /// POST a form to `path` and return the body of wherever it lands.
    pub async fn submit(&self, path: &str, fields: &[(&str, &str)]) -> String {
        self.post(path, fields).await.text().await.unwrap()
    }

    /// Sign in with a valid email and password.
    pub async fn sign_in(&self) -> String {
        self.submit(
            "/auth/login",
            &[("email", "shopper@example.com"), ("password", "secret123")],
        )
        .await
    }
}

/// True when `body` is the auth screen.
#[must_use]
pub fn is_auth_page(body: &str) -> bool {
    body.contains("auth-container") && !body.contains("products-grid")
}

/// True when `body` is the homepage.
#[must_use]
pub fn is_homepage(body: &str) -> bool {
    body.contains("products-grid") && !body.contains("auth-container")
}

/// Text of the cart counter badge, if present.
#[must_use]
pub fn cart_badge(body: &str) -> Option<&str> {
    let start = body.find("<span class=\"cart-count\">")? + "<span class=\"cart-count\">".len();
    let rest = body.get(start..)?;
    rest.find('<').and_then(|end| rest.get(..end))
}
