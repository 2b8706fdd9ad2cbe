//! The root page: auth screen or homepage, whichever the gate shows.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::Query,
    response::{IntoResponse, Response},
};
use roar_threads_core::Product;
use serde::Deserialize;
use tracing::instrument;

use super::{collections, pages};
use crate::error::Result;
use crate::filters;
use crate::gate::Surface;
use crate::middleware::{BrowserGate, cart_count, take_notice};
use crate::models::Notice;
use crate::services::catalog::{self, BRAND, Brand};

/// Which auth form to show.
#[derive(Debug, Default, Deserialize)]
pub struct AuthPageQuery {
    pub form: Option<String>,
}

impl AuthPageQuery {
    fn wants_signup(&self) -> bool {
        self.form.as_deref() == Some("signup")
    }
}

/// Product card display data for templates.
#[derive(Clone)]
pub struct ProductCard {
    pub name: &'static str,
    pub handle: String,
    pub price: String,
    pub original_price: String,
    pub image: &'static str,
    pub category: &'static str,
    pub stars: String,
    pub rating: String,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name,
            handle: product.handle(),
            price: product.price.to_string(),
            original_price: product.original_price.to_string(),
            image: product.image,
            category: product.category,
            stars: product.rating.stars(),
            rating: product.rating.to_string(),
        }
    }
}

/// Login / signup screen.
#[derive(Template, WebTemplate)]
#[template(path = "auth.html")]
pub struct AuthTemplate {
    pub brand: Brand,
    pub show_signup: bool,
    pub notice: Option<Notice>,
}

/// Homepage with the product grid.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub brand: Brand,
    pub user_name: String,
    pub cart_count: u32,
    pub products: Vec<ProductCard>,
    pub collections: &'static [(&'static str, &'static str)],
    pub nav_categories: &'static [&'static str],
    pub footer_columns: &'static [(&'static str, &'static [&'static str])],
    pub social_platforms: &'static [&'static str],
    pub notice: Option<Notice>,
}

/// Display the surface the gate selects.
#[instrument(skip_all, fields(form = ?query.form))]
pub async fn index(mut gate: BrowserGate, Query(query): Query<AuthPageQuery>) -> Result<Response> {
    let surface = gate.refresh_visibility();
    let user = gate.current_user();
    let session = gate.commit().await?;
    let notice = take_notice(&session).await?;

    let response = match (surface, user) {
        (Surface::Home, Some(user)) => HomeTemplate {
            brand: BRAND,
            user_name: user.display_name().to_string(),
            cart_count: cart_count(&session).await?,
            products: catalog::products().iter().map(ProductCard::from).collect(),
            collections: collections::FEATURED,
            nav_categories: pages::NAV_CATEGORIES,
            footer_columns: pages::FOOTER_COLUMNS,
            social_platforms: pages::SOCIAL_PLATFORMS,
            notice,
        }
        .into_response(),
        _ => AuthTemplate {
            brand: BRAND,
            show_signup: query.wants_signup(),
            notice,
        }
        .into_response(),
    };

    Ok(response)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_product_card() {
        let card = ProductCard::from(catalog::find_by_handle("heritage-cashmere-coat").unwrap());
        assert_eq!(card.price, "$1,899");
        assert_eq!(card.original_price, "$2,199");
        assert_eq!(card.stars, "★★★★☆");
        assert_eq!(card.rating, "4.9");
    }

    #[test]
    fn test_form_toggle() {
        let signup = AuthPageQuery {
            form: Some("signup".to_string()),
        };
        assert!(signup.wants_signup());
        assert!(!AuthPageQuery::default().wants_signup());
        assert!(
            !AuthPageQuery {
                form: Some("login".to_string())
            }
            .wants_signup()
        );
    }
}
