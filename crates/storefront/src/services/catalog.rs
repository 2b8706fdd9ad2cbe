//! The static product catalog.
//!
//! Four products, fixed at process start. Search is a linear,
//! case-insensitive substring match on name and category.

use std::sync::LazyLock;

use roar_threads_core::{Price, Product, Rating};

use crate::models::Notice;

/// Brand copy shown in the header and hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brand {
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
}

pub const BRAND: Brand = Brand {
    name: "Roar Threads",
    tagline: "Where Heritage Meets High Fashion - Roar Threads: Crafted for the Elite",
    description: "High End Fashion",
};

static PRODUCTS: LazyLock<Vec<Product>> = LazyLock::new(|| {
    vec![
        Product {
            name: "Heritage Cashmere Coat",
            price: Price::usd(1899),
            original_price: Price::usd(2199),
            image: "luxury coat",
            category: "Outerwear",
            rating: Rating::from_tenths(49),
        },
        Product {
            name: "Signature Silk Dress",
            price: Price::usd(799),
            original_price: Price::usd(899),
            image: "silk dress",
            category: "Dresses",
            rating: Rating::from_tenths(48),
        },
        Product {
            name: "Artisan Leather Handbag",
            price: Price::usd(1299),
            original_price: Price::usd(1499),
            image: "leather handbag",
            category: "Accessories",
            rating: Rating::from_tenths(50),
        },
        Product {
            name: "Tailored Wool Blazer",
            price: Price::usd(1199),
            original_price: Price::usd(1399),
            image: "wool blazer",
            category: "Blazers",
            rating: Rating::from_tenths(49),
        },
    ]
});

/// Every product, in display order.
#[must_use]
pub fn products() -> &'static [Product] {
    &PRODUCTS
}

/// Look a product up by its URL handle.
#[must_use]
pub fn find_by_handle(handle: &str) -> Option<&'static Product> {
    products().iter().find(|p| p.handle() == handle)
}

/// Products whose name or category contains `query`, ignoring case.
#[must_use]
pub fn search(query: &str) -> Vec<&'static Product> {
    let needle = query.to_lowercase();
    products().iter().filter(|p| p.matches(&needle)).collect()
}

/// Run a search and phrase the outcome as a notice.
///
/// Returns `None` for a blank query.
#[must_use]
pub fn search_notice(query: &str) -> Option<Notice> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    let found = search(query).len();
    let message = if found > 0 {
        format!(
            "Found {found} products matching \"{query}\". Search results page would be implemented in a real application."
        )
    } else {
        format!(
            "No products found matching \"{query}\". Try searching for \"cashmere\", \"silk\", \"leather\", or \"wool\"."
        )
    };
    Some(Notice::success("Search Results", message))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_fixed() {
        let names: Vec<_> = products().iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            [
                "Heritage Cashmere Coat",
                "Signature Silk Dress",
                "Artisan Leather Handbag",
                "Tailored Wool Blazer",
            ]
        );
        let coat = products().first().unwrap();
        assert_eq!(coat.price.to_string(), "$1,899");
        assert_eq!(coat.original_price.to_string(), "$2,199");
    }

    #[test]
    fn test_search_by_name_and_category() {
        assert_eq!(search("SILK").len(), 1);
        assert_eq!(search("outerwear").first().unwrap().name, "Heritage Cashmere Coat");
        assert_eq!(search("e").len(), 4);
        assert_eq!(search("er").len(), 3);
        assert!(search("denim").is_empty());
    }

    #[test]
    fn test_search_notice_hit() {
        let notice = search_notice("  wool ").unwrap();
        assert_eq!(notice.title, "Search Results");
        assert_eq!(
            notice.message,
            "Found 1 products matching \"wool\". Search results page would be implemented in a real application."
        );
    }

    #[test]
    fn test_search_notice_miss() {
        let notice = search_notice("denim").unwrap();
        assert_eq!(
            notice.message,
            "No products found matching \"denim\". Try searching for \"cashmere\", \"silk\", \"leather\", or \"wool\"."
        );
    }

    #[test]
    fn test_blank_search_does_nothing() {
        assert!(search_notice("").is_none());
        assert!(search_notice("   ").is_none());
    }

    #[test]
    fn test_find_by_handle() {
        let product = find_by_handle("artisan-leather-handbag").unwrap();
        assert_eq!(product.category, "Accessories");
        assert!(find_by_handle("missing").is_none());
    }
}
