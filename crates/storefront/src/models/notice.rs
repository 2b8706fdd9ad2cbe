//! Modal notices shown after user actions.

use serde::{Deserialize, Serialize};

/// Tone of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    #[default]
    Success,
    Error,
}

/// A modal dialog: a title and a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub level: NoticeLevel,
}

impl Notice {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            level: NoticeLevel::Success,
        }
    }

    /// A blocking validation message. Titled like the browser alert it replaces.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            title: "Please check your details".to_string(),
            message: message.into(),
            level: NoticeLevel::Error,
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }

    /// Shown after clicking a product card.
    #[must_use]
    pub fn product_details(name: &str) -> Self {
        Self::success(
            "Product Details",
            format!(
                "Viewing {name}. Full product page would be implemented in a real application."
            ),
        )
    }

    /// Shown after adding a product to the cart.
    #[must_use]
    pub fn added_to_cart(name: &str) -> Self {
        Self::success("Added to Cart", format!("{name} has been added to your cart!"))
    }

    /// Shown after a newsletter signup.
    #[must_use]
    pub fn newsletter_subscribed() -> Self {
        Self::success(
            "Newsletter Subscription",
            "Thank you for subscribing! You'll receive 15% off your first purchase via email.",
        )
    }

    #[must_use]
    pub fn collection(name: &str) -> Self {
        Self::success(
            "Collection",
            format!(
                "Browsing {name} collection. Product listing would be implemented in a real application."
            ),
        )
    }

    #[must_use]
    pub fn navigation(category: &str) -> Self {
        Self::success(
            "Navigation",
            format!(
                "Browsing {category} section. Category pages would be implemented in a real application."
            ),
        )
    }

    /// Footer links (About Us, Careers, Size Guide, ...).
    #[must_use]
    pub fn page(name: &str) -> Self {
        Self::success(
            "Page Navigation",
            format!("{name} page would be implemented in a real application."),
        )
    }

    /// Social links. `platform` is shown with its first letter capitalized.
    #[must_use]
    pub fn social(platform: &str) -> Self {
        Self::success(
            "Social Media",
            format!("Opening {} page in a new tab.", capitalize(platform)),
        )
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_notices() {
        let notice = Notice::product_details("Signature Silk Dress");
        assert_eq!(notice.title, "Product Details");
        assert_eq!(
            notice.message,
            "Viewing Signature Silk Dress. Full product page would be implemented in a real application."
        );

        let notice = Notice::added_to_cart("Signature Silk Dress");
        assert_eq!(notice.message, "Signature Silk Dress has been added to your cart!");
        assert!(!notice.is_error());
    }

    #[test]
    fn test_navigation_stub_notices() {
        assert_eq!(
            Notice::collection("Heritage").message,
            "Browsing Heritage collection. Product listing would be implemented in a real application."
        );
        assert_eq!(Notice::navigation("Women").title, "Navigation");
        assert_eq!(
            Notice::page("Size Guide").message,
            "Size Guide page would be implemented in a real application."
        );
        assert_eq!(
            Notice::social("instagram").message,
            "Opening Instagram page in a new tab."
        );
        assert_eq!(Notice::social("").message, "Opening  page in a new tab.");
    }

    #[test]
    fn test_error_notice() {
        let notice = Notice::error("Passwords do not match.");
        assert!(notice.is_error());
        assert_eq!(notice.message, "Passwords do not match.");
    }
}
