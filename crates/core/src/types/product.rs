//! Static catalog entries.

use core::fmt;

use serde::Serialize;

use super::price::Price;

/// A star rating stored in tenths (`49` is 4.9 stars).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    /// Highest representable rating, 5.0 stars.
    pub const MAX_TENTHS: u8 = 50;

    /// Create a rating from tenths of a star, clamped to 5.0.
    #[must_use]
    pub const fn from_tenths(tenths: u8) -> Self {
        if tenths > Self::MAX_TENTHS {
            Self(Self::MAX_TENTHS)
        } else {
            Self(tenths)
        }
    }

    /// Whole stars (the rating rounded down).
    #[must_use]
    pub const fn whole_stars(self) -> u8 {
        self.0 / 10
    }

    /// Whether the rating has a fractional part.
    #[must_use]
    pub const fn has_fraction(self) -> bool {
        self.0 % 10 != 0
    }

    /// Filled stars for each whole star, plus one hollow star for any fraction.
    #[must_use]
    pub fn stars(self) -> String {
        let mut out = "★".repeat(usize::from(self.whole_stars()));
        if self.has_fraction() {
            out.push('☆');
        }
        out
    }
}

/// Whole ratings print without a decimal (`5`), others with one (`4.9`).
impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_fraction() {
            write!(f, "{}.{}", self.0 / 10, self.0 % 10)
        } else {
            write!(f, "{}", self.0 / 10)
        }
    }
}

/// A read-only catalog entry, fixed at process start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub name: &'static str,
    pub price: Price,
    pub original_price: Price,
    /// Short caption shown in place of a product photo.
    pub image: &'static str,
    pub category: &'static str,
    pub rating: Rating,
}

impl Product {
    /// URL handle derived from the name, e.g. `heritage-cashmere-coat`.
    #[must_use]
    pub fn handle(&self) -> String {
        let mut handle = String::with_capacity(self.name.len());
        for word in self
            .name
            .split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|w| !w.is_empty())
        {
            if !handle.is_empty() {
                handle.push('-');
            }
            handle.push_str(&word.to_ascii_lowercase());
        }
        handle
    }

    /// Case-insensitive substring match on name or category.
    ///
    /// `needle` must already be lowercase.
    #[must_use]
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.category.to_lowercase().contains(needle)
    }
}
