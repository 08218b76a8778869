use core::str::FromStr;
use serde::{Deserialize, Serialize};

use catalog_core::{DomainError, ValueObject};

/// Well-known catalog categories.
///
/// A record's `category` is free text; this enum only names the categories the
/// storefront groups products under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Technology,
    Clothing,
    Home,
    Sports,
    Books,
    Beauty,
    Automotive,
    Garden,
    Appliances,
    Toys,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 10] = [
        ProductCategory::Technology,
        ProductCategory::Clothing,
        ProductCategory::Home,
        ProductCategory::Sports,
        ProductCategory::Books,
        ProductCategory::Beauty,
        ProductCategory::Automotive,
        ProductCategory::Garden,
        ProductCategory::Appliances,
        ProductCategory::Toys,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProductCategory::Technology => "Technology",
            ProductCategory::Clothing => "Clothing",
            ProductCategory::Home => "Home",
            ProductCategory::Sports => "Sports",
            ProductCategory::Books => "Books",
            ProductCategory::Beauty => "Beauty",
            ProductCategory::Automotive => "Automotive",
            ProductCategory::Garden => "Garden",
            ProductCategory::Appliances => "Appliances",
            ProductCategory::Toys => "Toys",
        }
    }
}

impl ValueObject for ProductCategory {}

impl core::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductCategory {
    type Err = DomainError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ProductCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| DomainError::invalid_argument("category", format!("unknown category `{needle}`")))
    }
}
