//! Unvalidated product input and the rule set it is checked against.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::ValidateUrl;

use catalog_core::{FieldViolation, ProductId};

use crate::category::ProductCategory;

pub const NAME_MIN_LEN: usize = 3;
pub const NAME_MAX_LEN: usize = 100;
pub const DESCRIPTION_MAX_LEN: usize = 500;
pub const CATEGORY_MAX_LEN: usize = 50;
pub const SKU_MAX_LEN: usize = 20;

/// URL schemes accepted for `image_url`.
const IMAGE_URL_SCHEMES: [&str; 3] = ["http://", "https://", "ftp://"];

/// Input a [`ProductRecord`](crate::ProductRecord) is created from.
///
/// `created_at` and `active` are optional here; creation fills in the current
/// time and `true` respectively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Decimal,
    pub category: String,
    pub stock: i64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub weight_grams: Option<Decimal>,
}

impl ProductDraft {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Decimal,
        category: impl Into<String>,
        stock: i64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            price,
            category: category.into(),
            stock,
            created_at: None,
            active: None,
            image_url: None,
            sku: None,
            weight_grams: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_catalog_category(mut self, category: ProductCategory) -> Self {
        self.category = category.as_str().to_string();
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn with_sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = Some(sku.into());
        self
    }

    pub fn with_weight_grams(mut self, grams: Decimal) -> Self {
        self.weight_grams = Some(grams);
        self
    }

    /// Check every field constraint and return all violations found.
    ///
    /// An empty result means the draft can be turned into a record.
    pub fn validate(&self) -> Vec<FieldViolation> {
        let mut violations = Vec::new();

        if self.name.trim().is_empty() {
            violations.push(FieldViolation::new("name", "is required"));
        } else if !(NAME_MIN_LEN..=NAME_MAX_LEN).contains(&char_len(&self.name)) {
            violations.push(FieldViolation::new(
                "name",
                format!("must be between {NAME_MIN_LEN} and {NAME_MAX_LEN} characters"),
            ));
        }

        if let Some(description) = &self.description {
            if char_len(description) > DESCRIPTION_MAX_LEN {
                violations.push(FieldViolation::new(
                    "description",
                    format!("cannot exceed {DESCRIPTION_MAX_LEN} characters"),
                ));
            }
        }

        if self.price <= Decimal::ZERO {
            violations.push(FieldViolation::new("price", "must be greater than 0"));
        }

        if self.category.trim().is_empty() {
            violations.push(FieldViolation::new("category", "is required"));
        } else if char_len(&self.category) > CATEGORY_MAX_LEN {
            violations.push(FieldViolation::new(
                "category",
                format!("cannot exceed {CATEGORY_MAX_LEN} characters"),
            ));
        }

        if self.stock < 0 {
            violations.push(FieldViolation::new("stock", "cannot be negative"));
        } else if u32::try_from(self.stock).is_err() {
            violations.push(FieldViolation::new(
                "stock",
                format!("cannot exceed {}", u32::MAX),
            ));
        }

        if let Some(url) = &self.image_url {
            if !has_image_url_scheme(url) || !url.validate_url() {
                violations.push(FieldViolation::new("image_url", "is not a valid URL"));
            }
        }

        if let Some(sku) = &self.sku {
            if char_len(sku) > SKU_MAX_LEN {
                violations.push(FieldViolation::new(
                    "sku",
                    format!("cannot exceed {SKU_MAX_LEN} characters"),
                ));
            }
        }

        if let Some(weight) = self.weight_grams {
            if weight < Decimal::ZERO {
                violations.push(FieldViolation::new("weight_grams", "cannot be negative"));
            }
        }

        violations
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn has_image_url_scheme(url: &str) -> bool {
    IMAGE_URL_SCHEMES.iter().any(|scheme| {
        url.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}
