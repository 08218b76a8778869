use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use catalog_core::{DomainResult, Entity, ProductId, ValidationError};

use crate::category::ProductCategory;
use crate::discount::DiscountPercent;
use crate::draft::ProductDraft;

/// Stock strictly below this (and above zero) counts as low stock.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// Why a stock adjustment was refused. Stock is left unchanged in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StockAdjustmentError {
    /// Removing `requested` units would take stock below zero.
    #[error("insufficient stock: {available} available, {requested} requested")]
    Insufficient { available: u32, requested: u64 },

    /// The resulting stock level is not representable.
    #[error("stock adjustment overflows the maximum stock level")]
    Overflow,
}

/// A validated catalog product.
///
/// Identity is the `id` alone: equality and hashing ignore every other field.
/// `stock` is the only field that changes after creation, and only through
/// [`ProductRecord::adjust_stock`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ProductDraft")]
pub struct ProductRecord {
    id: ProductId,
    name: String,
    description: Option<String>,
    price: Decimal,
    category: String,
    stock: u32,
    created_at: DateTime<Utc>,
    active: bool,
    image_url: Option<String>,
    sku: Option<String>,
    weight_grams: Option<Decimal>,
}

impl ProductRecord {
    /// Validate `draft` and build a record from it.
    ///
    /// Every violated constraint is reported. Missing `created_at` defaults to
    /// now, missing `active` to `true`.
    pub fn create(draft: ProductDraft) -> Result<Self, ValidationError> {
        if let Some(err) = ValidationError::from_violations(draft.validate()) {
            tracing::debug!(
                product_id = %draft.id,
                violations = err.violations().len(),
                fields = ?err.fields().collect::<Vec<_>>(),
                "product draft rejected"
            );
            return Err(err);
        }

        // Range already checked by `validate`.
        let stock = u32::try_from(draft.stock)
            .map_err(|_| ValidationError::single("stock", "out of range"))?;

        let record = Self {
            id: draft.id,
            name: draft.name,
            description: draft.description,
            price: draft.price,
            category: draft.category,
            stock,
            created_at: draft.created_at.unwrap_or_else(Utc::now),
            active: draft.active.unwrap_or(true),
            image_url: draft.image_url,
            sku: draft.sku,
            weight_grams: draft.weight_grams,
        };

        tracing::debug!(product_id = %record.id, "product record created");
        Ok(record)
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// The well-known category matching the free-text `category`, if any.
    pub fn catalog_category(&self) -> Option<ProductCategory> {
        self.category.parse().ok()
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn sku(&self) -> Option<&str> {
        self.sku.as_deref()
    }

    pub fn weight_grams(&self) -> Option<Decimal> {
        self.weight_grams
    }

    /// Active and in stock.
    pub fn is_available(&self) -> bool {
        self.active && self.stock > 0
    }

    pub fn is_low_stock(&self) -> bool {
        self.stock > 0 && self.stock < LOW_STOCK_THRESHOLD
    }

    /// `price * (1 - percent / 100)`.
    ///
    /// Fails with `DomainError::InvalidArgument` unless `percent` lies in
    /// `[0, 100]`. The result is not rounded.
    pub fn price_with_discount(&self, percent: Decimal) -> DomainResult<Decimal> {
        let discount = DiscountPercent::new(percent)?;
        Ok(discount.apply_to(self.price))
    }

    /// Add `delta` units (negative to remove) and return the new stock level.
    ///
    /// A refused adjustment leaves stock untouched.
    pub fn adjust_stock(&mut self, delta: i64) -> Result<u32, StockAdjustmentError> {
        let target = i64::from(self.stock)
            .checked_add(delta)
            .ok_or(StockAdjustmentError::Overflow)?;

        if target < 0 {
            let err = StockAdjustmentError::Insufficient {
                available: self.stock,
                requested: delta.unsigned_abs(),
            };
            tracing::debug!(product_id = %self.id, delta, %err, "stock adjustment refused");
            return Err(err);
        }

        let new_stock = u32::try_from(target).map_err(|_| {
            tracing::debug!(product_id = %self.id, delta, "stock adjustment overflows");
            StockAdjustmentError::Overflow
        })?;

        tracing::trace!(product_id = %self.id, from = self.stock, to = new_stock, "stock adjusted");
        self.stock = new_stock;
        Ok(new_stock)
    }

    /// One-line summary, e.g. `Desk Lamp - Home - $19.50 - Available (Low stock: 4)`.
    pub fn describe(&self) -> String {
        let price = self
            .price
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let availability = if self.is_available() {
            "Available"
        } else {
            "Unavailable"
        };
        let stock_info = if self.is_low_stock() {
            format!("Low stock: {}", self.stock)
        } else {
            format!("Stock: {}", self.stock)
        };

        format!(
            "{} - {} - ${:.2} - {} ({})",
            self.name, self.category, price, availability, stock_info
        )
    }
}

impl TryFrom<ProductDraft> for ProductRecord {
    type Error = ValidationError;

    fn try_from(draft: ProductDraft) -> Result<Self, Self::Error> {
        Self::create(draft)
    }
}

impl Entity for ProductRecord {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl PartialEq for ProductRecord {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self, other) || self.id == other.id
    }
}

impl Eq for ProductRecord {}

impl core::hash::Hash for ProductRecord {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        core::hash::Hash::hash(&self.id, state);
    }
}

impl core::fmt::Display for ProductRecord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.describe())
    }
}
