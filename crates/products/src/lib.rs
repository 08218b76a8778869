//! Products domain module.
//!
//! This crate contains the catalog's product record and its business rules,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod category;
pub mod discount;
pub mod draft;
pub mod product;

pub use category::ProductCategory;
pub use discount::DiscountPercent;
pub use draft::{
    CATEGORY_MAX_LEN, DESCRIPTION_MAX_LEN, NAME_MAX_LEN, NAME_MIN_LEN, ProductDraft, SKU_MAX_LEN,
};
pub use product::{LOW_STOCK_THRESHOLD, ProductRecord, StockAdjustmentError};
