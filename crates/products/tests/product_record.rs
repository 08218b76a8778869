use std::collections::HashMap;

use catalog_core::{DomainError, Entity, ProductId};
use catalog_products::{
    NAME_MAX_LEN, NAME_MIN_LEN, ProductCategory, ProductDraft, ProductRecord, StockAdjustmentError,
};
use rust_decimal::Decimal;
use serde_json::json;

fn lamp(id: i64, stock: i64) -> ProductDraft {
    ProductDraft::new(ProductId::new(id), "Desk Lamp", Decimal::new(10000, 2), "Home", stock)
}

#[test]
fn name_length_boundaries() {
    catalog_observability::init();

    for (len, ok) in [
        (NAME_MIN_LEN - 1, false),
        (NAME_MIN_LEN, true),
        (NAME_MAX_LEN, true),
        (NAME_MAX_LEN + 1, false),
    ] {
        let mut draft = lamp(1, 3);
        draft.name = "n".repeat(len);
        let result = ProductRecord::create(draft);
        assert_eq!(result.is_ok(), ok, "name length {len}");
        if let Err(err) = result {
            assert!(err.has("name"));
        }
    }
}

#[test]
fn price_boundaries() {
    let mut zero = lamp(1, 3);
    zero.price = Decimal::ZERO;
    let err = ProductRecord::create(zero).unwrap_err();
    assert_eq!(err.fields().collect::<Vec<_>>(), vec!["price"]);

    let mut cent = lamp(1, 3);
    cent.price = Decimal::new(1, 2);
    assert!(ProductRecord::create(cent).is_ok());
}

#[test]
fn stock_adjustments_are_guarded() {
    let mut product = ProductRecord::create(lamp(1, 3)).unwrap();

    assert!(matches!(
        product.adjust_stock(-5),
        Err(StockAdjustmentError::Insufficient { available: 3, requested: 5 })
    ));
    assert_eq!(product.stock(), 3);

    assert_eq!(product.adjust_stock(5), Ok(8));
    assert_eq!(product.stock(), 8);
}

#[test]
fn discount_calculation() {
    let product = ProductRecord::create(lamp(1, 3)).unwrap();

    assert_eq!(product.price_with_discount(Decimal::new(50, 0)).unwrap(), Decimal::new(5000, 2));

    let err = product.price_with_discount(Decimal::new(150, 0)).unwrap_err();
    assert!(matches!(err, DomainError::InvalidArgument { .. }));
}

#[test]
fn identity_drives_equality_and_map_keys() {
    let a = ProductRecord::create(lamp(10, 3)).unwrap();
    let mut other = lamp(10, 3);
    other.name = "Reading Lamp".to_string();
    let b = ProductRecord::create(other).unwrap();
    let c = ProductRecord::create(lamp(11, 3)).unwrap();

    assert_eq!(a, b);
    assert_ne!(a, c);

    let mut by_id: HashMap<ProductId, ProductRecord> = HashMap::new();
    for record in [a, b, c] {
        by_id.insert(*record.id(), record);
    }
    assert_eq!(by_id.len(), 2);
    assert_eq!(by_id[&ProductId::new(10)].name(), "Reading Lamp");
}

#[test]
fn describe_low_stock_marker() {
    let low = ProductRecord::create(lamp(1, 5)).unwrap();
    assert!(low.describe().contains("Low stock: 5"));

    let plenty = ProductRecord::create(lamp(1, 15)).unwrap();
    assert!(!plenty.describe().contains("Low stock"));
    assert_eq!(plenty.describe(), "Desk Lamp - Home - $100.00 - Available (Stock: 15)");
}

#[test]
fn json_payload_becomes_a_validated_record() {
    let payload = json!({
        "id": 42,
        "name": "Trail Running Shoes",
        "description": "Lightweight, grippy outsole",
        "price": "129.90",
        "category": "sports",
        "stock": 7,
        "image_url": "https://cdn.example.com/shoes.jpg",
        "sku": "SHOE-TR-42",
        "weight_grams": "310"
    });

    let product: ProductRecord = serde_json::from_value(payload).unwrap();
    assert_eq!(product.id_typed(), ProductId::new(42));
    assert_eq!(product.catalog_category(), Some(ProductCategory::Sports));
    assert!(product.is_available());
    assert!(product.is_low_stock());
    assert_eq!(product.weight_grams(), Some(Decimal::new(310, 0)));
}

#[test]
fn json_payload_reports_every_violation() {
    let payload = json!({
        "id": 43,
        "name": "X",
        "price": "0",
        "category": "",
        "stock": -1,
        "image_url": "not-a-url"
    });

    let draft: ProductDraft = serde_json::from_value(payload).unwrap();
    let err = ProductRecord::try_from(draft).unwrap_err();

    let fields: Vec<_> = err.fields().collect();
    assert_eq!(fields, vec!["name", "price", "category", "stock", "image_url"]);

    let domain: DomainError = err.into();
    assert!(domain.to_string().starts_with("validation failed: name:"));
}
