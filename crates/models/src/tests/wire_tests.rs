use chrono::{TimeZone, Utc};
use serde_json::json;
use uuid::Uuid;

use crate::product::{self, ProductInput};

fn sample_input() -> ProductInput {
    ProductInput {
        product_code: "P1".into(),
        product_name: "Widget".into(),
        product_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap().fixed_offset(),
        product_origin_price: 10.0,
        quantity: 5,
        product_store_code: "S2".into(),
    }
}

#[test]
fn record_serializes_with_wire_names() {
    let record = product::Model {
        id: Uuid::new_v4(),
        product_code: "P1".into(),
        product_name: "Widget".into(),
        product_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap().fixed_offset(),
        product_origin_price: 10.0,
        quantity: 5,
        product_store_code: "S2".into(),
    };
    let v = serde_json::to_value(&record).unwrap();
    let obj = v.as_object().unwrap();
    for key in [
        "_id",
        "ProductCode",
        "ProductName",
        "ProductDate",
        "ProductOriginPrice",
        "Quantity",
        "ProductStoreCode",
    ] {
        assert!(obj.contains_key(key), "missing wire key {key}");
    }
    assert_eq!(obj.len(), 7);
    assert_eq!(v["ProductOriginPrice"], json!(10.0));
    assert_eq!(v["Quantity"], json!(5));
}

#[test]
fn input_accepts_bare_date() {
    let input: ProductInput = serde_json::from_value(json!({
        "ProductCode": "P1",
        "ProductName": "Widget",
        "ProductDate": "2024-01-01",
        "ProductOriginPrice": 10,
        "Quantity": 5,
        "ProductStoreCode": "S2"
    }))
    .unwrap();
    assert_eq!(
        input.product_date,
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap().fixed_offset()
    );
}

#[test]
fn input_accepts_rfc3339_date() {
    let input: ProductInput = serde_json::from_value(json!({
        "ProductCode": "P1",
        "ProductName": "Widget",
        "ProductDate": "2024-01-01T12:30:00+02:00",
        "ProductOriginPrice": 10.5,
        "Quantity": 5,
        "ProductStoreCode": "S2"
    }))
    .unwrap();
    assert_eq!(input.product_date.to_rfc3339(), "2024-01-01T12:30:00+02:00");
}

#[test]
fn input_rejects_unparseable_date() {
    let res: Result<ProductInput, _> = serde_json::from_value(json!({
        "ProductCode": "P1",
        "ProductName": "Widget",
        "ProductDate": "01/02/2024",
        "ProductOriginPrice": 10,
        "Quantity": 5,
        "ProductStoreCode": "S2"
    }));
    assert!(res.is_err());
}

#[test]
fn input_rejects_string_price() {
    // No silent coercion: a price sent as a string is a deserialization error.
    let res: Result<ProductInput, _> = serde_json::from_value(json!({
        "ProductCode": "P1",
        "ProductName": "Widget",
        "ProductDate": "2024-01-01",
        "ProductOriginPrice": "abc",
        "Quantity": 5,
        "ProductStoreCode": "S2"
    }));
    assert!(res.is_err());
}

#[test]
fn validate_accepts_good_input() {
    assert!(sample_input().validate().is_ok());
}

#[test]
fn validate_collects_all_reasons() {
    let mut input = sample_input();
    input.product_code = "  ".into();
    input.product_name = "".into();
    input.product_origin_price = 0.0;
    let err = input.validate().unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("ProductCode"));
    assert!(msg.contains("ProductName"));
    assert!(msg.contains("ProductOriginPrice"));
}

#[test]
fn validate_rejects_zero_and_negative_price() {
    for price in [0.0, -5.0] {
        let mut input = sample_input();
        input.product_origin_price = price;
        assert!(input.validate().is_err(), "price {price} should be rejected");
    }
}

#[test]
fn validate_rejects_non_finite_price() {
    for price in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let mut input = sample_input();
        input.product_origin_price = price;
        assert!(input.validate().is_err());
    }
}

#[test]
fn quantity_has_no_range_constraint() {
    let mut input = sample_input();
    input.quantity = -42;
    assert!(input.validate().is_ok());
}
