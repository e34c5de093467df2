use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors;

/// Product record as stored and as sent over the wire.
///
/// Wire field names keep the shape clients already speak:
/// `{_id, ProductCode, ProductName, ProductDate, ProductOriginPrice,
/// Quantity, ProductStoreCode}`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[serde(rename = "ProductCode")]
    pub product_code: String,
    #[serde(rename = "ProductName")]
    pub product_name: String,
    #[serde(rename = "ProductDate", with = "wire_date")]
    pub product_date: DateTimeWithTimeZone,
    #[serde(rename = "ProductOriginPrice")]
    pub product_origin_price: f64,
    #[serde(rename = "Quantity")]
    pub quantity: i64,
    #[serde(rename = "ProductStoreCode")]
    pub product_store_code: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

/// The six business fields a client submits on create and update.
/// Same wire names as [`Model`], minus the store-assigned `_id`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductInput {
    #[serde(rename = "ProductCode")]
    pub product_code: String,
    #[serde(rename = "ProductName")]
    pub product_name: String,
    #[serde(rename = "ProductDate", with = "wire_date")]
    pub product_date: DateTimeWithTimeZone,
    #[serde(rename = "ProductOriginPrice")]
    pub product_origin_price: f64,
    #[serde(rename = "Quantity")]
    pub quantity: i64,
    #[serde(rename = "ProductStoreCode")]
    pub product_store_code: String,
}

impl ProductInput {
    /// Check every field and collect all offending ones into a single
    /// validation error, rather than stopping at the first.
    pub fn validate(&self) -> Result<(), errors::ModelError> {
        let mut reasons: Vec<&str> = Vec::new();
        if self.product_code.trim().is_empty() {
            reasons.push("ProductCode must not be empty");
        }
        if self.product_name.trim().is_empty() {
            reasons.push("ProductName must not be empty");
        }
        if !self.product_origin_price.is_finite() {
            reasons.push("ProductOriginPrice must be a finite number");
        } else if self.product_origin_price <= 0.0 {
            reasons.push("ProductOriginPrice must be greater than zero");
        }
        if self.product_store_code.trim().is_empty() {
            reasons.push("ProductStoreCode must not be empty");
        }
        if reasons.is_empty() {
            Ok(())
        } else {
            Err(errors::ModelError::Validation(reasons.join("; ")))
        }
    }
}

/// Insert a new product; the store assigns a fresh id.
pub async fn create(db: &DatabaseConnection, input: &ProductInput) -> Result<Model, errors::ModelError> {
    input.validate()?;
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        product_code: Set(input.product_code.clone()),
        product_name: Set(input.product_name.clone()),
        product_date: Set(input.product_date),
        product_origin_price: Set(input.product_origin_price),
        quantity: Set(input.quantity),
        product_store_code: Set(input.product_store_code.clone()),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// `ProductDate` (de)serialization.
///
/// Accepts RFC 3339 timestamps or bare `YYYY-MM-DD` dates (read as midnight
/// UTC); always serializes as RFC 3339.
pub mod wire_date {
    use chrono::{DateTime, NaiveDate, NaiveTime};
    use sea_orm::prelude::DateTimeWithTimeZone;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTimeWithTimeZone, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTimeWithTimeZone, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if let Ok(dt) = DateTime::parse_from_rfc3339(&raw) {
            return Ok(dt);
        }
        let date = NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .map_err(|_| de::Error::custom(format!("invalid ProductDate: {raw}")))?;
        Ok(date.and_time(NaiveTime::MIN).and_utc().fixed_offset())
    }
}
