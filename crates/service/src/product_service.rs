use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use uuid::Uuid;

use crate::errors::ServiceError;
use models::product::{self, Entity as ProductEntity, ProductInput};

/// List all products. No filtering; row order is whatever the store returns.
pub async fn list_products(db: &DatabaseConnection) -> Result<Vec<product::Model>, ServiceError> {
    let rows = ProductEntity::find().all(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(rows)
}

/// Create a product after validation; the store assigns the id.
pub async fn create_product(db: &DatabaseConnection, input: &ProductInput) -> Result<product::Model, ServiceError> {
    // validations are in models::product
    let created = product::create(db, input).await?;
    Ok(created)
}

/// Replace the six business fields of an existing product; the id is untouched.
pub async fn update_product(db: &DatabaseConnection, id: Uuid, input: &ProductInput) -> Result<product::Model, ServiceError> {
    input.validate()?;
    let current = ProductEntity::find_by_id(id).one(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    let Some(existing) = current else { return Err(ServiceError::not_found("product")); };
    let mut am: product::ActiveModel = existing.into();
    am.product_code = Set(input.product_code.clone());
    am.product_name = Set(input.product_name.clone());
    am.product_date = Set(input.product_date);
    am.product_origin_price = Set(input.product_origin_price);
    am.quantity = Set(input.quantity);
    am.product_store_code = Set(input.product_store_code.clone());
    let updated = am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(updated)
}

/// Delete a product by id, returning the removed record.
pub async fn delete_product(db: &DatabaseConnection, id: Uuid) -> Result<product::Model, ServiceError> {
    let found = ProductEntity::find_by_id(id).one(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    let Some(existing) = found else { return Err(ServiceError::not_found("product")); };
    ProductEntity::delete_by_id(id).exec(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(existing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use chrono::{TimeZone, Utc};

    fn input(code: &str, store_code: &str, price: f64, quantity: i64) -> ProductInput {
        ProductInput {
            product_code: code.into(),
            product_name: format!("Product {code}"),
            product_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap().fixed_offset(),
            product_origin_price: price,
            quantity,
            product_store_code: store_code.into(),
        }
    }

    #[tokio::test]
    async fn product_crud_service() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;

        let created = create_product(&db, &input("P-100", "S2", 10.0, 5)).await?;
        assert_eq!(created.product_code, "P-100");
        assert_eq!(created.quantity, 5);

        let listed = list_products(&db).await?;
        assert!(listed.iter().any(|p| p.id == created.id));

        // Full replacement of the business fields, id untouched
        let updated = update_product(&db, created.id, &input("P-100", "S1", 12.5, 9)).await?;
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.product_store_code, "S1");
        assert_eq!(updated.product_origin_price, 12.5);
        assert_eq!(updated.quantity, 9);

        let deleted = delete_product(&db, created.id).await?;
        assert_eq!(deleted.id, created.id);
        let after = list_products(&db).await?;
        assert!(!after.iter().any(|p| p.id == created.id));

        Ok(())
    }

    #[tokio::test]
    async fn update_missing_id_is_not_found_and_mutates_nothing() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;

        let witness = create_product(&db, &input("P-404-witness", "S1", 10.0, 1)).await?;
        let err = update_product(&db, Uuid::new_v4(), &input("P-404", "S1", 99.0, 9)).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));

        // Existing rows are untouched by a failed update
        let listed = list_products(&db).await?;
        let stored = listed.iter().find(|p| p.id == witness.id).expect("witness still present");
        assert_eq!(stored, &witness);

        delete_product(&db, witness.id).await?;
        Ok(())
    }

    #[tokio::test]
    async fn delete_twice_is_not_found_the_second_time() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;

        let created = create_product(&db, &input("P-200", "S3", 8.0, 2)).await?;
        delete_product(&db, created.id).await?;
        let err = delete_product(&db, created.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));

        Ok(())
    }

    #[tokio::test]
    async fn invalid_update_is_rejected_before_write() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;

        let created = create_product(&db, &input("P-300", "S4", 15.0, 3)).await?;
        let err = update_product(&db, created.id, &input("P-300", "S4", -1.0, 3)).await.unwrap_err();
        assert!(matches!(err, ServiceError::Model(_)));

        // Record untouched
        let listed = list_products(&db).await?;
        let stored = listed.iter().find(|p| p.id == created.id).expect("record still present");
        assert_eq!(stored.product_origin_price, 15.0);

        delete_product(&db, created.id).await?;
        Ok(())
    }
}
