//! Create `product` table.
//!
//! Single entity; ids are application-assigned UUIDs, never reused.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Product::Table)
                    .if_not_exists()
                    .col(uuid(Product::Id).primary_key())
                    .col(string_len(Product::ProductCode, 64).not_null())
                    .col(string_len(Product::ProductName, 256).not_null())
                    .col(timestamp_with_time_zone(Product::ProductDate).not_null())
                    .col(double(Product::ProductOriginPrice).not_null())
                    .col(big_integer(Product::Quantity).not_null())
                    .col(string_len(Product::ProductStoreCode, 64).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Product::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Product {
    Table,
    Id,
    ProductCode,
    ProductName,
    ProductDate,
    ProductOriginPrice,
    Quantity,
    ProductStoreCode,
}
