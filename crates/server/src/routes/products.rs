use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{error, info};
use uuid::Uuid;

use models::product::{self, ProductInput};
use service::{errors::ServiceError, product_service};

use crate::errors::JsonApiError;
use crate::routes::ServerState;

pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<ProductInput>,
) -> Result<(StatusCode, Json<product::Model>), JsonApiError> {
    match product_service::create_product(&state.db, &input).await {
        Ok(m) => {
            info!(id = %m.id, code = %m.product_code, store = %m.product_store_code, "created product");
            Ok((StatusCode::CREATED, Json(m)))
        }
        Err(e) => {
            // Store failures on create also answer 400, matching the
            // established contract of this endpoint.
            if matches!(e, ServiceError::Db(_)) {
                error!(err = %e, "create product failed");
            }
            Err(JsonApiError::new(StatusCode::BAD_REQUEST, e.to_string()))
        }
    }
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<product::Model>>, JsonApiError> {
    match product_service::list_products(&state.db).await {
        Ok(rows) => {
            info!(count = rows.len(), "list products");
            Ok(Json(rows))
        }
        Err(e) => {
            error!(err = %e, "list products failed");
            Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(input): Json<ProductInput>,
) -> Result<Json<product::Model>, JsonApiError> {
    match product_service::update_product(&state.db, id, &input).await {
        Ok(m) => {
            info!(id = %m.id, "updated product");
            Ok(Json(m))
        }
        Err(ServiceError::NotFound(_)) => {
            Err(JsonApiError::new(StatusCode::NOT_FOUND, "Product Not Found!"))
        }
        Err(e @ (ServiceError::Validation(_) | ServiceError::Model(_))) => {
            Err(JsonApiError::new(StatusCode::BAD_REQUEST, e.to_string()))
        }
        Err(e) => {
            error!(err = %e, "update product failed");
            Err(JsonApiError::new(StatusCode::BAD_REQUEST, e.to_string()))
        }
    }
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, JsonApiError> {
    match product_service::delete_product(&state.db, id).await {
        Ok(m) => {
            info!(id = %m.id, "deleted product");
            Ok(Json(serde_json::json!({ "message": "Deleted Product" })))
        }
        Err(ServiceError::NotFound(_)) => {
            Err(JsonApiError::new(StatusCode::NOT_FOUND, "Product Not Found!"))
        }
        Err(e) => {
            error!(err = %e, "delete product failed");
            Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}
