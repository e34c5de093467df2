use thiserror::Error;
use uuid::Uuid;

use models::product::{Model as Product, ProductInput};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },
}

/// HTTP client for the `/api/products` surface.
pub struct ProductsApi {
    http: reqwest::Client,
    base_url: String,
}

impl ProductsApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { http: reqwest::Client::new(), base_url: base_url.into() }
    }

    fn url(&self, suffix: &str) -> String {
        format!("{}/api/products{}", self.base_url, suffix)
    }

    pub async fn list(&self) -> Result<Vec<Product>, ApiError> {
        let resp = self.http.get(self.url("")).send().await.map_err(net)?;
        parse_json(resp).await
    }

    pub async fn create(&self, input: &ProductInput) -> Result<Product, ApiError> {
        let resp = self.http.post(self.url("")).json(input).send().await.map_err(net)?;
        parse_json(resp).await
    }

    pub async fn update(&self, id: Uuid, input: &ProductInput) -> Result<Product, ApiError> {
        let resp = self.http.put(self.url(&format!("/{id}"))).json(input).send().await.map_err(net)?;
        parse_json(resp).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        let resp = self.http.delete(self.url(&format!("/{id}"))).send().await.map_err(net)?;
        if resp.status().is_success() {
            Ok(())
        } else {
            Err(error_from(resp).await)
        }
    }
}

fn net(e: reqwest::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

async fn parse_json<T>(resp: reqwest::Response) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    if !resp.status().is_success() {
        return Err(error_from(resp).await);
    }
    resp.json::<T>().await.map_err(net)
}

async fn error_from(resp: reqwest::Response) -> ApiError {
    let status = resp.status().as_u16();
    let message = resp
        .json::<serde_json::Value>()
        .await
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_owned))
        .unwrap_or_else(|| "request failed".to_string());
    ApiError::Server { status, message }
}
