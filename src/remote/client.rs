//! reqwest-backed implementation of the backend API traits.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::config::AppConfig;
use crate::remote::dto::{AddonDto, AddonGroupDto, CategoryDto, OrdersData, ProductDto};
use crate::remote::{ApiEnvelope, ApiError, CatalogApi, OrdersApi, OrdersQuery};

/// Authenticated JSON client for the POS backend.
#[derive(Debug, Clone)]
pub struct HttpClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl HttpClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_base_url.clone(),
            token: config.api_token.clone(),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let response = self
            .http
            .get(format!("{}/{path}", self.base_url))
            .bearer_auth(&self.token)
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl CatalogApi for HttpClient {
    async fn get_categories(&self) -> Result<ApiEnvelope<Vec<CategoryDto>>, ApiError> {
        self.get_json("protected/pos/categories", &[]).await
    }

    async fn get_products(
        &self,
        category_id: Option<&str>,
    ) -> Result<ApiEnvelope<Vec<ProductDto>>, ApiError> {
        let mut query = Vec::new();
        if let Some(category_id) = category_id {
            query.push(("category_id", category_id.to_string()));
        }
        self.get_json("protected/pos/my-products-all", &query).await
    }

    async fn get_addon_groups(&self) -> Result<ApiEnvelope<Vec<AddonGroupDto>>, ApiError> {
        self.get_json("protected/pos/addon-groups", &[]).await
    }

    async fn get_addons(&self) -> Result<ApiEnvelope<Vec<AddonDto>>, ApiError> {
        self.get_json("protected/pos/addons", &[]).await
    }
}

#[async_trait]
impl OrdersApi for HttpClient {
    async fn get_orders(&self, query: OrdersQuery) -> Result<ApiEnvelope<OrdersData>, ApiError> {
        let mut params = vec![
            ("limit", query.limit.to_string()),
            ("page", query.page.to_string()),
        ];
        if let Some(status) = query.status {
            params.push(("status", status.to_string()));
        }
        if let Some(start_date) = query.start_date {
            params.push(("start_date", start_date.to_string()));
        }
        if let Some(end_date) = query.end_date {
            params.push(("end_date", end_date.to_string()));
        }
        self.get_json("protected/pos/orders", &params).await
    }
}
