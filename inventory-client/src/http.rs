//! HTTP client for network-based API calls

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::{
    AnalyticsSummary, Category, CategoryCreate, ErrorBody, Product, ProductCreate, ProductPatch,
};

use crate::{ClientConfig, ClientError, ClientResult, InventoryApi};

/// HTTP client for making network requests to the inventory server
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    ///
    /// # Panics
    ///
    /// Panics if the underlying TLS backend cannot be initialized.
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a PATCH request with JSON body
    pub async fn patch<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.patch(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    ///
    /// Failure bodies are the uniform `{code, message}` envelope; the message
    /// is surfaced, the status picks the error variant.
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            let message = serde_json::from_str::<ErrorBody>(&text)
                .map(|e| e.message)
                .unwrap_or(text);
            return match status {
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(message)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(message)),
                StatusCode::CONFLICT => Err(ClientError::Conflict(message)),
                StatusCode::UNPROCESSABLE_ENTITY => Err(ClientError::BusinessRule(message)),
                _ => Err(ClientError::Internal(message)),
            };
        }

        response.json().await.map_err(Into::into)
    }
}

#[async_trait]
impl InventoryApi for HttpClient {
    async fn list_products(&self, category: Option<&str>) -> ClientResult<Vec<Product>> {
        match category {
            Some(category) => {
                let query = [("category", category)];
                let response = self
                    .client
                    .get(self.url("/api/products"))
                    .query(&query)
                    .send()
                    .await?;
                Self::handle_response(response).await
            }
            None => self.get("/api/products").await,
        }
    }

    async fn create_product(&self, payload: &ProductCreate) -> ClientResult<Product> {
        self.post("/api/products", payload).await
    }

    async fn lookup_barcode(&self, barcode: &str) -> ClientResult<Product> {
        self.get(&format!("/api/products/{barcode}")).await
    }

    async fn update_category(&self, barcode: &str, category: &str) -> ClientResult<Product> {
        let payload = ProductPatch {
            category: category.to_string(),
        };
        self.patch(&format!("/api/products/{barcode}"), &payload)
            .await
    }

    async fn list_categories(&self) -> ClientResult<Vec<Category>> {
        self.get("/api/categories").await
    }

    async fn create_category(&self, name: &str) -> ClientResult<Category> {
        let payload = CategoryCreate {
            name: name.to_string(),
        };
        self.post("/api/categories", &payload).await
    }

    async fn analytics(&self) -> ClientResult<AnalyticsSummary> {
        self.get("/api/analytics").await
    }
}
