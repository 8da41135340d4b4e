//! 上游商品数据源客户端
//!
//! 条码首次出现时向上游目录服务查询元数据 (`GET {base}/product/{barcode}`)。
//! 通过 [`ProductDataSource`] trait 注入，测试时可替换为内存实现。

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

/// Catalog metadata for a barcode, as the upstream source reports it
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamProduct {
    /// 商品描述 (同时充当名称)
    pub description: Option<String>,
    /// 单价 (上游可能缺失)
    pub price: Option<Decimal>,
}

/// Upstream response envelope: `{ "product": { ... } }`
#[derive(Debug, Deserialize)]
struct UpstreamEnvelope {
    product: Option<UpstreamProduct>,
}

/// Upstream lookup failures (transport or protocol)
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("upstream request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("upstream returned status {0}")]
    Status(u16),
}

/// 上游商品数据源
///
/// `Ok(None)` 表示上游没有该条码的数据 — 这是定义好的分支，不是错误。
#[async_trait]
pub trait ProductDataSource: Send + Sync {
    async fn fetch(&self, barcode: &str) -> Result<Option<UpstreamProduct>, UpstreamError>;
}

/// HTTP implementation against the configured upstream catalog service
pub struct HttpProductDataSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpProductDataSource {
    pub fn new(base_url: String, timeout_ms: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(timeout_ms))
            .build()
            .expect("Failed to build HTTP client");

        Self { client, base_url }
    }
}

#[async_trait]
impl ProductDataSource for HttpProductDataSource {
    async fn fetch(&self, barcode: &str) -> Result<Option<UpstreamProduct>, UpstreamError> {
        let url = format!(
            "{}/product/{}",
            self.base_url.trim_end_matches('/'),
            barcode
        );

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }

        let envelope: UpstreamEnvelope = response.json().await?;
        Ok(envelope.product)
    }
}
