//! Scan pipeline: image bytes → barcode → product
//!
//! 扫描管线三步走:
//! 1. 校验图片格式 (PNG / JPEG / GIF) 并解码
//! 2. 提取条码载荷
//! 3. 按条码查询服务端 (find-or-create)

mod extract;

use std::sync::Arc;

use image::ImageFormat;
use shared::Product;
use thiserror::Error;

use crate::{ClientError, InventoryApi};

pub use extract::{BarcodeExtractor, SymbolDecoder};

/// Scan failure, ordered by pipeline stage.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Bytes are not a decodable PNG / JPEG / GIF
    #[error("Unsupported or corrupt image")]
    UnsupportedImage,

    /// Image decoded fine but no barcode was found in it
    #[error("No barcode detected")]
    NoBarcode,

    /// Barcode extracted, server lookup failed
    #[error(transparent)]
    Api(#[from] ClientError),
}

/// End-to-end scan: decode the image, extract the barcode, resolve the
/// product via the server's find-or-create lookup.
pub struct ScanPipeline {
    extractor: Box<dyn BarcodeExtractor>,
    api: Arc<dyn InventoryApi>,
}

impl ScanPipeline {
    /// Pipeline with the default EAN / UPC decoder.
    pub fn new(api: Arc<dyn InventoryApi>) -> Self {
        Self::with_extractor(Box::new(SymbolDecoder), api)
    }

    pub fn with_extractor(extractor: Box<dyn BarcodeExtractor>, api: Arc<dyn InventoryApi>) -> Self {
        Self { extractor, api }
    }

    /// Run one image through the pipeline.
    ///
    /// The image is validated and decoded before the extractor runs, and the
    /// server is only consulted once a non-empty barcode came out.
    pub async fn scan(&self, bytes: &[u8]) -> Result<Product, ScanError> {
        let format = image::guess_format(bytes).map_err(|_| ScanError::UnsupportedImage)?;
        if !matches!(
            format,
            ImageFormat::Png | ImageFormat::Jpeg | ImageFormat::Gif
        ) {
            return Err(ScanError::UnsupportedImage);
        }

        let image = image::load_from_memory_with_format(bytes, format)
            .map_err(|_| ScanError::UnsupportedImage)?;

        let barcode = self
            .extractor
            .extract(&image)
            .map(|code| code.trim().to_string())
            .filter(|code| !code.is_empty())
            .ok_or(ScanError::NoBarcode)?;

        tracing::debug!(barcode = %barcode, "Barcode extracted, resolving product");
        Ok(self.api.lookup_barcode(&barcode).await?)
    }
}
