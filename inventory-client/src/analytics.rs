//! Analytics view state
//!
//! 统计视图: 分类计数 + 最近商品，失败时保留上一份数据。

use std::sync::Arc;

use shared::{AnalyticsSummary, Product};

use crate::InventoryApi;

/// Analytics view: last-good summary plus a display error.
pub struct AnalyticsView {
    api: Arc<dyn InventoryApi>,
    summary: AnalyticsSummary,
    filter: String,
    error: Option<String>,
    refresh_seq: u64,
    applied_seq: u64,
}

impl AnalyticsView {
    pub fn new(api: Arc<dyn InventoryApi>) -> Self {
        Self {
            api,
            summary: AnalyticsSummary::default(),
            filter: String::new(),
            error: None,
            refresh_seq: 0,
            applied_seq: 0,
        }
    }

    pub fn begin_refresh(&mut self) -> u64 {
        self.refresh_seq += 1;
        self.refresh_seq
    }

    /// Apply a fetched summary unless a newer one already landed.
    pub fn apply_summary(&mut self, ticket: u64, summary: AnalyticsSummary) -> bool {
        if ticket <= self.applied_seq {
            return false;
        }
        self.applied_seq = ticket;
        self.summary = summary;
        self.error = None;
        true
    }

    /// Re-fetch the summary. On failure the previous numbers stay on screen
    /// and a generic error message is recorded.
    pub async fn refresh(&mut self) {
        let ticket = self.begin_refresh();
        match self.api.analytics().await {
            Ok(summary) => {
                self.apply_summary(ticket, summary);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Analytics refresh failed");
                self.error = Some("Failed to load analytics".to_string());
            }
        }
    }

    pub fn set_filter(&mut self, query: impl Into<String>) {
        self.filter = query.into();
    }

    /// Recent products passing the category filter (case-insensitive substring).
    pub fn filtered_recent(&self) -> Vec<&Product> {
        let needle = self.filter.to_lowercase();
        self.summary
            .recent_products
            .iter()
            .filter(|p| needle.is_empty() || p.category.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn summary(&self) -> &AnalyticsSummary {
        &self.summary
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
