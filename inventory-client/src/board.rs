//! Kanban board state
//!
//! 看板视图状态机: 一列一个分类, 拖拽改分类。
//!
//! Two rules shape every mutation here:
//! - confirm-then-apply: local state only changes after the server accepts
//!   the write, so a failed request never leaves a phantom column or card.
//! - snapshot tickets: each refresh carries a monotonically increasing
//!   ticket, and a snapshot older than the last applied one is discarded
//!   instead of clobbering newer data.

use std::sync::Arc;

use shared::{Product, UNCATEGORIZED};

use crate::InventoryApi;

/// Outcome of a drag gesture, as reported by the drag layer.
#[derive(Debug, Clone)]
pub struct DragEnd {
    /// Barcode of the dragged card
    pub barcode: String,
    /// Column the card started in
    pub source: String,
    /// Column the card was dropped on, `None` when the drag was cancelled
    pub destination: Option<String>,
}

/// Board view state: columns, cards, and the search filter.
pub struct BoardView {
    api: Arc<dyn InventoryApi>,
    /// Column order: "Uncategorized" first, stored categories after.
    categories: Vec<String>,
    products: Vec<Product>,
    search: String,
    error: Option<String>,
    /// Last issued refresh ticket
    refresh_seq: u64,
    /// Highest ticket whose snapshot was applied
    applied_seq: u64,
}

impl BoardView {
    pub fn new(api: Arc<dyn InventoryApi>) -> Self {
        Self {
            api,
            categories: vec![UNCATEGORIZED.to_string()],
            products: Vec::new(),
            search: String::new(),
            error: None,
            refresh_seq: 0,
            applied_seq: 0,
        }
    }

    /// Issue a ticket for an in-flight refresh.
    pub fn begin_refresh(&mut self) -> u64 {
        self.refresh_seq += 1;
        self.refresh_seq
    }

    /// Apply a fetched snapshot. Returns false (and changes nothing) when a
    /// newer snapshot already landed.
    pub fn apply_snapshot(
        &mut self,
        ticket: u64,
        categories: Vec<String>,
        products: Vec<Product>,
    ) -> bool {
        if ticket <= self.applied_seq {
            tracing::debug!(ticket, applied = self.applied_seq, "Discarding stale snapshot");
            return false;
        }
        self.applied_seq = ticket;

        let mut columns = vec![UNCATEGORIZED.to_string()];
        columns.extend(categories.into_iter().filter(|c| c != UNCATEGORIZED));
        self.categories = columns;
        self.products = products;
        self.error = None;
        true
    }

    /// Fetch categories and products and apply them as one snapshot.
    ///
    /// On failure the previous snapshot stays visible and the error is
    /// recorded for display.
    pub async fn refresh(&mut self) {
        let ticket = self.begin_refresh();

        let fetched = async {
            let categories = self.api.list_categories().await?;
            let products = self.api.list_products(None).await?;
            crate::ClientResult::Ok((categories, products))
        }
        .await;

        match fetched {
            Ok((categories, products)) => {
                let names = categories.into_iter().map(|c| c.name).collect();
                self.apply_snapshot(ticket, names, products);
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    /// React to the end of a drag gesture.
    ///
    /// Cancelled drags and same-column drops are ignored without a request;
    /// a real move is confirmed by the server before the board re-fetches.
    pub async fn handle_drag_end(&mut self, drag: DragEnd) {
        let Some(destination) = drag.destination else {
            return;
        };
        if destination == drag.source {
            return;
        }
        if !self.products.iter().any(|p| p.barcode == drag.barcode) {
            return;
        }

        match self.api.update_category(&drag.barcode, &destination).await {
            Ok(_) => self.refresh().await,
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    /// Add a column. Whitespace-only names are ignored; the column appears
    /// only once the server has stored the category.
    pub async fn add_category(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }

        match self.api.create_category(name).await {
            Ok(category) => {
                if !self.categories.contains(&category.name) {
                    self.categories.push(category.name);
                }
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    /// Merge a scanned product into the board, keyed by barcode.
    pub fn apply_scan(&mut self, product: Product) {
        match self.products.iter_mut().find(|p| p.barcode == product.barcode) {
            Some(existing) => *existing = product,
            None => self.products.push(product),
        }
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    /// Products passing the search filter (case-insensitive name substring).
    pub fn visible_products(&self) -> Vec<&Product> {
        let needle = self.search.to_lowercase();
        self.products
            .iter()
            .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Cards of one column, search filter applied.
    pub fn products_in(&self, category: &str) -> Vec<&Product> {
        self.visible_products()
            .into_iter()
            .filter(|p| p.category == category)
            .collect()
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
