//! Catalog Events
//!
//! Posted by timer tasks and applied to the state by
//! [`crate::features::catalog::CatalogController::pump`]. Events that can be
//! overtaken carry the sequence number they were issued under; the controller
//! drops any whose number is no longer current.

use crossbeam_channel::Sender;

use crate::domain::product::Product;
use crate::error::Result;
use crate::state::pagination_state::PageRequest;

/// Events produced by background timers
#[derive(Debug)]
pub enum CatalogEvent {
    /// The product source finished (or failed)
    ProductsLoaded {
        load_id: u64,
        result: Result<Vec<Product>>,
    },

    /// The debounce window for filter edits passed
    FiltersSettled { edit_seq: u64 },

    /// The simulated fetch for a page finished
    PageReady { request: PageRequest },
}

impl CatalogEvent {
    /// Short name for logging
    pub fn kind(&self) -> &'static str {
        match self {
            CatalogEvent::ProductsLoaded { .. } => "products_loaded",
            CatalogEvent::FiltersSettled { .. } => "filters_settled",
            CatalogEvent::PageReady { .. } => "page_ready",
        }
    }
}

/// Send an event; a closed channel means the controller is gone
pub fn post(tx: &Sender<CatalogEvent>, event: CatalogEvent) {
    if let Err(e) = tx.send(event) {
        tracing::debug!("Catalog closed, dropping {} event", e.0.kind());
    }
}
