//! Catalog Controller
//!
//! Handles product loading, debounced filtering and infinite-scroll paging.
//! Timers post [`CatalogEvent`]s; [`CatalogController::pump`] applies them
//! in arrival order on the owner's thread.
//!
//! Product loads and debounced filter edits are numbered. An event whose
//! number is no longer current (a newer load was started, or the form was
//! edited, applied or reset since the timer fired) is dropped on arrival.

use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::domain::config::CatalogConfig;
use crate::domain::filter::{FilterForm, StatusFilter};
use crate::domain::product::Product;
use crate::domain::scroll::ScrollMetrics;
use crate::error::Result;
use crate::services::{
    CatalogEvent, Debouncer, PageLoader, ProductSource, post, runtime_handle, spawn_named,
};
use crate::state::catalog_state::{CatalogSnapshot, CatalogState, LoadState};

/// Catalog page controller
pub struct CatalogController {
    config: CatalogConfig,
    state: CatalogState,
    source: Arc<dyn ProductSource>,
    runtime: Handle,
    debouncer: Debouncer<u64>,
    pages: PageLoader,
    load_task: Option<JoinHandle<()>>,
    load_id: u64,
    edit_seq: u64,
    tx: Sender<CatalogEvent>,
    rx: Receiver<CatalogEvent>,
}

impl CatalogController {
    /// Create a new controller; nothing is loaded until [`Self::load_products`]
    pub fn new(config: CatalogConfig, source: Arc<dyn ProductSource>) -> Result<Self> {
        let runtime = runtime_handle()?;
        let (tx, rx) = crossbeam_channel::unbounded();

        let debounce_tx = tx.clone();
        let debouncer = Debouncer::new(config.debounce(), runtime.clone(), move |edit_seq| {
            post(&debounce_tx, CatalogEvent::FiltersSettled { edit_seq });
        });
        let pages = PageLoader::new(config.page_delay(), runtime.clone(), tx.clone());

        Ok(Self {
            state: CatalogState::new(config.page_size()),
            config,
            source,
            runtime,
            debouncer,
            pages,
            load_task: None,
            load_id: 0,
            edit_seq: 0,
            tx,
            rx,
        })
    }

    // ==================== Read-outs ====================

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn visible_products(&self) -> &[Product] {
        self.state.visible()
    }

    pub fn filtered_len(&self) -> usize {
        self.state.filtered().len()
    }

    pub fn categories(&self) -> &[String] {
        self.state.categories()
    }

    pub fn form(&self) -> &FilterForm {
        self.state.form()
    }

    pub fn load_state(&self) -> &LoadState {
        self.state.load_state()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn has_more_pages(&self) -> bool {
        self.state.has_more_pages()
    }

    pub fn snapshot(&self) -> CatalogSnapshot {
        self.state.snapshot()
    }

    /// Whether the table should jump back to the top (cleared on read)
    pub fn scroll_reset_requested(&mut self) -> bool {
        self.state.take_scroll_reset()
    }

    /// True when no timer is pending and no event is waiting
    pub fn is_idle(&self) -> bool {
        !self.state.is_loading() && !self.debouncer.is_pending() && self.rx.is_empty()
    }

    // ==================== Loading ====================

    /// Load the product store after the simulated initial latency
    pub fn load_products(&mut self) {
        if let Some(task) = self.load_task.take() {
            task.abort();
        }
        self.pages.cancel();
        self.load_id += 1;
        self.state.begin_products_load();
        tracing::info!("Loading products from {}", self.source.describe());

        let load_id = self.load_id;
        let delay = self.config.initial_load_delay();
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        self.load_task = Some(spawn_named(&self.runtime, "product-load", async move {
            tokio::time::sleep(delay).await;
            let result = source.load();
            post(&tx, CatalogEvent::ProductsLoaded { load_id, result });
        }));
    }

    /// Request the next page; no-op while loading or when everything is visible
    pub fn load_next_page(&mut self) -> bool {
        match self.state.begin_page_load() {
            Some(request) => {
                self.pages.schedule(request);
                true
            }
            None => false,
        }
    }

    /// Handle a scroll of the product table
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> bool {
        if !metrics.is_near_bottom(self.config.scroll_threshold_px) {
            return false;
        }
        self.load_next_page()
    }

    // ==================== Filters ====================

    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        self.edit_form(|form| form.query = query);
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        let category = category.into();
        self.edit_form(|form| form.category = category);
    }

    pub fn set_status(&mut self, status: StatusFilter) {
        self.edit_form(|form| form.activated = status.form_value().to_string());
    }

    pub fn set_min_price(&mut self, min_price: impl Into<String>) {
        let min_price = min_price.into();
        self.edit_form(|form| form.min_price = min_price);
    }

    pub fn set_max_price(&mut self, max_price: impl Into<String>) {
        let max_price = max_price.into();
        self.edit_form(|form| form.max_price = max_price);
    }

    /// Replace the whole form (debounced like a single edit)
    pub fn set_form(&mut self, form: FilterForm) {
        self.edit_form(|current| *current = form);
    }

    /// Re-filter with the current form without waiting for the debounce window
    pub fn apply_filters_now(&mut self) {
        self.settle_edits();
        self.refilter_and_load();
    }

    /// Clear every filter field and re-filter immediately
    pub fn reset_filters(&mut self) {
        self.settle_edits();
        self.state.set_form(FilterForm::default());
        self.refilter_and_load();
    }

    fn edit_form(&mut self, edit: impl FnOnce(&mut FilterForm)) {
        edit(self.state.form_mut());
        self.edit_seq += 1;
        self.debouncer.push(self.edit_seq);
    }

    /// Drop the pending debounce and outdate any settle event already queued
    fn settle_edits(&mut self) {
        self.debouncer.cancel();
        self.edit_seq += 1;
    }

    fn refilter_and_load(&mut self) {
        if self.state.load_state().is_loading() {
            // apply_products filters with the current form once data arrives
            return;
        }
        self.pages.cancel();
        self.state.refilter();
        self.load_next_page();
    }

    // ==================== Event Pump ====================

    /// Apply every event posted so far; returns how many were drained
    ///
    /// Outdated events count as drained but change nothing.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.rx.try_recv() {
            tracing::trace!("Applying catalog event: {}", event.kind());
            self.handle_event(event);
            applied += 1;
        }
        applied
    }

    /// Pump every `tick` until nothing is pending
    pub async fn run_until_idle(&mut self, tick: Duration) {
        loop {
            self.pump();
            if self.is_idle() {
                return;
            }
            tokio::time::sleep(tick).await;
        }
    }

    fn handle_event(&mut self, event: CatalogEvent) {
        match event {
            CatalogEvent::ProductsLoaded { load_id, result } => {
                if load_id != self.load_id {
                    tracing::debug!("Ignored products from superseded load {}", load_id);
                    return;
                }
                self.load_task = None;
                self.state.apply_products(result);
                self.load_next_page();
            }
            CatalogEvent::FiltersSettled { edit_seq } => {
                if edit_seq != self.edit_seq {
                    tracing::debug!("Ignored settled filters from edit {}", edit_seq);
                    return;
                }
                self.refilter_and_load();
            }
            CatalogEvent::PageReady { request } => {
                if !self.state.complete_page_load(request) {
                    tracing::debug!("Ignored page {} from an old filter", request.page_index);
                }
            }
        }
    }
}

impl Drop for CatalogController {
    fn drop(&mut self) {
        if let Some(task) = self.load_task.take() {
            task.abort();
        }
    }
}

impl std::fmt::Debug for CatalogController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogController")
            .field("source", &self.source.describe())
            .field("load_state", self.state.load_state())
            .field("visible", &self.state.visible().len())
            .field("filtered", &self.state.filtered().len())
            .field("pages", &self.pages)
            .finish()
    }
}
