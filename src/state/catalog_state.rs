//! CatalogState - Product Store, Filters and Pagination

use std::sync::Arc;

use serde::Serialize;

use crate::domain::filter::{FilterForm, apply_filters};
use crate::domain::product::{self, Product};
use crate::error::Result;
use crate::state::pagination_state::{PageRequest, PaginationState};

/// Loading state of the product store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing requested yet
    #[default]
    Idle,
    /// Initial load in flight
    Loading,
    /// Products available
    Loaded,
    /// The provider failed; the store is empty
    Failed(Arc<str>),
}

impl LoadState {
    /// Check if currently loading
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Check if loaded successfully
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded)
    }

    /// Check if there was an error
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Read-only view of the catalog for the UI layer
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSnapshot {
    pub visible_products: Vec<Product>,
    pub categories: Vec<String>,
    pub filters: FilterForm,
    pub total_count: usize,
    pub filtered_count: usize,
    pub is_loading: bool,
    pub has_more_pages: bool,
    pub error: Option<String>,
}

/// State of the catalog page
#[derive(Debug, Clone)]
pub struct CatalogState {
    /// Full product store, immutable once loaded
    products: Arc<[Product]>,
    /// Distinct categories of the store
    categories: Vec<String>,
    /// Current filter form
    form: FilterForm,
    /// Products matching the current filters
    filtered: Arc<[Product]>,
    pagination: PaginationState,
    load_state: LoadState,
    /// Set after each filter pass until the UI takes it
    scroll_reset: bool,
}

impl CatalogState {
    /// Create an empty catalog state
    pub fn new(page_size: usize) -> Self {
        Self {
            products: Arc::from(Vec::new()),
            categories: Vec::new(),
            form: FilterForm::default(),
            filtered: Arc::from(Vec::new()),
            pagination: PaginationState::new(page_size),
            load_state: LoadState::Idle,
            scroll_reset: false,
        }
    }

    // ==================== Getters ====================

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn form(&self) -> &FilterForm {
        &self.form
    }

    pub fn filtered(&self) -> &[Product] {
        &self.filtered
    }

    pub fn visible(&self) -> &[Product] {
        self.pagination.visible()
    }

    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    /// True while the initial load or a page load is in flight
    pub fn is_loading(&self) -> bool {
        self.load_state.is_loading() || self.pagination.is_loading_more()
    }

    pub fn has_more_pages(&self) -> bool {
        self.pagination.has_more()
    }

    // ==================== Store ====================

    /// Mark the initial load as started
    pub fn begin_products_load(&mut self) {
        self.load_state = LoadState::Loading;
    }

    /// Install the loaded products, or an empty store on failure
    ///
    /// Re-filters with the current form and resets pagination.
    pub fn apply_products(&mut self, result: Result<Vec<Product>>) {
        let result = result.and_then(|products| {
            product::ensure_unique_codes(&products)?;
            Ok(products)
        });

        match result {
            Ok(products) => {
                tracing::info!("Loaded {} products", products.len());
                self.categories = product::categories(&products);
                self.products = Arc::from(products);
                self.load_state = LoadState::Loaded;
            }
            Err(e) => {
                tracing::error!("Failed to load products: {}", e);
                self.categories.clear();
                self.products = Arc::from(Vec::new());
                self.load_state = LoadState::Failed(e.to_string().into());
            }
        }

        self.refilter();
    }

    // ==================== Filters ====================

    pub fn form_mut(&mut self) -> &mut FilterForm {
        &mut self.form
    }

    pub fn set_form(&mut self, form: FilterForm) {
        self.form = form;
    }

    /// Run the filter engine with the current form and reset pagination
    pub fn refilter(&mut self) {
        let criteria = self.form.criteria();
        self.filtered = Arc::from(apply_filters(&self.products, &criteria));
        self.pagination.reset(self.filtered.len());
        self.scroll_reset = true;
        tracing::debug!(
            total = self.products.len(),
            filtered = self.filtered.len(),
            "Filters applied"
        );
    }

    /// Take the pending scroll-to-top request
    pub fn take_scroll_reset(&mut self) -> bool {
        std::mem::take(&mut self.scroll_reset)
    }

    // ==================== Pagination ====================

    /// Start loading the next page unless the store is still loading
    pub fn begin_page_load(&mut self) -> Option<PageRequest> {
        if self.load_state.is_loading() {
            return None;
        }
        self.pagination.begin_load()
    }

    /// Apply a finished page load; stale requests are dropped
    pub fn complete_page_load(&mut self, request: PageRequest) -> bool {
        let filtered = Arc::clone(&self.filtered);
        self.pagination.complete_load(request, &filtered)
    }

    pub fn snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot {
            visible_products: self.visible().to_vec(),
            categories: self.categories.clone(),
            filters: self.form.clone(),
            total_count: self.products.len(),
            filtered_count: self.filtered.len(),
            is_loading: self.is_loading(),
            has_more_pages: self.has_more_pages(),
            error: match &self.load_state {
                LoadState::Failed(message) => Some(message.to_string()),
                _ => None,
            },
        }
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new(crate::constants::PAGE_SIZE)
    }
}
