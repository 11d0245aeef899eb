//! PaginationState - Incremental Page Reveal
//!
//! Tracks how much of the filtered sequence is visible. Loading a page is a
//! two step affair: [`PaginationState::begin_load`] hands out a
//! [`PageRequest`] tagged with the current generation, and
//! [`PaginationState::complete_load`] applies it once the simulated fetch is
//! done. Every reset bumps the generation, so a request issued before the
//! reset is ignored when it completes.

use crate::domain::product::Product;

/// A page load in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Generation of the filtered sequence the request was issued for
    pub generation: u64,
    /// Zero-based page index
    pub page_index: usize,
}

/// Pagination state for the product table
#[derive(Debug, Clone)]
pub struct PaginationState {
    page_size: usize,
    current_page: usize,
    visible: Vec<Product>,
    has_more: bool,
    loading_more: bool,
    generation: u64,
}

impl PaginationState {
    /// Create an empty pagination state
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 0,
            visible: Vec::new(),
            has_more: false,
            loading_more: false,
            generation: 0,
        }
    }

    // ==================== Getters ====================

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Index of the next page to load
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Products revealed so far
    pub fn visible(&self) -> &[Product] {
        &self.visible
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn is_loading_more(&self) -> bool {
        self.loading_more
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    // ==================== Transitions ====================

    /// Start over for a new filtered sequence of `filtered_len` products
    pub fn reset(&mut self, filtered_len: usize) {
        self.visible.clear();
        self.current_page = 0;
        self.has_more = filtered_len > 0;
        self.loading_more = false;
        self.generation = self.generation.wrapping_add(1);
        tracing::debug!(
            generation = self.generation,
            filtered_len,
            "Pagination reset"
        );
    }

    /// Mark a page load as started
    ///
    /// Returns `None` when a load is already in flight or nothing is left.
    pub fn begin_load(&mut self) -> Option<PageRequest> {
        if self.loading_more || !self.has_more {
            return None;
        }
        self.loading_more = true;
        Some(PageRequest {
            generation: self.generation,
            page_index: self.current_page,
        })
    }

    /// Append the requested page of `filtered`
    ///
    /// Returns `false` if the request is stale and was dropped.
    pub fn complete_load(&mut self, request: PageRequest, filtered: &[Product]) -> bool {
        if request.generation != self.generation || request.page_index != self.current_page {
            tracing::debug!(
                stale_generation = request.generation,
                generation = self.generation,
                "Discarding stale page"
            );
            return false;
        }

        let start = (self.current_page * self.page_size).min(filtered.len());
        let end = (start + self.page_size).min(filtered.len());
        self.visible.extend_from_slice(&filtered[start..end]);
        self.current_page += 1;
        self.has_more = self.visible.len() < filtered.len();
        self.loading_more = false;

        tracing::debug!(
            page = request.page_index,
            visible = self.visible.len(),
            total = filtered.len(),
            "Page appended"
        );
        true
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(crate::constants::PAGE_SIZE)
    }
}
