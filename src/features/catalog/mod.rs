//! Catalog Feature
//!
//! Product table with debounced filters and infinite-scroll paging.

pub mod controller;

pub use controller::CatalogController;
