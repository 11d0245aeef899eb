//! Catalog View Library
//!
//! Headless core of a product catalog page: the product store, a pure filter
//! engine, debounced filter input and infinite-scroll pagination with
//! simulated fetch latency.

pub mod assets;
pub mod constants;
pub mod domain;
pub mod error;
pub mod features;
pub mod logging;
pub mod services;
pub mod state;
pub mod utils;
