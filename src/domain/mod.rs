//! Domain - Pure Data Structures
//!
//! Products, filter criteria, scroll metrics and configuration. Nothing in
//! here schedules work or holds mutable catalog state.

pub mod config;
pub mod filter;
pub mod product;
pub mod scroll;
