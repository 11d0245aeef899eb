//! Features - Vertical Feature Slices
//!
//! Each feature owns its controller; rendering lives outside this crate.

pub mod catalog;
