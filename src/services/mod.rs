//! Service Layer
//!
//! Timers and data providers. Nothing here touches catalog state directly;
//! results travel back as [`CatalogEvent`]s.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     CatalogController                        │
//! │  ┌─────────────┐  ┌─────────────┐  ┌──────────────────┐     │
//! │  │  Debouncer  │  │ PageLoader  │  │  ProductSource   │     │
//! │  │  (filters)  │  │  (latency)  │  │  (seed / file)   │     │
//! │  └─────────────┘  └─────────────┘  └──────────────────┘     │
//! └─────────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼ CatalogEvent
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      State Layer                             │
//! │                (CatalogState, PaginationState)               │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod debounce;
mod events;
mod page_loader;
mod product_source;
mod runtime;

pub use debounce::*;
pub use events::*;
pub use page_loader::*;
pub use product_source::*;
pub use runtime::*;
