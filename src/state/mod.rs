//! State - Catalog State Modules
//!
//! Plain owned state. Mutation happens only through these methods, on the
//! thread that owns the controller.

pub mod catalog_state;
pub mod pagination_state;
