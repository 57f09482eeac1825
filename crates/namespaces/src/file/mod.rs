//! File-backed stores.

pub mod defaults;
pub mod namespace_store;
