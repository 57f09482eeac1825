//! Shared helpers used across the workspace: tracing setup and small
//! filesystem checks.

pub mod utils;
pub mod env;
