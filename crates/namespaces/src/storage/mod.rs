//! Storage layer for the namespace store.
//!
//! Plain `Result`-returning routines that read and write a flat
//! `prefix -> uri` JSON object; policy about which failures matter lives
//! with the callers.

pub mod json_map_store;
