//! Core data: snapshot types, configuration, and the snapshot store.

pub mod config;
pub mod store;
pub mod types;
