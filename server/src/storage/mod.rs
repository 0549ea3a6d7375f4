//! Storage module
//!
//! Provides the file-backed thought store.

pub mod thought_store;

pub use thought_store::ThoughtStore;
