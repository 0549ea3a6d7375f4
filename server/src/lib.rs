//! Thoughtboard library
//!
//! This library exposes the core functionality of the thought board API
//! for the server binary and for testing.

pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod storage;
