//! Services module
//!
//! Business logic services that coordinate between routes and storage.

pub mod thoughts;
pub mod validator;

pub use thoughts::ThoughtsService;
