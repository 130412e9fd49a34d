//! # taskhub-core
//!
//! Core crate for Taskhub. Contains the unified error system, configuration
//! schemas, shared traits, and common types (pagination).
//!
//! This crate has **no** internal dependencies on other Taskhub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
