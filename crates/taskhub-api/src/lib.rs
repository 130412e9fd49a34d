//! # taskhub-api
//!
//! The Axum HTTP layer: application state, routes, handlers, DTOs, the
//! authenticated-user extractor, and the `AppError` → HTTP mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
