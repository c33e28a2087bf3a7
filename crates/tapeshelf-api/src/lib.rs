//! Tapeshelf API Library
//!
//! This crate provides the HTTP handlers, application state and server setup.

// Module declarations
pub mod constants;
mod handlers;
pub mod setup;
mod telemetry;

// Public modules
pub mod error;
pub mod state;

// Re-exports
pub use error::ErrorResponse;
pub use setup::routes::CollaboratorRoutes;
