//! Shared types for the GST compliance suite
//!
//! Domain models, payload types, and the unified error system used by the
//! compliance engine and the surrounding application layers.

pub mod error;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode};
