//! Shared types for sketchforge

pub mod errors;

pub use errors::{AppError, AppResult};
