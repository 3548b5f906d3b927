//! Upstream completion API client and response validation

pub mod client;
pub mod validate;

pub use client::{GroqClient, REQUEST_TIMEOUT};
pub use validate::{extract_artifacts, GeneratedArtifacts};
