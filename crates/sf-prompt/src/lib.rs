//! Input normalization and prompt construction
//!
//! Turns a loosely-typed project description into a canonical
//! [`NormalizedRequest`] and packages it, together with the fixed system
//! instruction, into the chat-completion payload sent upstream.

pub mod builder;
pub mod normalize;
pub mod types;

pub use builder::{build_payload, ChatMessage, ChatPayload, SYSTEM_PROMPT};
pub use normalize::{normalize, PLACEHOLDER};
pub use types::{NormalizedRequest, OtherParameters, ProjectRequest};
