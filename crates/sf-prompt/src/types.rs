//! Request document types
//!
//! The inbound document is free-form JSON; fields are modeled as explicit
//! optional `serde_json::Value`s so any shape survives deserialization and
//! the normalizer decides what to do with it. Serde renames carry the exact
//! wire field names.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw, caller-supplied project description. Every field is optional and
/// free-form; normalization always succeeds.
#[derive(Debug, Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ProjectRequest {
    #[serde(rename = "Project name", default)]
    pub project_name: Option<Value>,

    #[serde(rename = "Definition/use case", default)]
    pub definition: Option<Value>,

    #[serde(rename = "MCU", default)]
    pub mcu: Option<Value>,

    /// Expected to be a sequence; any other shape is replaced outright.
    #[serde(rename = "Sensors", default)]
    pub sensors: Option<Value>,

    /// Expected to be a sequence; any other shape is replaced outright.
    #[serde(rename = "Actuators", default)]
    pub actuators: Option<Value>,

    /// Expected to be a mapping; any other shape is replaced outright.
    #[serde(rename = "Other parameters", default)]
    pub other_parameters: Option<Value>,
}

/// Canonical project description: every field present and non-empty.
///
/// Struct field order fixes the key order of the serialized user message,
/// so the prompt payload is deterministic for a given input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRequest {
    #[serde(rename = "Project name")]
    pub project_name: Value,

    #[serde(rename = "Definition/use case")]
    pub definition: Value,

    #[serde(rename = "MCU")]
    pub mcu: Value,

    #[serde(rename = "Sensors")]
    pub sensors: Vec<Value>,

    #[serde(rename = "Actuators")]
    pub actuators: Vec<Value>,

    #[serde(rename = "Other parameters")]
    pub other_parameters: OtherParameters,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtherParameters {
    pub communication: Value,
    pub control: Value,
    pub timing: Vec<Value>,
}
