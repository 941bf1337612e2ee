//! Task spec and parameter declarations

use serde::{Deserialize, Serialize};

use crate::{ResourceDeclaration, TaskResources};

/// The documented subset of a Task's `spec`
///
/// Everything else (steps, workspaces, results, sidecars) is accepted and
/// dropped during decoding. `v1alpha1` Tasks nest params and resources under
/// `inputs`/`outputs` instead; both layouts decode into this struct.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskSpec {
    /// Free-form description, empty when absent
    #[serde(default)]
    pub description: String,
    /// Declared parameters (`v1beta1` and later)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<ParamSpec>>,
    /// Declared resources (`v1beta1`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<TaskResources>,
    /// `v1alpha1` inputs: params and input resources
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inputs: Option<LegacyInputs>,
    /// `v1alpha1` outputs: output resources
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outputs: Option<LegacyOutputs>,
}

/// `spec.inputs` of a `v1alpha1` Task
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LegacyInputs {
    /// Declared parameters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<ParamSpec>>,
    /// Input resources
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<ResourceDeclaration>>,
}

/// `spec.outputs` of a `v1alpha1` Task
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LegacyOutputs {
    /// Output resources
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<ResourceDeclaration>>,
}

/// Value type of a Task parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    /// A single string (the default)
    String,
    /// A list of strings
    Array,
    /// A map of string keys to string values
    Object,
}

/// A declared Task parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamSpec {
    /// Parameter name
    pub name: String,
    /// Description, empty when absent
    #[serde(default)]
    pub description: String,
    /// Declared value type
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub param_type: Option<ParamType>,
    /// Default value, in whatever shape the document gives it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
}

impl ParamSpec {
    /// Create an untyped parameter with no default
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            param_type: None,
            default: None,
        }
    }
}
