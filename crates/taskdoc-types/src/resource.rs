//! Resource declarations

use serde::{Deserialize, Serialize};

/// Input and output resources a Task consumes or produces
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskResources {
    /// Resources the Task consumes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inputs: Option<Vec<ResourceDeclaration>>,
    /// Resources the Task produces
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outputs: Option<Vec<ResourceDeclaration>>,
}

/// A named, typed reference to a pipeline resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDeclaration {
    /// Resource name
    pub name: String,
    /// Resource type (`git`, `image`, `cluster`, ...)
    #[serde(rename = "type")]
    pub resource_type: String,
    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Where the resource is mounted inside the step containers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_path: Option<String>,
    /// Whether a pipeline may omit this resource
    #[serde(default)]
    pub optional: bool,
}

impl ResourceDeclaration {
    /// Create a required resource declaration
    pub fn new(name: impl Into<String>, resource_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            resource_type: resource_type.into(),
            description: None,
            target_path: None,
            optional: false,
        }
    }
}
