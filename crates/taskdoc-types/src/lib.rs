//! taskdoc Types - Tekton Task resource model
//!
//! This module defines the decoded shape of a `kind: Task` document: the
//! Kubernetes object envelope plus the parts of the Task spec that end up in
//! the generated documentation.

#![deny(unsafe_code, dead_code, unused_imports, unused_variables, missing_docs)]

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub mod resource;
pub mod task;

pub use resource::{ResourceDeclaration, TaskResources};
pub use task::{LegacyInputs, LegacyOutputs, ParamSpec, ParamType, TaskSpec};

/// API group every supported Task version belongs to
pub const API_GROUP: &str = "tekton.dev";

/// Versions of the `tekton.dev` group whose Task shape we understand
pub const SUPPORTED_VERSIONS: &[&str] = &["v1alpha1", "v1beta1", "v1"];

/// The only resource kind this tool documents
pub const TASK_KIND: &str = "Task";

/// Object metadata shared by every Kubernetes resource
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectMeta {
    /// Object name, required
    pub name: String,
    /// Namespace, if the document pins one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Labels
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    /// Annotations
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
}

/// A decoded Tekton Task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// `tekton.dev/<version>`
    pub api_version: String,
    /// Always `Task` once decoded
    pub kind: String,
    /// Object metadata
    pub metadata: ObjectMeta,
    /// Task spec, empty when absent
    #[serde(default)]
    pub spec: TaskSpec,
}

impl Task {
    /// Create a `tekton.dev/v1beta1` Task with the given name and an empty spec
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            api_version: format!("{API_GROUP}/v1beta1"),
            kind: TASK_KIND.to_string(),
            metadata: ObjectMeta {
                name: name.into(),
                ..ObjectMeta::default()
            },
            spec: TaskSpec::default(),
        }
    }

    /// Set the spec description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.spec.description = description.into();
        self
    }

    /// Append a parameter, creating the params list if it was absent
    #[must_use]
    pub fn with_param(mut self, param: ParamSpec) -> Self {
        self.spec.params.get_or_insert_with(Vec::new).push(param);
        self
    }

    /// Append an input resource, creating the inputs list if it was absent
    #[must_use]
    pub fn with_input(mut self, input: ResourceDeclaration) -> Self {
        self.spec
            .resources
            .get_or_insert_with(TaskResources::default)
            .inputs
            .get_or_insert_with(Vec::new)
            .push(input);
        self
    }

    /// Append an output resource, creating the outputs list if it was absent
    #[must_use]
    pub fn with_output(mut self, output: ResourceDeclaration) -> Self {
        self.spec
            .resources
            .get_or_insert_with(TaskResources::default)
            .outputs
            .get_or_insert_with(Vec::new)
            .push(output);
        self
    }

    /// Task name from `metadata.name`
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// Spec description, possibly empty
    pub fn description(&self) -> &str {
        &self.spec.description
    }

    /// Declared parameters, from `spec.params` or `spec.inputs.params`
    pub fn params(&self) -> Option<&[ParamSpec]> {
        self.spec.params.as_deref().or_else(|| {
            self.spec
                .inputs
                .as_ref()
                .and_then(|i| i.params.as_deref())
        })
    }

    /// Input resources, from `spec.resources.inputs` or `spec.inputs.resources`
    pub fn inputs(&self) -> Option<&[ResourceDeclaration]> {
        self.spec
            .resources
            .as_ref()
            .and_then(|r| r.inputs.as_deref())
            .or_else(|| {
                self.spec
                    .inputs
                    .as_ref()
                    .and_then(|i| i.resources.as_deref())
            })
    }

    /// Output resources, from `spec.resources.outputs` or `spec.outputs.resources`
    pub fn outputs(&self) -> Option<&[ResourceDeclaration]> {
        self.spec
            .resources
            .as_ref()
            .and_then(|r| r.outputs.as_deref())
            .or_else(|| {
                self.spec
                    .outputs
                    .as_ref()
                    .and_then(|o| o.resources.as_deref())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_v1beta1_task() {
        let yaml = r#"
apiVersion: tekton.dev/v1beta1
kind: Task
metadata:
  name: git-clone
  labels:
    app.kubernetes.io/version: "0.1"
spec:
  description: Clones a repo
  params:
    - name: url
      description: repo url
      type: string
    - name: revision
      default: main
  resources:
    inputs:
      - name: repo
        type: git
  steps:
    - name: clone
      image: alpine/git
"#;
        let task: Task = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(task.name(), "git-clone");
        assert_eq!(task.description(), "Clones a repo");

        let params = task.params().unwrap();
        assert_eq!(params.len(), 2);
        assert_eq!(params[0].param_type, Some(ParamType::String));
        assert_eq!(params[1].description, "");
        assert_eq!(params[1].default, Some(serde_json::json!("main")));

        let inputs = task.inputs().unwrap();
        assert_eq!(inputs[0].name, "repo");
        assert_eq!(inputs[0].resource_type, "git");
        assert!(task.outputs().is_none());
    }

    #[test]
    fn test_decode_v1alpha1_layout() {
        let yaml = r#"
apiVersion: tekton.dev/v1alpha1
kind: Task
metadata:
  name: build-push
spec:
  inputs:
    params:
      - name: url
        description: repo url
    resources:
      - name: repo
        type: git
  outputs:
    resources:
      - name: image
        type: image
"#;
        let task: Task = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(task.params().unwrap()[0].name, "url");
        assert_eq!(task.inputs().unwrap()[0].resource_type, "git");
        assert_eq!(task.outputs().unwrap()[0].name, "image");
    }

    #[test]
    fn test_absent_fields_stay_absent() {
        let yaml = "apiVersion: tekton.dev/v1\nkind: Task\nmetadata:\n  name: noop\n";
        let task: Task = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(task.description(), "");
        assert!(task.params().is_none());
        assert!(task.inputs().is_none());
        assert!(task.outputs().is_none());
    }

    #[test]
    fn test_builder_creates_lists_on_demand() {
        let task = Task::new("build")
            .with_description("Builds an image")
            .with_output(ResourceDeclaration::new("image", "image"));

        assert_eq!(task.kind, TASK_KIND);
        assert!(task.params().is_none());
        assert!(task.inputs().is_none());
        assert_eq!(task.outputs().map(<[_]>::len), Some(1));
    }
}
