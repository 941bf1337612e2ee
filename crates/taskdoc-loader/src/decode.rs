//! Task document decoding
//!
//! A document is decoded in two passes: first only the type metadata
//! (`apiVersion`, `kind`) to reject foreign resources with a clear message,
//! then the full Task shape.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use taskdoc_types::{Task, API_GROUP, SUPPORTED_VERSIONS, TASK_KIND};
use tracing::trace;

use crate::error::DecodeError;

/// Serialization format of a task document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// YAML, the usual format of catalog files
    Yaml,
    /// JSON, as produced by `kubectl get -o json`
    Json,
}

impl Format {
    /// JSON objects start with `{`; anything else is treated as YAML
    pub fn detect(content: &str) -> Self {
        if content.trim_start().starts_with('{') {
            Format::Json
        } else {
            Format::Yaml
        }
    }

    fn parse<T: DeserializeOwned>(self, content: &str) -> Result<T, DecodeError> {
        Ok(match self {
            Format::Yaml => serde_yaml::from_str(content)?,
            Format::Json => serde_json::from_str(content)?,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TypeMeta {
    #[serde(default)]
    api_version: String,
    #[serde(default)]
    kind: String,
}

/// Decode a Task document from its text
pub fn decode_task(content: &str) -> Result<Task, DecodeError> {
    let format = Format::detect(content);
    trace!("Decoding task document as {:?}", format);

    let meta: TypeMeta = format.parse(content)?;
    check_type_meta(&meta)?;

    format.parse(content)
}

fn check_type_meta(meta: &TypeMeta) -> Result<(), DecodeError> {
    if meta.kind.is_empty() || meta.api_version.is_empty() {
        return Err(DecodeError::MissingTypeMeta);
    }

    if meta.kind != TASK_KIND {
        return Err(DecodeError::UnsupportedKind {
            kind: meta.kind.clone(),
        });
    }

    let supported = meta
        .api_version
        .split_once('/')
        .is_some_and(|(group, version)| {
            group == API_GROUP && SUPPORTED_VERSIONS.contains(&version)
        });

    if !supported {
        return Err(DecodeError::UnsupportedApiVersion {
            api_version: meta.api_version.clone(),
        });
    }

    Ok(())
}
