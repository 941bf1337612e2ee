//! taskdoc Render
//!
//! Builds the Markdown document describing a batch of Tekton Tasks:
//!
//! 1. Folder heading
//! 2. One summary bullet per task, linking to its section
//! 3. Installation instructions for the whole folder
//! 4. One detail section per task (install command, params, resources)
//!
//! Tasks are rendered in the order given; nothing is sorted or deduplicated.

#![deny(unsafe_code, dead_code, unused_imports, unused_variables, missing_docs)]

pub mod document;
pub mod error;

pub use document::{assemble, write_document, CATALOG_REPOSITORY, UPSTREAM_CATALOG_BASE};
pub use error::{RenderError, Result};
