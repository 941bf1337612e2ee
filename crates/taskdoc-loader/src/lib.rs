//! taskdoc Loader
//!
//! Turns a path on disk into an ordered list of decoded Tekton Tasks.
//!
//! - A file path yields exactly one task
//! - A directory path yields every `task-*` entry, in lexical order
//! - Documents may be YAML or JSON and must be `tekton.dev` `Task` objects
//!
//! Loading stops at the first file that cannot be read or decoded.

#![deny(unsafe_code, dead_code, unused_imports, unused_variables, missing_docs)]

pub mod decode;
pub mod error;
pub mod loader;

pub use decode::{decode_task, Format};
pub use error::{DecodeError, LoaderError, Result};
pub use loader::{load_task, TaskLoader, TaskSource, TASK_FILE_PREFIX};
