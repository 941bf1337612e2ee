use crate::config::Config;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use taskdoc_loader::{TaskLoader, TaskSource};
use taskdoc_types::Task;
use tracing::{error, info};

/// Documentation service - runs one generation pass
pub struct DocService {
    config: Config,
    loader: TaskLoader,
}

impl DocService {
    /// Create a new documentation service
    pub fn new(config: Config) -> Self {
        Self {
            config,
            loader: TaskLoader::new(),
        }
    }

    /// Generate the document for `path` and print it to stdout
    pub fn run(self, path: &Path) -> Result<()> {
        taskdoc_logging::init_logging(&self.config.logging.level, self.config.logging.json)?;
        info!("Generating task documentation for {:?}", path);

        let doc = self.generate(path).inspect_err(|e| error!("{e:#}"))?;

        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(doc.as_bytes())
            .and_then(|()| stdout.flush())
            .context("failed to write document to stdout")?;

        Ok(())
    }

    /// Load every task under `path` and assemble the document
    pub fn generate(&self, path: &Path) -> Result<String> {
        let source = TaskSource::resolve(path)?;
        let folder = source.folder_label();

        let tasks: Vec<Task> = self.loader.load(&source)?;
        info!("Loaded {} task(s) for '{}'", tasks.len(), folder);

        let doc = taskdoc_render::assemble(&folder, &tasks)?;
        Ok(doc)
    }
}
