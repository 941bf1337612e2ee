use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub logging: LoggingConfig,
}

/// Values given on the command line, applied over every other layer
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub log_level: Option<String>,
    pub log_json: Option<bool>,
}

impl Config {
    /// Get the global config path: ~/.config/taskdoc/taskdoc.toml
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("taskdoc").join("taskdoc.toml"))
    }

    /// Load configuration with layered approach:
    /// 1. Built-in defaults
    /// 2. Global config: ~/.config/taskdoc/taskdoc.toml (optional)
    /// 3. Local override: ./taskdoc.toml (optional)
    /// 4. Environment variables with TASKDOC__ prefix
    /// 5. Command-line flags (highest priority)
    pub fn load(overrides: &Overrides) -> anyhow::Result<Self> {
        // Load .env file from current directory
        dotenvy::dotenv().ok();

        Self::load_from(
            Self::global_config_path().as_deref(),
            Path::new("taskdoc"),
            overrides,
        )
    }

    fn load_from(
        global: Option<&Path>,
        local: &Path,
        overrides: &Overrides,
    ) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder()
            .set_default("logging.level", "warn")?
            .set_default("logging.json", false)?;

        if let Some(global) = global {
            builder = builder.add_source(config::File::from(global).required(false));
        }

        builder = builder
            .add_source(config::File::from(local).required(false))
            .add_source(
                config::Environment::with_prefix("TASKDOC")
                    .separator("__")
                    .try_parsing(true),
            );

        if let Some(level) = &overrides.log_level {
            builder = builder.set_override("logging.level", level.as_str())?;
        }

        if let Some(json) = overrides.log_json {
            builder = builder.set_override("logging.json", json)?;
        }

        builder
            .build()?
            .try_deserialize()
            .context("invalid taskdoc configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_without_files() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(None, &dir.path().join("taskdoc"), &Overrides::default())
            .unwrap();
        assert_eq!(config.logging.level, "warn");
        assert!(!config.logging.json);
    }

    #[test]
    fn test_local_file_overrides_global() {
        let dir = tempdir().unwrap();
        let global = dir.path().join("global.toml");
        std::fs::write(&global, "[logging]\nlevel = \"debug\"\njson = true\n").unwrap();
        std::fs::write(dir.path().join("taskdoc.toml"), "[logging]\nlevel = \"info\"\n").unwrap();

        let config = Config::load_from(
            Some(&global),
            &dir.path().join("taskdoc"),
            &Overrides::default(),
        )
        .unwrap();
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.json);
    }

    #[test]
    fn test_flags_win() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("taskdoc.toml"), "[logging]\nlevel = \"info\"\n").unwrap();

        let overrides = Overrides {
            log_level: Some("trace".to_string()),
            log_json: Some(true),
        };
        let config = Config::load_from(None, &dir.path().join("taskdoc"), &overrides).unwrap();
        assert_eq!(config.logging.level, "trace");
        assert!(config.logging.json);
    }
}
