mod config;
mod service;

use anyhow::Result;
use clap::Parser;
use config::{Config, Overrides};
use service::DocService;
use std::path::PathBuf;

/// Generate a Markdown summary of Tekton Task definitions
#[derive(Parser, Debug)]
#[command(name = "taskdoc", version)]
struct Args {
    /// File to parse or directory that will be walked to find tasks definition
    #[arg(short = 'f', long = "file")]
    file: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let overrides = Overrides {
        log_level: args.log_level,
        log_json: args.log_json.then_some(true),
    };
    let config = Config::load(&overrides)?;

    DocService::new(config).run(&args.file)
}
