//! CLI subcommands.

pub mod inspect;
pub mod usage;

use maquette_atelier::PlaygroundConfig;
use std::fs;
use std::path::{Path, PathBuf};

/// Output format of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Failure of a CLI command.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid playground definition {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error(transparent)]
    Load(#[from] maquette_atelier::LoadError),
}

/// Read a playground definition written as relaxed JSON.
pub fn read_config(path: &Path) -> Result<PlaygroundConfig, CommandError> {
    let source = fs::read_to_string(path).map_err(|source| CommandError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    PlaygroundConfig::from_json5(&source).map_err(|e| CommandError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
