pub mod dictionary;
pub mod profile;

use crate::analysis::OutputFormat;
use crate::dictionary::{BetfairDictionary, FieldMetadataLookup, PluginDictionary};
use crate::errors::{AppError, AppResult};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// Parse an output format flag
fn parse_format(format_str: &str) -> AppResult<OutputFormat> {
    format_str.parse().map_err(AppError::InvalidInput)
}

/// Plugin dictionary when a directory is given, the built-in tables otherwise
fn build_lookup(plugin_dir: Option<&Path>) -> AppResult<Arc<dyn FieldMetadataLookup>> {
    match plugin_dir {
        Some(dir) => {
            let plugin = PluginDictionary::load(dir)?;
            info!(
                "Using plugin dictionary {} ({} fields)",
                plugin.manifest().plugin_id,
                plugin.len()
            );
            Ok(Arc::new(plugin))
        }
        None => Ok(Arc::new(BetfairDictionary::new())),
    }
}

/// Write output to file with safe directory creation
fn write_output_to_file(path: &PathBuf, content: &str, description: &str) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    eprintln!("{} written to: {}", description, path.display());
    Ok(())
}

/// Print to stdout or write to `output` when given
fn emit(output: &Option<PathBuf>, content: &str, description: &str) -> AppResult<()> {
    match output {
        Some(path) => write_output_to_file(path, content, description),
        None => {
            if content.ends_with('\n') {
                print!("{}", content);
            } else {
                println!("{}", content);
            }
            Ok(())
        }
    }
}
