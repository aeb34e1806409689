use super::{build_lookup, emit, parse_format};
use crate::analysis::ReportFormatter;
use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use crate::types::ContextTag;
use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Field dictionary commands
#[derive(Args)]
pub struct DictionaryCommand {
    #[command(subcommand)]
    pub action: DictionaryCommands,
}

#[derive(Subcommand)]
pub enum DictionaryCommands {
    /// Describe a single field key
    Lookup {
        /// Field key, e.g. ltp or marketDefinition
        key: String,

        /// Container context: mc, oc, marketDefinition, rc, runners, orc or uo
        #[arg(long)]
        context: Option<String>,

        /// Field dictionary plugin directory (overrides profiler.toml)
        #[arg(long)]
        plugin_dir: Option<PathBuf>,

        /// Output format: console or json
        #[arg(long, default_value = "console")]
        format: String,
    },
    /// Dump every known field and category
    List {
        /// Field dictionary plugin directory (overrides profiler.toml)
        #[arg(long)]
        plugin_dir: Option<PathBuf>,

        /// Output format: console or json
        #[arg(long, default_value = "json")]
        format: String,

        /// Write the listing to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

impl DictionaryCommand {
    pub fn run(&self) -> AppResult<()> {
        let configured_dir = AppConfig::get_defaults().dictionary.plugin_dir;

        match &self.action {
            DictionaryCommands::Lookup {
                key,
                context,
                plugin_dir,
                format,
            } => {
                let context = context
                    .as_deref()
                    .map(str::parse::<ContextTag>)
                    .transpose()
                    .map_err(AppError::InvalidInput)?;
                let format = parse_format(format)?;
                let dir = plugin_dir.clone().or(configured_dir);
                let lookup = build_lookup(dir.as_deref())?;

                let metadata = lookup.lookup(key, context);
                let output = ReportFormatter::format_lookup(key, context, &metadata, &format)?;
                emit(&None, &output, "Field lookup")
            }
            DictionaryCommands::List {
                plugin_dir,
                format,
                output,
            } => {
                let format = parse_format(format)?;
                let dir = plugin_dir.clone().or(configured_dir);
                let lookup = build_lookup(dir.as_deref())?;

                let formatted = ReportFormatter::format_dictionary(&lookup.listing(), &format)?;
                emit(output, &formatted, "Dictionary listing")
            }
        }
    }
}
