use super::{build_lookup, emit, parse_format};
use crate::analysis::{ProfileDocument, ProfilingEngine, ReportFormatter};
use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use crate::loader::{LoadStats, NdjsonLoader};
use crate::types::analysis_results::ProfileReport;
use clap::Args;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Args)]
pub struct ProfileCommand {
    /// NDJSON file, directory or glob pattern (overrides profiler.toml and env vars)
    #[arg(long)]
    input: Option<String>,

    /// Output format: console, json or csv
    #[arg(long, default_value = "console")]
    format: String,

    /// Write the report to this file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Maximum container nesting depth to walk (overrides profiler.toml)
    #[arg(long)]
    max_depth: Option<usize>,

    /// Worker threads for field discovery (overrides profiler.toml)
    #[arg(long)]
    workers: Option<usize>,

    /// Field dictionary plugin directory (overrides profiler.toml)
    #[arg(long)]
    plugin_dir: Option<PathBuf>,

    /// Abandon the run after this many seconds
    #[arg(long)]
    timeout_secs: Option<u64>,
}

impl ProfileCommand {
    pub async fn run(&self) -> AppResult<()> {
        info!("=== Market Feed Profiler ===");

        let app_config = match AppConfig::load() {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to load configuration: {}", e);
                return Err(AppError::Config(format!(
                    "{}. Check profiler.toml and PROFILER_* environment variables",
                    e
                )));
            }
        };

        // CLI arguments override config values
        let input = self
            .input
            .clone()
            .or_else(|| {
                app_config
                    .input
                    .path
                    .as_ref()
                    .map(|p| p.to_string_lossy().to_string())
            })
            .ok_or_else(|| {
                AppError::Config(
                    "No input provided. Use --input or configure input.path in profiler.toml"
                        .to_string(),
                )
            })?;

        let mut profiling = app_config.profiling.clone();
        if let Some(max_depth) = self.max_depth {
            profiling.max_depth = max_depth;
        }
        if let Some(workers) = self.workers {
            profiling.workers = workers;
        }
        profiling.validate()?;

        let format = parse_format(&self.format)?;
        let plugin_dir = self
            .plugin_dir
            .clone()
            .or_else(|| app_config.dictionary.plugin_dir.clone());
        let engine = ProfilingEngine::new(build_lookup(plugin_dir.as_deref())?, profiling);

        info!("Input: {}", input);
        info!(
            "Max depth: {}, workers: {}",
            engine.config().max_depth,
            engine.config().workers
        );

        let task_input = input.clone();
        let handle = tokio::task::spawn_blocking(
            move || -> AppResult<(ProfileReport, LoadStats)> {
                let loader = NdjsonLoader::new(engine.config().progress_interval);
                let (records, load_stats) = loader.load(&task_input)?;
                Ok((engine.analyse(&records), load_stats))
            },
        );

        let joined = match self.timeout_secs {
            Some(seconds) => tokio::time::timeout(Duration::from_secs(seconds), handle)
                .await
                .map_err(|_| AppError::Timeout { seconds })?,
            None => handle.await,
        };
        let (report, load_stats) = joined??;

        let document = ProfileDocument {
            generated_at: chrono::Utc::now().to_rfc3339(),
            source: &input,
            load_stats: &load_stats,
            report: &report,
        };
        let formatted = ReportFormatter::format_profile(&document, &format)?;

        emit(&self.output, &formatted, "Profile report")
    }
}
