use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration loaded from profiler.toml or environment variables
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub input: InputConfig,
    pub profiling: ProfilingConfig,
    pub dictionary: DictionaryConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    /// File, directory or glob pattern holding NDJSON records
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DictionaryConfig {
    /// Local plugin directory (manifest.json, fields.json, categories.json)
    pub plugin_dir: Option<PathBuf>,
}

/// Every cap and threshold used by the walker and the statistics passes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfilingConfig {
    /// Containers nested deeper than this are invisible to the registry
    pub max_depth: usize,
    /// Sample values kept per field path
    pub max_samples: usize,
    /// Array samples keep only this many leading elements
    pub sample_array_truncate: usize,
    /// Arrays with this many elements or more are not sampled at all
    pub sample_array_max_len: usize,
    /// Leading array elements the walker descends into
    pub array_recursion_width: usize,
    /// Records re-scanned by the value distribution pass
    pub distribution_scan_limit: usize,
    /// Most frequent values reported per categorical field
    pub distribution_top_n: usize,
    /// Records searched for representative examples
    pub example_scan_limit: usize,
    /// Minimum presence percentage for a schema column
    pub schema_min_presence: f64,
    /// Schema columns kept, in field order
    pub schema_max_columns: usize,
    /// Maximum generated column name length
    pub column_name_max_len: usize,
    /// Rarely-present paths listed in the completeness summary
    pub rarely_present_limit: usize,
    /// Timestamps needed before a batch counts as a time series
    pub time_series_threshold: usize,
    /// Records between walk progress log lines
    pub progress_interval: usize,
    /// Worker threads for the field discovery walk (1 = sequential)
    pub workers: usize,
}

impl Default for ProfilingConfig {
    fn default() -> Self {
        Self {
            max_depth: 10,
            max_samples: 5,
            sample_array_truncate: 3,
            sample_array_max_len: 10,
            array_recursion_width: 3,
            distribution_scan_limit: 10_000,
            distribution_top_n: 20,
            example_scan_limit: 1_000,
            schema_min_presence: 50.0,
            schema_max_columns: 50,
            column_name_max_len: 128,
            rarely_present_limit: 20,
            time_series_threshold: 100,
            progress_interval: 10_000,
            workers: 1,
        }
    }
}

impl AppConfig {
    /// Load configuration from profiler.toml file and environment variables
    /// Environment variables take precedence over file configuration
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = ProfilingConfig::default();
        let config = Config::builder()
            .set_default("profiling.max_depth", defaults.max_depth as i64)?
            .set_default("profiling.max_samples", defaults.max_samples as i64)?
            .set_default(
                "profiling.sample_array_truncate",
                defaults.sample_array_truncate as i64,
            )?
            .set_default(
                "profiling.sample_array_max_len",
                defaults.sample_array_max_len as i64,
            )?
            .set_default(
                "profiling.array_recursion_width",
                defaults.array_recursion_width as i64,
            )?
            .set_default(
                "profiling.distribution_scan_limit",
                defaults.distribution_scan_limit as i64,
            )?
            .set_default(
                "profiling.distribution_top_n",
                defaults.distribution_top_n as i64,
            )?
            .set_default(
                "profiling.example_scan_limit",
                defaults.example_scan_limit as i64,
            )?
            .set_default("profiling.schema_min_presence", defaults.schema_min_presence)?
            .set_default(
                "profiling.schema_max_columns",
                defaults.schema_max_columns as i64,
            )?
            .set_default(
                "profiling.column_name_max_len",
                defaults.column_name_max_len as i64,
            )?
            .set_default(
                "profiling.rarely_present_limit",
                defaults.rarely_present_limit as i64,
            )?
            .set_default(
                "profiling.time_series_threshold",
                defaults.time_series_threshold as i64,
            )?
            .set_default(
                "profiling.progress_interval",
                defaults.progress_interval as i64,
            )?
            .set_default("profiling.workers", defaults.workers as i64)?
            // Load from profiler.toml if it exists
            .add_source(File::with_name("profiler").required(false))
            // PROFILER_PROFILING__MAX_DEPTH=4 overrides profiling.max_depth,
            // PROFILER_INPUT__PATH overrides input.path
            .add_source(
                config::Environment::with_prefix("PROFILER")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let app_config: AppConfig = config.try_deserialize()?;

        app_config.profiling.validate()?;

        Ok(app_config)
    }

    /// Get default config values for CLI argument defaults
    pub fn get_defaults() -> Self {
        // Fall back to built-in defaults if the file or environment is unusable
        Self::load().unwrap_or_default()
    }
}

impl ProfilingConfig {
    /// Reject settings that would make the walk or a pass meaningless
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_samples == 0 {
            return Err(ConfigError::Message(
                "profiling.max_samples must be at least 1".to_string(),
            ));
        }
        if self.workers == 0 {
            return Err(ConfigError::Message(
                "profiling.workers must be at least 1".to_string(),
            ));
        }
        if !(0.0..=100.0).contains(&self.schema_min_presence) {
            return Err(ConfigError::Message(format!(
                "profiling.schema_min_presence must be within 0..=100, got {}",
                self.schema_min_presence
            )));
        }
        if self.column_name_max_len < 2 {
            return Err(ConfigError::Message(
                "profiling.column_name_max_len must be at least 2".to_string(),
            ));
        }
        Ok(())
    }
}
