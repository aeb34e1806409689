//! NDJSON record loading
//!
//! Resolves a file, directory or glob pattern into an ordered list of record files
//! and parses them line by line. Lines that are not valid JSON are counted and
//! skipped so that the profiling core only ever sees well-formed records.

use crate::errors::{AppError, AppResult};
use bzip2::read::BzDecoder;
use flate2::read::MultiGzDecoder;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// File name suffixes recognised as record files
pub const RECORD_EXTENSIONS: &[&str] = &["ndjson", "jsonl", "json"];

lazy_static! {
    /// Sharded export names such as `part-00003-of-00016`
    static ref SHARD_PATTERN: Regex = Regex::new(r"-\d{5}-of-\d{5}").expect("valid regex literal");
}

/// Counters describing one load
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadStats {
    pub files_read: usize,
    pub lines_read: usize,
    pub records_loaded: usize,
    pub blank_lines: usize,
    pub malformed_lines: usize,
}

/// Input compression, detected from the file name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    None,
    Gzip,
    Bzip2,
}

impl Compression {
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("gz") => Compression::Gzip,
            Some(ext) if ext.eq_ignore_ascii_case("bz2") => Compression::Bzip2,
            _ => Compression::None,
        }
    }
}

/// Does this file name look like NDJSON records (optionally compressed)?
pub fn is_record_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    let lower = name.to_ascii_lowercase();
    let stem = lower
        .strip_suffix(".gz")
        .or_else(|| lower.strip_suffix(".bz2"))
        .unwrap_or(&lower);

    RECORD_EXTENSIONS
        .iter()
        .any(|ext| stem.ends_with(&format!(".{}", ext)))
        || stem.contains(".ndjson")
        || SHARD_PATTERN.is_match(stem)
}

/// Line-oriented JSON record loader
#[derive(Debug, Clone)]
pub struct NdjsonLoader {
    progress_interval: usize,
}

impl Default for NdjsonLoader {
    fn default() -> Self {
        Self::new(100_000)
    }
}

impl NdjsonLoader {
    /// # Arguments
    /// * `progress_interval` - Records between progress log lines (0 disables them)
    pub fn new(progress_interval: usize) -> Self {
        Self { progress_interval }
    }

    /// Resolve `input` into record files in sorted path order
    ///
    /// A plain file is always accepted. Directories are scanned (non-recursively) for
    /// record files. Anything else is treated as a glob pattern and every matching
    /// file is accepted.
    pub fn resolve_inputs(input: &str) -> AppResult<Vec<PathBuf>> {
        let path = Path::new(input);

        let mut files = if path.is_file() {
            vec![path.to_path_buf()]
        } else if path.is_dir() {
            let mut found = Vec::new();
            for entry in std::fs::read_dir(path)? {
                let candidate = entry?.path();
                if candidate.is_file() && is_record_file(&candidate) {
                    found.push(candidate);
                }
            }
            found
        } else {
            let mut found = Vec::new();
            for matched in glob::glob(input)? {
                let candidate = matched?;
                if candidate.is_file() {
                    found.push(candidate);
                }
            }
            found
        };

        files.sort();

        if files.is_empty() {
            return Err(AppError::InvalidInput(format!(
                "No NDJSON files found at {}",
                input
            )));
        }

        Ok(files)
    }

    /// Load every record reachable from `input`
    pub fn load(&self, input: &str) -> AppResult<(Vec<Value>, LoadStats)> {
        let files = Self::resolve_inputs(input)?;
        info!("Found {} data files", files.len());

        let mut records = Vec::new();
        let mut stats = LoadStats::default();

        for (i, file) in files.iter().enumerate() {
            info!(
                "Loading file {}/{}: {}",
                i + 1,
                files.len(),
                file.display()
            );
            self.load_file(file, &mut records, &mut stats)?;
        }

        if stats.malformed_lines > 0 {
            warn!(
                "Skipped {} malformed lines across {} files",
                stats.malformed_lines, stats.files_read
            );
        }
        info!("Total records loaded: {}", stats.records_loaded);

        Ok((records, stats))
    }

    /// Append the records of a single file
    pub fn load_file(
        &self,
        path: &Path,
        records: &mut Vec<Value>,
        stats: &mut LoadStats,
    ) -> AppResult<()> {
        let file = File::open(path)?;
        let reader: Box<dyn Read> = match Compression::for_path(path) {
            Compression::Gzip => Box::new(MultiGzDecoder::new(file)),
            Compression::Bzip2 => Box::new(BzDecoder::new(file)),
            Compression::None => Box::new(file),
        };

        stats.files_read += 1;
        self.parse_lines(
            BufReader::new(reader),
            &path.display().to_string(),
            records,
            stats,
        )
    }

    /// Parse NDJSON from any buffered reader
    ///
    /// Blank lines are ignored. Lines that are not valid UTF-8 or not valid JSON are
    /// counted as malformed and skipped. Only I/O failures abort the load.
    pub fn parse_lines<R: BufRead>(
        &self,
        reader: R,
        source: &str,
        records: &mut Vec<Value>,
        stats: &mut LoadStats,
    ) -> AppResult<()> {
        for (index, line) in reader.split(b'\n').enumerate() {
            let bytes = line?;
            stats.lines_read += 1;

            let text = match std::str::from_utf8(&bytes) {
                Ok(text) => text.trim(),
                Err(_) => {
                    stats.malformed_lines += 1;
                    debug!("{}:{}: not valid UTF-8", source, index + 1);
                    continue;
                }
            };

            if text.is_empty() {
                stats.blank_lines += 1;
                continue;
            }

            match serde_json::from_str::<Value>(text) {
                Ok(record) => {
                    records.push(record);
                    stats.records_loaded += 1;
                    if self.progress_interval > 0
                        && stats.records_loaded % self.progress_interval == 0
                    {
                        info!("Loaded {} records", stats.records_loaded);
                    }
                }
                Err(e) => {
                    stats.malformed_lines += 1;
                    debug!("{}:{}: {}", source, index + 1, e);
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::TempDir;

    #[test]
    fn test_record_file_names() {
        assert!(is_record_file(Path::new("feed.ndjson")));
        assert!(is_record_file(Path::new("feed.JSONL")));
        assert!(is_record_file(Path::new("feed.json.gz")));
        assert!(is_record_file(Path::new("feed.ndjson.bz2")));
        assert!(is_record_file(Path::new("feed.ndjson.part1")));
        assert!(is_record_file(Path::new("export-00001-of-00016")));
        assert!(!is_record_file(Path::new("notes.txt")));
        assert!(!is_record_file(Path::new("export-1-of-16")));
    }

    #[test]
    fn test_compression_detection() {
        assert_eq!(Compression::for_path(Path::new("a.ndjson.gz")), Compression::Gzip);
        assert_eq!(Compression::for_path(Path::new("a.ndjson.BZ2")), Compression::Bzip2);
        assert_eq!(Compression::for_path(Path::new("a.ndjson")), Compression::None);
    }

    #[test]
    fn test_parse_lines_counts_blank_and_malformed() {
        let input = "{\"op\":\"mcm\"}\n\n   \n{not json}\n[1,2]\n\"bare\"\n";
        let loader = NdjsonLoader::default();
        let mut records = Vec::new();
        let mut stats = LoadStats::default();

        loader
            .parse_lines(Cursor::new(input), "inline", &mut records, &mut stats)
            .unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(stats.records_loaded, 3);
        assert_eq!(stats.blank_lines, 2);
        assert_eq!(stats.malformed_lines, 1);
        assert_eq!(stats.lines_read, 6);
    }

    #[test]
    fn test_parse_lines_invalid_utf8_is_malformed() {
        let mut input = b"{\"pt\":1}\n".to_vec();
        input.extend_from_slice(&[0xff, 0xfe, b'\n']);
        let mut records = Vec::new();
        let mut stats = LoadStats::default();

        NdjsonLoader::default()
            .parse_lines(Cursor::new(input), "inline", &mut records, &mut stats)
            .unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(stats.malformed_lines, 1);
    }

    #[test]
    fn test_resolve_directory_sorted_and_filtered() {
        let dir = TempDir::new().unwrap();
        for name in ["b.ndjson", "a.jsonl", "readme.md"] {
            let mut f = File::create(dir.path().join(name)).unwrap();
            writeln!(f, "{{}}").unwrap();
        }

        let files = NdjsonLoader::resolve_inputs(&dir.path().to_string_lossy()).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.jsonl", "b.ndjson"]);
    }

    #[test]
    fn test_resolve_nothing_is_invalid_input() {
        let dir = TempDir::new().unwrap();
        let pattern = dir.path().join("*.ndjson");
        let err = NdjsonLoader::resolve_inputs(&pattern.to_string_lossy()).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn test_load_gzip_file() {
        use flate2::write::GzEncoder;
        use flate2::Compression as GzLevel;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("feed.ndjson.gz");
        let mut encoder = GzEncoder::new(File::create(&path).unwrap(), GzLevel::default());
        encoder
            .write_all(b"{\"op\":\"mcm\",\"pt\":1}\n{\"op\":\"mcm\",\"pt\":2}\n")
            .unwrap();
        encoder.finish().unwrap();

        let (records, stats) = NdjsonLoader::default()
            .load(&path.to_string_lossy())
            .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(stats.files_read, 1);
        assert_eq!(records[1]["pt"], 2);
    }
}
