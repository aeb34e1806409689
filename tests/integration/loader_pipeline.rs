//! NDJSON files on disk through the loader and into the engine

use crate::common::{mixed_stream_records, scenario_a_records, write_ndjson};
use anyhow::Result;
use bzip2::write::BzEncoder;
use flate2::write::GzEncoder;
use market_feed_profiler::analysis::ProfilingEngine;
use market_feed_profiler::errors::AppError;
use market_feed_profiler::loader::NdjsonLoader;
use std::fs::File;
use std::io::Write;
use tempfile::TempDir;

#[test]
fn test_directory_with_compressed_shards_and_bad_lines() -> Result<()> {
    let dir = TempDir::new()?;
    let records = scenario_a_records();

    // Plain file: first four records plus a malformed and a blank line
    {
        let mut file = File::create(dir.path().join("a-00000-of-00003"))?;
        for record in &records[..4] {
            writeln!(file, "{}", record)?;
        }
        writeln!(file, "{{\"pt\": 1004, \"mc\": [")?;
        writeln!(file)?;
    }

    // Gzip shard: next three
    {
        let file = File::create(dir.path().join("b.ndjson.gz"))?;
        let mut encoder = GzEncoder::new(file, flate2::Compression::default());
        for record in &records[4..7] {
            writeln!(encoder, "{}", record)?;
        }
        encoder.finish()?;
    }

    // Bzip2 shard: last three
    {
        let file = File::create(dir.path().join("c.jsonl.bz2"))?;
        let mut encoder = BzEncoder::new(file, bzip2::Compression::default());
        for record in &records[7..] {
            writeln!(encoder, "{}", record)?;
        }
        encoder.finish()?;
    }

    std::fs::write(dir.path().join("notes.txt"), "not records")?;

    let (loaded, stats) = NdjsonLoader::default().load(&dir.path().to_string_lossy())?;

    assert_eq!(stats.files_read, 3);
    assert_eq!(stats.records_loaded, 10);
    assert_eq!(stats.malformed_lines, 1);
    assert_eq!(stats.blank_lines, 1);
    assert_eq!(loaded, records);

    let report = ProfilingEngine::default().analyse(&loaded);
    assert_eq!(report.total_records, 10);
    assert_eq!(report.temporal_analysis.unwrap().duration_ms, 9);
    Ok(())
}

#[test]
fn test_glob_pattern_loads_in_sorted_order() -> Result<()> {
    let dir = TempDir::new()?;
    let records = mixed_stream_records();
    write_ndjson(dir.path(), "feed-2.ndjson", &records[2..]);
    write_ndjson(dir.path(), "feed-1.ndjson", &records[..2]);
    write_ndjson(dir.path(), "other.ndjson", &records[..1]);

    let pattern = dir.path().join("feed-*.ndjson");
    let (loaded, stats) = NdjsonLoader::default().load(&pattern.to_string_lossy())?;

    assert_eq!(stats.files_read, 2);
    assert_eq!(loaded, records);
    Ok(())
}

#[test]
fn test_single_file_with_any_extension() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_ndjson(dir.path(), "capture.log", &mixed_stream_records());

    let (loaded, _) = NdjsonLoader::default().load(&path.to_string_lossy())?;
    assert_eq!(loaded.len(), 4);
    Ok(())
}

#[test]
fn test_missing_input_is_an_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nothing-here");

    let err = NdjsonLoader::default()
        .load(&missing.to_string_lossy())
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[test]
fn test_file_of_only_malformed_lines_yields_empty_report() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("broken.ndjson");
    std::fs::write(&path, "not json\n{also not}\n")?;

    let (loaded, stats) = NdjsonLoader::default().load(&path.to_string_lossy())?;
    assert!(loaded.is_empty());
    assert_eq!(stats.malformed_lines, 2);

    let report = ProfilingEngine::default().analyse(&loaded);
    assert_eq!(report.total_records, 0);
    assert!(report.discovered_fields.is_empty());
    Ok(())
}
