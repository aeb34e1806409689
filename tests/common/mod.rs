//! Common Test Utilities
//!
//! Record fixtures shaped like exchange stream messages, plus helpers for writing
//! them to NDJSON files and plugin directories.

#![allow(dead_code)]

use serde_json::{json, Value};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Ten market change messages, `pt` 1000..=1009, each with one runner price
pub fn scenario_a_records() -> Vec<Value> {
    (0..10)
        .map(|i| json!({"pt": 1000 + i, "mc": [{"id": "1.1", "rc": [{"id": 7, "ltp": 2.5}]}]}))
        .collect()
}

/// Like scenario A, but every other record omits `ltp`
pub fn scenario_b_records() -> Vec<Value> {
    (0..10)
        .map(|i| {
            if i % 2 == 0 {
                json!({"pt": 1000 + i, "mc": [{"id": "1.1", "rc": [{"id": 7, "ltp": 2.5}]}]})
            } else {
                json!({"pt": 1000 + i, "mc": [{"id": "1.1", "rc": [{"id": 7}]}]})
            }
        })
        .collect()
}

/// A realistic mix of market and order stream messages
pub fn mixed_stream_records() -> Vec<Value> {
    vec![
        json!({
            "op": "mcm",
            "clk": "AAAAAAAA",
            "pt": 1_700_000_000_000_i64,
            "ct": "SUB_IMAGE",
            "mc": [{
                "id": "1.234",
                "img": true,
                "marketDefinition": {
                    "status": "OPEN",
                    "inPlay": false,
                    "marketType": "WIN",
                    "countryCode": "GB",
                    "venue": "Ascot",
                    "runners": [
                        {"id": 101, "sortPriority": 1, "status": "ACTIVE"},
                        {"id": 102, "sortPriority": 2, "status": "ACTIVE"}
                    ]
                },
                "rc": [
                    {"id": 101, "ltp": 3.45, "tv": 120.5, "atb": [[3.4, 20.0], [3.35, 12.0]]},
                    {"id": 102, "ltp": 5.1, "atl": [[5.2, 8.0]]}
                ]
            }]
        }),
        json!({
            "op": "mcm",
            "clk": "AAAAAAAB",
            "pt": 1_700_000_000_250_i64,
            "mc": [{
                "id": "1.234",
                "rc": [{"id": 101, "ltp": 3.5, "trd": [[3.5, 4.0]]}]
            }]
        }),
        json!({
            "op": "ocm",
            "clk": "AAAAAAAC",
            "pt": 1_700_000_000_900_i64,
            "oc": [{
                "id": "1.234",
                "orc": [{
                    "id": 101,
                    "uo": [{
                        "id": "228302937743",
                        "p": 3.5,
                        "s": 10.0,
                        "side": "B",
                        "status": "E",
                        "pt": "L"
                    }]
                }]
            }]
        }),
        json!({"op": "heartbeat", "clk": "AAAAAAAD", "pt": 1_700_000_001_000_i64}),
    ]
}

/// Write records as NDJSON, one per line
pub fn write_ndjson(dir: &Path, name: &str, records: &[Value]) -> PathBuf {
    let path = dir.join(name);
    let mut file = File::create(&path).unwrap();
    for record in records {
        writeln!(file, "{}", record).unwrap();
    }
    path
}

/// Write a small plugin dictionary with manifest, fields and categories
pub fn write_plugin(dir: &Path) -> PathBuf {
    let plugin_dir = dir.join("racing-plugin");
    std::fs::create_dir_all(&plugin_dir).unwrap();

    let manifest = json!({
        "plugin_id": "racing",
        "name": "Racing Feed",
        "version": "1.2.0",
        "description": "Test plugin"
    });
    let fields = json!({
        "fields": {
            "_comment": "metadata, not a field",
            "pt": {"full_name": "Publish Time", "category": "Timing", "ml_relevance": "high"},
            "ltp": {"full_name": "Last Price", "category": "Pricing", "description": "Latest trade"},
            "id": {"category": "Identity"}
        }
    });
    let categories = json!({
        "categories": {
            "Timing": {"icon": "⏱️", "color": "#111111", "description": "Clocks"},
            "Pricing": {"description": "Prices"}
        },
        "category_priority": ["Pricing", "Timing"]
    });

    std::fs::write(plugin_dir.join("manifest.json"), manifest.to_string()).unwrap();
    std::fs::write(plugin_dir.join("fields.json"), fields.to_string()).unwrap();
    std::fs::write(plugin_dir.join("categories.json"), categories.to_string()).unwrap();
    plugin_dir
}
