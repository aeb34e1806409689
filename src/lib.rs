//! Exchange Stream Profiler
//!
//! Dynamic schema discovery and statistical profiling for raw exchange stream
//! records (market change and order change messages) stored as NDJSON.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod dictionary;
pub mod errors;
pub mod loader;
pub mod types;
pub mod utils;
