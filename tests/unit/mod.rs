//! Profiling core unit tests

pub mod dictionary_context;
pub mod engine_scenarios;
pub mod properties;
