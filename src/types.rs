//! Exchange Stream Profiler - Type System
//!
//! - `common`: Types shared by the walker, the registry and the dictionary
//!   (ContextTag, ValueType, FieldMetadata, FieldEntry, ...)
//! - `analysis_results`: One result type per statistics pass plus the assembled report

mod common;
pub mod analysis_results;

pub use common::*;
