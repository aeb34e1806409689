//! Shared helpers for percentage arithmetic and time rendering

pub mod math;
pub mod time;
