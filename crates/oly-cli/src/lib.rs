//! CLI library components for the Olympic records cleaner.

pub mod logging;
pub mod pipeline;
