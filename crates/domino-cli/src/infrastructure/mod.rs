//! Infrastructure layer: configuration files and output writers.

pub mod config;
pub mod output;
