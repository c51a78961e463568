//! Infrastructure adapters: SQLite persistence, clock, configuration.

pub mod clock;
pub mod config;
pub mod persistence;
