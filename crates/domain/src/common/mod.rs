//! Cross-cutting helpers shared by the domain and engine crates.

pub mod datetime;

pub use datetime::{humanize_since, parse_datetime};
