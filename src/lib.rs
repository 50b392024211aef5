//! Totem plots: mirrored horizontal bar charts comparing the relative
//! abundance of taxa between two samples.
//!
//! The pipeline reads a two-column abundance table, optionally restricts it
//! to a core set of taxa and a minimum percentage, and renders a PNG.

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod plot;

pub use config::{CoreSelection, TotemConfig};
pub use error::{Result, TotemError};
