#![warn(rust_2018_idioms)]

//! Glyph bounding boxes from CFF Type 2 charstrings, and the metrics table built from them.
//!
//! The input is a font description: the decoded tables of an SFNT font in JSON form. The
//! output is a [metrics::Metrics] table with font-wide metrics and, for every glyph reached
//! through the Unicode cmap, its horizontal metrics and bounding box.

/// Reading of binary data.
pub mod binary;
pub mod cff;
pub mod error;
pub mod metrics;
pub mod size;
pub mod tables;
/// Shared test code.
#[cfg(test)]
pub mod tests;
