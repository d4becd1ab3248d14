//! Error types

use crate::binary::read::ReadEof;
use crate::cff::CFFError;
use std::fmt;

/// Errors that originate when reading font data
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum ParseError {
    BadEof,
    BadValue,
    BadIndex,
    UnsuitableCmap,
}

impl From<ReadEof> for ParseError {
    fn from(_error: ReadEof) -> Self {
        ParseError::BadEof
    }
}

impl From<std::num::TryFromIntError> for ParseError {
    fn from(_error: std::num::TryFromIntError) -> Self {
        ParseError::BadValue
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::BadEof => write!(f, "end of data reached unexpectedly"),
            ParseError::BadValue => write!(f, "invalid value"),
            ParseError::BadIndex => write!(f, "invalid data index"),
            ParseError::UnsuitableCmap => write!(f, "no suitable cmap subtable"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Error returned when building a metrics table
#[derive(Debug)]
pub enum MetricsError {
    Parse(ParseError),
    Json(serde_json::Error),
    Io(std::io::Error),
}

impl From<ParseError> for MetricsError {
    fn from(error: ParseError) -> Self {
        MetricsError::Parse(error)
    }
}

impl From<serde_json::Error> for MetricsError {
    fn from(error: serde_json::Error) -> Self {
        MetricsError::Json(error)
    }
}

impl From<std::io::Error> for MetricsError {
    fn from(error: std::io::Error) -> Self {
        MetricsError::Io(error)
    }
}

impl fmt::Display for MetricsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricsError::Parse(err) => write!(f, "metrics: {}", err),
            MetricsError::Json(err) => write!(f, "font description: {}", err),
            MetricsError::Io(err) => write!(f, "i/o error: {}", err),
        }
    }
}

impl std::error::Error for MetricsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MetricsError::Parse(err) => Some(err),
            MetricsError::Json(err) => Some(err),
            MetricsError::Io(err) => Some(err),
        }
    }
}

/// A glyph whose bounding box could not be computed
///
/// The glyph keeps its horizontal metrics but has no bounds in the metrics table.
#[derive(Clone, PartialEq, Debug)]
pub struct GlyphBoundsError {
    pub glyph_id: u16,
    pub error: CFFError,
}

impl fmt::Display for GlyphBoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "glyph {}: {}", self.glyph_id, self.error)
    }
}

impl std::error::Error for GlyphBoundsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
