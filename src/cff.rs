//! Glyph bounds from CFF Type 2 charstrings.
//!
//! The tables here are the already-decoded parts of a `CFF ` table: the global and local
//! subroutine arrays and the per-glyph charstrings. Bounding boxes are computed by executing
//! a glyph's charstring with [charstring::glyph_bounds].
//!
//! References:
//!
//! * Adobe Technical Note #5176, The Compact Font Format Specification
//! * Adobe Technical Note #5177, The Type 2 Charstring Format

use std::fmt;

use serde::de::IgnoredAny;
use serde::Deserialize;

use crate::error::ParseError;

pub mod charstring;
pub mod outline;

pub use charstring::{glyph_bounds, LocalSubrs};
pub use outline::BBox;

pub(crate) type GlyphId = u16;

/// The CFF data of a font, as consumed by the charstring interpreter
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CFFTables {
    #[serde(default)]
    pub global_subrs: Vec<Vec<u8>>,
    pub top_dict: TopDict,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopDict {
    /// Present in CID-keyed fonts. Its content is not interpreted.
    #[serde(rename = "FDSelect", default)]
    pub fd_select: Option<IgnoredAny>,
    #[serde(default)]
    pub private_dict: PrivateDict,
    pub char_strings: Vec<Vec<u8>>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivateDict {
    #[serde(default)]
    pub local_subrs: Option<Vec<Vec<u8>>>,
}

/// Errors that can occur while executing a charstring
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CFFError {
    ParseError(ParseError),
    /// A reserved or unknown operator. Escaped operators are reported as `12 op`.
    InvalidOperator(Option<u8>, u8),
    StackUnderflow,
    ArgumentsStackLimitReached,
    InvalidArgumentsStackLength,
    NestingLimitReached,
    /// Too many instructions executed for one glyph.
    OperationLimitReached,
    InvalidSubroutineIndex,
    NoLocalSubroutines,
    UnsupportedCidFont,
    InvalidGlyphId,
    InvalidTransientIndex,
    BboxOverflow,
}

impl CFFTables {
    /// The local subroutines that apply to every glyph of the font.
    ///
    /// CID-keyed fonts select local subroutines per glyph through `FDSelect`, which is not
    /// supported: calling a local subroutine from such a font is an error.
    pub fn local_subrs(&self) -> LocalSubrs<'_> {
        if self.top_dict.fd_select.is_some() {
            LocalSubrs::CidKeyed
        } else {
            match &self.top_dict.private_dict.local_subrs {
                Some(subrs) => LocalSubrs::Subrs(subrs),
                None => LocalSubrs::Missing,
            }
        }
    }

    /// Compute the bounding box of a glyph.
    ///
    /// Returns `Ok(None)` if the glyph's outline has no line or curve segments.
    pub fn glyph_bounds(&self, glyph_id: GlyphId) -> Result<Option<BBox>, CFFError> {
        let char_string = self
            .top_dict
            .char_strings
            .get(usize::from(glyph_id))
            .ok_or(CFFError::InvalidGlyphId)?;
        charstring::execute(char_string, &self.global_subrs, self.local_subrs())
    }
}

// Adobe Technical Note #5176, Chapter 16 "Local / Global Subrs INDEXes"
pub fn calc_subroutine_bias(len: usize) -> u16 {
    if len < 1240 {
        107
    } else if len < 33900 {
        1131
    } else {
        32768
    }
}

impl From<ParseError> for CFFError {
    fn from(error: ParseError) -> CFFError {
        CFFError::ParseError(error)
    }
}

impl fmt::Display for CFFError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CFFError::ParseError(parse_error) => {
                write!(f, "parse error: ")?;
                parse_error.fmt(f)
            }
            CFFError::InvalidOperator(None, op) => {
                write!(f, "an invalid operator occurred: {}", op)
            }
            CFFError::InvalidOperator(Some(escape), op) => {
                write!(f, "an invalid operator occurred: {} {}", escape, op)
            }
            CFFError::StackUnderflow => write!(f, "arguments stack underflow"),
            CFFError::ArgumentsStackLimitReached => write!(f, "arguments stack limit reached"),
            CFFError::InvalidArgumentsStackLength => {
                write!(f, "an invalid amount of items are in an arguments stack")
            }
            CFFError::NestingLimitReached => write!(f, "subroutines nesting limit reached"),
            CFFError::OperationLimitReached => write!(f, "charstring operation limit reached"),
            CFFError::InvalidSubroutineIndex => write!(f, "an invalid subroutine index"),
            CFFError::NoLocalSubroutines => write!(f, "no local subroutines"),
            CFFError::UnsupportedCidFont => {
                write!(f, "CID-keyed fonts with FDSelect are not supported")
            }
            CFFError::InvalidGlyphId => write!(f, "glyph id has no charstring"),
            CFFError::InvalidTransientIndex => write!(f, "an invalid transient array index"),
            CFFError::BboxOverflow => write!(f, "outline's bounding box is too large"),
        }
    }
}

impl std::error::Error for CFFError {}
