//! Decoded SFNT tables of a font description.
//!
//! A font description is the JSON form of a font's tables, as produced by a font decoder.
//! Only the tables and fields needed to build a metrics table are modelled here; anything
//! else in the description is ignored.

pub mod cmap;

use serde::Deserialize;

use crate::binary::read::ReadFrom;
use crate::binary::I32Be;
use crate::cff::CFFTables;
use crate::error::MetricsError;

/// 32-bit signed fixed-point number (16.16)
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Fixed(i32);

#[derive(Clone, Debug, Deserialize)]
pub struct FontDescription {
    pub head: HeadTable,
    #[serde(rename = "OS/2")]
    pub os2: Os2,
    pub post: PostTable,
    pub hmtx: Vec<LongHorMetric>,
    pub cmap: cmap::Cmap,
    #[serde(default)]
    pub cff: Option<CFFTables>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadTable {
    pub units_per_em: u16,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Os2 {
    // Absent from the shortest version 0 tables.
    #[serde(default)]
    pub s_typo_ascender: Option<i16>,
    #[serde(default)]
    pub s_typo_descender: Option<i16>,
    #[serde(default)]
    pub s_typo_line_gap: Option<i16>,
    pub y_subscript_x_size: i16,
    pub y_subscript_y_size: i16,
    pub y_subscript_x_offset: i16,
    pub y_subscript_y_offset: i16,
    pub y_superscript_x_size: i16,
    pub y_superscript_y_size: i16,
    pub y_superscript_x_offset: i16,
    pub y_superscript_y_offset: i16,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostTable {
    pub underline_position: i16,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LongHorMetric {
    pub advance_width: u16,
    #[serde(rename = "leftSideBearing")]
    pub lsb: i16,
}

impl FontDescription {
    /// Parse a JSON font description.
    pub fn from_json(data: &[u8]) -> Result<FontDescription, MetricsError> {
        serde_json::from_slice(data).map_err(MetricsError::from)
    }
}

impl ReadFrom for Fixed {
    type ReadType = I32Be;

    fn read_from(value: i32) -> Self {
        Fixed(value)
    }
}

impl From<Fixed> for f64 {
    fn from(value: Fixed) -> f64 {
        f64::from(value.0) / 65536.0
    }
}
