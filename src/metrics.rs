//! The metrics table: font-wide metrics plus horizontal metrics and bounds of every mapped glyph.

use log::{debug, warn};
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::cff::{BBox, CFFError, CFFTables};
use crate::error::{GlyphBoundsError, ParseError};
use crate::tables::FontDescription;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub units_per_em: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ascender: Option<i16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descender: Option<i16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_gap: Option<i16>,
    pub subscript_x_size: i16,
    pub subscript_y_size: i16,
    pub subscript_x_offset: i16,
    pub subscript_y_offset: i16,
    pub superscript_x_size: i16,
    pub superscript_y_size: i16,
    pub superscript_x_offset: i16,
    pub superscript_y_offset: i16,
    pub underline_position: i16,
    pub glyphs: Vec<GlyphMetrics>,
}

/// Metrics of one glyph. Bounds are absent when the outline draws nothing or could not be
/// computed.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlyphMetrics {
    pub glyph_id: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub char_code: Option<u32>,
    pub advance_width: u16,
    pub left_side_bearing: i16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_max: Option<f64>,
}

impl GlyphMetrics {
    pub fn bounds(&self) -> Option<BBox> {
        Some(BBox {
            x_min: self.x_min?,
            x_max: self.x_max?,
            y_min: self.y_min?,
            y_max: self.y_max?,
        })
    }

    fn set_bounds(&mut self, bbox: BBox) {
        self.x_min = Some(bbox.x_min);
        self.x_max = Some(bbox.x_max);
        self.y_min = Some(bbox.y_min);
        self.y_max = Some(bbox.y_max);
    }
}

impl Metrics {
    /// Build the metrics table of `font`, including glyph bounds when it has CFF outlines.
    ///
    /// Glyphs whose bounds could not be computed are returned alongside the table; they are
    /// still listed, without bounds.
    pub fn from_font(
        font: &FontDescription,
    ) -> Result<(Metrics, Vec<GlyphBoundsError>), ParseError> {
        let mut metrics = Metrics::new(font)?;
        let errors = match &font.cff {
            Some(cff) => metrics.add_cff_bounds(cff),
            None => Vec::new(),
        };
        debug!(
            "{} glyphs, {} with bounds, {} failed",
            metrics.glyphs.len(),
            metrics
                .glyphs
                .iter()
                .filter(|glyph| glyph.x_min.is_some())
                .count(),
            errors.len()
        );
        Ok((metrics, errors))
    }

    /// Font-wide metrics and the horizontal metrics of every glyph reachable through the cmap.
    pub fn new(font: &FontDescription) -> Result<Metrics, ParseError> {
        let glyphs = font
            .cmap
            .glyph_mappings()?
            .into_iter()
            .map(|mapping| {
                let hmetric = font
                    .hmtx
                    .get(usize::from(mapping.glyph_id))
                    .ok_or(ParseError::BadIndex)?;
                Ok(GlyphMetrics {
                    glyph_id: mapping.glyph_id,
                    char_code: mapping.char_code,
                    advance_width: hmetric.advance_width,
                    left_side_bearing: hmetric.lsb,
                    x_min: None,
                    x_max: None,
                    y_min: None,
                    y_max: None,
                })
            })
            .collect::<Result<Vec<_>, ParseError>>()?;

        let os2 = &font.os2;
        Ok(Metrics {
            units_per_em: font.head.units_per_em,
            ascender: os2.s_typo_ascender,
            descender: os2.s_typo_descender,
            line_gap: os2.s_typo_line_gap,
            subscript_x_size: os2.y_subscript_x_size,
            subscript_y_size: os2.y_subscript_y_size,
            subscript_x_offset: os2.y_subscript_x_offset,
            subscript_y_offset: os2.y_subscript_y_offset,
            superscript_x_size: os2.y_superscript_x_size,
            superscript_y_size: os2.y_superscript_y_size,
            superscript_x_offset: os2.y_superscript_x_offset,
            superscript_y_offset: os2.y_superscript_y_offset,
            underline_position: font.post.underline_position,
            glyphs,
        })
    }

    /// Set the bounds of every glyph from its CFF charstring.
    ///
    /// Each glyph id is executed once. A glyph that fails is logged and reported once, and
    /// every entry for it is left without bounds.
    pub fn add_cff_bounds(&mut self, cff: &CFFTables) -> Vec<GlyphBoundsError> {
        let mut cache: FxHashMap<u16, Result<Option<BBox>, CFFError>> = FxHashMap::default();
        let mut errors = Vec::new();

        for glyph in &mut self.glyphs {
            let glyph_id = glyph.glyph_id;
            let bounds = cache.entry(glyph_id).or_insert_with(|| {
                let bounds = cff.glyph_bounds(glyph_id);
                if let Err(error) = &bounds {
                    warn!("glyph {}: {}", glyph_id, error);
                    errors.push(GlyphBoundsError {
                        glyph_id,
                        error: error.clone(),
                    });
                }
                bounds
            });
            if let Ok(Some(bbox)) = bounds {
                glyph.set_bounds(*bbox);
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::read_fixture;

    fn font(path: &str) -> FontDescription {
        FontDescription::from_json(&read_fixture(path)).unwrap()
    }

    #[test]
    fn font_wide_metrics() {
        let (metrics, errors) = Metrics::from_font(&font("tests/fonts/cff-basic.json")).unwrap();
        assert!(errors.is_empty());
        assert_eq!(metrics.units_per_em, 1000);
        assert_eq!(metrics.ascender, Some(750));
        assert_eq!(metrics.descender, Some(-250));
        assert_eq!(metrics.line_gap, Some(200));
        assert_eq!(metrics.subscript_y_offset, 140);
        assert_eq!(metrics.superscript_y_offset, 480);
        assert_eq!(metrics.underline_position, -100);
    }

    #[test]
    fn hmtx_out_of_range() {
        let mut font = font("tests/fonts/cff-basic.json");
        font.hmtx.truncate(2);
        assert_eq!(Metrics::new(&font), Err(ParseError::BadIndex));
    }

    #[test]
    fn failing_glyph_keeps_horizontal_metrics() {
        let mut font = font("tests/fonts/cff-basic.json");
        let cff = font.cff.as_mut().unwrap();
        // 0 callsubr, without local subroutines
        cff.top_dict.char_strings[1] = vec![139, 10, 14];
        cff.top_dict.private_dict.local_subrs = None;

        let (metrics, errors) = Metrics::from_font(&font).unwrap();
        assert_eq!(
            errors,
            vec![GlyphBoundsError {
                glyph_id: 1,
                error: CFFError::NoLocalSubroutines
            }]
        );
        let glyph = &metrics.glyphs[1];
        assert_eq!(glyph.glyph_id, 1);
        assert_eq!(glyph.advance_width, 600);
        assert_eq!(glyph.bounds(), None);
        assert!(metrics.glyphs[2].bounds().is_some());
    }

    #[test]
    fn bounds_are_skipped_when_absent() {
        let glyph = GlyphMetrics {
            glyph_id: 0,
            char_code: None,
            advance_width: 500,
            left_side_bearing: 0,
            x_min: None,
            x_max: None,
            y_min: None,
            y_max: None,
        };
        assert_eq!(
            serde_json::to_string(&glyph).unwrap(),
            r#"{"glyphId":0,"advanceWidth":500,"leftSideBearing":0}"#
        );
    }
}
