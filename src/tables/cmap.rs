//! Character to glyph mappings from the `cmap` table.

use std::convert::TryFrom;

use serde::Deserialize;

use crate::error::ParseError;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
pub struct PlatformId(pub u16);

impl PlatformId {
    pub const UNICODE: PlatformId = PlatformId(0);
}

#[derive(Clone, Debug, Deserialize)]
pub struct Cmap {
    pub tables: Vec<CmapSubtable>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CmapSubtable {
    pub platform_id: PlatformId,
    pub format: u16,
    /// Format 12 groups
    #[serde(default)]
    pub groups: Vec<SequentialMapGroup>,
    /// Format 4 segments
    #[serde(default)]
    pub segments: Vec<Segment>,
}

#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SequentialMapGroup {
    pub start_char_code: u32,
    pub end_char_code: u32,
    pub start_glyph_id: u32,
}

#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub start_code: u16,
    pub end_code: u16,
    // Some decoders report the delta unsigned; only the low 16 bits are used.
    pub id_delta: i32,
}

/// A glyph to list in the metrics table, with the character that maps to it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Mapping {
    pub glyph_id: u16,
    pub char_code: Option<u32>,
}

impl Cmap {
    pub fn find_subtable(&self, platform_id: PlatformId, format: u16) -> Option<&CmapSubtable> {
        self.tables
            .iter()
            .find(|table| table.platform_id == platform_id && table.format == format)
    }

    /// List `.notdef` followed by every character mapping of the preferred Unicode subtable.
    ///
    /// A format 12 subtable is preferred over format 4. Mappings are listed in subtable
    /// order, so a glyph reached from several characters appears once per character.
    pub fn glyph_mappings(&self) -> Result<Vec<Mapping>, ParseError> {
        let mut mappings = vec![Mapping {
            glyph_id: 0,
            char_code: None,
        }];

        if let Some(subtable) = self.find_subtable(PlatformId::UNICODE, 12) {
            for group in &subtable.groups {
                for char_code in group.start_char_code..=group.end_char_code {
                    let glyph_id = (char_code - group.start_char_code)
                        .checked_add(group.start_glyph_id)
                        .ok_or(ParseError::BadValue)?;
                    mappings.push(Mapping {
                        glyph_id: u16::try_from(glyph_id)?,
                        char_code: Some(char_code),
                    });
                }
            }
        } else if let Some(subtable) = self.find_subtable(PlatformId::UNICODE, 4) {
            for segment in &subtable.segments {
                for char_code in segment.start_code..=segment.end_code {
                    let glyph_id = (i32::from(char_code) + segment.id_delta) & 0xFFFF;
                    mappings.push(Mapping {
                        glyph_id: u16::try_from(glyph_id)?,
                        char_code: Some(u32::from(char_code)),
                    });
                }
            }
        } else {
            return Err(ParseError::UnsuitableCmap);
        }

        Ok(mappings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(glyph_id: u16, char_code: u32) -> Mapping {
        Mapping {
            glyph_id,
            char_code: Some(char_code),
        }
    }

    const NOTDEF: Mapping = Mapping {
        glyph_id: 0,
        char_code: None,
    };

    #[test]
    fn format12_is_preferred() {
        let cmap: Cmap = serde_json::from_str(
            r#"{ "tables": [
                { "platformId": 0, "format": 4,
                  "segments": [{ "startCode": 65, "endCode": 65, "idDelta": -60 }] },
                { "platformId": 3, "format": 12,
                  "groups": [{ "startCharCode": 65, "endCharCode": 65, "startGlyphId": 9 }] },
                { "platformId": 0, "format": 12,
                  "groups": [
                    { "startCharCode": 65, "endCharCode": 67, "startGlyphId": 1 },
                    { "startCharCode": 128512, "endCharCode": 128512, "startGlyphId": 1 }
                  ] }
            ] }"#,
        )
        .unwrap();
        assert_eq!(
            cmap.glyph_mappings().unwrap(),
            vec![
                NOTDEF,
                mapping(1, 65),
                mapping(2, 66),
                mapping(3, 67),
                mapping(1, 128512),
            ]
        );
    }

    #[test]
    fn format4_fallback() {
        let cmap: Cmap = serde_json::from_str(
            r#"{ "tables": [
                { "platformId": 3, "format": 4,
                  "segments": [{ "startCode": 32, "endCode": 32, "idDelta": 0 }] },
                { "platformId": 0, "format": 4,
                  "segments": [
                    { "startCode": 97, "endCode": 98, "idDelta": -96 },
                    { "startCode": 65535, "endCode": 65535, "idDelta": 1 }
                  ] }
            ] }"#,
        )
        .unwrap();
        assert_eq!(
            cmap.glyph_mappings().unwrap(),
            vec![NOTDEF, mapping(1, 97), mapping(2, 98), mapping(0, 65535)]
        );
    }

    #[test]
    fn unsigned_id_delta() {
        let cmap: Cmap = serde_json::from_str(
            r#"{ "tables": [
                { "platformId": 0, "format": 4,
                  "segments": [{ "startCode": 97, "endCode": 97, "idDelta": 65440 }] }
            ] }"#,
        )
        .unwrap();
        assert_eq!(cmap.glyph_mappings().unwrap(), vec![NOTDEF, mapping(1, 97)]);
    }

    #[test]
    fn no_unicode_subtable() {
        let cmap: Cmap = serde_json::from_str(
            r#"{ "tables": [
                { "platformId": 3, "format": 4,
                  "segments": [{ "startCode": 32, "endCode": 32, "idDelta": 0 }] },
                { "platformId": 0, "format": 6 }
            ] }"#,
        )
        .unwrap();
        assert_eq!(cmap.glyph_mappings(), Err(ParseError::UnsuitableCmap));
    }

    #[test]
    fn glyph_id_overflow() {
        let cmap: Cmap = serde_json::from_str(
            r#"{ "tables": [
                { "platformId": 0, "format": 12,
                  "groups": [{ "startCharCode": 65, "endCharCode": 65, "startGlyphId": 70000 }] }
            ] }"#,
        )
        .unwrap();
        assert_eq!(cmap.glyph_mappings(), Err(ParseError::BadValue));
    }
}
