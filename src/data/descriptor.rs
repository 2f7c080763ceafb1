use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::SkipReason;

/// Raw shape of one sprite descriptor as exported to JSON. Only the fields
/// this tool reads are modeled; everything else in the export is ignored.
/// Every nested level is optional so a partially filled record still
/// deserializes and can be classified afterwards.
#[derive(Debug, Deserialize)]
pub struct RawDescriptor {
    #[serde(rename = "m_Name", default)]
    pub name: String,

    #[serde(rename = "m_AtlasRD", default)]
    pub atlas_rd: Option<AtlasRenderData>,

    #[serde(rename = "m_Rect", default)]
    pub rect: Option<SpriteRect>,
}

#[derive(Debug, Deserialize)]
pub struct AtlasRenderData {
    #[serde(rename = "m_Texture", default)]
    pub texture: Option<TextureRef>,
}

#[derive(Debug, Deserialize)]
pub struct TextureRef {
    #[serde(rename = "m_Collection", default)]
    pub collection: Option<String>,
}

/// Sprite rectangle in the atlas's native coordinate system: origin at the
/// bottom-left corner, y increasing upward.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SpriteRect {
    #[serde(rename = "m_X")]
    pub x: f64,
    #[serde(rename = "m_Y")]
    pub y: f64,
    #[serde(rename = "m_Width")]
    pub width: f64,
    #[serde(rename = "m_Height")]
    pub height: f64,
}

/// One validated descriptor, the unit the rest of the pipeline operates on.
#[derive(Debug, Clone)]
pub struct SpriteRecord {
    pub name: String,
    pub atlas_id: Option<String>,
    pub rect: SpriteRect,
}

impl RawDescriptor {
    pub fn into_record(self) -> Result<SpriteRecord, SkipReason> {
        if self.name.is_empty() {
            return Err(SkipReason::MissingName);
        }
        let rect = self.rect.ok_or(SkipReason::MissingRect)?;
        let atlas_id = self
            .atlas_rd
            .and_then(|rd| rd.texture)
            .and_then(|tex| tex.collection);

        Ok(SpriteRecord {
            name: self.name,
            atlas_id,
            rect,
        })
    }
}

/// Load and validate a single descriptor file.
pub fn load_record<P: AsRef<Path>>(path: P) -> Result<SpriteRecord, SkipReason> {
    let content = fs::read_to_string(path.as_ref()).map_err(SkipReason::Read)?;
    let raw: RawDescriptor = serde_json::from_str(&content).map_err(SkipReason::Parse)?;
    raw.into_record()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "m_Name": "SkillIcons_12",
        "m_PixelsToUnits": 100.0,
        "m_AtlasRD": {
            "m_Texture": {
                "m_Collection": "313dbef3c2360f44ebf439d9aea4460b",
                "m_ItemIndex": 3
            }
        },
        "m_Rect": {
            "m_X": 256.0,
            "m_Y": 128.0,
            "m_Width": 64.0,
            "m_Height": 64.0
        }
    }"#;

    #[test]
    fn full_descriptor_parses_to_record() {
        let raw: RawDescriptor = serde_json::from_str(SAMPLE).unwrap();
        let record = raw.into_record().unwrap();

        assert_eq!(record.name, "SkillIcons_12");
        assert_eq!(
            record.atlas_id.as_deref(),
            Some("313dbef3c2360f44ebf439d9aea4460b")
        );
        assert_eq!(record.rect.x, 256.0);
        assert_eq!(record.rect.y, 128.0);
        assert_eq!(record.rect.width, 64.0);
        assert_eq!(record.rect.height, 64.0);
    }

    #[test]
    fn missing_name_is_a_silent_skip() {
        let raw: RawDescriptor =
            serde_json::from_str(r#"{"m_Rect": {"m_X": 0, "m_Y": 0, "m_Width": 1, "m_Height": 1}}"#)
                .unwrap();
        let reason = raw.into_record().unwrap_err();
        assert!(matches!(reason, SkipReason::MissingName));
        assert!(!reason.is_logged());
    }

    #[test]
    fn missing_rect_is_a_silent_skip() {
        let raw: RawDescriptor = serde_json::from_str(r#"{"m_Name": "Eggs_2"}"#).unwrap();
        let reason = raw.into_record().unwrap_err();
        assert!(matches!(reason, SkipReason::MissingRect));
        assert!(!reason.is_logged());
    }

    #[test]
    fn absent_texture_collection_yields_no_atlas_id() {
        let raw: RawDescriptor = serde_json::from_str(
            r#"{
                "m_Name": "GemPack_0",
                "m_AtlasRD": {},
                "m_Rect": {"m_X": 0, "m_Y": 0, "m_Width": 32, "m_Height": 32}
            }"#,
        )
        .unwrap();
        let record = raw.into_record().unwrap();
        assert_eq!(record.atlas_id, None);
    }
}
