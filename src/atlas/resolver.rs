use std::collections::HashMap;
use std::path::PathBuf;

use crate::data::SpriteRecord;
use crate::error::SkipReason;

/// Maps a record to the atlas sheet that contains it.
///
/// Resolution is two-tier: the collection-id table wins, then a sheet named
/// after the record itself. A table hit pointing at a file that is not on
/// disk fails the record; it never falls through to the name tier.
pub struct AtlasResolver {
    table: HashMap<String, String>,
    atlas_dir: PathBuf,
}

impl AtlasResolver {
    pub fn new<P: Into<PathBuf>>(table: HashMap<String, String>, atlas_dir: P) -> Self {
        Self {
            table,
            atlas_dir: atlas_dir.into(),
        }
    }

    /// Resolve the atlas sheet filename for a record.
    pub fn resolve(&self, record: &SpriteRecord) -> Result<String, SkipReason> {
        if let Some(file_name) = record.atlas_id.as_ref().and_then(|id| self.table.get(id)) {
            if self.atlas_dir.join(file_name).is_file() {
                return Ok(file_name.clone());
            }
            return Err(SkipReason::MissingAtlasFile(file_name.clone()));
        }

        // Name tier: descriptors for single-sprite sheets carry no tracked
        // collection id, the sheet is just named after the sprite.
        let fallback = format!("{}.png", record.name);
        if self.atlas_dir.join(&fallback).is_file() {
            return Ok(fallback);
        }

        Err(SkipReason::UnresolvedAtlas)
    }
}
