use std::collections::HashMap;
use std::path::PathBuf;

use image::{DynamicImage, GenericImageView};

use crate::error::SkipReason;

/// Lazily decoded atlas sheets, keyed by resolved filename.
///
/// Many records reference the same handful of sheets, so each sheet is
/// decoded at most once per run. A failed decode is not cached: every record
/// pointing at a broken sheet fails on its own, and the batch moves on.
pub struct AtlasCache {
    atlas_dir: PathBuf,
    images: HashMap<String, DynamicImage>,
}

impl AtlasCache {
    pub fn new<P: Into<PathBuf>>(atlas_dir: P) -> Self {
        Self {
            atlas_dir: atlas_dir.into(),
            images: HashMap::new(),
        }
    }

    pub fn get_or_decode(&mut self, file_name: &str) -> Result<&DynamicImage, SkipReason> {
        if !self.images.contains_key(file_name) {
            let path = self.atlas_dir.join(file_name);
            let image = image::open(&path).map_err(|source| SkipReason::Decode {
                path: path.clone(),
                source,
            })?;
            log::debug!(
                "Decoded atlas {} ({}x{})",
                file_name,
                image.width(),
                image.height()
            );
            self.images.insert(file_name.to_string(), image);
        }
        Ok(&self.images[file_name])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atlas::testutil::scratch_dir;
    use std::fs;

    #[test]
    fn decoded_sheet_is_reused_across_records() {
        let dir = scratch_dir("cache-reuse");
        let sheet = image::RgbaImage::from_pixel(4, 4, image::Rgba([255, 0, 0, 255]));
        sheet.save(dir.join("Icons.png")).unwrap();

        let mut cache = AtlasCache::new(&dir);
        assert_eq!(cache.get_or_decode("Icons.png").unwrap().width(), 4);

        // once decoded, the backing file no longer matters
        fs::remove_file(dir.join("Icons.png")).unwrap();
        assert_eq!(cache.get_or_decode("Icons.png").unwrap().height(), 4);
    }

    #[test]
    fn broken_sheet_reports_a_decode_failure() {
        let dir = scratch_dir("cache-broken");
        fs::write(dir.join("Broken.png"), b"this is not a png").unwrap();

        let mut cache = AtlasCache::new(&dir);
        let reason = cache.get_or_decode("Broken.png").unwrap_err();
        assert!(matches!(reason, SkipReason::Decode { .. }));
        assert!(reason.is_logged());
    }
}
