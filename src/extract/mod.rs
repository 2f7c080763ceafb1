pub mod geometry;
pub mod naming;

pub use geometry::{crop_box, CropBox};
pub use naming::output_file_name;

use std::collections::BTreeMap;

use image::{DynamicImage, GenericImageView};

use crate::data::SpriteRecord;
use crate::error::SkipReason;

/// A cropped sprite ready to be written out.
#[derive(Debug)]
pub struct OutputSprite {
    pub file_name: String,
    pub image: DynamicImage,
}

/// Cut one record's sprite out of its decoded atlas sheet.
pub fn extract_sprite(
    record: &SpriteRecord,
    atlas: &DynamicImage,
    invert_limits: &BTreeMap<String, i64>,
) -> Result<OutputSprite, SkipReason> {
    let region = geometry::crop_box(atlas.width(), atlas.height(), &record.rect)?;
    let image = atlas.crop_imm(region.x, region.y, region.width, region.height);
    let file_name = naming::output_file_name(&record.name, invert_limits);

    Ok(OutputSprite { file_name, image })
}
