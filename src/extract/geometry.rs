use crate::data::SpriteRect;
use crate::error::SkipReason;

/// Pixel region to cut from a decoded atlas, top-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Convert a descriptor rect (bottom-left origin, y up) into the decoder's
/// top-left-origin crop box.
///
/// All four corners are truncated toward zero on the stored floats, so the
/// box width comes from the truncated corners, not from truncating the
/// rect's own width. The bounds check is explicit: `crop_imm` clamps
/// out-of-range boxes instead of failing, and a clamped sprite would be
/// silently wrong.
pub fn crop_box(
    atlas_width: u32,
    atlas_height: u32,
    rect: &SpriteRect,
) -> Result<CropBox, SkipReason> {
    let sheet_height = f64::from(atlas_height);

    let left = rect.x.trunc() as i64;
    let top = (sheet_height - (rect.y + rect.height)).trunc() as i64;
    let right = (rect.x + rect.width).trunc() as i64;
    let bottom = (sheet_height - rect.y).trunc() as i64;

    let in_bounds = left >= 0
        && top >= 0
        && right <= i64::from(atlas_width)
        && bottom <= i64::from(atlas_height)
        && left < right
        && top < bottom;
    if !in_bounds {
        return Err(SkipReason::CropOutOfBounds {
            left,
            top,
            right,
            bottom,
            atlas_width,
            atlas_height,
        });
    }

    Ok(CropBox {
        x: left as u32,
        y: top as u32,
        width: (right - left) as u32,
        height: (bottom - top) as u32,
    })
}
