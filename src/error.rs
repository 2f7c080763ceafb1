use std::path::PathBuf;

use thiserror::Error;

/// Why a single descriptor produced no output sprite.
///
/// Every failure is contained to its record; the batch keeps going either way.
/// Only some kinds earn a log line: incomplete descriptors and untracked
/// atlases are expected in a raw export dump and stay silent.
#[derive(Debug, Error)]
pub enum SkipReason {
    #[error("descriptor has no m_Name")]
    MissingName,

    #[error("descriptor has no m_Rect")]
    MissingRect,

    #[error("no atlas mapping for this record")]
    UnresolvedAtlas,

    #[error("atlas file {0} missing from the atlas directory")]
    MissingAtlasFile(String),

    #[error("failed to read descriptor: {0}")]
    Read(#[source] std::io::Error),

    #[error("malformed descriptor JSON: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("failed to decode atlas {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error(
        "crop box ({left},{top})..({right},{bottom}) outside atlas {atlas_width}x{atlas_height}"
    )]
    CropOutOfBounds {
        left: i64,
        top: i64,
        right: i64,
        bottom: i64,
        atlas_width: u32,
        atlas_height: u32,
    },

    #[error("failed to write {path:?}: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl SkipReason {
    /// Whether this kind warrants an error line on the console.
    pub fn is_logged(&self) -> bool {
        !matches!(
            self,
            SkipReason::MissingName
                | SkipReason::MissingRect
                | SkipReason::UnresolvedAtlas
                | SkipReason::MissingAtlasFile(_)
        )
    }
}
