use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Run configuration: the three directories plus the two lookup tables.
///
/// Compiled-in defaults match the game export this tool was written against;
/// a JSON overlay file replaces any subset of fields, and the CLI overrides
/// the directories on top of that.
#[derive(Debug, Clone, Deserialize)]
pub struct SlicerConfig {
    /// Directory of sprite descriptor JSON files.
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,

    /// Directory holding the packed atlas sheets.
    #[serde(default = "default_atlas_dir")]
    pub atlas_dir: PathBuf,

    /// Directory the cropped sprites are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Atlas-collection id -> atlas sheet filename.
    #[serde(default = "default_atlas_table")]
    pub atlas_table: HashMap<String, String>,

    /// Sprite families whose trailing index is stored in reverse order,
    /// mapped to the family size (index i becomes size - 1 - i).
    #[serde(default = "default_invert_limits")]
    pub invert_limits: BTreeMap<String, i64>,
}

impl Default for SlicerConfig {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            atlas_dir: default_atlas_dir(),
            output_dir: default_output_dir(),
            atlas_table: default_atlas_table(),
            invert_limits: default_invert_limits(),
        }
    }
}

impl SlicerConfig {
    /// Load an overlay config file; absent fields keep their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .context(format!("Failed to read config file {:?}", path.as_ref()))?;

        let config = serde_json::from_str(&content)
            .context(format!("Failed to parse config file {:?}", path.as_ref()))?;

        Ok(config)
    }
}

fn default_input_dir() -> PathBuf {
    PathBuf::from("temp_hold/Sprite")
}

fn default_atlas_dir() -> PathBuf {
    PathBuf::from("public/icons/game")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("public/icons/single")
}

/// Atlas-collection ids as found in the sprite export, mapped to the sheet
/// each collection is packed into. Keys and tickets live in Icons.png; loose
/// props are assumed to sit in InventoryTextures.png.
fn default_atlas_table() -> HashMap<String, String> {
    [
        ("3c9190c4fc4be5a42a8d0a75e09af576", "Icons.png"),
        ("313dbef3c2360f44ebf439d9aea4460b", "SkillIcons.png"),
        ("8bf523dd9d318b4498f71eaf95325c6e", "Pets.png"),
        ("d313f50b59a9a7a45bdbe8dde2bd9b36", "MountIcons.png"),
        ("3580e08bf93c38b4b8c916ab5e42d0b6", "LeagueIcons.png"),
        ("e8a789fd5fd6fd14d9f9751c5375dc3b", "AgeIcons.png"),
        ("615c511daa587884096d16784404bc99", "TechTreeIcons.png"),
        ("b0f28726ffaa4944f81255060368d6a9", "Eggs.png"),
        ("2f61441e251b74c8d831cd44c86f8180", "InventoryTextures.png"),
    ]
    .into_iter()
    .map(|(id, file)| (id.to_string(), file.to_string()))
    .collect()
}

/// League ranks are stored highest-first in the export but consumed
/// lowest-first, so their indices get mirrored on output.
fn default_invert_limits() -> BTreeMap<String, i64> {
    [("LeagueIcons".to_string(), 6)].into_iter().collect()
}
