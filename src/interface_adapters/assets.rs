// Asset manifest adapter: declares which sheets and sounds exist and validates lookups.
// Image and audio decoding belong to the renderer and audio backends.

use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::domain::animation::{Frame, Region};
use crate::domain::entities::avatar::{JUMP_SOUND, PLAYER_SHEET, SCRATCH_SOUND};
use crate::domain::errors::AssetError;
use crate::domain::ports::{AssetSource, SoundId};

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct SheetSize {
    pub width: u32,
    pub height: u32,
}

/// TOML shape:
///
/// ```toml
/// sounds = ["/SFX/jump.mp3"]
///
/// [sheets."/Sprites/Player/space2.png"]
/// width = 160
/// height = 240
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct AssetManifest {
    #[serde(default)]
    sheets: HashMap<String, SheetSize>,
    #[serde(default)]
    sounds: HashSet<String>,
}

impl AssetManifest {
    pub fn from_toml_str(source: &str) -> Result<Self, AssetError> {
        toml::from_str(source).map_err(|e| AssetError::Manifest(e.to_string()))
    }

    /// Manifest matching the stock player sprite sheet and sound effects.
    pub fn builtin() -> Self {
        Self {
            sheets: HashMap::from([(
                PLAYER_SHEET.to_string(),
                SheetSize {
                    width: 160,
                    height: 240,
                },
            )]),
            sounds: HashSet::from([JUMP_SOUND.to_string(), SCRATCH_SOUND.to_string()]),
        }
    }
}

impl AssetSource for AssetManifest {
    fn sprite(&self, sheet: &str, region: Region) -> Result<Frame, AssetError> {
        let size = self.sheets.get(sheet).ok_or_else(|| AssetError::MissingSheet {
            path: sheet.to_string(),
        })?;

        let fits = region.width > 0
            && region.height > 0
            && region.x + region.width <= size.width
            && region.y + region.height <= size.height;
        if !fits {
            tracing::warn!(sheet, ?region, "sprite region outside sheet");
            return Err(AssetError::RegionOutOfBounds {
                path: sheet.to_string(),
                x: region.x,
                y: region.y,
                width: region.width,
                height: region.height,
            });
        }

        Ok(Frame {
            sheet: Arc::from(sheet),
            region,
        })
    }

    fn sound(&self, path: &str) -> Result<SoundId, AssetError> {
        if !self.sounds.contains(path) {
            tracing::warn!(path, "sound missing from manifest");
            return Err(AssetError::MissingSound {
                path: path.to_string(),
            });
        }
        Ok(SoundId(path.to_string()))
    }
}
