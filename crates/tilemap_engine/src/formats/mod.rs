//! File format registry for map files.
//!
//! Each format implements [`MapFormat`]; [`FileFormat`] is the central
//! registry used for extension-based detection and for enumerating the
//! formats a UI can offer in open/save dialogs.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Result, TileMap};

mod octile;
use octile::Octile;

/// Line ending written between rows on save.
#[derive(Default, Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SaveOptions {
    pub line_ending: LineEnding,
}

impl SaveOptions {
    pub const fn new() -> Self {
        SaveOptions {
            line_ending: LineEnding::Lf,
        }
    }
}

/// A map file codec.
pub trait MapFormat {
    fn get_file_extension(&self) -> &str;

    fn get_name(&self) -> &str;

    /// Serializes the map. The output must parse back to an equal map.
    ///
    /// # Errors
    ///
    /// Returns an error when the map cannot be represented in this format.
    fn to_bytes(&self, map: &TileMap, options: &SaveOptions) -> Result<Vec<u8>>;

    /// Parses file contents into a new map.
    ///
    /// # Errors
    ///
    /// Returns a loading error when the data is malformed. No partially
    /// built map escapes a failed load.
    fn load_map(&self, data: &[u8]) -> Result<TileMap>;
}

/// All supported map file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileFormat {
    /// Moving-AI style octile terrain format (.map)
    Octile,
}

impl FileFormat {
    /// All known file formats
    pub const ALL: &'static [FileFormat] = &[FileFormat::Octile];

    pub fn from_extension(ext: &str) -> Option<FileFormat> {
        FileFormat::ALL.iter().copied().find(|f| f.get_format().get_file_extension().eq_ignore_ascii_case(ext))
    }

    pub fn from_path(path: &Path) -> Option<FileFormat> {
        let ext = path.extension()?.to_str()?;
        FileFormat::from_extension(ext)
    }

    pub fn get_format(self) -> Box<dyn MapFormat> {
        match self {
            FileFormat::Octile => Box::<Octile>::default(),
        }
    }
}

/// Loads a map from disk, detecting the format from the file extension.
/// Unrecognized extensions fall back to the octile codec.
///
/// # Errors
///
/// `Io` when the file cannot be read, a loading error when it is malformed.
pub fn load_map_from_file(path: &Path) -> Result<TileMap> {
    let data = std::fs::read(path)?;
    let format = FileFormat::from_path(path).unwrap_or(FileFormat::Octile);
    let map = format.get_format().load_map(&data)?;
    log::debug!("loaded {}x{} map from {}", map.get_width(), map.get_height(), path.display());
    Ok(map)
}

/// Writes the map to disk in the format matching the file extension
/// (octile for unrecognized extensions).
///
/// # Errors
///
/// `Io` when the file cannot be written.
pub fn save_map_to_file(map: &TileMap, path: &Path, options: &SaveOptions) -> Result<()> {
    let format = FileFormat::from_path(path).unwrap_or(FileFormat::Octile);
    let bytes = format.get_format().to_bytes(map, options)?;
    std::fs::write(path, bytes)?;
    log::debug!("saved {}x{} map to {}", map.get_width(), map.get_height(), path.display());
    Ok(())
}
