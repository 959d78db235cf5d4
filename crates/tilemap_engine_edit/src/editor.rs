use std::path::{Path, PathBuf};

use tilemap_engine::{EngineError, Rectangle, Result, SaveOptions, Size, TileMap, load_map_from_file, save_map_to_file};

use crate::PaintSession;

/// One open map document: the grid, its file binding, the paint session,
/// and a dirty flag.
///
/// Everything a frontend needs for New/Open/Save/Save As and for routing
/// pointer gestures goes through here, so the whole editing flow is
/// testable headless.
pub struct EditState {
    map: TileMap,
    file_name: Option<PathBuf>,
    is_map_dirty: bool,
    session: PaintSession,
    save_options: SaveOptions,
}

impl EditState {
    /// Fresh all-open document of the given size, not yet bound to a file.
    ///
    /// # Errors
    ///
    /// `InvalidDimensions` for non-positive sizes.
    pub fn new(size: impl Into<Size>) -> Result<Self> {
        Ok(Self::from_map(TileMap::new(size)?))
    }

    pub fn from_map(map: TileMap) -> Self {
        Self {
            map,
            file_name: None,
            is_map_dirty: false,
            session: PaintSession::new(),
            save_options: SaveOptions::new(),
        }
    }

    /// Opens a document from disk.
    ///
    /// # Errors
    ///
    /// `Io` or a loading error; nothing is constructed on failure, so the
    /// caller's current document stays as it was.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let map = load_map_from_file(path)?;
        let mut state = Self::from_map(map);
        state.file_name = Some(path.to_path_buf());
        Ok(state)
    }

    pub fn get_map(&self) -> &TileMap {
        &self.map
    }

    /// Mutable map access. Any mutation through here counts as an edit.
    pub fn get_map_mut(&mut self) -> &mut TileMap {
        self.is_map_dirty = true;
        &mut self.map
    }

    /// Swaps in an already-built map (drop-target flow), keeping the
    /// document clean.
    pub fn replace_map(&mut self, map: TileMap) {
        self.map = map;
        self.is_map_dirty = false;
        self.session.end();
    }

    pub fn get_file_name(&self) -> Option<&Path> {
        self.file_name.as_deref()
    }

    pub fn set_file_name(&mut self, path: impl Into<PathBuf>) {
        self.file_name = Some(path.into());
    }

    pub fn is_dirty(&self) -> bool {
        self.is_map_dirty
    }

    pub fn get_save_options(&self) -> SaveOptions {
        self.save_options
    }

    pub fn set_save_options(&mut self, options: SaveOptions) {
        self.save_options = options;
    }

    /// Writes the document back to its bound file.
    ///
    /// # Errors
    ///
    /// `NoFileName` when the document was never saved or loaded; `Io` on
    /// write failure (the dirty flag stays set then).
    pub fn save(&mut self) -> Result<()> {
        let Some(path) = self.file_name.clone() else {
            return Err(EngineError::NoFileName);
        };
        save_map_to_file(&self.map, &path, &self.save_options)?;
        self.is_map_dirty = false;
        Ok(())
    }

    /// Writes the document to a new file and binds it there.
    ///
    /// # Errors
    ///
    /// `Io` on write failure.
    pub fn save_as(&mut self, path: impl Into<PathBuf>) -> Result<()> {
        self.file_name = Some(path.into());
        self.save()
    }

    // === Editing operations ===

    /// Flips a single cell (plain click, no drag). Out-of-bounds clicks do
    /// nothing and do not taint the document.
    pub fn toggle_tile(&mut self, row: i32, col: i32) {
        if !self.map.is_valid(row, col) {
            return;
        }
        self.map.toggle(row, col);
        self.is_map_dirty = true;
    }

    pub fn get_brush_extent(&self) -> i32 {
        self.session.get_brush_extent()
    }

    /// See [`PaintSession::set_brush_extent`].
    ///
    /// # Errors
    ///
    /// `InvalidBrushExtent` for non-positive values.
    pub fn set_brush_extent(&mut self, extent: i32) -> Result<()> {
        self.session.set_brush_extent(extent)
    }

    /// Pointer-down: starts a paint gesture at the given cell.
    pub fn begin_paint(&mut self, row: i32, col: i32) {
        self.session.begin(&self.map, row, col);
    }

    /// Pointer-move (and the initial stamp after [`EditState::begin_paint`]).
    pub fn paint_to(&mut self, row: i32, col: i32) {
        if self.session.touch(&mut self.map, row, col) {
            self.is_map_dirty = true;
        }
    }

    /// Pointer-up or pointer-left-the-surface.
    pub fn end_paint(&mut self) {
        self.session.end();
    }

    pub fn is_painting(&self) -> bool {
        self.session.is_active()
    }

    /// Damage rectangle for renderers, see [`TileMap::take_dirty_region`].
    pub fn take_dirty_region(&mut self) -> Option<Rectangle> {
        self.map.take_dirty_region()
    }
}
