use crate::{EngineError, Position, Rectangle, Result, Size, Tile};

/// The in-memory tile grid.
///
/// Cells are addressed by `(row, col)` with row 0 at the top. Reads outside
/// the grid fail loudly; writes outside the grid are silently dropped so
/// drag iteration may run past the edge without bounds gymnastics.
///
/// The map is the single source of truth for cell state. Renderers poll
/// [`TileMap::take_dirty_region`] and re-read the damaged cells instead of
/// mirroring the grid in a parallel structure.
#[derive(Clone, Debug)]
pub struct TileMap {
    size: Size,
    tiles: Vec<Tile>,
    dirty_region: Option<Rectangle>,
}

impl TileMap {
    /// Creates an all-open map.
    ///
    /// # Errors
    ///
    /// `InvalidDimensions` if either dimension is not positive.
    pub fn new(size: impl Into<Size>) -> Result<Self> {
        let size = size.into();
        if size.width <= 0 || size.height <= 0 {
            return Err(EngineError::InvalidDimensions {
                width: size.width,
                height: size.height,
            });
        }
        Ok(Self {
            size,
            tiles: vec![Tile::Open; (size.width * size.height) as usize],
            dirty_region: None,
        })
    }

    /// Builds a map from parsed row data. Used by format loaders which have
    /// already validated the dimensions.
    pub(crate) fn from_tiles(size: Size, tiles: Vec<Tile>) -> Self {
        debug_assert_eq!(tiles.len(), (size.width * size.height) as usize);
        Self {
            size,
            tiles,
            dirty_region: None,
        }
    }

    pub fn get_width(&self) -> i32 {
        self.size.width
    }

    pub fn get_height(&self) -> i32 {
        self.size.height
    }

    pub fn get_size(&self) -> Size {
        self.size
    }

    pub fn get_rectangle(&self) -> Rectangle {
        Rectangle::from_min_size((0, 0), self.size)
    }

    pub fn is_valid(&self, row: i32, col: i32) -> bool {
        row >= 0 && row < self.size.height && col >= 0 && col < self.size.width
    }

    /// Reads the tile at `(row, col)`.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` when the cell lies outside the grid. Never clamps.
    pub fn get(&self, row: i32, col: i32) -> Result<Tile> {
        if !self.is_valid(row, col) {
            return Err(EngineError::OutOfBounds {
                row,
                col,
                width: self.size.width,
                height: self.size.height,
            });
        }
        Ok(self.tiles[(row * self.size.width + col) as usize])
    }

    /// Writes the tile at `(row, col)`. Out-of-bounds writes are dropped.
    pub fn set(&mut self, row: i32, col: i32, tile: Tile) {
        if !self.is_valid(row, col) {
            return;
        }
        self.tiles[(row * self.size.width + col) as usize] = tile;
        self.mark_dirty(row, col);
    }

    /// Flips the tile at `(row, col)` between open and blocked.
    /// Out-of-bounds positions are ignored.
    pub fn toggle(&mut self, row: i32, col: i32) {
        if !self.is_valid(row, col) {
            return;
        }
        let idx = (row * self.size.width + col) as usize;
        self.tiles[idx] = self.tiles[idx].toggled();
        self.mark_dirty(row, col);
    }

    fn mark_dirty(&mut self, row: i32, col: i32) {
        let cell = Rectangle::from(col, row, 1, 1);
        self.dirty_region = Some(match self.dirty_region {
            Some(region) => region.union(&cell),
            None => cell,
        });
    }

    /// Returns the rectangle of cells changed since the last call and
    /// resets the accumulator. `None` when nothing changed.
    pub fn take_dirty_region(&mut self) -> Option<Rectangle> {
        self.dirty_region.take()
    }

    /// Iterates all cells in row-major order.
    pub fn iter_cells(&self) -> impl Iterator<Item = (Position, Tile)> + '_ {
        let width = self.size.width;
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, tile)| (Position::from_row_col(i as i32 / width, i as i32 % width), *tile))
    }
}

impl PartialEq for TileMap {
    fn eq(&self, other: &TileMap) -> bool {
        // dirty state is transient and does not make two maps differ
        self.size == other.size && self.tiles == other.tiles
    }
}
