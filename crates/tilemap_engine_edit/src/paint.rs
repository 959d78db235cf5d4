use tilemap_engine::{EngineError, Position, Result, Tile, TileMap};

/// Default side length of the square brush, in cells.
pub const DEFAULT_BRUSH_EXTENT: i32 = 3;

#[derive(Clone, Copy, Debug, PartialEq)]
enum SessionState {
    Idle,
    Active {
        /// State every touched cell is driven to. `None` until the gesture
        /// has hit an in-bounds cell.
        target: Option<Tile>,
        last_anchor: Option<Position>,
        /// Brush extent captured at `begin`; configuring the session
        /// mid-gesture does not affect the running gesture.
        extent: i32,
    },
}

/// Translates one pointer drag (down, move*, up) into map writes.
///
/// The cell under the pointer at `begin` decides the target state for the
/// whole gesture: painting is uniform, cells are never toggled per-cell.
/// Each touch stamps a square brush anchored at the touched cell and
/// extending down-right, clipped at the map edge.
#[derive(Clone, Debug)]
pub struct PaintSession {
    brush_extent: i32,
    state: SessionState,
}

impl Default for PaintSession {
    fn default() -> Self {
        Self::new()
    }
}

impl PaintSession {
    pub fn new() -> Self {
        Self {
            brush_extent: DEFAULT_BRUSH_EXTENT,
            state: SessionState::Idle,
        }
    }

    pub fn get_brush_extent(&self) -> i32 {
        self.brush_extent
    }

    /// Sets the brush extent for subsequent gestures.
    ///
    /// # Errors
    ///
    /// `InvalidBrushExtent` for non-positive values.
    pub fn set_brush_extent(&mut self, extent: i32) -> Result<()> {
        if extent <= 0 {
            return Err(EngineError::InvalidBrushExtent { extent });
        }
        self.brush_extent = extent;
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        !matches!(self.state, SessionState::Idle)
    }

    /// Starts a gesture at the given cell. Writes nothing by itself.
    ///
    /// An open anchor cell means the gesture blocks cells, a blocked anchor
    /// means it opens them. An out-of-bounds anchor leaves the decision to
    /// the first in-bounds touch of the gesture.
    ///
    /// Beginning while a gesture is running restarts the session.
    pub fn begin(&mut self, map: &TileMap, row: i32, col: i32) {
        let target = map.get(row, col).ok().map(Tile::toggled);
        self.state = SessionState::Active {
            target,
            last_anchor: None,
            extent: self.brush_extent,
        };
    }

    /// Feeds one pointer position to the running gesture, stamping the
    /// brush onto the map. Returns `true` when any cell was written.
    ///
    /// Consecutive touches of the same cell are dropped so a lingering
    /// pointer does not generate redundant writes. When idle, this is a
    /// no-op.
    pub fn touch(&mut self, map: &mut TileMap, row: i32, col: i32) -> bool {
        let SessionState::Active { target, last_anchor, extent } = &mut self.state else {
            return false;
        };

        let anchor = Position::from_row_col(row, col);
        if *last_anchor == Some(anchor) {
            return false;
        }

        if target.is_none() {
            // gesture started outside the map; first in-bounds contact
            // decides the direction
            let Ok(tile) = map.get(row, col) else {
                return false;
            };
            *target = Some(tile.toggled());
        }
        let tile = target.unwrap_or_default();

        for r in row..row + *extent {
            for c in col..col + *extent {
                map.set(r, c, tile);
            }
        }
        *last_anchor = Some(anchor);

        // the brush rectangle may be clipped away entirely
        row.max(0) < (row + *extent).min(map.get_height()) && col.max(0) < (col + *extent).min(map.get_width())
    }

    /// Ends the gesture. Writes already stamped stay committed; there is no
    /// staging buffer to roll back. Idempotent.
    pub fn end(&mut self) {
        self.state = SessionState::Idle;
    }
}
