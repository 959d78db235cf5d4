//! Editing layer on top of `tilemap_engine`.
//!
//! This crate holds the UI-independent editing machinery: the drag-paint
//! session state machine and the [`EditState`] document context. A GUI
//! feeds resolved cell coordinates in and re-reads cell state out; all
//! policy lives here so it can be tested without a UI harness.

mod editor;
pub use editor::*;

mod paint;
pub use paint::*;

// Re-export all necessary types from tilemap_engine
pub use tilemap_engine::{
    EngineError, FileFormat, LineEnding, MapFormat, Position, Rectangle, Result, SaveOptions, Size, Tile, TileMap, load_map_from_file, save_map_to_file,
};
