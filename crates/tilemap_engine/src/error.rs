//! Unified error types for tilemap_engine

use thiserror::Error;

/// Main error type for map operations
#[derive(Debug, Error)]
pub enum EngineError {
    // === I/O Errors ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Construction Errors ===
    #[error("Map dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    // === Loading Errors ===
    #[error("Missing '{keyword}' keyword in map header")]
    MissingKeyword { keyword: &'static str },

    #[error("Invalid map dimension: '{value}'")]
    InvalidDimension { value: String },

    #[error("Map row {row} is truncated or missing")]
    TruncatedRow { row: i32 },

    // === Access Errors ===
    #[error("Cell ({row}, {col}) is outside the {width}x{height} map")]
    OutOfBounds { row: i32, col: i32, width: i32, height: i32 },

    // === Editing Errors ===
    #[error("Brush extent must be positive, got {extent}")]
    InvalidBrushExtent { extent: i32 },

    #[error("No file name set for this map")]
    NoFileName,
}

/// Convenience result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
