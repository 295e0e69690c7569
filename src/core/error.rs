use thiserror::Error;

use crate::core::models::Vec2;
use crate::core::rules::RuleReport;

pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors surfaced by the grid and board.
#[derive(Debug, Error)]
pub enum BoardError {
    /// The coordinate is outside the grid
    #[error("position {pos} is outside the {height}x{width} grid")]
    OutOfBounds {
        pos: Vec2,
        height: usize,
        width: usize,
    },

    /// The level source could not be read or decoded
    #[error("level source is unreadable: {0}")]
    SourceUnreadable(#[from] std::io::Error),

    /// The level source held no rows
    #[error("level source contains no rows")]
    EmptyLevel,

    /// The level breaks at least one validity rule
    #[error("level is not valid: {}", .0.violations().join(", "))]
    LevelInvalid(RuleReport),

    #[error("board is not in play mode")]
    NotPlaying,

    #[error("board is in play mode")]
    Playing,
}
