mod board;
mod bounded_grid;
mod bounds;
mod cell_state;
mod error;
mod events;
mod grid;
mod models;
mod rules;
mod tool;
mod update;

pub use board::{Board, BoardMode, Placement, RejectReason};
pub use bounds::BoundsOriginRoot;
pub use cell_state::{Base, CellState, DrawSlot, Marker, Mobile};
pub use error::{BoardError, Result};
pub use events::{GridEvent, SubscriptionId};
pub use grid::Grid;
pub use models::{CellValue, Direction, ElementKind, Vec2};
pub use rules::{rules_ok, Counts, RuleReport, Validity};
pub use tool::{Tool, ToolSelection};
pub use update::{step, BlockReason, MoveOutcome};
