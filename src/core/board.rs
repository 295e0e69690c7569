use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use crate::config::EditorConfig;
use crate::core::bounded_grid::BoundedGrid;
use crate::core::cell_state::CellState;
use crate::core::error::{BoardError, Result};
use crate::core::events::{GridEvent, SubscriptionId};
use crate::core::grid::Grid;
use crate::core::models::{CellValue, Direction, ElementKind, Vec2};
use crate::core::rules::RuleReport;
use crate::core::tool::ToolSelection;
use crate::core::update::{step, MoveOutcome};
use crate::level_format::{parse_level, render_level};

/// What happened to a placement request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Applied(CellValue),
    Unchanged,
    Rejected(RejectReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The grid is at capacity and the target cell was empty
    CapacityExceeded,
    NoToolSelected,
    /// Cells cannot be edited while the level is being played
    NotEditable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardMode {
    Design,
    Play,
}

/// An editing or play session over a single grid.
///
/// The board owns its grid outright. Opening a level or resetting swaps in a new grid, and
/// every observer subscribed to the old one goes away with it.
#[derive(Debug)]
pub struct Board {
    grid: Grid,
    max_filled_cells: Option<usize>,
    mode: BoardMode,
    design: Option<BoundedGrid<CellState>>,
}

impl Board {
    pub fn new(height: usize, width: usize) -> Board {
        Board {
            grid: Grid::new(height, width),
            max_filled_cells: None,
            mode: BoardMode::Design,
            design: None,
        }
    }

    pub fn with_capacity(height: usize, width: usize, max_filled_cells: usize) -> Board {
        let mut board = Board::new(height, width);
        board.max_filled_cells = Some(max_filled_cells);
        board
    }

    pub fn from_config(config: &EditorConfig) -> Board {
        let mut board = Board::new(config.height, config.width);
        board.max_filled_cells = config.max_filled_cells;
        board
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn mode(&self) -> BoardMode {
        self.mode
    }

    /// Capacity limit: half the cells of the current grid unless overridden.
    pub fn max_filled_cells(&self) -> usize {
        self.max_filled_cells
            .unwrap_or_else(|| self.grid.size().area() / 2)
    }

    pub fn set_max_filled_cells(&mut self, max_filled_cells: Option<usize>) {
        self.max_filled_cells = max_filled_cells;
    }

    pub fn is_full(&self) -> bool {
        self.grid.filled_cells_count() >= self.max_filled_cells()
    }

    pub fn is_player_placed(&self) -> bool {
        self.grid.player_count() > 0
    }

    pub fn rules(&self) -> RuleReport {
        self.grid.rules()
    }

    pub fn rules_ok(&self) -> bool {
        self.grid.rules_ok()
    }

    /// Primary action on a cell. Erases the cell when it already is exactly the selected tool,
    /// otherwise applies the tool. An empty cell cannot be filled once the grid is full.
    pub fn play(&mut self, pos: Vec2, tool: &ToolSelection) -> Result<Placement> {
        let current = self.grid.cell(pos)?;
        if self.mode == BoardMode::Play {
            return Ok(Placement::Rejected(RejectReason::NotEditable));
        }
        let Some(tool) = tool.selected() else {
            return Ok(Placement::Rejected(RejectReason::NoToolSelected));
        };

        let kind = if current.value().as_element() == Some(tool.kind()) {
            ElementKind::Ground
        } else {
            tool.kind()
        };

        if current.is_empty() && self.is_full() {
            debug!(%pos, ?tool, limit = self.max_filled_cells(), "placement rejected, grid full");
            return Ok(Placement::Rejected(RejectReason::CapacityExceeded));
        }

        let value = self.grid.play(pos, kind)?;
        Ok(if value == current.value() {
            Placement::Unchanged
        } else {
            Placement::Applied(value)
        })
    }

    /// Secondary action on a cell: peel it back toward the base.
    pub fn remove(&mut self, pos: Vec2) -> Result<Placement> {
        let current = self.grid.value(pos)?;
        if self.mode == BoardMode::Play {
            return Ok(Placement::Rejected(RejectReason::NotEditable));
        }
        let value = self.grid.remove(pos)?;
        Ok(if value == current {
            Placement::Unchanged
        } else {
            Placement::Applied(value)
        })
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&GridEvent) + 'static,
    {
        self.grid.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.grid.unsubscribe(id)
    }

    /// Replaces the grid with a fresh empty one.
    pub fn reset(&mut self, height: usize, width: usize) {
        info!(height, width, "board reset");
        self.replace_grid(Grid::new(height, width));
    }

    /// Loads a level from text. The current grid is only replaced once the whole level parsed.
    pub fn open_str(&mut self, source: &str) -> Result<&Grid> {
        let grid = parse_level(source)?;
        info!(
            height = grid.height(),
            width = grid.width(),
            counts = ?grid.counts(),
            rules_ok = grid.rules_ok(),
            "level opened"
        );
        self.replace_grid(grid);
        Ok(&self.grid)
    }

    pub fn open_reader<R: Read>(&mut self, mut reader: R) -> Result<&Grid> {
        let mut source = String::new();
        reader.read_to_string(&mut source)?;
        self.open_str(&source)
    }

    pub fn open_file(&mut self, path: impl AsRef<Path>) -> Result<&Grid> {
        let path = path.as_ref();
        debug!(path = %path.display(), "opening level file");
        let file = std::fs::File::open(path)?;
        self.open_reader(file)
    }

    fn replace_grid(&mut self, grid: Grid) {
        self.grid = grid;
        self.mode = BoardMode::Design;
        self.design = None;
    }

    /// Text form of the level. Only valid levels can be exported.
    pub fn export(&self) -> Result<String> {
        if self.mode == BoardMode::Play {
            return Err(BoardError::Playing);
        }
        let report = self.grid.rules();
        if !report.rules_ok() {
            return Err(BoardError::LevelInvalid(report));
        }
        Ok(render_level(&self.grid))
    }

    pub fn save_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = self.export()?;
        std::fs::write(path, text)?;
        info!(path = %path.display(), "level saved");
        Ok(())
    }

    /// Switches to play mode. The current design is kept and comes back on [`Board::stop_play`].
    pub fn start_play(&mut self) -> Result<()> {
        if self.mode == BoardMode::Play {
            return Err(BoardError::Playing);
        }
        let report = self.grid.rules();
        if !report.rules_ok() {
            return Err(BoardError::LevelInvalid(report));
        }
        self.design = Some(self.grid.snapshot());
        self.mode = BoardMode::Play;
        info!("play started");
        Ok(())
    }

    pub fn stop_play(&mut self) -> Result<()> {
        if self.mode != BoardMode::Play {
            return Err(BoardError::NotPlaying);
        }
        if let Some(design) = self.design.take() {
            self.grid.restore(&design);
        }
        self.mode = BoardMode::Design;
        info!("play stopped, design restored");
        Ok(())
    }

    pub fn move_player(&mut self, direction: Direction) -> Result<MoveOutcome> {
        if self.mode != BoardMode::Play {
            return Err(BoardError::NotPlaying);
        }
        let outcome = step(&mut self.grid, direction);
        if self.is_won() {
            info!("level solved");
        }
        Ok(outcome)
    }

    /// Every goal holds a box.
    pub fn is_won(&self) -> bool {
        let counts = self.grid.counts();
        counts.goals > 0 && counts.boxes_on_goals == counts.goals
    }
}
