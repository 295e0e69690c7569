use tracing::{info, trace};

use crate::core::bounded_grid::BoundedGrid;
use crate::core::bounds::BoundsOriginRoot;
use crate::core::cell_state::{CellState, DrawSlot};
use crate::core::error::{BoardError, Result};
use crate::core::events::{GridEvent, Observers, SubscriptionId};
use crate::core::models::{CellValue, ElementKind, Vec2};
use crate::core::rules::{Counts, RuleReport, Validity};

/// Fixed-size grid of layered cells.
///
/// Every write goes through [`Grid::write`], which keeps the aggregate counts and the cached
/// validity in step with the cells before any observer hears about the change.
pub struct Grid {
    cells: BoundedGrid<CellState>,
    counts: Counts,
    validity: Validity,
    observers: Observers,
}

impl Grid {
    pub fn new(height: usize, width: usize) -> Grid {
        let bounds = BoundsOriginRoot::new(height, width);
        Grid {
            cells: BoundedGrid::new(bounds, CellState::GROUND),
            counts: Counts::default(),
            validity: Validity::Invalid,
            observers: Observers::default(),
        }
    }

    pub fn height(&self) -> usize {
        self.cells.size().height
    }

    pub fn width(&self) -> usize {
        self.cells.size().width
    }

    pub fn size(&self) -> BoundsOriginRoot {
        self.cells.size()
    }

    pub fn contains(&self, pos: &Vec2) -> bool {
        self.cells.contains(pos)
    }

    fn check(&self, pos: Vec2) -> Result<()> {
        if self.cells.contains(&pos) {
            Ok(())
        } else {
            Err(BoardError::OutOfBounds {
                pos,
                height: self.height(),
                width: self.width(),
            })
        }
    }

    pub fn cell(&self, pos: Vec2) -> Result<CellState> {
        self.check(pos)?;
        Ok(self.cells[&pos])
    }

    pub fn value(&self, pos: Vec2) -> Result<CellValue> {
        Ok(self.cell(pos)?.value())
    }

    pub fn layers(&self, pos: Vec2) -> Result<Vec<(DrawSlot, ElementKind)>> {
        Ok(self.cell(pos)?.layers())
    }

    pub fn is_empty(&self, pos: Vec2) -> Result<bool> {
        Ok(self.cell(pos)?.is_empty())
    }

    /// Overwrites a cell with a composite value, skipping the tool rules. Used by bulk loads.
    pub fn set_value(&mut self, pos: Vec2, value: CellValue) -> Result<()> {
        self.check(pos)?;
        self.write(pos, CellState::from_value(value));
        Ok(())
    }

    /// Applies a tool to a cell through the composition rules.
    pub fn play(&mut self, pos: Vec2, kind: ElementKind) -> Result<CellValue> {
        let next = self.cell(pos)?.apply_tool(kind);
        self.write(pos, next);
        Ok(next.value())
    }

    /// Peels one layer off a cell toward its base.
    pub fn remove(&mut self, pos: Vec2) -> Result<CellValue> {
        let next = self.cell(pos)?.remove_tool();
        self.write(pos, next);
        Ok(next.value())
    }

    /// Stores a cell state. `pos` must already be bounds-checked.
    pub(crate) fn write(&mut self, pos: Vec2, next: CellState) {
        self.write_all([(pos, next)]);
    }

    /// Stores several cell states as one change. Counts and validity are settled before any
    /// observer runs: one `CellChanged` per modified cell, then a single `CountsChanged`, then
    /// `ValidityChanged` only when the validity before and after the batch differ.
    /// Every position must already be bounds-checked.
    pub(crate) fn write_all(&mut self, changes: impl IntoIterator<Item = (Vec2, CellState)>) {
        let mut changed = Vec::new();
        for (pos, next) in changes {
            let previous = self.cells[&pos];
            if previous == next {
                continue;
            }
            self.cells[&pos] = next;
            untally(&mut self.counts, &previous);
            tally(&mut self.counts, &next);
            trace!(%pos, from = ?previous.value(), to = ?next.value(), "cell changed");
            if !changed.contains(&pos) {
                changed.push(pos);
            }
        }
        if changed.is_empty() {
            return;
        }

        let validity = self.rules().validity();
        let validity_changed = validity != self.validity;
        self.validity = validity;

        for pos in changed {
            let value = self.cells[&pos].value();
            self.observers.notify(&GridEvent::CellChanged { pos, value });
        }
        self.observers.notify(&GridEvent::CountsChanged(self.counts));
        if validity_changed {
            info!(?validity, "level validity changed");
            self.observers.notify(&GridEvent::ValidityChanged(validity));
        }
    }

    pub fn counts(&self) -> Counts {
        self.counts
    }

    pub fn filled_cells_count(&self) -> usize {
        self.counts.filled
    }

    pub fn box_count(&self) -> usize {
        self.counts.boxes
    }

    pub fn goal_count(&self) -> usize {
        self.counts.goals
    }

    pub fn player_count(&self) -> usize {
        self.counts.players
    }

    pub fn boxes_on_goals_count(&self) -> usize {
        self.counts.boxes_on_goals
    }

    pub fn rules(&self) -> RuleReport {
        RuleReport::evaluate(&self.counts)
    }

    pub fn rules_ok(&self) -> bool {
        self.rules().rules_ok()
    }

    pub fn validity(&self) -> Validity {
        self.validity
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&GridEvent) + 'static,
    {
        self.observers.subscribe(Box::new(callback))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn positions(&self) -> impl Iterator<Item = Vec2> + use<> {
        self.cells.size().positions()
    }

    /// Composite values, one `Vec` per row.
    pub fn rows(&self) -> Vec<Vec<CellValue>> {
        self.cells
            .rows()
            .map(|row| row.iter().map(CellState::value).collect())
            .collect()
    }

    pub fn find_player(&self) -> Option<Vec2> {
        self.positions().find(|pos| self.cells[pos].has_player())
    }

    pub(crate) fn snapshot(&self) -> BoundedGrid<CellState> {
        self.cells.clone()
    }

    /// Writes back every cell that differs from `snapshot` as a single change.
    pub(crate) fn restore(&mut self, snapshot: &BoundedGrid<CellState>) {
        let changes: Vec<(Vec2, CellState)> = self
            .positions()
            .filter_map(|pos| snapshot.get(&pos).map(|&cell| (pos, cell)))
            .collect();
        self.write_all(changes);
    }
}

impl std::fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grid")
            .field("size", &self.size())
            .field("counts", &self.counts)
            .field("validity", &self.validity)
            .field("observers", &self.observers.len())
            .finish()
    }
}

fn tally(counts: &mut Counts, cell: &CellState) {
    let value = cell.value();
    counts.filled += usize::from(!cell.is_empty());
    counts.boxes += usize::from(value.has_box());
    counts.goals += usize::from(value.has_goal());
    counts.players += usize::from(value.has_player());
    counts.boxes_on_goals += usize::from(value == CellValue::BoxOnGoal);
}

fn untally(counts: &mut Counts, cell: &CellState) {
    let value = cell.value();
    counts.filled -= usize::from(!cell.is_empty());
    counts.boxes -= usize::from(value.has_box());
    counts.goals -= usize::from(value.has_goal());
    counts.players -= usize::from(value.has_player());
    counts.boxes_on_goals -= usize::from(value == CellValue::BoxOnGoal);
}
