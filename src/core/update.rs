use tracing::debug;

use crate::core::cell_state::Mobile;
use crate::core::grid::Grid;
use crate::core::models::{Direction, Vec2};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    PlayerMove,
    PlayerAndBoxMove,
    Blocked(BlockReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockReason {
    NoPlayer,
    OutOfBounds,
    Wall,
    BoxBlocked,
}

/// Moves the player one step, pushing a box if one is in the way. Goals stay where they are;
/// only the mobile layer of the affected cells is rewritten.
pub fn step(grid: &mut Grid, direction: Direction) -> MoveOutcome {
    let Some(player) = grid.find_player() else {
        return MoveOutcome::Blocked(BlockReason::NoPlayer);
    };
    let dir = direction.delta();
    let next = player + dir;

    let outcome = match try_step(grid, player, next, dir) {
        Ok(outcome) => outcome,
        Err(reason) => MoveOutcome::Blocked(reason),
    };
    debug!(?direction, from = %player, ?outcome, "player step");
    outcome
}

fn try_step(grid: &mut Grid, player: Vec2, next: Vec2, dir: Vec2) -> Result<MoveOutcome, BlockReason> {
    let dest = grid.cell(next).map_err(|_| BlockReason::OutOfBounds)?;
    if dest.is_wall() {
        return Err(BlockReason::Wall);
    }

    let mut changes = Vec::with_capacity(3);
    let pushing = dest.has_box();
    if pushing {
        let beyond_pos = next + dir;
        let beyond = grid.cell(beyond_pos).map_err(|_| BlockReason::OutOfBounds)?;
        if beyond.is_wall() || beyond.mobile().is_some() {
            return Err(BlockReason::BoxBlocked);
        }
        changes.push((beyond_pos, beyond.with_mobile(Mobile::Box)));
    }

    let current = grid.cell(player).map_err(|_| BlockReason::NoPlayer)?;
    changes.push((player, current.without_mobile()));
    changes.push((next, dest.with_mobile(Mobile::Player)));
    grid.write_all(changes);

    Ok(if pushing {
        MoveOutcome::PlayerAndBoxMove
    } else {
        MoveOutcome::PlayerMove
    })
}
