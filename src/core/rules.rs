//! Level validity rules.
//!
//! Validity is a pure function of the grid's aggregate counts, so it can be re-derived at any
//! time without consulting the cells.

use serde::{Deserialize, Serialize};

/// Aggregate counts over every cell of a grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    /// Cells that are anything other than plain ground
    pub filled: usize,
    pub boxes: usize,
    /// Goals, including the ones under a box or the player
    pub goals: usize,
    pub players: usize,
    pub boxes_on_goals: usize,
}

/// Outcome of each individual rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleReport {
    pub has_box: bool,
    pub has_goal: bool,
    pub exactly_one_player: bool,
    pub box_goal_parity: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Validity {
    Invalid,
    Valid,
}

impl RuleReport {
    pub fn evaluate(counts: &Counts) -> RuleReport {
        RuleReport {
            has_box: counts.boxes > 0,
            has_goal: counts.goals > 0,
            exactly_one_player: counts.players == 1,
            box_goal_parity: counts.boxes == counts.goals,
        }
    }

    pub fn rules_ok(&self) -> bool {
        self.has_box && self.has_goal && self.exactly_one_player && self.box_goal_parity
    }

    pub fn validity(&self) -> Validity {
        if self.rules_ok() {
            Validity::Valid
        } else {
            Validity::Invalid
        }
    }

    pub fn violations(&self) -> Vec<&'static str> {
        let mut violations = Vec::new();
        if !self.exactly_one_player {
            violations.push("a level needs exactly one player");
        }
        if !self.has_box {
            violations.push("a level needs at least one box");
        }
        if !self.has_goal {
            violations.push("a level needs at least one goal");
        }
        if !self.box_goal_parity {
            violations.push("the number of boxes must equal the number of goals");
        }
        violations
    }
}

pub fn rules_ok(counts: &Counts) -> bool {
    RuleReport::evaluate(counts).rules_ok()
}
