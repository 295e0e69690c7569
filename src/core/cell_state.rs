use serde::{Deserialize, Serialize};
use crate::core::models::{CellValue, ElementKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Base {
    #[default]
    Ground,
    Wall,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marker {
    Goal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mobile {
    Box,
    Player,
}

/// Position of an element in the bottom-to-top draw order of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DrawSlot {
    Bottom,
    Middle,
    Top,
}

/// The layered content of one grid cell.
///
/// A wall base never carries a marker or a mobile element; every constructor and rule below
/// keeps that true, which is why the fields are private.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CellState {
    base: Base,
    marker: Option<Marker>,
    mobile: Option<Mobile>,
}

impl CellState {
    pub const GROUND: CellState = CellState {
        base: Base::Ground,
        marker: None,
        mobile: None,
    };

    pub const WALL: CellState = CellState {
        base: Base::Wall,
        marker: None,
        mobile: None,
    };

    pub fn from_value(value: CellValue) -> CellState {
        let (marker, mobile) = match value {
            CellValue::Ground => (None, None),
            CellValue::Wall => return CellState::WALL,
            CellValue::Goal => (Some(Marker::Goal), None),
            CellValue::Box => (None, Some(Mobile::Box)),
            CellValue::Player => (None, Some(Mobile::Player)),
            CellValue::BoxOnGoal => (Some(Marker::Goal), Some(Mobile::Box)),
            CellValue::PlayerOnGoal => (Some(Marker::Goal), Some(Mobile::Player)),
        };
        CellState {
            base: Base::Ground,
            marker,
            mobile,
        }
    }

    pub fn base(&self) -> Base {
        self.base
    }

    pub fn marker(&self) -> Option<Marker> {
        self.marker
    }

    pub fn mobile(&self) -> Option<Mobile> {
        self.mobile
    }

    pub fn is_wall(&self) -> bool {
        self.base == Base::Wall
    }

    pub fn has_goal(&self) -> bool {
        self.marker == Some(Marker::Goal)
    }

    pub fn has_box(&self) -> bool {
        self.mobile == Some(Mobile::Box)
    }

    pub fn has_player(&self) -> bool {
        self.mobile == Some(Mobile::Player)
    }

    pub fn is_empty(&self) -> bool {
        *self == CellState::GROUND
    }

    pub fn value(&self) -> CellValue {
        if self.is_wall() {
            return CellValue::Wall;
        }
        match (self.marker, self.mobile) {
            (None, None) => CellValue::Ground,
            (Some(Marker::Goal), None) => CellValue::Goal,
            (None, Some(Mobile::Box)) => CellValue::Box,
            (None, Some(Mobile::Player)) => CellValue::Player,
            (Some(Marker::Goal), Some(Mobile::Box)) => CellValue::BoxOnGoal,
            (Some(Marker::Goal), Some(Mobile::Player)) => CellValue::PlayerOnGoal,
        }
    }

    fn contains(&self, kind: ElementKind) -> bool {
        match kind {
            ElementKind::Ground => false,
            ElementKind::Wall => self.is_wall(),
            ElementKind::Goal => self.has_goal(),
            ElementKind::Box => self.has_box(),
            ElementKind::Player => self.has_player(),
        }
    }

    /// Computes the state after a tool gesture on this cell.
    ///
    /// Applying a kind the cell already holds toggles that layer off; a goal under a cleared
    /// mobile element survives. Walls replace everything, and nothing but a wall or an erase
    /// can change a wall cell.
    pub fn apply_tool(&self, kind: ElementKind) -> CellState {
        if self.contains(kind) {
            return match kind {
                ElementKind::Goal => CellState {
                    marker: None,
                    ..*self
                },
                ElementKind::Box | ElementKind::Player => CellState {
                    mobile: None,
                    ..*self
                },
                ElementKind::Wall | ElementKind::Ground => CellState::GROUND,
            };
        }

        match kind {
            ElementKind::Ground => CellState::GROUND,
            ElementKind::Wall => CellState::WALL,
            _ if self.is_wall() => *self,
            ElementKind::Goal => CellState {
                marker: Some(Marker::Goal),
                ..*self
            },
            ElementKind::Box => CellState {
                mobile: Some(Mobile::Box),
                ..*self
            },
            ElementKind::Player => CellState {
                mobile: Some(Mobile::Player),
                ..*self
            },
        }
    }

    /// Secondary action: peel the cell toward its base. A goal under a box or player is kept.
    pub fn remove_tool(&self) -> CellState {
        if self.mobile.is_some() && self.has_goal() {
            CellState {
                mobile: None,
                ..*self
            }
        } else {
            CellState::GROUND
        }
    }

    /// Layers in bottom-to-top draw order. When a goal shares the cell with a box or player,
    /// the goal is drawn above it so goal cells stay visible.
    pub fn layers(&self) -> Vec<(DrawSlot, ElementKind)> {
        let base = match self.base {
            Base::Ground => ElementKind::Ground,
            Base::Wall => ElementKind::Wall,
        };
        let mut layers = vec![(DrawSlot::Bottom, base)];

        let mobile = self.mobile.map(|m| match m {
            Mobile::Box => ElementKind::Box,
            Mobile::Player => ElementKind::Player,
        });
        match (self.marker, mobile) {
            (Some(Marker::Goal), Some(mobile)) => {
                layers.push((DrawSlot::Middle, mobile));
                layers.push((DrawSlot::Top, ElementKind::Goal));
            }
            (Some(Marker::Goal), None) => layers.push((DrawSlot::Middle, ElementKind::Goal)),
            (None, Some(mobile)) => layers.push((DrawSlot::Middle, mobile)),
            (None, None) => {}
        }
        layers
    }

    /// Moves the mobile element out of this cell, leaving the marker behind.
    pub(crate) fn without_mobile(&self) -> CellState {
        CellState {
            mobile: None,
            ..*self
        }
    }

    pub(crate) fn with_mobile(&self, mobile: Mobile) -> CellState {
        CellState {
            mobile: Some(mobile),
            ..*self
        }
    }
}

impl From<CellValue> for CellState {
    fn from(value: CellValue) -> Self {
        CellState::from_value(value)
    }
}
