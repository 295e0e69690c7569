use serde::{Deserialize, Serialize};

/// The kinds of element a cell can be built from. `Ground` is the implicit base and is never
/// placed; passed as a tool it means "erase".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    Ground,
    Wall,
    Goal,
    Box,
    Player,
}

/// Flattened view of a cell, as seen by anything that does not care about layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellValue {
    Ground,
    Wall,
    Goal,
    Box,
    Player,
    BoxOnGoal,
    PlayerOnGoal,
}

impl CellValue {
    pub fn has_box(&self) -> bool {
        matches!(self, CellValue::Box | CellValue::BoxOnGoal)
    }

    pub fn has_player(&self) -> bool {
        matches!(self, CellValue::Player | CellValue::PlayerOnGoal)
    }

    pub fn has_goal(&self) -> bool {
        matches!(
            self,
            CellValue::Goal | CellValue::BoxOnGoal | CellValue::PlayerOnGoal
        )
    }

    /// The tool-level kind a cell "is" for toggle purposes. Composites have no single kind.
    pub fn as_element(&self) -> Option<ElementKind> {
        match self {
            CellValue::Ground => Some(ElementKind::Ground),
            CellValue::Wall => Some(ElementKind::Wall),
            CellValue::Goal => Some(ElementKind::Goal),
            CellValue::Box => Some(ElementKind::Box),
            CellValue::Player => Some(ElementKind::Player),
            CellValue::BoxOnGoal | CellValue::PlayerOnGoal => None,
        }
    }
}

/// Grid coordinate: `i` is the row, `j` the column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vec2 {
    pub i: i32,
    pub j: i32,
}

impl Vec2 {
    pub fn new(i: i32, j: i32) -> Vec2 {
        Vec2 { i, j }
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 {
            i: self.i + rhs.i,
            j: self.j + rhs.j,
        }
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.i, self.j)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(&self) -> Vec2 {
        match self {
            Direction::Up => Vec2 { i: -1, j: 0 },
            Direction::Down => Vec2 { i: 1, j: 0 },
            Direction::Left => Vec2 { i: 0, j: -1 },
            Direction::Right => Vec2 { i: 0, j: 1 },
        }
    }
}
