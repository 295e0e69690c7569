use serde::{Deserialize, Serialize};
use crate::core::models::ElementKind;

/// An element a designer can place. Ground is not a tool: erasing is a gesture, not a pick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tool {
    Wall,
    Goal,
    Box,
    Player,
}

const ALL_TOOLS: &[Tool] = &[Tool::Wall, Tool::Goal, Tool::Box, Tool::Player];

impl Tool {
    pub fn all() -> &'static [Tool] {
        ALL_TOOLS
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            Tool::Wall => ElementKind::Wall,
            Tool::Goal => ElementKind::Goal,
            Tool::Box => ElementKind::Box,
            Tool::Player => ElementKind::Player,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tool::Wall => "Wall",
            Tool::Goal => "Goal",
            Tool::Box => "Box",
            Tool::Player => "Player",
        }
    }
}

/// The tool currently picked in the editing session. The front-end owns it; the board only
/// reads it when a placement comes in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ToolSelection {
    selected: Option<Tool>,
}

impl ToolSelection {
    pub fn new(tool: Tool) -> ToolSelection {
        ToolSelection {
            selected: Some(tool),
        }
    }

    pub fn select(&mut self, tool: Tool) {
        self.selected = Some(tool);
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<Tool> {
        self.selected
    }
}
