pub use dissimilar::diff as __diff;
use crate::core::{Board, Placement, Tool, ToolSelection, Vec2};
use crate::level_format::render_level;

#[macro_export]
macro_rules! assert_eq_text {
    ($left:expr, $right:expr) => {
        assert_eq_text!($left, $right,)
    };
    ($left:expr, $right:expr, $($tt:tt)*) => {{
        let left = $left;
        let right = $right;
        if left != right {
            if left.trim() == right.trim() {
                std::eprintln!("Left:\n{:?}\n\nRight:\n{:?}\n\nWhitespace difference\n", left, right);
            } else {
                let diff = $crate::test::test_util::__diff(left, right);
                std::eprintln!("Left:\n{}\n\nRight:\n{}\n\nDiff:\n{}\n", left, right, $crate::test::test_util::format_diff(diff));
            }
            std::eprintln!($($tt)*);
            panic!("text differs");
        }
    }};
}

pub fn format_diff(chunks: Vec<dissimilar::Chunk>) -> String {
    let mut buf = String::new();
    for chunk in chunks {
        let formatted = match chunk {
            dissimilar::Chunk::Equal(text) => text.into(),
            dissimilar::Chunk::Delete(text) => format!("\x1b[41m{}\x1b[0m", text),
            dissimilar::Chunk::Insert(text) => format!("\x1b[42m{}\x1b[0m", text),
        };
        buf.push_str(&formatted);
    }
    buf
}

pub fn pos(i: i32, j: i32) -> Vec2 {
    Vec2 { i, j }
}

pub struct BoardTestState {
    pub board: Board,
    pub tool: ToolSelection,
}

impl BoardTestState {
    pub fn new(level: &str) -> Self {
        let mut board = Board::new(1, 1);
        board.open_str(level).expect("test level should parse");
        Self {
            board,
            tool: ToolSelection::default(),
        }
    }

    pub fn empty(height: usize, width: usize) -> Self {
        Self {
            board: Board::new(height, width),
            tool: ToolSelection::default(),
        }
    }

    pub fn board_to_string(&self) -> String {
        render_level(self.board.grid()).trim_matches('\n').into()
    }

    pub fn place(&mut self, i: i32, j: i32, tool: Tool) -> Placement {
        self.tool.select(tool);
        self.board
            .play(pos(i, j), &self.tool)
            .expect("placement should be in bounds")
    }

    pub fn assert_matches(&self, expected: &str) {
        let actual = self.board_to_string();
        assert_eq_text!(expected.trim_matches('\n'), actual.as_str().trim_matches('\n'));
    }
}
