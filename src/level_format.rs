//! Plain-text level format.
//!
//! One line per row and one character per column. Whitespace-only lines are skipped and short
//! rows are padded with ground up to the longest row.
//!
//! | Symbol | Cell |
//! |---|---|
//! | `#` | wall |
//! | `.` | goal |
//! | `$` | box |
//! | `@` | player |
//! | `*` | box on goal |
//! | `+` | player on goal |
//! | anything else | ground |
//!
//! [`render_level`] writes ground as `-` so that a row of pure ground survives a reload.

use crate::core::{BoardError, CellValue, Grid, Result, Vec2};

pub fn symbol_to_value(symbol: char) -> CellValue {
    match symbol {
        '#' => CellValue::Wall,
        '.' => CellValue::Goal,
        '$' => CellValue::Box,
        '@' => CellValue::Player,
        '*' => CellValue::BoxOnGoal,
        '+' => CellValue::PlayerOnGoal,
        _ => CellValue::Ground,
    }
}

pub fn value_to_symbol(value: CellValue) -> char {
    match value {
        CellValue::Ground => '-',
        CellValue::Wall => '#',
        CellValue::Goal => '.',
        CellValue::Box => '$',
        CellValue::Player => '@',
        CellValue::BoxOnGoal => '*',
        CellValue::PlayerOnGoal => '+',
    }
}

pub fn parse_level(s: &str) -> Result<Grid> {
    let rows: Vec<&str> = s
        .lines()
        .map(|line| line.trim_end())
        .filter(|line| !line.is_empty())
        .collect();
    if rows.is_empty() {
        return Err(BoardError::EmptyLevel);
    }
    let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);

    let mut grid = Grid::new(rows.len(), width);
    for (i, row) in rows.iter().enumerate() {
        for (j, ch) in row.chars().enumerate() {
            let value = symbol_to_value(ch);
            if value != CellValue::Ground {
                grid.set_value(Vec2::new(i as i32, j as i32), value)?;
            }
        }
    }
    Ok(grid)
}

pub fn render_level(grid: &Grid) -> String {
    let mut result = String::new();
    for row in grid.rows() {
        result.extend(row.into_iter().map(value_to_symbol));
        result.push('\n');
    }
    result
}
