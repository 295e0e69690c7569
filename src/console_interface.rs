use crate::core::{
    Board, BoardMode, CellValue, Direction, GridEvent, Placement, RejectReason, Tool,
    ToolSelection, Validity, Vec2,
};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::cell::Cell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;

pub struct EditorState {
    pub board: Board,
    pub tool: ToolSelection,
    pub cursor: Vec2,
    pub save_path: Option<PathBuf>,
    pub message: Option<String>,
    validity_change: Rc<Cell<Option<Validity>>>,
}

impl EditorState {
    pub fn new(board: Board, save_path: Option<PathBuf>) -> Self {
        let mut state = EditorState {
            board,
            tool: ToolSelection::new(Tool::Wall),
            cursor: Vec2::new(0, 0),
            save_path,
            message: None,
            validity_change: Rc::new(Cell::new(None)),
        };
        state.watch_validity();
        state
    }

    /// Subscribes to validity transitions on the board's current grid. Has to be called again
    /// whenever the grid is replaced.
    pub fn watch_validity(&mut self) {
        let change = Rc::clone(&self.validity_change);
        self.board.subscribe(move |event| {
            if let GridEvent::ValidityChanged(validity) = event {
                change.set(Some(*validity));
            }
        });
    }

    pub fn take_validity_change(&self) -> Option<Validity> {
        self.validity_change.take()
    }

    pub fn move_cursor(&mut self, direction: Direction) {
        let next = self.cursor + direction.delta();
        if self.board.grid().contains(&next) {
            self.cursor = next;
        }
    }

    pub fn describe_placement(placement: Placement) -> Option<String> {
        match placement {
            Placement::Applied(_) | Placement::Unchanged => None,
            Placement::Rejected(RejectReason::CapacityExceeded) => {
                Some("Maximum number of filled cells reached".to_string())
            }
            Placement::Rejected(RejectReason::NoToolSelected) => {
                Some("No tool selected, action ignored".to_string())
            }
            Placement::Rejected(RejectReason::NotEditable) => {
                Some("Stop playing (P) to edit the level".to_string())
            }
        }
    }
}

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

fn cell_span(value: CellValue, selected: bool) -> Span<'static> {
    let (text, color) = match value {
        CellValue::Ground => (" ", Color::Reset),
        CellValue::Wall => ("#", Color::Gray),
        CellValue::Goal => (".", Color::Yellow),
        CellValue::Box => ("$", Color::LightRed),
        CellValue::Player => ("@", Color::Cyan),
        CellValue::BoxOnGoal => ("*", Color::Green),
        CellValue::PlayerOnGoal => ("+", Color::LightCyan),
    };
    let mut style = Style::default().fg(color);
    if selected {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Span::styled(text, style)
}

pub fn grid_lines(state: &EditorState) -> Vec<Line<'static>> {
    state
        .board
        .grid()
        .rows()
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            let spans: Vec<Span> = row
                .into_iter()
                .enumerate()
                .map(|(j, value)| {
                    let selected = state.board.mode() == BoardMode::Design
                        && state.cursor == Vec2::new(i as i32, j as i32);
                    cell_span(value, selected)
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn check_line(ok: bool, label: &str) -> Line<'static> {
    let (mark, color) = if ok { ("[x]", Color::Green) } else { ("[ ]", Color::Red) };
    Line::from(vec![
        Span::styled(mark, Style::default().fg(color)),
        Span::raw(format!(" {}", label)),
    ])
}

pub fn status_lines(state: &EditorState) -> Vec<Line<'static>> {
    let board = &state.board;
    let counts = board.grid().counts();
    let rules = board.rules();
    let tool = state.tool.selected().map(|t| t.name()).unwrap_or("none");

    let mut lines = vec![
        Line::from(format!("Mode: {:?}", board.mode())),
        Line::from(format!("Tool: {}", tool)),
        Line::from(format!(
            "Filled: {}/{}{}",
            counts.filled,
            board.max_filled_cells(),
            if board.is_full() { " (full)" } else { "" }
        )),
        Line::from(format!("Boxes: {}  Goals: {}", counts.boxes, counts.goals)),
        Line::from(format!("Players: {}", counts.players)),
        Line::from(""),
        check_line(rules.exactly_one_player, "exactly one player"),
        check_line(rules.has_box, "at least one box"),
        check_line(rules.has_goal, "at least one goal"),
        check_line(rules.box_goal_parity, "boxes = goals"),
    ];
    if board.mode() == BoardMode::Play && board.is_won() {
        lines.push(Line::from(""));
        lines.push(Line::styled("Solved!", Style::default().fg(Color::Green)));
    }
    if let Some(message) = &state.message {
        lines.push(Line::from(""));
        lines.push(Line::styled(message.clone(), Style::default().fg(Color::Yellow)));
    }
    lines
}

pub fn render_editor(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &EditorState,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let rows = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());
        let columns = Layout::default()
            .direction(LayoutDirection::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(32)])
            .split(rows[0]);

        let grid_paragraph = Paragraph::new(grid_lines(state))
            .block(Block::default().borders(Borders::ALL).title("Sokoban"))
            .alignment(Alignment::Center);
        f.render_widget(grid_paragraph, columns[0]);

        let status_paragraph = Paragraph::new(status_lines(state))
            .block(Block::default().borders(Borders::ALL).title("Level"));
        f.render_widget(status_paragraph, columns[1]);

        let instructions = match state.board.mode() {
            BoardMode::Design => {
                "Arrows move | 1-4 tool | Space place | X remove | Shift+S save | P play | Q quit"
            }
            BoardMode::Play => "WASD or Arrow keys to move | P back to editing | Q quit",
        };
        let instruction_paragraph = Paragraph::new(instructions)
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, rows[1]);
    })?;
    Ok(())
}

pub enum ConsoleInput {
    Move(Direction),
    SelectTool(Tool),
    Primary,
    Secondary,
    Save,
    TogglePlay,
    Quit,
    Timeout,
    Unknown,
}

pub fn handle_input() -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(std::time::Duration::from_millis(50))? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
                KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
                    ConsoleInput::Move(Direction::Up)
                }
                KeyCode::Char('s') | KeyCode::Down => ConsoleInput::Move(Direction::Down),
                KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                    ConsoleInput::Move(Direction::Left)
                }
                KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                    ConsoleInput::Move(Direction::Right)
                }
                KeyCode::Char('1') => ConsoleInput::SelectTool(Tool::Wall),
                KeyCode::Char('2') => ConsoleInput::SelectTool(Tool::Goal),
                KeyCode::Char('3') => ConsoleInput::SelectTool(Tool::Box),
                KeyCode::Char('4') => ConsoleInput::SelectTool(Tool::Player),
                KeyCode::Char(' ') | KeyCode::Enter => ConsoleInput::Primary,
                KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => {
                    ConsoleInput::Secondary
                }
                KeyCode::Char('S') => ConsoleInput::Save,
                KeyCode::Char('p') | KeyCode::Char('P') => ConsoleInput::TogglePlay,
                _ => ConsoleInput::Unknown,
            });
        }
    }
    Ok(ConsoleInput::Timeout)
}
