// Terminal Sokoban level editor.
// Tiles: '#' wall, '@' player, '$' box, '.' goal, '*' box on goal, '+' player on goal, ' ' ground.

use clap::{Parser, Subcommand};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use sokoban_editor::config::EditorConfig;
use sokoban_editor::console_interface::ConsoleInput::*;
use sokoban_editor::console_interface::{
    EditorState, cleanup_terminal, handle_input, render_editor, setup_terminal,
};
use sokoban_editor::core::{Board, BoardMode, MoveOutcome, Validity};
use sokoban_editor::logging::init_logging;
use std::io;
use std::path::PathBuf;
use tracing::warn;

#[derive(Parser)]
#[command(name = "sokoban_editor", version, about = "Design and play Sokoban levels in the terminal")]
struct Cli {
    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the level editor
    Edit {
        /// Level file to start from; also the default save target
        #[arg(long)]
        open: Option<PathBuf>,
        #[arg(long)]
        width: Option<usize>,
        #[arg(long)]
        height: Option<usize>,
        #[arg(long)]
        max_filled: Option<usize>,
    },
    /// Play a level file
    Play { file: PathBuf },
    /// Print counts and rule results for a level file
    Check { file: PathBuf },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => EditorConfig::load(path)?,
        None => EditorConfig::default(),
    };

    let command = cli.command.unwrap_or(Command::Edit {
        open: None,
        width: None,
        height: None,
        max_filled: None,
    });

    match command {
        Command::Check { file } => run_check(&config, file),
        Command::Play { file } => {
            init_logging(&config.log_file)?;
            let mut board = Board::from_config(&config);
            board.open_file(&file)?;
            board.start_play()?;
            run_session(EditorState::new(board, None))
        }
        Command::Edit {
            open,
            width,
            height,
            max_filled,
        } => {
            config.width = width.unwrap_or(config.width);
            config.height = height.unwrap_or(config.height);
            config.max_filled_cells = max_filled.or(config.max_filled_cells);
            config.validate()?;
            init_logging(&config.log_file)?;

            let mut board = Board::from_config(&config);
            // a missing file is a new level to be saved there
            if let Some(path) = open.as_ref().filter(|path| path.exists()) {
                board.open_file(path)?;
            }
            run_session(EditorState::new(board, open))
        }
    }
}

fn run_check(config: &EditorConfig, file: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let mut board = Board::from_config(config);
    let grid = board.open_file(&file)?;
    let counts = grid.counts();
    let rules = grid.rules();
    println!("{}: {}x{}", file.display(), grid.height(), grid.width());
    println!(
        "filled {}, boxes {}, goals {}, players {}",
        counts.filled, counts.boxes, counts.goals, counts.players
    );
    if rules.rules_ok() {
        println!("level is valid");
        Ok(())
    } else {
        for violation in rules.violations() {
            println!("  - {}", violation);
        }
        Err("level is not valid".into())
    }
}

fn run_session(mut state: EditorState) -> Result<(), Box<dyn std::error::Error>> {
    let mut terminal = setup_terminal()?;
    let result = run_interactive(&mut state, &mut terminal);
    cleanup_terminal()?;
    result
}

fn run_interactive(
    state: &mut EditorState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    render_editor(terminal, state)?;

    loop {
        match handle_input()? {
            Quit => break,
            Timeout | Unknown => continue,
            Move(direction) => match state.board.mode() {
                BoardMode::Design => state.move_cursor(direction),
                BoardMode::Play => {
                    let outcome = state.board.move_player(direction)?;
                    state.message = match outcome {
                        MoveOutcome::Blocked(reason) => Some(format!("Blocked: {:?}", reason)),
                        _ => None,
                    };
                }
            },
            SelectTool(tool) => {
                state.tool.select(tool);
                state.message = None;
            }
            Primary => {
                let placement = state.board.play(state.cursor, &state.tool)?;
                state.message = EditorState::describe_placement(placement);
            }
            Secondary => {
                let placement = state.board.remove(state.cursor)?;
                state.message = EditorState::describe_placement(placement);
            }
            Save => {
                state.message = Some(match &state.save_path {
                    None => "Start with --open FILE to choose a save target".to_string(),
                    Some(path) => match state.board.save_file(path) {
                        Ok(()) => format!("Saved to {}", path.display()),
                        Err(err) => {
                            warn!(%err, "save failed");
                            format!("Not saved: {}", err)
                        }
                    },
                });
            }
            TogglePlay => {
                let result = match state.board.mode() {
                    BoardMode::Design => state.board.start_play(),
                    BoardMode::Play => state.board.stop_play(),
                };
                state.message = result.err().map(|err| err.to_string());
            }
        }

        if let Some(validity) = state.take_validity_change() {
            if state.message.is_none() {
                state.message = Some(match validity {
                    Validity::Valid => "Level is valid".to_string(),
                    Validity::Invalid => "Level is no longer valid".to_string(),
                });
            }
        }
        render_editor(terminal, state)?;
    }

    Ok(())
}
