use minefield::{Action, Field, FieldConfig, FlagState, Game, GameError, GameState, Position};
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    match run_game() {
        Ok(_) => println!("Thanks for playing!"),
        Err(e) => eprintln!("Game error: {}", e),
    }
}

fn parse_config() -> FieldConfig {
    let mut config = FieldConfig::default();
    let mut numbers = Vec::new();
    for arg in std::env::args().skip(1) {
        if arg == "--autoflag" {
            config.autoflag = true;
        } else if let Ok(n) = arg.parse::<u32>() {
            numbers.push(n);
        } else {
            eprintln!("Ignoring argument {:?}", arg);
        }
    }
    if let &[width, height, mines] = numbers.as_slice() {
        config.width = width;
        config.height = height;
        config.mines = mines;
    } else if !numbers.is_empty() {
        eprintln!(
            "Expected WIDTH HEIGHT MINES, using {}x{} with {} mines",
            config.width, config.height, config.mines
        );
    }
    config
}

fn run_game() -> Result<(), GameError> {
    let mut game = Game::from_config(&parse_config())?;

    while game.state() == GameState::Playing {
        print_board(game.field(), false);

        match get_user_input() {
            Input::Quit => return Ok(()),
            Input::Invalid => continue,
            Input::Move(pos, action) => {
                if let Err(e) = game.perform_action(pos, action) {
                    println!("Error: {}", e);
                }
            }
        }
    }

    print_board(game.field(), true);
    match game.state() {
        GameState::Won => println!("Congratulations! You won!"),
        GameState::Lost => println!("Game Over!"),
        GameState::Playing => unreachable!(),
    }

    Ok(())
}

fn print_board(field: &Field, show_mines: bool) {
    let (width, height) = field.dimensions();

    println!("Mines left: {}", field.remaining_mines());

    // Print column numbers
    print!("   ");
    for x in 0..width {
        print!("{:>2}", x);
    }
    println!();

    // Print rows
    for y in 0..height {
        print!("{:>2} ", y);
        for x in 0..width {
            let pos = Position::new(x as i32, y as i32);
            print!("{:>2}", cell_symbol(field, pos, show_mines));
        }
        println!();
    }
}

fn cell_symbol(field: &Field, pos: Position, show_mines: bool) -> String {
    let cell = field.at(pos);
    if cell.is_revealed() {
        return match cell.adjacent_mines() {
            _ if cell.has_mine() => "*".to_string(),
            _ if field.has_flag_warning(pos) => "!".to_string(),
            0 => "□".to_string(),
            n => n.to_string(),
        };
    }
    if show_mines && field.exploded() && cell.has_mine() && !cell.is_flagged() {
        return "*".to_string();
    }
    match cell.flag() {
        FlagState::None => "■",
        FlagState::Flagged => "⚑",
        FlagState::Maybe => "?",
    }
    .to_string()
}

enum Input {
    Move(Position, Action),
    Invalid,
    Quit,
}

fn get_user_input() -> Input {
    print!("Enter command (x y [r/f/c], q to quit): ");
    if io::stdout().flush().is_err() {
        return Input::Quit;
    }

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => return Input::Quit,
        Ok(_) => {}
    }

    let mut parts = input.split_whitespace();
    let first = match parts.next() {
        Some("q") => return Input::Quit,
        Some(first) => first,
        None => return Input::Invalid,
    };

    let coords = (first.parse(), parts.next().map(str::parse));
    let pos = match coords {
        (Ok(x), Some(Ok(y))) => Position::new(x, y),
        _ => {
            println!("Expected two coordinates");
            return Input::Invalid;
        }
    };

    let action = match parts.next().and_then(|s| s.chars().next()).unwrap_or('r') {
        'r' => Action::Reveal,
        'f' => Action::CycleFlag,
        'c' => Action::Chord,
        _ => {
            println!("Invalid action. Use 'r' to reveal, 'f' to flag or 'c' to chord");
            return Input::Invalid;
        }
    };

    Input::Move(pos, action)
}
