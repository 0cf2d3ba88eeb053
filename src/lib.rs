pub mod cell;
pub mod config;
pub mod error;
pub mod field;
pub mod game;
pub mod grid;
pub mod position;

pub use cell::{Cell, FlagState};
pub use config::FieldConfig;
pub use error::GameError;
pub use field::Field;
pub use game::{Action, Game, GameState};
pub use grid::Grid;
pub use position::{Position, NEIGHBOR_OFFSETS};
