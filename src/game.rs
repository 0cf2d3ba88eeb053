use crate::{Field, FieldConfig, FlagState, GameError, Position};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Reveal,
    CycleFlag,
    SetFlag(FlagState),
    Chord,
}

/// A single play session: a [`Field`] plus the checks a player-facing front end needs.
///
/// Unlike the field itself, which quietly ignores bad coordinates, a game rejects
/// them, and it refuses any action once the game is over.
#[derive(Debug, Clone)]
pub struct Game {
    field: Field,
}

impl Game {
    pub fn new(width: u32, height: u32, mines_count: u32) -> Result<Self, GameError> {
        Ok(Self {
            field: Field::new(width, height, mines_count)?,
        })
    }

    pub fn from_config(config: &FieldConfig) -> Result<Self, GameError> {
        Ok(Self {
            field: Field::from_config(config)?,
        })
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn perform_action(&mut self, pos: Position, action: Action) -> Result<(), GameError> {
        if self.state() != GameState::Playing {
            warn!(?pos, ?action, "action after game over");
            return Err(GameError::InvalidGameState);
        }
        if !self.field.is_valid(pos) {
            warn!(?pos, ?action, "action out of bounds");
            return Err(GameError::OutOfBounds(pos));
        }

        match action {
            Action::Reveal => self.field.reveal(pos),
            Action::CycleFlag => self.field.cycle_flag(pos),
            Action::SetFlag(flag) => self.field.set_flag(pos, flag),
            Action::Chord => self.field.multi_release(pos),
        }
        Ok(())
    }

    pub fn state(&self) -> GameState {
        if self.field.exploded() {
            GameState::Lost
        } else if self.field.is_complete() {
            GameState::Won
        } else {
            GameState::Playing
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.field.dimensions()
    }
}
