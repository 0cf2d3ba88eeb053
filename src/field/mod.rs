mod flags;
mod mines;
mod reveal;

use crate::{Cell, FieldConfig, GameError, Grid, Position};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// The state of one game: cells plus the counters the win/loss checks read.
///
/// Mines are placed lazily by the first [`Field::reveal`], away from the
/// clicked square and its neighbours.
#[derive(Debug, Clone)]
pub struct Field {
    grid: Grid<Cell>,
    mine_count: u32,
    revealed_count: u32,
    flagged_count: u32,
    mines_placed: bool,
    exploded: bool,
    autoflag: bool,
    rng: StdRng,
}

impl Field {
    pub fn new(width: u32, height: u32, mine_count: u32) -> Result<Self, GameError> {
        Self::from_config(&FieldConfig::new(width, height, mine_count))
    }

    pub fn from_config(config: &FieldConfig) -> Result<Self, GameError> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            grid: Grid::new(config.width, config.height),
            mine_count: config.mines,
            revealed_count: 0,
            flagged_count: 0,
            mines_placed: false,
            exploded: false,
            autoflag: config.autoflag,
            rng,
        })
    }

    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    pub fn mine_count(&self) -> u32 {
        self.mine_count
    }

    pub fn revealed_count(&self) -> u32 {
        self.revealed_count
    }

    pub fn flagged_count(&self) -> u32 {
        self.flagged_count
    }

    /// Mines not yet accounted for by flags; negative when over-flagged.
    pub fn remaining_mines(&self) -> i64 {
        i64::from(self.mine_count) - i64::from(self.flagged_count)
    }

    pub fn mines_placed(&self) -> bool {
        self.mines_placed
    }

    pub fn autoflag(&self) -> bool {
        self.autoflag
    }

    pub fn set_autoflag(&mut self, autoflag: bool) {
        self.autoflag = autoflag;
    }

    pub fn is_valid(&self, pos: Position) -> bool {
        self.grid.is_valid(pos)
    }

    /// Panics if `pos` is out of bounds; check with [`Field::is_valid`] first.
    pub fn at(&self, pos: Position) -> &Cell {
        self.grid.at(pos)
    }

    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        self.grid.get(pos)
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> {
        self.grid.positions()
    }

    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        self.grid.neighbors(pos)
    }

    pub fn is_revealed(&self, pos: Position) -> bool {
        self.at(pos).revealed
    }

    pub fn has_mine(&self, pos: Position) -> bool {
        self.at(pos).has_mine
    }

    pub fn adjacent_mines(&self, pos: Position) -> u8 {
        self.at(pos).adjacent_mines
    }

    /// Every safe square has been revealed.
    pub fn is_complete(&self) -> bool {
        self.revealed_count == self.safe_cells()
    }

    /// A mine has been revealed. Never resets.
    pub fn exploded(&self) -> bool {
        self.exploded
    }

    pub fn is_won(&self) -> bool {
        self.is_complete() && !self.exploded
    }

    fn safe_cells(&self) -> u32 {
        self.grid.len() as u32 - self.mine_count
    }
}
