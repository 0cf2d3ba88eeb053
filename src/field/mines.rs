use super::Field;
use crate::Position;
use rand::Rng;
use tracing::{debug, instrument};

impl Field {
    /// Randomly places all mines, keeping `seed` and its neighbours clear.
    ///
    /// Only the first call does anything. The exclusion zone never exceeds the
    /// room left by the mine-count bound checked at construction, so the
    /// rejection loop always finds a free square.
    #[instrument(level = "trace", skip(self))]
    pub(crate) fn place_mines(&mut self, seed: Position) {
        if self.mines_placed {
            return;
        }

        let (width, height) = self.dimensions();
        let mut placed = 0;
        while placed < self.mine_count {
            let pos = Position::new(
                self.rng.gen_range(0..width) as i32,
                self.rng.gen_range(0..height) as i32,
            );

            if seed.is_within_one(pos) || self.grid.at(pos).has_mine {
                continue;
            }

            self.lay_mine(pos);
            placed += 1;
        }

        self.mines_placed = true;
        debug!(mines = placed, ?seed, "mines placed");
    }

    fn lay_mine(&mut self, pos: Position) {
        self.grid.at_mut(pos).has_mine = true;
        let neighbors: Vec<Position> = self.grid.neighbors(pos).collect();
        for neighbor in neighbors {
            self.grid.at_mut(neighbor).adjacent_mines += 1;
        }
    }

    /// A field whose mines already sit at `mines`, skipping random placement and
    /// the first-click exclusion zone.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn with_mine_layout(
        width: u32,
        height: u32,
        mines: &[Position],
    ) -> Result<Self, crate::GameError> {
        use crate::GameError;

        let mut field = Field::new(width, height, 0)?;
        for &pos in mines {
            if !field.is_valid(pos) {
                return Err(GameError::OutOfBounds(pos));
            }
            if field.grid.at(pos).has_mine {
                return Err(GameError::DuplicateMine(pos));
            }
            field.lay_mine(pos);
        }
        field.mine_count = mines.len() as u32;
        field.mines_placed = true;
        Ok(field)
    }
}
