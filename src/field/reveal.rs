use super::Field;
use crate::{FlagState, Position};
use tracing::{info, instrument, trace};

impl Field {
    /// Reveals `pos`, flooding outwards through squares with no adjacent mines.
    ///
    /// Invalid positions, revealed squares and `Flagged` squares are left alone;
    /// `Maybe` squares are revealed. The first call also places the mines.
    #[instrument(level = "trace", skip(self))]
    pub fn reveal(&mut self, pos: Position) {
        if !self.is_valid(pos) {
            return;
        }

        self.place_mines(pos);

        let cell = self.grid.at(pos);
        if cell.revealed || cell.flag == FlagState::Flagged {
            return;
        }

        self.flood_reveal(pos);

        if self.grid.at(pos).has_mine {
            self.exploded = true;
            info!(?pos, "mine revealed");
            return;
        }

        if self.is_won() {
            info!(revealed = self.revealed_count, "field cleared");
            self.flag_all_mines();
        }
    }

    fn flood_reveal(&mut self, start: Position) {
        let mut pending = vec![start];

        while let Some(pos) = pending.pop() {
            let cell = self.grid.at_mut(pos);
            if cell.revealed {
                continue;
            }

            cell.revealed = true;
            if cell.flag == FlagState::Flagged {
                self.flagged_count -= 1;
            }
            cell.flag = FlagState::None;
            let cascades = !cell.has_mine && cell.adjacent_mines == 0;
            self.revealed_count += 1;

            if cascades {
                pending.extend(
                    self.grid
                        .neighbors(pos)
                        .filter(|&n| !self.grid.at(n).revealed),
                );
            }
        }
    }

    fn flag_all_mines(&mut self) {
        let mines: Vec<Position> = self
            .positions()
            .filter(|&p| self.grid.at(p).has_mine)
            .collect();
        for pos in mines {
            self.set_flag(pos, FlagState::Flagged);
        }
    }

    /// Chords on a revealed number.
    ///
    /// With as many flags around it as its number, reveals every unflagged
    /// neighbour. Otherwise, with autoflag on and exactly as many concealed
    /// neighbours as its number, flags them all.
    #[instrument(level = "trace", skip(self))]
    pub fn multi_release(&mut self, pos: Position) {
        if !self.is_valid(pos) {
            return;
        }
        let cell = self.grid.at(pos);
        if !cell.revealed || cell.flag == FlagState::Flagged {
            return;
        }

        let mines = u32::from(cell.adjacent_mines);
        let neighbors: Vec<Position> = self.grid.neighbors(pos).collect();
        let flagged = neighbors
            .iter()
            .filter(|&&n| self.grid.at(n).flag == FlagState::Flagged)
            .count() as u32;
        let unknown = neighbors
            .iter()
            .filter(|&&n| !self.grid.at(n).revealed)
            .count() as u32;

        if flagged == mines {
            trace!(?pos, flagged, "chord clear");
            for n in neighbors {
                if self.grid.at(n).flag != FlagState::Flagged {
                    self.reveal(n);
                }
            }
        } else if self.autoflag && unknown == mines {
            trace!(?pos, unknown, "chord flag");
            for n in neighbors {
                self.set_flag(n, FlagState::Flagged);
            }
        }
    }
}
