use super::Field;
use crate::{FlagState, Position};

impl Field {
    /// Sets the flag on a concealed square, keeping the flag count in step.
    /// Revealed squares and invalid positions are ignored.
    pub fn set_flag(&mut self, pos: Position, flag: FlagState) {
        if !self.is_valid(pos) {
            return;
        }
        let cell = self.grid.at_mut(pos);
        if cell.revealed || cell.flag == flag {
            return;
        }

        if flag == FlagState::Flagged {
            self.flagged_count += 1;
        } else if cell.flag == FlagState::Flagged {
            self.flagged_count -= 1;
        }
        cell.flag = flag;
    }

    /// Advances the flag along None, Flagged, Maybe.
    pub fn cycle_flag(&mut self, pos: Position) {
        if let Some(cell) = self.cell(pos) {
            let next = cell.flag.next();
            self.set_flag(pos, next);
        }
    }

    pub fn get_flag(&self, pos: Position) -> FlagState {
        self.at(pos).flag
    }

    /// True when a revealed square has more flagged neighbours than real mines
    /// around it, i.e. at least one of those flags is wrong.
    pub fn has_flag_warning(&self, pos: Position) -> bool {
        match self.cell(pos) {
            Some(cell) if cell.revealed => {}
            _ => return false,
        }

        let (mines, flags) = self
            .grid
            .neighbors(pos)
            .map(|n| self.grid.at(n))
            .fold((0, 0), |(mines, flags), cell| {
                (
                    mines + usize::from(cell.has_mine),
                    flags + usize::from(cell.flag == FlagState::Flagged),
                )
            });
        flags > mines
    }
}
