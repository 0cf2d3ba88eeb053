#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FlagState {
    #[default]
    None,
    Flagged,
    Maybe,
}

impl FlagState {
    /// The right-click cycle: none, flag, question mark, back to none.
    pub fn next(self) -> Self {
        match self {
            FlagState::None => FlagState::Flagged,
            FlagState::Flagged => FlagState::Maybe,
            FlagState::Maybe => FlagState::None,
        }
    }
}

/// One square of the field.
///
/// Mine status and adjacency are frozen once mines are placed; `revealed` only
/// ever goes from false to true, and a revealed cell never carries a flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    pub(crate) has_mine: bool,
    pub(crate) revealed: bool,
    pub(crate) flag: FlagState,
    pub(crate) adjacent_mines: u8,
}

impl Cell {
    pub fn has_mine(&self) -> bool {
        self.has_mine
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn flag(&self) -> FlagState {
        self.flag
    }

    pub fn is_flagged(&self) -> bool {
        self.flag == FlagState::Flagged
    }

    /// Mines among the up-to-eight neighbours.
    pub fn adjacent_mines(&self) -> u8 {
        self.adjacent_mines
    }
}
