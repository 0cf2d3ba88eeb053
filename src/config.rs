use crate::GameError;

/// Parameters for a new field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldConfig {
    pub width: u32,
    pub height: u32,
    pub mines: u32,
    /// Let a chord flag every concealed neighbour when they must all be mines.
    pub autoflag: bool,
    /// Fixed RNG seed for reproducible mine layouts; entropy when `None`.
    pub seed: Option<u64>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: 8,
            height: 8,
            mines: 10,
            autoflag: false,
            seed: None,
        }
    }
}

impl FieldConfig {
    pub fn new(width: u32, height: u32, mines: u32) -> Self {
        Self {
            width,
            height,
            mines,
            ..Self::default()
        }
    }

    pub fn with_autoflag(mut self, autoflag: bool) -> Self {
        self.autoflag = autoflag;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Largest mine count that still leaves room for a mine-free first click
    /// wherever it lands. The exclusion zone is at most 3x3, smaller on thin grids.
    pub fn max_mines(&self) -> Result<u32, GameError> {
        let cells = self.cell_count()?;
        let zone = self.width.min(3) * self.height.min(3);
        Ok(cells - zone)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        let max = self.max_mines()?;
        if self.mines > max {
            return Err(GameError::TooManyMines {
                width: self.width,
                height: self.height,
                mines: self.mines,
                max,
            });
        }
        Ok(())
    }

    fn cell_count(&self) -> Result<u32, GameError> {
        let invalid = GameError::InvalidDimensions {
            width: self.width,
            height: self.height,
        };
        if self.width == 0
            || self.height == 0
            || self.width > i32::MAX as u32
            || self.height > i32::MAX as u32
        {
            return Err(invalid);
        }
        self.width.checked_mul(self.height).ok_or(invalid)
    }
}
