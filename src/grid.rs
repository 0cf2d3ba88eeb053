use crate::Position;
use itertools::iproduct;
use ndarray::Array2;

/// Dense row-major storage: `(x, y)` lives at row `y`, column `x` of one contiguous buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    cells: Array2<T>,
    width: u32,
    height: u32,
}

impl<T: Clone + Default> Grid<T> {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            cells: Array2::default((height as usize, width as usize)),
            width,
            height,
        }
    }
}

impl<T> Grid<T> {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn is_valid(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width as i32 && pos.y >= 0 && pos.y < self.height as i32
    }

    /// Linear offset of `pos` in the row-major buffer.
    pub fn index(&self, pos: Position) -> usize {
        self.checked(pos);
        pos.y as usize * self.width as usize + pos.x as usize
    }

    /// Panics if `pos` is outside the grid.
    pub fn at(&self, pos: Position) -> &T {
        self.checked(pos);
        &self.cells[[pos.y as usize, pos.x as usize]]
    }

    /// Panics if `pos` is outside the grid.
    pub fn at_mut(&mut self, pos: Position) -> &mut T {
        self.checked(pos);
        &mut self.cells[[pos.y as usize, pos.x as usize]]
    }

    pub fn get(&self, pos: Position) -> Option<&T> {
        self.is_valid(pos)
            .then(|| &self.cells[[pos.y as usize, pos.x as usize]])
    }

    /// Every position, row by row.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        iproduct!(0..self.height as i32, 0..self.width as i32).map(|(y, x)| Position::new(x, y))
    }

    /// The in-bounds neighbours of `pos`, in offset-table order.
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        pos.neighbors().filter(move |p| self.is_valid(*p))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }

    fn checked(&self, pos: Position) {
        assert!(
            self.is_valid(pos),
            "position {:?} outside {}x{} grid",
            pos,
            self.width,
            self.height
        );
    }
}
