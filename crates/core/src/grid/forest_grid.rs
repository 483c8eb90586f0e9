//! 2D forest grid with Moore-neighbourhood lookups
//!
//! Cells are stored row-major (`y * width + x`). Dimensions are fixed at
//! construction; every coordinate in `[0, width) x [0, height)` owns exactly one
//! [`Cell`].

use crate::core_types::cell::{Cell, CellState};

/// Moore neighbourhood offsets, row by row from the top-left
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Fixed-size rectangular grid of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForestGrid {
    width: usize,
    height: usize,
    /// Grid cells in row-major order: [y * width + x]
    cells: Vec<Cell>,
}

impl ForestGrid {
    /// Create a grid filled with vegetation
    ///
    /// Callers validate that both dimensions are positive and that their
    /// product does not overflow.
    pub(crate) fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::VEGETATION; width * height],
        }
    }

    /// Rebuild a grid from raw row-major cells
    ///
    /// Returns `None` when `cells.len() != width * height`.
    pub(crate) fn from_cells(width: usize, height: usize, cells: Vec<Cell>) -> Option<Self> {
        (cells.len() == width * height).then_some(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false for a constructed grid
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get cell index from (x, y)
    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// (x, y) of a cell index
    #[inline]
    pub fn coords(&self, index: usize) -> (usize, usize) {
        (index % self.width, index / self.width)
    }

    /// Map signed coordinates to an index, `None` when outside the grid
    pub fn checked_index(&self, x: isize, y: isize) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.width && y < self.height).then(|| self.index(x, y))
    }

    /// Get cell at grid indices (bounds-checked)
    pub fn cell_at(&self, x: usize, y: usize) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    /// Get mutable cell at grid indices (bounds-checked)
    pub(crate) fn cell_at_mut(&mut self, x: usize, y: usize) -> Option<&mut Cell> {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    /// All cells, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Indices of the up-to-8 in-bounds neighbours of `(x, y)`
    pub fn neighbors(&self, x: usize, y: usize) -> impl Iterator<Item = usize> + '_ {
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(dx, dy)| {
            let nx = x.checked_add_signed(dx)?;
            let ny = y.checked_add_signed(dy)?;
            (nx < self.width && ny < self.height).then(|| self.index(nx, ny))
        })
    }

    /// Whether any neighbour of `(x, y)` is burning or hot-scorched
    pub fn exposed_to_fire(&self, x: usize, y: usize) -> bool {
        self.neighbors(x, y)
            .any(|idx| self.cells[idx].state.is_fire_source())
    }

    /// Number of cells in `state`
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|c| c.state == state).count()
    }

    /// Reset every cell to fresh vegetation
    pub(crate) fn fill_vegetation(&mut self) {
        self.cells.fill(Cell::VEGETATION);
    }
}
