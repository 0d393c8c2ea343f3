use log::info;
use std::ops::Index;

/// Non-negative remainder of `value` modulo `modulus`, for wrapping a
/// coordinate around one axis of the torus.
pub fn wrap(value: i64, modulus: u32) -> u32 {
    assert!(modulus > 0, "Cannot wrap around an empty axis");
    value.rem_euclid(modulus as i64) as u32
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GridSize {
    pub width: u32,
    pub height: u32,
}

impl GridSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn num_cells(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// A single tile of the board. `alive` is the state everyone sees;
/// `pending_alive` is where a step writes the next generation before commit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub(crate) alive: bool,
    pub(crate) pending_alive: bool,
}

impl Cell {
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    fn spawn(&mut self) {
        self.alive = true;
        self.pending_alive = true;
    }

    pub(crate) fn commit(&mut self) {
        self.alive = self.pending_alive;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Loc {
    pub row: u32,
    pub col: u32,
}

impl Loc {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    pub fn grid_index(&self, width: u32, height: u32) -> Option<usize> {
        if self.row < height && self.col < width {
            Some(self.row as usize * width as usize + self.col as usize)
        } else {
            None
        }
    }
}

/// Row-major toroidal board of cells.
#[derive(Clone, Debug, Default)]
pub struct Grid {
    size: GridSize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            cells: vec![Cell::default(); size.num_cells()],
        }
    }

    /// Throws away every cell and rebuilds the board dead at the new size.
    pub fn resize(&mut self, size: GridSize) {
        info!("Rebuilding grid at {}x{}", size.width, size.height);
        *self = Self::new(size);
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn width(&self) -> u32 {
        self.size.width
    }

    pub fn height(&self) -> u32 {
        self.size.height
    }

    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells_iter(&self) -> impl DoubleEndedIterator<Item = &Cell> + Clone {
        self.cells.iter()
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    pub fn index_of(&self, loc: Loc) -> Option<usize> {
        loc.grid_index(self.width(), self.height())
    }

    pub fn loc_of(&self, index: usize) -> Loc {
        assert!(
            index < self.num_cells(),
            "Cell index {index} out of bounds for {} cells",
            self.num_cells()
        );
        let width = self.width() as usize;
        Loc::new((index / width) as u32, (index % width) as u32)
    }

    pub fn cell(&self, loc: Loc) -> Option<&Cell> {
        self.index_of(loc).map(|index| &self.cells[index])
    }

    /// The cell at column `x`, row `y`, if it is on the board.
    pub fn cell_at(&self, x: u32, y: u32) -> Option<&Cell> {
        self.cell(Loc::new(y, x))
    }

    pub fn is_alive(&self, loc: Loc) -> bool {
        self.cell(loc).is_some_and(Cell::is_alive)
    }

    /// Brings the cell at `loc` to life right away, without waiting for a
    /// step. Returns false if `loc` is off the board.
    pub fn spawn(&mut self, loc: Loc) -> bool {
        match self.index_of(loc) {
            Some(index) => {
                self.cells[index].spawn();
                true
            }
            None => false,
        }
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.alive).count()
    }

    pub fn live_cells(&self) -> impl Iterator<Item = Loc> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.alive)
            .map(|(index, _)| self.loc_of(index))
    }

    /// Linear indices of the eight Moore neighbors of cell `index`. Rows and
    /// columns wrap independently, so an edge cell's sideways neighbors stay
    /// in its own row.
    pub fn neighbor_indices(&self, index: usize) -> [usize; 8] {
        let center = self.loc_of(index);
        let (row_above, row_below) = Self::adjacent_indexes(center.row, self.height());
        let (col_left, col_right) = Self::adjacent_indexes(center.col, self.width());
        let rows = [row_above, center.row, row_below];
        let cols = [col_left, center.col, col_right];

        let width = self.width() as usize;
        let mut result = [0; 8];
        let mut next = 0;
        for (i, &row) in rows.iter().enumerate() {
            for (j, &col) in cols.iter().enumerate() {
                if i == 1 && j == 1 {
                    continue;
                }
                result[next] = row as usize * width + col as usize;
                next += 1;
            }
        }
        result
    }

    pub fn num_live_neighbors(&self, index: usize) -> u32 {
        self.neighbor_indices(index)
            .iter()
            .filter(|&&neighbor| self.cells[neighbor].alive)
            .count() as u32
    }

    fn adjacent_indexes(cell_index: u32, max: u32) -> (u32, u32) {
        (
            wrap(cell_index as i64 - 1, max),
            wrap(cell_index as i64 + 1, max),
        )
    }
}

impl Index<Loc> for Grid {
    type Output = Cell;

    fn index(&self, loc: Loc) -> &Self::Output {
        self.cell(loc)
            .unwrap_or_else(|| panic!("Index indices {}, {} out of bounds", loc.row, loc.col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn xy(x: u32, y: u32) -> Loc {
        Loc::new(y, x)
    }

    #[test]
    fn wrap_is_non_negative() {
        assert_eq!(wrap(-1, 5), 4);
        assert_eq!(wrap(5, 5), 0);
        assert_eq!(wrap(-6, 5), 4);
        assert_eq!(wrap(3, 5), 3);
    }

    #[test]
    fn index_maps_row_major() {
        let grid = Grid::new(GridSize::new(4, 3));
        assert_eq!(grid.num_cells(), 12);
        assert_eq!(grid.index_of(xy(3, 0)), Some(3));
        assert_eq!(grid.index_of(xy(0, 1)), Some(4));
        assert_eq!(grid.loc_of(7), xy(3, 1));
        assert_eq!(grid.index_of(xy(4, 0)), None);
        assert_eq!(grid.index_of(xy(0, 3)), None);
    }

    #[test]
    fn corner_of_3x3_neighbors_every_other_cell() {
        let grid = Grid::new(GridSize::new(3, 3));
        let origin = grid.index_of(xy(0, 0)).unwrap();
        let neighbors: HashSet<Loc> = grid
            .neighbor_indices(origin)
            .iter()
            .map(|&index| grid.loc_of(index))
            .collect();

        let expected: HashSet<Loc> = [
            xy(2, 2),
            xy(2, 0),
            xy(0, 2),
            xy(1, 0),
            xy(0, 1),
            xy(1, 1),
            xy(2, 1),
            xy(1, 2),
        ]
        .into_iter()
        .collect();
        assert_eq!(neighbors, expected);
    }

    #[test]
    fn row_edge_wraps_within_its_own_row() {
        let grid = Grid::new(GridSize::new(5, 4));
        let right_edge = grid.index_of(xy(4, 2)).unwrap();
        let neighbors: HashSet<Loc> = grid
            .neighbor_indices(right_edge)
            .iter()
            .map(|&index| grid.loc_of(index))
            .collect();

        let expected: HashSet<Loc> = [
            xy(3, 1),
            xy(4, 1),
            xy(0, 1),
            xy(3, 2),
            xy(0, 2),
            xy(3, 3),
            xy(4, 3),
            xy(0, 3),
        ]
        .into_iter()
        .collect();
        assert_eq!(neighbors, expected);
    }

    #[test]
    fn spawn_is_immediately_visible() {
        let mut grid = Grid::new(GridSize::new(4, 4));
        assert!(grid.spawn(xy(1, 2)));
        assert!(grid.is_alive(xy(1, 2)));
        assert!(grid[xy(1, 2)].pending_alive);

        assert!(grid.spawn(xy(1, 2)));
        assert_eq!(grid.population(), 1);
    }

    #[test]
    fn spawn_off_the_board_is_ignored() {
        let mut grid = Grid::new(GridSize::new(4, 4));
        assert!(!grid.spawn(xy(4, 0)));
        assert_eq!(grid.population(), 0);
        assert!(grid.cell_at(9, 9).is_none());
    }

    #[test]
    fn resize_wipes_state() {
        let mut grid = Grid::new(GridSize::new(4, 4));
        grid.spawn(xy(0, 0));
        grid.spawn(xy(3, 3));

        grid.resize(GridSize::new(4, 4));
        assert_eq!(grid.population(), 0);
        assert!(!grid.is_alive(xy(0, 0)));

        grid.spawn(xy(1, 1));
        grid.resize(GridSize::new(6, 2));
        assert_eq!(grid.num_cells(), 12);
        assert_eq!(grid.live_cells().count(), 0);
    }

    #[test]
    fn empty_grid_has_no_cells() {
        let grid = Grid::new(GridSize::new(0, 0));
        assert!(grid.is_empty());
        assert_eq!(grid.population(), 0);
        assert!(grid.cell_at(0, 0).is_none());
    }
}
