use crate::grid::{Grid, GridSize};

/// Conway's B3/S23 rule.
pub fn next_alive(alive: bool, live_neighbors: u32) -> bool {
    if alive {
        (2..=3).contains(&live_neighbors)
    } else {
        live_neighbors == 3
    }
}

#[derive(Clone, Debug, Default)]
pub struct CellularAutomaton {
    grid: Grid,
    generation: u64,
}

impl CellularAutomaton {
    pub fn new(size: GridSize) -> Self {
        Self::from_grid(Grid::new(size))
    }

    pub fn from_grid(grid: Grid) -> Self {
        Self {
            grid,
            generation: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advances the whole board by one generation.
    pub fn step(&mut self) {
        let num_cells = self.grid.num_cells();
        self.step_in_order(0..num_cells);
    }

    /// Evaluates cells in the given order, then commits them all. Every
    /// index must appear exactly once for the step to cover the board.
    pub(crate) fn step_in_order<I>(&mut self, order: I)
    where
        I: IntoIterator<Item = usize>,
    {
        for index in order {
            let live_neighbors = self.grid.num_live_neighbors(index);
            let cell = &mut self.grid.cells_mut()[index];
            cell.pending_alive = next_alive(cell.alive, live_neighbors);
        }
        self.grid.cells_mut().iter_mut().for_each(|cell| cell.commit());
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Loc;
    use crate::random::Random;

    fn xy(x: u32, y: u32) -> Loc {
        Loc::new(y, x)
    }

    fn seeded(size: GridSize, locs: &[Loc]) -> CellularAutomaton {
        let mut automaton = CellularAutomaton::new(size);
        for &loc in locs {
            assert!(automaton.grid_mut().spawn(loc));
        }
        automaton
    }

    fn live_set(automaton: &CellularAutomaton) -> Vec<Loc> {
        let mut result: Vec<Loc> = automaton.grid().live_cells().collect();
        result.sort_by_key(|loc| (loc.row, loc.col));
        result
    }

    #[test]
    fn rule_table() {
        for neighbors in 0..=8 {
            assert_eq!(next_alive(true, neighbors), neighbors == 2 || neighbors == 3);
            assert_eq!(next_alive(false, neighbors), neighbors == 3);
        }
    }

    #[test]
    fn every_cell_follows_the_rule() {
        let mut rand = Random::from_seed(7);
        let mut automaton = CellularAutomaton::new(GridSize::new(9, 7));
        for index in 0..automaton.grid().num_cells() {
            if rand.next_bool(0.4) {
                let loc = automaton.grid().loc_of(index);
                automaton.grid_mut().spawn(loc);
            }
        }

        let before = automaton.grid().clone();
        automaton.step();

        for index in 0..before.num_cells() {
            let loc = before.loc_of(index);
            let expected = next_alive(before.is_alive(loc), before.num_live_neighbors(index));
            assert_eq!(automaton.grid().is_alive(loc), expected, "at {loc:?}");
        }
    }

    #[test]
    fn commit_leaves_buffers_equal() {
        let mut automaton = seeded(GridSize::new(5, 5), &[xy(1, 2), xy(2, 2), xy(3, 2)]);
        automaton.step();
        assert!(
            automaton
                .grid()
                .cells_iter()
                .all(|cell| cell.alive == cell.pending_alive)
        );
    }

    #[test]
    fn blinker_oscillates() {
        let mut automaton = seeded(GridSize::new(5, 5), &[xy(1, 2), xy(2, 2), xy(3, 2)]);
        automaton.step();
        assert_eq!(live_set(&automaton), vec![xy(2, 1), xy(2, 2), xy(2, 3)]);
        automaton.step();
        assert_eq!(live_set(&automaton), vec![xy(1, 2), xy(2, 2), xy(3, 2)]);
        assert_eq!(automaton.generation(), 2);
    }

    #[test]
    fn result_does_not_depend_on_evaluation_order() {
        let mut rand = Random::from_seed(42);
        let mut forward = CellularAutomaton::new(GridSize::new(12, 10));
        for index in 0..forward.grid().num_cells() {
            if rand.next_bool(0.35) {
                let loc = forward.grid().loc_of(index);
                forward.grid_mut().spawn(loc);
            }
        }
        let mut reversed = forward.clone();
        let mut shuffled = forward.clone();

        let num_cells = forward.grid().num_cells();
        let mut order: Vec<usize> = (0..num_cells).collect();
        rand.shuffle(&mut order);

        for _ in 0..4 {
            forward.step();
            reversed.step_in_order((0..num_cells).rev());
            shuffled.step_in_order(order.iter().copied());
        }

        assert_eq!(live_set(&forward), live_set(&reversed));
        assert_eq!(live_set(&forward), live_set(&shuffled));
    }

    #[test]
    fn empty_grid_steps_as_no_op() {
        let mut automaton = CellularAutomaton::new(GridSize::new(0, 0));
        automaton.step();
        assert_eq!(automaton.grid().num_cells(), 0);
        assert_eq!(automaton.generation(), 1);
    }
}
