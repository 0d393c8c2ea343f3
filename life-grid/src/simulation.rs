use crate::automaton::CellularAutomaton;
use crate::clock::{STEPS_PER_SECOND, SimulationClock};
use crate::grid::{Grid, GridSize, Loc};
use crate::random::Random;
use crate::tiles::TileGeometry;
use log::debug;
use std::collections::VecDeque;
use std::time::Duration;

pub const RANDOM_DENSITY: f64 = 0.3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationConfig {
    pub steps_per_second: f64,
    pub tile: TileGeometry,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            steps_per_second: STEPS_PER_SECOND,
            tile: TileGeometry::default(),
        }
    }
}

/// Requests from the outside world. They queue up between ticks and are
/// applied in order at the start of the next one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    SpawnAtPoint { x: f64, y: f64 },
    SpawnAt(Loc),
    SetPaused(bool),
    TogglePaused,
    Resize { pixel_width: u32, pixel_height: u32 },
    Randomize { density: f64 },
    Clear,
}

/// Everything one running game needs: the board, its clock, and the tile
/// layout that ties the board to pixels.
#[derive(Debug)]
pub struct Simulation {
    automaton: CellularAutomaton,
    clock: SimulationClock,
    tile: TileGeometry,
    commands: VecDeque<Command>,
    rand: Random,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Self {
        Self::with_random(config, Random::new())
    }

    pub fn with_random(config: SimulationConfig, rand: Random) -> Self {
        Self {
            automaton: CellularAutomaton::new(GridSize::default()),
            clock: SimulationClock::new(config.steps_per_second),
            tile: config.tile,
            commands: VecDeque::new(),
            rand,
        }
    }

    pub fn grid(&self) -> &Grid {
        self.automaton.grid()
    }

    pub fn automaton(&self) -> &CellularAutomaton {
        &self.automaton
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn tile(&self) -> &TileGeometry {
        &self.tile
    }

    pub fn is_paused(&self) -> bool {
        self.clock.is_paused()
    }

    pub fn pending_commands(&self) -> usize {
        self.commands.len()
    }

    pub fn push(&mut self, command: Command) {
        self.commands.push_back(command);
    }

    /// Applies queued commands, then runs however many steps the clock says
    /// are owed at `now`. Returns the number of steps run.
    pub fn tick(&mut self, now: Duration) -> u32 {
        while let Some(command) = self.commands.pop_front() {
            self.apply(command);
        }

        let owed = self.clock.on_frame(now);
        for _ in 0..owed {
            self.automaton.step();
        }
        owed
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::SpawnAtPoint { x, y } => {
                if let Some(loc) = self.tile.cell_at_point(self.automaton.grid(), x, y) {
                    self.automaton.grid_mut().spawn(loc);
                }
            }
            Command::SpawnAt(loc) => {
                self.automaton.grid_mut().spawn(loc);
            }
            Command::SetPaused(paused) => self.clock.set_paused(paused),
            Command::TogglePaused => self.clock.toggle_paused(),
            Command::Resize {
                pixel_width,
                pixel_height,
            } => {
                let size = self.tile.grid_size_for_window(pixel_width, pixel_height);
                self.automaton.grid_mut().resize(size);
            }
            Command::Randomize { density } => self.randomize(density),
            Command::Clear => {
                debug!("Clearing grid");
                self.automaton.grid_mut().clear();
            }
        }
    }

    fn randomize(&mut self, density: f64) {
        let density = if density.is_nan() {
            0.0
        } else {
            density.clamp(0.0, 1.0)
        };
        debug!("Randomizing grid with density {density}");

        let grid = self.automaton.grid_mut();
        grid.clear();
        for index in 0..grid.num_cells() {
            if self.rand.next_bool(density) {
                let loc = grid.loc_of(index);
                grid.spawn(loc);
            }
        }
    }

    /// Every cell with its alive state, row by row.
    pub fn render_cells(&self) -> impl Iterator<Item = (Loc, bool)> + '_ {
        let grid = self.automaton.grid();
        grid.cells_iter()
            .enumerate()
            .map(move |(index, cell)| (grid.loc_of(index), cell.is_alive()))
    }
}
