#![deny(clippy::all)]
#![forbid(unsafe_code)]

//! Conway's Game of Life on a toroidal grid, driven by a fixed-timestep clock.

mod automaton;
mod clock;
mod grid;
mod random;
mod simulation;
mod tiles;

pub use automaton::{CellularAutomaton, next_alive};
pub use clock::{MAX_STEPS_PER_SECOND, STEPS_PER_SECOND, SimulationClock};
pub use grid::{Cell, Grid, GridSize, Loc, wrap};
pub use random::Random;
pub use simulation::{Command, RANDOM_DENSITY, Simulation, SimulationConfig};
pub use tiles::{TILE_MARGIN, TILE_OFFSET, TILE_SIZE, TileGeometry};
