//! **mazeball** builds perfect mazes on a grid of cells and walls and reports every wall it
//! raises or breaks so a renderer can materialize the maze as it grows.

pub mod build_queue;
pub mod cells;
pub mod coordinates;
pub mod environment;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod grid_builder;
pub mod grid_display;
pub mod maze;
pub mod pathing;
pub mod placement;
pub mod units;
pub mod visitor;
pub mod walls;
mod utils;
