pub mod board;
pub mod movement;
pub mod piece;
pub mod state;

pub use board::{Board, Cell, Point};
pub use movement::Movement;
pub use state::{Game, GameState};
