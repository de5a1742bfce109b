mod board;
mod defs;
mod encode;
mod error;
mod game_trait;
mod side;
mod symmetry;

pub use board::{cells_of, winner, Board, Cell, EmptyCellIter, Position, Queue};
pub use defs::*;
pub use encode::{canonicalize, decode, encode, DecodeError};
pub use error::{IllegalMoveError, KernelResult};
pub use game_trait::{Game, GameIterator, GameMoveIterator, GameResult};
pub use side::{Side, TileState};
pub use symmetry::{SymmetryTable, D4};
