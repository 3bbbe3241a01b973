//! An N×N×N cube stored as a flat array of oriented pieces, with layer turns
//! that work for any size.

#![warn(clippy::pedantic)]
#![allow(clippy::similar_names, clippy::module_name_repetitions)]

pub mod cube;
mod display;
pub mod face;
pub mod layer;
pub mod mapping;
pub mod moves;
pub mod piece;
pub mod scramble;

pub use cube::{Cube, CubeError};
pub use face::{Color, Face};
pub use layer::{Axis, Layer};
pub use mapping::{Coord, LayerMapping};
pub use moves::{BaseMove, Direction, Move, MoveSequence, ParseMoveError, Turn};
pub use piece::Piece;
pub use scramble::Scrambler;
