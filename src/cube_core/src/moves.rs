//! Move notation: `R`, `U'`, `F2` and friends.
//!
//! Moves name a face (or a middle slice) rather than a layer depth, so the
//! same sequence can be applied to cubes of any size. They are resolved into
//! primitive [`Turn`]s against the size of the cube they are applied to.

use std::{
    fmt::Display,
    ops::{Deref, DerefMut},
    str::FromStr,
};

use itertools::Itertools;
use log::warn;
use thiserror::Error;

use crate::{
    face::Face,
    layer::{Axis, Layer},
};

/// A quarter turn of one layer. `clockwise` is as seen from outside the face
/// the layer's raster is read from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Turn {
    pub layer: Layer,
    pub clockwise: bool,
}

impl Turn {
    #[must_use]
    pub fn inverse(self) -> Self {
        Turn {
            layer: self.layer,
            clockwise: !self.clockwise,
        }
    }
}

/// The layer a move turns.
///
/// - U: top face
/// - D: bottom face
/// - L: left face
/// - R: right face
/// - F: front face
/// - B: back face
/// - M: middle slice between L and R, turning like L
/// - E: equator slice between U and D, turning like D
/// - S: standing slice between F and B, turning like F
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum BaseMove {
    U,
    D,
    L,
    R,
    F,
    B,
    M,
    E,
    S,
}

impl BaseMove {
    /// The six outer face moves, in notation order.
    pub const FACES: [Self; 6] = [
        BaseMove::F,
        BaseMove::U,
        BaseMove::R,
        BaseMove::B,
        BaseMove::L,
        BaseMove::D,
    ];

    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        Some(match letter {
            'U' => BaseMove::U,
            'D' => BaseMove::D,
            'L' => BaseMove::L,
            'R' => BaseMove::R,
            'F' => BaseMove::F,
            'B' => BaseMove::B,
            'M' => BaseMove::M,
            'E' => BaseMove::E,
            'S' => BaseMove::S,
            _ => return None,
        })
    }

    #[must_use]
    pub fn letter(self) -> char {
        match self {
            BaseMove::U => 'U',
            BaseMove::D => 'D',
            BaseMove::L => 'L',
            BaseMove::R => 'R',
            BaseMove::F => 'F',
            BaseMove::B => 'B',
            BaseMove::M => 'M',
            BaseMove::E => 'E',
            BaseMove::S => 'S',
        }
    }

    /// The outer face this move turns, if it is not a slice move.
    #[must_use]
    pub fn face(self) -> Option<Face> {
        match self {
            BaseMove::U => Some(Face::Top),
            BaseMove::D => Some(Face::Bottom),
            BaseMove::L => Some(Face::Left),
            BaseMove::R => Some(Face::Right),
            BaseMove::F => Some(Face::Front),
            BaseMove::B => Some(Face::Back),
            BaseMove::M | BaseMove::E | BaseMove::S => None,
        }
    }

    /// Resolve a quarter turn of this move on a cube of `size`.
    #[must_use]
    pub fn turn(self, size: usize, clockwise: bool) -> Turn {
        if let Some(face) = self.face() {
            return Turn {
                layer: Layer::of_face(face, size),
                clockwise,
            };
        }

        let slice_axis = match self {
            BaseMove::M => Axis::X,
            BaseMove::E => Axis::Y,
            _ => Axis::Z,
        };

        // Slices follow L, D and F. On even cubes the middle layer sits on
        // the far half of its axis, where the raster is mirrored.
        let layer = Layer::middle(slice_axis, size);
        Turn {
            layer,
            clockwise: clockwise == layer.is_near_side(size),
        }
    }
}

impl Display for BaseMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Represents the direction which to turn a face. `Prime` represents
/// a counter-clockwise rotation of a face, and `Double` represents
/// a 180 degree rotation of a face.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum Direction {
    Normal,
    Prime,
    Double,
}

impl Direction {
    pub const ALL: [Self; 3] = [Direction::Normal, Direction::Prime, Direction::Double];
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Normal => write!(f, ""),
            Direction::Prime => write!(f, "'"),
            Direction::Double => write!(f, "2"),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseMoveError {
    #[error("Empty move")]
    Empty,
    #[error("Unknown face `{0}`, expected one of F U R B L D M E S")]
    UnknownFace(char),
    #[error("Invalid move suffix `{0}`, expected nothing, `'` or `2`")]
    InvalidSuffix(String),
}

/// A base move equipped with a direction.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub struct Move {
    pub base: BaseMove,
    pub direction: Direction,
}

impl Move {
    #[must_use]
    pub fn new(base: BaseMove, direction: Direction) -> Self {
        Self { base, direction }
    }

    #[must_use]
    pub fn invert(&self) -> Self {
        Self {
            base: self.base,
            direction: match self.direction {
                Direction::Normal => Direction::Prime,
                Direction::Prime => Direction::Normal,
                Direction::Double => Direction::Double,
            },
        }
    }

    /// The quarter turns making up this move on a cube of `size`. A half turn
    /// is two clockwise quarter turns.
    pub fn turns(self, size: usize) -> impl Iterator<Item = Turn> {
        let (clockwise, count) = match self.direction {
            Direction::Normal => (true, 1),
            Direction::Prime => (false, 1),
            Direction::Double => (true, 2),
        };
        std::iter::repeat_n(self.base.turn(size, clockwise), count)
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let letter = chars.next().ok_or(ParseMoveError::Empty)?;
        let base = BaseMove::from_letter(letter).ok_or(ParseMoveError::UnknownFace(letter))?;

        let direction = match chars.as_str() {
            "" => Direction::Normal,
            "'" => Direction::Prime,
            "2" => Direction::Double,
            suffix => return Err(ParseMoveError::InvalidSuffix(suffix.to_owned())),
        };

        Ok(Move { base, direction })
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.base, self.direction)
    }
}

/// A sequence of moves, used for scrambles and user supplied algorithms.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MoveSequence(pub Vec<Move>);

impl MoveSequence {
    /// Parse whitespace separated moves, dropping every token that is not a
    /// valid move. Returns the moves together with the number of dropped
    /// tokens.
    #[must_use]
    pub fn parse_lenient(s: &str) -> (Self, usize) {
        let mut skipped = 0;
        let moves = s
            .split_whitespace()
            .filter_map(|token| match token.parse::<Move>() {
                Ok(move_) => Some(move_),
                Err(e) => {
                    warn!("Ignoring move `{token}`: {e}");
                    skipped += 1;
                    None
                }
            })
            .collect();

        (MoveSequence(moves), skipped)
    }

    #[must_use]
    pub fn invert(&self) -> Self {
        MoveSequence(self.iter().rev().map(Move::invert).collect())
    }
}

impl Deref for MoveSequence {
    type Target = Vec<Move>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for MoveSequence {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl FromStr for MoveSequence {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<_>, _>>()
            .map(MoveSequence)
    }
}

impl Display for MoveSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.iter().join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_moves() {
        assert_eq!("R".parse::<Move>(), Ok(Move::new(BaseMove::R, Direction::Normal)));
        assert_eq!("U'".parse::<Move>(), Ok(Move::new(BaseMove::U, Direction::Prime)));
        assert_eq!("F2".parse::<Move>(), Ok(Move::new(BaseMove::F, Direction::Double)));
        assert_eq!("M'".parse::<Move>(), Ok(Move::new(BaseMove::M, Direction::Prime)));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Move>(), Err(ParseMoveError::Empty));
        assert_eq!("X".parse::<Move>(), Err(ParseMoveError::UnknownFace('X')));
        assert_eq!("r".parse::<Move>(), Err(ParseMoveError::UnknownFace('r')));
        assert_eq!(
            "R3".parse::<Move>(),
            Err(ParseMoveError::InvalidSuffix("3".to_owned()))
        );
        assert_eq!(
            "R2'".parse::<Move>(),
            Err(ParseMoveError::InvalidSuffix("2'".to_owned()))
        );
    }

    #[test]
    fn test_lenient_parse_skips_garbage() {
        let (moves, skipped) = MoveSequence::parse_lenient("R  X U' F3 D2 ");
        assert_eq!(skipped, 2);
        assert_eq!(moves.to_string(), "R U' D2");

        assert!("R X U'".parse::<MoveSequence>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        let alg = "R U R' U' M2 E S'";
        let moves = alg.parse::<MoveSequence>().unwrap();
        assert_eq!(moves.len(), 7);
        assert_eq!(moves.to_string(), alg);
    }

    #[test]
    fn test_invert() {
        let moves = "R U2 F'".parse::<MoveSequence>().unwrap();
        assert_eq!(moves.invert().to_string(), "F U2 R'");
    }

    #[test]
    fn test_turns() {
        let turns = Move::new(BaseMove::U, Direction::Double).turns(3).collect_vec();
        assert_eq!(
            turns,
            vec![
                Turn {
                    layer: Layer::new(Axis::Y, 2),
                    clockwise: true
                };
                2
            ]
        );

        let turns = Move::new(BaseMove::L, Direction::Prime).turns(4).collect_vec();
        assert_eq!(
            turns,
            vec![Turn {
                layer: Layer::new(Axis::X, 0),
                clockwise: false
            }]
        );
    }

    #[test]
    fn test_slices_follow_their_face() {
        // odd cubes: the middle layer reads like the near face
        assert_eq!(
            BaseMove::M.turn(3, true),
            Turn {
                layer: Layer::new(Axis::X, 1),
                clockwise: true
            }
        );
        // even cubes: the middle layer reads like the far face
        assert_eq!(
            BaseMove::E.turn(4, true),
            Turn {
                layer: Layer::new(Axis::Y, 2),
                clockwise: false
            }
        );
    }
}
