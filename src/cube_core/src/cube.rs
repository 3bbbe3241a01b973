use std::ops::Index;

use log::{debug, trace};
use thiserror::Error;

use crate::{
    face::Face,
    layer::Layer,
    mapping::{Coord, LayerMapping},
    moves::{Move, MoveSequence, Turn},
    piece::Piece,
};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CubeError {
    #[error("A cube must be at least 2 pieces wide, got {size}")]
    InvalidSize { size: usize },
}

/// An N×N×N cube stored as a flat array of N³ pieces.
///
/// See [`crate::mapping`] for the storage layout.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cube {
    size: usize,
    pieces: Box<[Piece]>,
}

impl Cube {
    /// Create a solved cube with `size` pieces along each edge.
    ///
    /// # Errors
    ///
    /// If `size` is smaller than 2.
    pub fn new(size: usize) -> Result<Self, CubeError> {
        if size < 2 {
            return Err(CubeError::InvalidSize { size });
        }

        let last = size - 1;
        let pieces = (0..size * size * size)
            .map(|index| {
                let Coord { x, y, z } = Coord::from_index(index, size);
                let mut piece = Piece::blank();
                let mut paint = |face: Face| piece.set_color(face, face.canonical_color());

                if x == 0 {
                    paint(Face::Left);
                }
                if x == last {
                    paint(Face::Right);
                }
                if y == 0 {
                    paint(Face::Back);
                }
                if y == last {
                    paint(Face::Front);
                }
                if z == 0 {
                    paint(Face::Top);
                }
                if z == last {
                    paint(Face::Bottom);
                }

                piece
            })
            .collect();

        Ok(Cube { size, pieces })
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    #[must_use]
    pub fn piece(&self, coord: Coord) -> &Piece {
        &self.pieces[coord.index(self.size)]
    }

    /// The raster of `layer` on this cube.
    #[must_use]
    pub fn mapping(&self, layer: Layer) -> LayerMapping {
        LayerMapping::new(self.size, layer)
    }

    /// The total number of colored sides over all pieces. Turning layers
    /// never changes it.
    #[must_use]
    pub fn color_count(&self) -> usize {
        self.pieces.iter().map(Piece::color_count).sum()
    }

    /// Check that every sticker on each of the six outer faces shows that
    /// face's solved color.
    ///
    /// This is a structural check on the outer layers only. Any scrambled
    /// cube fails it, no matter how well formed.
    #[must_use]
    pub fn validate(&self) -> bool {
        Face::ALL.into_iter().all(|face| {
            let expected = Some(face.canonical_color());
            self.mapping(Layer::of_face(face, self.size))
                .indices()
                .all(|(_, index)| self.pieces[index].color(face) == expected)
        })
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.validate()
    }

    /// Turn `layer` a quarter turn, clockwise as seen from outside the face
    /// the layer's raster is read from.
    ///
    /// The N×N block of pieces is flipped (rows for clockwise, columns for
    /// counter-clockwise) and then transposed, which together rotate it by
    /// 90° and handle the middle row and column of odd cubes for free. Each
    /// piece of the layer is then reoriented about the layer's axis.
    pub fn rotate(&mut self, layer: Layer, clockwise: bool) {
        let n = self.size;
        let mapping = self.mapping(layer);

        if clockwise {
            for row in 0..n / 2 {
                for col in 0..n {
                    self.pieces.swap(mapping.index(col, row), mapping.index(col, n - 1 - row));
                }
            }
        } else {
            for row in 0..n {
                for col in 0..n / 2 {
                    self.pieces.swap(mapping.index(col, row), mapping.index(n - 1 - col, row));
                }
            }
        }

        for row in 0..n - 1 {
            for col in row + 1..n {
                self.pieces.swap(mapping.index(col, row), mapping.index(row, col));
            }
        }

        let piece_clockwise = layer.piece_rotation(n, clockwise);
        for (_, index) in mapping.indices() {
            self.pieces[index] = self.pieces[index].rotate_faces(layer.axis, piece_clockwise);
        }

        trace!("Rotated {layer:?} clockwise={clockwise} (pieces clockwise={piece_clockwise})");
    }

    /// Consuming version of [`Cube::rotate`].
    #[must_use]
    pub fn rotated(mut self, layer: Layer, clockwise: bool) -> Self {
        self.rotate(layer, clockwise);
        self
    }

    pub fn apply_turn(&mut self, turn: Turn) {
        self.rotate(turn.layer, turn.clockwise);
    }

    /// Apply one move. Half turns are two clockwise quarter turns.
    pub fn apply_move(&mut self, move_: Move) {
        for turn in move_.turns(self.size) {
            self.apply_turn(turn);
        }
    }

    pub fn apply_moves(&mut self, moves: &MoveSequence) {
        debug!("Applying {} moves to a {n}x{n}x{n} cube", moves.len(), n = self.size);
        for &move_ in moves.iter() {
            self.apply_move(move_);
        }
    }

    /// Apply a whitespace separated move string, skipping any token that is
    /// not a valid move. Returns the number of tokens skipped.
    pub fn apply_notation(&mut self, notation: &str) -> usize {
        let (moves, skipped) = MoveSequence::parse_lenient(notation);
        if skipped > 0 {
            debug!("Skipped {skipped} unrecognized tokens in {notation:?}");
        }
        self.apply_moves(&moves);
        skipped
    }
}

impl Index<Coord> for Cube {
    type Output = Piece;

    fn index(&self, coord: Coord) -> &Self::Output {
        self.piece(coord)
    }
}
