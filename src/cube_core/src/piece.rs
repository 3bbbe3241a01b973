use std::fmt::Display;

use crate::{
    face::{Color, Face},
    layer::Axis,
};

/// One of the N³ sub-cubes. Each slot holds the color showing on that side
/// of the piece, or `None` if the side is hidden inside the cube.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Piece([Option<Color>; 6]);

impl Piece {
    /// A piece with no colored sides, like the hidden interior pieces of big
    /// cubes.
    #[must_use]
    pub const fn blank() -> Self {
        Piece([None; 6])
    }

    /// Return this piece with `face` colored `color`.
    #[must_use]
    pub fn with_color(mut self, face: Face, color: Color) -> Self {
        self.set_color(face, color);
        self
    }

    /// Color one side of the piece. Nothing stops a caller from coloring a
    /// side that should be hidden; doing so makes the cube invalid.
    pub fn set_color(&mut self, face: Face, color: Color) {
        self.0[face as usize] = Some(color);
    }

    #[must_use]
    pub fn color(&self, face: Face) -> Option<Color> {
        self.0[face as usize]
    }

    #[must_use]
    pub fn has(&self, face: Face) -> bool {
        self.0[face as usize].is_some()
    }

    /// The number of colored sides: 3 for corners, 2 for edges, 1 for
    /// centers and 0 for interior pieces.
    #[must_use]
    pub fn color_count(&self) -> usize {
        self.0.iter().flatten().count()
    }

    /// Reorient the piece by a quarter turn about `axis`.
    ///
    /// Only the four sides orthogonal to the axis move. Going clockwise, the
    /// color on each side of the cycle moves to the previous side in the
    /// cycle list, so about X the top color ends up in front.
    #[must_use]
    pub fn rotate_faces(self, axis: Axis, clockwise: bool) -> Self {
        let cycle = match axis {
            Axis::X => [Face::Top, Face::Back, Face::Bottom, Face::Front],
            Axis::Y => [Face::Front, Face::Left, Face::Back, Face::Right],
            Axis::Z => [Face::Top, Face::Left, Face::Bottom, Face::Right],
        };
        let offset = if clockwise { 1 } else { 3 };

        let mut rotated = self;
        for (i, &face) in cycle.iter().enumerate() {
            rotated.0[face as usize] = self.0[cycle[(i + offset) % 4] as usize];
        }
        rotated
    }
}

impl Display for Piece {
    /// Prints the piece as a cross: top on the first line, the four sides on
    /// the second and bottom on the third.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = |face: Face| self.color(face).map_or('-', Color::code);

        writeln!(f, "  {}", code(Face::Top))?;
        for face in [Face::Left, Face::Front, Face::Right, Face::Back] {
            write!(f, "{} ", code(face))?;
        }
        writeln!(f)?;
        writeln!(f, "  {}", code(Face::Bottom))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_turn_moves_colors_to_opposite_faces() {
        let piece = Piece::blank()
            .with_color(Face::Top, Color::White)
            .with_color(Face::Front, Color::Green);

        let turned = piece.rotate_faces(Axis::X, true).rotate_faces(Axis::X, true);

        assert_eq!(turned.color(Face::Bottom), Some(Color::White));
        assert_eq!(turned.color(Face::Back), Some(Color::Green));
        assert!(!turned.has(Face::Top));
        assert!(!turned.has(Face::Front));
        assert_eq!(turned.color_count(), 2);
    }

    #[test]
    fn test_quarter_turn_cycle_order() {
        let piece = Piece::blank().with_color(Face::Top, Color::White);

        assert!(piece.rotate_faces(Axis::X, true).has(Face::Front));
        assert!(piece.rotate_faces(Axis::X, false).has(Face::Back));
        assert!(piece.rotate_faces(Axis::Z, true).has(Face::Right));
        assert!(piece.rotate_faces(Axis::Z, false).has(Face::Left));

        let front = Piece::blank().with_color(Face::Front, Color::Green);
        assert!(front.rotate_faces(Axis::Y, true).has(Face::Right));
        assert!(front.rotate_faces(Axis::Y, false).has(Face::Left));
    }

    #[test]
    fn test_axis_faces_are_untouched() {
        let piece = Piece::blank()
            .with_color(Face::Left, Color::Orange)
            .with_color(Face::Right, Color::Red)
            .with_color(Face::Top, Color::White);

        let turned = piece.rotate_faces(Axis::X, true);
        assert_eq!(turned.color(Face::Left), Some(Color::Orange));
        assert_eq!(turned.color(Face::Right), Some(Color::Red));
    }

    #[test]
    fn test_inverse_and_order_four() {
        let piece = Piece::blank()
            .with_color(Face::Top, Color::White)
            .with_color(Face::Left, Color::Orange)
            .with_color(Face::Back, Color::Blue);

        for axis in [Axis::X, Axis::Y, Axis::Z] {
            assert_eq!(
                piece.rotate_faces(axis, true).rotate_faces(axis, false),
                piece
            );

            let mut turned = piece;
            for _ in 0..4 {
                turned = turned.rotate_faces(axis, true);
            }
            assert_eq!(turned, piece);
        }
    }

    #[test]
    fn test_display() {
        let piece = Piece::blank()
            .with_color(Face::Top, Color::White)
            .with_color(Face::Front, Color::Green)
            .with_color(Face::Left, Color::Orange);

        assert_eq!(piece.to_string(), "  W\nO G - - \n  -\n");
    }
}
