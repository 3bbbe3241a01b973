use crate::face::Face;

// X -> Right, Y -> Up, Z -> Back
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Self; 3] = [Axis::X, Axis::Y, Axis::Z];
}

/// A slab of N×N pieces perpendicular to `axis`.
///
/// Depth `0` and `size - 1` are the two outer faces along the axis (Left and
/// Right for X, Bottom and Top for Y, Front and Back for Z). Depths are not
/// checked against the cube size; building an out of range layer is a bug in
/// the caller.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Layer {
    pub axis: Axis,
    pub depth: usize,
}

impl Layer {
    #[must_use]
    pub const fn new(axis: Axis, depth: usize) -> Self {
        Self { axis, depth }
    }

    /// The outer layer of `face` on a cube of `size`.
    #[must_use]
    pub const fn of_face(face: Face, size: usize) -> Self {
        match face {
            Face::Top => Layer::new(Axis::Y, size - 1),
            Face::Left => Layer::new(Axis::X, 0),
            Face::Front => Layer::new(Axis::Z, 0),
            Face::Right => Layer::new(Axis::X, size - 1),
            Face::Back => Layer::new(Axis::Z, size - 1),
            Face::Bottom => Layer::new(Axis::Y, 0),
        }
    }

    /// The layer halfway along `axis`; the M, E and S slices of a 3x3.
    #[must_use]
    pub const fn middle(axis: Axis, size: usize) -> Self {
        Layer::new(axis, size / 2)
    }

    /// Whether the layer lies on the near half of its axis, including the
    /// exact middle of odd cubes. On even cubes the near half is exactly the
    /// first `size / 2` layers, so the outer far face of a 2x2 is still read
    /// from outside.
    ///
    /// Near layers are read in the same orientation as the depth `0` face,
    /// far layers in the mirrored orientation of the depth `size - 1` face.
    /// Turning a far layer clockwise as seen from its own face therefore
    /// reorients its pieces counter-clockwise about the axis.
    #[must_use]
    pub const fn is_near_side(self, size: usize) -> bool {
        self.depth <= (size - 1) / 2
    }

    /// The direction the pieces of this layer get reoriented in when the
    /// layer is turned in direction `clockwise`.
    #[must_use]
    pub const fn piece_rotation(self, size: usize, clockwise: bool) -> bool {
        if self.is_near_side(size) {
            clockwise
        } else {
            !clockwise
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_layers() {
        assert_eq!(Layer::of_face(Face::Top, 3), Layer::new(Axis::Y, 2));
        assert_eq!(Layer::of_face(Face::Bottom, 3), Layer::new(Axis::Y, 0));
        assert_eq!(Layer::of_face(Face::Back, 5), Layer::new(Axis::Z, 4));
        assert_eq!(Layer::middle(Axis::X, 3), Layer::new(Axis::X, 1));
    }

    #[test]
    fn test_near_side_boundary() {
        // odd cubes: the middle layer is on the near side
        assert!(Layer::new(Axis::X, 1).is_near_side(3));
        assert!(!Layer::new(Axis::X, 2).is_near_side(3));

        // even cubes split evenly
        assert!(Layer::new(Axis::Y, 1).is_near_side(4));
        assert!(!Layer::new(Axis::Y, 2).is_near_side(4));
        assert!(!Layer::new(Axis::Y, 3).is_near_side(4));
        assert!(Layer::new(Axis::Z, 0).is_near_side(2));
        assert!(!Layer::new(Axis::Z, 1).is_near_side(2));
    }

    #[test]
    fn test_far_layers_reorient_backwards() {
        for size in 2..=5 {
            for face in Face::ALL {
                let layer = Layer::of_face(face, size);
                let near = matches!(face, Face::Left | Face::Bottom | Face::Front);
                assert_eq!(layer.piece_rotation(size, true), near);
                assert_eq!(layer.piece_rotation(size, false), !near);
            }
        }
    }
}
