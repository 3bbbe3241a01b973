//! Read-only views of a cube's stickers.

use std::fmt::{self, Display, Write};

use crate::{
    cube::Cube,
    face::{Color, Face},
    layer::Layer,
};

/// Face order of the facelet format used by two-phase solvers.
const FACELET_ORDER: [Face; 6] = [
    Face::Top,
    Face::Right,
    Face::Front,
    Face::Bottom,
    Face::Left,
    Face::Back,
];

impl Cube {
    /// The stickers of `face`, row by row as seen from outside the cube.
    #[must_use]
    pub fn face_colors(&self, face: Face) -> Vec<Option<Color>> {
        self.mapping(Layer::of_face(face, self.size()))
            .indices()
            .map(|(_, index)| self.pieces()[index].color(face))
            .collect()
    }

    /// The cube in facelet notation: for every sticker, the letter of the
    /// face whose solved color it shows. Faces come in U R F D L B order.
    #[must_use]
    pub fn facelets(&self) -> String {
        FACELET_ORDER
            .into_iter()
            .flat_map(|face| self.face_colors(face))
            .map(|color| color.map_or('-', |color| color.home_face().letter()))
            .collect()
    }

    /// Write the unfolded net of the cube: top, then left, front, right and
    /// back side by side, then bottom. `sticker` writes a single sticker.
    ///
    /// # Errors
    ///
    /// If writing to `w` fails.
    pub fn write_net<W: Write>(
        &self,
        w: &mut W,
        mut sticker: impl FnMut(&mut W, Option<Color>) -> fmt::Result,
    ) -> fmt::Result {
        let n = self.size();
        let faces = Face::ALL.map(|face| self.face_colors(face));
        let rows = |face: Face, row: usize| &faces[face as usize][row * n..(row + 1) * n];

        let mut write_row = |w: &mut W, sides: &[Face], indent: usize, row: usize| {
            write!(w, "{:width$}", "", width = indent)?;
            for &face in sides {
                for &color in rows(face, row) {
                    sticker(w, color)?;
                }
            }
            writeln!(w)?;
            fmt::Result::Ok(())
        };

        for row in 0..n {
            write_row(w, &[Face::Top], n * 2, row)?;
        }
        for row in 0..n {
            write_row(w, &[Face::Left, Face::Front, Face::Right, Face::Back], 0, row)?;
        }
        for row in 0..n {
            write_row(w, &[Face::Bottom], n * 2, row)?;
        }
        Ok(())
    }
}

impl Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_net(f, |f, color| write!(f, "{} ", color.map_or('-', Color::code)))
    }
}
