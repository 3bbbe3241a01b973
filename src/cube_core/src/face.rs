use std::{fmt::Display, str::FromStr};

/// A sticker color. The six colors correspond one to one with the faces of a
/// solved cube.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Orange,
    Green,
    Red,
    Blue,
    Yellow,
}

impl Color {
    pub const ALL: [Self; 6] = [
        Color::White,
        Color::Orange,
        Color::Green,
        Color::Red,
        Color::Blue,
        Color::Yellow,
    ];

    /// The single character used when printing a sticker of this color.
    #[must_use]
    pub fn code(self) -> char {
        match self {
            Color::White => 'W',
            Color::Orange => 'O',
            Color::Green => 'G',
            Color::Red => 'R',
            Color::Blue => 'B',
            Color::Yellow => 'Y',
        }
    }

    /// The face that shows this color when the cube is solved.
    #[must_use]
    pub fn home_face(self) -> Face {
        Face::ALL[self as usize]
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One of the six outward sides of the cube.
///
/// The discriminants are the slot indices inside a [`crate::piece::Piece`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Face {
    Top,
    Left,
    Front,
    Right,
    Back,
    Bottom,
}

impl Face {
    pub const ALL: [Self; 6] = {
        use Face::*;
        let v = [Top, Left, Front, Right, Back, Bottom];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    /// The color this face shows on a solved cube.
    #[must_use]
    pub fn canonical_color(self) -> Color {
        Color::ALL[self as usize]
    }

    #[must_use]
    pub fn opposite(self) -> Face {
        match self {
            Face::Top => Face::Bottom,
            Face::Left => Face::Right,
            Face::Front => Face::Back,
            Face::Right => Face::Left,
            Face::Back => Face::Front,
            Face::Bottom => Face::Top,
        }
    }

    /// The letter naming this face in move notation.
    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Face::Top => 'U',
            Face::Left => 'L',
            Face::Front => 'F',
            Face::Right => 'R',
            Face::Back => 'B',
            Face::Bottom => 'D',
        }
    }
}

impl FromStr for Face {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "U" => Ok(Face::Top),
            "L" => Ok(Face::Left),
            "F" => Ok(Face::Front),
            "R" => Ok(Face::Right),
            "B" => Ok(Face::Back),
            "D" => Ok(Face::Bottom),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_colors_round_trip() {
        for face in Face::ALL {
            assert_eq!(face.canonical_color().home_face(), face);
            assert_eq!(face.opposite().opposite(), face);
            assert_ne!(face.opposite(), face);
        }
    }

    #[test]
    fn test_letters_parse_back() {
        for face in Face::ALL {
            assert_eq!(face.letter().to_string().parse::<Face>(), Ok(face));
        }
        assert!("X".parse::<Face>().is_err());
    }
}
