use log::debug;

use crate::moves::{BaseMove, Direction, Move, MoveSequence};

/// Generates random scrambles from outer face moves.
///
/// Every move is drawn uniformly from the six faces and the three
/// directions. Scrambles name faces, not depths, so they apply to any cube
/// size.
pub struct Scrambler {
    rng: fastrand::Rng,
}

impl Scrambler {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// A scrambler that always produces the same sequence of scrambles.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    #[must_use]
    pub fn next_move(&mut self) -> Move {
        let base = BaseMove::FACES[self.rng.usize(..BaseMove::FACES.len())];
        let direction = Direction::ALL[self.rng.usize(..Direction::ALL.len())];
        Move::new(base, direction)
    }

    #[must_use]
    pub fn scramble(&mut self, length: usize) -> MoveSequence {
        let scramble = MoveSequence((0..length).map(|_| self.next_move()).collect());
        debug!("Generated scramble: {scramble}");
        scramble
    }
}

impl Default for Scrambler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_and_faces() {
        let scramble = Scrambler::new().scramble(50);
        assert_eq!(scramble.len(), 50);
        assert!(scramble.iter().all(|move_| move_.base.face().is_some()));
    }

    #[test]
    fn test_seeded_scrambles_repeat() {
        let a = Scrambler::with_seed(7).scramble(25);
        let b = Scrambler::with_seed(7).scramble(25);
        assert_eq!(a, b);
    }

    #[test]
    fn test_scramble_parses_back() {
        let scramble = Scrambler::with_seed(3).scramble(30);
        assert_eq!(scramble.to_string().parse::<MoveSequence>(), Ok(scramble));
    }

    #[test]
    fn test_every_face_and_direction_shows_up() {
        let scramble = Scrambler::with_seed(11).scramble(500);
        for base in BaseMove::FACES {
            for direction in Direction::ALL {
                assert!(scramble.contains(&Move::new(base, direction)));
            }
        }
    }
}
