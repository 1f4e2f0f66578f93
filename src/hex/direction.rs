//! The six neighbor directions of a pointy-top hexagon.

use serde::{Deserialize, Serialize};

/// Direction from a cell toward one of its six neighbors, clockwise from north-east.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HexDirection {
    NE,
    E,
    SE,
    SW,
    W,
    NW,
}

impl HexDirection {
    /// All directions in clockwise order.
    pub const ALL: [HexDirection; 6] = [
        HexDirection::NE,
        HexDirection::E,
        HexDirection::SE,
        HexDirection::SW,
        HexDirection::W,
        HexDirection::NW,
    ];

    /// Index into neighbor and corner tables (0..6).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Direction for a table index, wrapping modulo 6.
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % 6]
    }

    pub const fn opposite(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// Next direction clockwise.
    pub const fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Next direction counter-clockwise.
    pub const fn previous(self) -> Self {
        Self::from_index(self.index() + 5)
    }

    /// Two steps clockwise.
    pub const fn next2(self) -> Self {
        Self::from_index(self.index() + 2)
    }

    /// Two steps counter-clockwise.
    pub const fn previous2(self) -> Self {
        Self::from_index(self.index() + 4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite() {
        assert_eq!(HexDirection::NE.opposite(), HexDirection::SW);
        assert_eq!(HexDirection::E.opposite(), HexDirection::W);
        assert_eq!(HexDirection::SE.opposite(), HexDirection::NW);
        for d in HexDirection::ALL {
            assert_eq!(d.opposite().opposite(), d);
        }
    }

    #[test]
    fn test_next_previous_wrap() {
        assert_eq!(HexDirection::NW.next(), HexDirection::NE);
        assert_eq!(HexDirection::NE.previous(), HexDirection::NW);
        for d in HexDirection::ALL {
            assert_eq!(d.next().previous(), d);
        }
    }

    #[test]
    fn test_two_step_rotation() {
        assert_eq!(HexDirection::W.next2(), HexDirection::NE);
        assert_eq!(HexDirection::E.previous2(), HexDirection::NW);
        assert_eq!(HexDirection::SE.next2(), HexDirection::W);
        for d in HexDirection::ALL {
            assert_eq!(d.next2(), d.next().next());
            assert_eq!(d.previous2(), d.previous().previous());
        }
    }

    #[test]
    fn test_index_round_trip() {
        for (i, d) in HexDirection::ALL.iter().enumerate() {
            assert_eq!(d.index(), i);
            assert_eq!(HexDirection::from_index(i), *d);
        }
    }
}
