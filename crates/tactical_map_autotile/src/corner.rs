//! Corner adjacency geometry
//!
//! Fixed geometry relating a tile's corners to its neighbors' corners.
//! Corner indices follow [`tactical_map_core::corner`]: 0=TL, 1=TR, 2=BR, 3=BL.

use tactical_map_core::corner::{BOTTOM_LEFT, BOTTOM_RIGHT, TOP_LEFT, TOP_RIGHT};
use tactical_map_core::CornerSignature;

/// The eight neighbor directions on a square grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// (row, col) offset of the neighbor in this direction; rows grow downward
    pub fn offset(&self) -> (i64, i64) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }

    pub fn is_diagonal(&self) -> bool {
        matches!(
            self,
            Direction::NorthEast
                | Direction::SouthEast
                | Direction::SouthWest
                | Direction::NorthWest
        )
    }
}

/// Which of this tile's corners must equal which of the neighbor's corners
/// for a seamless boundary in `direction`
///
/// The two slices are index-aligned pairs: `this[i]` touches `neighbor[i]`.
/// Ordinal directions share two corner pairs, diagonals share one.
pub fn corners_touching(direction: Direction) -> (&'static [usize], &'static [usize]) {
    match direction {
        Direction::North => (&[TOP_LEFT, TOP_RIGHT], &[BOTTOM_LEFT, BOTTOM_RIGHT]),
        Direction::East => (&[TOP_RIGHT, BOTTOM_RIGHT], &[TOP_LEFT, BOTTOM_LEFT]),
        Direction::South => (&[BOTTOM_LEFT, BOTTOM_RIGHT], &[TOP_LEFT, TOP_RIGHT]),
        Direction::West => (&[TOP_LEFT, BOTTOM_LEFT], &[TOP_RIGHT, BOTTOM_RIGHT]),
        Direction::NorthEast => (&[TOP_RIGHT], &[BOTTOM_LEFT]),
        Direction::SouthEast => (&[BOTTOM_RIGHT], &[TOP_LEFT]),
        Direction::SouthWest => (&[BOTTOM_LEFT], &[TOP_RIGHT]),
        Direction::NorthWest => (&[TOP_LEFT], &[BOTTOM_RIGHT]),
    }
}

/// Whether two signatures join seamlessly across `direction`
///
/// Equality is exact per corner; a mismatch is a hard terrain boundary,
/// which is a valid state rather than an error.
pub fn seamless(this: &CornerSignature, neighbor: &CornerSignature, direction: Direction) -> bool {
    let (ours, theirs) = corners_touching(direction);
    ours.iter()
        .zip(theirs)
        .all(|(&a, &b)| this.corner(a) == neighbor.corner(b))
}
