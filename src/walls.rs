use serde::{Serialize, Serializer};

use crate::error::MazeError;

/// One side of a cell. Discriminants match the wire encoding and the bit
/// position inside [`Walls`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    Left = 0,
    Up = 1,
    Right = 2,
    Down = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    #[inline]
    pub fn opposite(self) -> Direction {
        Direction::ALL[(self as usize + 2) % 4]
    }

    /// Grid offset `(dx, dy)`; y grows downwards.
    #[inline]
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = MazeError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(Direction::Left),
            1 => Ok(Direction::Up),
            2 => Ok(Direction::Right),
            3 => Ok(Direction::Down),
            _ => Err(MazeError::InvalidDirection(v)),
        }
    }
}

/// Open-wall bitset of a single cell. Bit `d` set means wall `d` is removed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Walls(u8);

impl Walls {
    pub const CLOSED: Walls = Walls(0);

    #[inline]
    pub fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn is_open(self, d: Direction) -> bool {
        self.0 & (1 << d as u8) != 0
    }

    #[inline]
    pub fn open(&mut self, d: Direction) {
        self.0 |= 1 << d as u8;
    }

    pub fn count_open(self) -> u32 {
        self.0.count_ones()
    }

    pub fn iter_open(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |&d| self.is_open(d))
    }
}

impl Serialize for Walls {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u8(self.0)
    }
}
