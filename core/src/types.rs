use serde::{Deserialize, Serialize};

/// Single coordinate axis used for board side length and positions.
pub type Coord = u8;

/// Count type used for cell totals and per-pass tallies.
pub type CellCount = u16;

/// Palette index in `[0, color_count)`.
pub type Color = u8;

/// Two-dimensional coordinates `(row, col)`, row 0 at the top.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

pub const fn manhattan(a: Coord2, b: Coord2) -> CellCount {
    a.0.abs_diff(b.0) as CellCount + a.1.abs_diff(b.1) as CellCount
}

/// One of the four unit moves a swap gesture can resolve to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Quantizes a `(d_row, d_col)` delta; anything but a unit step is `None`.
    pub const fn from_delta(delta: (i8, i8)) -> Option<Self> {
        match delta {
            (-1, 0) => Some(Self::Up),
            (1, 0) => Some(Self::Down),
            (0, -1) => Some(Self::Left),
            (0, 1) => Some(Self::Right),
            _ => None,
        }
    }

    pub const fn delta(self) -> (i8, i8) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }

    /// Applies the move to `coords`, returning a value only when it remains
    /// inside a square board of side `bounds`.
    pub fn offset_from(self, coords: Coord2, bounds: Coord) -> Option<Coord2> {
        let (d_row, d_col) = self.delta();
        let row = coords.0.checked_add_signed(d_row)?;
        let col = coords.1.checked_add_signed(d_col)?;
        if row >= bounds || col >= bounds {
            return None;
        }
        Some((row, col))
    }
}

/// Scan orientation for run marking.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunAxis {
    Horizontal,
    Vertical,
}

impl RunAxis {
    /// Maps a `(line, position)` pair onto board coordinates: horizontal lines
    /// are rows, vertical lines are columns.
    pub const fn cell(self, line: Coord, pos: Coord) -> Coord2 {
        match self {
            Self::Horizontal => (line, pos),
            Self::Vertical => (pos, line),
        }
    }
}
