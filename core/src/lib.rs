#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use events::*;
pub use generator::*;
pub use score::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod events;
mod generator;
mod score;
mod types;

/// Shortest run of equal colors that counts as a match.
pub const MATCH_RUN: usize = 3;

/// Palette floor: the left and above neighbors can veto at most two colors
/// during generation.
pub const MIN_COLORS: Color = 3;

const DEFAULT_FIELD_SIZE: Coord = 6;
const DEFAULT_COLORS: Color = 5;
const DEFAULT_MATCHES_PER_SCORE: u32 = 3;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub field_size: Coord,
    pub color_count: Color,
    pub matches_per_score: u32,
}

impl GameConfig {
    pub const fn new_unchecked(field_size: Coord, color_count: Color, matches_per_score: u32) -> Self {
        Self {
            field_size,
            color_count,
            matches_per_score,
        }
    }

    /// Clamps unplayable sizes and palettes instead of rejecting them.
    pub fn new(field_size: Coord, color_count: Color) -> Self {
        let size = field_size.clamp(MATCH_RUN as Coord, Coord::MAX);
        let colors = color_count.clamp(MIN_COLORS, Color::MAX);
        if size != field_size || colors != color_count {
            log::warn!(
                "Config clamped to {}x{} with {} colors, requested {}x{} with {}",
                size,
                size,
                colors,
                field_size,
                field_size,
                color_count
            );
        }
        Self::new_unchecked(size, colors, DEFAULT_MATCHES_PER_SCORE)
    }

    pub fn with_matches_per_score(self, matches_per_score: u32) -> Self {
        Self {
            matches_per_score: matches_per_score.max(1),
            ..self
        }
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.field_size, self.field_size)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(DEFAULT_FIELD_SIZE, DEFAULT_COLORS, DEFAULT_MATCHES_PER_SCORE)
    }
}

/// Square grid of colored tokens. Swap and cascade operations recolor or
/// empty cells in place; the grid itself never changes shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    /// All-empty board, the staging state used by generation.
    pub fn empty(field_size: Coord) -> Self {
        Self {
            cells: Array2::default((field_size, field_size).to_nd_index()),
        }
    }

    /// Wraps an existing grid; the shape must be square and addressable.
    pub fn from_cells(cells: Array2<Cell>) -> Result<Self> {
        let (rows, cols) = cells.dim();
        if rows != cols || rows > Coord::MAX as usize {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(Self { cells })
    }

    /// Builds a full board from row-major color rows.
    pub fn from_rows<const N: usize>(rows: [[Color; N]; N]) -> Self {
        assert!(N <= Coord::MAX as usize, "board side exceeds the coordinate range");
        let mut cells = Array2::default([N, N]);
        for (row, colors) in rows.iter().enumerate() {
            for (col, &color) in colors.iter().enumerate() {
                cells[[row, col]] = Cell::Filled(color);
            }
        }
        Self { cells }
    }

    pub fn field_size(&self) -> Coord {
        self.cells.dim().0.try_into().unwrap()
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len().try_into().unwrap()
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        let size = self.field_size();
        coords.0 < size && coords.1 < size
    }

    /// Bounds-checked access; out-of-range coordinates yield `None`.
    pub fn get(&self, coords: Coord2) -> Option<Cell> {
        self.contains(coords).then(|| self[coords])
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn holes_in_col(&self, col: Coord) -> Coord {
        (0..self.field_size())
            .filter(|&row| self[(row, col)].is_empty())
            .count()
            .try_into()
            .unwrap()
    }

    /// Exchanges the contents of two cells.
    pub fn swap_cells(&mut self, a: Coord2, b: Coord2) -> Result<()> {
        if !self.contains(a) || !self.contains(b) {
            return Err(GameError::InvalidCoords);
        }
        let tmp = self[a];
        self[a] = self[b];
        self[b] = tmp;
        Ok(())
    }

    /// True when the two cells left of `coords` or the two above it carry its
    /// color. Out-of-bounds and empty neighbors never match, so the check is
    /// safe during generation while the rest of the board is still empty.
    pub fn has_match_at(&self, coords: Coord2) -> bool {
        self.matches_towards(coords, Direction::Left) || self.matches_towards(coords, Direction::Up)
    }

    fn matches_towards(&self, coords: Coord2, direction: Direction) -> bool {
        let Some(color) = self.get(coords).and_then(Cell::color) else {
            return false;
        };
        let (d_row, d_col) = direction.delta();
        (1..=2i8).all(|step| {
            let neighbor = coords
                .0
                .checked_add_signed(d_row * step)
                .zip(coords.1.checked_add_signed(d_col * step))
                .and_then(|pos| self.get(pos));
            neighbor.and_then(Cell::color) == Some(color)
        })
    }

    pub fn has_any_match(&self) -> bool {
        let size = self.field_size();
        (0..size).any(|row| (0..size).any(|col| self.has_match_at((row, col))))
    }

    /// Marks every run of [`MATCH_RUN`] or more equal colors along `axis`,
    /// incrementing the removal count of each member cell. Both axes write to
    /// one shared mask, so a cell sitting on a horizontal and a vertical run
    /// accumulates a count of two while still being destroyed once.
    pub fn mark_runs(&self, axis: RunAxis, mask: &mut RemoveMask) {
        debug_assert_eq!(mask.field_size(), self.field_size());
        let size = self.field_size();
        for line in 0..size {
            let mut streak_color: Option<Color> = None;
            let mut streak_len: usize = 0;
            let mut streak_start: Coord = 0;
            // one position past the end acts as a sentinel that flushes a
            // trailing run
            for pos in 0..=size {
                let color = if pos < size {
                    self[axis.cell(line, pos)].color()
                } else {
                    None
                };
                if color.is_some() && color == streak_color {
                    streak_len += 1;
                    continue;
                }
                if streak_color.is_some() && streak_len >= MATCH_RUN {
                    for offset in 0..streak_len {
                        mask.mark(axis.cell(line, streak_start + offset as Coord));
                    }
                }
                streak_color = color;
                streak_len = 1;
                streak_start = pos;
            }
        }
    }

    /// Runs both marking passes over a fresh mask.
    pub fn matched_cells(&self) -> RemoveMask {
        let mut mask = RemoveMask::new(self.field_size());
        self.mark_runs(RunAxis::Horizontal, &mut mask);
        self.mark_runs(RunAxis::Vertical, &mut mask);
        mask
    }

    /// Compacts every column downward over its holes, preserving the relative
    /// order of the surviving tokens. Returns one entry per moved cell; the
    /// computation only looks at occupancy, never at colors.
    pub fn collapse(&mut self) -> Vec<CellFall> {
        let size = self.field_size();
        let mut falls = Vec::new();
        for col in 0..size {
            let mut holes: Coord = 0;
            for row in (0..size).rev() {
                match self[(row, col)] {
                    Cell::Empty => holes += 1,
                    Cell::Filled(_) if holes > 0 => {
                        let target = (row + holes, col);
                        self[target] = self[(row, col)];
                        self[(row, col)] = Cell::Empty;
                        falls.push(CellFall {
                            cell: target,
                            distance: holes,
                        });
                    }
                    Cell::Filled(_) => {}
                }
            }
        }
        falls
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Board {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}

/// Removal counts for one resolution pass; marking is additive across the
/// horizontal and vertical scans.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveMask {
    counts: Array2<u8>,
}

impl RemoveMask {
    pub fn new(field_size: Coord) -> Self {
        Self {
            counts: Array2::default((field_size, field_size).to_nd_index()),
        }
    }

    pub fn field_size(&self) -> Coord {
        self.counts.dim().0.try_into().unwrap()
    }

    pub fn mark(&mut self, coords: Coord2) {
        self.counts[coords.to_nd_index()] += 1;
    }

    pub fn count_at(&self, coords: Coord2) -> u8 {
        self.counts[coords.to_nd_index()]
    }

    pub fn is_marked(&self, coords: Coord2) -> bool {
        self.count_at(coords) > 0
    }

    pub fn is_clear(&self) -> bool {
        self.counts.iter().all(|&count| count == 0)
    }

    /// Marked cells in row-major order.
    pub fn marked_cells(&self) -> Vec<Coord2> {
        self.counts
            .indexed_iter()
            .filter(|&(_, &count)| count > 0)
            .map(|((row, col), _)| (row as Coord, col as Coord))
            .collect()
    }
}
