use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::types::{Color, Coord, Coord2};

/// A surviving token dropping into `cell` from `distance` rows above it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellFall {
    pub cell: Coord2,
    pub distance: Coord,
}

/// A refill token landing at `cell` after entering the board `start_offset`
/// rows above the top edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSpawn {
    pub cell: Coord2,
    pub color: Color,
    pub start_offset: Coord,
}

/// Notifications for the presentation layer. Each carries everything needed
/// to animate the transition without querying the engine back; the engine
/// waits for one acknowledgment per animated cell before advancing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardEvent {
    /// The highlighted cell changed; `None` clears the highlight.
    SelectionChanged(Option<Coord2>),
    /// Two adjacent cells started trading places on the board.
    SwapStarted { a: Coord2, b: Coord2 },
    /// Totals after a resolution pass was counted.
    ScoreChanged { matches: u32, score: u32 },
    /// Cells cleared by the current resolution pass, in row-major order.
    CellsDestroyed(Vec<Coord2>),
    /// Only emitted when at least one token moved.
    CellsFell(Vec<CellFall>),
    CellsSpawned(Vec<CellSpawn>),
    /// The board settled with no matches left; input is unlocked.
    Idle,
}
