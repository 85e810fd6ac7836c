use rand::prelude::*;

use super::*;

/// Uniform generation with a greedy no-match fill: cells are drawn row-major
/// and redrawn until the two already-placed neighbors to the left and above
/// stop forming a run. With at least [`MIN_COLORS`] colors a legal draw always
/// exists, so the redraw loop terminates.
#[derive(Clone, Debug)]
pub struct RandomBoardGenerator {
    rng: SmallRng,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(&mut self, config: GameConfig) -> Board {
        let size = config.field_size;
        let mut board = Board::empty(size);
        let mut redraws: u32 = 0;
        for row in 0..size {
            for col in 0..size {
                loop {
                    let color = self.refill_color(config.color_count);
                    board[(row, col)] = Cell::Filled(color);
                    if !board.has_match_at((row, col)) {
                        break;
                    }
                    redraws += 1;
                }
            }
        }
        log::debug!(
            "Generated {}x{} board with {} colors after {} redraws",
            size,
            size,
            config.color_count,
            redraws
        );
        board
    }

    fn refill_color(&mut self, color_count: Color) -> Color {
        self.rng.random_range(0..color_count)
    }
}
