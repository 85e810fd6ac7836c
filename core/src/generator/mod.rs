use crate::*;
pub use random::*;

mod random;

/// Source of token colors. One generator feeds both the opening board and
/// every later refill, so a seed fixes the whole game.
pub trait BoardGenerator {
    /// Produces a full `config.field_size` board containing no run of
    /// [`MATCH_RUN`] or more equal colors.
    fn generate(&mut self, config: GameConfig) -> Board;

    /// Draws the color of one refilled cell from `[0, color_count)`.
    fn refill_color(&mut self, color_count: Color) -> Color;
}
