use alloc::vec::Vec;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnginePhase {
    Idle,
    Selected,
    Swapping,
    Resolving,
}

impl EnginePhase {
    pub const fn can_act(self) -> bool {
        matches!(self, Self::Idle | Self::Selected)
    }
}

impl Default for EnginePhase {
    fn default() -> Self {
        Self::Idle
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SelectOutcome {
    NoChange,
    Selected,
    Deselected,
    Reselected,
    SwapStarted,
}

impl SelectOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DragOutcome {
    NoChange,
    SwapStarted,
}

impl DragOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// What the last acknowledgment unlocked.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum AckOutcome {
    /// The barrier still has outstanding cells.
    Pending,
    /// Matches were found; a destroy pass launched.
    Destroying,
    /// The swap produced no match; the inverse swap is in flight.
    Reverted,
    /// The destroy pass settled; fall and refill transitions launched.
    Falling,
    /// The board settled with no matches; input is unlocked.
    Idle,
}

impl AckOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Pending)
    }
}

/// The committed cell pair of an in-flight swap. `reversible` is cleared on
/// the inverse swap so a revert never revisits the match evaluation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingSwap {
    pub a: Coord2,
    pub b: Coord2,
    pub reversible: bool,
}

const BARRIER_INLINE: usize = 16;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum AckKind {
    Swap,
    Destroy,
    FallOrSpawn,
}

/// Identity-checked join over the animated transitions of one step: armed
/// with the exact coordinate set and advanced only when every cell reported
/// in. Misuse is a caller bug and panics.
#[derive(Clone, Debug, Default)]
struct AckBarrier {
    kind: Option<AckKind>,
    pending: SmallVec<[Coord2; BARRIER_INLINE]>,
}

impl AckBarrier {
    fn arm(&mut self, kind: AckKind, cells: impl IntoIterator<Item = Coord2>) {
        assert!(self.pending.is_empty(), "armed a barrier over an unsettled one");
        self.kind = Some(kind);
        self.pending.extend(cells);
        assert!(!self.pending.is_empty(), "armed a barrier with no transitions");
    }

    /// Removes `cell` from the pending set; true when the barrier drained.
    fn complete(&mut self, kind: AckKind, cell: Coord2) -> bool {
        assert_eq!(
            self.kind,
            Some(kind),
            "acknowledgment kind does not match the armed barrier"
        );
        let index = self
            .pending
            .iter()
            .position(|&pending| pending == cell)
            .unwrap_or_else(|| {
                panic!("cell ({}, {}) is not awaiting acknowledgment", cell.0, cell.1)
            });
        self.pending.swap_remove(index);
        if self.pending.is_empty() {
            self.kind = None;
            true
        } else {
            false
        }
    }

    fn pending(&self) -> &[Coord2] {
        &self.pending
    }
}

/// Authoritative match-3 board engine. It owns the grid, the interaction
/// state machine, cascade resolution, and scoring; a presentation layer
/// drives it with selection and drag intents, drains [`BoardEvent`]s to
/// animate, and reports every finished transition back through the `ack_*`
/// methods. Board state always reflects the final outcome of whatever is
/// currently animating.
#[derive(Clone, Debug)]
pub struct BoardEngine<G = RandomBoardGenerator> {
    config: GameConfig,
    board: Board,
    generator: G,
    phase: EnginePhase,
    selected: Option<Coord2>,
    drag_armed: bool,
    pending_swap: Option<PendingSwap>,
    barrier: AckBarrier,
    score: ScoreState,
    events: Vec<BoardEvent>,
}

impl BoardEngine {
    /// Generates a fresh board from `seed`; the same seed reproduces the same
    /// opening board and refill sequence.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self::with_generator(config, RandomBoardGenerator::new(seed))
    }
}

impl<G: BoardGenerator> BoardEngine<G> {
    pub fn with_generator(config: GameConfig, mut generator: G) -> Self {
        let board = generator.generate(config);
        Self::assemble(config, board, generator)
    }

    /// Starts from an injected grid instead of generating one. The grid must
    /// match `config.field_size`, stay inside the palette, and be full;
    /// pre-existing matches are allowed and resolve on the first swap.
    pub fn with_board(config: GameConfig, board: Board, generator: G) -> Result<Self> {
        if board.field_size() != config.field_size {
            return Err(GameError::InvalidBoardShape);
        }
        for row in 0..config.field_size {
            for col in 0..config.field_size {
                match board[(row, col)] {
                    Cell::Empty => return Err(GameError::IncompleteBoard),
                    Cell::Filled(color) if color >= config.color_count => {
                        return Err(GameError::InvalidColor);
                    }
                    Cell::Filled(_) => {}
                }
            }
        }
        Ok(Self::assemble(config, board, generator))
    }

    fn assemble(config: GameConfig, board: Board, generator: G) -> Self {
        Self {
            config,
            board,
            generator,
            phase: Default::default(),
            selected: None,
            drag_armed: false,
            pending_swap: None,
            barrier: AckBarrier::default(),
            score: ScoreState::new(config.matches_per_score),
            events: Vec::new(),
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn phase(&self) -> EnginePhase {
        self.phase
    }

    pub fn can_act(&self) -> bool {
        self.phase.can_act()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.board[coords]
    }

    pub fn selected(&self) -> Option<Coord2> {
        self.selected
    }

    pub fn pending_swap(&self) -> Option<PendingSwap> {
        self.pending_swap
    }

    pub fn score_state(&self) -> ScoreState {
        self.score
    }

    /// Cells whose animated transition has not been acknowledged yet. The
    /// engine never times out on its own; a host watchdog can poll this to
    /// detect lost completion callbacks.
    pub fn pending_acks(&self) -> &[Coord2] {
        self.barrier.pending()
    }

    /// Takes the queued events, oldest first.
    pub fn drain_events(&mut self) -> Vec<BoardEvent> {
        core::mem::take(&mut self.events)
    }

    /// Press intent on `cell`: selects it, toggles it off, retargets the
    /// highlight, or starts a swap with the adjacent previous selection.
    /// Ignored outside `Idle`/`Selected` and outside the board.
    pub fn select_cell(&mut self, cell: Coord2) -> SelectOutcome {
        if !self.phase.can_act() || !self.board.contains(cell) {
            return SelectOutcome::NoChange;
        }
        self.drag_armed = true;
        match self.selected {
            None => {
                self.selected = Some(cell);
                self.phase = EnginePhase::Selected;
                self.emit(BoardEvent::SelectionChanged(Some(cell)));
                SelectOutcome::Selected
            }
            Some(current) if current == cell => {
                self.selected = None;
                self.phase = EnginePhase::Idle;
                self.emit(BoardEvent::SelectionChanged(None));
                SelectOutcome::Deselected
            }
            Some(current) if manhattan(current, cell) == 1 => {
                self.begin_swap(current, cell, true);
                SelectOutcome::SwapStarted
            }
            Some(_) => {
                self.selected = Some(cell);
                self.emit(BoardEvent::SelectionChanged(Some(cell)));
                SelectOutcome::Reselected
            }
        }
    }

    /// Pointer movement relative to the pressed cell, quantized to whole
    /// cells. A unit step toward a neighbor swaps with it; anything else is
    /// ignored. Only live between a press and [`Self::release_gesture`].
    pub fn drag_gesture(&mut self, delta: (i8, i8)) -> DragOutcome {
        if !self.phase.can_act() || !self.drag_armed {
            return DragOutcome::NoChange;
        }
        let Some(selected) = self.selected else {
            return DragOutcome::NoChange;
        };
        let Some(direction) = Direction::from_delta(delta) else {
            return DragOutcome::NoChange;
        };
        let Some(target) = direction.offset_from(selected, self.config.field_size) else {
            return DragOutcome::NoChange;
        };
        self.begin_swap(selected, target, true);
        DragOutcome::SwapStarted
    }

    /// Ends the press; later drag deltas are ignored until the next press.
    pub fn release_gesture(&mut self) {
        self.drag_armed = false;
    }

    /// Acknowledges one half of the running swap animation. When both cells
    /// landed, the board is scanned once: matches launch a destroy pass, a
    /// reversible miss launches the inverse swap, and a settled miss unlocks
    /// input.
    pub fn ack_swap_complete(&mut self, cell: Coord2) -> AckOutcome {
        if !self.barrier.complete(AckKind::Swap, cell) {
            return AckOutcome::Pending;
        }
        let swap = self
            .pending_swap
            .take()
            .expect("swap barrier armed without a pending swap");
        if self.board.has_any_match() {
            self.phase = EnginePhase::Resolving;
            self.destroy_pass();
            AckOutcome::Destroying
        } else if swap.reversible {
            self.begin_swap(swap.a, swap.b, false);
            AckOutcome::Reverted
        } else {
            self.settle_idle();
            AckOutcome::Idle
        }
    }

    /// Acknowledges one faded-out cell of the destroy pass. When the last one
    /// lands, columns collapse and refills are drawn, and their transitions
    /// are launched together.
    pub fn ack_destroy_complete(&mut self, cell: Coord2) -> AckOutcome {
        if !self.barrier.complete(AckKind::Destroy, cell) {
            return AckOutcome::Pending;
        }
        let falls = self.board.collapse();
        let spawns = self.refill();
        self.barrier.arm(
            AckKind::FallOrSpawn,
            falls
                .iter()
                .map(|fall| fall.cell)
                .chain(spawns.iter().map(|spawn| spawn.cell)),
        );
        if !falls.is_empty() {
            self.emit(BoardEvent::CellsFell(falls));
        }
        self.emit(BoardEvent::CellsSpawned(spawns));
        AckOutcome::Falling
    }

    /// Acknowledges one landed fall or refill. When the whole set landed the
    /// board is re-scanned; new matches cascade into another destroy pass,
    /// otherwise the engine settles.
    pub fn ack_fall_or_spawn_complete(&mut self, cell: Coord2) -> AckOutcome {
        if !self.barrier.complete(AckKind::FallOrSpawn, cell) {
            return AckOutcome::Pending;
        }
        if self.board.has_any_match() {
            self.destroy_pass();
            AckOutcome::Destroying
        } else {
            self.settle_idle();
            AckOutcome::Idle
        }
    }

    fn begin_swap(&mut self, a: Coord2, b: Coord2, reversible: bool) {
        debug_assert_eq!(manhattan(a, b), 1);
        self.phase = EnginePhase::Swapping;
        self.drag_armed = false;
        if self.selected.take().is_some() {
            self.emit(BoardEvent::SelectionChanged(None));
        }
        self.board
            .swap_cells(a, b)
            .expect("swap coordinates validated by the caller");
        self.pending_swap = Some(PendingSwap { a, b, reversible });
        self.barrier.arm(AckKind::Swap, [a, b]);
        self.emit(BoardEvent::SwapStarted { a, b });
    }

    fn destroy_pass(&mut self) {
        let mask = self.board.matched_cells();
        let destroyed = mask.marked_cells();
        debug_assert!(!destroyed.is_empty(), "destroy pass entered without matches");
        let stepped = self.score.record_pass();
        self.emit(BoardEvent::ScoreChanged {
            matches: self.score.matches(),
            score: self.score.score(),
        });
        for &cell in &destroyed {
            self.board[cell] = Cell::Empty;
        }
        log::debug!(
            "Resolution pass {} destroys {} cells{}",
            self.score.matches(),
            destroyed.len(),
            if stepped { ", score stepped" } else { "" }
        );
        self.barrier.arm(AckKind::Destroy, destroyed.iter().copied());
        self.emit(BoardEvent::CellsDestroyed(destroyed));
    }

    /// Draws replacement colors column by column, top down. Each spawn starts
    /// as far above the top edge as there were holes in its column, so a
    /// column of refills enters as one contiguous block.
    fn refill(&mut self) -> Vec<CellSpawn> {
        let size = self.config.field_size;
        let mut spawns = Vec::new();
        for col in 0..size {
            let holes = self.board.holes_in_col(col);
            for row in 0..holes {
                let color = self.generator.refill_color(self.config.color_count);
                self.board[(row, col)] = Cell::Filled(color);
                spawns.push(CellSpawn {
                    cell: (row, col),
                    color,
                    start_offset: holes - row,
                });
            }
        }
        spawns
    }

    fn settle_idle(&mut self) {
        debug_assert!(self.board.is_full(), "settled with holes on the board");
        debug_assert!(!self.board.has_any_match(), "settled with matches on the board");
        self.phase = EnginePhase::Idle;
        self.selected = None;
        self.drag_armed = false;
        self.emit(BoardEvent::Idle);
    }

    fn emit(&mut self, event: BoardEvent) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::VecDeque;
    use alloc::vec;

    struct ScriptedGenerator {
        opening: Option<Board>,
        refills: VecDeque<Color>,
    }

    impl ScriptedGenerator {
        fn refills(colors: &[Color]) -> Self {
            Self {
                opening: None,
                refills: colors.iter().copied().collect(),
            }
        }
    }

    impl BoardGenerator for ScriptedGenerator {
        fn generate(&mut self, _config: GameConfig) -> Board {
            self.opening.take().expect("no scripted opening board")
        }

        fn refill_color(&mut self, _color_count: Color) -> Color {
            self.refills.pop_front().expect("scripted refills exhausted")
        }
    }

    fn engine_on<const N: usize>(
        rows: [[Color; N]; N],
        refills: &[Color],
    ) -> BoardEngine<ScriptedGenerator> {
        let board = Board::from_rows(rows);
        let config = GameConfig::new_unchecked(board.field_size(), 9, 3);
        BoardEngine::with_board(config, board, ScriptedGenerator::refills(refills)).unwrap()
    }

    /// Feeds every announced transition straight back as completed and
    /// returns the full event trace in emission order.
    fn drive_to_idle(engine: &mut BoardEngine<ScriptedGenerator>) -> Vec<BoardEvent> {
        let mut trace = engine.drain_events();
        let mut cursor = 0;
        while cursor < trace.len() {
            let event = trace[cursor].clone();
            cursor += 1;
            match event {
                BoardEvent::SwapStarted { a, b } => {
                    engine.ack_swap_complete(a);
                    engine.ack_swap_complete(b);
                }
                BoardEvent::CellsDestroyed(cells) => {
                    for cell in cells {
                        engine.ack_destroy_complete(cell);
                    }
                }
                BoardEvent::CellsFell(falls) => {
                    for fall in falls {
                        engine.ack_fall_or_spawn_complete(fall.cell);
                    }
                }
                BoardEvent::CellsSpawned(spawns) => {
                    for spawn in spawns {
                        engine.ack_fall_or_spawn_complete(spawn.cell);
                    }
                }
                _ => {}
            }
            trace.extend(engine.drain_events());
        }
        trace
    }

    fn quiet_4x4() -> [[Color; 4]; 4] {
        [
            [1, 2, 3, 4],
            [0, 3, 2, 3],
            [0, 2, 1, 2],
            [4, 0, 3, 1],
        ]
    }

    #[test]
    fn selection_toggles_and_retargets() {
        let mut engine = engine_on(quiet_4x4(), &[]);

        assert_eq!(engine.select_cell((0, 0)), SelectOutcome::Selected);
        assert_eq!(engine.phase(), EnginePhase::Selected);
        assert_eq!(engine.selected(), Some((0, 0)));

        assert_eq!(engine.select_cell((0, 0)), SelectOutcome::Deselected);
        assert_eq!(engine.phase(), EnginePhase::Idle);
        assert_eq!(engine.selected(), None);

        engine.select_cell((0, 0));
        assert_eq!(engine.select_cell((2, 2)), SelectOutcome::Reselected);
        assert_eq!(engine.selected(), Some((2, 2)));

        assert_eq!(engine.select_cell((9, 9)), SelectOutcome::NoChange);

        assert_eq!(
            engine.drain_events(),
            vec![
                BoardEvent::SelectionChanged(Some((0, 0))),
                BoardEvent::SelectionChanged(None),
                BoardEvent::SelectionChanged(Some((0, 0))),
                BoardEvent::SelectionChanged(Some((2, 2))),
            ]
        );
    }

    #[test]
    fn swaps_commit_to_the_board_before_the_animation_ends() {
        let mut engine = engine_on(quiet_4x4(), &[]);

        engine.select_cell((0, 0));
        engine.select_cell((0, 1));

        assert_eq!(engine.phase(), EnginePhase::Swapping);
        assert_eq!(engine.cell_at((0, 0)), Cell::Filled(2));
        assert_eq!(engine.cell_at((0, 1)), Cell::Filled(1));
    }

    #[test]
    fn input_is_locked_while_animations_run() {
        let mut engine = engine_on(quiet_4x4(), &[]);

        engine.select_cell((0, 0));
        engine.select_cell((0, 1));
        assert!(!engine.can_act());

        assert_eq!(engine.select_cell((2, 2)), SelectOutcome::NoChange);
        assert_eq!(engine.drag_gesture((0, 1)), DragOutcome::NoChange);
        assert_eq!(engine.selected(), None);
    }

    #[test]
    fn missed_swap_reverts_and_unlocks() {
        let mut engine = engine_on(quiet_4x4(), &[]);

        engine.select_cell((0, 0));
        engine.select_cell((0, 1));
        engine.drain_events();

        assert_eq!(engine.pending_acks().len(), 2);
        assert!(engine.pending_acks().contains(&(0, 0)));
        assert_eq!(engine.ack_swap_complete((0, 0)), AckOutcome::Pending);
        assert_eq!(engine.ack_swap_complete((0, 1)), AckOutcome::Reverted);

        // the inverse swap is animating now and is final
        assert_eq!(engine.phase(), EnginePhase::Swapping);
        assert_eq!(engine.pending_swap().map(|swap| swap.reversible), Some(false));
        assert_eq!(engine.ack_swap_complete((0, 1)), AckOutcome::Pending);
        assert_eq!(engine.ack_swap_complete((0, 0)), AckOutcome::Idle);

        assert_eq!(engine.phase(), EnginePhase::Idle);
        assert_eq!(engine.cell_at((0, 0)), Cell::Filled(1));
        assert_eq!(engine.cell_at((0, 1)), Cell::Filled(2));
        assert_eq!(engine.score_state().matches(), 0);

        let trace = engine.drain_events();
        assert_eq!(
            trace
                .iter()
                .filter(|event| matches!(event, BoardEvent::SwapStarted { .. }))
                .count(),
            1
        );
        assert_eq!(trace.last(), Some(&BoardEvent::Idle));
        assert!(
            trace
                .iter()
                .all(|event| !matches!(event, BoardEvent::ScoreChanged { .. }))
        );
    }

    #[test]
    fn matching_swap_destroys_falls_and_refills() {
        let mut engine = engine_on(
            [
                [0, 1, 5, 2, 3],
                [1, 2, 5, 3, 0],
                [5, 5, 8, 1, 2],
                [2, 3, 5, 0, 1],
                [3, 0, 2, 1, 4],
            ],
            &[4, 2, 0, 1, 0],
        );

        assert_eq!(engine.select_cell((2, 2)), SelectOutcome::Selected);
        assert_eq!(engine.select_cell((3, 2)), SelectOutcome::SwapStarted);

        let trace = drive_to_idle(&mut engine);

        assert_eq!(
            trace,
            vec![
                BoardEvent::SelectionChanged(Some((2, 2))),
                BoardEvent::SelectionChanged(None),
                BoardEvent::SwapStarted { a: (2, 2), b: (3, 2) },
                BoardEvent::ScoreChanged { matches: 1, score: 0 },
                BoardEvent::CellsDestroyed(vec![(0, 2), (1, 2), (2, 0), (2, 1), (2, 2)]),
                BoardEvent::CellsFell(vec![
                    CellFall { cell: (2, 0), distance: 1 },
                    CellFall { cell: (1, 0), distance: 1 },
                    CellFall { cell: (2, 1), distance: 1 },
                    CellFall { cell: (1, 1), distance: 1 },
                ]),
                BoardEvent::CellsSpawned(vec![
                    CellSpawn { cell: (0, 0), color: 4, start_offset: 1 },
                    CellSpawn { cell: (0, 1), color: 2, start_offset: 1 },
                    CellSpawn { cell: (0, 2), color: 0, start_offset: 3 },
                    CellSpawn { cell: (1, 2), color: 1, start_offset: 2 },
                    CellSpawn { cell: (2, 2), color: 0, start_offset: 1 },
                ]),
                BoardEvent::Idle,
            ]
        );

        assert_eq!(engine.phase(), EnginePhase::Idle);
        assert!(engine.board().is_full());
        assert!(!engine.board().has_any_match());
        assert_eq!(engine.score_state().matches(), 1);
        assert_eq!(engine.score_state().score(), 0);
        assert_eq!(engine.cell_at((3, 2)), Cell::Filled(8));
    }

    #[test]
    fn cascade_chains_until_no_match_remains() {
        let mut engine = engine_on(
            quiet_4x4(),
            // pass 1 builds a 2-column, pass 2 a 3-column, pass 3 settles
            &[2, 2, 2, 3, 3, 3, 4, 0, 4],
        );

        engine.select_cell((3, 0));
        engine.select_cell((3, 1));
        let trace = drive_to_idle(&mut engine);

        let score_trace: Vec<_> = trace
            .iter()
            .filter_map(|event| match event {
                BoardEvent::ScoreChanged { matches, score } => Some((*matches, *score)),
                _ => None,
            })
            .collect();
        assert_eq!(score_trace, vec![(1, 0), (2, 0), (3, 1)]);
        assert_eq!(
            trace
                .iter()
                .filter(|event| matches!(event, BoardEvent::CellsDestroyed(_)))
                .count(),
            3
        );

        assert_eq!(engine.phase(), EnginePhase::Idle);
        assert_eq!(engine.score_state().matches(), 3);
        assert_eq!(engine.score_state().score(), 1);
        assert!(engine.board().is_full());
        assert!(!engine.board().has_any_match());
        assert_eq!(engine.cell_at((0, 0)), Cell::Filled(4));
        assert_eq!(engine.cell_at((1, 0)), Cell::Filled(0));
        assert_eq!(engine.cell_at((2, 0)), Cell::Filled(4));
        assert_eq!(engine.cell_at((3, 0)), Cell::Filled(1));
    }

    #[test]
    fn drag_swaps_toward_the_neighbor() {
        let mut engine = engine_on(quiet_4x4(), &[]);

        engine.select_cell((0, 0));
        assert_eq!(engine.drag_gesture((1, 0)), DragOutcome::SwapStarted);
        assert_eq!(
            engine.pending_swap().map(|swap| (swap.a, swap.b)),
            Some(((0, 0), (1, 0)))
        );
    }

    #[test]
    fn drag_needs_a_live_press() {
        let mut engine = engine_on(quiet_4x4(), &[]);

        assert_eq!(engine.drag_gesture((1, 0)), DragOutcome::NoChange);

        engine.select_cell((1, 1));
        engine.release_gesture();
        assert_eq!(engine.drag_gesture((0, 1)), DragOutcome::NoChange);
        // the highlight itself survives the release
        assert_eq!(engine.selected(), Some((1, 1)));
    }

    #[test]
    fn drag_ignores_diagonals_and_board_edges() {
        let mut engine = engine_on(quiet_4x4(), &[]);

        engine.select_cell((0, 0));
        assert_eq!(engine.drag_gesture((1, 1)), DragOutcome::NoChange);
        assert_eq!(engine.drag_gesture((-1, 0)), DragOutcome::NoChange);
        assert_eq!(engine.drag_gesture((0, -1)), DragOutcome::NoChange);
        assert_eq!(engine.drag_gesture((2, 0)), DragOutcome::NoChange);
        assert_eq!(engine.phase(), EnginePhase::Selected);
    }

    #[test]
    fn with_board_validates_shape_palette_and_fullness() {
        let config = GameConfig::new_unchecked(4, 3, 3);

        let wrong_size = Board::from_rows([[0, 1], [1, 0]]);
        assert!(matches!(
            BoardEngine::with_board(config, wrong_size, ScriptedGenerator::refills(&[])),
            Err(GameError::InvalidBoardShape)
        ));

        let wild_color = Board::from_rows([
            [0, 1, 2, 0],
            [1, 2, 0, 1],
            [2, 0, 1, 2],
            [0, 1, 2, 7],
        ]);
        assert!(matches!(
            BoardEngine::with_board(config, wild_color, ScriptedGenerator::refills(&[])),
            Err(GameError::InvalidColor)
        ));

        let mut holey = Board::from_rows([
            [0, 1, 2, 0],
            [1, 2, 0, 1],
            [2, 0, 1, 2],
            [0, 1, 2, 0],
        ]);
        holey[(2, 2)] = Cell::Empty;
        assert!(matches!(
            BoardEngine::with_board(config, holey, ScriptedGenerator::refills(&[])),
            Err(GameError::IncompleteBoard)
        ));
    }

    #[test]
    fn injected_boards_may_contain_matches() {
        let config = GameConfig::new_unchecked(5, 9, 3);
        let board = Board::from_rows([
            [0, 1, 5, 2, 3],
            [1, 2, 5, 3, 0],
            [5, 5, 5, 1, 2],
            [2, 3, 8, 0, 1],
            [3, 0, 2, 1, 4],
        ]);

        let engine =
            BoardEngine::with_board(config, board, ScriptedGenerator::refills(&[])).unwrap();

        assert!(engine.board().has_any_match());
        assert!(engine.can_act());
    }

    #[test]
    fn seeded_engines_start_identically() {
        let config = GameConfig::default();

        let engine_a = BoardEngine::new(config, 99);
        let engine_b = BoardEngine::new(config, 99);

        assert_eq!(engine_a.board(), engine_b.board());
        assert_eq!(engine_a.phase(), EnginePhase::Idle);
        assert!(engine_a.can_act());
    }

    #[test]
    #[should_panic(expected = "acknowledgment kind")]
    fn stray_swap_ack_panics() {
        let mut engine = engine_on(quiet_4x4(), &[]);

        engine.ack_swap_complete((0, 0));
    }

    #[test]
    #[should_panic(expected = "not awaiting acknowledgment")]
    fn duplicate_swap_ack_panics() {
        let mut engine = engine_on(quiet_4x4(), &[]);

        engine.select_cell((0, 0));
        engine.select_cell((0, 1));
        engine.ack_swap_complete((0, 0));
        engine.ack_swap_complete((0, 0));
    }

    #[test]
    #[should_panic(expected = "acknowledgment kind")]
    fn mismatched_ack_kind_panics() {
        let mut engine = engine_on(quiet_4x4(), &[]);

        engine.select_cell((0, 0));
        engine.select_cell((0, 1));
        engine.ack_destroy_complete((0, 0));
    }
}
