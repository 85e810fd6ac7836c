//! Settle-throughput probe: drives one full swap and cascade on a batch of
//! seeded boards and prints how the passes spread out.

use std::time::Instant;

use trigem_core::{Board, BoardEngine, BoardEvent, Coord2, GameConfig};

const SEEDS: u64 = 1000;

fn first_matching_swap(board: &Board) -> Option<(Coord2, Coord2)> {
    let size = board.field_size();
    for row in 0..size {
        for col in 0..size {
            for target in [(row + 1, col), (row, col + 1)] {
                if target.0 >= size || target.1 >= size {
                    continue;
                }
                let mut trial = board.clone();
                trial.swap_cells((row, col), target).unwrap();
                if trial.has_any_match() {
                    return Some(((row, col), target));
                }
            }
        }
    }
    None
}

/// Feeds every announced transition straight back as completed; returns the
/// pass count and destroyed-cell total of the settle.
fn drive_to_idle(engine: &mut BoardEngine) -> (u64, u64) {
    let mut passes = 0u64;
    let mut destroyed = 0u64;
    let mut queue = engine.drain_events();
    while let Some(event) = queue.pop() {
        match event {
            BoardEvent::SwapStarted { a, b } => {
                engine.ack_swap_complete(a);
                engine.ack_swap_complete(b);
            }
            BoardEvent::CellsDestroyed(cells) => {
                passes += 1;
                destroyed += cells.len() as u64;
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
        queue.extend(engine.drain_events());
    }
    (passes, destroyed)
}

fn main() {
    let config = GameConfig::default();
    let mut settled = 0u64;
    let mut skipped = 0u64;
    let mut total_passes = 0u64;
    let mut total_destroyed = 0u64;
    let mut longest_cascade = 0u64;

    let started = Instant::now();
    for seed in 0..SEEDS {
        let mut engine = BoardEngine::new(config, seed);
        let Some((from, to)) = first_matching_swap(engine.board()) else {
            skipped += 1;
            continue;
        };
        engine.select_cell(from);
        engine.select_cell(to);
        let (passes, destroyed) = drive_to_idle(&mut engine);
        settled += 1;
        total_passes += passes;
        total_destroyed += destroyed;
        longest_cascade = longest_cascade.max(passes);
    }
    let elapsed = started.elapsed();

    println!(
        "settled {settled} boards in {elapsed:?} ({skipped} seeds had no matching swap)"
    );
    println!(
        "passes: {total_passes} total, {:.3} per settle, longest cascade {longest_cascade}",
        total_passes as f64 / settled.max(1) as f64
    );
    println!(
        "cells destroyed: {total_destroyed} total, {:.3} per settle",
        total_destroyed as f64 / settled.max(1) as f64
    );
}
