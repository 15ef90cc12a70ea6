//! Fixed-point reduction loop.

use diagoku_core::{Board, Topology};

use crate::{AssignmentLog, Contradiction, strategy::BoxedStrategy};

/// Applies the strategies in rounds until the solved-cell count stops
/// increasing ("stalled") or a contradiction appears.
///
/// One round is one pass of each strategy in order. After every round the
/// board is scanned for a cell with no remaining candidates; if one exists
/// the reduction fails immediately and the board must be discarded by the
/// caller. Candidate sets only ever shrink, which bounds the loop.
///
/// On success the board is left at the stalled fixed point, which may be
/// fully solved or merely partially constrained.
///
/// # Errors
///
/// Returns [`Contradiction`] carrying the first emptied cell.
pub fn reduce(
    board: &mut Board,
    topology: &Topology,
    strategies: &[BoxedStrategy],
    log: &mut AssignmentLog,
) -> Result<(), Contradiction> {
    loop {
        let solved_before = board.solved_count();
        for strategy in strategies {
            strategy.apply(board, topology, log);
        }
        let solved_after = board.solved_count();
        log::trace!(
            "reduction round: {solved_before} -> {solved_after} solved, {} candidates left",
            board.candidate_total()
        );

        if let Some(cell) = board.first_empty() {
            return Err(Contradiction { cell });
        }
        if solved_after == solved_before {
            return Ok(());
        }
    }
}
