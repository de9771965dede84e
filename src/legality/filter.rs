//! The check-safety pass.
//!
//! Every pseudo-legal candidate of the side to move is executed on a
//! scratch copy of the board, the opponent's attacks are recomputed against
//! the result, and the candidate is discarded if the mover's own king would
//! then be attacked. Working on a scratch copy per candidate (rather than
//! mutating and restoring a shared board) means a captured piece is
//! physically absent during the recomputation: a captured defender cannot
//! "protect" the square it no longer occupies, and an en passant victim's
//! disappearance correctly exposes attacks along the shared rank.
//!
//! This pass is the most expensive operation in the engine; on an 8x8 board
//! the naive cost is accepted in exchange for correctness.

use crate::board::Board;
use crate::errors::EngineError;
use crate::game::move_record::MoveRecord;
use crate::legality::attacks::is_side_in_check;
use crate::move_candidate::{MoveCandidate, MoveFlavor};
use crate::moves::move_generator::pseudo_moves_for_side;
use crate::side::Side;
use crate::square::Square;

/// Executes a candidate on a scratch copy of the board: capture removal and
/// relocation only. Flag bookkeeping and history belong to the game layer;
/// attack recomputation does not read flags.
pub fn board_after_candidate(
    board: &Board,
    origin: Square,
    candidate: &MoveCandidate,
) -> Result<Board, EngineError> {
    let mut scratch = board.clone();

    // Clear whatever the move captures before the mover arrives
    if candidate.captures_opponent {
        let victim_square = if candidate.is_en_passant() {
            Square {
                row: origin.row,
                col: candidate.destination.col,
            }
        } else {
            candidate.destination
        };
        scratch.remove_piece_at(victim_square)?;
    }

    match scratch.piece_at_mut(origin) {
        Some(piece) => piece.location = candidate.destination,
        None => return Err(EngineError::VacantSquare { square: origin }),
    }

    if let MoveFlavor::Castling(partner) = candidate.flavor {
        if let Some(rook) = scratch.piece_at_mut(partner.origin) {
            rook.location = partner.destination;
        }
    }

    Ok(scratch)
}

/// Keeps only the candidates that leave the mover's own king unattacked.
pub fn filter_legal(
    board: &Board,
    side: Side,
    candidates: Vec<(Square, MoveCandidate)>,
) -> Result<Vec<(Square, MoveCandidate)>, EngineError> {
    let mut result = Vec::new();
    for (origin, candidate) in candidates {
        let scratch = board_after_candidate(board, origin, &candidate)?;
        if !is_side_in_check(&scratch, side)? {
            result.push((origin, candidate));
        }
    }
    Ok(result)
}

/// All legal moves for one side, as (origin, candidate) pairs.
pub fn legal_moves_for_side(
    board: &Board,
    side: Side,
    last_move: Option<&MoveRecord>,
) -> Result<Vec<(Square, MoveCandidate)>, EngineError> {
    filter_legal(board, side, pseudo_moves_for_side(board, side, last_move))
}
