//! Turn application and reversal.
//!
//! All three operations take a `GameState` by reference and return a new
//! value; rejection always happens before the clone is mutated, so a failed
//! call leaves nothing to clean up. The sequence for a successful move is:
//! remove the captured piece, relocate the mover (and the castling rook),
//! push the history record, then either suspend on a terminal-rank pawn or
//! finish the turn: flip the side to move, recompute both check flags, and
//! classify the new position through the legality filter.

use crate::errors::EngineError;
use crate::game::game_state::{GameOutcome, GameState};
use crate::game::move_record::MoveRecord;
use crate::move_candidate::MoveFlavor;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// The two shapes a successful move application can take.
#[derive(Debug)]
pub enum MoveOutcome {
    /// The turn is complete and play has passed to the opponent.
    Advanced(GameState),
    /// The move landed a pawn on its terminal rank; the turn is suspended
    /// until `choose_promotion` supplies the replacement kind.
    AwaitingPromotion(GameState),
}

impl MoveOutcome {
    /// The state inside either shape, for callers that route promotion
    /// handling elsewhere.
    pub fn state(self) -> GameState {
        match self {
            MoveOutcome::Advanced(state) => state,
            MoveOutcome::AwaitingPromotion(state) => state,
        }
    }
}

/// Plays the move from `origin` to `destination` for the side to move.
///
/// # Arguments
///
/// * `game` - The current state.
/// * `origin` - The square of the piece to move.
/// * `destination` - Where it should land.
///
/// # Returns
///
/// * `Ok(MoveOutcome::Advanced)` - The move was legal and the turn passed.
/// * `Ok(MoveOutcome::AwaitingPromotion)` - The move was legal but a pawn
///   now waits on its promotion kind.
/// * `Err(EngineError)` - The selection or destination was rejected; the
///   input state is untouched.
pub fn apply_move(
    game: &GameState,
    origin: Square,
    destination: Square,
) -> Result<MoveOutcome, EngineError> {
    if let Some(square) = game.pending_promotion {
        return Err(EngineError::PromotionRequired { square });
    }
    let mover = *game
        .board
        .side_piece_at(game.turn, origin)
        .ok_or(EngineError::InvalidSelection { square: origin })?;
    let candidate = game
        .legal_moves_from(origin)
        .into_iter()
        .find(|candidate| candidate.destination == destination)
        .ok_or(EngineError::IllegalDestination {
            origin,
            destination,
        })?;

    let mut next = game.clone();

    // Clear the captured piece first so the mover can land
    let captured = if candidate.captures_opponent {
        let victim_square = if candidate.is_en_passant() {
            Square {
                row: origin.row,
                col: destination.col,
            }
        } else {
            destination
        };
        Some(next.board.remove_piece_at(victim_square)?)
    } else {
        None
    };

    // Relocate the mover, remembering its pre-move flags for undo
    let mut record = {
        let piece = next
            .board
            .piece_at_mut(origin)
            .ok_or(EngineError::VacantSquare { square: origin })?;
        let had_moved_before = piece.has_moved;
        let prior_double_step_flag = piece.just_double_stepped;
        piece.settle_at(destination);
        MoveRecord {
            side: mover.side,
            kind_moved: mover.kind,
            origin,
            destination,
            had_moved_before,
            prior_double_step_flag,
            captured,
            castling_partner_origin: None,
            castling_partner_destination: None,
            promotion: None,
        }
    };

    // Castling relocates the rook in the same turn
    if let MoveFlavor::Castling(partner) = candidate.flavor {
        if let Some(rook) = next.board.piece_at_mut(partner.origin) {
            rook.settle_at(partner.destination);
        }
        record.castling_partner_origin = Some(partner.origin);
        record.castling_partner_destination = Some(partner.destination);
    }

    next.history.push(record);

    // A captured king cannot happen through legal play; close the game
    // rather than continue from a corrupted position
    if matches!(captured, Some(piece) if piece.kind == PieceKind::King) {
        next.outcome = GameOutcome::Checkmate {
            loser: game.turn.opposite(),
        };
        return Ok(MoveOutcome::Advanced(next));
    }

    // A pawn on its terminal rank suspends the turn until a kind is chosen
    if mover.kind == PieceKind::Pawn && destination.row == mover.side.promotion_rank() {
        next.pending_promotion = Some(destination);
        return Ok(MoveOutcome::AwaitingPromotion(next));
    }

    finish_turn(&mut next)?;
    Ok(MoveOutcome::Advanced(next))
}

/// Resolves a pending promotion: the pawn on `square` is destroyed and
/// replaced by a new piece of `kind` (marked moved), the history record is
/// stamped with the choice, and the suspended turn finishes.
pub fn choose_promotion(
    game: &GameState,
    square: Square,
    kind: PieceKind,
) -> Result<GameState, EngineError> {
    if game.pending_promotion != Some(square) {
        return Err(EngineError::InvalidSelection { square });
    }
    if !kind.is_promotion_target() {
        return Err(EngineError::InvalidPromotion { kind });
    }

    let mut next = game.clone();
    let pawn = next.board.remove_piece_at(square)?;
    let mut replacement = Piece::new(kind, pawn.side, square);
    replacement.has_moved = true;
    next.board.place(replacement);
    if let Some(record) = next.history.last_mut() {
        record.promotion = Some(kind);
    }
    next.pending_promotion = None;
    finish_turn(&mut next)?;
    Ok(next)
}

/// Pops the most recent record and reverses its effects exactly. Undoing
/// while a promotion is pending reverses the suspended pawn advance; a
/// completed promotion first shrinks back into the pawn it consumed. Undo
/// also reopens a finished game.
pub fn undo_move(game: &GameState) -> Result<GameState, EngineError> {
    let mut next = game.clone();
    let record = next.history.pop().ok_or(EngineError::NothingToUndo)?;

    // A completed promotion is reversed piece-first
    if record.promotion.is_some() {
        next.board.remove_piece_at(record.destination)?;
        next.board.place(Piece {
            kind: PieceKind::Pawn,
            side: record.side,
            location: record.destination,
            has_moved: true,
            just_double_stepped: false,
        });
    }

    // Walk the mover home and restore its pre-move flags
    match next.board.piece_at_mut(record.destination) {
        Some(piece) => {
            piece.location = record.origin;
            piece.has_moved = record.had_moved_before;
            piece.just_double_stepped = record.prior_double_step_flag;
        }
        None => {
            return Err(EngineError::VacantSquare {
                square: record.destination,
            })
        }
    }

    // The castling rook walks home too, unmoved again
    if let (Some(rook_origin), Some(rook_destination)) = (
        record.castling_partner_origin,
        record.castling_partner_destination,
    ) {
        if let Some(rook) = next.board.piece_at_mut(rook_destination) {
            rook.location = rook_origin;
            rook.has_moved = false;
        }
    }

    // The captured piece rejoins its owner exactly as it left
    if let Some(victim) = record.captured {
        next.board.place(victim);
    }

    next.pending_promotion = None;
    next.turn = record.side;
    next.refresh_check_and_outcome()?;
    Ok(next)
}

fn finish_turn(next: &mut GameState) -> Result<(), EngineError> {
    next.turn = next.turn.opposite();
    next.refresh_check_and_outcome()
}
