//! Attack queries: which squares a side could capture on, and whether a
//! king is currently attacked.
//!
//! Attack generation deliberately differs from quiet-move generation in two
//! places: a pawn attacks its two forward diagonals whether or not they are
//! occupied (and never attacks the squares it pushes to), and a king's
//! attack footprint is its ring only (castling never captures). Everything
//! else reuses the ordinary pseudo-legal generators.

use crate::board::Board;
use crate::errors::EngineError;
use crate::moves::{bishop_moves, king_moves, knight_moves, pawn_moves, queen_moves, rook_moves};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::side::Side;
use crate::square::Square;

/// Squares one piece could capture on, ignoring own-king safety.
pub fn attack_squares_of(board: &Board, piece: &Piece) -> Vec<Square> {
    match piece.kind {
        PieceKind::Pawn => pawn_moves::attack_squares(piece),
        PieceKind::Knight => destinations(knight_moves::pseudo_moves(board, piece)),
        PieceKind::Bishop => destinations(bishop_moves::pseudo_moves(board, piece)),
        PieceKind::Rook => destinations(rook_moves::pseudo_moves(board, piece)),
        PieceKind::Queen => destinations(queen_moves::pseudo_moves(board, piece)),
        PieceKind::King => destinations(king_moves::ring_moves(board, piece)),
    }
}

fn destinations(moves: Vec<crate::move_candidate::MoveCandidate>) -> Vec<Square> {
    moves.into_iter().map(|candidate| candidate.destination).collect()
}

/// Whether any piece of `attacker` reaches `target`.
pub fn is_square_attacked(board: &Board, attacker: Side, target: Square) -> bool {
    board
        .pieces_of(attacker)
        .iter()
        .any(|piece| attack_squares_of(board, piece).contains(&target))
}

/// Whether the side's own king square is attacked by the opponent.
pub fn is_side_in_check(board: &Board, side: Side) -> Result<bool, EngineError> {
    let king = board.king_of(side)?;
    Ok(is_square_attacked(board, side.opposite(), king.location))
}
