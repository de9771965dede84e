//! Dispatch over the closed set of piece kinds.

use crate::board::Board;
use crate::game::move_record::MoveRecord;
use crate::move_candidate::MoveCandidate;
use crate::moves::{bishop_moves, king_moves, knight_moves, pawn_moves, queen_moves, rook_moves};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::side::Side;
use crate::square::Square;

/// All pseudo-legal candidates for one piece.
///
/// # Arguments
///
/// * `board` - The position.
/// * `piece` - The piece to generate for.
/// * `last_move` - The most recent history entry (consulted by pawns for
///   the en passant window).
///
/// # Returns
///
/// * `Vec<MoveCandidate>` - The piece's pseudo-legal moves, ignoring
///   whether they leave the mover's own king attacked.
pub fn pseudo_moves_for_piece(
    board: &Board,
    piece: &Piece,
    last_move: Option<&MoveRecord>,
) -> Vec<MoveCandidate> {
    match piece.kind {
        PieceKind::Pawn => pawn_moves::pseudo_moves(board, piece, last_move),
        PieceKind::Knight => knight_moves::pseudo_moves(board, piece),
        PieceKind::Bishop => bishop_moves::pseudo_moves(board, piece),
        PieceKind::Rook => rook_moves::pseudo_moves(board, piece),
        PieceKind::Queen => queen_moves::pseudo_moves(board, piece),
        PieceKind::King => king_moves::pseudo_moves(board, piece),
    }
}

/// Every (origin, candidate) pair for one side.
pub fn pseudo_moves_for_side(
    board: &Board,
    side: Side,
    last_move: Option<&MoveRecord>,
) -> Vec<(Square, MoveCandidate)> {
    let mut result = Vec::new();
    for piece in board.pieces_of(side) {
        for candidate in pseudo_moves_for_piece(board, piece, last_move) {
            result.push((piece.location, candidate));
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_opening_position_has_twenty_pseudo_moves_per_side() {
        let board = Board::standard();
        assert_eq!(pseudo_moves_for_side(&board, Side::Light, None).len(), 20);
        assert_eq!(pseudo_moves_for_side(&board, Side::Dark, None).len(), 20);
    }
}
