use crate::board::Board;
use crate::move_candidate::MoveCandidate;
use crate::moves::shared::follow_ray;
use crate::piece::Piece;

/// Generates all pseudo-legal moves for a rook.
/// Does not check for check.
pub fn pseudo_moves(board: &Board, rook: &Piece) -> Vec<MoveCandidate> {
    let mut result = Vec::new();
    // Four orthogonal rays until collision
    follow_ray(board, rook.side, rook.location, 1, 0, &mut result);
    follow_ray(board, rook.side, rook.location, -1, 0, &mut result);
    follow_ray(board, rook.side, rook.location, 0, 1, &mut result);
    follow_ray(board, rook.side, rook.location, 0, -1, &mut result);
    result
}
