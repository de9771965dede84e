use crate::board::Board;
use crate::move_candidate::MoveCandidate;
use crate::moves::shared::follow_ray;
use crate::piece::Piece;

/// Generates all pseudo-legal moves for a bishop.
/// Does not check for check.
pub fn pseudo_moves(board: &Board, bishop: &Piece) -> Vec<MoveCandidate> {
    let mut result = Vec::new();
    // Four diagonal rays until collision
    follow_ray(board, bishop.side, bishop.location, 1, 1, &mut result);
    follow_ray(board, bishop.side, bishop.location, 1, -1, &mut result);
    follow_ray(board, bishop.side, bishop.location, -1, 1, &mut result);
    follow_ray(board, bishop.side, bishop.location, -1, -1, &mut result);
    result
}
