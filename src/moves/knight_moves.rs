use crate::board::Board;
use crate::move_candidate::MoveCandidate;
use crate::moves::shared::try_single_destination;
use crate::piece::Piece;

/// The knight's fixed offset set.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Generates all pseudo-legal moves for a knight.
/// Does not check for check.
///
/// # Arguments
///
/// * `board` - The position.
/// * `knight` - The knight to move.
///
/// # Returns
///
/// * `Vec<MoveCandidate>` - All in-bounds, non-friendly destinations.
pub fn pseudo_moves(board: &Board, knight: &Piece) -> Vec<MoveCandidate> {
    let mut result = Vec::new();
    for (d_row, d_col) in KNIGHT_OFFSETS {
        if let Ok(stop) = knight.location.offset(d_row, d_col) {
            if let Some(candidate) = try_single_destination(board, knight.side, stop) {
                result.push(candidate);
            }
        }
    }
    result
}
