use crate::board::Board;
use crate::move_candidate::MoveCandidate;
use crate::moves::shared::follow_ray;
use crate::piece::Piece;

/// Generates all pseudo-legal moves for a queen: the union of the rook and
/// bishop ray sets. Does not check for check.
pub fn pseudo_moves(board: &Board, queen: &Piece) -> Vec<MoveCandidate> {
    let mut result = Vec::new();
    // Four orthogonal rays until collision
    follow_ray(board, queen.side, queen.location, 1, 0, &mut result);
    follow_ray(board, queen.side, queen.location, -1, 0, &mut result);
    follow_ray(board, queen.side, queen.location, 0, 1, &mut result);
    follow_ray(board, queen.side, queen.location, 0, -1, &mut result);
    // Four diagonal rays until collision
    follow_ray(board, queen.side, queen.location, 1, 1, &mut result);
    follow_ray(board, queen.side, queen.location, 1, -1, &mut result);
    follow_ray(board, queen.side, queen.location, -1, 1, &mut result);
    follow_ray(board, queen.side, queen.location, -1, -1, &mut result);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece_kind::PieceKind;
    use crate::side::Side;
    use crate::square::Square;

    #[test]
    fn twenty_seven_moves_from_the_center_of_an_empty_board() {
        let board = Board::empty();
        let queen = Piece::new(PieceKind::Queen, Side::Light, Square { row: 3, col: 3 });
        assert_eq!(pseudo_moves(&board, &queen).len(), 27);
    }
}
