use crate::board::Board;
use crate::game::move_record::MoveRecord;
use crate::move_candidate::{MoveCandidate, MoveFlavor};
use crate::piece::Piece;
use crate::square::Square;

/// Generates all pseudo-legal moves for a pawn: the single and double
/// pushes, the two diagonal captures, and the en passant capture derived
/// from the previous move. Does not check for check.
///
/// A pawn move landing on the far rank is an ordinary candidate here; the
/// pending-promotion consequence is handled by the game layer.
///
/// # Arguments
///
/// * `board` - The position.
/// * `pawn` - The pawn to move.
/// * `last_move` - The most recent history entry, if any.
///
/// # Returns
///
/// * `Vec<MoveCandidate>` - All pseudo-legal pawn moves.
pub fn pseudo_moves(
    board: &Board,
    pawn: &Piece,
    last_move: Option<&MoveRecord>,
) -> Vec<MoveCandidate> {
    let mut result = Vec::new();
    let forward = pawn.side.forward_direction();

    // Forward march, and the double step while the pawn has never moved.
    // Both need empty squares; the double step may not jump a blocker.
    if let Ok(stop) = pawn.location.offset(forward, 0) {
        if board.piece_at(stop).is_none() {
            result.push(MoveCandidate::regular(stop, false));
            if !pawn.has_moved {
                if let Ok(jump) = pawn.location.offset(2 * forward, 0) {
                    if board.piece_at(jump).is_none() {
                        result.push(MoveCandidate::regular(jump, false));
                    }
                }
            }
        }
    }

    // Diagonal captures require an enemy actually standing there
    for d_col in [-1, 1] {
        if let Ok(stop) = pawn.location.offset(forward, d_col) {
            if let Some(target) = board.piece_at(stop) {
                if target.side != pawn.side {
                    result.push(MoveCandidate::regular(stop, true));
                }
            }
        }
    }

    if let Some(candidate) = en_passant_candidate(pawn, last_move) {
        result.push(candidate);
    }

    result
}

/// The en passant window, judged from the most recent history entry alone:
/// the previous move was an enemy pawn double-stepping to the square beside
/// this pawn, and the capture lands on the square that pawn skipped over.
/// The window is open for exactly one ply and no state beyond the history
/// is consulted.
fn en_passant_candidate(pawn: &Piece, last_move: Option<&MoveRecord>) -> Option<MoveCandidate> {
    let record = last_move?;
    if record.side == pawn.side || !record.was_double_step() {
        return None;
    }
    // The victim must have landed directly beside this pawn
    if record.destination.row != pawn.location.row
        || (record.destination.col - pawn.location.col).abs() != 1
    {
        return None;
    }
    let skipped = Square {
        row: (record.origin.row + record.destination.row) / 2,
        col: record.destination.col,
    };
    // The skipped square sits diagonally forward of the capturing pawn
    if skipped.row != pawn.location.row + pawn.side.forward_direction() {
        return None;
    }
    Some(MoveCandidate {
        destination: skipped,
        captures_opponent: true,
        flavor: MoveFlavor::EnPassant,
    })
}

/// Squares this pawn attacks: both forward diagonals, occupied or not. A
/// pawn never attacks the squares it pushes to.
pub fn attack_squares(pawn: &Piece) -> Vec<Square> {
    let forward = pawn.side.forward_direction();
    let mut result = Vec::new();
    for d_col in [-1, 1] {
        if let Ok(stop) = pawn.location.offset(forward, d_col) {
            result.push(stop);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece_kind::PieceKind;
    use crate::side::Side;

    fn double_step_record(side: Side, origin: Square, destination: Square) -> MoveRecord {
        MoveRecord {
            side,
            kind_moved: PieceKind::Pawn,
            origin,
            destination,
            had_moved_before: false,
            prior_double_step_flag: false,
            captured: None,
            castling_partner_origin: None,
            castling_partner_destination: None,
            promotion: None,
        }
    }

    #[test]
    fn fresh_pawn_has_two_pushes() {
        let board = Board::empty();
        let pawn = Piece::new(PieceKind::Pawn, Side::Light, Square { row: 1, col: 4 });
        assert_eq!(pseudo_moves(&board, &pawn, None).len(), 2);
    }

    #[test]
    fn moved_pawn_loses_the_double_step() {
        let board = Board::empty();
        let mut pawn = Piece::new(PieceKind::Pawn, Side::Light, Square { row: 1, col: 4 });
        pawn.has_moved = true;
        assert_eq!(pseudo_moves(&board, &pawn, None).len(), 1);
    }

    #[test]
    fn blocked_pawn_cannot_push_or_jump() {
        let mut board = Board::empty();
        board.place(Piece::new(
            PieceKind::Knight,
            Side::Dark,
            Square { row: 2, col: 4 },
        ));
        let pawn = Piece::new(PieceKind::Pawn, Side::Light, Square { row: 1, col: 4 });
        assert!(pseudo_moves(&board, &pawn, None).is_empty());

        // A blocker on the far square only removes the jump
        let mut board = Board::empty();
        board.place(Piece::new(
            PieceKind::Knight,
            Side::Dark,
            Square { row: 3, col: 4 },
        ));
        assert_eq!(pseudo_moves(&board, &pawn, None).len(), 1);
    }

    #[test]
    fn diagonal_capture_needs_an_enemy() {
        let mut board = Board::empty();
        board.place(Piece::new(
            PieceKind::Bishop,
            Side::Dark,
            Square { row: 2, col: 3 },
        ));
        let pawn = Piece::new(PieceKind::Pawn, Side::Light, Square { row: 1, col: 4 });
        let moves = pseudo_moves(&board, &pawn, None);
        assert_eq!(moves.len(), 3);
        assert!(moves
            .iter()
            .any(|candidate| candidate.destination == Square { row: 2, col: 3 }
                && candidate.captures_opponent));
    }

    #[test]
    fn en_passant_offered_right_after_the_double_step() {
        let board = Board::empty();
        let mut pawn = Piece::new(PieceKind::Pawn, Side::Light, Square { row: 4, col: 4 });
        pawn.has_moved = true;
        let record = double_step_record(
            Side::Dark,
            Square { row: 6, col: 3 },
            Square { row: 4, col: 3 },
        );
        let moves = pseudo_moves(&board, &pawn, Some(&record));
        let capture = moves
            .iter()
            .find(|candidate| candidate.is_en_passant())
            .expect("the flanked pawn offers the capture in passing");
        assert_eq!(capture.destination, Square { row: 5, col: 3 });
        assert!(capture.captures_opponent);
    }

    #[test]
    fn en_passant_requires_adjacency_and_a_double_step() {
        let board = Board::empty();
        let mut pawn = Piece::new(PieceKind::Pawn, Side::Light, Square { row: 4, col: 4 });
        pawn.has_moved = true;

        // Same move but one column too far away
        let far = double_step_record(
            Side::Dark,
            Square { row: 6, col: 1 },
            Square { row: 4, col: 1 },
        );
        assert!(!pseudo_moves(&board, &pawn, Some(&far))
            .iter()
            .any(|candidate| candidate.is_en_passant()));

        // A single-step arrival beside the pawn opens no window
        let single = double_step_record(
            Side::Dark,
            Square { row: 5, col: 3 },
            Square { row: 4, col: 3 },
        );
        assert!(!pseudo_moves(&board, &pawn, Some(&single))
            .iter()
            .any(|candidate| candidate.is_en_passant()));
    }

    #[test]
    fn attack_squares_ignore_occupancy() {
        let pawn = Piece::new(PieceKind::Pawn, Side::Dark, Square { row: 6, col: 0 });
        assert_eq!(attack_squares(&pawn), vec![Square { row: 5, col: 1 }]);
    }
}
