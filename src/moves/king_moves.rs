use crate::board::Board;
use crate::legality::attacks::is_square_attacked;
use crate::move_candidate::{CastlingPartner, MoveCandidate, MoveFlavor};
use crate::moves::shared::try_single_destination;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Generates all pseudo-legal moves for a king: the eight ring squares plus
/// any available castling. The ring moves do not check for check (the
/// legality pass handles that); castling preconditions are enforced here
/// because they concern the squares crossed, not only the landing square.
pub fn pseudo_moves(board: &Board, king: &Piece) -> Vec<MoveCandidate> {
    let mut result = ring_moves(board, king);
    append_castling_candidates(board, king, &mut result);
    result
}

/// The eight one-square king moves. Also the king's attack footprint, which
/// is why castling is kept out of this function.
pub fn ring_moves(board: &Board, king: &Piece) -> Vec<MoveCandidate> {
    let mut result = Vec::new();
    for d_row in -1..=1 {
        for d_col in -1..=1 {
            if (d_row == 0) && (d_col == 0) {
                continue;
            }
            if let Ok(stop) = king.location.offset(d_row, d_col) {
                if let Some(candidate) = try_single_destination(board, king.side, stop) {
                    result.push(candidate);
                }
            }
        }
    }
    result
}

/// Castling requires an unmoved king on its start square, an unmoved rook
/// on its home corner, an empty gap between them, and a safe passage: the
/// king may not start in check nor cross an attacked square. Each crossed
/// square is tested with the king relocated onto it so sliders see through
/// the vacated start square.
fn append_castling_candidates(board: &Board, king: &Piece, result: &mut Vec<MoveCandidate>) {
    let back = king.side.back_rank();
    if king.has_moved || king.location != (Square { row: back, col: 4 }) {
        return;
    }
    // A king in check may not castle out of it
    if is_square_attacked(board, king.side.opposite(), king.location) {
        return;
    }

    // (rook home column, king landing column, rook landing column)
    for (rook_col, king_dest_col, rook_dest_col) in [(7, 6, 5), (0, 2, 3)] {
        let rook_home = Square {
            row: back,
            col: rook_col,
        };
        let rook = match board.side_piece_at(king.side, rook_home) {
            Some(piece) if piece.kind == PieceKind::Rook && !piece.has_moved => piece,
            _ => continue,
        };

        // Every square strictly between rook and king must be empty
        let (low, high) = if rook_col < 4 { (rook_col + 1, 4) } else { (5, rook_col) };
        if (low..high).any(|col| board.piece_at(Square { row: back, col }).is_some()) {
            continue;
        }

        // Walk the king across; any attacked square on the way vetoes
        let step: i8 = if king_dest_col > 4 { 1 } else { -1 };
        let mut passage_attacked = false;
        let mut col = 4 + step;
        loop {
            let transit = Square { row: back, col };
            let mut scratch = board.clone();
            if let Some(scratch_king) = scratch.piece_at_mut(king.location) {
                scratch_king.location = transit;
            }
            if is_square_attacked(&scratch, king.side.opposite(), transit) {
                passage_attacked = true;
                break;
            }
            if col == king_dest_col {
                break;
            }
            col += step;
        }
        if passage_attacked {
            continue;
        }

        result.push(MoveCandidate {
            destination: Square {
                row: back,
                col: king_dest_col,
            },
            captures_opponent: false,
            flavor: MoveFlavor::Castling(CastlingPartner {
                origin: rook.location,
                destination: Square {
                    row: back,
                    col: rook_dest_col,
                },
            }),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::side::Side;

    fn unmoved(kind: PieceKind, side: Side, row: i8, col: i8) -> Piece {
        Piece::new(kind, side, Square { row, col })
    }

    fn castling_destinations(board: &Board, king: &Piece) -> Vec<Square> {
        pseudo_moves(board, king)
            .into_iter()
            .filter(|candidate| candidate.is_castling())
            .map(|candidate| candidate.destination)
            .collect()
    }

    #[test]
    fn lone_king_has_the_full_ring() {
        let board = Board::empty();
        let king = unmoved(PieceKind::King, Side::Light, 3, 3);
        assert_eq!(pseudo_moves(&board, &king).len(), 8);
    }

    #[test]
    fn both_castlings_offered_over_an_empty_back_rank() {
        let mut board = Board::empty();
        let king = unmoved(PieceKind::King, Side::Light, 0, 4);
        board.place(king);
        board.place(unmoved(PieceKind::Rook, Side::Light, 0, 0));
        board.place(unmoved(PieceKind::Rook, Side::Light, 0, 7));
        let destinations = castling_destinations(&board, &king);
        assert!(destinations.contains(&Square { row: 0, col: 6 }));
        assert!(destinations.contains(&Square { row: 0, col: 2 }));
    }

    #[test]
    fn castling_carries_the_rook_vector() {
        let mut board = Board::empty();
        let king = unmoved(PieceKind::King, Side::Dark, 7, 4);
        board.place(king);
        board.place(unmoved(PieceKind::Rook, Side::Dark, 7, 7));
        let candidate = pseudo_moves(&board, &king)
            .into_iter()
            .find(|candidate| candidate.is_castling())
            .expect("kingside castling is available");
        assert_eq!(candidate.destination, Square { row: 7, col: 6 });
        assert_eq!(
            candidate.flavor,
            MoveFlavor::Castling(CastlingPartner {
                origin: Square { row: 7, col: 7 },
                destination: Square { row: 7, col: 5 },
            })
        );
    }

    #[test]
    fn moved_pieces_forfeit_castling() {
        let mut board = Board::empty();
        let king = unmoved(PieceKind::King, Side::Light, 0, 4);
        board.place(king);
        let mut rook = unmoved(PieceKind::Rook, Side::Light, 0, 7);
        rook.has_moved = true;
        board.place(rook);
        assert!(castling_destinations(&board, &king).is_empty());
    }

    #[test]
    fn an_occupied_gap_blocks_castling() {
        let mut board = Board::empty();
        let king = unmoved(PieceKind::King, Side::Light, 0, 4);
        board.place(king);
        board.place(unmoved(PieceKind::Rook, Side::Light, 0, 0));
        board.place(unmoved(PieceKind::Knight, Side::Light, 0, 1));
        assert!(castling_destinations(&board, &king).is_empty());
    }

    #[test]
    fn an_attacked_transit_square_blocks_castling() {
        // The king's start and landing squares are safe; only the crossed
        // square at column 5 is covered by the enemy rook.
        let mut board = Board::empty();
        let king = unmoved(PieceKind::King, Side::Light, 0, 4);
        board.place(king);
        board.place(unmoved(PieceKind::Rook, Side::Light, 0, 7));
        board.place(unmoved(PieceKind::Rook, Side::Dark, 5, 5));
        assert!(castling_destinations(&board, &king).is_empty());
    }

    #[test]
    fn a_checked_king_may_not_castle() {
        let mut board = Board::empty();
        let king = unmoved(PieceKind::King, Side::Light, 0, 4);
        board.place(king);
        board.place(unmoved(PieceKind::Rook, Side::Light, 0, 7));
        board.place(unmoved(PieceKind::Rook, Side::Dark, 5, 4));
        assert!(castling_destinations(&board, &king).is_empty());
    }
}
