//! The engine's central value: piece placements, whose turn it is, check
//! flags, the move log, the promotion suspension, and the game outcome.
//!
//! `GameState` is a plain value with no ambient sharing: every operation in
//! `apply_move` takes a state by reference and returns a fresh one, so undo
//! and replay never depend on hidden mutable storage.

use crate::board::Board;
use crate::errors::EngineError;
use crate::game::move_record::MoveRecord;
use crate::legality::attacks::is_side_in_check;
use crate::legality::filter;
use crate::move_candidate::MoveCandidate;
use crate::moves::move_generator;
use crate::side::Side;
use crate::square::Square;

/// How the game stands. Only the legality filter's zero-legal-moves check
/// (and the king-capture safety fallback) ever produces a terminal value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    Ongoing,
    Checkmate { loser: Side },
    Stalemate,
}

/// Caller-facing snapshot of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Status {
    pub turn: Side,
    pub light_in_check: bool,
    pub dark_in_check: bool,
    pub awaiting_promotion: Option<Square>,
    pub outcome: GameOutcome,
}

#[derive(Clone, Debug)]
pub struct GameState {
    pub board: Board,
    pub turn: Side,
    pub light_in_check: bool,
    pub dark_in_check: bool,
    pub history: Vec<MoveRecord>,
    pub pending_promotion: Option<Square>,
    pub outcome: GameOutcome,
}

impl GameState {
    /// A fresh game from the standard setup, Light to move.
    pub fn new_game() -> GameState {
        GameState::from_board(Board::standard(), Side::Light)
            .expect("the standard setup always has both kings")
    }

    /// Builds a game around an arbitrary position. Check flags and the
    /// outcome are computed from the board, with an empty history.
    pub fn from_board(board: Board, turn: Side) -> Result<GameState, EngineError> {
        let mut state = GameState {
            board,
            turn,
            light_in_check: false,
            dark_in_check: false,
            history: Vec::new(),
            pending_promotion: None,
            outcome: GameOutcome::Ongoing,
        };
        state.refresh_check_and_outcome()?;
        Ok(state)
    }

    pub fn in_check(&self, side: Side) -> bool {
        match side {
            Side::Light => self.light_in_check,
            Side::Dark => self.dark_in_check,
        }
    }

    pub fn status(&self) -> Status {
        Status {
            turn: self.turn,
            light_in_check: self.light_in_check,
            dark_in_check: self.dark_in_check,
            awaiting_promotion: self.pending_promotion,
            outcome: self.outcome,
        }
    }

    /// Legal moves for the piece on `square`. Empty when the square is
    /// empty, holds an opponent piece, the game is over, or a promotion is
    /// pending (the paused position offers nothing until the choice
    /// arrives). Corrupted positions also yield nothing rather than panic.
    pub fn legal_moves_from(&self, square: Square) -> Vec<MoveCandidate> {
        if self.pending_promotion.is_some() || self.outcome != GameOutcome::Ongoing {
            return Vec::new();
        }
        let piece = match self.board.side_piece_at(self.turn, square) {
            Some(piece) => piece,
            None => return Vec::new(),
        };
        let pseudo = move_generator::pseudo_moves_for_piece(&self.board, piece, self.history.last());
        let paired = pseudo
            .into_iter()
            .map(|candidate| (square, candidate))
            .collect();
        match filter::filter_legal(&self.board, self.turn, paired) {
            Ok(survivors) => survivors
                .into_iter()
                .map(|(_, candidate)| candidate)
                .collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Recomputes both check flags and classifies the position for the side
    /// to move: zero legal moves is checkmate when in check, stalemate
    /// otherwise.
    pub(crate) fn refresh_check_and_outcome(&mut self) -> Result<(), EngineError> {
        self.light_in_check = is_side_in_check(&self.board, Side::Light)?;
        self.dark_in_check = is_side_in_check(&self.board, Side::Dark)?;
        let legal = filter::legal_moves_for_side(&self.board, self.turn, self.history.last())?;
        self.outcome = if legal.is_empty() {
            if self.in_check(self.turn) {
                GameOutcome::Checkmate { loser: self.turn }
            } else {
                GameOutcome::Stalemate
            }
        } else {
            GameOutcome::Ongoing
        };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;

    fn place(board: &mut Board, kind: PieceKind, side: Side, row: i8, col: i8) {
        board.place(Piece::new(kind, side, Square { row, col }));
    }

    #[test]
    fn twenty_legal_moves_from_the_initial_position() {
        let game = GameState::new_game();
        let mut total = 0;
        for piece in game.board.pieces_of(Side::Light) {
            total += game.legal_moves_from(piece.location).len();
        }
        assert_eq!(total, 20);
        assert_eq!(game.outcome, GameOutcome::Ongoing);
        assert!(!game.light_in_check);
        assert!(!game.dark_in_check);
    }

    #[test]
    fn wrong_side_and_empty_squares_offer_nothing() {
        let game = GameState::new_game();
        // Dark's pawn while Light is to move
        assert!(game.legal_moves_from(Square { row: 6, col: 0 }).is_empty());
        // The empty middle of the board
        assert!(game.legal_moves_from(Square { row: 4, col: 4 }).is_empty());
    }

    #[test]
    fn cornered_king_with_no_moves_is_stalemate() -> Result<(), EngineError> {
        // Dark king in the corner, boxed in by the light king and a guarded
        // rook, but not attacked.
        let mut board = Board::empty();
        place(&mut board, PieceKind::King, Side::Dark, 7, 0);
        place(&mut board, PieceKind::King, Side::Light, 5, 1);
        place(&mut board, PieceKind::Rook, Side::Light, 6, 1);
        let game = GameState::from_board(board, Side::Dark)?;
        assert!(!game.dark_in_check);
        assert_eq!(game.outcome, GameOutcome::Stalemate);
        Ok(())
    }

    #[test]
    fn the_same_geometry_under_attack_is_checkmate() -> Result<(), EngineError> {
        // Back-rank mate: the rook covers the whole back rank, the light
        // king covers every square of the escape rank.
        let mut board = Board::empty();
        place(&mut board, PieceKind::King, Side::Dark, 7, 1);
        place(&mut board, PieceKind::King, Side::Light, 5, 1);
        place(&mut board, PieceKind::Rook, Side::Light, 7, 7);
        let game = GameState::from_board(board, Side::Dark)?;
        assert!(game.dark_in_check);
        assert_eq!(game.outcome, GameOutcome::Checkmate { loser: Side::Dark });
        Ok(())
    }

    #[test]
    fn status_reports_the_snapshot() {
        let game = GameState::new_game();
        let status = game.status();
        assert_eq!(status.turn, Side::Light);
        assert_eq!(status.awaiting_promotion, None);
        assert_eq!(status.outcome, GameOutcome::Ongoing);
    }
}
