//! The position index: placement lookup, occupancy queries, and piece
//! insertion/removal for both sides.

use crate::errors::EngineError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::side::Side;
use crate::square::Square;

/// Occupancy of a destination square relative to the side moving onto it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SquareOccupancy {
    Empty,
    Friendly,
    Enemy,
}

/// Piece placements for both sides. Kings live in the ordinary per-side
/// lists. Invariant: each square holds at most one piece.
#[derive(Clone, Debug)]
pub struct Board {
    pub light_pieces: Vec<Piece>,
    pub dark_pieces: Vec<Piece>,
}

impl Board {
    pub fn empty() -> Board {
        Board {
            light_pieces: Vec::new(),
            dark_pieces: Vec::new(),
        }
    }

    /// The standard game layout: one back rank of power pieces plus a full
    /// rank of pawns per side.
    pub fn standard() -> Board {
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        let mut board = Board::empty();
        for side in [Side::Light, Side::Dark] {
            for (col, kind) in back_rank.iter().enumerate() {
                let location = Square {
                    row: side.back_rank(),
                    col: col as i8,
                };
                board.place(Piece::new(*kind, side, location));
            }
            for col in 0..8 {
                let location = Square {
                    row: side.pawn_rank(),
                    col,
                };
                board.place(Piece::new(PieceKind::Pawn, side, location));
            }
        }
        board
    }

    pub fn pieces_of(&self, side: Side) -> &[Piece] {
        match side {
            Side::Light => &self.light_pieces,
            Side::Dark => &self.dark_pieces,
        }
    }

    fn pieces_of_mut(&mut self, side: Side) -> &mut Vec<Piece> {
        match side {
            Side::Light => &mut self.light_pieces,
            Side::Dark => &mut self.dark_pieces,
        }
    }

    /// Adds a piece to its owner's list. The caller is responsible for the
    /// one-piece-per-square invariant.
    pub fn place(&mut self, piece: Piece) {
        self.pieces_of_mut(piece.side).push(piece);
    }

    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.light_pieces
            .iter()
            .chain(self.dark_pieces.iter())
            .find(|piece| piece.location == square)
    }

    pub fn piece_at_mut(&mut self, square: Square) -> Option<&mut Piece> {
        self.light_pieces
            .iter_mut()
            .chain(self.dark_pieces.iter_mut())
            .find(|piece| piece.location == square)
    }

    pub fn side_piece_at(&self, side: Side, square: Square) -> Option<&Piece> {
        self.pieces_of(side)
            .iter()
            .find(|piece| piece.location == square)
    }

    /// Classifies a destination square for the given moving side.
    pub fn occupancy_for(&self, mover: Side, square: Square) -> SquareOccupancy {
        match self.piece_at(square) {
            None => SquareOccupancy::Empty,
            Some(piece) if piece.side == mover => SquareOccupancy::Friendly,
            Some(_) => SquareOccupancy::Enemy,
        }
    }

    /// Removes and returns the piece on the square.
    pub fn remove_piece_at(&mut self, square: Square) -> Result<Piece, EngineError> {
        if let Some(index) = self
            .light_pieces
            .iter()
            .position(|piece| piece.location == square)
        {
            return Ok(self.light_pieces.remove(index));
        }
        if let Some(index) = self
            .dark_pieces
            .iter()
            .position(|piece| piece.location == square)
        {
            return Ok(self.dark_pieces.remove(index));
        }
        Err(EngineError::VacantSquare { square })
    }

    /// Finds the side's king; a missing king means the position is corrupted.
    pub fn king_of(&self, side: Side) -> Result<&Piece, EngineError> {
        self.pieces_of(side)
            .iter()
            .find(|piece| piece.kind == PieceKind::King)
            .ok_or(EngineError::MissingKing { side })
    }
}
