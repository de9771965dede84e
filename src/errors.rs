//! Errors used throughout the rules engine.
//!
//! This module defines the canonical error type returned by game logic,
//! move generation, and state transitions. The enum `EngineError` is used
//! as the single error type across the crate to simplify propagation and
//! matching. Each variant carries contextual information where appropriate.
//!
//! Usage guidelines:
//! - Engine functions return `Result<..., EngineError>` for recoverable or
//!   expected failure modes (wrong-turn selections, illegal destinations,
//!   empty history).
//! - All caller-facing variants are locally recoverable: rejection happens
//!   before any mutation, so the caller simply re-queries and re-prompts.
//! - `MissingKing` and `VacantSquare` indicate a corrupted position and are
//!   not reachable through the public API while legality filtering holds.

use thiserror::Error;

use crate::piece_kind::PieceKind;
use crate::side::Side;
use crate::square::Square;

/// Unified error type for the rules engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// No piece of the side to move stands on the selected square.
    #[error("no piece of the side to move stands on {square:?}")]
    InvalidSelection { square: Square },

    /// The destination is not in the selected piece's current legal set.
    #[error("{destination:?} is not a legal destination for the piece on {origin:?}")]
    IllegalDestination { origin: Square, destination: Square },

    /// A terminal-rank pawn is still awaiting its promotion kind; no other
    /// move may be played until the choice arrives.
    #[error("the pawn on {square:?} must be promoted before play continues")]
    PromotionRequired { square: Square },

    /// The requested promotion kind is not one of queen, rook, bishop, or
    /// knight.
    #[error("{kind:?} is not a valid promotion target")]
    InvalidPromotion { kind: PieceKind },

    /// Undo was requested with an empty move history.
    #[error("there is no move to undo")]
    NothingToUndo,

    /// A square displacement left the board.
    #[error("({row}, {col}) is off the board")]
    OutOfBounds { row: i8, col: i8 },

    /// One side has no king on the board; the position is corrupted.
    #[error("{side:?} has no king on the board")]
    MissingKing { side: Side },

    /// A piece was expected on the square but it is empty.
    #[error("expected a piece on {square:?}")]
    VacantSquare { square: Square },
}
