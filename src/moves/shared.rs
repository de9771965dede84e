//! Collision helpers shared by the per-piece move generators.

use crate::board::{Board, SquareOccupancy};
use crate::move_candidate::MoveCandidate;
use crate::side::Side;
use crate::square::Square;

/// Classifies a single destination for a leaper-style move.
///
/// # Arguments
///
/// * `board` - The position to test against.
/// * `mover` - The side attempting the move.
/// * `destination` - The destination square.
///
/// # Returns
///
/// * `Some(MoveCandidate)` if the square is empty or holds an enemy piece.
/// * `None` if a friendly piece blocks the square.
pub fn try_single_destination(
    board: &Board,
    mover: Side,
    destination: Square,
) -> Option<MoveCandidate> {
    match board.occupancy_for(mover, destination) {
        SquareOccupancy::Friendly => None,
        SquareOccupancy::Enemy => Some(MoveCandidate::regular(destination, true)),
        SquareOccupancy::Empty => Some(MoveCandidate::regular(destination, false)),
    }
}

/// Walks one slider ray from `start`, adding candidates until blocked.
/// Stops inclusively on the first enemy piece (a capture) and exclusively
/// on the first friendly piece or the board edge.
pub fn follow_ray(
    board: &Board,
    mover: Side,
    start: Square,
    d_row: i8,
    d_col: i8,
    result: &mut Vec<MoveCandidate>,
) {
    for distance in 1..8 {
        if let Ok(stop) = start.offset(d_row * distance, d_col * distance) {
            match try_single_destination(board, mover, stop) {
                Some(candidate) => {
                    let capture = candidate.captures_opponent;
                    result.push(candidate);
                    if capture {
                        break;
                    }
                }
                None => break,
            }
        } else {
            break;
        }
    }
}
