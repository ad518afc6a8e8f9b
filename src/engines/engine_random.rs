//! Random-move engine.
//!
//! Expands the position and picks one successor uniformly. Useful as a
//! baseline opponent and as a cheap driver for exercising the move
//! generators over long games. The generator is passed in so tests can
//! seed it and replay a choice.

use rand::Rng;

use crate::chess_errors::ChessErrors;
use crate::piece_team::PieceTeam;
use crate::position::position::Position;

/// Pick a uniformly random successor of `position` for `turn`.
///
/// Returns `ChessErrors::NoLegalMoves` when the side to move has no
/// successor at all.
pub fn choose_random_position<R: Rng + ?Sized>(
    position: &Position,
    turn: PieceTeam,
    rng: &mut R,
) -> Result<Position, ChessErrors> {
    let mut children = position.expand(turn)?;
    if children.is_empty() {
        return Err(ChessErrors::NoLegalMoves);
    }
    let pick = rng.random_range(0..children.len());
    Ok(children.swap_remove(pick))
}
