//! Knight and king attack detectors.
//!
//! Fixed-offset pieces are checked directly: the queried cell is attacked
//! iff a matching piece of the attacking team stands on one of the offsets.

use crate::attacks::attack_result::AttackResult;
use crate::board_location::{move_board_location, BoardLocation};
use crate::chess_errors::ChessErrors;
use crate::moves::king_moves::KING_OFFSETS;
use crate::moves::knight_moves::KNIGHT_OFFSETS;
use crate::piece_class::PieceClass;
use crate::piece_team::PieceTeam;
use crate::position::position::Position;

fn scan_offsets(
    position: &Position,
    by: PieceTeam,
    target: BoardLocation,
    offsets: &[(i8, i8)],
    attacker_class: PieceClass,
) -> Result<AttackResult, ChessErrors> {
    for &(d_file, d_rank) in offsets {
        let cell = match move_board_location(&target, d_file, d_rank) {
            Ok(cell) => cell,
            Err(_) => continue,
        };
        if let Some(piece) = position.get(cell)? {
            if piece.team == by && piece.class == attacker_class {
                return Ok(AttackResult::found(cell));
            }
        }
    }
    Ok(AttackResult::clear())
}

/// Is `target` attacked by one of `by`'s knights?
pub fn knight_attacks(
    position: &Position,
    by: PieceTeam,
    target: BoardLocation,
) -> Result<AttackResult, ChessErrors> {
    scan_offsets(position, by, target, &KNIGHT_OFFSETS, PieceClass::Knight)
}

/// Is `target` attacked by `by`'s king?
pub fn king_attacks(
    position: &Position,
    by: PieceTeam,
    target: BoardLocation,
) -> Result<AttackResult, ChessErrors> {
    scan_offsets(position, by, target, &KING_OFFSETS, PieceClass::King)
}
