//! Aggregate attack detector.
//!
//! ORs together the six piece-category detectors for one attacking team and
//! reports the first attacking cell found. King-safety filtering and the
//! checkmate inspector go through this single entry point.

use crate::attacks::attack_result::AttackResult;
use crate::attacks::pawn_attacks::pawn_attacks;
use crate::attacks::sliding_attacks::{bishop_attacks, queen_attacks, rook_attacks};
use crate::attacks::stepping_attacks::{king_attacks, knight_attacks};
use crate::board_location::BoardLocation;
use crate::chess_errors::ChessErrors;
use crate::piece_team::PieceTeam;
use crate::position::position::Position;

/// Is `target` attacked by any piece of team `by`?
pub fn is_attacked_by(
    position: &Position,
    by: PieceTeam,
    target: BoardLocation,
) -> Result<AttackResult, ChessErrors> {
    let detectors: [fn(&Position, PieceTeam, BoardLocation) -> Result<AttackResult, ChessErrors>;
        6] = [
        queen_attacks,
        rook_attacks,
        bishop_attacks,
        knight_attacks,
        pawn_attacks,
        king_attacks,
    ];
    for detector in detectors {
        let result = detector(position, by, target)?;
        if result.attacked {
            return Ok(result);
        }
    }
    Ok(AttackResult::clear())
}
