//! Pawn attack detector.
//!
//! A cell is attacked by a pawn standing one rank behind it (along that
//! pawn's direction of advance) on an adjacent file. The en-passant special
//! case is also reported: an enemy pawn that just double-stepped is
//! attacked sideways by an adjacent pawn on the same rank, gated on the
//! double-step flag and the en-passant rank.

use crate::attacks::attack_result::AttackResult;
use crate::board_location::{move_board_location, BoardLocation};
use crate::chess_errors::ChessErrors;
use crate::moves::pawn_moves::{en_passant_rank, forward_rank_step};
use crate::piece_class::PieceClass;
use crate::piece_team::PieceTeam;
use crate::position::position::Position;

/// Is `target` attacked by one of `by`'s pawns?
pub fn pawn_attacks(
    position: &Position,
    by: PieceTeam,
    target: BoardLocation,
) -> Result<AttackResult, ChessErrors> {
    let step = forward_rank_step(by);

    // Ordinary diagonal attacks: the attacker sits one rank behind the
    // target on an adjacent file.
    for d_file in [-1i8, 1] {
        let cell = match move_board_location(&target, d_file, -step) {
            Ok(cell) => cell,
            Err(_) => continue,
        };
        if let Some(piece) = position.get(cell)? {
            if piece.team == by && piece.class == PieceClass::Pawn {
                return Ok(AttackResult::found(cell));
            }
        }
    }

    // En passant: the target itself is an enemy pawn flagged as having just
    // double-stepped, flanked on the en-passant rank.
    if let Some(victim) = position.get(target)? {
        if victim.team == by.opponent()
            && victim.class == PieceClass::Pawn
            && target.1 == en_passant_rank(by)
            && position.double_step_flag(victim.team, target.0)?
        {
            for d_file in [-1i8, 1] {
                let cell = match move_board_location(&target, d_file, 0) {
                    Ok(cell) => cell,
                    Err(_) => continue,
                };
                if let Some(piece) = position.get(cell)? {
                    if piece.team == by && piece.class == PieceClass::Pawn {
                        return Ok(AttackResult::found(cell));
                    }
                }
            }
        }
    }

    Ok(AttackResult::clear())
}
