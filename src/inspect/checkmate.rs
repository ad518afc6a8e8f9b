//! Checkmate inspection.
//!
//! `is_in_checkmate` answers whether `team`'s king is attacked with no
//! escape. The escape search is deliberately narrow, matching the original
//! engine's behavior rather than full chess legality: the eight adjacent
//! king cells are tried as hypothetical moves, plus a single capture path —
//! a defending rook taking a sole attacker. Blocking moves and captures by
//! other piece kinds are not searched; the move generators and search
//! inherit the same narrowed definition, so the two stay in agreement.

use crate::attacks::aggregate::is_attacked_by;
use crate::attacks::sliding_attacks::rook_attacks;
use crate::board_location::move_board_location;
use crate::chess_errors::ChessErrors;
use crate::moves::king_moves::KING_OFFSETS;
use crate::piece_team::PieceTeam;
use crate::position::position::{CellOccupancy, Position};

/// True iff `team`'s king is attacked and has no escape.
///
/// A position with no king for `team` is not checkmate; pseudo-legal
/// search lines can capture a king, and such positions are left to the
/// evaluator.
pub fn is_in_checkmate(position: &Position, team: PieceTeam) -> Result<bool, ChessErrors> {
    let king_location = match position.king_location(team) {
        Some(location) => location,
        None => return Ok(false),
    };

    let threat = is_attacked_by(position, team.opponent(), king_location)?;
    if !threat.attacked {
        return Ok(false);
    }

    // Adjacent escapes: an own-held or still-attacked destination fails.
    // The hypothetical child is built first so the vacated cell cannot
    // shield the king.
    for &(d_file, d_rank) in &KING_OFFSETS {
        let to = match move_board_location(&king_location, d_file, d_rank) {
            Ok(to) => to,
            Err(_) => continue,
        };
        if let CellOccupancy::Held(holder) = position.cell_occupancy(to)? {
            if holder == team {
                continue;
            }
        }
        let child = position.child_with_move(king_location, to)?;
        if !is_attacked_by(&child, team.opponent(), to)?.attacked {
            return Ok(false);
        }
    }

    // Narrow capture path: a defending rook may take the sole reported
    // attacker. The capture is simulated and the king re-tested.
    if let Some(attacker) = threat.attacker {
        let rook_reply = rook_attacks(position, team, attacker)?;
        if let Some(rook_location) = rook_reply.attacker {
            let child = position.child_with_move(rook_location, attacker)?;
            if !is_attacked_by(&child, team.opponent(), king_location)?.attacked {
                return Ok(false);
            }
        }
    }

    Ok(true)
}
