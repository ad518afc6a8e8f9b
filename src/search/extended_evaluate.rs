//! Extended evaluation terms.
//!
//! Independent, separately testable sub-scores layered over the material
//! evaluator: pawn-structure counts and move-count mobility. The isolated
//! pawn term is not implemented yet and says so, rather than returning a
//! silent 0 that would mask the gap during tuning.

use crate::chess_errors::ChessErrors;
use crate::moves::pawn_moves::forward_rank_step;
use crate::piece_class::PieceClass;
use crate::piece_team::PieceTeam;
use crate::position::position::Position;
use crate::scoring::Score;
use crate::search::evaluate::evaluate_position;

const DOUBLED_PAWN_PENALTY: Score = 0.5;
const BLOCKED_PAWN_PENALTY: Score = 0.25;
const MOBILITY_WEIGHT: Score = 0.1;

/// Count `team`'s pawns standing behind another own pawn on the same file.
pub fn doubled_pawn_count(position: &Position, team: PieceTeam) -> Result<u32, ChessErrors> {
    let mut doubled = 0u32;
    for file in 0..8i8 {
        let mut pawns_on_file = 0u32;
        for rank in 0..8i8 {
            if let Some(piece) = position.get((file, rank))? {
                if piece.team == team && piece.class == PieceClass::Pawn {
                    pawns_on_file += 1;
                }
            }
        }
        doubled += pawns_on_file.saturating_sub(1);
    }
    Ok(doubled)
}

/// Count `team`'s pawns whose forward cell is occupied by any piece.
pub fn blocked_pawn_count(position: &Position, team: PieceTeam) -> Result<u32, ChessErrors> {
    let step = forward_rank_step(team);
    let mut blocked = 0u32;
    for rank in 0..8i8 {
        for file in 0..8i8 {
            let piece = match position.get((file, rank))? {
                Some(piece) => piece,
                None => continue,
            };
            if piece.team != team || piece.class != PieceClass::Pawn {
                continue;
            }
            let ahead = (file, rank + step);
            if ahead.1 < 0 || ahead.1 > 7 {
                continue;
            }
            if position.get(ahead)?.is_some() {
                blocked += 1;
            }
        }
    }
    Ok(blocked)
}

/// Count `team`'s pawns with no own pawn on either neighboring file.
///
/// Not wired up yet; the term needs tuning against the doubled-pawn
/// penalty before it can be trusted.
pub fn isolated_pawn_count(_position: &Position, _team: PieceTeam) -> Result<u32, ChessErrors> {
    Err(ChessErrors::FeatureNotImplementedYet)
}

/// Move-count mobility: how many successor positions `team` has.
pub fn mobility_count(position: &Position, team: PieceTeam) -> Result<usize, ChessErrors> {
    Ok(position.expand(team)?.len())
}

/// Material evaluation plus the implemented structure and mobility terms.
pub fn evaluate_position_extended(
    position: &Position,
    depth: usize,
) -> Result<Score, ChessErrors> {
    let mut total = evaluate_position(position, depth)?;

    let light_doubled = doubled_pawn_count(position, PieceTeam::Light)? as Score;
    let dark_doubled = doubled_pawn_count(position, PieceTeam::Dark)? as Score;
    total += DOUBLED_PAWN_PENALTY * (dark_doubled - light_doubled);

    let light_blocked = blocked_pawn_count(position, PieceTeam::Light)? as Score;
    let dark_blocked = blocked_pawn_count(position, PieceTeam::Dark)? as Score;
    total += BLOCKED_PAWN_PENALTY * (dark_blocked - light_blocked);

    let light_mobility = mobility_count(position, PieceTeam::Light)? as Score;
    let dark_mobility = mobility_count(position, PieceTeam::Dark)? as Score;
    total += MOBILITY_WEIGHT * (light_mobility - dark_mobility);

    Ok(total)
}
