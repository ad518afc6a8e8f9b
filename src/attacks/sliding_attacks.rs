//! Sliding-piece attack detectors.
//!
//! Each detector answers "is this cell attacked by that team's rooks /
//! bishops / queens?" by scanning rays outward from the queried cell. The
//! first non-empty cell on a ray decides the outcome: a matching attacker
//! means the cell is attacked, any other piece blocks the ray. One
//! detector per piece category, parameterized by the attacking team — not
//! duplicated per color.

use crate::attacks::attack_result::AttackResult;
use crate::board_location::{move_board_location, BoardLocation};
use crate::chess_errors::ChessErrors;
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::rook_moves::ROOK_DIRECTIONS;
use crate::piece_class::PieceClass;
use crate::piece_team::PieceTeam;
use crate::position::position::Position;

fn scan_rays(
    position: &Position,
    by: PieceTeam,
    target: BoardLocation,
    directions: &[(i8, i8)],
    attacker_class: PieceClass,
) -> Result<AttackResult, ChessErrors> {
    for &(d_file, d_rank) in directions {
        let mut cursor = target;
        while let Ok(next) = move_board_location(&cursor, d_file, d_rank) {
            match position.get(next)? {
                Some(piece) => {
                    if piece.team == by && piece.class == attacker_class {
                        return Ok(AttackResult::found(next));
                    }
                    // Any other piece blocks this ray.
                    break;
                }
                None => cursor = next,
            }
        }
    }
    Ok(AttackResult::clear())
}

/// Is `target` attacked by one of `by`'s rooks?
pub fn rook_attacks(
    position: &Position,
    by: PieceTeam,
    target: BoardLocation,
) -> Result<AttackResult, ChessErrors> {
    scan_rays(position, by, target, &ROOK_DIRECTIONS, PieceClass::Rook)
}

/// Is `target` attacked by one of `by`'s bishops?
pub fn bishop_attacks(
    position: &Position,
    by: PieceTeam,
    target: BoardLocation,
) -> Result<AttackResult, ChessErrors> {
    scan_rays(position, by, target, &BISHOP_DIRECTIONS, PieceClass::Bishop)
}

/// Is `target` attacked by one of `by`'s queens? Queens match along both
/// the orthogonal and the diagonal ray sets.
pub fn queen_attacks(
    position: &Position,
    by: PieceTeam,
    target: BoardLocation,
) -> Result<AttackResult, ChessErrors> {
    let orthogonal = scan_rays(position, by, target, &ROOK_DIRECTIONS, PieceClass::Queen)?;
    if orthogonal.attacked {
        return Ok(orthogonal);
    }
    scan_rays(position, by, target, &BISHOP_DIRECTIONS, PieceClass::Queen)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::piece_record::PieceRecord;

    #[test]
    fn test_rook_attack_along_open_file() {
        let mut position = Position::new_empty();
        position
            .set((3, 0), PieceRecord::new(PieceClass::Rook, PieceTeam::Dark))
            .unwrap();
        let result = rook_attacks(&position, PieceTeam::Dark, (3, 6)).unwrap();
        assert!(result.attacked);
        assert_eq!(result.attacker, Some((3, 0)));
        assert!(!rook_attacks(&position, PieceTeam::Dark, (4, 6)).unwrap().attacked);
    }

    #[test]
    fn test_any_piece_blocks_the_ray() {
        let mut position = Position::new_empty();
        position
            .set((3, 0), PieceRecord::new(PieceClass::Rook, PieceTeam::Dark))
            .unwrap();
        position
            .set((3, 3), PieceRecord::new(PieceClass::Pawn, PieceTeam::Dark))
            .unwrap();
        assert!(!rook_attacks(&position, PieceTeam::Dark, (3, 6)).unwrap().attacked);
    }

    #[test]
    fn test_queen_matches_both_ray_sets() {
        let mut position = Position::new_empty();
        position
            .set((4, 4), PieceRecord::new(PieceClass::Queen, PieceTeam::Light))
            .unwrap();
        assert!(queen_attacks(&position, PieceTeam::Light, (4, 0)).unwrap().attacked);
        assert!(queen_attacks(&position, PieceTeam::Light, (0, 0)).unwrap().attacked);
        // A rook-category query does not match a queen: that ray is blocked.
        assert!(!rook_attacks(&position, PieceTeam::Light, (4, 0)).unwrap().attacked);
        // A queen two ranks behind a blocking piece does not attack through it.
        position
            .set((4, 2), PieceRecord::new(PieceClass::Knight, PieceTeam::Dark))
            .unwrap();
        assert!(!queen_attacks(&position, PieceTeam::Light, (4, 0)).unwrap().attacked);
    }
}
