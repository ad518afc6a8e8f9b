use crate::board_location::BoardLocation;
use crate::chess_errors::ChessErrors;
use crate::moves::sliding::walk_rays;
use crate::piece_team::PieceTeam;
use crate::position::position::Position;

/// Rook direction vectors, counter-clockwise from east.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// Generates all child positions for the rook on `from`.
pub fn generate_rook_moves(
    position: &Position,
    team: PieceTeam,
    from: BoardLocation,
) -> Result<Vec<Position>, ChessErrors> {
    walk_rays(position, team, from, &ROOK_DIRECTIONS)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::piece_class::PieceClass;
    use crate::piece_record::PieceRecord;

    #[test]
    fn test_central_rook_on_empty_board() {
        let mut position = Position::new_empty();
        position
            .set((3, 3), PieceRecord::new(PieceClass::Rook, PieceTeam::Light))
            .unwrap();
        let children = generate_rook_moves(&position, PieceTeam::Light, (3, 3)).unwrap();
        assert_eq!(children.len(), 14);
    }

    #[test]
    fn test_enemy_piece_caps_ray_with_a_capture() {
        let mut position = Position::new_empty();
        position
            .set((0, 0), PieceRecord::new(PieceClass::Rook, PieceTeam::Light))
            .unwrap();
        position
            .set((0, 3), PieceRecord::new(PieceClass::Pawn, PieceTeam::Dark))
            .unwrap();
        let children = generate_rook_moves(&position, PieceTeam::Light, (0, 0)).unwrap();
        // North ray: (0,1), (0,2), capture on (0,3). East ray: 7 cells.
        assert_eq!(children.len(), 10);
        assert!(children.iter().any(|child| {
            child.get((0, 3)).unwrap()
                == Some(PieceRecord::new(PieceClass::Rook, PieceTeam::Light))
        }));
    }

    #[test]
    fn test_own_piece_caps_ray_without_a_capture() {
        let mut position = Position::new_empty();
        position
            .set((0, 0), PieceRecord::new(PieceClass::Rook, PieceTeam::Light))
            .unwrap();
        position
            .set((0, 3), PieceRecord::new(PieceClass::Pawn, PieceTeam::Light))
            .unwrap();
        let children = generate_rook_moves(&position, PieceTeam::Light, (0, 0)).unwrap();
        // North ray: (0,1), (0,2) only. East ray: 7 cells.
        assert_eq!(children.len(), 9);
        for child in &children {
            assert_eq!(
                child.get((0, 3)).unwrap(),
                Some(PieceRecord::new(PieceClass::Pawn, PieceTeam::Light))
            );
        }
    }
}
