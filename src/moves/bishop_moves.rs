use crate::board_location::BoardLocation;
use crate::chess_errors::ChessErrors;
use crate::moves::sliding::walk_rays;
use crate::piece_team::PieceTeam;
use crate::position::position::Position;

/// Bishop direction vectors, counter-clockwise from north east.
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, 1), (-1, -1), (1, -1)];

/// Generates all child positions for the bishop on `from`.
pub fn generate_bishop_moves(
    position: &Position,
    team: PieceTeam,
    from: BoardLocation,
) -> Result<Vec<Position>, ChessErrors> {
    walk_rays(position, team, from, &BISHOP_DIRECTIONS)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::piece_class::PieceClass;
    use crate::piece_record::PieceRecord;

    #[test]
    fn test_bishop_reach_from_e6_on_empty_board() {
        let mut position = Position::new_empty();
        position
            .set((4, 5), PieceRecord::new(PieceClass::Bishop, PieceTeam::Light))
            .unwrap();
        let children = generate_bishop_moves(&position, PieceTeam::Light, (4, 5)).unwrap();
        // 2 + 2 + 4 + 3 cells before the board edge.
        assert_eq!(children.len(), 11);
    }

    #[test]
    fn test_enemy_blocker_allows_the_capture_cell() {
        let mut position = Position::new_empty();
        position
            .set((0, 0), PieceRecord::new(PieceClass::Bishop, PieceTeam::Light))
            .unwrap();
        position
            .set((2, 2), PieceRecord::new(PieceClass::Knight, PieceTeam::Dark))
            .unwrap();
        let children = generate_bishop_moves(&position, PieceTeam::Light, (0, 0)).unwrap();
        // (1,1) then the capture on (2,2).
        assert_eq!(children.len(), 2);
    }

    #[test]
    fn test_own_blocker_stops_one_cell_short() {
        let mut position = Position::new_empty();
        position
            .set((0, 0), PieceRecord::new(PieceClass::Bishop, PieceTeam::Light))
            .unwrap();
        position
            .set((2, 2), PieceRecord::new(PieceClass::Knight, PieceTeam::Light))
            .unwrap();
        let children = generate_bishop_moves(&position, PieceTeam::Light, (0, 0)).unwrap();
        assert_eq!(children.len(), 1);
    }
}
