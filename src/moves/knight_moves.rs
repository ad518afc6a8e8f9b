use crate::board_location::{move_board_location, BoardLocation};
use crate::chess_errors::ChessErrors;
use crate::piece_team::PieceTeam;
use crate::position::position::{CellOccupancy, Position};

/// Knight offsets, counter-clockwise from east-east-north.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

/// Generates all child positions for the knight on `from`.
///
/// Each in-bounds offset not landing on an own piece yields one child,
/// move or capture alike.
pub fn generate_knight_moves(
    position: &Position,
    team: PieceTeam,
    from: BoardLocation,
) -> Result<Vec<Position>, ChessErrors> {
    let mut children: Vec<Position> = Vec::new();
    for &(d_file, d_rank) in &KNIGHT_OFFSETS {
        let to = match move_board_location(&from, d_file, d_rank) {
            Ok(to) => to,
            Err(_) => continue,
        };
        match position.cell_occupancy(to)? {
            CellOccupancy::Held(holder) if holder == team => continue,
            _ => children.push(position.child_with_move(from, to)?),
        }
    }
    Ok(children)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::piece_class::PieceClass;
    use crate::piece_record::PieceRecord;

    fn knight(team: PieceTeam) -> PieceRecord {
        PieceRecord::new(PieceClass::Knight, team)
    }

    #[test]
    fn test_central_knight_has_eight_moves() {
        let mut position = Position::new_empty();
        position.set((4, 4), knight(PieceTeam::Light)).unwrap();
        let children = generate_knight_moves(&position, PieceTeam::Light, (4, 4)).unwrap();
        assert_eq!(children.len(), 8);
    }

    #[test]
    fn test_corner_knight_has_two_moves() {
        let mut position = Position::new_empty();
        position.set((0, 0), knight(PieceTeam::Dark)).unwrap();
        let children = generate_knight_moves(&position, PieceTeam::Dark, (0, 0)).unwrap();
        assert_eq!(children.len(), 2);
    }

    #[test]
    fn test_own_piece_blocks_but_enemy_is_captured() {
        let mut position = Position::new_empty();
        position.set((4, 4), knight(PieceTeam::Light)).unwrap();
        position
            .set((6, 5), PieceRecord::new(PieceClass::Pawn, PieceTeam::Light))
            .unwrap();
        position
            .set((5, 6), PieceRecord::new(PieceClass::Pawn, PieceTeam::Dark))
            .unwrap();
        let children = generate_knight_moves(&position, PieceTeam::Light, (4, 4)).unwrap();
        assert_eq!(children.len(), 7);
        assert!(children
            .iter()
            .any(|child| child.get((5, 6)).unwrap() == Some(knight(PieceTeam::Light))));
    }
}
