use crate::attacks::aggregate::is_attacked_by;
use crate::board_location::{move_board_location, BoardLocation};
use crate::chess_errors::ChessErrors;
use crate::piece_team::PieceTeam;
use crate::position::position::{CellOccupancy, Position};

/// King offsets, counter-clockwise from east.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// Generates all child positions for the king on `from`.
///
/// This is the one generator that upgrades pseudo-legality to legality: a
/// candidate destination is only emitted when, in the hypothetical child,
/// it is not attacked by the opponent. The child is built first so the
/// vacated origin cell cannot shield the king from a slider behind it.
/// Moving the king also refreshes the team's cached king location (via
/// `set`).
pub fn generate_king_moves(
    position: &Position,
    team: PieceTeam,
    from: BoardLocation,
) -> Result<Vec<Position>, ChessErrors> {
    let mut children: Vec<Position> = Vec::new();
    for &(d_file, d_rank) in &KING_OFFSETS {
        let to = match move_board_location(&from, d_file, d_rank) {
            Ok(to) => to,
            Err(_) => continue,
        };
        if let CellOccupancy::Held(holder) = position.cell_occupancy(to)? {
            if holder == team {
                continue;
            }
        }
        let child = position.child_with_move(from, to)?;
        if !is_attacked_by(&child, team.opponent(), to)?.attacked {
            children.push(child);
        }
    }
    Ok(children)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::piece_class::PieceClass;
    use crate::piece_record::PieceRecord;

    #[test]
    fn test_lone_king_has_eight_moves() {
        let mut position = Position::new_empty();
        position
            .set((4, 4), PieceRecord::new(PieceClass::King, PieceTeam::Light))
            .unwrap();
        let children = generate_king_moves(&position, PieceTeam::Light, (4, 4)).unwrap();
        assert_eq!(children.len(), 8);
        for child in &children {
            assert_ne!(child.king_location(PieceTeam::Light), Some((4, 4)));
        }
    }

    #[test]
    fn test_king_does_not_step_into_attacked_cells() {
        let mut position = Position::new_empty();
        position
            .set((0, 0), PieceRecord::new(PieceClass::King, PieceTeam::Light))
            .unwrap();
        position
            .set((1, 2), PieceRecord::new(PieceClass::Queen, PieceTeam::Dark))
            .unwrap();
        // The queen covers (0,1), (1,1) and (1,0); the king is not even in
        // check but has nowhere to go.
        let children = generate_king_moves(&position, PieceTeam::Light, (0, 0)).unwrap();
        assert_eq!(children.len(), 0);
    }

    #[test]
    fn test_cornered_king_against_secured_queen() {
        let mut position = Position::new_empty();
        position
            .set((0, 0), PieceRecord::new(PieceClass::King, PieceTeam::Light))
            .unwrap();
        position
            .set((1, 1), PieceRecord::new(PieceClass::Queen, PieceTeam::Dark))
            .unwrap();
        position
            .set((3, 2), PieceRecord::new(PieceClass::Knight, PieceTeam::Dark))
            .unwrap();
        // The knight guards the queen, so even the capture is unsafe.
        let children = generate_king_moves(&position, PieceTeam::Light, (0, 0)).unwrap();
        assert_eq!(children.len(), 0);
    }

    #[test]
    fn test_unguarded_queen_can_be_captured() {
        let mut position = Position::new_empty();
        position
            .set((0, 0), PieceRecord::new(PieceClass::King, PieceTeam::Light))
            .unwrap();
        position
            .set((1, 1), PieceRecord::new(PieceClass::Queen, PieceTeam::Dark))
            .unwrap();
        let children = generate_king_moves(&position, PieceTeam::Light, (0, 0)).unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(
            children[0].get((1, 1)).unwrap(),
            Some(PieceRecord::new(PieceClass::King, PieceTeam::Light))
        );
        assert_eq!(children[0].king_location(PieceTeam::Light), Some((1, 1)));
    }

    #[test]
    fn test_vacated_cell_does_not_shield_the_king() {
        let mut position = Position::new_empty();
        position
            .set((4, 0), PieceRecord::new(PieceClass::King, PieceTeam::Light))
            .unwrap();
        position
            .set((4, 7), PieceRecord::new(PieceClass::Rook, PieceTeam::Dark))
            .unwrap();
        // Stepping from (4,0) to (4,1)... the rook still sees the whole
        // file once the king leaves it, so only the sideways cells remain.
        let children = generate_king_moves(&position, PieceTeam::Light, (4, 0)).unwrap();
        assert_eq!(children.len(), 4);
        for child in &children {
            let king = child.king_location(PieceTeam::Light).unwrap();
            assert_ne!(king.0, 4);
        }
    }
}
