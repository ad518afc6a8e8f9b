//! Shared ray walker for the sliding pieces.
//!
//! Bishop, rook and (by composition) queen generation all walk outward one
//! cell at a time along a fixed set of direction vectors. An empty cell
//! emits a move-only child and the walk continues; an opponent-held cell
//! emits a capture child and stops the ray; an own-held cell stops the ray
//! without emitting.

use crate::board_location::{move_board_location, BoardLocation};
use crate::chess_errors::ChessErrors;
use crate::piece_team::PieceTeam;
use crate::position::position::{CellOccupancy, Position};

/// Walk every direction in `directions` from `from`, collecting the child
/// positions reachable by the piece standing there.
pub fn walk_rays(
    position: &Position,
    team: PieceTeam,
    from: BoardLocation,
    directions: &[(i8, i8)],
) -> Result<Vec<Position>, ChessErrors> {
    let mut children: Vec<Position> = Vec::new();
    for &(d_file, d_rank) in directions {
        let mut cursor = from;
        while let Ok(next) = move_board_location(&cursor, d_file, d_rank) {
            match position.cell_occupancy(next)? {
                CellOccupancy::Empty => {
                    children.push(position.child_with_move(from, next)?);
                    cursor = next;
                }
                CellOccupancy::Held(holder) if holder != team => {
                    children.push(position.child_with_move(from, next)?);
                    break;
                }
                CellOccupancy::Held(_) => break,
            }
        }
    }
    Ok(children)
}
