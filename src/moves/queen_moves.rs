use crate::board_location::BoardLocation;
use crate::chess_errors::ChessErrors;
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::rook_moves::generate_rook_moves;
use crate::piece_team::PieceTeam;
use crate::position::position::Position;

/// Generates all child positions for the queen on `from`.
///
/// Composed from the rook and bishop generators rather than duplicating the
/// ray logic; the queen's reach is exactly the union of the two.
pub fn generate_queen_moves(
    position: &Position,
    team: PieceTeam,
    from: BoardLocation,
) -> Result<Vec<Position>, ChessErrors> {
    let mut children = generate_rook_moves(position, team, from)?;
    children.extend(generate_bishop_moves(position, team, from)?);
    Ok(children)
}
