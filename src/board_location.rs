use crate::chess_errors::ChessErrors;

/// A `(file, rank)` cell coordinate, both axes in `0..8`.
pub type BoardLocation = (i8, i8);

/// Offset `x` by `(d_file, d_rank)`, failing when the result leaves the
/// board.
///
/// Ray walkers and offset scans use the error as their "ran off the edge"
/// signal, so it carries the origin and the attempted delta.
pub fn move_board_location(
    x: &BoardLocation,
    d_file: i8,
    d_rank: i8,
) -> Result<BoardLocation, ChessErrors> {
    let file = x.0 + d_file;
    let rank = x.1 + d_rank;
    if !(0..8).contains(&file) || !(0..8).contains(&rank) {
        return Err(ChessErrors::TriedToMoveOutOfBounds((*x, d_file, d_rank)));
    }
    Ok((file, rank))
}
