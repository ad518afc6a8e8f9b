use crate::board_location::{move_board_location, BoardLocation};
use crate::chess_errors::ChessErrors;
use crate::piece_class::{PieceClass, PROMOTION_CLASSES};
use crate::piece_record::PieceRecord;
use crate::piece_team::PieceTeam;
use crate::position::position::{CellOccupancy, Position};

/// The rank direction a pawn of `team` advances in.
pub fn forward_rank_step(team: PieceTeam) -> i8 {
    match team {
        PieceTeam::Light => 1,
        PieceTeam::Dark => -1,
    }
}

/// The rank a pawn of `team` double-steps from.
pub fn start_rank(team: PieceTeam) -> i8 {
    match team {
        PieceTeam::Light => 1,
        PieceTeam::Dark => 6,
    }
}

/// The farthest rank, where a pawn of `team` promotes.
pub fn promotion_rank(team: PieceTeam) -> i8 {
    match team {
        PieceTeam::Light => 7,
        PieceTeam::Dark => 0,
    }
}

/// The rank a pawn of `team` captures en passant from. The enemy pawn it
/// captures stands on the same rank.
pub fn en_passant_rank(team: PieceTeam) -> i8 {
    match team {
        PieceTeam::Light => 4,
        PieceTeam::Dark => 3,
    }
}

/// Generates all child positions for the pawn on `from`.
///
/// Every pawn move, captures included, requires the forward cell to be
/// open: a pawn whose forward cell is blocked yields no children at all.
/// A landing on the farthest rank fans out into one child per promotion
/// class; a double step records the file's double-step flag in the child.
pub fn generate_pawn_moves(
    position: &Position,
    team: PieceTeam,
    from: BoardLocation,
) -> Result<Vec<Position>, ChessErrors> {
    let mut children: Vec<Position> = Vec::new();
    let step = forward_rank_step(team);

    let forward = match move_board_location(&from, 0, step) {
        Ok(forward) => forward,
        Err(_) => return Ok(children),
    };
    if position.cell_occupancy(forward)? != CellOccupancy::Empty {
        return Ok(children);
    }

    push_landings(&mut children, position, team, from, forward)?;

    // Initial two-step move, only from the start rank through two open cells.
    if from.1 == start_rank(team) {
        if let Ok(double) = move_board_location(&from, 0, 2 * step) {
            if position.cell_occupancy(double)? == CellOccupancy::Empty {
                let mut child = position.child_with_move(from, double)?;
                child.mark_double_step(team, from.0)?;
                children.push(child);
            }
        }
    }

    // Diagonal captures and en passant.
    for d_file in [-1i8, 1] {
        let to = match move_board_location(&from, d_file, step) {
            Ok(to) => to,
            Err(_) => continue,
        };
        match position.cell_occupancy(to)? {
            CellOccupancy::Held(holder) if holder != team => {
                push_landings(&mut children, position, team, from, to)?;
            }
            CellOccupancy::Empty => {
                if from.1 == en_passant_rank(team) {
                    let victim = (to.0, from.1);
                    if let Some(piece) = position.get(victim)? {
                        if piece.team != team
                            && piece.class == PieceClass::Pawn
                            && position.double_step_flag(piece.team, victim.0)?
                        {
                            let mut child = position.child_with_move(from, to)?;
                            child.clear(victim)?;
                            children.push(child);
                        }
                    }
                }
            }
            _ => {}
        }
    }

    Ok(children)
}

/// Append the child for one landing cell, fanning out into the four
/// promotion classes when the landing is on the farthest rank.
fn push_landings(
    children: &mut Vec<Position>,
    position: &Position,
    team: PieceTeam,
    from: BoardLocation,
    to: BoardLocation,
) -> Result<(), ChessErrors> {
    if to.1 == promotion_rank(team) {
        for class in PROMOTION_CLASSES {
            let mut child = position.clone();
            child.clear(from)?;
            child.set(to, PieceRecord::new(class, team))?;
            children.push(child);
        }
    } else {
        children.push(position.child_with_move(from, to)?);
    }
    Ok(())
}
