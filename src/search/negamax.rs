//! Negamax formulation of the same depth-bounded search.
//!
//! One recursion instead of the mirrored maximize/minimize pair: every node
//! scores the position from the side to move's own point of view, so a
//! child's value is the negation of the recursive call with the alpha-beta
//! window negated and swapped. The root converts back to the shared
//! convention (positive favors Light) so both search formulations report
//! comparable `SearchOutcome`s.

use crate::chess_errors::ChessErrors;
use crate::inspect::checkmate::is_in_checkmate;
use crate::piece_team::PieceTeam;
use crate::position::position::Position;
use crate::scoring::{Score, CHECKMATE_SCORE, MAX_SCORE, MIN_SCORE, STALEMATE_SCORE};
use crate::search::evaluate::evaluate_position;
use crate::search::minimax::SearchOutcome;

/// Pick the best successor of `position` for `turn`, searching `max_depth`
/// plies with the negamax recursion.
///
/// Returns `ChessErrors::NoLegalMoves` when the side to move has no
/// successor at all. The outcome's score is reported positive-favors-Light
/// regardless of `turn`.
pub fn search_best_position_negamax(
    position: &Position,
    turn: PieceTeam,
    max_depth: usize,
) -> Result<SearchOutcome, ChessErrors> {
    let children = position.expand(turn)?;
    let opponent = turn.opponent();

    let mut children_iter = children.into_iter();
    let first = children_iter.next().ok_or(ChessErrors::NoLegalMoves)?;
    let mut best_value = -recurse(&first, opponent, 1, max_depth, MIN_SCORE, MAX_SCORE)?;
    let mut best_position = first;

    for child in children_iter {
        let value = -recurse(&child, opponent, 1, max_depth, MIN_SCORE, MAX_SCORE)?;
        if value > best_value {
            best_value = value;
            best_position = child;
        }
    }

    Ok(SearchOutcome {
        best_position,
        score: signed_for(turn, best_value),
    })
}

/// Score `position` from the point of view of `turn`, the side to move.
fn recurse(
    position: &Position,
    turn: PieceTeam,
    current_depth: usize,
    max_depth: usize,
    mut alpha: Score,
    beta: Score,
) -> Result<Score, ChessErrors> {
    if current_depth >= max_depth {
        return Ok(signed_for(turn, evaluate_position(position, current_depth)?));
    }

    if is_in_checkmate(position, turn)? {
        return Ok(-(CHECKMATE_SCORE - current_depth as Score));
    }

    let children = position.expand(turn)?;
    if children.is_empty() {
        // Stalemate terminal: against the stuck side, but below any mate.
        return Ok(-(STALEMATE_SCORE - current_depth as Score));
    }

    let mut value = MIN_SCORE;
    for child in children {
        let score = -recurse(
            &child,
            turn.opponent(),
            current_depth + 1,
            max_depth,
            -beta,
            -alpha,
        )?;
        if score > value {
            value = score;
        }
        if value > alpha {
            alpha = value;
        }
        if alpha >= beta {
            break;
        }
    }
    Ok(value)
}

/// Flip a positive-favors-Light score into `turn`'s point of view, and
/// back; the transform is its own inverse.
fn signed_for(turn: PieceTeam, score: Score) -> Score {
    match turn {
        PieceTeam::Light => score,
        PieceTeam::Dark => -score,
    }
}
