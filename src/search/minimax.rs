//! Depth-bounded minimax search with alpha-beta pruning.
//!
//! The tree is the successor-position graph: each node expands into whole
//! child positions and recursion alternates the side to move. Light
//! maximizes and Dark minimizes. Checkmate is a terminal scored from
//! `CHECKMATE_SCORE` biased by the ply it was found at; a side with no
//! successors at all is a lesser terminal scored from `STALEMATE_SCORE`,
//! so a forced mate always outranks a stalemate found at the same ply.
//! Leaves are scored by the static evaluator. At the root
//! the engine tracks the child position achieving the best score — the
//! first child to strictly beat the running best wins ties, which makes
//! repeated searches of the same position deterministic.

use crate::chess_errors::ChessErrors;
use crate::inspect::checkmate::is_in_checkmate;
use crate::piece_team::PieceTeam;
use crate::position::position::Position;
use crate::scoring::{checkmate_score, stalemate_score, Score, MAX_SCORE, MIN_SCORE};
use crate::search::evaluate::evaluate_position;

/// The root result: the chosen successor and its minimax score
/// (positive favors Light).
#[derive(Clone, Debug, PartialEq)]
pub struct SearchOutcome {
    pub best_position: Position,
    pub score: Score,
}

/// Pick the best successor of `position` for `turn`, searching `max_depth`
/// plies.
///
/// Returns `ChessErrors::NoLegalMoves` when the side to move has no
/// successor at all.
pub fn search_best_position(
    position: &Position,
    turn: PieceTeam,
    max_depth: usize,
) -> Result<SearchOutcome, ChessErrors> {
    let children = position.expand(turn)?;
    let maximizing = matches!(turn, PieceTeam::Light);
    let opponent = turn.opponent();

    let mut children_iter = children.into_iter();
    let first = children_iter.next().ok_or(ChessErrors::NoLegalMoves)?;
    let mut best_score = recurse_ab(&first, opponent, 1, max_depth, MIN_SCORE, MAX_SCORE)?;
    let mut best_position = first;

    for child in children_iter {
        let score = recurse_ab(&child, opponent, 1, max_depth, MIN_SCORE, MAX_SCORE)?;
        if (maximizing && score > best_score) || (!maximizing && score < best_score) {
            best_score = score;
            best_position = child;
        }
    }

    Ok(SearchOutcome {
        best_position,
        score: best_score,
    })
}

/// Recursive minimax with alpha-beta pruning over successor positions.
///
/// `position` is already the node to score and `turn` is the side to move
/// in it; `current_depth` counts plies from the root.
fn recurse_ab(
    position: &Position,
    turn: PieceTeam,
    current_depth: usize,
    max_depth: usize,
    mut alpha: Score,
    mut beta: Score,
) -> Result<Score, ChessErrors> {
    if current_depth >= max_depth {
        return evaluate_position(position, current_depth);
    }

    if is_in_checkmate(position, turn)? {
        return Ok(checkmate_score(turn, current_depth));
    }

    let children = position.expand(turn)?;
    if children.is_empty() {
        // Stalemate terminal: against the stuck side, but below any mate.
        return Ok(stalemate_score(turn, current_depth));
    }

    let maximizing = matches!(turn, PieceTeam::Light);
    if maximizing {
        let mut value = MIN_SCORE;
        for child in children {
            let score = recurse_ab(
                &child,
                turn.opponent(),
                current_depth + 1,
                max_depth,
                alpha,
                beta,
            )?;
            if score > value {
                value = score;
            }
            if value > alpha {
                alpha = value;
            }
            // Beta cutoff
            if alpha >= beta {
                break;
            }
        }
        Ok(value)
    } else {
        let mut value = MAX_SCORE;
        for child in children {
            let score = recurse_ab(
                &child,
                turn.opponent(),
                current_depth + 1,
                max_depth,
                alpha,
                beta,
            )?;
            if score < value {
                value = score;
            }
            if value < beta {
                beta = value;
            }
            // Alpha cutoff
            if beta <= alpha {
                break;
            }
        }
        Ok(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::piece_class::PieceClass;
    use crate::piece_record::PieceRecord;
    use crate::scoring::CHECKMATE_SCORE;

    /// Lone kings plus a Light queen that can mate on the adjacent file.
    fn mate_in_one_fixture() -> Position {
        let mut position = Position::new_empty();
        position
            .set((0, 7), PieceRecord::new(PieceClass::King, PieceTeam::Dark))
            .unwrap();
        position
            .set((2, 6), PieceRecord::new(PieceClass::King, PieceTeam::Light))
            .unwrap();
        position
            .set((1, 1), PieceRecord::new(PieceClass::Queen, PieceTeam::Light))
            .unwrap();
        position
    }

    #[test]
    fn test_depth_one_search_takes_the_hanging_queen() {
        let mut position = Position::new_empty();
        position
            .set((0, 0), PieceRecord::new(PieceClass::Rook, PieceTeam::Light))
            .unwrap();
        position
            .set((0, 7), PieceRecord::new(PieceClass::Queen, PieceTeam::Dark))
            .unwrap();
        position
            .set((7, 7), PieceRecord::new(PieceClass::King, PieceTeam::Dark))
            .unwrap();
        let outcome = search_best_position(&position, PieceTeam::Light, 1).unwrap();
        assert_eq!(
            outcome.best_position.get((0, 7)).unwrap(),
            Some(PieceRecord::new(PieceClass::Rook, PieceTeam::Light))
        );
    }

    #[test]
    fn test_search_finds_mate_in_one() {
        let position = mate_in_one_fixture();
        let outcome = search_best_position(&position, PieceTeam::Light, 3).unwrap();
        assert_eq!(
            outcome.best_position.get((1, 6)).unwrap(),
            Some(PieceRecord::new(PieceClass::Queen, PieceTeam::Light))
        );
        // Mate found one ply from the root, not deferred to a deeper one.
        assert_eq!(outcome.score, CHECKMATE_SCORE - 1.0);
    }

    #[test]
    fn test_mate_outranks_an_earlier_stalemate() {
        let position = mate_in_one_fixture();
        // Q to (5,1) leaves Dark with no successors and appears before the
        // mating Q to (1,6) in expansion order; it must not win the tie.
        let stalemating = position.child_with_move((1, 1), (5, 1)).unwrap();
        assert_eq!(stalemating.expand(PieceTeam::Dark).unwrap().len(), 0);
        assert!(!is_in_checkmate(&stalemating, PieceTeam::Dark).unwrap());

        let outcome = search_best_position(&position, PieceTeam::Light, 2).unwrap();
        assert_eq!(
            outcome.best_position.get((1, 6)).unwrap(),
            Some(PieceRecord::new(PieceClass::Queen, PieceTeam::Light))
        );
        assert_eq!(outcome.score, CHECKMATE_SCORE - 1.0);
    }

    #[test]
    fn test_search_is_idempotent() {
        let position = Position::new_game();
        let first = search_best_position(&position, PieceTeam::Light, 2).unwrap();
        let second = search_best_position(&position, PieceTeam::Light, 2).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_successors_is_reported() {
        let position = Position::new_empty();
        assert!(matches!(
            search_best_position(&position, PieceTeam::Dark, 2),
            Err(ChessErrors::NoLegalMoves)
        ));
    }
}
