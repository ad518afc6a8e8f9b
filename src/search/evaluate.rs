//! Static heuristic evaluation.
//!
//! Scores a position by material presence plus an attack-exposure term:
//! every piece contributes its conventional value for its side, and a piece
//! the opponent currently attacks gives half of that value back. Positive
//! scores favor Light.

use crate::attacks::aggregate::is_attacked_by;
use crate::chess_errors::ChessErrors;
use crate::piece_team::PieceTeam;
use crate::position::position::Position;
use crate::scoring::{conventional_score, Score};

/// Fraction of a piece's value forfeited while the opponent attacks it.
const VULNERABILITY_FACTOR: Score = 0.5;

/// Evaluate `position` by material and attack exposure.
///
/// `_depth` is accepted for signature compatibility with extended
/// evaluators that shape scores by ply; the default evaluator ignores it.
pub fn evaluate_position(position: &Position, _depth: usize) -> Result<Score, ChessErrors> {
    let mut total: Score = 0.0;
    for rank in 0..8i8 {
        for file in 0..8i8 {
            let location = (file, rank);
            let piece = match position.get(location)? {
                Some(piece) => piece,
                None => continue,
            };
            let sign: Score = match piece.team {
                PieceTeam::Light => 1.0,
                PieceTeam::Dark => -1.0,
            };
            let value = conventional_score(&piece.class);
            total += sign * value;
            if is_attacked_by(position, piece.team.opponent(), location)?.attacked {
                total -= sign * value * VULNERABILITY_FACTOR;
            }
        }
    }
    Ok(total)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::piece_class::PieceClass;
    use crate::piece_record::PieceRecord;

    #[test]
    fn test_starting_position_is_balanced() {
        let position = Position::new_game();
        assert_eq!(evaluate_position(&position, 0).unwrap(), 0.0);
    }

    #[test]
    fn test_material_advantage_counts() {
        let mut position = Position::new_empty();
        position
            .set((0, 0), PieceRecord::new(PieceClass::Rook, PieceTeam::Light))
            .unwrap();
        position
            .set((7, 7), PieceRecord::new(PieceClass::Pawn, PieceTeam::Dark))
            .unwrap();
        assert_eq!(evaluate_position(&position, 0).unwrap(), 5.0 - 1.0);
    }

    #[test]
    fn test_attacked_piece_is_discounted() {
        let mut position = Position::new_empty();
        position
            .set((0, 0), PieceRecord::new(PieceClass::Rook, PieceTeam::Light))
            .unwrap();
        position
            .set((0, 7), PieceRecord::new(PieceClass::Rook, PieceTeam::Dark))
            .unwrap();
        // Both rooks attack each other; both give half their value back.
        assert_eq!(evaluate_position(&position, 0).unwrap(), 0.0);

        // Interpose a Dark pawn: it blocks both rook rays, leaving only the
        // pawn itself attacked.
        position
            .set((0, 5), PieceRecord::new(PieceClass::Pawn, PieceTeam::Dark))
            .unwrap();
        let score = evaluate_position(&position, 0).unwrap();
        // Light rook 5 safe, Dark rook -5 safe, Dark pawn -1 attacked -> -0.5.
        assert_eq!(score, 5.0 - 5.0 - 0.5);
    }

    #[test]
    fn test_depth_parameter_is_ignored() {
        let position = Position::new_game();
        assert_eq!(
            evaluate_position(&position, 0).unwrap(),
            evaluate_position(&position, 5).unwrap()
        );
    }
}
