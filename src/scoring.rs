//! Scoring utilities for the position engine.
//!
//! This module centralizes piece valuations, sentinel values, and the
//! depth-biased terminal scores used by search. Scores are modeled as
//! floating point values (Score) to allow fractional heuristics and future
//! weighting adjustments.
//!
//! Conventions:
//! - Positive scores favor the Light side; negative scores favor the Dark
//!   side.
//! - `MIN_SCORE`/`MAX_SCORE` are the alpha-beta window bounds.
//! - Checkmate terminals are scored from `CHECKMATE_SCORE`, biased by the
//!   ply at which the mate was found so that mates closer to the root
//!   dominate deeper ones.
//! - Stalemate terminals are scored from the smaller `STALEMATE_SCORE`, so
//!   a forced mate always outranks merely leaving the opponent without a
//!   move.

use crate::piece_class::PieceClass;
use crate::piece_team::PieceTeam;

/// Numeric representation of an evaluation score.
///
/// Positive values favor the Light side and negative values favor the Dark
/// side. A floating-point type is used to allow fractional/weighted
/// heuristics and to support very large sentinel values for forced outcomes.
pub type Score = f32;

/// Conventional material value for a given PieceClass.
///
/// - Pawn:   1.0
/// - Knight: 3.0
/// - Bishop: 3.0
/// - Rook:   5.0
/// - Queen:  9.0
/// - King:   64.0 (a large sentinel-like value; kings are effectively priceless)
pub fn conventional_score(x: &PieceClass) -> Score {
    match x {
        PieceClass::Pawn => 1.0,
        PieceClass::Knight => 3.0,
        PieceClass::Bishop => 3.0,
        PieceClass::Rook => 5.0,
        PieceClass::Queen => 9.0,
        PieceClass::King => 64.0,
    }
}

/// A very low sentinel score used as the initial alpha-beta lower bound.
pub const MIN_SCORE: Score = -1E9;
/// A very high sentinel score used as the initial alpha-beta upper bound.
pub const MAX_SCORE: Score = 1E9;

/// Base magnitude for checkmate terminal scores.
///
/// Deliberately far below `MAX_SCORE` so that subtracting small ply counts
/// stays exactly representable in f32 (1E9 - 1 rounds back to 1E9, which
/// would erase the depth bias).
pub const CHECKMATE_SCORE: Score = 1E6;

/// Base magnitude for stalemate terminal scores.
///
/// Strictly smaller than `CHECKMATE_SCORE`: a side with no successors is
/// a losing terminal for that side, but never one the search should pick
/// over a forced mate found at the same ply.
pub const STALEMATE_SCORE: Score = 1E3;

/// Terminal score for a position in which `mated` has been checkmated,
/// discovered `current_depth` plies from the search root.
///
/// Mates closer to the root carry a larger magnitude, so the search prefers
/// the shortest forced mate and delays being mated as long as possible.
pub fn checkmate_score(mated: PieceTeam, current_depth: usize) -> Score {
    let magnitude = CHECKMATE_SCORE - current_depth as Score;
    match mated {
        PieceTeam::Light => -magnitude,
        PieceTeam::Dark => magnitude,
    }
}

/// Terminal score for a position in which `stuck` is not in check but has
/// no successor at all, discovered `current_depth` plies from the root.
pub fn stalemate_score(stuck: PieceTeam, current_depth: usize) -> Score {
    let magnitude = STALEMATE_SCORE - current_depth as Score;
    match stuck {
        PieceTeam::Light => -magnitude,
        PieceTeam::Dark => magnitude,
    }
}
