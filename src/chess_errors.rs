//! Errors used throughout the position engine.
//!
//! This module defines the canonical error type returned by board access,
//! diagram parsing, move generation and search. The enum `ChessErrors` is
//! used as the single error type across the crate to simplify propagation
//! and matching. Each variant carries contextual information where
//! appropriate to aid diagnostics.
//!
//! Usage guidelines:
//! - Core functions return `Result<..., ChessErrors>` for expected failure
//!   modes (malformed diagrams, out-of-range coordinates, dead positions).
//! - Variants that represent contract violations or unimplemented features
//!   (`InvalidFileOrRank`, `FeatureNotImplementedYet`) indicate bugs or
//!   incomplete heuristics and are not intended to be recovered from by
//!   normal library users.

use crate::board_location::BoardLocation;

/// Unified error type for the position engine.
#[derive(Debug)]
pub enum ChessErrors {
    /// Attempted to offset a location by the delta `(d_file, d_rank)` which
    /// would place it off the board.
    ///
    /// Payload: (origin_location, d_file, d_rank)
    TriedToMoveOutOfBounds((BoardLocation, i8, i8)),

    /// Invalid file or rank indices were passed to a board accessor
    /// (outside 0..=7). This is a caller bug; the board refuses the access
    /// instead of silently corrupting state.
    ///
    /// Payload: (file, rank) as given.
    InvalidFileOrRank((i8, i8)),

    /// A textual board diagram had malformed structure (wrong number of
    /// rows, or a row of the wrong length).
    ///
    /// Payload: the offending row, or a description of the shape problem.
    InvalidDiagramForm(String),

    /// A single character in a board diagram was not a recognized piece
    /// letter or empty-square marker.
    ///
    /// Payload: the offending character.
    InvalidDiagramChar(char),

    /// Attempted to move a piece out of an empty cell. Generators
    /// pre-validate their origin, so hitting this indicates a caller bug.
    TriedToMoveFromEmptyCell(BoardLocation),

    /// No successor positions exist for the side to move. Surfaced by the
    /// search root; callers decide whether this ends the game.
    NoLegalMoves,

    /// A heuristic sub-score or search branch is referenced that is not
    /// implemented yet. Returned instead of a silent 0 so incomplete
    /// heuristics cannot masquerade as neutral ones during testing.
    FeatureNotImplementedYet,
}
