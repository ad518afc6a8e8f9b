//! Core board position representation.
//!
//! `Position` is the central model for the engine: an 8x8 grid of optional
//! pieces indexed by (file, rank), a cached king location per team, and
//! per-file double-step flags used to test en-passant eligibility. A move is
//! represented as a *resulting child position* (a full clone with the move
//! applied) rather than as a delta; every successor is a complete,
//! independently valid snapshot. That is an accepted memory-churn trade-off
//! in exchange for simple reasoning: no position is ever mutated after being
//! handed to a caller.

use crate::board_location::BoardLocation;
use crate::chess_errors::ChessErrors;
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::king_moves::generate_king_moves;
use crate::moves::knight_moves::generate_knight_moves;
use crate::moves::pawn_moves::generate_pawn_moves;
use crate::moves::queen_moves::generate_queen_moves;
use crate::moves::rook_moves::generate_rook_moves;
use crate::piece_class::PieceClass;
use crate::piece_record::PieceRecord;
use crate::piece_team::PieceTeam;
use crate::position::diagram::{parse_diagram, START_DIAGRAM};

/// What a single cell holds, from the point of view of move filtering.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CellOccupancy {
    Empty,
    Held(PieceTeam),
}

/// A complete board position.
///
/// Invariants:
/// - all stored locations are in [0,8) on both axes (enforced by the
///   bounds-checked accessors),
/// - a well-formed position holds at most one king per team; the cached
///   king locations are maintained by `set` and `clear`.
#[derive(Clone, Debug, PartialEq)]
pub struct Position {
    grid: [[Option<PieceRecord>; 8]; 8],
    king_locations: [Option<BoardLocation>; 2],
    // Per team, per file: that team's pawn on this file has just made its
    // initial two-step move. Only meaningful on the immediately following
    // ply; the flags carry no turn stamp, so they can go stale (preserved
    // limitation of the original design).
    just_double_stepped: [[bool; 8]; 2],
}

impl Default for Position {
    fn default() -> Self {
        Position {
            grid: [[None; 8]; 8],
            king_locations: [None; 2],
            just_double_stepped: [[false; 8]; 2],
        }
    }
}

impl Position {
    /// An empty board with no pieces and no flags set.
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// The standard start-of-game layout.
    pub fn new_game() -> Self {
        parse_diagram(START_DIAGRAM).expect("starting diagram should always parse")
    }

    fn check_bounds(x: BoardLocation) -> Result<(), ChessErrors> {
        if (x.0 < 0) | (x.0 > 7) | (x.1 < 0) | (x.1 > 7) {
            Err(ChessErrors::InvalidFileOrRank((x.0, x.1)))
        } else {
            Ok(())
        }
    }

    /// The piece at `x`, or `None` for an empty cell.
    pub fn get(&self, x: BoardLocation) -> Result<Option<PieceRecord>, ChessErrors> {
        Self::check_bounds(x)?;
        Ok(self.grid[x.0 as usize][x.1 as usize])
    }

    /// Place `piece` on `x`, overwriting whatever was there.
    ///
    /// Maintains the king caches: overwriting a king clears its team's
    /// cache entry, placing a king records the new location.
    pub fn set(&mut self, x: BoardLocation, piece: PieceRecord) -> Result<(), ChessErrors> {
        Self::check_bounds(x)?;
        if let Some(previous) = self.grid[x.0 as usize][x.1 as usize] {
            if previous.class == PieceClass::King {
                self.king_locations[previous.team.index()] = None;
            }
        }
        if piece.class == PieceClass::King {
            self.king_locations[piece.team.index()] = Some(x);
        }
        self.grid[x.0 as usize][x.1 as usize] = Some(piece);
        Ok(())
    }

    /// Empty the cell at `x`, returning what it held.
    pub fn clear(&mut self, x: BoardLocation) -> Result<Option<PieceRecord>, ChessErrors> {
        Self::check_bounds(x)?;
        let removed = self.grid[x.0 as usize][x.1 as usize].take();
        if let Some(piece) = removed {
            if piece.class == PieceClass::King {
                self.king_locations[piece.team.index()] = None;
            }
        }
        Ok(removed)
    }

    /// The cached location of `team`'s king, if that king is on the board.
    pub fn king_location(&self, team: PieceTeam) -> Option<BoardLocation> {
        self.king_locations[team.index()]
    }

    /// Classify the cell at `x` as empty or held by one of the teams.
    pub fn cell_occupancy(&self, x: BoardLocation) -> Result<CellOccupancy, ChessErrors> {
        Ok(match self.get(x)? {
            None => CellOccupancy::Empty,
            Some(piece) => CellOccupancy::Held(piece.team),
        })
    }

    /// Record that `team`'s pawn on `file` just made its two-step move.
    ///
    /// A new double step supersedes any earlier one by the same team, so the
    /// team's other file flags are cleared first.
    pub fn mark_double_step(&mut self, team: PieceTeam, file: i8) -> Result<(), ChessErrors> {
        if (file < 0) | (file > 7) {
            return Err(ChessErrors::InvalidFileOrRank((file, 0)));
        }
        self.just_double_stepped[team.index()] = [false; 8];
        self.just_double_stepped[team.index()][file as usize] = true;
        Ok(())
    }

    /// Whether `team`'s pawn on `file` is flagged as having just
    /// double-stepped.
    pub fn double_step_flag(&self, team: PieceTeam, file: i8) -> Result<bool, ChessErrors> {
        if (file < 0) | (file > 7) {
            return Err(ChessErrors::InvalidFileOrRank((file, 0)));
        }
        Ok(self.just_double_stepped[team.index()][file as usize])
    }

    /// Build the child position in which the piece on `from` has moved to
    /// `to`, capturing whatever stood there. The parent is untouched.
    pub fn child_with_move(
        &self,
        from: BoardLocation,
        to: BoardLocation,
    ) -> Result<Position, ChessErrors> {
        let piece = self
            .get(from)?
            .ok_or(ChessErrors::TriedToMoveFromEmptyCell(from))?;
        let mut child = self.clone();
        child.clear(from)?;
        child.set(to, piece)?;
        Ok(child)
    }

    /// All successor positions reachable by `turn` moving one piece.
    ///
    /// Scans the 64 cells rank-major and appends each piece generator's
    /// output in order. The order is significant only as the deterministic
    /// tie-break in search: the first child to reach the best score wins.
    pub fn expand(&self, turn: PieceTeam) -> Result<Vec<Position>, ChessErrors> {
        let mut children: Vec<Position> = Vec::new();
        for rank in 0..8i8 {
            for file in 0..8i8 {
                let from = (file, rank);
                let piece = match self.get(from)? {
                    Some(piece) => piece,
                    None => continue,
                };
                if piece.team != turn {
                    continue;
                }
                let generated = match piece.class {
                    PieceClass::Pawn => generate_pawn_moves(self, turn, from)?,
                    PieceClass::Knight => generate_knight_moves(self, turn, from)?,
                    PieceClass::Bishop => generate_bishop_moves(self, turn, from)?,
                    PieceClass::Rook => generate_rook_moves(self, turn, from)?,
                    PieceClass::Queen => generate_queen_moves(self, turn, from)?,
                    PieceClass::King => generate_king_moves(self, turn, from)?,
                };
                children.extend(generated);
            }
        }
        Ok(children)
    }
}
