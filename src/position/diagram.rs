//! Diagram-to-Position parser.
//!
//! A diagram is 8 rows of 8 characters, top row first (rank 7 down to
//! rank 0). Uppercase letters are Light pieces, lowercase are Dark, and
//! `.` or `#` mark empty squares. Malformed rows or unrecognized characters
//! fail fast with a descriptive error; a diagram is never partially applied.

use crate::chess_errors::ChessErrors;
use crate::piece_class::PieceClass;
use crate::piece_record::PieceRecord;
use crate::piece_team::PieceTeam;
use crate::position::position::Position;

/// The standard start-of-game layout as a diagram.
pub const START_DIAGRAM: &str = "\
rnbqkbnr
pppppppp
........
........
........
........
PPPPPPPP
RNBQKBNR";

/// Parse a textual board diagram into a `Position`.
pub fn parse_diagram(diagram: &str) -> Result<Position, ChessErrors> {
    let rows: Vec<&str> = diagram.lines().map(|row| row.trim_end()).collect();
    if rows.len() != 8 {
        return Err(ChessErrors::InvalidDiagramForm(format!(
            "diagram must contain 8 rows, found {}",
            rows.len()
        )));
    }

    let mut position = Position::new_empty();
    for (row_index, row) in rows.iter().enumerate() {
        if row.chars().count() != 8 {
            return Err(ChessErrors::InvalidDiagramForm((*row).to_string()));
        }
        // Top diagram row is the far rank.
        let rank = (7 - row_index) as i8;
        for (file, symbol) in row.chars().enumerate() {
            match piece_from_diagram_char(symbol)? {
                Some(piece) => position.set((file as i8, rank), piece)?,
                None => {}
            }
        }
    }
    Ok(position)
}

/// Decode one diagram character: a piece, an empty marker, or an error.
pub fn piece_from_diagram_char(symbol: char) -> Result<Option<PieceRecord>, ChessErrors> {
    let team = if symbol.is_ascii_uppercase() {
        PieceTeam::Light
    } else {
        PieceTeam::Dark
    };
    let class = match symbol.to_ascii_uppercase() {
        'P' => PieceClass::Pawn,
        'N' => PieceClass::Knight,
        'B' => PieceClass::Bishop,
        'R' => PieceClass::Rook,
        'Q' => PieceClass::Queen,
        'K' => PieceClass::King,
        '.' | '#' => return Ok(None),
        _ => return Err(ChessErrors::InvalidDiagramChar(symbol)),
    };
    Ok(Some(PieceRecord::new(class, team)))
}

/// Encode a piece back into its diagram character.
pub fn piece_to_diagram_char(piece: &PieceRecord) -> char {
    let symbol = match piece.class {
        PieceClass::Pawn => 'P',
        PieceClass::Knight => 'N',
        PieceClass::Bishop => 'B',
        PieceClass::Rook => 'R',
        PieceClass::Queen => 'Q',
        PieceClass::King => 'K',
    };
    match piece.team {
        PieceTeam::Light => symbol,
        PieceTeam::Dark => symbol.to_ascii_lowercase(),
    }
}
