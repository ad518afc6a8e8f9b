//! Terminal-oriented board renderer.
//!
//! Creates a human-readable board view from a `Position` for debugging,
//! tests, and diagnostics in text environments. Output-only: the rendered
//! grid is never re-parsed by the engine.

use crate::position::diagram::piece_to_diagram_char;
use crate::position::position::Position;

/// Render the board to a string for terminal output.
///
/// Ranks are printed top-down with rank labels on both sides; empty squares
/// show a `.`/`#` checkerboard filler. The filler is cosmetic: rendering
/// reproduces the piece placement exactly, but the filler characters need
/// not match the diagram the position was parsed from.
pub fn render_position(position: &Position) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..8i8).rev() {
        out.push(char::from(b'1' + rank as u8));
        out.push(' ');

        for file in 0..8i8 {
            match position.get((file, rank)) {
                Ok(Some(piece)) => out.push(piece_to_diagram_char(&piece)),
                _ => out.push(checkerboard_filler(file, rank)),
            }

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank as u8));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn checkerboard_filler(file: i8, rank: i8) -> char {
    if (file + rank) % 2 == 0 {
        '#'
    } else {
        '.'
    }
}
