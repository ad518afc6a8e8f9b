/// Represents the team (color) of a chess piece.
/// Used to distinguish between dark (black) and light (white) pieces.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PieceTeam {
    /// The dark (black) side.
    Dark,
    /// The light (white) side.
    Light,
}

impl PieceTeam {
    pub fn opponent(self) -> PieceTeam {
        match self {
            PieceTeam::Dark => PieceTeam::Light,
            PieceTeam::Light => PieceTeam::Dark,
        }
    }

    pub fn index(self) -> usize {
        match self {
            PieceTeam::Light => 0,
            PieceTeam::Dark => 1,
        }
    }
}
