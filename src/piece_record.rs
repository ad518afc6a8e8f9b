use crate::piece_class::PieceClass;
use crate::piece_team::PieceTeam;

/// An immutable (class, team) pair occupying one board cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PieceRecord {
    pub class: PieceClass,
    pub team: PieceTeam,
}

impl PieceRecord {
    pub fn new(class: PieceClass, team: PieceTeam) -> Self {
        PieceRecord { class, team }
    }
}
