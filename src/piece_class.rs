/// The six kinds of chess piece. Pieces carry no behavior; movement and
/// attack logic dispatch on `(class, team)` externally.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PieceClass {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// The classes a pawn may promote to, in the order the generator emits
/// promotion children.
pub const PROMOTION_CLASSES: [PieceClass; 4] = [
    PieceClass::Queen,
    PieceClass::Rook,
    PieceClass::Knight,
    PieceClass::Bishop,
];
