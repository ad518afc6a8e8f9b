use crate::board_location::BoardLocation;

/// Outcome of an attack-detection query, returned by value so queries
/// stay reentrant.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AttackResult {
    pub attacked: bool,
    /// The first attacking cell found, if any.
    pub attacker: Option<BoardLocation>,
}

impl AttackResult {
    /// The queried cell is not attacked.
    pub fn clear() -> Self {
        AttackResult {
            attacked: false,
            attacker: None,
        }
    }

    /// The queried cell is attacked from `attacker`.
    pub fn found(attacker: BoardLocation) -> Self {
        AttackResult {
            attacked: true,
            attacker: Some(attacker),
        }
    }
}
