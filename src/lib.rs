//! Crate root module declarations for the Quince Chess position engine.
//!
//! This file exposes all top-level subsystems (the position data model,
//! per-piece move generation, attack detection, checkmate inspection,
//! search, engines, and utility helpers) so binaries, tests, and external
//! tooling can import stable module paths.

pub mod board_location;
pub mod chess_errors;
pub mod piece_class;
pub mod piece_record;
pub mod piece_team;
pub mod scoring;

pub mod position {
    pub mod diagram;
    pub mod position;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
    pub mod sliding;
}

pub mod attacks {
    pub mod aggregate;
    pub mod attack_result;
    pub mod pawn_attacks;
    pub mod sliding_attacks;
    pub mod stepping_attacks;
}

pub mod inspect {
    pub mod checkmate;
}

pub mod search {
    pub mod evaluate;
    pub mod extended_evaluate;
    pub mod minimax;
    pub mod negamax;
}

pub mod engines {
    pub mod engine_random;
}

pub mod utils {
    pub mod render_position;
}
