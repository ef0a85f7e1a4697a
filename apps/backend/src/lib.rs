#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Chain-reaction territory game engine.
//!
//! Players take turns adding charge to cells of a rectangular board. A cell
//! holding more than its capacity explodes, handing one charge and the mover's
//! color to each orthogonal neighbor; the last color standing wins.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod infra;
pub mod repos;
pub mod services;
pub mod state;
pub mod telemetry;

// Re-exports for public API
pub use config::EngineConfig;
pub use error::{AppError, ProblemDetails};
pub use errors::ErrorCode;
pub use infra::state::build_state;
pub use services::game_flow::GameFlowService;
pub use state::app_state::AppState;

// Prelude for test and binary convenience
pub mod prelude {
    pub use super::domain::{ActionKind, Board, BoardAction, Color, GameEvent, GameId, PlayerId};
    pub use super::error::AppError;
    pub use super::repos::PlayerProfile;
    pub use super::services::game_flow::{
        GameEndCheck, GameFlowService, GameStateView, JoinOutcome, MoveOutcome,
    };
    pub use super::state::AppState;
}

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    dots_test_support::logging::init();
}
