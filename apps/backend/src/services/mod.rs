//! Service layer: lifecycle orchestration and the resources it coordinates.

pub mod events;
pub mod game_flow;
pub mod game_locks;
pub mod join_code;

pub use events::{BroadcastSink, GameEventSink};
pub use game_flow::GameFlowService;
pub use game_locks::GameLocks;
pub use join_code::JoinCodes;
