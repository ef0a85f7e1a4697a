//! Infrastructure layer: state assembly.

pub mod state;
