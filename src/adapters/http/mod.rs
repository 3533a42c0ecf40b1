//! HTTP adapters - the JSON transport in front of the dispatcher.

pub mod skill;

// Re-export key types for convenience
pub use skill::{skill_routes, SkillAppState};
