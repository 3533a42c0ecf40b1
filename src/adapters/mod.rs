//! Adapters - Implementations of port interfaces and outer surfaces.
//!
//! - `content` - YAML translation table and fact catalog loading
//! - `random` - Random source implementations (thread RNG, fixed sequence)
//! - `http` - axum transport for the skill envelope

pub mod content;
pub mod http;
pub mod random;

pub use content::{ContentError, SkillContent};
pub use random::{SequenceRandomSource, ThreadRandomSource};
