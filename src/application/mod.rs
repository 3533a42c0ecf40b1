//! Application layer - the dispatch pipeline and the trivia skill built on it.
//!
//! The dispatcher is generic over handlers and interceptors; `skill` decides
//! which ones the trivia skill registers and in what order.

pub mod dispatcher;
pub mod handlers;
pub mod interceptors;
pub mod skill;

pub use dispatcher::{
    fallback_response, BuildError, DispatchOutcome, Dispatcher, DispatcherBuilder, FALLBACK_SPEECH,
};
pub use skill::{build_skill, SkillOptions, DEFAULT_USER_AGENT};
