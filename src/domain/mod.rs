//! Domain layer containing the request pipeline vocabulary.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (identifiers)
//! - `skill` - Requests, responses, per-request input and pipeline errors
//! - `localization` - Translation tables and request-scoped translators
//! - `trivia` - Fact catalog and uniform selection

pub mod foundation;
pub mod localization;
pub mod skill;
pub mod trivia;
