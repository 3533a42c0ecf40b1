//! Trivia content domain.

pub mod facts;

pub use facts::{select_index, FactCatalog};
