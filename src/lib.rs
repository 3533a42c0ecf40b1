//! Skill Router - Request dispatch for localized voice-assistant skills
//!
//! This crate routes incoming voice requests through an ordered chain of
//! interceptors and handlers, answers in the caller's language, and ships a
//! trivia skill that tells random facts in English and Spanish.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
