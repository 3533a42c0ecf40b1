//! Application handlers.
//!
//! The concrete request handlers of the trivia skill plus its error handler.
//! Registration order matters and lives in [`crate::application::skill`].

mod cancel_and_stop;
mod error;
mod fact;
mod fallback;
mod hello;
mod help;
mod intent_reflector;
mod launch;
mod session_ended;

pub use cancel_and_stop::{CancelAndStopIntentHandler, EXIT_INTENTS};
pub use error::SkillErrorHandler;
pub use fact::{FactIntentHandler, DEFAULT_FACT_INTENT};
pub use fallback::{FallbackIntentHandler, FALLBACK_INTENT};
pub use hello::{HelloWorldIntentHandler, HELLO_WORLD_INTENT};
pub use help::{HelpIntentHandler, HELP_INTENT};
pub use intent_reflector::IntentReflectorHandler;
pub use launch::LaunchRequestHandler;
pub use session_ended::SessionEndedRequestHandler;
