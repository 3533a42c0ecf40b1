//! Message keys used by the trivia skill.

pub const WELCOME_MESSAGE: &str = "WELCOME_MESSAGE";
pub const HELLO_MESSAGE: &str = "HELLO_MESSAGE";
pub const HELP_MESSAGE: &str = "HELP_MESSAGE";
pub const GOODBYE_MESSAGE: &str = "GOODBYE_MESSAGE";
pub const REFLECTOR_MESSAGE: &str = "REFLECTOR_MESSAGE";
pub const FALLBACK_MESSAGE: &str = "FALLBACK_MESSAGE";
pub const ERROR_MESSAGE: &str = "ERROR_MESSAGE";
pub const RANDOM_FACT: &str = "RANDOM_FACT";
pub const ANOTHER_FACT_PROMPT: &str = "ANOTHER_FACT_PROMPT";

/// Every key the bundled handlers translate.
pub const ALL: [&str; 9] = [
    WELCOME_MESSAGE,
    HELLO_MESSAGE,
    HELP_MESSAGE,
    GOODBYE_MESSAGE,
    REFLECTOR_MESSAGE,
    FALLBACK_MESSAGE,
    ERROR_MESSAGE,
    RANDOM_FACT,
    ANOTHER_FACT_PROMPT,
];
