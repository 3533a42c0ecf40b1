//! Skill assembly - wires content, handlers and interceptors into a
//! [`Dispatcher`] in the order the trivia skill needs.
//!
//! Handler order:
//!
//! 1. Launch
//! 2. Fact intent
//! 3. HelloWorldIntent
//! 4. AMAZON.HelpIntent
//! 5. AMAZON.CancelIntent / StopIntent / NavigateHomeIntent
//! 6. AMAZON.FallbackIntent
//! 7. SessionEnded
//! 8. Intent reflector (must stay last, it accepts every intent)

use std::sync::Arc;

use tracing::info;

use super::dispatcher::{BuildError, Dispatcher};
use super::handlers::{
    CancelAndStopIntentHandler, FactIntentHandler, FallbackIntentHandler,
    HelloWorldIntentHandler, HelpIntentHandler, IntentReflectorHandler, LaunchRequestHandler,
    SessionEndedRequestHandler, SkillErrorHandler, DEFAULT_FACT_INTENT,
};
use super::interceptors::{
    LocalizationInterceptor, LoggingRequestInterceptor, LoggingResponseInterceptor,
};
use crate::adapters::content::SkillContent;
use crate::ports::{RandomSource, RequestHandler};

/// User agent advertised when none is configured.
pub const DEFAULT_USER_AGENT: &str = "sample/hello-world/v1.2";

/// Tunables for [`build_skill`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillOptions {
    /// Intent name answered by the fact handler.
    pub fact_intent: String,
    /// Custom user agent; `None` disables it.
    pub user_agent: Option<String>,
}

impl Default for SkillOptions {
    fn default() -> Self {
        Self {
            fact_intent: DEFAULT_FACT_INTENT.to_string(),
            user_agent: Some(DEFAULT_USER_AGENT.to_string()),
        }
    }
}

/// Builds the trivia skill's dispatcher.
pub fn build_skill(
    content: &SkillContent,
    options: &SkillOptions,
    random: Arc<dyn RandomSource>,
) -> Result<Dispatcher, BuildError> {
    let handlers: Vec<Arc<dyn RequestHandler>> = vec![
        Arc::new(LaunchRequestHandler),
        Arc::new(FactIntentHandler::new(
            options.fact_intent.clone(),
            Arc::clone(&content.facts),
            random,
        )),
        Arc::new(HelloWorldIntentHandler),
        Arc::new(HelpIntentHandler),
        Arc::new(CancelAndStopIntentHandler),
        Arc::new(FallbackIntentHandler),
        Arc::new(SessionEndedRequestHandler),
        Arc::new(IntentReflectorHandler),
    ];

    let mut builder = Dispatcher::builder()
        .add_request_handlers(handlers)
        .add_request_interceptor(Arc::new(LocalizationInterceptor::new(Arc::clone(
            &content.translations,
        ))))
        .add_request_interceptor(Arc::new(LoggingRequestInterceptor::new(
            options.user_agent.clone(),
        )))
        .add_response_interceptor(Arc::new(LoggingResponseInterceptor))
        .with_error_handler(Arc::new(SkillErrorHandler::new(Arc::clone(
            &content.translations,
        ))));

    if let Some(user_agent) = &options.user_agent {
        builder = builder.with_custom_user_agent(user_agent.clone());
    }

    let dispatcher = builder.build()?;
    info!(
        handlers = ?dispatcher.handler_names(),
        fact_intent = %options.fact_intent,
        user_agent = dispatcher.user_agent().unwrap_or("-"),
        "Skill dispatcher built"
    );
    Ok(dispatcher)
}
