//! Per-request context threaded through the pipeline.

use super::errors::HandlerError;
use super::request::{SessionAttributes, SkillRequest};
use crate::domain::localization::Translator;

/// Everything a handler or interceptor sees for one dispatch cycle.
///
/// The request itself is read-only. Session attributes may be changed in
/// place. The translator starts unbound and is attached by the localization
/// interceptor, so code running after a failed pre-stage must cope with
/// [`HandlerInput::translator`] returning `None`.
#[derive(Debug, Clone)]
pub struct HandlerInput {
    request: SkillRequest,
    session_attributes: SessionAttributes,
    translator: Option<Translator>,
}

impl HandlerInput {
    pub fn new(request: SkillRequest, session_attributes: SessionAttributes) -> Self {
        Self {
            request,
            session_attributes,
            translator: None,
        }
    }

    pub fn request(&self) -> &SkillRequest {
        &self.request
    }

    pub fn session_attributes(&self) -> &SessionAttributes {
        &self.session_attributes
    }

    pub fn session_attributes_mut(&mut self) -> &mut SessionAttributes {
        &mut self.session_attributes
    }

    /// Binds the request-scoped translator, replacing any earlier binding.
    pub fn bind_translator(&mut self, translator: Translator) {
        self.translator = Some(translator);
    }

    pub fn translator(&self) -> Option<&Translator> {
        self.translator.as_ref()
    }

    /// Translates `key` with the bound translator.
    pub fn translate(&self, key: &str, args: &[&str]) -> Result<String, HandlerError> {
        let translator = self.translator().ok_or(HandlerError::TranslatorUnbound)?;
        Ok(translator.translate(key, args)?)
    }

    /// Translates a key that takes no arguments.
    pub fn t(&self, key: &str) -> Result<String, HandlerError> {
        self.translate(key, &[])
    }

    /// Releases the session attributes once the cycle is complete.
    pub fn into_session_attributes(self) -> SessionAttributes {
        self.session_attributes
    }
}
