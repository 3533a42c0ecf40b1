//! Interceptors registered around every handler.

mod localization;
mod logging;

pub use localization::LocalizationInterceptor;
pub use logging::{LoggingRequestInterceptor, LoggingResponseInterceptor};
