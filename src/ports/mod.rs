//! Ports - Interfaces at the seams of the request pipeline.
//!
//! ## Pipeline Ports
//!
//! - `RequestHandler` - Predicate + handler selected by first match
//! - `RequestInterceptor` - Runs before handler selection
//! - `ResponseInterceptor` - Runs after a successful handler
//! - `ErrorHandler` - Converts any failure into the final response
//!
//! ## Content Ports
//!
//! - `RandomSource` - Uniform samples for fact selection

mod error_handler;
mod interceptor;
mod random_source;
mod request_handler;

pub use error_handler::ErrorHandler;
pub use interceptor::{RequestInterceptor, ResponseInterceptor};
pub use random_source::RandomSource;
pub use request_handler::RequestHandler;
