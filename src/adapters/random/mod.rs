//! Random Source Adapters
//!
//! - **ThreadRandomSource** - Thread-local RNG (production)
//! - **SequenceRandomSource** - Fixed replayed samples (testing)

mod sequence;
mod thread_rng;

pub use sequence::SequenceRandomSource;
pub use thread_rng::ThreadRandomSource;
