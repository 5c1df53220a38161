//! Handler implementations

pub mod null;
pub mod stream;

pub use null::NullHandler;
pub use stream::StreamHandler;

// Re-export the trait next to its implementations
pub use crate::core::Handler;
