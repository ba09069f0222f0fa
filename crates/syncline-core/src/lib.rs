#![doc = include_str!("../README.md")]

pub mod clock;
pub mod env;
pub mod error;
pub mod random;

// Re-exports for convenience
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Result, SynclineError, TransportError};
pub use random::generate_random_string;
