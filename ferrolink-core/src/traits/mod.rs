//! Hardware abstraction traits
//!
//! Implemented by platform code, consumed by the link manager.

pub mod clock;
pub mod transport;

pub use clock::Clock;
pub use transport::Transport;
