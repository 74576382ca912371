//! Transport-agnostic packet framing and delivery for Ferrolink links
//!
//! This crate contains the link logic that does not depend on a concrete
//! serial driver:
//!
//! - Hardware abstraction traits (byte transport, monotonic clock)
//! - Framing state machine with marker resynchronization
//! - Per-type handler dispatch
//! - Frame sender with persistent outgoing flags
//! - Link statistics counters
//!
//! The receive path never surfaces an error: corrupted or stalled frames are
//! discarded and scanning continues, with failures counted in
//! [`LinkStats`].

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

mod buffer;
pub mod dispatch;
pub mod manager;
pub mod stats;
pub mod traits;

pub use dispatch::{Dispatcher, Handler};
pub use manager::{PacketManager, SendError, READ_TIMEOUT_MS};
pub use stats::LinkStats;
pub use traits::{Clock, Transport};
