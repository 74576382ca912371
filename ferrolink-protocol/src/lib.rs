//! Ferrolink wire format
//!
//! This crate defines the fixed-size packet format used on Ferrolink serial
//! links (MCU-to-MCU UART). Frames carry a sentinel marker so a receiver can
//! realign on the byte stream after corruption; the checksum, not the marker,
//! is the authoritative frame boundary confirmation.
//!
//! # Frame layout
//!
//! All frames are exactly [`FRAME_SIZE`] bytes:
//! ```text
//! ┌────────┬──────┬───────┬─────────────┬──────────┐
//! │ MARKER │ TYPE │ FLAGS │ PAYLOAD     │ CHECKSUM │
//! │ 1B     │ 1B   │ 1B    │ 8B          │ 2B (LE)  │
//! └────────┴──────┴───────┴─────────────┴──────────┘
//! ```
//!
//! Unused payload bytes are zero-filled. The checksum is a Fletcher-16 sum
//! over every byte preceding it, stored low byte first. No byte stuffing is
//! performed: the marker value may legally appear inside payload or checksum
//! bytes.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod checksum;
pub mod packet;

pub use checksum::fletcher16;
pub use packet::{
    Flags, Packet, PacketError, PacketType, FRAME_SIZE, MARKER, MAX_PAYLOAD_SIZE, TYPE_COUNT,
};
