//! Packet type, flags, and frame encode/decode
//!
//! Frames are encoded and decoded field by field with an explicit byte
//! order; nothing depends on in-memory struct layout.

use crate::checksum::fletcher16;

/// Frame start sentinel byte
pub const MARKER: u8 = 0xAA;

/// Maximum payload size in bytes
pub const MAX_PAYLOAD_SIZE: usize = 8;

/// Number of defined packet types
pub const TYPE_COUNT: usize = 3;

/// Complete frame size (MARKER + TYPE + FLAGS + PAYLOAD + CHECKSUM)
pub const FRAME_SIZE: usize = 1 + 1 + 1 + MAX_PAYLOAD_SIZE + 2;

/// Offset of the checksum field within a frame
const CHECKSUM_OFFSET: usize = FRAME_SIZE - 2;

/// High bit of the flags field, reserved as the critical indicator
const CRITICAL_BIT: u8 = 0x80;

/// Number of user-definable flag bits (bits 0-3)
const USER_FLAG_COUNT: u8 = 4;

/// Errors that can occur while encoding, decoding, or building packets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PacketError {
    /// Payload exceeds maximum allowed size
    PayloadTooLarge,
    /// Buffer too small for encoding
    BufferTooSmall,
    /// Frame is shorter than the fixed frame size
    Truncated,
    /// First byte is not the marker sentinel
    BadMarker,
    /// Checksum mismatch
    BadChecksum,
    /// Type byte outside the defined range
    UnknownType,
    /// User flag index outside [0, 3]
    FlagOutOfRange,
}

/// Packet type tag
///
/// The `Ack` tag is reserved on the wire; no acknowledgment semantics are
/// attached to it by this layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PacketType {
    None,
    Data,
    Ack,
}

impl PacketType {
    /// Parse a type from its wire format byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(PacketType::None),
            1 => Some(PacketType::Data),
            2 => Some(PacketType::Ack),
            _ => None,
        }
    }

    /// Convert to wire format byte
    pub fn to_byte(self) -> u8 {
        match self {
            PacketType::None => 0,
            PacketType::Data => 1,
            PacketType::Ack => 2,
        }
    }
}

/// Flags bitfield
///
/// Bit 7 is the critical indicator, bits 0-3 are four independent
/// user-definable flags, bits 4-6 are reserved and left clear.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Flags(u8);

impl Flags {
    /// All flags clear
    pub const fn new() -> Self {
        Self(0)
    }

    /// Wrap a raw flags byte as received on the wire
    pub const fn from_byte(byte: u8) -> Self {
        Self(byte)
    }

    /// Raw flags byte for the wire
    pub const fn to_byte(self) -> u8 {
        self.0
    }

    /// Set or clear one of the four user flags
    ///
    /// `index` must be in `[0, 3]`.
    pub fn set_user(&mut self, index: u8, value: bool) -> Result<(), PacketError> {
        if index >= USER_FLAG_COUNT {
            return Err(PacketError::FlagOutOfRange);
        }
        if value {
            self.0 |= 1 << index;
        } else {
            self.0 &= !(1 << index);
        }
        Ok(())
    }

    /// Read one of the four user flags
    pub fn user(self, index: u8) -> Result<bool, PacketError> {
        if index >= USER_FLAG_COUNT {
            return Err(PacketError::FlagOutOfRange);
        }
        Ok(self.0 & (1 << index) != 0)
    }

    /// Set or clear the critical indicator
    pub fn set_critical(&mut self, value: bool) {
        if value {
            self.0 |= CRITICAL_BIT;
        } else {
            self.0 &= !CRITICAL_BIT;
        }
    }

    /// Whether the critical indicator is set
    pub fn is_critical(self) -> bool {
        self.0 & CRITICAL_BIT != 0
    }
}

/// A decoded or constructed packet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Packet {
    /// Packet type tag
    pub packet_type: PacketType,
    /// Flags bitfield
    pub flags: Flags,
    /// Payload, zero-filled past the caller-provided bytes
    pub payload: [u8; MAX_PAYLOAD_SIZE],
}

impl Packet {
    /// Create a packet with the given type and payload
    ///
    /// The payload is zero-padded to [`MAX_PAYLOAD_SIZE`].
    pub fn new(packet_type: PacketType, payload: &[u8]) -> Result<Self, PacketError> {
        if payload.len() > MAX_PAYLOAD_SIZE {
            return Err(PacketError::PayloadTooLarge);
        }

        let mut padded = [0u8; MAX_PAYLOAD_SIZE];
        padded[..payload.len()].copy_from_slice(payload);

        Ok(Self {
            packet_type,
            flags: Flags::new(),
            payload: padded,
        })
    }

    /// Encode this packet into a byte buffer
    ///
    /// The marker and checksum are filled in here; a caller cannot produce a
    /// frame with an incorrect checksum. Returns the number of bytes written.
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, PacketError> {
        if buffer.len() < FRAME_SIZE {
            return Err(PacketError::BufferTooSmall);
        }

        buffer[0] = MARKER;
        buffer[1] = self.packet_type.to_byte();
        buffer[2] = self.flags.to_byte();
        buffer[3..CHECKSUM_OFFSET].copy_from_slice(&self.payload);

        let checksum = fletcher16(&buffer[..CHECKSUM_OFFSET]);
        buffer[CHECKSUM_OFFSET..FRAME_SIZE].copy_from_slice(&checksum.to_le_bytes());

        Ok(FRAME_SIZE)
    }

    /// Encode this packet into a fixed frame array
    pub fn to_bytes(&self) -> [u8; FRAME_SIZE] {
        let mut frame = [0u8; FRAME_SIZE];
        // Cannot fail: the buffer is exactly one frame
        let _ = self.encode(&mut frame);
        frame
    }

    /// Decode a packet from a complete frame
    ///
    /// Checks, in order: length, marker, checksum, type range.
    pub fn decode(buffer: &[u8]) -> Result<Self, PacketError> {
        if buffer.len() < FRAME_SIZE {
            return Err(PacketError::Truncated);
        }
        if buffer[0] != MARKER {
            return Err(PacketError::BadMarker);
        }

        let received = u16::from_le_bytes([buffer[CHECKSUM_OFFSET], buffer[CHECKSUM_OFFSET + 1]]);
        if received != fletcher16(&buffer[..CHECKSUM_OFFSET]) {
            return Err(PacketError::BadChecksum);
        }

        let packet_type = PacketType::from_byte(buffer[1]).ok_or(PacketError::UnknownType)?;

        let mut payload = [0u8; MAX_PAYLOAD_SIZE];
        payload.copy_from_slice(&buffer[3..CHECKSUM_OFFSET]);

        Ok(Self {
            packet_type,
            flags: Flags::from_byte(buffer[2]),
            payload,
        })
    }
}
