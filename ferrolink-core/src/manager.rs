//! Link manager: framing state machine, dispatch, and send path
//!
//! The manager owns one receive frame buffer and one set of outgoing flags.
//! Reception is driven by repeated [`poll`](PacketManager::poll) calls from
//! an external loop; each call does a bounded amount of work, draining only
//! the bytes the transport reports as available.
//!
//! Every receive failure mode (stalled transfer, missing marker, checksum
//! mismatch, out-of-range type) is recovered locally by discarding data and
//! continuing to scan the stream. Nothing is surfaced to the caller of
//! `poll`; failures are counted in [`LinkStats`].

use crate::buffer::FrameBuffer;
use crate::dispatch::{Dispatcher, Handler};
use crate::stats::LinkStats;
use crate::traits::{Clock, Transport};
use ferrolink_protocol::{
    Flags, Packet, PacketError, PacketType, FRAME_SIZE, MARKER, MAX_PAYLOAD_SIZE,
};

/// Milliseconds a partial frame may stall before it is abandoned
pub const READ_TIMEOUT_MS: u64 = 100;

/// Errors from the send path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendError<E> {
    /// The transport rejected the write
    Transport(E),
    /// The transport accepted fewer bytes than one frame
    Truncated,
}

/// Reception progress for the single in-flight frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RxState {
    /// No bytes of a new frame consumed yet
    Idle,
    /// Frame partially received since `started_at`
    Accumulating { started_at: u64 },
}

/// Sends and receives fixed-size packets over a byte transport
///
/// Send and receive paths use separate buffers, so sending never disturbs an
/// in-progress receive. Handlers run synchronously from `poll` and must not
/// call back into the manager.
pub struct PacketManager<'a, T: Transport, C: Clock> {
    transport: T,
    clock: C,
    dispatcher: Dispatcher<'a>,
    rx: FrameBuffer,
    state: RxState,
    tx_flags: Flags,
    stats: LinkStats,
}

impl<'a, T: Transport, C: Clock> PacketManager<'a, T, C> {
    /// Create a manager over a transport and clock
    pub fn new(transport: T, clock: C) -> Self {
        Self {
            transport,
            clock,
            dispatcher: Dispatcher::new(),
            rx: FrameBuffer::new(),
            state: RxState::Idle,
            tx_flags: Flags::new(),
            stats: LinkStats::default(),
        }
    }

    /// Register a handler for a packet type, replacing any existing one
    pub fn register(&mut self, packet_type: PacketType, handler: Handler<'a>) {
        self.dispatcher.register(packet_type, handler);
    }

    /// Set or clear one of the four user flags on outgoing frames
    ///
    /// `index` must be in `[0, 3]`. The flag persists across sends until
    /// changed again.
    pub fn set_flag(&mut self, index: u8, value: bool) -> Result<(), PacketError> {
        self.tx_flags.set_user(index, value)
    }

    /// Set or clear the critical indicator on outgoing frames
    pub fn set_critical(&mut self, value: bool) {
        self.tx_flags.set_critical(value);
    }

    /// Counters for delivered and discarded frames
    pub fn stats(&self) -> LinkStats {
        self.stats
    }

    /// Serialize and write one frame to the transport
    ///
    /// The payload is clamped to [`MAX_PAYLOAD_SIZE`]; bytes past the clamp
    /// are dropped and the unused tail is zero-filled. Marker and checksum
    /// are set internally.
    pub fn send(
        &mut self,
        packet_type: PacketType,
        payload: &[u8],
    ) -> Result<(), SendError<T::Error>> {
        let len = payload.len().min(MAX_PAYLOAD_SIZE);
        let mut padded = [0u8; MAX_PAYLOAD_SIZE];
        padded[..len].copy_from_slice(&payload[..len]);

        let packet = Packet {
            packet_type,
            flags: self.tx_flags,
            payload: padded,
        };

        let frame = packet.to_bytes();
        let written = self.transport.write(&frame).map_err(SendError::Transport)?;
        if written != FRAME_SIZE {
            return Err(SendError::Truncated);
        }
        Ok(())
    }

    /// Drain available bytes and dispatch any completed frames
    ///
    /// Call repeatedly at the application's chosen cadence. Never blocks:
    /// with nothing available this only checks the stall timeout and
    /// returns.
    pub fn poll(&mut self) {
        if !self.transport.available() {
            if let RxState::Accumulating { started_at } = self.state {
                // A stalled half-received frame must not block future frames
                if self.clock.now_ms().saturating_sub(started_at) > READ_TIMEOUT_MS {
                    self.stats.timeouts += 1;
                    self.reset_rx();
                }
            }
            return;
        }

        while self.transport.available() {
            if !self.advance_frame() {
                break;
            }
        }
    }

    /// One read-and-evaluate step; returns false when no progress was made
    fn advance_frame(&mut self) -> bool {
        if self.state == RxState::Idle {
            self.rx.clear();
            self.state = RxState::Accumulating {
                started_at: self.clock.now_ms(),
            };
        }

        let mut chunk = [0u8; FRAME_SIZE];
        let want = self.rx.remaining();
        let read = match self.transport.read(&mut chunk[..want]) {
            Ok(0) | Err(_) => return false,
            Ok(read) => read,
        };
        self.rx.extend(&chunk[..read]);

        // Check the marker as early as possible rather than after a full
        // frame is wastefully accumulated
        if self.rx.as_slice()[0] != MARKER {
            self.stats.marker_resyncs += 1;
            self.resync();
            return true;
        }

        if !self.rx.is_full() {
            return true;
        }

        match Packet::decode(self.rx.as_slice()) {
            Ok(packet) => {
                if self.dispatcher.dispatch(&packet) {
                    self.stats.delivered += 1;
                } else {
                    self.stats.unhandled += 1;
                }
                self.reset_rx();
            }
            Err(PacketError::BadChecksum) => {
                self.stats.checksum_failures += 1;
                self.resync();
            }
            Err(_) => {
                // Out-of-range type with a passing checksum; treated as
                // malformed framing
                self.stats.unknown_type += 1;
                self.resync();
            }
        }
        true
    }

    /// Realign on the next marker occurrence, or go idle if there is none
    ///
    /// Bytes after a found marker are kept: they may be the start of the
    /// next genuine frame. The accumulation timestamp is kept as well, so a
    /// stalled resynchronized prefix still times out.
    fn resync(&mut self) {
        if !self.rx.resync() {
            self.state = RxState::Idle;
        }
    }

    fn reset_rx(&mut self) {
        self.rx.clear();
        self.state = RxState::Idle;
    }
}
