//! Per-type handler dispatch
//!
//! A dense table mapping packet types to registered handlers. Dispatch is
//! synchronous: a slow handler blocks further frame reception until it
//! returns.

use ferrolink_protocol::{Packet, PacketType, TYPE_COUNT};

/// A registered packet handler
///
/// The packet is passed by read-only reference and must not be retained
/// beyond the call; the receive buffer is reused immediately afterwards.
pub type Handler<'a> = &'a mut dyn FnMut(&Packet);

/// Handler table indexed by packet type
pub struct Dispatcher<'a> {
    handlers: [Option<Handler<'a>>; TYPE_COUNT],
}

impl<'a> Dispatcher<'a> {
    /// Create a dispatcher with no handlers registered
    pub fn new() -> Self {
        Self {
            handlers: core::array::from_fn(|_| None),
        }
    }

    /// Register a handler for a packet type, replacing any existing one
    ///
    /// Out-of-range types are unrepresentable: [`PacketType`] only carries
    /// valid tags.
    pub fn register(&mut self, packet_type: PacketType, handler: Handler<'a>) {
        self.handlers[packet_type.to_byte() as usize] = Some(handler);
    }

    /// Invoke the handler for the packet's type, if one is registered
    ///
    /// Returns true if a handler ran. An absent registration is a no-op, not
    /// an error.
    pub fn dispatch(&mut self, packet: &Packet) -> bool {
        match &mut self.handlers[packet.packet_type.to_byte() as usize] {
            Some(handler) => {
                handler(packet);
                true
            }
            None => false,
        }
    }
}

impl<'a> Default for Dispatcher<'a> {
    fn default() -> Self {
        Self::new()
    }
}
