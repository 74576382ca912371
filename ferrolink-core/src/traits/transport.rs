//! Byte-level duplex channel abstraction

/// Byte-oriented duplex channel
///
/// Implemented by serial drivers (UART, software serial, in-memory pipes in
/// tests). Reads must be non-blocking with respect to the link manager: a
/// `read` returns whatever is immediately available and never waits for
/// more.
pub trait Transport {
    /// Error type for transport operations
    type Error;

    /// Read up to `buf.len()` immediately-available bytes
    ///
    /// Returns the number of bytes read, which may be zero.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;

    /// Write bytes to the channel
    ///
    /// Expected to accept the full length for a single frame. Returns the
    /// number of bytes written.
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error>;

    /// Whether at least one byte is ready to read
    fn available(&mut self) -> bool;
}
