//! Receive frame buffer with marker resynchronization
//!
//! Holds the bytes of the single in-flight receive frame. On a framing or
//! checksum failure the buffer slides its contents left to the next marker
//! occurrence, preserving bytes that may already belong to the next genuine
//! frame.

use ferrolink_protocol::{FRAME_SIZE, MARKER};
use heapless::Vec;

/// Fixed-capacity scratch space for one in-flight receive frame
#[derive(Debug, Default)]
pub(crate) struct FrameBuffer {
    bytes: Vec<u8, FRAME_SIZE>,
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Bytes accumulated so far
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Free capacity until the frame is complete
    pub fn remaining(&self) -> usize {
        FRAME_SIZE - self.bytes.len()
    }

    /// Whether a full frame has been accumulated
    pub fn is_full(&self) -> bool {
        self.bytes.is_full()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    pub fn clear(&mut self) {
        self.bytes.clear();
    }

    /// Append bytes read from the transport
    ///
    /// Callers read at most [`remaining`](Self::remaining) bytes, so the
    /// extend cannot overflow.
    pub fn extend(&mut self, chunk: &[u8]) {
        let _ = self.bytes.extend_from_slice(chunk);
    }

    /// Slide the buffer to the next marker occurrence
    ///
    /// Position 0 is known to have already failed, so the scan starts at 1.
    /// Returns true if a marker was found and the tail was kept; false if no
    /// marker exists in the accumulated bytes, in which case the buffer is
    /// emptied.
    pub fn resync(&mut self) -> bool {
        let offset = match self.bytes.iter().skip(1).position(|&b| b == MARKER) {
            Some(i) => i + 1,
            None => {
                self.bytes.clear();
                return false;
            }
        };

        let len = self.bytes.len();
        self.bytes.as_mut_slice().copy_within(offset..len, 0);
        self.bytes.truncate(len - offset);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extend_and_fill() {
        let mut buffer = FrameBuffer::new();
        assert_eq!(buffer.remaining(), FRAME_SIZE);

        buffer.extend(&[MARKER, 1, 2]);
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.remaining(), FRAME_SIZE - 3);
        assert!(!buffer.is_full());

        let rest = buffer.remaining();
        buffer.extend(&[0u8; FRAME_SIZE][..rest]);
        assert!(buffer.is_full());
        assert_eq!(buffer.remaining(), 0);
    }

    #[test]
    fn test_resync_keeps_tail_from_marker() {
        let mut buffer = FrameBuffer::new();
        buffer.extend(&[0x11, 0x22, MARKER, 0x33, 0x44]);

        assert!(buffer.resync());
        assert_eq!(buffer.as_slice(), &[MARKER, 0x33, 0x44]);
    }

    #[test]
    fn test_resync_skips_failed_leading_marker() {
        // Position 0 already failed (e.g. bad checksum); the scan must not
        // land on it again
        let mut buffer = FrameBuffer::new();
        buffer.extend(&[MARKER, 0x33, MARKER, 0x44]);

        assert!(buffer.resync());
        assert_eq!(buffer.as_slice(), &[MARKER, 0x44]);
    }

    #[test]
    fn test_resync_without_marker_empties() {
        let mut buffer = FrameBuffer::new();
        buffer.extend(&[0x11, 0x22, 0x33]);

        assert!(!buffer.resync());
        assert_eq!(buffer.len(), 0);
    }

    #[test]
    fn test_resync_single_byte_empties() {
        let mut buffer = FrameBuffer::new();
        buffer.extend(&[0x11]);

        assert!(!buffer.resync());
        assert_eq!(buffer.len(), 0);
    }
}
