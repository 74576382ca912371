//! Link statistics counters
//!
//! The receive path fails silently by design; these counters are the
//! observability layer on top of it. They are never consulted by the framing
//! algorithm itself.

/// Counters for delivered and discarded frames
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkStats {
    /// Valid frames handed to a registered handler
    pub delivered: u32,
    /// Valid frames for a type with no handler registered
    pub unhandled: u32,
    /// Full frames discarded on checksum mismatch
    pub checksum_failures: u32,
    /// Resynchronizations triggered by a missing marker byte
    pub marker_resyncs: u32,
    /// Full frames discarded for an out-of-range type byte
    pub unknown_type: u32,
    /// Partial frames abandoned after the read timeout
    pub timeouts: u32,
}
