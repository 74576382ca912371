//! Monotonic time source

/// Monotonic millisecond clock
///
/// Used only to abandon stalled partial frames; wall-clock accuracy is not
/// required.
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin
    fn now_ms(&self) -> u64;
}
