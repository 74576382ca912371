//! Fletcher-16 frame checksum
//!
//! Two running sums: `sum1` accumulates byte values mod 255, `sum2`
//! accumulates the running value of `sum1` mod 255 after each byte. The
//! result packs `sum2` into the high byte and `sum1` into the low byte.
//!
//! This is a whole-frame integrity check sized to catch typical serial line
//! bit errors and random interference, not a CRC with guaranteed distance
//! properties.

/// Compute the Fletcher-16 checksum of a byte slice
pub fn fletcher16(data: &[u8]) -> u16 {
    let mut sum1: u16 = 0;
    let mut sum2: u16 = 0;

    for &byte in data {
        sum1 = (sum1 + byte as u16) % 255;
        sum2 = (sum2 + sum1) % 255;
    }

    (sum2 << 8) | sum1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(fletcher16(&[]), 0);
    }

    #[test]
    fn test_single_byte() {
        // One byte b < 255 gives sum1 = sum2 = b
        assert_eq!(fletcher16(&[0x42]), 0x4242);
        assert_eq!(fletcher16(&[0x01]), 0x0101);
    }

    #[test]
    fn test_modulus_wraps() {
        // 0xFF == 255 wraps both sums to zero
        assert_eq!(fletcher16(&[0xFF]), 0);
        assert_eq!(fletcher16(&[0xFF, 0x01]), 0x0101);
    }

    #[test]
    fn test_order_sensitive() {
        // [1, 2]: sum1 = 1 then 3, sum2 = 1 then 4
        assert_eq!(fletcher16(&[1, 2]), 0x0403);
        // [2, 1]: sum1 = 2 then 3, sum2 = 2 then 5
        assert_eq!(fletcher16(&[2, 1]), 0x0503);
    }

    #[test]
    fn test_zeros_accumulate_nothing() {
        assert_eq!(fletcher16(&[0, 0, 0, 0]), 0);
    }
}
