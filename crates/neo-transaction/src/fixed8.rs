//! Fixed-point amount with eight decimal places.

use std::fmt;

/// Number of raw units in one whole token.
pub const FIXED8_FACTOR: i64 = 100_000_000;

/// A signed 64-bit amount scaled by 10^8, stored as 8 bytes little-endian.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fixed8(pub i64);

impl Fixed8 {
    pub const ZERO: Fixed8 = Fixed8(0);

    /// Encoded size in bytes.
    pub const SIZE: usize = 8;

    /// An amount of whole tokens, or `None` on overflow.
    pub fn from_whole(units: i64) -> Option<Self> {
        units.checked_mul(FIXED8_FACTOR).map(Fixed8)
    }

    /// The raw scaled value.
    pub fn raw(&self) -> i64 {
        self.0
    }

    pub fn checked_add(self, other: Fixed8) -> Option<Fixed8> {
        self.0.checked_add(other.0).map(Fixed8)
    }
}

/// Decimal rendering with trailing fractional zeros removed, e.g. `1.5`.
impl fmt::Display for Fixed8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let factor = FIXED8_FACTOR as u64;
        let whole = abs / factor;
        let frac = abs % factor;
        if frac == 0 {
            return write!(f, "{}{}", sign, whole);
        }
        let digits = format!("{:08}", frac);
        write!(f, "{}{}.{}", sign, whole, digits.trim_end_matches('0'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Fixed8(0).to_string(), "0");
        assert_eq!(Fixed8(FIXED8_FACTOR).to_string(), "1");
        assert_eq!(Fixed8(150_000_000).to_string(), "1.5");
        assert_eq!(Fixed8(1).to_string(), "0.00000001");
        assert_eq!(Fixed8(-250_000_000).to_string(), "-2.5");
        assert_eq!(Fixed8(i64::MIN).to_string(), "-92233720368.54775808");
    }

    #[test]
    fn test_from_whole() {
        assert_eq!(Fixed8::from_whole(3), Some(Fixed8(300_000_000)));
        assert_eq!(Fixed8::from_whole(i64::MAX), None);
        assert_eq!(Fixed8(1).checked_add(Fixed8(i64::MAX)), None);
    }
}
