//! UInt160 - 20-byte script hash
//!
//! Bytes are stored little-endian, as the VM produces them. The text form is
//! `0x` followed by the bytes in reverse order, which is how script hashes are
//! conventionally displayed:
//!
//! ```text
//! bytes:   [0x01, 0x02, ..., 0x14]
//! display: 0x14131211...0201
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::ScriptHashError;

/// Length of a script hash in bytes
pub const UINT160_LEN: usize = 20;

/// Fixed 160-bit script identity.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct UInt160([u8; UINT160_LEN]);

impl UInt160 {
    /// All-zero hash
    pub const ZERO: UInt160 = UInt160([0; UINT160_LEN]);

    /// Create from raw little-endian bytes
    #[inline]
    pub const fn new(bytes: [u8; UINT160_LEN]) -> Self {
        Self(bytes)
    }

    /// Create from a slice that must hold exactly 20 bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ScriptHashError> {
        let array: [u8; UINT160_LEN] = bytes
            .try_into()
            .map_err(|_| ScriptHashError::InvalidLength(bytes.len()))?;
        Ok(Self(array))
    }

    /// Raw little-endian bytes
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; UINT160_LEN] {
        &self.0
    }

    /// Consume into raw little-endian bytes
    #[inline]
    pub const fn to_bytes(self) -> [u8; UINT160_LEN] {
        self.0
    }
}

impl From<[u8; UINT160_LEN]> for UInt160 {
    fn from(bytes: [u8; UINT160_LEN]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for UInt160 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for UInt160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut reversed = self.0;
        reversed.reverse();
        write!(f, "0x{}", hex::encode(reversed))
    }
}

impl fmt::Debug for UInt160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UInt160({})", self)
    }
}

impl FromStr for UInt160 {
    type Err = ScriptHashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        let mut bytes = hex::decode(digits)?;
        if bytes.len() != UINT160_LEN {
            return Err(ScriptHashError::InvalidLength(bytes.len()));
        }
        bytes.reverse();
        Self::from_slice(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequential() -> UInt160 {
        let mut bytes = [0u8; UINT160_LEN];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = i as u8 + 1;
        }
        UInt160::new(bytes)
    }

    #[test]
    fn test_zero() {
        assert_eq!(UInt160::ZERO, UInt160::default());
        assert_eq!(
            UInt160::ZERO.to_string(),
            "0x0000000000000000000000000000000000000000"
        );
    }

    #[test]
    fn test_display_is_reversed() {
        assert_eq!(
            sequential().to_string(),
            "0x14131211100f0e0d0c0b0a090807060504030201"
        );
    }

    #[test]
    fn test_parse() {
        let hash: UInt160 = "0x14131211100f0e0d0c0b0a090807060504030201".parse().unwrap();
        assert_eq!(hash, sequential());
        assert_eq!(hash.as_bytes()[0], 0x01);

        let unprefixed: UInt160 = "14131211100F0E0D0C0B0A090807060504030201".parse().unwrap();
        assert_eq!(unprefixed, sequential());
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "0x1234".parse::<UInt160>(),
            Err(ScriptHashError::InvalidLength(2))
        ));
        assert!(matches!(
            "0xzz131211100f0e0d0c0b0a090807060504030201".parse::<UInt160>(),
            Err(ScriptHashError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_from_slice() {
        let bytes = sequential().to_bytes();
        assert_eq!(UInt160::from_slice(&bytes).unwrap(), sequential());
        assert!(matches!(
            UInt160::from_slice(&bytes[..19]),
            Err(ScriptHashError::InvalidLength(19))
        ));
    }

    #[test]
    fn test_debug() {
        assert_eq!(
            format!("{:?}", UInt160::ZERO),
            "UInt160(0x0000000000000000000000000000000000000000)"
        );
    }
}
