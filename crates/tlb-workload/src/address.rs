//! Virtual address model.
//!
//! Addresses are plain 64-bit values rendered as `0x` followed by at least
//! eight lowercase hex digits. Values above `0xffff_ffff` are never masked;
//! the field simply grows.

use serde::{Serialize, Serializer};
use std::fmt;

/// Minimum number of hex digits in a rendered address.
pub const MIN_HEX_DIGITS: usize = 8;

/// A virtual memory address emitted by a workload generator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(pub u64);

impl Address {
    /// Raw 64-bit value.
    pub const fn value(self) -> u64 {
        self.0
    }

    /// The `0x`-prefixed, zero-padded form consumed by the simulator.
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl From<u64> for Address {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Address> for u64 {
    fn from(address: Address) -> Self {
        address.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `#` counts the prefix towards the width.
        write!(f, "{:#0width$x}", self.0, width = MIN_HEX_DIGITS + 2)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
