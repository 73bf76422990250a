//! Codec configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{ID_BITS, MAX_ID_BITS, MAX_PROPERTIES};
use crate::error::{Error, Result};

/// Limits applied to every block type's property layout.
///
/// The defaults match a 4-bit storage field: at most 4 properties and
/// 16 distinct states per block type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Maximum number of registered properties per block type.
    pub max_properties: usize,
    /// Width of the stored compact id in bits.
    pub id_bits: u32,
}

impl CodecConfig {
    /// Create a config with explicit limits.
    #[must_use]
    pub const fn new(max_properties: usize, id_bits: u32) -> Self {
        Self {
            max_properties,
            id_bits,
        }
    }

    /// Set the maximum property count.
    #[must_use]
    pub const fn with_max_properties(mut self, max_properties: usize) -> Self {
        self.max_properties = max_properties;
        self
    }

    /// Set the compact id width.
    #[must_use]
    pub const fn with_id_bits(mut self, id_bits: u32) -> Self {
        self.id_bits = id_bits;
        self
    }

    /// Number of distinct compact ids, saturating for widths past `usize`.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        match 1usize.checked_shl(self.id_bits) {
            Some(capacity) => capacity,
            None => usize::MAX,
        }
    }

    /// Bit mask applied to every encoded or decoded id.
    #[inline]
    #[must_use]
    pub const fn mask(&self) -> u32 {
        match 1u32.checked_shl(self.id_bits) {
            Some(capacity) => capacity - 1,
            None => u32::MAX,
        }
    }

    /// Check that the limits are usable.
    pub fn validate(&self) -> Result<()> {
        if self.id_bits == 0 || self.id_bits > MAX_ID_BITS {
            return Err(Error::InvalidConfig(format!(
                "id_bits must be in 1..={MAX_ID_BITS}, got {}",
                self.id_bits
            )));
        }
        if self.max_properties == 0 {
            return Err(Error::InvalidConfig(
                "max_properties must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self::new(MAX_PROPERTIES, ID_BITS)
    }
}
