//! Core types, math, and configuration for the Tessera block framework.
//!
//! This crate provides the foundational types shared by the block crates:
//! - Block coordinates and faces
//! - Cube rotations and local-to-global transforms
//! - Codec configuration and the common error type

pub mod config;
pub mod coords;
pub mod error;
pub mod face;
pub mod math;

pub use config::CodecConfig;
pub use coords::BlockPos;
pub use error::{Error, Result};
pub use face::{Axis, Face};
pub use math::{Aabb, Rotation, Transform};

/// Framework-wide constants
pub mod constants {
    /// Maximum number of properties a block type may register
    pub const MAX_PROPERTIES: usize = 4;
    /// Width of the stored compact id in bits
    pub const ID_BITS: u32 = 4;
    /// Number of distinct compact ids (2^ID_BITS)
    pub const ID_CAPACITY: usize = 1 << ID_BITS;
    /// Widest compact id the codec supports
    pub const MAX_ID_BITS: u32 = 16;
}
