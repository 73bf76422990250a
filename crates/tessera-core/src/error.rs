//! Error types for the framework.

use thiserror::Error;

/// Framework-wide error type.
///
/// Every variant is a configuration-time failure: it is raised while a block
/// type is being declared, never while encoding or decoding a state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// More properties were registered than the codec allows
    #[error("Block {block} has too many properties ({max} allowed)")]
    CapacityExceeded { block: String, max: usize },

    /// The registered properties span more states than the id can hold
    #[error("Block {block} has {combinations} combinations of property values ({capacity} allowed)")]
    CombinatorialOverflow {
        block: String,
        combinations: usize,
        capacity: usize,
    },

    /// A property was declared with an unusable value set
    #[error("Invalid property {property}: {reason}")]
    InvalidProperty { property: String, reason: String },

    /// The same property name was registered twice on one block
    #[error("Block {block} already has a property named {property}")]
    DuplicateProperty { block: String, property: String },

    /// Lookup of a property the block never registered
    #[error("Block {block} has no property named {property}")]
    UnknownProperty { block: String, property: String },

    /// A value outside the property's allowed set
    #[error("Value {value} is not allowed for property {property}")]
    ValueNotAllowed { property: String, value: String },

    /// A second, different declaration under an already built name
    #[error("Block {block} is already defined differently")]
    ConflictingDefinition { block: String },

    /// Codec configuration out of range
    #[error("Invalid codec config: {0}")]
    InvalidConfig(String),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
