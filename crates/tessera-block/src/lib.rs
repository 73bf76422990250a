//! Block properties, compact state ids, and orientation for the Tessera
//! block framework.
//!
//! A block type is declared as a [`BlockDef`]: an [`Orientation`] strategy
//! plus any extra [`Property`] values. Resolving it through a
//! [`BlockRegistry`] registers the properties into a [`PropertyLayout`],
//! validates that every combination fits the compact id, and caches the
//! resulting [`BlockType`].
//!
//! At placement time the strategy derives a [`BlockState`] from the
//! [`PlacementContext`], which the layout encodes into a [`CompactId`] for
//! storage. At render time the id is decoded back into a state and the
//! strategy produces the local-to-global [`Transform`](tessera_core::Transform).

pub mod block_type;
pub mod layout;
pub mod model;
pub mod orientation;
pub mod property;
pub mod registry;
pub mod state;

pub use block_type::{BlockDef, BlockType};
pub use layout::{CompactId, PropertyLayout, PropertyLayoutBuilder};
pub use model::ModelSpec;
pub use orientation::{Fixed, Half, Horizontal4, Omni6, Orientation, Pillar, PlacementContext};
pub use property::{Property, PropertyValue};
pub use registry::BlockRegistry;
pub use state::BlockState;
