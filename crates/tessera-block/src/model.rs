//! Model descriptors handed to the renderer.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Which model and textures to draw a block with.
///
/// `origin` is the point in model space that sits on the block's local
/// origin, for models not authored around the block centre.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelSpec {
    pub model: String,
    pub origin: DVec3,
    pub textures: Vec<String>,
}

impl ModelSpec {
    /// Model centred on the block.
    #[must_use]
    pub fn new(model: impl Into<String>, textures: &[&str]) -> Self {
        Self {
            model: model.into(),
            origin: DVec3::ZERO,
            textures: textures.iter().map(|t| (*t).to_string()).collect(),
        }
    }

    /// Set the model-space origin.
    #[must_use]
    pub const fn with_origin(mut self, origin: DVec3) -> Self {
        self.origin = origin;
        self
    }
}
