//! Block type descriptors.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use glam::DVec3;
use tessera_core::{BlockPos, CodecConfig, Result, Transform};
use tracing::trace;

use crate::layout::{CompactId, PropertyLayout};
use crate::model::ModelSpec;
use crate::orientation::{Fixed, Orientation, PlacementContext};
use crate::property::Property;
use crate::state::BlockState;

/// Unvalidated declaration of a block type.
///
/// Cheap to build; the property layout is only computed when the
/// definition is resolved through a [`BlockRegistry`](crate::BlockRegistry)
/// or [`BlockType::from_def`].
#[derive(Clone)]
pub struct BlockDef {
    name: Cow<'static, str>,
    orientation: Arc<dyn Orientation>,
    properties: Vec<Property>,
    model: Option<ModelSpec>,
}

impl BlockDef {
    /// A block with no orientation and no properties.
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            orientation: Arc::new(Fixed),
            properties: Vec::new(),
            model: None,
        }
    }

    /// Use an orientation strategy. Its properties are registered first.
    #[must_use]
    pub fn with_orientation(mut self, orientation: impl Orientation + 'static) -> Self {
        self.orientation = Arc::new(orientation);
        self
    }

    /// Add a block-specific property after the orientation properties.
    #[must_use]
    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    /// Attach a model descriptor.
    #[must_use]
    pub fn with_model(mut self, model: ModelSpec) -> Self {
        self.model = Some(model);
        self
    }

    /// Type name, also the registry key.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

fn same_orientation(a: &Arc<dyn Orientation>, b: &Arc<dyn Orientation>) -> bool {
    Arc::ptr_eq(a, b) || format!("{a:?}") == format!("{b:?}")
}

impl fmt::Debug for BlockDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockDef")
            .field("name", &self.name)
            .field("orientation", &self.orientation)
            .field("properties", &self.properties.len())
            .finish_non_exhaustive()
    }
}

/// Validated, immutable block type: one orientation strategy plus one
/// property layout.
#[derive(Debug)]
pub struct BlockType {
    name: Cow<'static, str>,
    orientation: Arc<dyn Orientation>,
    layout: Arc<PropertyLayout>,
    properties: Vec<Property>,
    model: Option<ModelSpec>,
}

impl BlockType {
    /// Register the definition's properties and validate the layout.
    pub fn from_def(def: &BlockDef, config: &CodecConfig) -> Result<Self> {
        let mut builder = PropertyLayout::builder(def.name.clone(), *config);
        def.orientation.define_properties(&mut builder)?;
        for property in &def.properties {
            builder.register(property)?;
        }
        Ok(Self {
            name: def.name.clone(),
            orientation: Arc::clone(&def.orientation),
            layout: Arc::new(builder.build()?),
            properties: def.properties.clone(),
            model: def.model.clone(),
        })
    }

    /// Type name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether `def` declares exactly this type.
    #[must_use]
    pub fn matches(&self, def: &BlockDef) -> bool {
        self.name == def.name
            && self.properties == def.properties
            && self.model == def.model
            && same_orientation(&self.orientation, &def.orientation)
    }

    /// Registered properties and codec.
    #[must_use]
    pub fn layout(&self) -> &Arc<PropertyLayout> {
        &self.layout
    }

    /// Orientation strategy.
    #[must_use]
    pub fn orientation(&self) -> &dyn Orientation {
        self.orientation.as_ref()
    }

    /// Model descriptor, if any.
    #[must_use]
    pub const fn model(&self) -> Option<&ModelSpec> {
        self.model.as_ref()
    }

    /// Every property at its first allowed value.
    #[must_use]
    pub fn default_state(&self) -> BlockState {
        self.layout.default_state()
    }

    /// State to compact id.
    #[must_use]
    pub fn encode(&self, state: &BlockState) -> CompactId {
        self.layout.encode(state)
    }

    /// Compact id to state.
    #[must_use]
    pub fn decode(&self, id: CompactId) -> BlockState {
        self.layout.decode(id)
    }

    /// Canonical state for a placement, starting from the item's base id.
    #[must_use]
    pub fn placement_state(&self, context: &PlacementContext) -> BlockState {
        let base = self.layout.decode(context.base);
        self.orientation.on_placement(&self.layout, context, base)
    }

    /// Compact id to store for a placement.
    #[must_use]
    pub fn on_placement(&self, context: &PlacementContext) -> CompactId {
        let id = self.encode(&self.placement_state(context));
        trace!(block = %self.name, pos = ?context.pos, face = %context.face, %id, "placed block");
        id
    }

    /// Transform for a stored id with the local origin at `origin`.
    #[must_use]
    pub fn transform_for(&self, id: CompactId, origin: DVec3) -> Transform {
        let state = self.layout.decode(id);
        self.orientation.local_to_global(&self.layout, &state, origin)
    }

    /// Rotation only, anchored at the zero point.
    #[must_use]
    pub fn local_to_global_rotation(&self, id: CompactId) -> Transform {
        self.transform_for(id, DVec3::ZERO)
    }

    /// Full transform anchored at the centre of the block at `pos`.
    #[must_use]
    pub fn local_to_global_transform(&self, id: CompactId, pos: BlockPos) -> Transform {
        self.transform_for(id, pos.center())
    }

    /// Transform for drawing the block's model at `pos`, with the model
    /// origin offset applied in local space.
    #[must_use]
    pub fn render_transform(&self, id: CompactId, pos: BlockPos) -> Transform {
        let placed = self.local_to_global_transform(id, pos);
        match &self.model {
            Some(model) => placed * Transform::from_origin(-model.origin),
            None => placed,
        }
    }
}
