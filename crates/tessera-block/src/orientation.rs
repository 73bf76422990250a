//! Orientation strategies.
//!
//! A strategy declares the properties that describe a block's orientation,
//! picks their values when the block is placed, and turns a stored state
//! back into a local-to-global [`Transform`].

use std::fmt;

use glam::DVec3;
use tessera_core::{Axis, BlockPos, Face, Result, Rotation, Transform};
use tracing::debug;

use crate::layout::{CompactId, PropertyLayout, PropertyLayoutBuilder};
use crate::property::{Property, PropertyValue};
use crate::state::BlockState;

/// What the host engine knows about a placement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementContext {
    /// Where the block is being placed.
    pub pos: BlockPos,
    /// Face of the neighbouring block that was clicked, pointing toward `pos`.
    pub face: Face,
    /// Hit point on the clicked face, in block-local coordinates (0..1).
    pub hit: DVec3,
    /// Horizontal direction the placer is looking toward.
    pub placer_facing: Face,
    /// Full look direction of the placer.
    pub look: DVec3,
    /// Id carried by the placed item, decoded into the base state.
    pub base: CompactId,
}

impl PlacementContext {
    /// Placement against `face`, with a placer looking north.
    #[must_use]
    pub fn new(pos: BlockPos, face: Face) -> Self {
        Self {
            pos,
            face,
            hit: DVec3::splat(0.5),
            placer_facing: Face::North,
            look: Face::North.normal().as_dvec3(),
            base: CompactId::default(),
        }
    }

    /// Set the hit point.
    #[must_use]
    pub const fn with_hit(mut self, hit: DVec3) -> Self {
        self.hit = hit;
        self
    }

    /// Set the placer's view from yaw and pitch in degrees.
    ///
    /// Yaw 0 looks south; positive pitch looks down.
    #[must_use]
    pub fn with_view(mut self, yaw_degrees: f64, pitch_degrees: f64) -> Self {
        let (yaw, pitch) = (yaw_degrees.to_radians(), pitch_degrees.to_radians());
        self.placer_facing = Face::from_yaw(yaw_degrees);
        self.look = DVec3::new(-yaw.sin() * pitch.cos(), -pitch.sin(), yaw.cos() * pitch.cos());
        self
    }

    /// Set the item id used as the base state.
    #[must_use]
    pub const fn with_base(mut self, base: CompactId) -> Self {
        self.base = base;
        self
    }
}

/// Orientation behaviour of a block type.
///
/// Implementations must be pure: equal inputs give equal outputs, since
/// callers may cache transforms.
pub trait Orientation: fmt::Debug + Send + Sync {
    /// Register the properties this strategy reads and writes.
    fn define_properties(&self, layout: &mut PropertyLayoutBuilder) -> Result<()>;

    /// Canonical state for a block placed in `context`, starting from `base`.
    fn on_placement(
        &self,
        layout: &PropertyLayout,
        context: &PlacementContext,
        base: BlockState,
    ) -> BlockState;

    /// Transform from block-local space into world space, anchored at
    /// `origin`.
    fn local_to_global(&self, layout: &PropertyLayout, state: &BlockState, origin: DVec3)
        -> Transform;
}

fn place_value(
    layout: &PropertyLayout,
    mut state: BlockState,
    name: &str,
    value: impl Into<PropertyValue>,
) -> BlockState {
    if let Err(err) = layout.set_value(&mut state, name, value) {
        debug!(block = layout.block(), %err, "placement kept base state");
    }
    state
}

/// No orientation: identity transform, placement keeps the base state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Fixed;

impl Orientation for Fixed {
    fn define_properties(&self, _layout: &mut PropertyLayoutBuilder) -> Result<()> {
        Ok(())
    }

    fn on_placement(
        &self,
        _layout: &PropertyLayout,
        _context: &PlacementContext,
        base: BlockState,
    ) -> BlockState {
        base
    }

    fn local_to_global(
        &self,
        _layout: &PropertyLayout,
        _state: &BlockState,
        origin: DVec3,
    ) -> Transform {
        Transform::from_origin(origin)
    }
}

/// Front faces one of the four horizontal directions, toward the placer.
///
/// The local model is authored facing north.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Horizontal4 {
    property: Property,
}

impl Horizontal4 {
    /// Default property name.
    pub const FACING: &'static str = "facing";

    /// Strategy using the `facing` property.
    #[must_use]
    pub fn new() -> Self {
        Self::named(Self::FACING)
    }

    /// Strategy using a custom property name.
    #[must_use]
    pub fn named(name: &'static str) -> Self {
        Self {
            property: Property::from_faces_unchecked(name, &Face::HORIZONTAL),
        }
    }
}

impl Default for Horizontal4 {
    fn default() -> Self {
        Self::new()
    }
}

impl Orientation for Horizontal4 {
    fn define_properties(&self, layout: &mut PropertyLayoutBuilder) -> Result<()> {
        layout.register(&self.property).map(|_| ())
    }

    fn on_placement(
        &self,
        layout: &PropertyLayout,
        context: &PlacementContext,
        base: BlockState,
    ) -> BlockState {
        place_value(
            layout,
            base,
            self.property.name(),
            context.placer_facing.opposite(),
        )
    }

    fn local_to_global(
        &self,
        layout: &PropertyLayout,
        state: &BlockState,
        origin: DVec3,
    ) -> Transform {
        let facing = layout
            .value(state, self.property.name())
            .and_then(PropertyValue::as_face)
            .unwrap_or(Face::North);
        Transform::new(origin, Rotation::face_to_face(Face::North, facing))
    }
}

/// Front faces any of the six directions: by default the side it was
/// placed against, or back along the placer's line of sight.
///
/// The local model is authored facing north.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Omni6 {
    property: Property,
    toward_placer: bool,
}

impl Omni6 {
    /// Default property name.
    pub const FACING: &'static str = "facing";

    /// Strategy using the `facing` property.
    #[must_use]
    pub fn new() -> Self {
        Self::named(Self::FACING)
    }

    /// Strategy using a custom property name.
    #[must_use]
    pub fn named(name: &'static str) -> Self {
        Self {
            property: Property::from_faces_unchecked(name, &Face::ALL),
            toward_placer: false,
        }
    }

    /// Front faces the placer, pitch included, like a piston or observer.
    #[must_use]
    pub fn toward_placer() -> Self {
        Self {
            toward_placer: true,
            ..Self::new()
        }
    }
}

impl Default for Omni6 {
    fn default() -> Self {
        Self::new()
    }
}

impl Orientation for Omni6 {
    fn define_properties(&self, layout: &mut PropertyLayoutBuilder) -> Result<()> {
        layout.register(&self.property).map(|_| ())
    }

    fn on_placement(
        &self,
        layout: &PropertyLayout,
        context: &PlacementContext,
        base: BlockState,
    ) -> BlockState {
        let facing = if self.toward_placer {
            Face::nearest(-context.look)
        } else {
            context.face
        };
        place_value(layout, base, self.property.name(), facing)
    }

    fn local_to_global(
        &self,
        layout: &PropertyLayout,
        state: &BlockState,
        origin: DVec3,
    ) -> Transform {
        let facing = layout
            .value(state, self.property.name())
            .and_then(PropertyValue::as_face)
            .unwrap_or(Face::North);
        Transform::new(origin, Rotation::face_to_face(Face::North, facing))
    }
}

/// Long axis follows the axis of the clicked face, like a log or column.
///
/// The local model is authored along Y.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pillar {
    property: Property,
}

impl Pillar {
    /// Default property name.
    pub const AXIS: &'static str = "axis";

    /// Strategy using the `axis` property.
    #[must_use]
    pub fn new() -> Self {
        Self::named(Self::AXIS)
    }

    /// Strategy using a custom property name.
    #[must_use]
    pub fn named(name: &'static str) -> Self {
        Self {
            property: Property::axis(name),
        }
    }
}

impl Default for Pillar {
    fn default() -> Self {
        Self::new()
    }
}

impl Orientation for Pillar {
    fn define_properties(&self, layout: &mut PropertyLayoutBuilder) -> Result<()> {
        layout.register(&self.property).map(|_| ())
    }

    fn on_placement(
        &self,
        layout: &PropertyLayout,
        context: &PlacementContext,
        base: BlockState,
    ) -> BlockState {
        place_value(layout, base, self.property.name(), context.face.axis())
    }

    fn local_to_global(
        &self,
        layout: &PropertyLayout,
        state: &BlockState,
        origin: DVec3,
    ) -> Transform {
        let axis = layout
            .value(state, self.property.name())
            .and_then(PropertyValue::as_axis)
            .unwrap_or(Axis::Y);
        let target = match axis {
            Axis::X => Face::East,
            Axis::Y => Face::Up,
            Axis::Z => Face::South,
        };
        Transform::new(origin, Rotation::face_to_face(Face::Up, target))
    }
}

/// Occupies the bottom or top half of the block, like a slab.
///
/// Placed on top of a block it sits low, under a block it sits high, and
/// against a side it follows the half of the face that was clicked. The
/// local model is authored in the bottom half; the top half is its mirror
/// image across the horizontal mid-plane.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Half {
    property: Property,
}

impl Half {
    /// Default property name.
    pub const HALF: &'static str = "half";
    /// Lower half value.
    pub const BOTTOM: &'static str = "bottom";
    /// Upper half value.
    pub const TOP: &'static str = "top";

    /// Strategy using the `half` property.
    #[must_use]
    pub fn new() -> Self {
        Self::named(Self::HALF)
    }

    /// Strategy using a custom property name.
    #[must_use]
    pub fn named(name: &'static str) -> Self {
        Self {
            property: Property::from_names_unchecked(name, &[Self::BOTTOM, Self::TOP]),
        }
    }
}

impl Default for Half {
    fn default() -> Self {
        Self::new()
    }
}

impl Orientation for Half {
    fn define_properties(&self, layout: &mut PropertyLayoutBuilder) -> Result<()> {
        layout.register(&self.property).map(|_| ())
    }

    fn on_placement(
        &self,
        layout: &PropertyLayout,
        context: &PlacementContext,
        base: BlockState,
    ) -> BlockState {
        let top = match context.face {
            Face::Up => false,
            Face::Down => true,
            _ => context.hit.y > 0.5,
        };
        let half = if top { Self::TOP } else { Self::BOTTOM };
        place_value(layout, base, self.property.name(), half)
    }

    fn local_to_global(
        &self,
        layout: &PropertyLayout,
        state: &BlockState,
        origin: DVec3,
    ) -> Transform {
        let top = PropertyValue::from(Self::TOP);
        let top = layout.value(state, self.property.name()) == Some(&top);
        let rotation = if top {
            Rotation::mirror(Axis::Y)
        } else {
            Rotation::IDENTITY
        };
        Transform::new(origin, rotation)
    }
}
