//! Property state codec.
//!
//! A [`PropertyLayout`] is the ordered list of properties registered for one
//! block type. It converts between a [`BlockState`] and a [`CompactId`] using
//! mixed-radix encoding, each property's allowed-value count acting as the
//! radix of one digit. The first registered property is the least
//! significant digit.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use tessera_core::constants::MAX_PROPERTIES;
use tessera_core::{CodecConfig, Error, Result};
use tracing::{debug, trace};

use crate::property::{Property, PropertyValue};
use crate::state::BlockState;

/// Stored form of a block state, always below the codec's id capacity.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CompactId(u16);

impl CompactId {
    /// Wrap a raw stored value. Out-of-range values are masked on decode.
    #[inline]
    #[must_use]
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// Raw integer value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u16 {
        self.0
    }
}

impl From<u16> for CompactId {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl From<CompactId> for u16 {
    fn from(id: CompactId) -> Self {
        id.0
    }
}

impl fmt::Display for CompactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Collects properties for a block type before validation.
#[derive(Debug, Clone)]
pub struct PropertyLayoutBuilder {
    block: Cow<'static, str>,
    config: CodecConfig,
    properties: Vec<Property>,
}

impl PropertyLayoutBuilder {
    /// Start an empty layout for the named block type.
    #[must_use]
    pub fn new(block: impl Into<Cow<'static, str>>, config: CodecConfig) -> Self {
        Self {
            block: block.into(),
            config,
            properties: Vec::with_capacity(config.max_properties.min(MAX_PROPERTIES)),
        }
    }

    /// Append a property, snapshotting its current allowed values.
    pub fn register(&mut self, property: &Property) -> Result<&mut Self> {
        if self.properties.len() >= self.config.max_properties {
            return Err(Error::CapacityExceeded {
                block: self.block.to_string(),
                max: self.config.max_properties,
            });
        }
        if self.properties.iter().any(|p| p.name() == property.name()) {
            return Err(Error::DuplicateProperty {
                block: self.block.to_string(),
                property: property.name().to_string(),
            });
        }
        self.properties.push(property.clone());
        debug!(
            block = %self.block,
            property = property.name(),
            values = property.len(),
            registered = self.properties.len(),
            "registered block property"
        );
        Ok(self)
    }

    /// Number of properties registered so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// True before the first registration.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Check the config, then the combined state count against the id
    /// capacity.
    ///
    /// Returns the number of combinations.
    pub fn validate(&self) -> Result<usize> {
        self.config.validate()?;
        let combinations = self
            .properties
            .iter()
            .fold(1usize, |n, p| n.saturating_mul(p.len()));
        let capacity = self.config.capacity();
        if combinations > capacity {
            return Err(Error::CombinatorialOverflow {
                block: self.block.to_string(),
                combinations,
                capacity,
            });
        }
        Ok(combinations)
    }

    /// Validate and freeze the layout.
    pub fn build(self) -> Result<PropertyLayout> {
        let combinations = self.validate()?;
        debug!(
            block = %self.block,
            properties = self.properties.len(),
            combinations,
            "built property layout"
        );
        Ok(PropertyLayout {
            block: self.block,
            mask: self.config.mask(),
            config: self.config,
            properties: self.properties,
            combinations,
        })
    }
}

/// Frozen, validated property list of one block type.
///
/// Encoding and decoding are pure and total; all failure modes were checked
/// when the layout was built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyLayout {
    block: Cow<'static, str>,
    config: CodecConfig,
    properties: Vec<Property>,
    combinations: usize,
    mask: u32,
}

impl PropertyLayout {
    /// Start building a layout.
    #[must_use]
    pub fn builder(block: impl Into<Cow<'static, str>>, config: CodecConfig) -> PropertyLayoutBuilder {
        PropertyLayoutBuilder::new(block, config)
    }

    /// Name of the owning block type.
    #[must_use]
    pub fn block(&self) -> &str {
        &self.block
    }

    /// Limits this layout was validated against.
    #[must_use]
    pub const fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Registered properties in order.
    #[must_use]
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Number of registered properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// True for blocks without properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Number of distinct valid states.
    #[must_use]
    pub const fn combinations(&self) -> usize {
        self.combinations
    }

    /// Registration index of a property.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.properties.iter().position(|p| p.name() == name)
    }

    /// Every property at its first allowed value.
    #[must_use]
    pub fn default_state(&self) -> BlockState {
        BlockState::from_values(
            self.properties
                .iter()
                .map(|p| p.values()[0].clone())
                .collect(),
        )
    }

    /// Value of a named property in `state`.
    #[must_use]
    pub fn value<'a>(&self, state: &'a BlockState, name: &str) -> Option<&'a PropertyValue> {
        self.index_of(name).and_then(|i| state.get(i))
    }

    /// Set a named property in `state`.
    pub fn set_value(
        &self,
        state: &mut BlockState,
        name: &str,
        value: impl Into<PropertyValue>,
    ) -> Result<()> {
        let index = self.index_of(name).ok_or_else(|| Error::UnknownProperty {
            block: self.block.to_string(),
            property: name.to_string(),
        })?;
        let value = value.into();
        if !self.properties[index].allows(&value) {
            return Err(Error::ValueNotAllowed {
                property: name.to_string(),
                value: value.to_string(),
            });
        }
        state.set(index, value);
        Ok(())
    }

    /// Copy of `state` with a named property changed.
    pub fn with_value(
        &self,
        state: &BlockState,
        name: &str,
        value: impl Into<PropertyValue>,
    ) -> Result<BlockState> {
        let mut next = state.clone();
        self.set_value(&mut next, name, value)?;
        Ok(next)
    }

    /// Encode a state into its compact id.
    ///
    /// Iterates from the last registered property to the first, so the
    /// first property lands in the least significant digit. A value that is
    /// not in the property's allowed list encodes as index 0.
    #[must_use]
    pub fn encode(&self, state: &BlockState) -> CompactId {
        let mut id: u32 = 0;
        for (i, property) in self.properties.iter().enumerate().rev() {
            let index = match state.get(i).and_then(|v| property.index_of(v)) {
                Some(index) => index,
                None => {
                    debug!(
                        block = %self.block,
                        property = property.name(),
                        value = ?state.get(i),
                        "value not allowed, encoding as index 0"
                    );
                    0
                }
            };
            id = id
                .wrapping_mul(property.len() as u32)
                .wrapping_add(index as u32);
        }
        let id = CompactId((id & self.mask) as u16);
        trace!(block = %self.block, %id, "encoded state");
        id
    }

    /// Decode a compact id into a state.
    ///
    /// Total over every input: the id is masked to the configured width and
    /// ids past [`combinations`](Self::combinations) still yield some valid
    /// state.
    #[must_use]
    pub fn decode(&self, id: CompactId) -> BlockState {
        let mut rest = u32::from(id.get()) & self.mask;
        let mut state = self.default_state();
        for (i, property) in self.properties.iter().enumerate() {
            let n = property.len() as u32;
            let index = (rest % n) as usize;
            rest /= n;
            state.set(i, property.values()[index].clone());
        }
        trace!(block = %self.block, %id, "decoded state");
        state
    }

    /// Every valid state in ascending id order.
    pub fn states(&self) -> impl Iterator<Item = BlockState> + '_ {
        (0..self.combinations).map(move |i| self.decode(CompactId(i as u16)))
    }

    /// `name=value` pairs joined by commas.
    #[must_use]
    pub fn describe(&self, state: &BlockState) -> String {
        self.properties
            .iter()
            .zip(state.values())
            .map(|(p, v)| format!("{}={v}", p.name()))
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::Face;

    fn lamp() -> PropertyLayout {
        let facing =
            Property::faces("facing", &[Face::North, Face::South, Face::East, Face::West])
                .unwrap();
        let mut builder = PropertyLayout::builder("lamp", CodecConfig::default());
        builder
            .register(&facing)
            .unwrap()
            .register(&Property::boolean("lit"))
            .unwrap();
        builder.build().unwrap()
    }

    #[test]
    fn default_state_takes_first_values() {
        let layout = lamp();
        let state = layout.default_state();
        assert_eq!(layout.value(&state, "facing"), Some(&Face::North.into()));
        assert_eq!(layout.value(&state, "lit"), Some(&false.into()));
        assert_eq!(layout.encode(&state), CompactId::new(0));
    }

    #[test]
    fn first_property_is_least_significant() {
        let layout = lamp();
        let state = layout
            .with_value(&layout.default_state(), "facing", Face::East)
            .unwrap();
        let state = layout.with_value(&state, "lit", true).unwrap();
        // lit=1 * 4 + facing=2
        assert_eq!(layout.encode(&state), CompactId::new(6));
        assert_eq!(layout.decode(CompactId::new(6)), state);
    }

    #[test]
    fn set_value_rejects_unknown() {
        let layout = lamp();
        let mut state = layout.default_state();
        assert!(matches!(
            layout.set_value(&mut state, "powered", true),
            Err(Error::UnknownProperty { .. })
        ));
        assert!(matches!(
            layout.set_value(&mut state, "facing", Face::Up),
            Err(Error::ValueNotAllowed { .. })
        ));
        assert_eq!(state, layout.default_state());
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let mut builder = PropertyLayout::builder("switch", CodecConfig::default());
        builder.register(&Property::boolean("on")).unwrap();
        assert!(matches!(
            builder.register(&Property::boolean("on")),
            Err(Error::DuplicateProperty { .. })
        ));
        assert_eq!(builder.len(), 1);
    }

    #[test]
    fn empty_layout_has_one_state() {
        let layout = PropertyLayout::builder("stone", CodecConfig::default())
            .build()
            .unwrap();
        assert_eq!(layout.combinations(), 1);
        assert!(layout.default_state().is_empty());
        for raw in 0..16 {
            assert!(layout.decode(CompactId::new(raw)).is_empty());
        }
        assert_eq!(layout.encode(&layout.default_state()), CompactId::new(0));
    }

    #[test]
    fn bad_config_is_reported_not_panicked() {
        let builder = PropertyLayout::builder("wide", CodecConfig::default().with_id_bits(64));
        assert!(matches!(builder.validate(), Err(Error::InvalidConfig(_))));
        assert!(matches!(builder.build(), Err(Error::InvalidConfig(_))));

        let mut builder = PropertyLayout::builder("many", CodecConfig::new(usize::MAX, 4));
        builder.register(&Property::boolean("on")).unwrap();
        assert_eq!(builder.build().unwrap().combinations(), 2);

        let builder = PropertyLayout::builder("none", CodecConfig::new(0, 4));
        assert!(matches!(builder.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn describe_lists_pairs() {
        let layout = lamp();
        let state = layout.decode(CompactId::new(6));
        assert_eq!(layout.describe(&state), "facing=east,lit=true");
    }
}
