//! Block states: one value per registered property.

use crate::property::PropertyValue;

/// Assignment of one allowed value to every property of a block type.
///
/// Values are stored positionally in registration order, so a state is only
/// meaningful together with the [`PropertyLayout`](crate::PropertyLayout)
/// that produced it. Equality compares positionally.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BlockState {
    values: Vec<PropertyValue>,
}

impl BlockState {
    pub(crate) const fn from_values(values: Vec<PropertyValue>) -> Self {
        Self { values }
    }

    /// Value of the property at a registration index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&PropertyValue> {
        self.values.get(index)
    }

    /// All values in registration order.
    #[must_use]
    pub fn values(&self) -> &[PropertyValue] {
        &self.values
    }

    /// Number of assigned properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True for blocks without properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub(crate) fn set(&mut self, index: usize, value: PropertyValue) {
        if let Some(slot) = self.values.get_mut(index) {
            *slot = value;
        }
    }
}
