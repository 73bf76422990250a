//! Process-wide block type registry.

use std::sync::Arc;

use hashbrown::HashMap;
use parking_lot::RwLock;
use tessera_core::{CodecConfig, Error, Result};
use tracing::debug;

use crate::block_type::{BlockDef, BlockType};

/// Block types keyed by name, built lazily on first use.
///
/// Building a type is a one-time critical section: the write lock is held
/// while the layout is registered and validated, so concurrent first use
/// never observes a partial layout or builds it twice. After that, lookups
/// take only the read lock and hand out shared descriptors.
pub struct BlockRegistry {
    config: CodecConfig,
    types: RwLock<HashMap<String, Arc<BlockType>>>,
}

impl BlockRegistry {
    /// Create an empty registry with the given codec limits.
    pub fn new(config: CodecConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            types: RwLock::new(HashMap::new()),
        })
    }

    /// Codec limits every type is validated against.
    pub const fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Get the type for `def`, building it on first use.
    ///
    /// A definition whose layout fails validation is not cached; every
    /// later call reports the same error. A different definition under an
    /// already built name fails with `ConflictingDefinition`.
    pub fn resolve(&self, def: &BlockDef) -> Result<Arc<BlockType>> {
        if let Some(block) = self.types.read().get(def.name()) {
            return Self::reuse(block, def);
        }

        let mut types = self.types.write();
        if let Some(block) = types.get(def.name()) {
            return Self::reuse(block, def);
        }
        let block = Arc::new(BlockType::from_def(def, &self.config)?);
        debug!(
            block = def.name(),
            properties = block.layout().len(),
            combinations = block.layout().combinations(),
            "registered block type"
        );
        types.insert(def.name().to_string(), Arc::clone(&block));
        Ok(block)
    }

    fn reuse(block: &Arc<BlockType>, def: &BlockDef) -> Result<Arc<BlockType>> {
        if block.matches(def) {
            Ok(Arc::clone(block))
        } else {
            Err(Error::ConflictingDefinition {
                block: def.name().to_string(),
            })
        }
    }

    /// Look up an already-built type.
    pub fn get(&self, name: &str) -> Option<Arc<BlockType>> {
        self.types.read().get(name).cloned()
    }

    /// Check if a type has been built.
    pub fn contains(&self, name: &str) -> bool {
        self.types.read().contains_key(name)
    }

    /// Get the number of built types.
    pub fn len(&self) -> usize {
        self.types.read().len()
    }

    /// Check if no types have been built.
    pub fn is_empty(&self) -> bool {
        self.types.read().is_empty()
    }

    /// Names of all built types, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.types.read().keys().cloned().collect();
        names.sort();
        names
    }
}

impl Default for BlockRegistry {
    fn default() -> Self {
        Self {
            config: CodecConfig::default(),
            types: RwLock::new(HashMap::new()),
        }
    }
}
