//! Resource table for loaded assets
//!
//! Each loaded image/sound/font is owned by a catalog keyed by logical name
//! and released when the catalog drops. A missing entry is a distinct
//! fail-fast error instead of a null handle propagating into rendering.

use std::collections::HashMap;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("missing asset: {0}")]
    Missing(String),
    #[error("duplicate asset: {0}")]
    Duplicate(String),
}

/// Owns loaded resources of one kind (textures, sound chunks, fonts)
#[derive(Debug)]
pub struct AssetCatalog<T> {
    entries: HashMap<String, T>,
}

impl<T> AssetCatalog<T> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register a loaded resource under its logical name
    pub fn insert(&mut self, name: &str, asset: T) -> Result<(), AssetError> {
        if self.entries.contains_key(name) {
            return Err(AssetError::Duplicate(name.to_string()));
        }
        self.entries.insert(name.to_string(), asset);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<&T, AssetError> {
        self.entries
            .get(name)
            .ok_or_else(|| AssetError::Missing(name.to_string()))
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut T, AssetError> {
        self.entries
            .get_mut(name)
            .ok_or_else(|| AssetError::Missing(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for AssetCatalog<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let mut catalog: AssetCatalog<u32> = AssetCatalog::new();
        catalog.insert("bird", 1).unwrap();
        assert_eq!(*catalog.get("bird").unwrap(), 1);
    }

    #[test]
    fn missing_asset_is_an_error() {
        let catalog: AssetCatalog<u32> = AssetCatalog::new();
        let err = catalog.get("pipe").unwrap_err();
        assert!(matches!(err, AssetError::Missing(name) if name == "pipe"));
    }

    #[test]
    fn duplicate_insert_rejected() {
        let mut catalog: AssetCatalog<u32> = AssetCatalog::new();
        catalog.insert("ground", 1).unwrap();
        assert!(matches!(
            catalog.insert("ground", 2),
            Err(AssetError::Duplicate(_))
        ));
    }
}
