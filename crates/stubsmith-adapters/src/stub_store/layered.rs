use stubsmith_core::{
    application::{ApplicationError, ports::StubStore},
    domain::{Stub, StubName},
    error::{StubsmithError, StubsmithResult},
};
use tracing::debug;

use super::{BuiltinStubStore, DirectoryStubStore};

/// Stores consulted in order; the first one holding a stub serves it.
pub struct LayeredStubStore {
    layers: Vec<Box<dyn StubStore>>,
}

impl LayeredStubStore {
    pub fn new(layers: Vec<Box<dyn StubStore>>) -> Self {
        Self { layers }
    }

    /// User overrides from `dir` (when given), then the builtin set.
    pub fn with_overrides(dir: Option<DirectoryStubStore>) -> Self {
        let mut layers: Vec<Box<dyn StubStore>> = Vec::new();
        if let Some(dir) = dir {
            layers.push(Box::new(dir));
        }
        layers.push(Box::new(BuiltinStubStore));
        Self::new(layers)
    }
}

impl StubStore for LayeredStubStore {
    fn load(&self, name: &StubName) -> StubsmithResult<Stub> {
        for (depth, layer) in self.layers.iter().enumerate() {
            match layer.load(name) {
                Ok(stub) => {
                    debug!(stub = %name, depth, "Stub resolved");
                    return Ok(stub);
                }
                Err(StubsmithError::Application(ApplicationError::StubNotFound { .. })) => {}
                Err(e) => return Err(e),
            }
        }
        Err(ApplicationError::StubNotFound {
            name: name.to_string(),
        }
        .into())
    }

    fn list(&self) -> StubsmithResult<Vec<StubName>> {
        let mut names = Vec::new();
        for layer in &self.layers {
            names.extend(layer.list()?);
        }
        names.sort();
        names.dedup();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use tempfile::TempDir;

    #[test]
    fn override_wins_over_builtin() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("class.stub"), "custom DummyClass").unwrap();

        let store = LayeredStubStore::with_overrides(Some(DirectoryStubStore::new(dir.path())));
        let name = StubName::new("class").unwrap();
        assert_eq!(store.load(&name).unwrap().content, "custom DummyClass");

        let trait_stub = store.load(&StubName::new("trait").unwrap()).unwrap();
        assert!(trait_stub.content.contains("trait DummyTrait"));
    }

    #[test]
    fn listing_is_deduplicated_union() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("class.stub"), "").unwrap();
        fs::write(dir.path().join("extra.stub"), "").unwrap();

        let store = LayeredStubStore::with_overrides(Some(DirectoryStubStore::new(dir.path())));
        let names = store.list().unwrap();
        let builtin = BuiltinStubStore.list().unwrap();

        assert_eq!(names.len(), builtin.len() + 1);
        assert!(names.contains(&StubName::new("extra").unwrap()));
    }

    #[test]
    fn empty_stack_finds_nothing() {
        let store = LayeredStubStore::new(Vec::new());
        assert!(store.load(&StubName::new("class").unwrap()).is_err());
        assert!(store.list().unwrap().is_empty());
    }
}
