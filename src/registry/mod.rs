//! Booster registry: name -> constructor, populated at startup.

use crate::booster::{GraphBooster, ReorderClient, GRAPH_BOOSTER_NAME};
use crate::config::BoosterSettings;
use crate::{Error, ErrorContext, Result};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Builds a booster from deployment settings.
pub type BoosterConstructor = fn(&BoosterSettings) -> Result<Arc<dyn ReorderClient>>;

pub struct BoosterRegistry {
    constructors: RwLock<HashMap<String, BoosterConstructor>>,
}

impl BoosterRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self {
            constructors: RwLock::new(HashMap::new()),
        }
    }

    /// Registry holding the boosters shipped with this crate.
    pub fn with_builtin() -> Self {
        let registry = Self::new();
        registry.register(GRAPH_BOOSTER_NAME, graph_booster);
        registry
    }

    /// Register `constructor` under `name`, returning the one it replaced.
    pub fn register(
        &self,
        name: impl Into<String>,
        constructor: BoosterConstructor,
    ) -> Option<BoosterConstructor> {
        let name = name.into();
        tracing::debug!(booster = %name, "Registering booster");
        self.write().insert(name, constructor)
    }

    pub fn unregister(&self, name: &str) -> Option<BoosterConstructor> {
        self.write().remove(name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.read().contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Instantiate the booster registered under `name`.
    pub fn create(&self, name: &str, settings: &BoosterSettings) -> Result<Arc<dyn ReorderClient>> {
        let constructor = self.read().get(name).copied();
        match constructor {
            Some(constructor) => constructor(settings),
            None => Err(Error::configuration_with_context(
                format!("unknown booster '{}'", name),
                ErrorContext::new()
                    .with_details(format!("registered: {}", self.names().join(", ")))
                    .with_source("registry"),
            )),
        }
    }

    // A panic while holding the lock cannot leave the map half-written, so a
    // poisoned lock is still safe to use.
    fn read(&self) -> std::sync::RwLockReadGuard<'_, HashMap<String, BoosterConstructor>> {
        self.constructors.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<String, BoosterConstructor>> {
        self.constructors.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for BoosterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn graph_booster(settings: &BoosterSettings) -> Result<Arc<dyn ReorderClient>> {
    Ok(Arc::new(GraphBooster::new(settings.clone())?))
}

static GLOBAL_REGISTRY: once_cell::sync::Lazy<BoosterRegistry> =
    once_cell::sync::Lazy::new(BoosterRegistry::with_builtin);

/// Process-wide registry, pre-populated with the built-in boosters.
pub fn get_booster_registry() -> &'static BoosterRegistry {
    &GLOBAL_REGISTRY
}
