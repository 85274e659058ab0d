use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use log::debug;

use super::Alias;

/// Looks up a canonical shared entity by natural-key name
pub trait AliasResolver<T> {
    /// The canonical instance registered under `name`, if any
    fn resolve(&self, name: &str) -> Option<Arc<T>>;
}

/// An entity addressable by its aliases
pub trait Aliased {
    /// Canonical display name
    fn name(&self) -> &str;

    /// All aliases of the entity
    fn aliases(&self) -> &[Alias];

    /// Build a new entity known only by one generic alias
    fn from_alias(name: &str) -> Self;
}

/// Identity map from alias strings to canonical instances
///
/// The registry owns every instance; callers hold `Arc` clones. Asking twice
/// for the same name yields the same allocation.
#[derive(Debug)]
pub struct AliasRegistry<T> {
    entries: HashMap<String, Arc<T>>,
    count: usize,
}

impl<T> Default for AliasRegistry<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            count: 0,
        }
    }
}

impl<T: Aliased> AliasRegistry<T> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// The instance known as `name`
    pub fn get(&self, name: &str) -> Option<Arc<T>> {
        self.entries.get(name).cloned()
    }

    /// The instance known as `name`, creating it on first request
    pub fn get_or_create(&mut self, name: &str) -> Arc<T> {
        if let Some(existing) = self.entries.get(name) {
            return Arc::clone(existing);
        }
        debug!("Creating entity for alias {:?}", name);
        self.register(T::from_alias(name))
    }

    /// Add an entity, indexed by its name and every alias
    ///
    /// If the name is already registered the existing instance is returned and
    /// `entity` is dropped. Aliases already taken keep pointing at their
    /// existing instance.
    pub fn register(&mut self, entity: T) -> Arc<T> {
        if let Some(existing) = self.entries.get(entity.name()) {
            debug!("{:?} is already registered", entity.name());
            return Arc::clone(existing);
        }

        let entity = Arc::new(entity);
        let keys = std::iter::once(entity.name())
            .chain(entity.aliases().iter().map(|a| a.alias.as_str()))
            .filter(|k| !k.is_empty());

        let mut indexed = false;
        for key in keys {
            if let Entry::Vacant(slot) = self.entries.entry(key.to_string()) {
                slot.insert(Arc::clone(&entity));
                indexed = true;
            }
        }
        if indexed {
            self.count += 1;
        }
        entity
    }

    /// Number of registered entities
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterate over every alias string and its instance
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<T>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<T: Aliased> AliasResolver<T> for AliasRegistry<T> {
    fn resolve(&self, name: &str) -> Option<Arc<T>> {
        self.get(name)
    }
}
