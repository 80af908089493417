use std::collections::BTreeMap;

use crate::entity::Entity;
use crate::error::{ModelError, Result};
use crate::ids::{Handle, Identifier, Origin};

/// Storage for one entity kind, addressed by [`Handle`] and indexed by identifier.
///
/// Entities are never removed, so handles stay valid for the arena's lifetime.
/// Handles issued under another origin never resolve.
#[derive(Debug, Clone)]
pub(crate) struct Arena<T> {
    origin: Origin,
    items: Vec<T>,
    by_identifier: BTreeMap<Identifier, Handle<T>>,
}

impl<T: Entity> Arena<T> {
    pub(crate) fn new(origin: Origin) -> Self {
        Self {
            origin,
            items: Vec::new(),
            by_identifier: BTreeMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, item: T) -> Result<Handle<T>> {
        let identifier = item.identifier().clone();
        if self.by_identifier.contains_key(&identifier) {
            return Err(ModelError::DuplicateIdentifier {
                entity: T::KIND,
                identifier: identifier.to_string(),
            });
        }
        let handle = Handle::new(self.origin, self.items.len());
        self.items.push(item);
        self.by_identifier.insert(identifier, handle);
        Ok(handle)
    }

    /// Fails with [`ModelError::UnknownReference`] when `handle` does not resolve.
    pub(crate) fn check(&self, handle: Handle<T>) -> Result<()> {
        if self.owns(handle) {
            Ok(())
        } else {
            Err(handle.unknown())
        }
    }

    pub(crate) fn find(&self, identifier: &str) -> Option<Handle<T>> {
        self.by_identifier.get(identifier).copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (Handle<T>, &T)> + '_ {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| (Handle::new(self.origin, index), item))
    }
}

impl<T> Arena<T> {
    fn owns(&self, handle: Handle<T>) -> bool {
        handle.origin() == self.origin && handle.index() < self.items.len()
    }

    pub(crate) fn get(&self, handle: Handle<T>) -> Option<&T> {
        if handle.origin() != self.origin {
            return None;
        }
        self.items.get(handle.index())
    }

    pub(crate) fn get_mut(&mut self, handle: Handle<T>) -> Option<&mut T> {
        if handle.origin() != self.origin {
            return None;
        }
        self.items.get_mut(handle.index())
    }
}
