//! Bidirectional link maintenance between owner and member entities.
//!
//! A member entity (for example a [`GlobalVariable`](crate::GlobalVariable))
//! stores a single reference to its owner, and the owner keeps the
//! authoritative list of members. Only [`relink`] changes both sides, and it
//! is called exclusively by the association setters on
//! [`Catalog`](crate::Catalog), so the two sides cannot drift apart.

use std::fmt;

use serde::Serialize;

use crate::arena::Arena;
use crate::ids::Handle;

/// Ordered, duplicate-free collection of member handles.
///
/// The public surface is read-only; insertion and removal are reserved to the
/// association manager.
#[derive(Serialize)]
#[serde(transparent, bound = "")]
pub struct Members<T> {
    handles: Vec<Handle<T>>,
}

impl<T> Members<T> {
    pub(crate) fn new() -> Self {
        Self {
            handles: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn contains(&self, handle: Handle<T>) -> bool {
        self.handles.contains(&handle)
    }

    pub fn iter(&self) -> impl Iterator<Item = Handle<T>> + '_ {
        self.handles.iter().copied()
    }

    pub fn as_slice(&self) -> &[Handle<T>] {
        &self.handles
    }

    /// Adds `handle` unless already present. Returns whether it was added.
    pub(crate) fn insert(&mut self, handle: Handle<T>) -> bool {
        if self.handles.contains(&handle) {
            return false;
        }
        self.handles.push(handle);
        true
    }

    /// Removes `handle` if present, keeping the order of the others.
    pub(crate) fn remove(&mut self, handle: Handle<T>) -> bool {
        match self.handles.iter().position(|member| *member == handle) {
            Some(position) => {
                self.handles.remove(position);
                true
            }
            None => false,
        }
    }
}

impl<T> Default for Members<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Members<T> {
    fn clone(&self) -> Self {
        Self {
            handles: self.handles.clone(),
        }
    }
}

impl<T> fmt::Debug for Members<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.handles.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a Members<T> {
    type Item = &'a Handle<T>;
    type IntoIter = std::slice::Iter<'a, Handle<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.handles.iter()
    }
}

/// Owner side of an association: exposes its member collection to [`relink`].
pub(crate) trait Owner<M> {
    fn members_mut(&mut self) -> &mut Members<M>;
}

/// Moves `member` from the `old` owner's collection to the `new` one.
///
/// Both owner handles must already be validated against `owners`; a handle
/// that does not resolve is skipped. Relinking to the same owner leaves a
/// single entry.
pub(crate) fn relink<O, M>(
    owners: &mut Arena<O>,
    member: Handle<M>,
    old: Option<Handle<O>>,
    new: Option<Handle<O>>,
) where
    O: Owner<M>,
{
    if let Some(owner) = old.and_then(|handle| owners.get_mut(handle)) {
        owner.members_mut().remove(member);
    }
    if let Some(owner) = new.and_then(|handle| owners.get_mut(handle)) {
        owner.members_mut().insert(member);
    }
}
