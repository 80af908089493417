#![deny(unsafe_code)]

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use crate::ModelError;
use crate::entity::{Entity, EntityKind};

/// Language independent identifier of a survey entity.
///
/// Identifiers are never empty and never change once an entity is created.
/// The value is kept verbatim; `" age"` and `"age"` are different identifiers.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    /// Validates `value` as an identifier of the given entity kind.
    pub fn new(entity: EntityKind, value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ModelError::EmptyIdentifier { entity });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Identifier {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Identifier {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Identifier {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for Identifier {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        if value.is_empty() {
            return Err(serde::de::Error::custom("identifier must not be empty"));
        }
        Ok(Self(value))
    }
}

static NEXT_ORIGIN: AtomicU64 = AtomicU64::new(0);

/// Identity of the catalog that issued a handle. Clones of a catalog share it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct Origin(u64);

impl Origin {
    pub(crate) fn next() -> Self {
        Self(NEXT_ORIGIN.fetch_add(1, AtomicOrdering::Relaxed))
    }
}

/// Typed position of an entity inside a [`Catalog`](crate::Catalog).
///
/// Handles are the identity used by association collections: two handles are
/// equal exactly when they address the same entity of the same catalog. A
/// handle only resolves in the catalog that issued it and in its clones.
pub struct Handle<T> {
    origin: Origin,
    index: usize,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Handle<T> {
    pub(crate) fn new(origin: Origin, index: usize) -> Self {
        Self {
            origin,
            index,
            _marker: PhantomData,
        }
    }

    pub fn index(self) -> usize {
        self.index
    }

    pub(crate) fn origin(self) -> Origin {
        self.origin
    }
}

impl<T: Entity> Handle<T> {
    pub(crate) fn unknown(self) -> ModelError {
        ModelError::UnknownReference {
            entity: T::KIND,
            index: self.index(),
        }
    }
}

impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Handle<T> {}

impl<T> PartialEq for Handle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.origin == other.origin && self.index == other.index
    }
}

impl<T> Eq for Handle<T> {}

impl<T> PartialOrd for Handle<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Handle<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.origin, self.index).cmp(&(other.origin, other.index))
    }
}

impl<T> Hash for Handle<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.origin.hash(state);
        self.index.hash(state);
    }
}

impl<T> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = std::any::type_name::<T>();
        let short = name.rsplit("::").next().unwrap_or(name);
        write!(f, "Handle<{short}>({})", self.index)
    }
}

impl<T> serde::Serialize for Handle<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.index, serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_rejects_empty() {
        let err = Identifier::new(EntityKind::Study, "").unwrap_err();
        assert_eq!(
            err,
            ModelError::EmptyIdentifier {
                entity: EntityKind::Study
            }
        );
    }

    #[test]
    fn identifier_keeps_value_verbatim() {
        let id = Identifier::new(EntityKind::Study, " S1 ").unwrap();
        assert_eq!(id.as_str(), " S1 ");
        assert_eq!(id, " S1 ");
    }

    #[test]
    fn handles_of_different_origins_differ() {
        let first: Handle<crate::Study> = Handle::new(Origin::next(), 0);
        let second: Handle<crate::Study> = Handle::new(Origin::next(), 0);
        assert_ne!(first, second);
        assert_eq!(first, Handle::new(first.origin(), 0));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn handle_keeps_indices_past_u32() {
        let origin = Origin::next();
        let wide = 1_usize << 32;
        let handle: Handle<crate::Study> = Handle::new(origin, wide);
        assert_eq!(handle.index(), wide);
        assert_ne!(handle, Handle::new(origin, wide + 1));
    }

    #[test]
    fn identifier_deserialize_rejects_empty() {
        assert!(serde_json::from_str::<Identifier>("\"\"").is_err());
        let id: Identifier = serde_json::from_str("\"income\"").unwrap();
        assert_eq!(id.as_str(), "income");
    }
}
