//! Location identity.
//!
//! Locations are identified by their unique name.  `LocationId` wraps an
//! `Arc<str>` so ids can be cloned into paths, frontiers and plans without
//! copying the string, and implements `Borrow<str>` so maps keyed by
//! `LocationId` can be queried with a plain `&str`.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// Unique name of a location in the network.
///
/// Ordering is lexicographic on the name; the planner relies on this for its
/// deterministic tie-break between equally close stops.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocationId(Arc<str>);

impl LocationId {
    pub fn new(name: impl AsRef<str>) -> Self {
        LocationId(Arc::from(name.as_ref()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for LocationId {
    #[inline]
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for LocationId {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LocationId {
    fn from(name: &str) -> Self {
        LocationId::new(name)
    }
}

impl From<String> for LocationId {
    fn from(name: String) -> Self {
        LocationId(Arc::from(name))
    }
}

impl PartialEq<str> for LocationId {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for LocationId {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl fmt::Debug for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", &*self.0)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for LocationId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for LocationId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(LocationId::from(name))
    }
}
