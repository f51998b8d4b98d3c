//! Serialization adapters: sets encode as plain element sequences.
//!
//! A set serializes to an ordered sequence of its elements (order
//! unspecified), and deserializes from any sequence, collapsing duplicate
//! elements silently. Element encode/decode is delegated entirely to the
//! element type's own serde implementations.
//!
//! Deserialization is all-or-nothing: the membership is built in a fresh
//! storage and only becomes a set value once every element decoded, so a
//! failing element yields an error and no partially populated set. For a
//! [`SyncSet`], serialization snapshots under the read lock.

use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use serde::de::{SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::membership::Membership;
use super::{LocalSet, SyncSet};

// =============================================================================
// LocalSet
// =============================================================================

impl<T> Serialize for LocalSet<T>
where
    T: Serialize + Hash + Eq,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self.iter() {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

struct LocalSetVisitor<T> {
    marker: PhantomData<T>,
}

impl<T> LocalSetVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<'de, T> Visitor<'de> for LocalSetVisitor<T>
where
    T: Deserialize<'de> + Hash + Eq,
{
    type Value = LocalSet<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of set elements")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut membership = Membership::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(element) = seq.next_element()? {
            membership.insert(element);
        }
        Ok(LocalSet::from_membership(membership))
    }
}

impl<'de, T> Deserialize<'de> for LocalSet<T>
where
    T: Deserialize<'de> + Hash + Eq,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(LocalSetVisitor::new())
    }
}

// =============================================================================
// SyncSet
// =============================================================================

impl<T> Serialize for SyncSet<T>
where
    T: Serialize + Hash + Eq,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.with_membership(|membership| {
            let mut seq = serializer.serialize_seq(Some(membership.len()))?;
            for element in membership.elements() {
                seq.serialize_element(element)?;
            }
            seq.end()
        })
    }
}

struct SyncSetVisitor<T> {
    marker: PhantomData<T>,
}

impl<T> SyncSetVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<'de, T> Visitor<'de> for SyncSetVisitor<T>
where
    T: Deserialize<'de> + Hash + Eq,
{
    type Value = SyncSet<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of set elements")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut membership = Membership::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(element) = seq.next_element()? {
            membership.insert(element);
        }
        Ok(SyncSet::from_membership(membership))
    }
}

impl<'de, T> Deserialize<'de> for SyncSet<T>
where
    T: Deserialize<'de> + Hash + Eq,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(SyncSetVisitor::new())
    }
}
