//! Construction of sets by variant
#![warn(missing_docs)]

extern crate alloc;

use alloc::vec::Vec;
use core::{
    fmt,
    hash::{Hash, Hasher},
    iter::FusedIterator,
};

use crate::{
    array::{ArraySet, ArraySetCursor, ArraySetIterator},
    contract::{Element, Set, SetCursor},
    error::Result,
    list::{ListSet, ListSetCursor, ListSetIterator},
};

//-----------------------------------------------------------------------------------------------//

/// The available set variants
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SetKind {
    /// `ArraySet`
    Array,
    /// `ListSet`
    List,
}

impl SetKind {
    /// Every variant
    pub const ALL: [SetKind; 2] = [SetKind::Array, SetKind::List];

    /// Build an empty set of this variant
    pub fn build<E>(self) -> AnySet<E>
    where
        E: Element,
    {
        tracing::debug!(kind = ?self, "building empty set");
        match self {
            SetKind::Array => AnySet::Array(ArraySet::new()),
            SetKind::List => AnySet::List(ListSet::new()),
        }
    }

    /// Build a set of this variant holding the elements of `content`
    pub fn build_from<E, I>(self, content: I) -> AnySet<E>
    where
        E: Element,
        I: IntoIterator<Item = E>,
        I::IntoIter: ExactSizeIterator,
    {
        let content = content.into_iter();
        tracing::debug!(kind = ?self, len = content.len(), "building set");
        match self {
            SetKind::Array => AnySet::Array(ArraySet::from_nullable(content.map(Some))),
            SetKind::List => AnySet::List(ListSet::from_nullable(content.map(Some))),
        }
    }
}

//-----------------------------------------------------------------------------------------------//

/// A set of any variant
///
/// Set operations on an `AnySet` produce a set of the same variant as the receiver.
#[derive(Clone)]
pub enum AnySet<E> {
    /// An `ArraySet`
    Array(ArraySet<E>),
    /// A `ListSet`
    List(ListSet<E>),
}

impl<E> AnySet<E> {
    /// Get the variant of the set
    pub fn kind(&self) -> SetKind {
        match self {
            AnySet::Array(_) => SetKind::Array,
            AnySet::List(_) => SetKind::List,
        }
    }
}

impl<E> Set for AnySet<E>
where
    E: Element,
{
    type Element = E;

    type Iter<'a>
        = AnySetIterator<'a, E>
    where
        Self: 'a;

    type Cursor<'a>
        = AnySetCursor<'a, E>
    where
        Self: 'a;

    fn add(&mut self, element: E) -> bool {
        match self {
            AnySet::Array(set) => set.add(element),
            AnySet::List(set) => set.add(element),
        }
    }

    fn iter(&self) -> AnySetIterator<'_, E> {
        match self {
            AnySet::Array(set) => AnySetIterator::Array(set.iter()),
            AnySet::List(set) => AnySetIterator::List(set.iter()),
        }
    }

    fn cursor(&mut self) -> AnySetCursor<'_, E> {
        match self {
            AnySet::Array(set) => AnySetCursor::Array(set.cursor()),
            AnySet::List(set) => AnySetCursor::List(set.cursor()),
        }
    }

    fn clear(&mut self) {
        match self {
            AnySet::Array(set) => set.clear(),
            AnySet::List(set) => set.clear(),
        }
    }

    fn contains(&self, element: &E) -> bool {
        match self {
            AnySet::Array(set) => set.contains(element),
            AnySet::List(set) => set.contains(element),
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            AnySet::Array(set) => set.is_empty(),
            AnySet::List(set) => set.is_empty(),
        }
    }

    fn remove(&mut self, element: &E) -> bool {
        match self {
            AnySet::Array(set) => set.remove(element),
            AnySet::List(set) => set.remove(element),
        }
    }

    fn count(&self) -> usize {
        match self {
            AnySet::Array(set) => set.count(),
            AnySet::List(set) => set.count(),
        }
    }

    fn to_array(&self) -> Vec<Option<E>> {
        match self {
            AnySet::Array(set) => set.to_array(),
            AnySet::List(set) => set.to_array(),
        }
    }

    fn union<S>(&self, other: &S) -> AnySet<E>
    where
        S: Set<Element = E>,
    {
        match self {
            AnySet::Array(set) => AnySet::Array(set.union(other)),
            AnySet::List(set) => AnySet::List(set.union(other)),
        }
    }

    fn intersection<S>(&self, other: &S) -> AnySet<E>
    where
        S: Set<Element = E>,
    {
        match self {
            AnySet::Array(set) => AnySet::Array(set.intersection(other)),
            AnySet::List(set) => AnySet::List(set.intersection(other)),
        }
    }

    fn difference<S>(&self, other: &S) -> AnySet<E>
    where
        S: Set<Element = E>,
    {
        match self {
            AnySet::Array(set) => AnySet::Array(set.difference(other)),
            AnySet::List(set) => AnySet::List(set.difference(other)),
        }
    }
}

impl<E> Default for AnySet<E>
where
    E: Element,
{
    fn default() -> Self {
        AnySet::Array(ArraySet::new())
    }
}

impl<'a, E> IntoIterator for &'a AnySet<E>
where
    E: Element,
{
    type Item = &'a E;
    type IntoIter = AnySetIterator<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E> Extend<E> for AnySet<E>
where
    E: Element,
{
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}

impl<E, S> PartialEq<S> for AnySet<E>
where
    E: Element,
    S: Set<Element = E>,
{
    fn eq(&self, other: &S) -> bool {
        self.set_eq(other)
    }
}

impl<E> Eq for AnySet<E> where E: Element {}

impl<E> Hash for AnySet<E>
where
    E: Element,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl<E> fmt::Debug for AnySet<E>
where
    E: Element + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnySet::Array(set) => fmt::Debug::fmt(set, f),
            AnySet::List(set) => fmt::Debug::fmt(set, f),
        }
    }
}

impl<E> fmt::Display for AnySet<E>
where
    E: Element + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnySet::Array(set) => fmt::Display::fmt(set, f),
            AnySet::List(set) => fmt::Display::fmt(set, f),
        }
    }
}

//-----------------------------------------------------------------------------------------------//

/// Iterator over an `AnySet`
pub enum AnySetIterator<'a, E> {
    /// Iterating an `ArraySet`
    Array(ArraySetIterator<'a, E>),
    /// Iterating a `ListSet`
    List(ListSetIterator<'a, E>),
}

impl<'a, E> Iterator for AnySetIterator<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<&'a E> {
        match self {
            AnySetIterator::Array(iter) => iter.next(),
            AnySetIterator::List(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            AnySetIterator::Array(iter) => iter.size_hint(),
            AnySetIterator::List(iter) => iter.size_hint(),
        }
    }
}

impl<E> ExactSizeIterator for AnySetIterator<'_, E> {}

impl<E> FusedIterator for AnySetIterator<'_, E> {}

//-----------------------------------------------------------------------------------------------//

/// Cursor over an `AnySet`
pub enum AnySetCursor<'a, E> {
    /// Walking an `ArraySet`
    Array(ArraySetCursor<'a, E>),
    /// Walking a `ListSet`
    List(ListSetCursor<'a, E>),
}

impl<E> SetCursor<E> for AnySetCursor<'_, E> {
    fn has_next(&self) -> bool {
        match self {
            AnySetCursor::Array(cursor) => cursor.has_next(),
            AnySetCursor::List(cursor) => cursor.has_next(),
        }
    }

    fn next(&mut self) -> Result<&E> {
        match self {
            AnySetCursor::Array(cursor) => cursor.next(),
            AnySetCursor::List(cursor) => cursor.next(),
        }
    }

    fn remove(&mut self) -> Result<()> {
        match self {
            AnySetCursor::Array(cursor) => cursor.remove(),
            AnySetCursor::List(cursor) => cursor.remove(),
        }
    }
}

//-----------------------------------------------------------------------------------------------//

#[test]
// Each kind builds its own variant, and set operations keep it
fn test_factory_0() {
    for kind in SetKind::ALL {
        let empty: AnySet<u8> = kind.build();
        debug_assert_eq!(empty.kind(), kind);
        debug_assert!(empty.is_empty());

        let set = kind.build_from(alloc::vec![3, 1, 3, 2]);
        debug_assert_eq!(set.kind(), kind);
        debug_assert_eq!(set.count(), 3);

        let other = SetKind::List.build_from(alloc::vec![2, 4]);
        debug_assert_eq!(set.union(&other).kind(), kind);
        debug_assert_eq!(set.intersection(&other).to_vec(), alloc::vec![2]);
        debug_assert_eq!(set.difference(&other).kind(), kind);
    }
}

#[test]
// Sets of different variants with the same elements are equal and hash alike
fn test_factory_1() {
    let array = SetKind::Array.build_from(alloc::vec!['x', 'y', 'z']);
    let list = SetKind::List.build_from(alloc::vec!['z', 'x', 'y']);

    debug_assert_eq!(array, list);
    debug_assert_eq!(array.hash_code(), list.hash_code());
    debug_assert_eq!(SetKind::Array.build::<char>().hash_code(), 0);
}
