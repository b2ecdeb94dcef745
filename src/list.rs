//! Implementation of a set, backed by a vector
#![warn(missing_docs)]

extern crate alloc;

use alloc::vec::Vec;
use compact_str::CompactString;
use core::{
    fmt,
    hash::{Hash, Hasher},
    iter::FusedIterator,
};

use crate::{
    contract::{fmt_elements, Element, Set, SetCursor},
    error::{Result, SetError},
};

//-----------------------------------------------------------------------------------------------//

/// A set of elements, stored in a vector.
///
/// The vector manages its own capacity. Otherwise this behaves exactly as an `ArraySet`.
#[derive(Clone)]
pub struct ListSet<E> {
    list: Vec<E>,
}

impl<E> ListSet<E>
where
    E: Element,
{
    /// Constructor
    pub fn new() -> ListSet<E> {
        ListSet { list: Vec::new() }
    }

    /// Constructor
    pub fn with_capacity(capacity: usize) -> ListSet<E> {
        ListSet {
            list: Vec::with_capacity(capacity),
        }
    }

    /// Construct a set from a collection that may hold absent elements
    ///
    /// Absent and duplicate elements are skipped.
    pub fn from_nullable<I>(source: I) -> ListSet<E>
    where
        I: IntoIterator<Item = Option<E>>,
    {
        let source = source.into_iter();
        let mut set = ListSet::with_capacity(source.size_hint().0);
        for element in source.flatten() {
            set.add(element);
        }
        set
    }
}

impl<E> Set for ListSet<E>
where
    E: Element,
{
    type Element = E;

    type Iter<'a>
        = ListSetIterator<'a, E>
    where
        Self: 'a;

    type Cursor<'a>
        = ListSetCursor<'a, E>
    where
        Self: 'a;

    fn add(&mut self, element: E) -> bool {
        if self.list.contains(&element) {
            return false;
        }
        self.list.push(element);
        true
    }

    fn iter(&self) -> ListSetIterator<'_, E> {
        ListSetIterator {
            iter: self.list.iter(),
        }
    }

    fn cursor(&mut self) -> ListSetCursor<'_, E> {
        ListSetCursor {
            list: &mut self.list,
            cursor: 0,
            removable: false,
        }
    }

    fn clear(&mut self) {
        self.list.clear();
    }

    fn contains(&self, element: &E) -> bool {
        self.list.contains(element)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    #[inline]
    fn count(&self) -> usize {
        self.list.len()
    }
}

impl<E> Default for ListSet<E>
where
    E: Element,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, E> IntoIterator for &'a ListSet<E>
where
    E: Element,
{
    type Item = &'a E;
    type IntoIter = ListSetIterator<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E> FromIterator<E> for ListSet<E>
where
    E: Element,
{
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        ListSet::from_nullable(iter.into_iter().map(Some))
    }
}

impl<E> Extend<E> for ListSet<E>
where
    E: Element,
{
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}

impl<E, S> PartialEq<S> for ListSet<E>
where
    E: Element,
    S: Set<Element = E>,
{
    fn eq(&self, other: &S) -> bool {
        self.set_eq(other)
    }
}

impl<E> Eq for ListSet<E> where E: Element {}

impl<E> Hash for ListSet<E>
where
    E: Element,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl<E> fmt::Debug for ListSet<E>
where
    E: Element + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<E> fmt::Display for ListSet<E>
where
    E: Element + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_elements(self.iter(), f)
    }
}

//-----------------------------------------------------------------------------------------------//

/// Iterator over a `ListSet`
pub struct ListSetIterator<'a, E> {
    iter: core::slice::Iter<'a, E>,
}

impl<'a, E> Iterator for ListSetIterator<'a, E> {
    type Item = &'a E;

    #[inline]
    fn next(&mut self) -> Option<&'a E> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<E> ExactSizeIterator for ListSetIterator<'_, E> {}

impl<E> FusedIterator for ListSetIterator<'_, E> {}

//-----------------------------------------------------------------------------------------------//

/// Cursor over a `ListSet` that can remove elements while walking it
pub struct ListSetCursor<'a, E> {
    list: &'a mut Vec<E>,
    cursor: usize,
    removable: bool,
}

impl<E> SetCursor<E> for ListSetCursor<'_, E> {
    #[inline]
    fn has_next(&self) -> bool {
        self.cursor < self.list.len()
    }

    fn next(&mut self) -> Result<&E> {
        let element = self.list.get(self.cursor).ok_or(SetError::EndOfIteration)?;
        self.cursor += 1;
        self.removable = true;
        Ok(element)
    }

    fn remove(&mut self) -> Result<()> {
        if !self.removable {
            return Err(SetError::IllegalState("next has not been called"));
        }

        self.cursor -= 1;
        self.list.remove(self.cursor);
        self.removable = false;
        Ok(())
    }
}

//-----------------------------------------------------------------------------------------------//

/// A set of strings, stored in a vector.
///
/// This is a specialised version of `ListSet` that stores compact strings.
pub type StringListSet = ListSet<CompactString>;

impl ListSet<CompactString> {
    /// Add a string if it is not already in the set
    pub fn add_str(&mut self, key: &str) -> bool {
        if self.contains_str(key) {
            return false;
        }
        self.list.push(CompactString::new(key));
        true
    }

    /// Check if a string is in the set
    pub fn contains_str(&self, key: &str) -> bool {
        self.list.iter().any(|e| e.as_str() == key)
    }

    /// Remove a string, returning `true` if it was in the set
    pub fn remove_str(&mut self, key: &str) -> bool {
        match self.list.iter().position(|e| e.as_str() == key) {
            Some(index) => {
                self.list.remove(index);
                true
            }
            None => false,
        }
    }
}

impl<'a> FromIterator<&'a str> for ListSet<CompactString> {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        ListSet::from_nullable(iter.into_iter().map(|s| Some(CompactString::new(s))))
    }
}

//-----------------------------------------------------------------------------------------------//

#[test]
// A very simple test of adding to a set
fn test_list_set_0() {
    let mut set = ListSet::new();

    debug_assert!(set.add(5));
    debug_assert!(set.add(1));
    debug_assert!(!set.add(1));
    debug_assert!(set.try_add(None).is_err());

    debug_assert_eq!(set.count(), 2);
    debug_assert_eq!(set.to_array(), alloc::vec![Some(5), Some(1)]);
}

#[test]
// The general algorithms work on top of the vector
fn test_list_set_1() {
    let mut set: StringListSet = ["Lorem", "ipsum", "sit", "ipsum", "dolor"].into_iter().collect();
    debug_assert_eq!(set.count(), 4);

    let other: StringListSet = ["sit", "amet"].into_iter().collect();
    debug_assert_eq!(set.union(&other).count(), 5);
    debug_assert_eq!(set.intersection(&other).to_vec(), alloc::vec!["sit"]);
    debug_assert_eq!(set.difference(&other).count(), 3);

    debug_assert!(set.remove_str("Lorem"));
    debug_assert!(set.retain_all(other.iter()));
    debug_assert_eq!(set.to_vec(), alloc::vec!["sit"]);

    set.clear();
    debug_assert!(set.is_empty());
}

#[test]
// Removing every element through the cursor
fn test_list_set_2() {
    let mut set: ListSet<u16> = (0..10).collect();

    let mut cursor = set.cursor();
    while cursor.has_next() {
        let odd = cursor.next().map(|&x| x % 2 == 1).unwrap();
        if odd {
            cursor.remove().unwrap();
        }
    }

    debug_assert_eq!(set.to_vec(), alloc::vec![0, 2, 4, 6, 8]);
}
