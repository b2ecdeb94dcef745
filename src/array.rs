//! Implementation of a set, backed by a growable array
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
    util::{Buffer, Growth},
};

//-----------------------------------------------------------------------------------------------//

/// A set of elements, stored left-packed in an array with an explicit capacity.
///
/// When the array is full it grows by a fixed capacity increment. Lookups are linear scans, so
/// this set suits small collections where the elements are not ordered or cannot be cheaply
/// hashed into buckets. Elements stay in insertion order relative to each other.
#[derive(Clone)]
pub struct ArraySet<E> {
    buffer: Buffer<E>,
}

impl<E> ArraySet<E>
where
    E: Element,
{
    /// Constructor
    pub fn new() -> ArraySet<E> {
        ArraySet {
            buffer: Buffer::new(),
        }
    }

    /// Constructor
    ///
    /// Fails with `SetError::InvalidArgument` if `capacity` is less than 1.
    pub fn with_capacity(capacity: usize) -> Result<ArraySet<E>> {
        Ok(ArraySet::with_growth(Growth::with_capacity(capacity)?))
    }

    /// Constructor
    ///
    /// Fails with `SetError::InvalidArgument` if either value is less than 1.
    pub fn with_capacity_and_increment(
        capacity: usize,
        capacity_increment: usize,
    ) -> Result<ArraySet<E>> {
        Ok(ArraySet::with_growth(Growth::new(
            capacity,
            capacity_increment,
        )?))
    }

    /// Constructor
    pub fn with_growth(growth: Growth) -> ArraySet<E> {
        ArraySet {
            buffer: Buffer::with_growth(growth),
        }
    }

    /// Construct a set from a collection that may hold absent elements
    ///
    /// The array is sized to the length of the collection. Absent and duplicate elements are
    /// skipped, so the set may end up with spare capacity.
    pub fn from_nullable<I>(source: I) -> ArraySet<E>
    where
        I: IntoIterator<Item = Option<E>>,
        I::IntoIter: ExactSizeIterator,
    {
        let source = source.into_iter();
        ArraySet::from_source(source.len(), source)
    }

    /// Get the number of elements the set can hold before it grows
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Get the amount the capacity grows by when the set is full
    #[inline]
    pub fn capacity_increment(&self) -> usize {
        self.buffer.increment()
    }

    /// Shrink the capacity to the number of elements
    ///
    /// Fails with `SetError::IllegalState` if the set is empty.
    pub fn strip(&mut self) -> Result<()> {
        self.buffer
            .strip()
            .map_err(|_| SetError::IllegalState("cannot strip an empty set"))
    }

    // An empty set for results of at most `capacity` elements
    fn sized(capacity: usize) -> ArraySet<E> {
        ArraySet::with_growth(Growth::with_capacity(capacity.max(1)).unwrap_or_default())
    }

    // Fill a set sized to `len` from a source, or a default set if the source is empty
    fn from_source<I>(len: usize, source: I) -> ArraySet<E>
    where
        I: Iterator<Item = Option<E>>,
    {
        let mut set = if len == 0 {
            ArraySet::new()
        } else {
            ArraySet::sized(len)
        };

        for element in source.flatten() {
            set.add(element);
        }
        set
    }
}

impl<E> ArraySet<E> {
    // Remove an element by index, returning `false` if the index is not occupied
    fn remove_at_index(&mut self, index: usize) -> bool {
        self.buffer.remove_at(index).is_some()
    }
}

impl<E> Set for ArraySet<E>
where
    E: Element,
{
    type Element = E;

    type Iter<'a>
        = ArraySetIterator<'a, E>
    where
        Self: 'a;

    type Cursor<'a>
        = ArraySetCursor<'a, E>
    where
        Self: 'a;

    fn add(&mut self, element: E) -> bool {
        if self.contains(&element) {
            return false;
        }
        self.buffer.push(element);
        true
    }

    fn iter(&self) -> ArraySetIterator<'_, E> {
        ArraySetIterator {
            slot: self.buffer.occupied().iter(),
        }
    }

    fn cursor(&mut self) -> ArraySetCursor<'_, E> {
        ArraySetCursor {
            set: self,
            cursor: 0,
            removable: false,
        }
    }

    // The capacity and increment go back to their defaults
    fn clear(&mut self) {
        self.buffer.reset();
    }

    fn contains(&self, element: &E) -> bool {
        self.buffer.position(|e| e == element).is_some()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    fn remove(&mut self, element: &E) -> bool {
        match self.buffer.position(|e| e == element) {
            Some(index) => self.remove_at_index(index),
            None => false,
        }
    }

    #[inline]
    fn count(&self) -> usize {
        self.buffer.count()
    }

    // Snapshot of the whole array, vacant slots included
    fn to_array(&self) -> Vec<Option<E>> {
        self.buffer.slots().to_vec()
    }

    fn union<S>(&self, other: &S) -> ArraySet<E>
    where
        S: Set<Element = E>,
    {
        let mut result = ArraySet::sized(self.count() + other.count());
        for element in self.iter().chain(other.iter()) {
            result.add(element.clone());
        }
        result
    }

    fn intersection<S>(&self, other: &S) -> ArraySet<E>
    where
        S: Set<Element = E>,
    {
        let mut result = ArraySet::sized(self.count());
        for element in self.iter().filter(|e| other.contains(e)) {
            result.add(element.clone());
        }
        result
    }

    // Sized to the smaller operand, which may be less than the result
    fn difference<S>(&self, other: &S) -> ArraySet<E>
    where
        S: Set<Element = E>,
    {
        let mut result = ArraySet::sized(self.count().min(other.count()));
        for element in self.iter().filter(|e| !other.contains(e)) {
            result.add(element.clone());
        }
        result
    }
}

impl<E> Default for ArraySet<E>
where
    E: Element,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, E> IntoIterator for &'a ArraySet<E>
where
    E: Element,
{
    type Item = &'a E;
    type IntoIter = ArraySetIterator<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E> FromIterator<E> for ArraySet<E>
where
    E: Element,
{
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let iter = iter.into_iter();
        ArraySet::from_source(iter.size_hint().0, iter.map(Some))
    }
}

impl<E> Extend<E> for ArraySet<E>
where
    E: Element,
{
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}

impl<E, S> PartialEq<S> for ArraySet<E>
where
    E: Element,
    S: Set<Element = E>,
{
    fn eq(&self, other: &S) -> bool {
        self.set_eq(other)
    }
}

impl<E> Eq for ArraySet<E> where E: Element {}

impl<E> Hash for ArraySet<E>
where
    E: Element,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl<E> fmt::Debug for ArraySet<E>
where
    E: Element + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<E> fmt::Display for ArraySet<E>
where
    E: Element + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_elements(self.iter(), f)
    }
}

//-----------------------------------------------------------------------------------------------//

/// Iterator over an `ArraySet`
pub struct ArraySetIterator<'a, E> {
    slot: core::slice::Iter<'a, Option<E>>,
}

impl<'a, E> Iterator for ArraySetIterator<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<&'a E> {
        self.slot.next().and_then(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slot.size_hint()
    }
}

impl<E> ExactSizeIterator for ArraySetIterator<'_, E> {}

impl<E> FusedIterator for ArraySetIterator<'_, E> {}

//-----------------------------------------------------------------------------------------------//

/// Cursor over an `ArraySet` that can remove elements while walking it
pub struct ArraySetCursor<'a, E> {
    set: &'a mut ArraySet<E>,
    cursor: usize,
    removable: bool,
}

impl<E> SetCursor<E> for ArraySetCursor<'_, E> {
    #[inline]
    fn has_next(&self) -> bool {
        self.cursor < self.set.buffer.count()
    }

    fn next(&mut self) -> Result<&E> {
        let element = self
            .set
            .buffer
            .get(self.cursor)
            .ok_or(SetError::EndOfIteration)?;

        self.cursor += 1;
        self.removable = true;
        Ok(element)
    }

    // The following element shifts into the removed slot, so the cursor steps back onto it
    fn remove(&mut self) -> Result<()> {
        if !self.removable {
            return Err(SetError::IllegalState("next has not been called"));
        }

        self.cursor -= 1;
        self.set.remove_at_index(self.cursor);
        self.removable = false;
        Ok(())
    }
}

//-----------------------------------------------------------------------------------------------//

/// A set of strings, stored left-packed in an array.
///
/// This is a specialised version of `ArraySet` that stores compact strings, with methods that
/// take a `&str` directly.
pub type StringArraySet = ArraySet<CompactString>;

impl ArraySet<CompactString> {
    /// Add a string if it is not already in the set
    pub fn add_str(&mut self, key: &str) -> bool {
        if self.contains_str(key) {
            return false;
        }
        self.buffer.push(CompactString::new(key));
        true
    }

    /// Check if a string is in the set
    pub fn contains_str(&self, key: &str) -> bool {
        self.buffer.position(|e| e.as_str() == key).is_some()
    }

    /// Remove a string, returning `true` if it was in the set
    pub fn remove_str(&mut self, key: &str) -> bool {
        match self.buffer.position(|e| e.as_str() == key) {
            Some(index) => self.remove_at_index(index),
            None => false,
        }
    }
}

impl<'a> FromIterator<&'a str> for ArraySet<CompactString> {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let iter = iter.into_iter();
        ArraySet::from_source(iter.size_hint().0, iter.map(|s| Some(CompactString::new(s))))
    }
}

//-----------------------------------------------------------------------------------------------//

#[test]
// Adding the same element twice only grows the set once
fn test_array_set_0() {
    let mut set = ArraySet::new();

    debug_assert!(set.add(5));
    debug_assert!(set.add(1));
    debug_assert!(!set.add(5));
    debug_assert!(set.add(9));

    debug_assert_eq!(set.count(), 3);
    debug_assert!(set.contains(&5));
    debug_assert!(!set.contains(&4));

    let v: Vec<i32> = set.iter().cloned().collect();
    debug_assert_eq!(v, alloc::vec![5, 1, 9]);
}

#[test]
// The capacity grows by exactly one increment once the array is full
fn test_array_set_1() {
    let mut set = ArraySet::with_capacity_and_increment(10, 5).unwrap();

    for i in 0..10 {
        set.add(i);
    }
    debug_assert_eq!(set.capacity(), 10);

    set.add(10);
    debug_assert_eq!(set.capacity(), 15);
    debug_assert_eq!(set.count(), 11);
    set.buffer.check();
}

#[test]
// Constructors reject capacities and increments below 1
fn test_array_set_2() {
    debug_assert!(matches!(
        ArraySet::<i32>::with_capacity(0),
        Err(SetError::InvalidArgument(_))
    ));
    debug_assert!(matches!(
        ArraySet::<i32>::with_capacity_and_increment(0, 1),
        Err(SetError::InvalidArgument(_))
    ));
    debug_assert!(matches!(
        ArraySet::<i32>::with_capacity_and_increment(1, 0),
        Err(SetError::InvalidArgument(_))
    ));

    let set = ArraySet::<i32>::with_capacity(3).unwrap();
    debug_assert_eq!(set.capacity(), 3);
    debug_assert_eq!(set.capacity_increment(), crate::util::DEFAULT_CAPACITY_INCREMENT);
}

#[test]
// Building from a collection skips absent elements and duplicates
fn test_array_set_3() {
    let set = ArraySet::from_nullable(alloc::vec![Some("a"), None, Some("b"), Some("a")]);
    debug_assert_eq!(set.count(), 2);
    debug_assert_eq!(set.capacity(), 4);

    let set = ArraySet::<&str>::from_nullable(Vec::new());
    debug_assert_eq!(set.capacity(), crate::util::DEFAULT_CAPACITY);
}

#[test]
// Removing through the cursor while walking the set
fn test_array_set_4() {
    let mut set: StringArraySet = ["a", "b", "a", "c"].into_iter().collect();
    debug_assert_eq!(set.count(), 3);

    let mut cursor = set.cursor();
    while cursor.has_next() {
        let found = cursor.next().unwrap() == "b";
        if found {
            cursor.remove().unwrap();
            debug_assert_eq!(cursor.next().unwrap(), "c");
        }
    }
    debug_assert_eq!(cursor.next(), Err(SetError::EndOfIteration));

    debug_assert_eq!(set.count(), 2);
    debug_assert!(set.contains_str("a"));
    debug_assert!(!set.contains_str("b"));
    debug_assert!(set.contains_str("c"));
    debug_assert!(!set.iter().any(|s| s == "b"));
}

#[test]
// Cursor removal is only allowed once after each call to next
fn test_array_set_5() {
    let mut set: ArraySet<u8> = [1, 2, 3].into_iter().collect();

    let mut cursor = set.cursor();
    debug_assert!(matches!(cursor.remove(), Err(SetError::IllegalState(_))));
    debug_assert_eq!(cursor.next(), Ok(&1));
    debug_assert_eq!(cursor.remove(), Ok(()));
    debug_assert!(matches!(cursor.remove(), Err(SetError::IllegalState(_))));
    debug_assert_eq!(cursor.next(), Ok(&2));
    debug_assert_eq!(cursor.next(), Ok(&3));
    debug_assert_eq!(cursor.next(), Err(SetError::EndOfIteration));
    debug_assert!(!cursor.has_next());

    debug_assert_eq!(set.to_vec(), alloc::vec![2, 3]);
    debug_assert!(!set.remove_at_index(2));
}

#[test]
// Clearing resets the capacity and increment, stripping fits the capacity to the elements
fn test_array_set_6() {
    let mut set = ArraySet::with_capacity_and_increment(2, 7).unwrap();
    debug_assert!(matches!(set.strip(), Err(SetError::IllegalState(_))));

    set.extend([1, 2, 3]);
    debug_assert_eq!(set.capacity(), 9);

    set.strip().unwrap();
    debug_assert_eq!(set.capacity(), 3);
    debug_assert_eq!(set.count(), 3);

    set.clear();
    debug_assert!(set.is_empty());
    debug_assert_eq!(set.capacity(), crate::util::DEFAULT_CAPACITY);
    debug_assert_eq!(set.capacity_increment(), crate::util::DEFAULT_CAPACITY_INCREMENT);
}

#[test]
// Snapshots expose the whole array, copies into a target reuse it when it is large enough
fn test_array_set_7() {
    let set: ArraySet<u32> = ArraySet::with_capacity(4)
        .map(|mut set| {
            set.extend([7, 8]);
            set
        })
        .unwrap();

    debug_assert_eq!(set.to_array(), alloc::vec![Some(7), Some(8), None, None]);

    let target = alloc::vec![Some(0); 2];
    let address = target.as_ptr();
    let target = set.to_array_into(target);
    debug_assert_eq!(target.as_ptr(), address);
    debug_assert_eq!(target, alloc::vec![Some(7), Some(8)]);

    let target = set.to_array_into(alloc::vec![Some(0); 5]);
    debug_assert_eq!(target, alloc::vec![Some(7), Some(8), None, None, None]);

    let target = set.to_array_into(alloc::vec![Some(0); 1]);
    debug_assert_eq!(target, alloc::vec![Some(7), Some(8)]);
}

#[test]
// A clone has the same layout but is independent of the original
fn test_array_set_8() {
    let mut set = ArraySet::with_capacity_and_increment(6, 2).unwrap();
    set.extend(["Lorem", "ipsum", "sit"]);

    let mut copy = set.clone();
    debug_assert_eq!(copy, set);
    debug_assert_eq!(copy.capacity(), 6);
    debug_assert_eq!(copy.capacity_increment(), 2);

    copy.remove(&"ipsum");
    copy.add("dolor");
    debug_assert_ne!(copy, set);
    debug_assert_eq!(set.to_vec(), alloc::vec!["Lorem", "ipsum", "sit"]);
}

#[test]
// Set algebra sizes its results, and an undersized difference still grows
fn test_array_set_9() {
    let first: ArraySet<u32> = (0..30).collect();
    let second: ArraySet<u32> = (25..27).collect();

    let difference = first.difference(&second);
    debug_assert_eq!(difference.count(), 28);
    debug_assert!(difference.capacity() >= 28);
    debug_assert!(!difference.contains(&25));

    let union = first.union(&second);
    debug_assert_eq!(union.count(), 30);
    debug_assert_eq!(union.capacity(), 32);

    let intersection = first.intersection(&second);
    debug_assert_eq!(intersection.to_vec(), alloc::vec![25, 26]);
    debug_assert_eq!(intersection.capacity(), 30);

    let empty = ArraySet::<u32>::new();
    debug_assert!(empty.union(&empty).is_empty());
    debug_assert!(empty.difference(&first).is_empty());
}

#[test]
// String sets take `&str` directly
fn test_array_set_10() {
    use alloc::{format, string::ToString};

    let mut set = StringArraySet::new();
    debug_assert!(set.add_str("Five"));
    debug_assert!(set.add_str("One"));
    debug_assert!(!set.add_str("Five"));
    debug_assert!(set.add(CompactString::new("Nine")));

    debug_assert_eq!(format!("{set}"), "{Five, One, Nine}");
    debug_assert!(set.remove_str("One"));
    debug_assert!(!set.remove_str("One"));
    debug_assert_eq!(set.to_string(), "{Five, Nine}");
}

#[test]
// A stress test with adding and removing
fn test_array_set_11() {
    use rand::prelude::*;

    const COUNT: usize = 2000;

    let mut rng = SmallRng::seed_from_u64(1234567890);

    let mut set = ArraySet::new();
    let mut distinct = Vec::new();
    for _ in 0..COUNT {
        let key = rng.random_range(0..COUNT as u32);
        if !distinct.contains(&key) {
            distinct.push(key);
        }
        set.add(key);
    }

    debug_assert_eq!(set.count(), distinct.len());
    debug_assert_eq!(set.to_vec(), distinct);
    set.buffer.check();

    for key in distinct.iter() {
        debug_assert!(set.remove(key));
    }

    debug_assert!(set.is_empty());
    set.buffer.check();
}
