//! Utility types to support array-backed collections

#![warn(missing_docs)]

extern crate alloc;
use alloc::{boxed::Box, vec::Vec};

use core::fmt::Display;

use crate::error::{Result, SetError};

/// Capacity of a buffer when none is requested
pub const DEFAULT_CAPACITY: usize = 10;

/// Amount a buffer grows by when none is requested
pub const DEFAULT_CAPACITY_INCREMENT: usize = 10;

//-----------------------------------------------------------------------------------------------//

/// How a `Buffer` is first sized and subsequently grown
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Growth {
    initial_capacity: usize,
    capacity_increment: usize,
}

impl Growth {
    /// Constructor
    ///
    /// Both values must be at least 1, otherwise `SetError::InvalidArgument` is returned.
    pub fn new(initial_capacity: usize, capacity_increment: usize) -> Result<Growth> {
        if initial_capacity < 1 {
            return Err(SetError::InvalidArgument("capacity must be at least 1"));
        }
        if capacity_increment < 1 {
            return Err(SetError::InvalidArgument(
                "capacity increment must be at least 1",
            ));
        }
        Ok(Growth {
            initial_capacity,
            capacity_increment,
        })
    }

    /// Constructor, using the default capacity increment
    pub fn with_capacity(initial_capacity: usize) -> Result<Growth> {
        Growth::new(initial_capacity, DEFAULT_CAPACITY_INCREMENT)
    }

    /// Get the number of slots allocated up front
    #[inline]
    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    /// Get the number of slots added on each growth
    #[inline]
    pub fn capacity_increment(&self) -> usize {
        self.capacity_increment
    }
}

impl Default for Growth {
    fn default() -> Self {
        Growth {
            initial_capacity: DEFAULT_CAPACITY,
            capacity_increment: DEFAULT_CAPACITY_INCREMENT,
        }
    }
}

//-----------------------------------------------------------------------------------------------//

/// A contiguous buffer of element slots with an explicit capacity
///
/// The occupied slots are always the prefix `[0, count)` of the buffer and the remaining slots up
/// to `capacity` are vacant. Elements keep their relative order: removing a slot shifts every
/// later element one place to the left. Growth happens in steps of the capacity increment and
/// never implicitly shrinks, which makes the capacity of the buffer a predictable quantity that
/// collection types can expose.
#[derive(Clone)]
pub struct Buffer<E> {
    slot: Box<[Option<E>]>,
    count: usize,
    increment: usize,
}

impl<E> Buffer<E> {
    /// Construct an empty buffer with the default capacity and increment
    pub fn new() -> Buffer<E> {
        Buffer::with_growth(Growth::default())
    }

    /// Construct an empty buffer sized according to `growth`
    pub fn with_growth(growth: Growth) -> Buffer<E> {
        Buffer {
            slot: vacant(growth.initial_capacity),
            count: 0,
            increment: growth.capacity_increment,
        }
    }

    /// Get the number of occupied slots
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Check if there are no occupied slots
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Get the total number of slots, occupied or not
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slot.len()
    }

    /// Get the amount the capacity grows by when the buffer is full
    #[inline]
    pub fn increment(&self) -> usize {
        self.increment
    }

    /// Get an occupied slot
    #[inline]
    pub fn get(&self, index: usize) -> Option<&E> {
        if index < self.count {
            self.slot[index].as_ref()
        } else {
            None
        }
    }

    /// Get the occupied slots
    #[inline]
    pub fn occupied(&self) -> &[Option<E>] {
        &self.slot[..self.count]
    }

    /// Get every slot, including the vacant slots past `count`
    #[inline]
    pub fn slots(&self) -> &[Option<E>] {
        &self.slot
    }

    /// Find the index of the first occupied slot matching a predicate
    pub fn position<P>(&self, mut predicate: P) -> Option<usize>
    where
        P: FnMut(&E) -> bool,
    {
        self.occupied()
            .iter()
            .position(|slot| slot.as_ref().is_some_and(&mut predicate))
    }

    /// Append an element after the last occupied slot, growing the buffer if it is full
    pub fn push(&mut self, element: E) {
        if self.count == self.slot.len() {
            self.grow();
        }
        self.slot[self.count] = Some(element);
        self.count += 1;
    }

    /// Remove the element in an occupied slot
    ///
    /// Every later element is shifted one slot to the left and the last previously occupied slot
    /// becomes vacant. If `index` is not an occupied slot then `None` is returned and the buffer
    /// is unchanged.
    pub fn remove_at(&mut self, index: usize) -> Option<E> {
        if index >= self.count {
            return None;
        }

        let element = self.slot[index].take();
        self.slot[index..self.count].rotate_left(1);
        self.count -= 1;

        element
    }

    /// Grow the buffer by one capacity increment
    ///
    /// Returns the new capacity.
    pub fn grow(&mut self) -> usize {
        self.grow_to(self.count + self.increment)
    }

    /// Grow the buffer to hold at least `minimum` slots
    ///
    /// A request that is smaller than the current capacity still grows the buffer, by one
    /// capacity increment. Returns the new capacity.
    pub fn grow_to(&mut self, minimum: usize) -> usize {
        let capacity = self.slot.len();
        let target = if minimum < capacity {
            capacity + self.increment
        } else {
            minimum
        };

        tracing::trace!(from = capacity, to = target, "growing buffer");
        self.reallocate(target);
        target
    }

    /// Shrink the buffer so that the capacity equals the number of occupied slots
    ///
    /// An empty buffer cannot be stripped, as the capacity of a buffer is never zero.
    pub fn strip(&mut self) -> Result<()> {
        if self.is_empty() {
            return Err(SetError::IllegalState("cannot strip an empty buffer"));
        }

        tracing::trace!(from = self.slot.len(), to = self.count, "stripping buffer");
        self.reallocate(self.count);
        Ok(())
    }

    /// Drop every element and start over with a buffer of the default capacity and increment
    pub fn reset(&mut self) {
        tracing::trace!(
            from = self.slot.len(),
            to = DEFAULT_CAPACITY,
            "resetting buffer"
        );
        *self = Buffer::new();
    }

    // Move the occupied slots into a fresh allocation of the given capacity
    fn reallocate(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.count);

        let mut slot = Vec::with_capacity(capacity);
        slot.extend(self.slot[..self.count].iter_mut().map(Option::take));
        slot.resize_with(capacity, || None);
        self.slot = slot.into_boxed_slice();
    }

    // Debug tests
    #[cfg(debug_assertions)]
    #[allow(dead_code)]
    pub(crate) fn check(&self) {
        debug_assert!(self.count <= self.slot.len());
        debug_assert!(self.increment >= 1);
        debug_assert!(self.slot[..self.count].iter().all(Option::is_some));
        debug_assert!(self.slot[self.count..].iter().all(Option::is_none));
    }
}

impl<E> Default for Buffer<E> {
    fn default() -> Self {
        Buffer::new()
    }
}

impl<E> Display for Buffer<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[ ")?;
        for slot in self.slot.iter() {
            match slot {
                Some(_) => write!(f, "# ")?,
                None => write!(f, ". ")?,
            }
        }
        write!(f, "]")?;
        Ok(())
    }
}

// Allocate a run of vacant slots
fn vacant<E>(capacity: usize) -> Box<[Option<E>]> {
    let mut slot = Vec::with_capacity(capacity);
    slot.resize_with(capacity, || None);
    slot.into_boxed_slice()
}

//-----------------------------------------------------------------------------------------------//

#[test]
// Growth settings are validated
fn test_growth_0() {
    debug_assert_eq!(
        Growth::new(0, 5),
        Err(SetError::InvalidArgument("capacity must be at least 1"))
    );
    debug_assert_eq!(
        Growth::new(5, 0),
        Err(SetError::InvalidArgument(
            "capacity increment must be at least 1"
        ))
    );
    debug_assert!(Growth::with_capacity(0).is_err());

    let growth = Growth::with_capacity(3).unwrap();
    debug_assert_eq!(growth.initial_capacity(), 3);
    debug_assert_eq!(growth.capacity_increment(), DEFAULT_CAPACITY_INCREMENT);

    let growth = Growth::default();
    debug_assert_eq!(growth.initial_capacity(), DEFAULT_CAPACITY);
    debug_assert_eq!(growth.capacity_increment(), DEFAULT_CAPACITY_INCREMENT);
}

#[test]
// A full buffer grows by exactly one increment
fn test_buffer_0() {
    let mut buffer = Buffer::with_growth(Growth::new(2, 3).unwrap());

    buffer.push(1);
    buffer.push(2);
    debug_assert_eq!(buffer.capacity(), 2);

    buffer.push(3);
    debug_assert_eq!(buffer.capacity(), 5);
    debug_assert_eq!(buffer.count(), 3);
    buffer.check();

    debug_assert_eq!(buffer.grow_to(1), 8);
    debug_assert_eq!(buffer.grow_to(20), 20);
    debug_assert_eq!(buffer.count(), 3);
    buffer.check();
}

#[test]
// Removal shifts later elements left and keeps their order
fn test_buffer_1() {
    let mut buffer = Buffer::new();
    for i in 0..5 {
        buffer.push(i);
    }

    debug_assert_eq!(buffer.remove_at(1), Some(1));
    debug_assert_eq!(buffer.remove_at(7), None);
    debug_assert_eq!(buffer.count(), 4);
    debug_assert_eq!(buffer.get(1), Some(&2));
    debug_assert_eq!(buffer.get(3), Some(&4));
    debug_assert_eq!(buffer.get(4), None);
    debug_assert_eq!(buffer.position(|&x| x == 3), Some(2));
    buffer.check();
}

#[test]
// Stripping and resetting reallocate the buffer
fn test_buffer_2() {
    use alloc::{format, string::String};

    let mut buffer: Buffer<String> = Buffer::new();
    debug_assert_eq!(
        buffer.strip(),
        Err(SetError::IllegalState("cannot strip an empty buffer"))
    );

    buffer.push(String::from("one"));
    buffer.push(String::from("two"));
    buffer.strip().unwrap();
    debug_assert_eq!(buffer.capacity(), 2);
    debug_assert_eq!(format!("{buffer}"), "[ # # ]");
    buffer.check();

    buffer.reset();
    debug_assert_eq!(buffer.capacity(), DEFAULT_CAPACITY);
    debug_assert!(buffer.is_empty());
    buffer.check();
}
