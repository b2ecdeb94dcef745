//! The contract shared by every set collection
//!
//! A set only has to supply storage and three primitives: `add`, a shared iterator and a mutable
//! cursor that can remove the element it last yielded. Every other operation has a default
//! written purely in terms of those primitives, which concrete sets override when their storage
//! allows something faster.
#![warn(missing_docs)]

extern crate alloc;
use alloc::vec::Vec;

use core::{
    any::{Any, TypeId},
    fmt,
    hash::{Hash, Hasher},
};

use rustc_hash::FxHasher;

use crate::error::{Result, SetError};

//-----------------------------------------------------------------------------------------------//

/// Values that can be stored in a set
///
/// Membership is decided by `Eq`, and `Hash` provides each element's contribution to the hash of
/// the set. Elements are cloned when a set operation materialises a new set.
pub trait Element: Eq + Hash + Clone {}

impl<T> Element for T where T: Eq + Hash + Clone {}

/// The hash contribution of a single element
///
/// This is stable across runs and processes, so the hash of a set only depends on its contents.
pub fn hash_contribution<E: Hash + ?Sized>(element: &E) -> u64 {
    let mut hasher = FxHasher::default();
    element.hash(&mut hasher);
    hasher.finish()
}

//-----------------------------------------------------------------------------------------------//

/// A cursor over a set that can remove the element it last yielded
///
/// The cursor holds the set mutably for its lifetime, so the set cannot be changed behind its
/// back.
pub trait SetCursor<E> {
    /// Check if a call to `next` would yield an element
    fn has_next(&self) -> bool;

    /// Yield the next element
    ///
    /// Fails with `SetError::EndOfIteration` when every element has been yielded.
    fn next(&mut self) -> Result<&E>;

    /// Remove the element yielded by the last call to `next`
    ///
    /// This can be called once per successful `next`, otherwise `SetError::IllegalState` is
    /// returned. The element following the removed one is yielded by the next call to `next`.
    fn remove(&mut self) -> Result<()>;
}

//-----------------------------------------------------------------------------------------------//

/// An unordered collection without duplicate elements
pub trait Set: Clone + Default {
    /// The type of the elements
    type Element: Element;

    /// Shared iterator over the elements
    type Iter<'a>: Iterator<Item = &'a Self::Element>
    where
        Self: 'a;

    /// Mutable cursor over the elements
    type Cursor<'a>: SetCursor<Self::Element>
    where
        Self: 'a;

    /// Add an element if it is not already in the set
    ///
    /// Returns `true` if the set changed.
    fn add(&mut self, element: Self::Element) -> bool;

    /// Iterate over the elements
    fn iter(&self) -> Self::Iter<'_>;

    /// Walk the elements with a cursor that can remove them
    fn cursor(&mut self) -> Self::Cursor<'_>;

    /// Add an element that may be absent
    ///
    /// Fails with `SetError::NullArgument` if `element` is `None`.
    fn try_add(&mut self, element: Option<Self::Element>) -> Result<bool> {
        element.map(|e| self.add(e)).ok_or(SetError::NullArgument)
    }

    /// Add every element, returning `true` if the set changed
    fn add_all<I>(&mut self, elements: I) -> bool
    where
        I: IntoIterator<Item = Self::Element>,
    {
        let mut changed = false;
        for element in elements {
            if !self.contains(&element) && self.add(element) {
                changed = true;
            }
        }
        changed
    }

    /// Add every element of a collection that may be absent or hold absent elements
    ///
    /// Fails with `SetError::NullArgument` if the collection is absent, or at the first absent
    /// element. The elements before it have already been added by then.
    fn try_add_all<I>(&mut self, elements: Option<I>) -> Result<bool>
    where
        I: IntoIterator<Item = Option<Self::Element>>,
    {
        let elements = elements.ok_or(SetError::NullArgument)?;

        let mut changed = false;
        for element in elements {
            let element = element.ok_or(SetError::NullArgument)?;
            if !self.contains(&element) && self.add(element) {
                changed = true;
            }
        }
        Ok(changed)
    }

    /// Remove every element
    fn clear(&mut self) {
        let mut cursor = self.cursor();
        while cursor.next().is_ok() {
            if cursor.remove().is_err() {
                break;
            }
        }
    }

    /// Check if an element is in the set
    fn contains(&self, element: &Self::Element) -> bool {
        self.iter().any(|e| e == element)
    }

    /// Check if a value of any type is in the set
    ///
    /// Absent values and values of another type are never contained.
    fn contains_dyn(&self, item: Option<&dyn Any>) -> bool
    where
        Self::Element: Any,
    {
        item.and_then(|item| item.downcast_ref::<Self::Element>())
            .is_some_and(|element| self.contains(element))
    }

    /// Check if every element of a collection is in the set
    fn contains_all<'a, I>(&self, elements: I) -> bool
    where
        I: IntoIterator<Item = &'a Self::Element>,
        Self::Element: 'a,
    {
        elements.into_iter().all(|element| self.contains(element))
    }

    /// Check if every item of a heterogeneous collection is in the set
    ///
    /// Fails with `SetError::NullArgument` if the collection is absent and with
    /// `SetError::TypeMismatch` if the set is not empty and an item has a type other than the
    /// type of the elements.
    fn contains_all_dyn(&self, items: Option<&[&dyn Any]>) -> Result<bool>
    where
        Self::Element: Any,
    {
        let items = items.ok_or(SetError::NullArgument)?;
        let established = self.elements_type();

        for item in items.iter().copied() {
            if established.is_some_and(|type_id| item.type_id() != type_id) {
                return Err(SetError::TypeMismatch);
            }
            if !self.contains_dyn(Some(item)) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Check if there are no elements
    fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Remove an element, returning `true` if it was in the set
    fn remove(&mut self, element: &Self::Element) -> bool {
        let mut cursor = self.cursor();
        while cursor.has_next() {
            let found = match cursor.next() {
                Ok(current) => current == element,
                Err(_) => break,
            };
            if found {
                return cursor.remove().is_ok();
            }
        }
        false
    }

    /// Remove an element that may be absent
    ///
    /// Fails with `SetError::NullArgument` if `element` is `None`.
    fn try_remove(&mut self, element: Option<&Self::Element>) -> Result<bool> {
        element.map(|e| self.remove(e)).ok_or(SetError::NullArgument)
    }

    /// Remove every element of a collection, returning `true` if the set changed
    fn remove_all<'a, I>(&mut self, elements: I) -> bool
    where
        I: IntoIterator<Item = &'a Self::Element>,
        Self::Element: 'a,
    {
        if self.is_empty() {
            return false;
        }

        let mut changed = false;
        for element in elements {
            if self.remove(element) {
                changed = true;
            }
        }
        changed
    }

    /// Remove every item of a heterogeneous collection
    ///
    /// Fails with `SetError::NullArgument` if the collection is absent and with
    /// `SetError::TypeMismatch` if the set is not empty and an item has a type other than the
    /// type of the elements. Items before the mismatching one have already been removed.
    fn remove_all_dyn(&mut self, items: Option<&[&dyn Any]>) -> Result<bool>
    where
        Self::Element: Any,
    {
        let items = items.ok_or(SetError::NullArgument)?;
        if self.is_empty() || items.is_empty() {
            return Ok(false);
        }

        // Taken on entry, before the removals can empty the set
        let established = self.elements_type();

        let mut changed = false;
        for item in items.iter().copied() {
            if established.is_some_and(|type_id| item.type_id() != type_id) {
                return Err(SetError::TypeMismatch);
            }
            if let Some(element) = item.downcast_ref::<Self::Element>() {
                if self.remove(element) {
                    changed = true;
                }
            }
        }
        Ok(changed)
    }

    /// Keep only the elements that are also in a collection, returning `true` if the set changed
    fn retain_all<'a, I>(&mut self, elements: I) -> bool
    where
        I: IntoIterator<Item = &'a Self::Element>,
        Self::Element: 'a,
    {
        let kept: Vec<&Self::Element> = elements.into_iter().collect();

        let mut changed = false;
        let mut cursor = self.cursor();
        while cursor.has_next() {
            let retained = match cursor.next() {
                Ok(current) => kept.iter().any(|&k| k == current),
                Err(_) => break,
            };
            if !retained && cursor.remove().is_ok() {
                changed = true;
            }
        }
        changed
    }

    /// Keep only the elements that are also in a collection that may be absent
    ///
    /// Fails with `SetError::NullArgument` if the collection is absent, leaving the set untouched.
    fn try_retain_all<'a, I>(&mut self, elements: Option<I>) -> Result<bool>
    where
        I: IntoIterator<Item = &'a Self::Element>,
        Self::Element: 'a,
    {
        elements
            .map(|elements| self.retain_all(elements))
            .ok_or(SetError::NullArgument)
    }

    /// Get the number of elements
    fn count(&self) -> usize {
        self.iter().count()
    }

    /// Snapshot the elements into a vector sized to the number of elements
    fn to_array(&self) -> Vec<Option<Self::Element>> {
        self.iter().cloned().map(Some).collect()
    }

    /// Copy the elements into `target`
    ///
    /// If `target` has at least as many slots as there are elements then the elements are
    /// written to its leading slots, the trailing slots are cleared to `None` and the same vector
    /// is returned. Otherwise a new vector with one slot per element is returned.
    fn to_array_into(
        &self,
        mut target: Vec<Option<Self::Element>>,
    ) -> Vec<Option<Self::Element>> {
        if target.len() < self.count() {
            return self.iter().cloned().map(Some).collect();
        }

        let mut slots = target.iter_mut();
        for (element, slot) in self.iter().zip(slots.by_ref()) {
            *slot = Some(element.clone());
        }
        for slot in slots {
            *slot = None;
        }
        target
    }

    /// Snapshot the elements into a vector
    fn to_vec(&self) -> Vec<Self::Element> {
        self.iter().cloned().collect()
    }

    /// Create a set with every element of this set and of `other`
    fn union<S>(&self, other: &S) -> Self
    where
        S: Set<Element = Self::Element>,
    {
        let mut result = Self::default();
        result.add_all(self.iter().cloned());
        result.add_all(other.iter().cloned());
        result
    }

    /// Create a set with the elements of this set that are also in `other`
    fn intersection<S>(&self, other: &S) -> Self
    where
        S: Set<Element = Self::Element>,
    {
        let mut result = Self::default();
        result.add_all(self.iter().filter(|e| other.contains(e)).cloned());
        result
    }

    /// Create a set with the elements of this set that are not in `other`
    fn difference<S>(&self, other: &S) -> Self
    where
        S: Set<Element = Self::Element>,
    {
        let mut result = Self::default();
        result.add_all(self.iter().filter(|e| !other.contains(e)).cloned());
        result
    }

    /// Create a set with the elements that are in exactly one of this set and `other`
    fn symmetric_difference<S>(&self, other: &S) -> Self
    where
        S: Set<Element = Self::Element>,
    {
        self.difference(other).union(&other.difference(self))
    }

    /// Get the type of the elements, or `None` if the set is empty
    fn elements_type(&self) -> Option<TypeId>
    where
        Self::Element: Any,
    {
        self.iter().next().map(|element| element.type_id())
    }

    /// Check if this set and `other` hold exactly the same elements
    fn set_eq<S>(&self, other: &S) -> bool
    where
        S: Set<Element = Self::Element>,
    {
        self.count() == other.count() && self.iter().all(|element| other.contains(element))
    }

    /// Get the hash of the set, the sum of the hash contributions of its elements
    fn hash_code(&self) -> u64 {
        self.iter()
            .map(hash_contribution)
            .fold(0, u64::wrapping_add)
    }
}

//-----------------------------------------------------------------------------------------------//

/// Replace the contents of `result` with the union of `first` and `second`
///
/// Fails with `SetError::NullArgument` if any of the sets is absent.
pub fn union_into<A, B, R>(
    first: Option<&A>,
    second: Option<&B>,
    result: Option<&mut R>,
) -> Result<()>
where
    A: Set,
    B: Set<Element = A::Element>,
    R: Set<Element = A::Element>,
{
    let (first, second, result) = require(first, second, result)?;
    result.clear();
    result.add_all(first.union(second).iter().cloned());
    Ok(())
}

/// Replace the contents of `result` with the intersection of `first` and `second`
///
/// Fails with `SetError::NullArgument` if any of the sets is absent.
pub fn intersection_into<A, B, R>(
    first: Option<&A>,
    second: Option<&B>,
    result: Option<&mut R>,
) -> Result<()>
where
    A: Set,
    B: Set<Element = A::Element>,
    R: Set<Element = A::Element>,
{
    let (first, second, result) = require(first, second, result)?;
    result.clear();
    result.add_all(first.intersection(second).iter().cloned());
    Ok(())
}

/// Replace the contents of `result` with the difference of `first` and `second`
///
/// Fails with `SetError::NullArgument` if any of the sets is absent.
pub fn difference_into<A, B, R>(
    first: Option<&A>,
    second: Option<&B>,
    result: Option<&mut R>,
) -> Result<()>
where
    A: Set,
    B: Set<Element = A::Element>,
    R: Set<Element = A::Element>,
{
    let (first, second, result) = require(first, second, result)?;
    result.clear();
    result.add_all(first.difference(second).iter().cloned());
    Ok(())
}

// Unwrap the operands of a pairwise operator
fn require<'a, A, B, R>(
    first: Option<&'a A>,
    second: Option<&'a B>,
    result: Option<&'a mut R>,
) -> Result<(&'a A, &'a B, &'a mut R)> {
    match (first, second, result) {
        (Some(first), Some(second), Some(result)) => Ok((first, second, result)),
        _ => Err(SetError::NullArgument),
    }
}

// Write elements as `{a, b, c}`
pub(crate) fn fmt_elements<'a, E, I>(elements: I, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    E: fmt::Display + 'a,
    I: Iterator<Item = &'a E>,
{
    write!(f, "{{")?;
    for (i, element) in elements.enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{element}")?;
    }
    write!(f, "}}")
}

//-----------------------------------------------------------------------------------------------//

#[test]
// Hash contributions only depend on the value
fn test_hash_contribution_0() {
    use alloc::string::String;

    debug_assert_eq!(
        hash_contribution(&String::from("amet")),
        hash_contribution(&String::from("amet"))
    );
    debug_assert_ne!(hash_contribution(&1u32), hash_contribution(&2u32));
}
