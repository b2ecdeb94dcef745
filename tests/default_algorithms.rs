//! Tests for the default algorithms of the `Set` trait.
//!
//! `MinimalSet` only supplies `add`, `iter` and `cursor`, so every other operation exercised here
//! runs the trait's default implementation.

use std::any::{Any, TypeId};

use coppice::{ArraySet, Element, Set, SetCursor, SetError};
use rstest::rstest;

// =============================================================================
// A set with nothing but the primitives
// =============================================================================

#[derive(Clone, Debug)]
struct MinimalSet<E> {
    items: Vec<E>,
}

impl<E> Default for MinimalSet<E> {
    fn default() -> Self {
        MinimalSet { items: Vec::new() }
    }
}

struct MinimalCursor<'a, E> {
    items: &'a mut Vec<E>,
    next: usize,
    removable: bool,
}

impl<E> SetCursor<E> for MinimalCursor<'_, E> {
    fn has_next(&self) -> bool {
        self.next < self.items.len()
    }

    fn next(&mut self) -> coppice::Result<&E> {
        let element = self.items.get(self.next).ok_or(SetError::EndOfIteration)?;
        self.next += 1;
        self.removable = true;
        Ok(element)
    }

    fn remove(&mut self) -> coppice::Result<()> {
        if !self.removable {
            return Err(SetError::IllegalState("next has not been called"));
        }
        self.next -= 1;
        self.items.remove(self.next);
        self.removable = false;
        Ok(())
    }
}

impl<E: Element> Set for MinimalSet<E> {
    type Element = E;

    type Iter<'a>
        = std::slice::Iter<'a, E>
    where
        Self: 'a;

    type Cursor<'a>
        = MinimalCursor<'a, E>
    where
        Self: 'a;

    fn add(&mut self, element: E) -> bool {
        if self.items.contains(&element) {
            return false;
        }
        self.items.push(element);
        true
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.items.iter()
    }

    fn cursor(&mut self) -> Self::Cursor<'_> {
        MinimalCursor {
            items: &mut self.items,
            next: 0,
            removable: false,
        }
    }
}

fn minimal<E: Element>(elements: impl IntoIterator<Item = E>) -> MinimalSet<E> {
    let mut set = MinimalSet::default();
    set.add_all(elements);
    set
}

// =============================================================================
// Queries
// =============================================================================

#[rstest]
fn test_count_and_emptiness_follow_the_iterator() {
    let mut set = MinimalSet::default();
    assert!(set.is_empty());
    assert_eq!(set.count(), 0);

    set.add("one");
    set.add("two");
    set.add("one");
    assert!(!set.is_empty());
    assert_eq!(set.count(), 2);
}

#[rstest]
fn test_contains_scans_for_an_equal_element() {
    let set = minimal(["alpha".to_string(), "beta".to_string()]);

    assert!(set.contains(&"beta".to_string()));
    assert!(!set.contains(&"gamma".to_string()));
    assert!(set.contains_all([&"alpha".to_string()]));
    assert!(!set.contains_all([&"alpha".to_string(), &"gamma".to_string()]));
}

#[rstest]
fn test_contains_dyn_never_fails() {
    let set = minimal([1u32, 2, 3]);

    assert!(set.contains_dyn(Some(&2u32)));
    assert!(!set.contains_dyn(Some(&2i64)));
    assert!(!set.contains_dyn(None));
}

#[rstest]
fn test_elements_type_is_absent_for_an_empty_set() {
    let empty: MinimalSet<u32> = MinimalSet::default();
    assert_eq!(empty.elements_type(), None);

    let set = minimal([7u32]);
    assert_eq!(set.elements_type(), Some(TypeId::of::<u32>()));
}

// =============================================================================
// Mutation
// =============================================================================

#[rstest]
fn test_add_all_reports_change() {
    let mut set = minimal([1, 2]);
    assert!(!set.add_all([1, 2, 2]));
    assert!(set.add_all([2, 3]));
    assert_eq!(set.to_vec(), vec![1, 2, 3]);
}

#[rstest]
fn test_try_add_all_stops_at_the_first_absent_element() {
    let mut set = MinimalSet::default();
    let result = set.try_add_all(Some([Some('a'), Some('b'), None, Some('c')]));

    assert_eq!(result, Err(SetError::NullArgument));
    assert_eq!(set.to_vec(), vec!['a', 'b']);

    assert_eq!(set.try_add_all(None::<Vec<Option<char>>>), Err(SetError::NullArgument));
    assert_eq!(set.try_add_all(Some([Some('c')])), Ok(true));
    assert_eq!(set.to_vec(), vec!['a', 'b', 'c']);
}

#[rstest]
fn test_remove_goes_through_the_cursor() {
    let mut set = minimal([10, 20, 30]);

    assert!(set.remove(&20));
    assert!(!set.remove(&20));
    assert_eq!(set.try_remove(None), Err(SetError::NullArgument));
    assert_eq!(set.to_vec(), vec![10, 30]);
}

#[rstest]
fn test_clear_removes_everything() {
    let mut set = minimal(0..25);
    set.clear();
    assert!(set.is_empty());
}

#[rstest]
fn test_remove_all_and_retain_all() {
    let mut set = minimal(0..10);
    let odd: Vec<i32> = (1..10).step_by(2).collect();

    assert!(set.remove_all(odd.iter()));
    assert!(!set.remove_all(odd.iter()));
    assert_eq!(set.to_vec(), vec![0, 2, 4, 6, 8]);

    assert!(set.retain_all([&0, &4, &99]));
    assert!(!set.retain_all([&0, &4]));
    assert_eq!(set.to_vec(), vec![0, 4]);

    let mut empty: MinimalSet<i32> = MinimalSet::default();
    assert!(!empty.remove_all(odd.iter()));
}

#[rstest]
fn test_try_retain_all_rejects_an_absent_collection() {
    let mut set = minimal([1, 2, 3]);

    assert_eq!(set.try_retain_all(None::<Vec<&i32>>), Err(SetError::NullArgument));
    assert_eq!(set.to_vec(), vec![1, 2, 3]);

    assert_eq!(set.try_retain_all(Some([&2, &3, &4])), Ok(true));
    assert_eq!(set.try_retain_all(Some([&2, &3])), Ok(false));
    assert_eq!(set.to_vec(), vec![2, 3]);
}

#[rstest]
fn test_dyn_collections_check_element_types() {
    let mut set = minimal(["dolor", "amet"]);

    let same: [&dyn Any; 2] = [&"dolor", &"amet"];
    let mixed: [&dyn Any; 2] = [&"dolor", &5u8];

    assert_eq!(set.contains_all_dyn(None), Err(SetError::NullArgument));
    assert_eq!(set.contains_all_dyn(Some(&same)), Ok(true));
    assert_eq!(set.contains_all_dyn(Some(&mixed)), Err(SetError::TypeMismatch));
    assert_eq!(set.contains_all_dyn(Some(&[])), Ok(true));

    assert_eq!(set.remove_all_dyn(None), Err(SetError::NullArgument));
    assert_eq!(set.remove_all_dyn(Some(&[])), Ok(false));
    assert_eq!(set.remove_all_dyn(Some(&mixed)), Err(SetError::TypeMismatch));
    assert_eq!(set.to_vec(), vec!["amet"]);

    let empty: MinimalSet<&str> = MinimalSet::default();
    assert_eq!(empty.contains_all_dyn(Some(&mixed)), Ok(false));
}

#[rstest]
fn test_remove_all_dyn_keeps_the_element_type_once_emptied() {
    let mut set = minimal([1u8]);
    let emptying: [&dyn Any; 2] = [&1u8, &"x"];

    assert_eq!(set.remove_all_dyn(Some(&emptying)), Err(SetError::TypeMismatch));
    assert!(set.is_empty());

    let mut set = minimal([1u8, 2]);
    let matching: [&dyn Any; 2] = [&1u8, &2u8];
    assert_eq!(set.remove_all_dyn(Some(&matching)), Ok(true));
    assert!(set.is_empty());
}

// =============================================================================
// Set algebra and identity
// =============================================================================

#[rstest]
fn test_algebra_defaults_build_new_sets() {
    let first = minimal([1, 2, 3, 4]);
    let second = minimal([3, 4, 5]);

    assert_eq!(first.union(&second).to_vec(), vec![1, 2, 3, 4, 5]);
    assert_eq!(first.intersection(&second).to_vec(), vec![3, 4]);
    assert_eq!(first.difference(&second).to_vec(), vec![1, 2]);
    assert_eq!(first.symmetric_difference(&second).to_vec(), vec![1, 2, 5]);

    assert_eq!(first.to_vec(), vec![1, 2, 3, 4]);
    assert_eq!(second.to_vec(), vec![3, 4, 5]);
}

#[rstest]
fn test_equality_and_hash_ignore_order() {
    let first = minimal(["x", "y", "z"]);
    let second: ArraySet<&str> = ["z", "y", "x"].into_iter().collect();

    assert!(first.set_eq(&second));
    assert_eq!(second, first);
    assert_eq!(first.hash_code(), second.hash_code());
    assert_eq!(MinimalSet::<u8>::default().hash_code(), 0);
    assert!(!first.set_eq(&minimal(["x", "y"])));
}

#[rstest]
fn test_to_array_is_sized_to_the_elements() {
    let set = minimal([4u8, 5]);
    assert_eq!(set.to_array(), vec![Some(4), Some(5)]);
}
