//! ## Introduction
//!
//! This crate implements unordered sets backed by arrays. Elements are kept left-packed in a
//! contiguous buffer and found by linear scan, which is hard to beat for small sets and needs
//! nothing more of an element than equality. The sets never hold two equal elements, and two
//! sets are equal when they hold the same elements, whatever the order.
//!
//! ## Benefits
//!
//! - The capacity of an `ArraySet` is a first class property. It starts at a chosen size, grows
//!   by a fixed capacity increment when full, and can be stripped back to the number of elements.
//! - Every set implements the `Set` trait. A set only has to supply `add`, an iterator and a
//!   removing cursor; union, intersection, difference and the rest come for free, and concrete
//!   sets override them where their storage allows something faster.
//! - Set operations work across variants, so the union of an `ArraySet` and a `ListSet` is
//!   well-defined, and always produce a new set rather than modifying an operand.
//! - The crate is small and `#![no_std]`.
//!
//! ## Contents
//!
//! <center>
//!
//! | Type             | Stores  | Storage              | Iterator           | Cursor           |
//! |:-----------------|:--------|:---------------------|:-------------------|:-----------------|
//! | `ArraySet`       | Element | Array with increment | `ArraySetIterator` | `ArraySetCursor` |
//! | `ListSet`        | Element | Vector               | `ListSetIterator`  | `ListSetCursor`  |
//! | `StringArraySet` | String  | Array with increment | `ArraySetIterator` | `ArraySetCursor` |
//! | `StringListSet`  | String  | Vector               | `ListSetIterator`  | `ListSetCursor`  |
//! | `AnySet`         | Element | Either of the above  | `AnySetIterator`   | `AnySetCursor`   |
//!
//! </center>
//!
//! `SetKind` picks a variant at runtime and builds an `AnySet` of it. The pairwise operators
//! `union_into`, `intersection_into` and `difference_into` write the result of a set operation
//! into an existing set.
//!
//! The crate exposes an additional type `util::Buffer` that provides the storage of `ArraySet`.
//! It is provided to support development of additional collection types.

#![no_std]
#![warn(missing_docs)]

extern crate alloc;

mod array;
mod contract;
mod error;
mod factory;
mod list;
pub mod util;

pub use array::*;
pub use contract::*;
pub use error::*;
pub use factory::*;
pub use list::*;
