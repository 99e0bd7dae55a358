//! This crate provides a sorted doubly-linked list with owned nodes: a
//! container that keeps its elements in ascending order at all times,
//! supports duplicate values, and offers indexed access, membership queries,
//! and fail-fast iteration.
//!
//! The [`SortedList`] supports exactly two element kinds, integers (`i64`)
//! and strings (`String`), enforced through the sealed [`Element`] trait and
//! the [`of_integers`]/[`of_strings`] factories. This is a deliberate
//! type-safety boundary: there is no "any comparable type" constructor.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use sorted_list::SortedList;
//!
//! let mut list = SortedList::of_integers();
//! for value in [5, 1, 9, 3, 7] {
//!     list.insert(value);
//! }
//! assert_eq!(list.to_vec(), vec![1, 3, 5, 7, 9]);
//!
//! list.insert(5); // duplicates are allowed
//! assert_eq!(list.count(&5), 2);
//!
//! assert_eq!(list.first(), Some(&1));
//! assert_eq!(list.last(), Some(&9));
//! assert_eq!(list.get(2), Ok(&5));
//! assert_eq!(list.index_of(&7), Some(4));
//!
//! assert_eq!(list.remove_all(&5), 2);
//! assert_eq!(list.to_string(), "[1, 3, 7, 9]");
//! ```
//!
//! # Memory Layout
//!
//! The list is cyclic: each node owns its successor through an exclusive
//! forward link, and a payload-less ghost (sentinel) node closes the cycle
//! between the largest and the smallest element. `ghost.next` is the head,
//! `ghost.prev` is the tail, and an empty list is the ghost node linked to
//! itself. Backward links are non-owning and used only for traversal, in
//! particular for reaching indices in the upper half of the list from the
//! tail, which halves the worst-case cost of [`get`] and [`remove_at`].
//!
//! # Iteration
//!
//! Two traversal surfaces are provided:
//!
//! - [`iter`](SortedList::iter) yields `&T` in ascending order and borrows
//!   the list, so the borrow checker statically rules out mutation during
//!   iteration. All the usual adapters (`filter`, `map`, `fold`, range-for)
//!   apply; a consumed iterator is not restartable, a fresh one must be
//!   created.
//! - [`cursor`](SortedList::cursor) creates a detached [`Cursor`] that
//!   checks a version stamp on every step and fails with
//!   [`Error::ConcurrentModification`] if the list was mutated behind its
//!   back. The cursor can also remove the element it last returned, which
//!   is the one mutation it sanctions for itself:
//!
//! ```
//! use sorted_list::SortedList;
//!
//! let mut list = SortedList::of_integers();
//! for value in [1, 2, 3, 4] {
//!     list.insert(value);
//! }
//!
//! let mut cursor = list.cursor();
//! while cursor.has_next(&list) {
//!     if cursor.next(&list).copied().unwrap() % 2 == 0 {
//!         cursor.remove(&mut list).unwrap();
//!     }
//! }
//! assert_eq!(list.to_vec(), vec![1, 3]);
//! ```
//!
//! # Complexity
//!
//! - `insert`: *O*(*n*), *O*(1) at either end
//! - `remove_first` / `remove_all` / `contains` / `index_of` / `count`:
//!   *O*(*n*) with early exit once the scan passes the target value
//! - `get` / `remove_at`: *O*(min(*i*, *n* − *i*))
//! - `first` / `last` / `len` / `is_empty`: *O*(1)
//!
//! The list is a single-threaded structure: it moves between threads freely,
//! but concurrent sharing requires external mutual exclusion.
//!
//! [`of_integers`]: SortedList::of_integers
//! [`of_strings`]: SortedList::of_strings
//! [`get`]: SortedList::get
//! [`remove_at`]: SortedList::remove_at

#[doc(inline)]
pub use element::Element;
#[doc(inline)]
pub use error::Error;
#[doc(inline)]
pub use list::cursor::Cursor;
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter};
#[doc(inline)]
pub use list::SortedList;

pub mod element;
pub mod error;
pub mod list;

/// A sorted list of integers; see [`SortedList::of_integers`].
pub type SortedIntList = SortedList<i64>;

/// A sorted list of strings; see [`SortedList::of_strings`].
pub type SortedStringList = SortedList<String>;
