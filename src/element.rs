//! The closed set of element kinds a [`SortedList`] may hold.
//!
//! The list deliberately supports exactly two element kinds: integers
//! (`i64`) and strings (`String`). The restriction is a type-safety
//! boundary, not a performance one, and is enforced by sealing the
//! [`Element`] trait so that no other crate can implement it.
//!
//! [`SortedList`]: crate::SortedList

mod sealed {
    pub trait Sealed {}

    impl Sealed for i64 {}
    impl Sealed for String {}
}

/// An element kind a [`SortedList`] is allowed to hold.
///
/// This trait is sealed: it is implemented for `i64` and `String` and can
/// never be implemented outside this crate. The total ordering the list
/// maintains is the element kind's `Ord`.
///
/// # Examples
///
/// ```
/// use sorted_list::SortedList;
///
/// let integers = SortedList::of_integers();
/// let strings = SortedList::of_strings();
/// assert!(integers.is_empty());
/// assert!(strings.is_empty());
/// ```
///
/// Trying to build a list of any other type does not compile:
///
/// ```compile_fail
/// use sorted_list::SortedList;
///
/// let floats: SortedList<f64> = SortedList::new();
/// ```
///
/// [`SortedList`]: crate::SortedList
pub trait Element: sealed::Sealed + Ord {}

impl Element for i64 {}
impl Element for String {}
