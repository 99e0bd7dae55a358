use std::fmt;
use std::ptr::NonNull;

use crate::error::Error;
use crate::list::{Node, SortedList};

/// A fail-fast forward cursor over a [`SortedList`].
///
/// A `Cursor` snapshots the list's version stamp when it is created. Every
/// [`next`](Cursor::next) call first compares that snapshot against the
/// list's current stamp and fails with [`Error::ConcurrentModification`]
/// if any structural mutation happened outside the cursor. The one
/// sanctioned exception is [`remove`](Cursor::remove), which unlinks the
/// most recently returned element and re-synchronizes the snapshot, so
/// iteration can continue.
///
/// Unlike [`iter`](SortedList::iter), a `Cursor` holds no borrow of the
/// list; each operation takes the list explicitly. That is what makes
/// out-of-band mutation *possible* to attempt, and the version stamp is what
/// turns such an attempt into an error instead of undefined behavior: the
/// stamp is process-unique, so the cursor's node pointers are only
/// dereferenced after a stamp match proves them alive.
///
/// # Examples
///
/// Removing every odd element during a single traversal:
///
/// ```
/// use sorted_list::SortedList;
///
/// let mut list = SortedList::of_integers();
/// for value in [1, 2, 3, 4, 5] {
///     list.insert(value);
/// }
///
/// let mut cursor = list.cursor();
/// while cursor.has_next(&list) {
///     if cursor.next(&list).copied().unwrap() % 2 == 1 {
///         cursor.remove(&mut list).unwrap();
///     }
/// }
/// assert_eq!(list.to_vec(), vec![2, 4]);
/// ```
///
/// Mutating the list outside the cursor invalidates it:
///
/// ```
/// use sorted_list::{Error, SortedList};
///
/// let mut list = SortedList::of_integers();
/// list.insert(1);
///
/// let mut cursor = list.cursor();
/// list.insert(2);
/// assert_eq!(cursor.next(&list), Err(Error::ConcurrentModification));
/// ```
pub struct Cursor<T> {
    /// The next node to yield; the ghost node once exhausted.
    next: NonNull<Node<T>>,
    /// The node most recently yielded by `next`, cleared by `remove`.
    last_returned: Option<NonNull<Node<T>>>,
    expected_version: u64,
}

impl<T> Cursor<T> {
    pub(crate) fn new(list: &SortedList<T>) -> Self {
        Self {
            next: list.front_node(),
            last_returned: None,
            expected_version: list.version,
        }
    }

    /// Fails unless `list` is in the exact state this cursor last observed.
    ///
    /// Stamps are process-unique, so a match proves `list` is the list the
    /// cursor was created from, unmutated since the snapshot, and therefore
    /// that `self.next` and `self.last_returned` point to live nodes.
    fn check(&self, list: &SortedList<T>) -> Result<(), Error> {
        if list.version != self.expected_version {
            return Err(Error::ConcurrentModification);
        }
        Ok(())
    }

    /// Returns `true` if an [`next`](Cursor::next) call would yield an
    /// element rather than [`Error::Exhausted`].
    ///
    /// Never fails: like the staleness check itself, this only compares
    /// pointers and stamps, and a stale cursor simply reports `false` or
    /// `true` for a traversal that `next` will then refuse.
    pub fn has_next(&self, list: &SortedList<T>) -> bool {
        self.next != list.ghost_node()
    }

    /// Advances the cursor and returns a reference to the next element in
    /// ascending order.
    ///
    /// # Errors
    ///
    /// - [`Error::ConcurrentModification`] if the list was structurally
    ///   mutated since the cursor's last observed version.
    /// - [`Error::Exhausted`] if no elements remain.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_list::{Error, SortedList};
    ///
    /// let mut list = SortedList::of_integers();
    /// list.insert(2);
    /// list.insert(1);
    ///
    /// let mut cursor = list.cursor();
    /// assert_eq!(cursor.next(&list), Ok(&1));
    /// assert_eq!(cursor.next(&list), Ok(&2));
    /// assert_eq!(cursor.next(&list), Err(Error::Exhausted));
    /// ```
    pub fn next<'a>(&mut self, list: &'a SortedList<T>) -> Result<&'a T, Error> {
        self.check(list)?;
        if self.next == list.ghost_node() {
            return Err(Error::Exhausted);
        }
        // SAFETY: the stamp matched and `next` is not the ghost, so it is a
        // live node of `list`; the reference borrows `list`.
        let node = unsafe { self.next.as_ref() };
        self.last_returned = Some(self.next);
        self.next = node.next;
        Ok(&node.element)
    }

    /// Removes and returns the element most recently yielded by
    /// [`next`](Cursor::next).
    ///
    /// This is the cursor's sanctioned mutation: the list's version stamp
    /// advances as for any removal, and the cursor re-synchronizes to it, so
    /// the following `next` call succeeds.
    ///
    /// # Errors
    ///
    /// - [`Error::ConcurrentModification`] if the list was structurally
    ///   mutated since the cursor's last observed version.
    /// - [`Error::InvalidCursorState`] if no element has been yielded since
    ///   the cursor was created or since the last removal.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_list::{Error, SortedList};
    ///
    /// let mut list = SortedList::of_integers();
    /// for value in [1, 2, 3] {
    ///     list.insert(value);
    /// }
    ///
    /// let mut cursor = list.cursor();
    /// assert_eq!(cursor.remove(&mut list), Err(Error::InvalidCursorState));
    ///
    /// assert_eq!(cursor.next(&list), Ok(&1));
    /// assert_eq!(cursor.remove(&mut list), Ok(1));
    /// assert_eq!(cursor.remove(&mut list), Err(Error::InvalidCursorState));
    ///
    /// assert_eq!(cursor.next(&list), Ok(&2));
    /// assert_eq!(list.to_vec(), vec![2, 3]);
    /// ```
    pub fn remove(&mut self, list: &mut SortedList<T>) -> Result<T, Error> {
        self.check(list)?;
        let target = self.last_returned.take().ok_or(Error::InvalidCursorState)?;
        // SAFETY: the stamp matched, so `target` is a live node of `list`.
        // `self.next` is the node after `target` (or the ghost) and is
        // untouched by the unlink.
        let node = unsafe { list.detach_node(target) };
        self.expected_version = list.version;
        Ok(Node::into_element(node))
    }
}

impl<T> fmt::Debug for Cursor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("expected_version", &self.expected_version)
            .finish_non_exhaustive()
    }
}
