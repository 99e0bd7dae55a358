use std::cmp::Ordering;
use std::marker::PhantomData;
use std::ptr::NonNull;
use std::sync::atomic::{AtomicU64, Ordering::Relaxed};

use crate::element::Element;
use crate::error::Error;
use crate::list::cursor::Cursor;
use crate::Iter;

pub mod cursor;
pub mod iterator;

mod algorithms;

/// The `SortedList` is a doubly-linked list with owned nodes that keeps its
/// elements in ascending order at all times. Duplicate values are allowed
/// and equal values keep their insertion order.
///
/// The linked structure is cyclic: a payload-less ghost (sentinel) node sits
/// between the last and the first element, so `ghost.next` is the smallest
/// element and `ghost.prev` is the largest. An empty list is the ghost node
/// linked to itself.
///
/// The list can only be built for the two blessed element kinds, `i64` and
/// `String`; see [`Element`].
///
/// Every structural mutation advances the list's version stamp, which live
/// [`Cursor`]s use to detect out-of-band modification.
pub struct SortedList<T> {
    ghost: Box<Node<Erased>>,
    pub(crate) len: usize,
    pub(crate) version: u64,
    _marker: PhantomData<Box<Node<T>>>,
}

#[repr(C)]
pub(crate) struct Node<T> {
    pub(crate) next: NonNull<Node<T>>,
    pub(crate) prev: NonNull<Node<T>>,
    pub(crate) element: T,
}

// The ghost node is a `Node<Erased>` so that it carries no payload. It may
// be viewed as a `Node<T>` because `#[repr(C)]` fixes `next` and `prev` at
// the same offsets for every payload type, and `element` is never read
// through the ghost.
struct Erased;

static NEXT_VERSION: AtomicU64 = AtomicU64::new(0);

/// Version stamps are drawn from a process-wide counter, so a stamp value is
/// never reused by any list. A cursor whose expected stamp equals the list's
/// current stamp is therefore observing the exact list state it snapshotted,
/// and every node pointer it captured is still alive.
fn next_version() -> u64 {
    NEXT_VERSION.fetch_add(1, Relaxed)
}

// node plumbing
impl<T> SortedList<T> {
    pub(crate) fn ghost_node(&self) -> NonNull<Node<T>> {
        NonNull::from(self.ghost.as_ref()).cast()
    }
    pub(crate) fn front_node(&self) -> NonNull<Node<T>> {
        // SAFETY: `ghost.next` is always valid (either `ghost` itself, or
        // the first element of the list).
        NonNull::from(unsafe { self.ghost_node().as_ref().next.as_ref() })
    }
    pub(crate) fn back_node(&self) -> NonNull<Node<T>> {
        // SAFETY: `ghost.prev` is always valid (either `ghost` itself, or
        // the last element of the list).
        NonNull::from(unsafe { self.ghost_node().as_ref().prev.as_ref() })
    }

    unsafe fn connect(&mut self, mut prev: NonNull<Node<T>>, mut next: NonNull<Node<T>>) {
        prev.as_mut().next = next;
        next.as_mut().prev = prev;
    }

    /// Detach a single node `node` from the list, and return it as a box.
    ///
    /// It is unsafe because it does not check whether `node` belongs to the
    /// list. If it does not, this call will make the list ill-formed.
    pub(crate) unsafe fn detach_node(&mut self, node: NonNull<Node<T>>) -> Box<Node<T>> {
        self.len -= 1;
        self.version = next_version();
        let node = Box::from_raw(node.as_ptr());
        self.connect(node.prev, node.next);
        node
    }

    /// Attach a single node `node` to the list, between `prev` and `next`.
    ///
    /// It is unsafe because it does not check whether `prev` and `next`
    /// belong to the list, or whether they are adjacent (only in
    /// `#[cfg(debug_assertions)]`). If they are not, this call will make the
    /// list ill-formed.
    unsafe fn attach_node(
        &mut self,
        prev: NonNull<Node<T>>,
        next: NonNull<Node<T>>,
        node: NonNull<Node<T>>,
    ) {
        #[cfg(debug_assertions)]
        assert_adjacent(prev, next);
        self.connect(prev, node);
        self.connect(node, next);
        self.len += 1;
        self.version = next_version();
        #[cfg(debug_assertions)]
        {
            assert_adjacent(prev, node);
            assert_adjacent(node, next);
        }
    }

    pub(crate) fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let front = self.front_node();
        // SAFETY: the list is non-empty, so `front` is a real node.
        let node = unsafe { self.detach_node(front) };
        Some(Node::into_element(node))
    }

    pub(crate) fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let back = self.back_node();
        // SAFETY: the list is non-empty, so `back` is a real node.
        let node = unsafe { self.detach_node(back) };
        Some(Node::into_element(node))
    }

    /// Walk to the node at `index`, scanning forward from the head when the
    /// index falls in the first half and backward from the tail otherwise.
    ///
    /// The caller must have checked `index < len`.
    fn node_at(&self, index: usize) -> NonNull<Node<T>> {
        debug_assert!(index < self.len);
        if index < self.len / 2 {
            let mut node = self.front_node();
            // SAFETY: `index` is in bounds, so the scan never reaches the ghost.
            for _ in 0..index {
                node = unsafe { node.as_ref().next };
            }
            node
        } else {
            let mut node = self.back_node();
            // SAFETY: `index` is in bounds, so the scan never reaches the ghost.
            for _ in 0..(self.len - 1 - index) {
                node = unsafe { node.as_ref().prev };
            }
            node
        }
    }
}

impl<T> SortedList<T> {
    /// Returns `true` if the `SortedList` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_list::SortedList;
    ///
    /// let mut list = SortedList::of_integers();
    /// assert!(list.is_empty());
    ///
    /// list.insert(1);
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements in the `SortedList`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_list::SortedList;
    ///
    /// let mut list = SortedList::of_integers();
    /// list.insert(2);
    /// list.insert(2);
    /// assert_eq!(list.len(), 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Provides a reference to the smallest element, or `None` if the list
    /// is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_list::SortedList;
    ///
    /// let mut list = SortedList::of_integers();
    /// assert_eq!(list.first(), None);
    ///
    /// list.insert(3);
    /// list.insert(1);
    /// assert_eq!(list.first(), Some(&1));
    /// ```
    #[inline]
    pub fn first(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the list is non-empty, so the front node is a real node,
        // and the reference borrows `self`.
        Some(unsafe { &self.front_node().as_ref().element })
    }

    /// Provides a reference to the largest element, or `None` if the list
    /// is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_list::SortedList;
    ///
    /// let mut list = SortedList::of_integers();
    /// assert_eq!(list.last(), None);
    ///
    /// list.insert(3);
    /// list.insert(1);
    /// assert_eq!(list.last(), Some(&3));
    /// ```
    #[inline]
    pub fn last(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the list is non-empty, so the back node is a real node,
        // and the reference borrows `self`.
        Some(unsafe { &self.back_node().as_ref().element })
    }

    /// Removes all elements from the `SortedList`.
    ///
    /// Always succeeds, and always advances the version stamp, so any live
    /// cursor is invalidated even when the list was already empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_list::SortedList;
    ///
    /// let mut list = SortedList::of_integers();
    /// list.insert(1);
    /// list.insert(2);
    ///
    /// list.clear();
    /// assert!(list.is_empty());
    /// assert_eq!(list.first(), None);
    /// assert_eq!(list.last(), None);
    /// ```
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
        self.version = next_version();
    }

    /// Provides a forward iterator over the elements in ascending order.
    ///
    /// While the iterator lives, the borrow checker rules out any mutation
    /// of the list, so unlike a [`Cursor`] it needs no staleness check.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_list::SortedList;
    ///
    /// let mut list = SortedList::of_integers();
    /// list.insert(2);
    /// list.insert(0);
    /// list.insert(1);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Creates a fail-fast [`Cursor`] positioned before the first element.
    ///
    /// The cursor snapshots the list's current version stamp. Any structural
    /// mutation made outside the cursor invalidates it; see [`Cursor`].
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_list::SortedList;
    ///
    /// let mut list = SortedList::of_integers();
    /// list.insert(2);
    /// list.insert(1);
    ///
    /// let mut cursor = list.cursor();
    /// assert_eq!(cursor.next(&list), Ok(&1));
    /// assert_eq!(cursor.next(&list), Ok(&2));
    /// assert!(!cursor.has_next(&list));
    /// ```
    pub fn cursor(&self) -> Cursor<T> {
        Cursor::new(self)
    }
}

impl<T: Element> SortedList<T> {
    /// Create an empty `SortedList`.
    ///
    /// Only the two blessed element kinds can be named here; prefer the
    /// [`of_integers`](SortedList::of_integers) and
    /// [`of_strings`](SortedList::of_strings) factories when the kind is
    /// spelled out at the call site.
    #[inline]
    pub fn new() -> Self {
        Self {
            ghost: new_ghost(),
            len: 0,
            version: next_version(),
            _marker: PhantomData,
        }
    }

    /// Adds a value to the list, keeping the elements sorted.
    ///
    /// Duplicates are allowed; a new value equal to existing elements is
    /// placed after all of them, so equal values keep their insertion order.
    ///
    /// # Complexity
    ///
    /// *O*(1) when the value belongs at the head or the tail (in particular,
    /// inserting already-sorted input is *O*(1) per element); *O*(*n*)
    /// otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_list::SortedList;
    ///
    /// let mut list = SortedList::of_integers();
    /// for value in [5, 1, 9, 3, 7] {
    ///     list.insert(value);
    /// }
    /// assert_eq!(list.to_vec(), vec![1, 3, 5, 7, 9]);
    /// ```
    pub fn insert(&mut self, value: T) {
        let next = self.insertion_point(&value);
        let node = Node::new_detached(value);
        // SAFETY: `next` is a node of this list (possibly the ghost), so
        // `next.prev` and `next` are adjacent.
        unsafe {
            let prev = next.as_ref().prev;
            self.attach_node(prev, next, node);
        }
    }

    /// The first node whose element is strictly greater than `value`, or the
    /// ghost node when every element is `<= value`. Inserting before the
    /// returned node keeps the list sorted and lands duplicates after the
    /// existing run of equal values.
    fn insertion_point(&self, value: &T) -> NonNull<Node<T>> {
        let ghost = self.ghost_node();
        if self.is_empty() {
            return ghost;
        }
        // SAFETY: the list is non-empty, so front and back are real nodes.
        unsafe {
            if *value < self.front_node().as_ref().element {
                return self.front_node();
            }
            if *value >= self.back_node().as_ref().element {
                return ghost;
            }
            // `value < back`, so a strictly greater node exists before the
            // ghost and the scan cannot run off the end.
            let mut node = self.front_node();
            while node.as_ref().element <= *value {
                node = node.as_ref().next;
            }
            node
        }
    }

    /// Removes the first occurrence of `value` from the list. Returns
    /// whether a removal happened.
    ///
    /// Because the list is sorted, the scan stops as soon as it sees an
    /// element greater than `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_list::SortedList;
    ///
    /// let mut list = SortedList::of_integers();
    /// for value in [5, 5, 10] {
    ///     list.insert(value);
    /// }
    ///
    /// assert!(list.remove_first(&5));
    /// assert_eq!(list.to_vec(), vec![5, 10]);
    /// assert!(!list.remove_first(&7));
    /// ```
    pub fn remove_first(&mut self, value: &T) -> bool {
        let ghost = self.ghost_node();
        let mut node = self.front_node();
        while node != ghost {
            // SAFETY: `node` is not the ghost, so it is a real node.
            let current = unsafe { node.as_ref() };
            match current.element.cmp(value) {
                Ordering::Less => node = current.next,
                Ordering::Equal => {
                    // SAFETY: `node` belongs to this list.
                    unsafe { self.detach_node(node) };
                    return true;
                }
                Ordering::Greater => return false,
            }
        }
        false
    }

    /// Removes every occurrence of `value` from the list, and returns the
    /// number of elements removed.
    ///
    /// Equal values form a contiguous run, so the scan never restarts; each
    /// node's successor is captured before the node is unlinked.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_list::SortedList;
    ///
    /// let mut list = SortedList::of_integers();
    /// for value in [5, 1, 5, 10, 5] {
    ///     list.insert(value);
    /// }
    ///
    /// assert_eq!(list.remove_all(&5), 3);
    /// assert_eq!(list.to_vec(), vec![1, 10]);
    /// assert_eq!(list.remove_all(&5), 0);
    /// ```
    pub fn remove_all(&mut self, value: &T) -> usize {
        let ghost = self.ghost_node();
        let mut node = self.front_node();
        let mut removed = 0;
        while node != ghost {
            // SAFETY: `node` is not the ghost, so it is a real node.
            let current = unsafe { node.as_ref() };
            match current.element.cmp(value) {
                Ordering::Less => node = current.next,
                Ordering::Equal => {
                    let next = current.next;
                    // SAFETY: `node` belongs to this list, and its successor
                    // was captured before the unlink.
                    unsafe { self.detach_node(node) };
                    removed += 1;
                    node = next;
                }
                Ordering::Greater => break,
            }
        }
        removed
    }

    /// Removes and returns the element at `index`.
    ///
    /// The traversal direction is chosen by proximity: indices in the first
    /// half are reached from the head, the rest from the tail.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_list::{Error, SortedList};
    ///
    /// let mut list = SortedList::of_integers();
    /// for value in [10, 20, 30] {
    ///     list.insert(value);
    /// }
    ///
    /// assert_eq!(list.remove_at(1), Ok(20));
    /// assert_eq!(list.to_vec(), vec![10, 30]);
    /// assert_eq!(
    ///     list.remove_at(2),
    ///     Err(Error::IndexOutOfRange { index: 2, len: 2 })
    /// );
    /// ```
    pub fn remove_at(&mut self, index: usize) -> Result<T, Error> {
        if index >= self.len {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        let node = self.node_at(index);
        // SAFETY: `node_at` returns a real node of this list for in-bounds
        // indices.
        let node = unsafe { self.detach_node(node) };
        Ok(Node::into_element(node))
    }

    /// Returns a reference to the element at `index`.
    ///
    /// Same bidirectional traversal as [`remove_at`](SortedList::remove_at).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_list::SortedList;
    ///
    /// let mut list = SortedList::of_integers();
    /// for value in [30, 10, 20] {
    ///     list.insert(value);
    /// }
    ///
    /// assert_eq!(list.get(0), Ok(&10));
    /// assert_eq!(list.get(2), Ok(&30));
    /// assert!(list.get(3).is_err());
    /// ```
    pub fn get(&self, index: usize) -> Result<&T, Error> {
        if index >= self.len {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        // SAFETY: `node_at` returns a real node for in-bounds indices, and
        // the reference borrows `self`.
        Ok(unsafe { &self.node_at(index).as_ref().element })
    }

    /// Returns `true` if the list contains `value`.
    ///
    /// The scan stops early once an element greater than `value` is seen.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_list::SortedList;
    ///
    /// let mut list = SortedList::of_integers();
    /// list.insert(1);
    /// list.insert(3);
    ///
    /// assert!(list.contains(&3));
    /// assert!(!list.contains(&2));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        let ghost = self.ghost_node();
        let mut node = self.front_node();
        while node != ghost {
            // SAFETY: `node` is not the ghost, so it is a real node.
            let current = unsafe { node.as_ref() };
            match current.element.cmp(value) {
                Ordering::Less => node = current.next,
                Ordering::Equal => return true,
                Ordering::Greater => return false,
            }
        }
        false
    }

    /// Returns the index of the first occurrence of `value`, or `None` if
    /// the list does not contain it.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_list::SortedList;
    ///
    /// let mut list = SortedList::of_integers();
    /// for value in [10, 20, 20, 30] {
    ///     list.insert(value);
    /// }
    ///
    /// assert_eq!(list.index_of(&20), Some(1));
    /// assert_eq!(list.index_of(&15), None);
    /// ```
    pub fn index_of(&self, value: &T) -> Option<usize> {
        let ghost = self.ghost_node();
        let mut node = self.front_node();
        let mut index = 0;
        while node != ghost {
            // SAFETY: `node` is not the ghost, so it is a real node.
            let current = unsafe { node.as_ref() };
            match current.element.cmp(value) {
                Ordering::Less => {
                    node = current.next;
                    index += 1;
                }
                Ordering::Equal => return Some(index),
                Ordering::Greater => return None,
            }
        }
        None
    }

    /// Counts the occurrences of `value` in the list.
    ///
    /// Equal values form a contiguous run, so the scan stops once `value`
    /// is exceeded.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_list::SortedList;
    ///
    /// let mut list = SortedList::of_integers();
    /// for value in [5, 5, 5, 10] {
    ///     list.insert(value);
    /// }
    ///
    /// assert_eq!(list.count(&5), 3);
    /// assert_eq!(list.count(&7), 0);
    /// ```
    pub fn count(&self, value: &T) -> usize {
        let ghost = self.ghost_node();
        let mut node = self.front_node();
        let mut occurrences = 0;
        while node != ghost {
            // SAFETY: `node` is not the ghost, so it is a real node.
            let current = unsafe { node.as_ref() };
            match current.element.cmp(value) {
                Ordering::Less => {}
                Ordering::Equal => occurrences += 1,
                Ordering::Greater => break,
            }
            node = current.next;
        }
        occurrences
    }

    /// Returns an independent `Vec` holding a copy of every element in
    /// ascending order. Mutating the returned vector never affects the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_list::SortedList;
    ///
    /// let mut list = SortedList::of_integers();
    /// for value in [2, 1, 3] {
    ///     list.insert(value);
    /// }
    ///
    /// let mut copy = list.to_vec();
    /// copy.push(100);
    /// assert_eq!(list.to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl SortedList<i64> {
    /// Creates a new empty sorted list for integer values.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_list::SortedList;
    ///
    /// let mut numbers = SortedList::of_integers();
    /// numbers.insert(5);
    /// numbers.insert(1);
    /// numbers.insert(3);
    /// assert_eq!(numbers.to_vec(), vec![1, 3, 5]);
    /// ```
    #[inline]
    pub fn of_integers() -> Self {
        Self::new()
    }
}

impl SortedList<String> {
    /// Creates a new empty sorted list for string values.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_list::SortedList;
    ///
    /// let mut words = SortedList::of_strings();
    /// words.insert("banana".to_string());
    /// words.insert("apple".to_string());
    /// assert_eq!(words.first().map(String::as_str), Some("apple"));
    /// ```
    #[inline]
    pub fn of_strings() -> Self {
        Self::new()
    }
}

impl<T: Element> Default for SortedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Node<T> {
    /// Create a detached node with the given element. The links are dangling
    /// until the node is attached.
    fn new_detached(element: T) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node {
            next: NonNull::dangling(),
            prev: NonNull::dangling(),
            element,
        })))
    }

    pub(crate) fn into_element(self: Box<Self>) -> T {
        self.element
    }
}

fn new_ghost() -> Box<Node<Erased>> {
    let mut ghost = Box::new(Node {
        next: NonNull::dangling(),
        prev: NonNull::dangling(),
        element: Erased,
    });
    let ptr = NonNull::from(ghost.as_mut());
    ghost.next = ptr;
    ghost.prev = ptr;
    ghost
}

#[cfg(debug_assertions)]
fn assert_adjacent<T>(prev: NonNull<Node<T>>, next: NonNull<Node<T>>) {
    unsafe {
        assert_eq!(prev.as_ref().next, next);
        assert_eq!(next.as_ref().prev, prev);
    }
}

impl<T> Drop for SortedList<T> {
    fn drop(&mut self) {
        while self.pop_front().is_some() {}
    }
}

unsafe impl<T: Send> Send for SortedList<T> {}

unsafe impl<T: Sync> Sync for SortedList<T> {}

#[cfg(test)]
mod tests {
    use crate::{Error, SortedList};

    #[test]
    fn factories_create_empty_lists() {
        let integers = SortedList::of_integers();
        assert!(integers.is_empty());
        assert_eq!(integers.len(), 0);

        let strings = SortedList::of_strings();
        assert!(strings.is_empty());
        assert_eq!(strings.len(), 0);
    }

    #[test]
    fn insert_maintains_sorted_order() {
        let mut list = SortedList::of_integers();
        for value in [5, 1, 9, 3, 7] {
            list.insert(value);
        }
        assert_eq!(list.to_vec(), vec![1, 3, 5, 7, 9]);
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn insert_at_head_and_tail() {
        let mut list = SortedList::of_integers();
        list.insert(10);
        list.insert(20);
        list.insert(5);
        assert_eq!(list.first(), Some(&5));
        assert_eq!(list.last(), Some(&20));
        assert_eq!(list.to_vec(), vec![5, 10, 20]);
    }

    #[test]
    fn insert_in_middle() {
        let mut list = SortedList::of_integers();
        list.insert(10);
        list.insert(30);
        list.insert(20);
        assert_eq!(list.to_vec(), vec![10, 20, 30]);
    }

    #[test]
    fn insert_allows_duplicates() {
        let mut list = SortedList::of_integers();
        for value in [5, 5, 5] {
            list.insert(value);
        }
        assert_eq!(list.len(), 3);
        assert_eq!(list.to_vec(), vec![5, 5, 5]);
    }

    #[test]
    fn insert_handles_negative_and_boundary_values() {
        let mut list = SortedList::of_integers();
        for value in [5, -10, 0, -5] {
            list.insert(value);
        }
        assert_eq!(list.to_vec(), vec![-10, -5, 0, 5]);

        let mut list = SortedList::of_integers();
        for value in [0, i64::MAX, i64::MIN] {
            list.insert(value);
        }
        assert_eq!(list.to_vec(), vec![i64::MIN, 0, i64::MAX]);
    }

    #[test]
    fn remove_first_removes_a_single_occurrence() {
        let mut list = SortedList::of_integers();
        for value in [5, 5, 5] {
            list.insert(value);
        }
        assert!(list.remove_first(&5));
        assert_eq!(list.count(&5), 2);
        assert_eq!(list.len(), 2);

        assert_eq!(list.remove_all(&5), 2);
        assert_eq!(list.count(&5), 0);
        assert!(list.is_empty());
    }

    #[test]
    fn remove_first_at_head_tail_and_singleton() {
        let mut list = SortedList::of_integers();
        for value in [1, 2, 3] {
            list.insert(value);
        }
        assert!(list.remove_first(&1));
        assert_eq!(list.first(), Some(&2));
        assert!(list.remove_first(&3));
        assert_eq!(list.last(), Some(&2));
        assert!(list.remove_first(&2));
        assert!(list.is_empty());
        assert_eq!(list.first(), None);
        assert_eq!(list.last(), None);
    }

    #[test]
    fn remove_first_misses_without_full_scan() {
        let mut list = SortedList::of_integers();
        for value in [5, 10] {
            list.insert(value);
        }
        // 7 sorts before 10, so the scan prunes at 10.
        assert!(!list.remove_first(&7));
        assert_eq!(list.to_vec(), vec![5, 10]);
    }

    #[test]
    fn remove_all_removes_the_whole_run() {
        let mut list = SortedList::of_integers();
        for value in [5, 1, 5, 10, 5] {
            list.insert(value);
        }
        assert_eq!(list.remove_all(&5), 3);
        assert_eq!(list.to_vec(), vec![1, 10]);
        assert_eq!(list.remove_all(&5), 0);
    }

    #[test]
    fn remove_all_can_empty_the_list() {
        let mut list = SortedList::of_integers();
        for value in [4, 4, 4, 4] {
            list.insert(value);
        }
        assert_eq!(list.remove_all(&4), 4);
        assert!(list.is_empty());
    }

    #[test]
    fn remove_at_picks_the_nearer_end() {
        let mut list = SortedList::of_integers();
        for value in 0..10 {
            list.insert(value);
        }
        // First half: reached from the head.
        assert_eq!(list.remove_at(1), Ok(1));
        // Second half: reached from the tail.
        assert_eq!(list.remove_at(8), Ok(9));
        assert_eq!(list.remove_at(0), Ok(0));
        assert_eq!(list.to_vec(), vec![2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn remove_at_rejects_out_of_bounds() {
        let mut empty = SortedList::of_integers();
        assert_eq!(
            empty.remove_at(0),
            Err(Error::IndexOutOfRange { index: 0, len: 0 })
        );

        let mut list = SortedList::of_integers();
        list.insert(1);
        assert_eq!(
            list.remove_at(1),
            Err(Error::IndexOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(list.to_vec(), vec![1]);
    }

    #[test]
    fn get_returns_elements_by_index() {
        let mut list = SortedList::of_integers();
        for value in [30, 10, 20, 40, 50] {
            list.insert(value);
        }
        assert_eq!(list.get(0), Ok(&10));
        assert_eq!(list.get(2), Ok(&30));
        assert_eq!(list.get(4), Ok(&50));
        assert_eq!(
            list.get(5),
            Err(Error::IndexOutOfRange { index: 5, len: 5 })
        );
    }

    #[test]
    fn get_on_empty_list_fails() {
        let list = SortedList::of_integers();
        assert_eq!(
            list.get(0),
            Err(Error::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn contains_prunes_on_sortedness() {
        let mut list = SortedList::of_integers();
        for value in [1, 3, 5] {
            list.insert(value);
        }
        assert!(list.contains(&1));
        assert!(list.contains(&5));
        assert!(!list.contains(&2));
        assert!(!list.contains(&6));
    }

    #[test]
    fn index_of_finds_the_first_occurrence() {
        let mut list = SortedList::of_integers();
        for value in [10, 20, 20, 30] {
            list.insert(value);
        }
        assert_eq!(list.index_of(&10), Some(0));
        assert_eq!(list.index_of(&20), Some(1));
        assert_eq!(list.index_of(&30), Some(3));
        assert_eq!(list.index_of(&15), None);
        assert_eq!(list.index_of(&40), None);
    }

    #[test]
    fn count_measures_the_run() {
        let mut list = SortedList::of_integers();
        for value in [5, 5, 5, 10] {
            list.insert(value);
        }
        assert_eq!(list.count(&5), 3);
        assert_eq!(list.count(&10), 1);
        assert_eq!(list.count(&7), 0);

        list.remove_first(&5);
        assert_eq!(list.count(&5), 2);
    }

    #[test]
    fn clear_resets_to_the_empty_state() {
        let mut list = SortedList::of_integers();
        for value in [1, 2, 3] {
            list.insert(value);
        }
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.first(), None);
        assert_eq!(list.last(), None);

        // Clearing twice is fine.
        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn to_vec_is_independent_of_the_list() {
        let mut list = SortedList::of_integers();
        for value in [2, 1, 3] {
            list.insert(value);
        }
        let mut copy = list.to_vec();
        copy.push(100);
        copy[0] = -1;
        assert_eq!(list.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn strings_sort_lexicographically() {
        let mut list = SortedList::of_strings();
        for word in ["banana", "apple", "cherry"] {
            list.insert(word.to_string());
        }
        assert_eq!(list.to_vec(), vec!["apple", "banana", "cherry"]);
        assert_eq!(list.first().map(String::as_str), Some("apple"));
        assert_eq!(list.last().map(String::as_str), Some("cherry"));
    }

    #[test]
    fn strings_are_case_sensitive() {
        let mut list = SortedList::of_strings();
        for word in ["apple", "Apple", "APPLE"] {
            list.insert(word.to_string());
        }
        // Uppercase letters sort before lowercase in code point order.
        assert_eq!(list.to_vec(), vec!["APPLE", "Apple", "apple"]);
    }

    #[test]
    fn string_duplicates_and_empty_string() {
        let mut list = SortedList::of_strings();
        for word in ["b", "", "a", "a"] {
            list.insert(word.to_string());
        }
        assert_eq!(list.to_vec(), vec!["", "a", "a", "b"]);
        assert_eq!(list.count(&"a".to_string()), 2);
        assert_eq!(list.remove_all(&"a".to_string()), 2);
        assert_eq!(list.to_vec(), vec!["", "b"]);
    }

    #[test]
    fn drop_releases_every_node_exactly_once() {
        use std::sync::atomic::{AtomicUsize, Ordering::Relaxed};
        use std::sync::Arc;

        use crate::element::counted::Counted;

        let drops = Arc::new(AtomicUsize::new(0));
        let mut list = SortedList::new();
        for key in [3, 1, 2, 2] {
            list.insert(Counted::new(key, &drops));
        }
        assert_eq!(drops.load(Relaxed), 0);

        drop(list);
        assert_eq!(drops.load(Relaxed), 4);
    }

    #[test]
    fn clear_releases_every_node_exactly_once() {
        use std::sync::atomic::{AtomicUsize, Ordering::Relaxed};
        use std::sync::Arc;

        use crate::element::counted::Counted;

        let drops = Arc::new(AtomicUsize::new(0));
        let mut list = SortedList::new();
        for key in [5, 4, 6] {
            list.insert(Counted::new(key, &drops));
        }

        list.clear();
        assert_eq!(drops.load(Relaxed), 3);

        // Dropping the now-empty list releases nothing further.
        drop(list);
        assert_eq!(drops.load(Relaxed), 3);
    }

    #[test]
    fn removal_hands_the_element_out_instead_of_dropping_it() {
        use std::sync::atomic::{AtomicUsize, Ordering::Relaxed};
        use std::sync::Arc;

        use crate::element::counted::Counted;

        let drops = Arc::new(AtomicUsize::new(0));
        let mut list = SortedList::new();
        for key in [1, 2] {
            list.insert(Counted::new(key, &drops));
        }

        let removed = list.remove_at(0).unwrap();
        assert_eq!(removed.key, 1);
        assert_eq!(drops.load(Relaxed), 0);

        drop(removed);
        assert_eq!(drops.load(Relaxed), 1);
        drop(list);
        assert_eq!(drops.load(Relaxed), 2);
    }

    #[test]
    fn size_matches_traversal_length() {
        let mut list = SortedList::of_integers();
        for value in [3, 1, 4, 1, 5, 9, 2, 6] {
            list.insert(value);
            assert_eq!(list.len(), list.iter().count());
        }
        while !list.is_empty() {
            list.remove_at(0).unwrap();
            assert_eq!(list.len(), list.iter().count());
        }
    }
}
