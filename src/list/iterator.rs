use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::element::Element;
use crate::list::{Node, SortedList};

/// An iterator over the elements of a `SortedList`, in ascending order.
///
/// It uses a pair of nodes `start..end` to represent a half-open subrange
/// of the list, where `start` is inclusive and `end` (the ghost node) is
/// not.
///
/// Though the `Iter` does not hold a reference to the list, it *borrows*
/// (immutably) from it, so a phantom marker of `&'a SortedList<T>` is added
/// to keep the list from being mutated underneath it:
///
/// ```compile_fail
/// use sorted_list::SortedList;
///
/// let mut list = SortedList::of_integers();
/// list.insert(1);
/// let mut iter = list.iter();
///
/// // Won't compile, because the list is already borrowed immutably.
/// list.insert(2);
/// println!("{:?}", iter.next());
/// ```
#[derive(Clone)]
pub struct Iter<'a, T: 'a> {
    start: NonNull<Node<T>>,
    end: NonNull<Node<T>>,
    len: usize,
    _marker: PhantomData<&'a SortedList<T>>,
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(list: &'a SortedList<T>) -> Self {
        Self {
            start: list.front_node(),
            end: list.ghost_node(),
            len: list.len(),
            _marker: PhantomData,
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_tuple("Iter");
        let mut ptr = self.start;
        // SAFETY: `start..end` is always a valid range of a list.
        while ptr != self.end {
            let current = unsafe { ptr.as_ref() };
            f.field(&current.element);
            ptr = current.next;
        }
        f.finish()
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    /// Return `*start` and reset the iterating range to `(start.next)..end`,
    /// or return `None` if `start..end` is already empty.
    fn next(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }
        // SAFETY: `start..end` is always a valid range of a list,
        // and it is not empty here, so it is safe.
        let current = unsafe { self.start.as_ref() };
        self.start = current.next;
        self.len -= 1;
        Some(&current.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<'a, T: 'a> DoubleEndedIterator for Iter<'a, T> {
    /// Reset the iterating range to `start..(end.prev)` and return `*end`,
    /// or return `None` if `start..end` is already empty.
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }
        // SAFETY: `start..end` is always a valid range of a list,
        // and it is not empty here, so it is safe.
        self.end = unsafe { self.end.as_ref().prev };
        let current = unsafe { self.end.as_ref() };
        self.len -= 1;
        Some(&current.element)
    }
}

impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

/// An owning iterator over the elements of a `SortedList`.
///
/// This `struct` is created by the [`into_iter`] method on [`SortedList`]
/// (provided by the `IntoIterator` trait).
///
/// [`into_iter`]: SortedList::into_iter
pub struct IntoIter<T> {
    list: SortedList<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("list", &self.list)
            .finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.list.len;
        (len, Some(len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for SortedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a SortedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Element> FromIterator<T> for SortedList<T> {
    /// Builds a sorted list by inserting every element; the input order
    /// does not matter.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_list::SortedList;
    ///
    /// let list: SortedList<i64> = [3, 1, 2].into_iter().collect();
    /// assert_eq!(list.to_vec(), vec![1, 2, 3]);
    /// ```
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SortedList::new();
        list.extend(iter);
        list
    }
}

impl<T: Element> Extend<T> for SortedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|item| self.insert(item));
    }
}

impl<'a, T: 'a + Element + Copy> Extend<&'a T> for SortedList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

unsafe impl<T: Sync> Send for Iter<'_, T> {}

unsafe impl<T: Sync> Sync for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use crate::SortedList;

    #[test]
    fn iter_yields_ascending_references() {
        let list: SortedList<i64> = [4, 2, 8, 6].into_iter().collect();
        let collected: Vec<i64> = list.iter().copied().collect();
        assert_eq!(collected, vec![2, 4, 6, 8]);
    }

    #[test]
    fn iter_is_double_ended_and_exact_size() {
        let list: SortedList<i64> = [1, 2, 3].into_iter().collect();
        let mut iter = list.iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(iter.len(), 1);
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
        assert_eq!(iter.len(), 0);
    }

    #[test]
    fn iter_supports_adapters() {
        let list: SortedList<i64> = [5, 1, 3].into_iter().collect();
        let sum: i64 = list.iter().sum();
        assert_eq!(sum, 9);
        let evens: Vec<i64> = list.iter().copied().filter(|v| v % 2 == 0).collect();
        assert!(evens.is_empty());
        let doubled: Vec<i64> = list.iter().map(|v| v * 2).collect();
        assert_eq!(doubled, vec![2, 6, 10]);
    }

    #[test]
    fn into_iter_drains_in_order() {
        let list: SortedList<i64> = [2, 1, 3].into_iter().collect();
        assert_eq!(list.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);

        let list: SortedList<i64> = [2, 1, 3].into_iter().collect();
        assert_eq!(list.into_iter().rev().collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn extend_inserts_sorted() {
        let mut list = SortedList::of_integers();
        list.extend([5, 1]);
        list.extend(&[3, 7][..]);
        assert_eq!(list.to_vec(), vec![1, 3, 5, 7]);
    }

    #[test]
    fn from_iter_of_strings() {
        let list: SortedList<String> = ["pear", "fig", "plum"]
            .into_iter()
            .map(str::to_string)
            .collect();
        assert_eq!(list.to_vec(), vec!["fig", "pear", "plum"]);
    }
}
