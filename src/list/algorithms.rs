use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::element::Element;
use crate::list::SortedList;

/// Structural equality: same length and identical elements in traversal
/// order. Because the list keeps itself sorted, this is exactly
/// multiset equality, but it is deliberately implemented as an ordered
/// pairwise comparison so that a hypothetical ordering bug would surface as
/// an inequality rather than be papered over.
impl<T: Element> PartialEq for SortedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Element> Eq for SortedList<T> {}

impl<T: Element> PartialOrd for SortedList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Lexicographic comparison over the sorted traversal.
impl<T: Element> Ord for SortedList<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

/// An order-sensitive fold of every element plus the length, consistent
/// with `Eq`: two lists holding the same multiset hash identically, since
/// sortedness makes their traversal order canonical.
impl<T: Element + Hash> Hash for SortedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for element in self {
            element.hash(state);
        }
        self.len.hash(state);
    }
}

impl<T: Element + Clone> Clone for SortedList<T> {
    /// Rebuilds the list element by element. The source traversal is already
    /// sorted, so every insertion hits the tail fast path and cloning is
    /// *O*(*n*).
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

/// Renders as `[e1, e2, ..., en]`, or `[]` when empty.
///
/// # Examples
///
/// ```
/// use sorted_list::SortedList;
///
/// let mut list = SortedList::of_integers();
/// assert_eq!(list.to_string(), "[]");
///
/// for value in [3, 1, 2] {
///     list.insert(value);
/// }
/// assert_eq!(list.to_string(), "[1, 2, 3]");
/// ```
impl<T: fmt::Display> fmt::Display for SortedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        let mut elements = self.iter();
        if let Some(first) = elements.next() {
            write!(f, "{first}")?;
            for element in elements {
                write!(f, ", {element}")?;
            }
        }
        f.write_str("]")
    }
}

impl<T: fmt::Debug> fmt::Debug for SortedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use crate::SortedList;

    fn list_of(values: &[i64]) -> SortedList<i64> {
        values.iter().copied().collect()
    }

    fn hash_of(list: &SortedList<i64>) -> u64 {
        let mut hasher = DefaultHasher::new();
        list.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let first = list_of(&[3, 1, 2, 2]);
        let second = list_of(&[2, 2, 3, 1]);
        assert_eq!(first, second);
        assert_eq!(hash_of(&first), hash_of(&second));
    }

    #[test]
    fn equality_respects_multiplicity() {
        let first = list_of(&[1, 2, 2]);
        let second = list_of(&[1, 2]);
        let third = list_of(&[1, 1, 2]);
        assert_ne!(first, second);
        assert_ne!(first, third);
    }

    #[test]
    fn empty_lists_are_equal() {
        assert_eq!(SortedList::of_integers(), SortedList::of_integers());
        assert_eq!(
            hash_of(&SortedList::of_integers()),
            hash_of(&SortedList::of_integers())
        );
    }

    #[test]
    fn ordering_is_lexicographic() {
        assert!(list_of(&[1, 2]) < list_of(&[1, 3]));
        assert!(list_of(&[1, 2]) < list_of(&[1, 2, 0]));
        assert!(list_of(&[]) < list_of(&[0]));
    }

    #[test]
    fn clone_is_independent() {
        let original = list_of(&[2, 1, 3]);
        let mut copy = original.clone();
        assert_eq!(original, copy);

        copy.insert(4);
        copy.remove_first(&1);
        assert_eq!(original.to_vec(), vec![1, 2, 3]);
        assert_eq!(copy.to_vec(), vec![2, 3, 4]);
    }

    #[test]
    fn display_renders_brackets_and_separators() {
        assert_eq!(SortedList::of_integers().to_string(), "[]");
        assert_eq!(list_of(&[7]).to_string(), "[7]");
        assert_eq!(list_of(&[3, 1, 2]).to_string(), "[1, 2, 3]");

        let mut words = SortedList::of_strings();
        words.insert("b".to_string());
        words.insert("a".to_string());
        assert_eq!(words.to_string(), "[a, b]");
    }

    #[test]
    fn debug_uses_list_formatting() {
        assert_eq!(format!("{:?}", list_of(&[2, 1])), "[1, 2]");
    }
}
