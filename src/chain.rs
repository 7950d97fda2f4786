//! Bucket chains.
//!
//! Each bucket of a [`HashTable`](crate::HashTable) is an ordered,
//! duplicate-permitting sequence. The table only relies on the [`Chain`]
//! trait, so any sequence type that can append, iterate, and remove during
//! iteration can back it. Implementations are provided for [`Vec`] (the
//! default) and [`VecDeque`].

use alloc::collections::VecDeque;
use alloc::vec::Vec;

/// An ordered sequence used as a single bucket of the table.
///
/// Elements keep their insertion order; removal through a [`Cursor`] leaves
/// the relative order of the remaining elements untouched.
pub trait Chain<T>: Default + IntoIterator<Item = T> {
    /// Forward iterator over the chain, front to back.
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Cursor that walks the chain and can detach the element it is on.
    type Cursor<'a>: Cursor<T>
    where
        Self: 'a,
        T: 'a;

    /// Appends `value` at the back of the chain and returns a reference to
    /// it.
    ///
    /// On a concrete [`Vec`] the inherent `Vec::append` wins method
    /// resolution, so call this one as `Chain::append(&mut chain, value)`.
    ///
    /// ```rust
    /// use chain_hash::Chain;
    ///
    /// let mut chain: Vec<u32> = Vec::new();
    /// assert_eq!(*Chain::append(&mut chain, 7), 7);
    /// assert_eq!(chain, [7]);
    /// ```
    fn append(&mut self, value: T) -> &T;

    /// Returns an iterator over the chain in order.
    fn iter(&self) -> Self::Iter<'_>;

    /// Returns a cursor positioned before the first element.
    fn cursor(&mut self) -> Self::Cursor<'_>;

    /// Returns the number of elements in the chain.
    fn len(&self) -> usize;

    /// Returns `true` if the chain holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A position within a [`Chain`] that supports removal mid-iteration.
///
/// A fresh cursor sits before the first element. Each call to
/// [`next`](Cursor::next) advances by one and yields the new current element.
///
/// # Examples
///
/// ```rust
/// use chain_hash::chain::Chain;
/// use chain_hash::chain::Cursor;
///
/// let mut chain = vec![1, 2, 3, 4];
/// let mut cursor = chain.cursor();
/// while let Some(&value) = cursor.next() {
///     if value % 2 == 0 {
///         cursor.remove_current();
///     }
/// }
/// assert_eq!(chain, [1, 3]);
/// ```
pub trait Cursor<T> {
    /// Advances to the next element and returns it, or `None` at the end.
    fn next(&mut self) -> Option<&T>;

    /// Detaches and returns the current element.
    ///
    /// The following [`next`](Cursor::next) yields the element that came
    /// after the removed one. Returns `None` if there is no current element:
    /// before the first `next`, past the end, or right after a removal.
    fn remove_current(&mut self) -> Option<T>;
}

impl<T> Chain<T> for Vec<T> {
    type Iter<'a>
        = core::slice::Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    type Cursor<'a>
        = VecCursor<'a, T>
    where
        Self: 'a,
        T: 'a;

    #[inline]
    fn append(&mut self, value: T) -> &T {
        let index = Vec::len(self);
        self.push(value);
        &self[index]
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        self.as_slice().iter()
    }

    fn cursor(&mut self) -> Self::Cursor<'_> {
        VecCursor {
            chain: self,
            next: 0,
            current: None,
        }
    }

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }
}

/// [`Cursor`] over a [`Vec`] chain.
pub struct VecCursor<'a, T> {
    chain: &'a mut Vec<T>,
    next: usize,
    current: Option<usize>,
}

impl<T> Cursor<T> for VecCursor<'_, T> {
    fn next(&mut self) -> Option<&T> {
        let value = self.chain.get(self.next);
        self.current = value.map(|_| self.next);
        if value.is_some() {
            self.next += 1;
        }
        value
    }

    fn remove_current(&mut self) -> Option<T> {
        let index = self.current.take()?;
        self.next = index;
        Some(self.chain.remove(index))
    }
}

impl<T> Chain<T> for VecDeque<T> {
    type Iter<'a>
        = alloc::collections::vec_deque::Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    type Cursor<'a>
        = VecDequeCursor<'a, T>
    where
        Self: 'a,
        T: 'a;

    #[inline]
    fn append(&mut self, value: T) -> &T {
        let index = VecDeque::len(self);
        self.push_back(value);
        &self[index]
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        VecDeque::iter(self)
    }

    fn cursor(&mut self) -> Self::Cursor<'_> {
        VecDequeCursor {
            chain: self,
            next: 0,
            current: None,
        }
    }

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

/// [`Cursor`] over a [`VecDeque`] chain.
pub struct VecDequeCursor<'a, T> {
    chain: &'a mut VecDeque<T>,
    next: usize,
    current: Option<usize>,
}

impl<T> Cursor<T> for VecDequeCursor<'_, T> {
    fn next(&mut self) -> Option<&T> {
        let value = self.chain.get(self.next);
        self.current = value.map(|_| self.next);
        if value.is_some() {
            self.next += 1;
        }
        value
    }

    fn remove_current(&mut self) -> Option<T> {
        let index = self.current.take()?;
        self.next = index;
        self.chain.remove(index)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    fn remove_matching<C: Chain<u32>>(chain: &mut C, pred: impl Fn(u32) -> bool) -> Vec<u32> {
        let mut removed = Vec::new();
        let mut cursor = chain.cursor();
        while let Some(&value) = cursor.next() {
            if pred(value) {
                removed.extend(cursor.remove_current());
            }
        }
        removed
    }

    fn exercise_chain<C: Chain<u32>>() {
        let mut chain = C::default();
        assert!(chain.is_empty());

        for value in 0..10 {
            assert_eq!(*chain.append(value), value);
        }
        assert_eq!(chain.len(), 10);
        assert!(chain.iter().copied().eq(0..10));

        let removed = remove_matching(&mut chain, |v| v % 3 == 0);
        assert_eq!(removed, [0, 3, 6, 9]);
        assert_eq!(chain.len(), 6);
        assert!(chain.iter().copied().eq([1, 2, 4, 5, 7, 8]));

        // Adjacent removals must not skip elements.
        let removed = remove_matching(&mut chain, |v| v < 6);
        assert_eq!(removed, [1, 2, 4, 5]);
        assert!(chain.iter().copied().eq([7, 8]));

        let drained: Vec<u32> = chain.into_iter().collect();
        assert_eq!(drained, [7, 8]);
    }

    #[test]
    fn vec_chain() {
        exercise_chain::<Vec<u32>>();
    }

    #[test]
    fn vec_deque_chain() {
        exercise_chain::<VecDeque<u32>>();
    }

    #[test]
    fn remove_without_current() {
        let mut chain = vec![1u32, 2];
        let mut cursor = chain.cursor();
        assert_eq!(cursor.remove_current(), None);

        assert_eq!(cursor.next(), Some(&1));
        assert_eq!(cursor.remove_current(), Some(1));
        assert_eq!(cursor.remove_current(), None);

        assert_eq!(cursor.next(), Some(&2));
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.remove_current(), None);
        assert_eq!(chain, [2]);
    }

    #[test]
    fn append_on_concrete_vec() {
        let mut chain: Vec<u32> = vec![1];
        let appended = Chain::append(&mut chain, 2);
        assert_eq!(*appended, 2);
        assert_eq!(Chain::len(&chain), 2);
        assert!(Chain::iter(&chain).copied().eq([1, 2]));
    }

    #[test]
    fn remove_last_then_end() {
        let mut chain: VecDeque<u32> = VecDeque::from([5, 6]);
        let mut cursor = chain.cursor();
        assert_eq!(cursor.next(), Some(&5));
        assert_eq!(cursor.next(), Some(&6));
        assert_eq!(cursor.remove_current(), Some(6));
        assert_eq!(cursor.next(), None);
        assert_eq!(chain, [5]);
    }
}
