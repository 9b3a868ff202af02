use std::fmt::{self, Debug};
use std::iter::FusedIterator;
use std::ptr;
use std::vec;
use super::{Left, Link, Right, Tree, NIL};

/// A position in a [`Set`](crate::Set): one of its items, or the end.
///
/// Acquire through [`Set::begin`](crate::Set::begin), [`Set::end`](crate::Set::end),
/// [`Set::find`](crate::Set::find) or [`Set::lower_bound`](crate::Set::lower_bound). The cursor
/// borrows the set, so the set cannot change while the cursor is alive.
///
/// Two cursors are equal if they are at the same position of the same set.
///
/// # Examples
///
/// ```
/// let set: rbset::Set<_> = [1, 2, 3].into();
///
/// let mut cursor = set.begin();
/// assert_eq!(cursor.get(), Some(&1));
///
/// cursor.move_next();
/// cursor.move_next();
/// assert_eq!(cursor.get(), Some(&3));
///
/// cursor.move_next();
/// assert!(cursor == set.end());
///
/// cursor.move_prev();
/// assert_eq!(cursor.get(), Some(&3));
/// ```
pub struct Cursor<'a, T: 'a> {
    tree: &'a Tree<T>,
    link: Link,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>, link: Link) -> Self {
        Cursor { tree: tree, link: link }
    }

    /// Returns a reference to the item at the cursor, or `None` if the cursor is at the end.
    pub fn get(&self) -> Option<&'a T> {
        if self.link == NIL { None } else { Some(self.tree.key(self.link)) }
    }

    /// Checks if the cursor is at the end.
    pub fn is_end(&self) -> bool { self.link == NIL }

    /// Moves the cursor to the next item, or to the end if it is at the last item.
    ///
    /// Does nothing if the cursor is already at the end.
    pub fn move_next(&mut self) {
        if self.link != NIL { self.link = self.tree.neighbor::<Right>(self.link); }
    }

    /// Moves the cursor to the previous item, or to the end if it is at the first item.
    ///
    /// From the end, the cursor moves to the last item, or stays at the end if the set is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let set: rbset::Set<_> = [1, 2].into();
    ///
    /// let mut cursor = set.end();
    /// cursor.move_prev();
    /// assert_eq!(cursor.get(), Some(&2));
    ///
    /// cursor.move_prev();
    /// cursor.move_prev();
    /// assert!(cursor.is_end());
    /// ```
    pub fn move_prev(&mut self) {
        self.link = if self.link == NIL {
            self.tree.last()
        } else {
            self.tree.neighbor::<Left>(self.link)
        };
    }

    /// Returns an iterator over the items from this cursor up to, but excluding, `end`.
    ///
    /// If `end` does not lie at or after this cursor, the iterator runs to the end of the set.
    ///
    /// # Examples
    ///
    /// ```
    /// let set: rbset::Set<_> = [1, 2, 3, 4, 5].into();
    ///
    /// let copy: rbset::Set<_> = set.find(&2).range_to(set.find(&5)).cloned().collect();
    /// assert_eq!(copy.iter().cloned().collect::<Vec<_>>(), [2, 3, 4]);
    /// ```
    pub fn range_to(self, end: Cursor<'a, T>) -> Range<'a, T> {
        Range { cursor: self, end: end.link }
    }
}

impl<'a, T> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self { *self }
}

impl<'a, T> Copy for Cursor<'a, T> {}

impl<'a, T> PartialEq for Cursor<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.tree, other.tree) && self.link == other.link
    }
}

impl<'a, T> Eq for Cursor<'a, T> {}

impl<'a, T> Debug for Cursor<'a, T> where T: Debug {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Cursor").field(&self.get()).finish()
    }
}

/// An iterator over a set's items.
///
/// The iterator yields the items in ascending order according to the set's comparator.
///
/// # Examples
///
/// Acquire through [`Set::iter`](crate::Set::iter) or the `IntoIterator` trait:
///
/// ```
/// let mut set = rbset::Set::new();
///
/// set.insert(2);
/// set.insert(1);
/// set.insert(3);
///
/// for item in &set {
///     println!("{:?}", item);
/// }
/// ```
pub struct Iter<'a, T: 'a> {
    tree: &'a Tree<T>,
    front: Link,
    back: Link,
    len: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>) -> Self {
        Iter { tree: tree, front: tree.first(), back: tree.last(), len: tree.len() }
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter { tree: self.tree, front: self.front, back: self.back, len: self.len }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.len == 0 { return None; }
        let x = self.front;
        self.front = self.tree.neighbor::<Right>(x);
        self.len -= 1;
        Some(self.tree.key(x))
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.len, Some(self.len)) }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.len == 0 { return None; }
        let x = self.back;
        self.back = self.tree.neighbor::<Left>(x);
        self.len -= 1;
        Some(self.tree.key(x))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {
    fn len(&self) -> usize { self.len }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

/// An iterator over the items between two cursors.
///
/// Acquire through [`Cursor::range_to`].
pub struct Range<'a, T: 'a> {
    cursor: Cursor<'a, T>,
    end: Link,
}

impl<'a, T> Clone for Range<'a, T> {
    fn clone(&self) -> Self { Range { cursor: self.cursor, end: self.end } }
}

impl<'a, T> Iterator for Range<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.cursor.link == self.end { return None; }
        let item = self.cursor.get();
        self.cursor.move_next();
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.cursor.link == self.end || self.cursor.is_end() {
            (0, Some(0))
        } else {
            (1, Some(self.cursor.tree.len()))
        }
    }
}

impl<'a, T> FusedIterator for Range<'a, T> {}

/// An iterator that consumes a set.
///
/// The iterator yields the items in ascending order according to the set's comparator.
///
/// # Examples
///
/// Acquire through the `IntoIterator` trait:
///
/// ```
/// let mut set = rbset::Set::new();
///
/// set.insert(2);
/// set.insert(1);
/// set.insert(3);
///
/// for item in set {
///     println!("{:?}", item);
/// }
/// ```
#[derive(Clone)]
pub struct IntoIter<T>(vec::IntoIter<T>);

impl<T> IntoIter<T> {
    pub(crate) fn new(tree: Tree<T>) -> Self { IntoIter(tree.into_sorted().into_iter()) }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> { self.0.next_back() }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize { self.0.len() }
}

impl<T> FusedIterator for IntoIter<T> {}
