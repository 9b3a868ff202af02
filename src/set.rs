//! An ordered set based on a red-black tree.

use compare::{Compare, Natural};
use std::cmp::Ordering;
use std::fmt::{self, Debug};
use std::hash::{self, Hash};
use std::iter;
use std::mem;
use crate::error::{Error, Result};
use crate::node::{Left, Right, Slot, Tree, NIL};

pub use crate::node::{Cursor, IntoIter, Iter, Range};

/// An ordered set based on a red-black tree.
///
/// Insertion, removal and lookup take `O(log n)` time. Items are kept in ascending order
/// according to the set's comparator, and no two items in the set compare equal.
///
/// The behavior of this set is undefined if an item's ordering relative to any other item changes
/// while the item is in the set. This is normally only possible through `Cell`, `RefCell`, or
/// unsafe code.
pub struct Set<T, C = Natural<T>> where C: Compare<T> {
    tree: Tree<T>,
    cmp: C,
}

impl<T> Set<T> where T: Ord {
    /// Creates an empty set ordered according to the natural order of its items.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = rbset::Set::new();
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut it = set.iter();
    /// assert_eq!(it.next(), Some(&1));
    /// assert_eq!(it.next(), Some(&2));
    /// assert_eq!(it.next(), Some(&3));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn new() -> Self { Set::with_cmp(compare::natural()) }

    /// Creates an empty set with room for `capacity` items before it reallocates, ordered
    /// according to the natural order of its items.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = rbset::Set::with_capacity(10);
    /// set.insert("a");
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Set { tree: Tree::with_capacity(capacity), cmp: compare::natural() }
    }
}

impl<T, C> Set<T, C> where C: Compare<T> {
    /// Creates an empty set ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    ///
    /// let mut set = rbset::Set::with_cmp(natural().rev());
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut it = set.iter();
    /// assert_eq!(it.next(), Some(&3));
    /// assert_eq!(it.next(), Some(&2));
    /// assert_eq!(it.next(), Some(&1));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn with_cmp(cmp: C) -> Self { Set { tree: Tree::new(), cmp: cmp } }

    /// Checks if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = rbset::Set::new();
    /// assert!(set.is_empty());
    ///
    /// set.insert(2);
    /// assert!(!set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.tree.len() == 0 }

    /// Returns the number of items in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = rbset::Set::new();
    /// assert_eq!(set.len(), 0);
    ///
    /// set.insert(2);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize { self.tree.len() }

    /// Returns a reference to the set's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    ///
    /// let set: rbset::Set<i32> = rbset::Set::new();
    /// assert!(set.cmp().compares_lt(&1, &2));
    ///
    /// let set: rbset::Set<i32, _> = rbset::Set::with_cmp(natural().rev());
    /// assert!(set.cmp().compares_gt(&1, &2));
    /// ```
    pub fn cmp(&self) -> &C { &self.cmp }

    /// Removes all items from the set.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = rbset::Set::new();
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// assert_eq!(set.len(), 3);
    /// assert_eq!(set.iter().next(), Some(&1));
    ///
    /// set.clear();
    ///
    /// assert_eq!(set.len(), 0);
    /// assert_eq!(set.iter().next(), None);
    /// ```
    pub fn clear(&mut self) { self.tree.clear(); }

    /// Reserves room for at least `additional` more items.
    pub fn reserve(&mut self, additional: usize) { self.tree.reserve(additional); }

    /// Inserts an item into the set, returning `true` if the set did not already contain the item.
    ///
    /// If the set already contains an equal item, the set is left unchanged and `item` is
    /// dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = rbset::Set::new();
    /// assert!(!set.contains(&1));
    /// assert!(set.insert(1));
    /// assert!(set.contains(&1));
    /// assert!(!set.insert(1));
    /// ```
    pub fn insert(&mut self, item: T) -> bool {
        match self.tree.search(&self.cmp, &item) {
            Slot::Occupied(_) => false,
            Slot::Vacant(parent, order) => {
                self.tree.attach(item, parent, order);
                true
            }
        }
    }

    /// Inserts an item into the set like [`insert`](#method.insert), but returns an error
    /// instead of aborting if the set cannot grow.
    ///
    /// On error, the set is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = rbset::Set::new();
    /// assert!(set.try_insert(1).unwrap());
    /// assert!(!set.try_insert(1).unwrap());
    /// ```
    pub fn try_insert(&mut self, item: T) -> Result<bool> {
        match self.tree.search(&self.cmp, &item) {
            Slot::Occupied(_) => Ok(false),
            Slot::Vacant(parent, order) => {
                self.tree.try_reserve(1).map_err(|source| {
                    debug!("failed to grow set of {} items: {}", self.tree.len(), source);
                    Error::Reserve { additional: 1, source: source }
                })?;

                self.tree.attach(item, parent, order);
                Ok(true)
            }
        }
    }

    /// Removes the given item from the set, returning `true` if the set contained the item.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = rbset::Set::new();
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// assert_eq!(set.len(), 3);
    /// assert!(set.contains(&1));
    /// assert!(set.remove(&1));
    ///
    /// assert_eq!(set.len(), 2);
    /// assert!(!set.contains(&1));
    /// assert!(!set.remove(&1));
    /// ```
    pub fn remove<Q: ?Sized>(&mut self, item: &Q) -> bool where C: Compare<Q, T> {
        self.take(item).is_some()
    }

    /// Removes the item equal to the given item from the set and returns it, or `None` if the
    /// set does not contain such an item.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = rbset::Set::new();
    ///
    /// set.insert("a".to_string());
    /// set.insert("b".to_string());
    ///
    /// assert_eq!(set.take(&"a".to_string()), Some("a".to_string()));
    /// assert_eq!(set.take(&"a".to_string()), None);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn take<Q: ?Sized>(&mut self, item: &Q) -> Option<T> where C: Compare<Q, T> {
        match self.tree.find(&self.cmp, item) {
            NIL => None,
            x => Some(self.tree.remove(x)),
        }
    }

    /// Checks if the set contains the given item.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = rbset::Set::new();
    /// assert!(!set.contains(&1));
    /// set.insert(1);
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains<Q: ?Sized>(&self, item: &Q) -> bool where C: Compare<Q, T> {
        self.tree.find(&self.cmp, item) != NIL
    }

    /// Returns a reference to the set's item that is equal to the given item, or `None` if the
    /// set does not contain such an item.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = rbset::Set::new();
    /// set.insert("a".to_string());
    ///
    /// assert_eq!(set.get(&"a".to_string()), Some(&"a".to_string()));
    /// assert_eq!(set.get(&"b".to_string()), None);
    /// ```
    pub fn get<Q: ?Sized>(&self, item: &Q) -> Option<&T> where C: Compare<Q, T> {
        self.find(item).get()
    }

    /// Returns a cursor at the set's item that is equal to the given item, or at the end if the
    /// set does not contain such an item.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = rbset::Set::new();
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// assert_eq!(set.find(&2).get(), Some(&2));
    /// assert!(set.find(&4) == set.end());
    /// ```
    pub fn find<Q: ?Sized>(&self, item: &Q) -> Cursor<T> where C: Compare<Q, T> {
        Cursor::new(&self.tree, self.tree.find(&self.cmp, item))
    }

    /// Returns a cursor at the set's first item that is not less than the given item, or at the
    /// end if there is no such item.
    ///
    /// The given item need not itself be present in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = rbset::Set::new();
    ///
    /// set.insert(2);
    /// set.insert(4);
    ///
    /// assert_eq!(set.lower_bound(&1).get(), Some(&2));
    /// assert_eq!(set.lower_bound(&2).get(), Some(&2));
    /// assert_eq!(set.lower_bound(&3).get(), Some(&4));
    /// assert!(set.lower_bound(&5) == set.end());
    /// ```
    pub fn lower_bound<Q: ?Sized>(&self, item: &Q) -> Cursor<T> where C: Compare<Q, T> {
        Cursor::new(&self.tree, self.tree.closest::<Right, _, _>(&self.cmp, item, true))
    }

    /// Returns a cursor at the set's first item, or at the end if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = rbset::Set::new();
    /// assert!(set.begin() == set.end());
    ///
    /// set.insert(2);
    /// set.insert(1);
    ///
    /// assert_eq!(set.begin().get(), Some(&1));
    /// ```
    pub fn begin(&self) -> Cursor<T> { Cursor::new(&self.tree, self.tree.first()) }

    /// Returns a cursor at the end of the set, one past its last item.
    pub fn end(&self) -> Cursor<T> { Cursor::new(&self.tree, NIL) }

    /// Returns a reference to the set's minimum item, or `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = rbset::Set::new();
    /// assert_eq!(set.first(), None);
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// assert_eq!(set.first(), Some(&1));
    /// ```
    pub fn first(&self) -> Option<&T> { self.begin().get() }

    /// Removes and returns the set's minimum item, or `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = rbset::Set::new();
    /// assert_eq!(set.remove_first(), None);
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// assert_eq!(set.remove_first(), Some(1));
    /// ```
    pub fn remove_first(&mut self) -> Option<T> {
        match self.tree.first() {
            NIL => None,
            x => Some(self.tree.remove(x)),
        }
    }

    /// Returns a reference to the set's maximum item, or `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = rbset::Set::new();
    /// assert_eq!(set.last(), None);
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// assert_eq!(set.last(), Some(&3));
    /// ```
    pub fn last(&self) -> Option<&T> {
        let mut cursor = self.end();
        cursor.move_prev();
        cursor.get()
    }

    /// Removes and returns the set's maximum item, or `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = rbset::Set::new();
    /// assert_eq!(set.remove_last(), None);
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// assert_eq!(set.remove_last(), Some(3));
    /// ```
    pub fn remove_last(&mut self) -> Option<T> {
        match self.tree.last() {
            NIL => None,
            x => Some(self.tree.remove(x)),
        }
    }

    /// Returns a reference to the predecessor of the given item, or
    /// `None` if no such item is present in the set.
    ///
    /// If `inclusive` is `false`, this method finds the greatest item that is strictly less than
    /// the given item. If `inclusive` is `true`, this method finds the greatest item that is less
    /// than or equal to the given item.
    ///
    /// The given item need not itself be present in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = rbset::Set::new();
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// assert_eq!(set.pred(&0, false), None);
    /// assert_eq!(set.pred(&1, false), None);
    /// assert_eq!(set.pred(&2, false), Some(&1));
    /// assert_eq!(set.pred(&3, false), Some(&2));
    /// assert_eq!(set.pred(&4, false), Some(&3));
    ///
    /// assert_eq!(set.pred(&0, true), None);
    /// assert_eq!(set.pred(&1, true), Some(&1));
    /// assert_eq!(set.pred(&2, true), Some(&2));
    /// assert_eq!(set.pred(&3, true), Some(&3));
    /// assert_eq!(set.pred(&4, true), Some(&3));
    /// ```
    pub fn pred<Q: ?Sized>(&self, item: &Q, inclusive: bool) -> Option<&T> where C: Compare<Q, T> {
        Cursor::new(&self.tree, self.tree.closest::<Left, _, _>(&self.cmp, item, inclusive)).get()
    }

    /// Returns a reference to the successor of the given item, or
    /// `None` if no such item is present in the set.
    ///
    /// If `inclusive` is `false`, this method finds the smallest item that is strictly greater
    /// than the given item. If `inclusive` is `true`, this method finds the smallest item that is
    /// greater than or equal to the given item.
    ///
    /// The given item need not itself be present in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = rbset::Set::new();
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// assert_eq!(set.succ(&0, false), Some(&1));
    /// assert_eq!(set.succ(&1, false), Some(&2));
    /// assert_eq!(set.succ(&2, false), Some(&3));
    /// assert_eq!(set.succ(&3, false), None);
    /// assert_eq!(set.succ(&4, false), None);
    ///
    /// assert_eq!(set.succ(&0, true), Some(&1));
    /// assert_eq!(set.succ(&1, true), Some(&1));
    /// assert_eq!(set.succ(&2, true), Some(&2));
    /// assert_eq!(set.succ(&3, true), Some(&3));
    /// assert_eq!(set.succ(&4, true), None);
    /// ```
    pub fn succ<Q: ?Sized>(&self, item: &Q, inclusive: bool) -> Option<&T> where C: Compare<Q, T> {
        Cursor::new(&self.tree, self.tree.closest::<Right, _, _>(&self.cmp, item, inclusive)).get()
    }

    /// Returns an iterator over the set.
    ///
    /// The iterator yields the items in ascending order according to the set's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = rbset::Set::new();
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut it = set.iter();
    /// assert_eq!(it.next(), Some(&1));
    /// assert_eq!(it.next_back(), Some(&3));
    /// assert_eq!(it.next(), Some(&2));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<T> { Iter::new(&self.tree) }

    /// Returns a copy of the set, or an error if the copy cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// let set: rbset::Set<_> = [1, 2, 3].into();
    /// let copy = set.try_clone().unwrap();
    /// assert_eq!(set, copy);
    /// ```
    pub fn try_clone(&self) -> Result<Self> where T: Clone, C: Clone {
        let tree = self.tree.try_clone().map_err(|source| {
            debug!("failed to copy set of {} items: {}", self.tree.len(), source);
            Error::Reserve { additional: self.tree.len(), source: source }
        })?;

        Ok(Set { tree: tree, cmp: self.cmp.clone() })
    }

    /// Replaces the set's contents with a copy of `other`.
    ///
    /// The copy is built in full before it replaces the set's contents, so on error the set is
    /// left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set: rbset::Set<_> = [1, 2].into();
    /// let other: rbset::Set<_> = [3, 4, 5].into();
    ///
    /// set.try_clone_from(&other).unwrap();
    /// assert_eq!(set, other);
    /// ```
    pub fn try_clone_from(&mut self, other: &Self) -> Result<()> where T: Clone, C: Clone {
        let mut copy = other.try_clone()?;
        mem::swap(self, &mut copy);
        Ok(())
    }
}

impl<T, C> Clone for Set<T, C> where T: Clone, C: Compare<T> + Clone {
    fn clone(&self) -> Self { Set { tree: self.tree.clone(), cmp: self.cmp.clone() } }

    /// Replaces the set's contents with a copy of `source`.
    ///
    /// The copy is built in full before it replaces the set's contents, so a panic while cloning
    /// an item leaves the set unchanged.
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        mem::swap(self, &mut copy);
    }
}

impl<T, C> Debug for Set<T, C> where T: Debug, C: Compare<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{")?;

        let mut it = self.iter();

        if let Some(item) = it.next() {
            write!(f, "{:?}", item)?;
            for item in it { write!(f, ", {:?}", item)?; }
        }

        write!(f, "}}")
    }
}

impl<T, C> Default for Set<T, C> where C: Compare<T> + Default {
    fn default() -> Self { Set::with_cmp(C::default()) }
}

impl<T, C> Extend<T> for Set<T, C> where C: Compare<T> {
    fn extend<I: IntoIterator<Item=T>>(&mut self, it: I) {
        for item in it { self.insert(item); }
    }
}

impl<'a, T, C> Extend<&'a T> for Set<T, C> where T: 'a + Copy, C: Compare<T> {
    fn extend<I: IntoIterator<Item=&'a T>>(&mut self, it: I) {
        for item in it { self.insert(*item); }
    }
}

impl<T, C> iter::FromIterator<T> for Set<T, C> where C: Compare<T> + Default {
    fn from_iter<I: IntoIterator<Item=T>>(it: I) -> Self {
        let mut set = Set::default();
        set.extend(it);
        set
    }
}

impl<T, C, const N: usize> From<[T; N]> for Set<T, C> where C: Compare<T> + Default {
    /// Creates a set from a list of items, dropping any that compare equal to an earlier one.
    ///
    /// # Examples
    ///
    /// ```
    /// let set: rbset::Set<_> = [3, 1, 2, 1].into();
    /// assert_eq!(set.iter().cloned().collect::<Vec<_>>(), [1, 2, 3]);
    /// ```
    fn from(items: [T; N]) -> Self { items.into_iter().collect() }
}

impl<T, C> Hash for Set<T, C> where T: Hash, C: Compare<T> {
    fn hash<H: hash::Hasher>(&self, h: &mut H) {
        self.len().hash(h);
        for item in self { item.hash(h); }
    }
}

impl<'a, T, C> IntoIterator for &'a Set<T, C> where C: Compare<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> { self.iter() }
}

impl<T, C> IntoIterator for Set<T, C> where C: Compare<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Returns an iterator that consumes the set.
    ///
    /// The iterator yields the items in ascending order according to the set's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = rbset::Set::new();
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut it = set.into_iter();
    /// assert_eq!(it.next(), Some(1));
    /// assert_eq!(it.next(), Some(2));
    /// assert_eq!(it.next(), Some(3));
    /// assert_eq!(it.next(), None);
    /// ```
    fn into_iter(self) -> IntoIter<T> { IntoIter::new(self.tree) }
}

impl<T, C> PartialEq for Set<T, C> where T: PartialEq, C: Compare<T> {
    fn eq(&self, other: &Self) -> bool { self.len() == other.len() && self.iter().eq(other) }
}

impl<T, C> Eq for Set<T, C> where T: Eq, C: Compare<T> {}

impl<T, C> PartialOrd for Set<T, C> where T: PartialOrd, C: Compare<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { self.iter().partial_cmp(other) }
}

impl<T, C> Ord for Set<T, C> where T: Ord, C: Compare<T> {
    fn cmp(&self, other: &Self) -> Ordering { self.iter().cmp(other) }
}

#[cfg(test)]
mod test {
    use super::Set;

    #[test]
    fn debug_lists_items_in_order() {
        let set: Set<_> = [3, 1, 2].into();
        assert_eq!(format!("{:?}", set), "{1, 2, 3}");
        assert_eq!(format!("{:?}", Set::<u8>::new()), "{}");
    }

    #[test]
    fn cursors_of_different_sets_differ() {
        let a: Set<_> = [1].into();
        let b = a.clone();
        assert!(a.begin() != b.begin());
        assert!(a.end() != b.end());
        assert!(a.begin() == a.find(&1));
    }
}
