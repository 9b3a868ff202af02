extern crate ordered_iter;

use self::ordered_iter::OrderedSetIterator;
use super::set;

impl<T> OrderedSetIterator for set::IntoIter<T> where T: Ord {}

impl<'a, T> OrderedSetIterator for set::Iter<'a, T> where T: Ord {}

impl<'a, T> OrderedSetIterator for set::Range<'a, T> where T: Ord {}
