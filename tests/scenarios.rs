use compare::{Compare, natural};
use quickcheck_macros::quickcheck;
use rbset::Set;
use simplelog::{Config, LevelFilter, TestLogger};

fn init_logging() {
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}

fn items<C>(set: &Set<u32, C>) -> Vec<u32> where C: Compare<u32> {
    set.iter().cloned().collect()
}

#[test]
fn insert_erase_lower_bound() {
    init_logging();

    let mut set = Set::new();
    for item in [5, 3, 8, 1, 4, 7, 9] { set.insert(item); }

    assert_eq!(items(&set), [1, 3, 4, 5, 7, 8, 9]);
    assert_eq!(set.len(), 7);

    assert!(set.remove(&5));
    assert_eq!(items(&set), [1, 3, 4, 7, 8, 9]);
    assert!(set.find(&5) == set.end());
    assert_eq!(set.lower_bound(&6).get(), Some(&7));
}

#[test]
fn empty_set() {
    let mut set: Set<u32> = Set::new();

    assert!(set.begin() == set.end());
    assert_eq!(set.len(), 0);
    assert!(set.is_empty());
    assert!(!set.remove(&3));
    assert_eq!(set.len(), 0);

    assert!(set.find(&3).is_end());
    assert!(set.lower_bound(&3).is_end());
    assert_eq!(set.first(), None);
    assert_eq!(set.last(), None);
    assert_eq!(set.remove_first(), None);
}

#[test]
fn cursor_steps_clamp_at_end() {
    let empty: Set<u32> = Set::new();
    let mut cursor = empty.end();
    cursor.move_prev();
    assert!(cursor == empty.end());
    cursor.move_next();
    assert!(cursor == empty.end());

    let set: Set<u32> = [1, 2, 3].into();
    let mut cursor = set.end();
    cursor.move_next();
    assert!(cursor.is_end());
    cursor.move_prev();
    assert_eq!(cursor.get(), Some(&3));

    let mut cursor = set.begin();
    cursor.move_prev();
    assert!(cursor.is_end());
}

#[test]
fn bulk_load_from_cursor_pair() {
    let source: Set<u32> = (0..100).collect();
    let copy: Set<u32> = source.find(&10).range_to(source.lower_bound(&20)).cloned().collect();
    assert_eq!(items(&copy), (10..20).collect::<Vec<_>>());

    let all: Set<u32> = source.begin().range_to(source.end()).cloned().collect();
    assert!(all == source);

    let none: Set<u32> = source.end().range_to(source.end()).cloned().collect();
    assert!(none.is_empty());
}

#[test]
fn reverse_comparator() {
    let mut set = Set::with_cmp(natural().rev());
    for item in [5u32, 3, 8, 1] { set.insert(item); }

    assert_eq!(items(&set), [8, 5, 3, 1]);
    assert_eq!(set.lower_bound(&4).get(), Some(&3));
    assert_eq!(set.first(), Some(&8));
}

#[test]
fn erase_everything_in_insertion_order() {
    init_logging();

    let mut set = Set::new();
    for item in 0..1000u32 { set.insert(item * 7919 % 1000); }
    assert_eq!(set.len(), 1000);

    for item in 0..1000u32 {
        assert_eq!(set.take(&(item * 7919 % 1000)), Some(item * 7919 % 1000));
        assert_eq!(set.len(), 999 - item as usize);
    }

    assert!(set.is_empty());
    assert!(set.begin() == set.end());
}

#[test]
fn clone_from_leaves_source_untouched() {
    let mut a: Set<u32> = [1, 2, 3].into();
    let b: Set<u32> = [4, 5].into();

    a.clone_from(&b);
    a.insert(6);

    assert_eq!(items(&a), [4, 5, 6]);
    assert_eq!(items(&b), [4, 5]);
}

#[test]
fn clear_twice() {
    let mut set: Set<u32> = (0..10).collect();
    set.clear();
    set.clear();
    assert!(set.is_empty());

    set.insert(3);
    assert_eq!(items(&set), [3]);
}

#[test]
fn error_reports_request() {
    let source = Vec::<u8>::new().try_reserve(usize::MAX).unwrap_err();
    let error = rbset::Error::Reserve { additional: 7, source: source };
    assert_eq!(error.to_string(), "failed to reserve storage for 7 more items");
    assert!(std::error::Error::source(&error).is_some());
}

#[quickcheck]
fn size_counts_distinct_items(items: Vec<u16>) -> bool {
    let set: Set<u16> = items.iter().cloned().collect();
    let mut distinct = items;
    distinct.sort();
    distinct.dedup();
    set.len() == distinct.len()
}

#[quickcheck]
fn erase_after_find_reaches_end(items: Vec<u16>, item: u16) -> bool {
    let mut set: Set<u16> = items.into_iter().collect();
    set.insert(item);
    let found = set.find(&item).get() == Some(&item);
    set.remove(&item);
    found && set.find(&item) == set.end()
}

#[quickcheck]
fn try_insert_agrees_with_insert(items: Vec<u16>) -> bool {
    let mut a = Set::new();
    let mut b = Set::new();

    items.into_iter().all(|item| a.try_insert(item).ok() == Some(b.insert(item))) && a == b
}
