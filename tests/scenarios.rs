use rust_buckets::script::{self, LookupStyle, Reply};
use rust_buckets::{ChainMap, DEFAULT_CAPACITY, Error, NOT_FOUND, RandomizedSet};

#[test]
fn same_bucket_keys_under_default_capacity() {
    let mut map = ChainMap::new();
    assert_eq!(map.capacity(), DEFAULT_CAPACITY);

    map.put(7, 100);
    map.put(10007, 200);
    assert_eq!(map.get(7), Some(100));
    assert_eq!(map.get(10007), Some(200));

    map.remove(7);
    assert_eq!(map.get(7), None);
    assert_eq!(map.get_or_sentinel(7), NOT_FOUND);
    assert_eq!(map.get(10007), Some(200));
}

#[test]
fn put_overwrite_then_remove() {
    let mut map = ChainMap::new();
    map.put(3, 1);
    assert_eq!(map.get(3), Some(1));
    map.put(3, 2);
    assert_eq!(map.get(3), Some(2));
    map.remove(3);
    assert_eq!(map.get(3), None);
    // Removing again changes nothing.
    map.remove(3);
    assert!(map.is_empty());
}

#[test]
fn insert_remove_insert_round() {
    let mut set = RandomizedSet::new();
    assert!(set.insert(1));
    assert!(set.insert(2));
    assert!(set.remove(1));
    assert!(set.insert(1));
    assert_eq!(set.len(), 2);
    assert!(set.contains(1));
    assert!(set.contains(2));
}

#[test]
fn empty_set_draw_reports_error() {
    let mut set = RandomizedSet::new();
    assert_eq!(set.get_random(), Err(Error::EmptySet));
    assert_eq!(
        set.get_random().unwrap_err().to_string(),
        "cannot draw from empty set"
    );
}

#[test]
fn map_script_end_to_end() {
    let text = "\
put 1 1
put 2 2
get 1
get 3
put 2 1
get 2
remove 2
get 2
";
    let ops = script::parse_map_script(text).unwrap();
    let mut map = ChainMap::new();
    let replies = script::run_map(&mut map, &ops, LookupStyle::Sentinel);
    let rendered: Vec<String> = replies.iter().map(Reply::to_string).collect();
    assert_eq!(
        rendered,
        ["null", "null", "1", "-1", "null", "1", "null", "-1"]
    );
}

#[test]
fn set_script_end_to_end() {
    let text = "\
insert 1
remove 2
insert 2
getRandom
remove 1
insert 2
getRandom
";
    let ops = script::parse_set_script(text).unwrap();
    let mut set = RandomizedSet::with_seed(2024);
    let replies = script::run_set(&mut set, &ops);

    assert_eq!(replies[0], Reply::Bool(true));
    assert_eq!(replies[1], Reply::Bool(false));
    assert_eq!(replies[2], Reply::Bool(true));
    assert!(matches!(replies[3], Reply::Int(1) | Reply::Int(2)));
    assert_eq!(replies[4], Reply::Bool(true));
    assert_eq!(replies[5], Reply::Bool(false));
    assert_eq!(replies[6], Reply::Int(2));
}
