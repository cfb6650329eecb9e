use schema_rail::{Key, Table, Value};

#[test]
fn sequence_len_counts_contiguous_indices_from_zero() {
    let mut t = Table::new();
    t.insert(0, "a");
    t.insert(1, "b");
    t.insert(3, "d");
    t.insert("name", "x");

    assert_eq!(t.len(), 4);
    assert_eq!(t.sequence_len(), 2);
    let seq: Vec<&Value> = t.sequence().collect();
    assert_eq!(seq, vec![&Value::from("a"), &Value::from("b")]);
}

#[test]
fn sequence_len_is_zero_without_index_zero() {
    let mut t = Table::new();
    t.insert(1, "b");
    t.insert(-1, "z");
    assert_eq!(t.sequence_len(), 0);
}

#[test]
fn push_appends_after_array_part() {
    let mut t = Table::new();
    t.push(10);
    t.push(20);
    assert_eq!(t.get(1), Some(&Value::from(20)));
    assert_eq!(t.sequence_len(), 2);
}

#[test]
fn indices_iterate_before_names() {
    let mut t = Table::new();
    t.insert("b", 2);
    t.insert("a", 1);
    t.insert(0, 0);

    let keys: Vec<Key> = t.iter().map(|(k, _)| k.clone()).collect();
    assert_eq!(keys, vec![Key::Index(0), Key::from("a"), Key::from("b")]);
}

#[test]
fn insert_and_remove_return_previous_values() {
    let mut t = Table::new();
    assert_eq!(t.insert("k", 1), None);
    assert_eq!(t.insert("k", 2), Some(Value::from(1)));
    assert_eq!(t.remove("k"), Some(Value::from(2)));
    assert!(t.is_empty());
}

#[test]
fn collects_from_pairs() {
    let t: Table = vec![(Key::from("x"), Value::from(1)), (Key::Index(0), Value::from(true))]
        .into_iter()
        .collect();
    assert!(t.contains_key(&Key::from("x")));
    assert_eq!(t.sequence_len(), 1);
}

#[test]
fn key_display_brackets_indices() {
    assert_eq!(Key::Index(3).to_string(), "[3]");
    assert_eq!(Key::from("name").to_string(), "name");
}

#[test]
fn array_part_tracks_inserts_that_close_a_gap() {
    let mut t = Table::new();
    t.insert(0, "a");
    t.insert(2, "c");
    assert_eq!(t.sequence_len(), 1);

    t.insert(1, "b");
    assert_eq!(t.sequence_len(), 3);
    t.push("d");
    assert_eq!(t.get(3), Some(&Value::from("d")));
}

#[test]
fn removing_inside_array_part_truncates_it() {
    let mut t: Table = (0..5).map(Value::from).collect();
    assert_eq!(t.remove(2), Some(Value::from(2)));
    assert_eq!(t.sequence_len(), 2);

    t.push("again");
    assert_eq!(t.get(2), Some(&Value::from("again")));
    assert_eq!(t.sequence_len(), 5);

    assert_eq!(t.remove(9), None);
    assert_eq!(t.sequence_len(), 5);
}

#[test]
fn pairs_collect_with_their_array_part() {
    let t: Table =
        vec![(Key::from(1), Value::from("b")), (Key::from(0), Value::from("a")), (Key::from("n"), Value::from(1))]
            .into_iter()
            .collect();
    assert_eq!(t.sequence_len(), 2);
}

#[test]
fn large_arrays_build_by_pushing() {
    let t: Table = (0..50_000).map(Value::from).collect();
    assert_eq!(t.sequence_len(), 50_000);
    assert_eq!(t.get(49_999), Some(&Value::from(49_999)));
}

#[test]
fn oversized_usize_index_saturates() {
    assert_eq!(Key::from(usize::MAX), Key::Index(i64::MAX));
    assert_eq!(Key::from(7usize), Key::Index(7));
}
