use std::fs;
use ti_log::{FormatWarning, IndexRange, IndexedEntry, LogError, LogStore};
use tempfile::TempDir;

fn entry(index: usize, marked: bool, message: &str) -> IndexedEntry {
    IndexedEntry {
        index,
        marked,
        message: message.to_string(),
    }
}

fn create_test_store() -> (TempDir, LogStore) {
    let temp_dir = TempDir::new().unwrap();
    let store = LogStore::new(temp_dir.path().join("test.log"));
    (temp_dir, store)
}

#[test]
fn test_append_then_list() {
    let (_temp_dir, store) = create_test_store();
    store.ensure_log_file().unwrap();

    store.append("todo", "buy milk").unwrap();
    store.append("todo", "call mom").unwrap();

    let listing = store.list("todo").unwrap();
    assert_eq!(
        listing.entries,
        vec![entry(1, false, "buy milk"), entry(2, false, "call mom")]
    );
    assert!(listing.warnings.is_empty());
}

#[test]
fn test_append_creates_file_with_header() {
    let (_temp_dir, store) = create_test_store();
    assert!(!store.exists());

    store.append("work", "standup").unwrap();

    assert_eq!(
        fs::read_to_string(store.path()).unwrap(),
        "# TI LOG\nwork|||0|||standup\n"
    );
}

#[test]
fn test_mark_then_delete_renumbers() {
    let (_temp_dir, store) = create_test_store();
    store.append("todo", "buy milk").unwrap();
    store.append("todo", "call mom").unwrap();

    let marked = store
        .set_marked("todo", IndexRange::single(1), true)
        .unwrap();
    assert_eq!(marked.affected, 1);
    assert_eq!(
        store.list("todo").unwrap().entries,
        vec![entry(1, true, "buy milk"), entry(2, false, "call mom")]
    );

    let deleted = store.delete_range("todo", IndexRange::single(1)).unwrap();
    assert_eq!(deleted.affected, 1);
    assert_eq!(
        store.list("todo").unwrap().entries,
        vec![entry(1, false, "call mom")]
    );
}

#[test]
fn test_interleaved_types_keep_independent_indices() {
    let (_temp_dir, store) = create_test_store();
    store.append("todo", "t1").unwrap();
    store.append("work", "w1").unwrap();
    store.append("todo", "t2").unwrap();
    store.append("work", "w2").unwrap();
    store.append("todo", "t3").unwrap();

    assert_eq!(
        store.list("todo").unwrap().entries,
        vec![entry(1, false, "t1"), entry(2, false, "t2"), entry(3, false, "t3")]
    );
    assert_eq!(
        store.list("work").unwrap().entries,
        vec![entry(1, false, "w1"), entry(2, false, "w2")]
    );
}

#[test]
fn test_mark_single_leaves_others_untouched() {
    let (_temp_dir, store) = create_test_store();
    store.append("todo", "t1").unwrap();
    store.append("work", "w1").unwrap();
    store.append("todo", "t2").unwrap();

    store
        .set_marked("todo", IndexRange::single(2), true)
        .unwrap();

    assert_eq!(
        store.list("todo").unwrap().entries,
        vec![entry(1, false, "t1"), entry(2, true, "t2")]
    );
    assert_eq!(
        store.list("work").unwrap().entries,
        vec![entry(1, false, "w1")]
    );
}

#[test]
fn test_unmark_range() {
    let (_temp_dir, store) = create_test_store();
    for message in ["a", "b", "c", "d"] {
        store.append("todo", message).unwrap();
    }

    let range = IndexRange::from_endpoints(&[4, 1]).unwrap();
    assert_eq!(store.set_marked("todo", range, true).unwrap().affected, 4);

    let range = IndexRange::from_endpoints(&[2, 3]).unwrap();
    assert_eq!(store.set_marked("todo", range, false).unwrap().affected, 2);

    let marks: Vec<bool> = store
        .list("todo")
        .unwrap()
        .entries
        .iter()
        .map(|e| e.marked)
        .collect();
    assert_eq!(marks, vec![true, false, false, true]);
}

#[test]
fn test_delete_range_preserves_other_types_and_order() {
    let (_temp_dir, store) = create_test_store();
    store.append("todo", "t1").unwrap();
    store.append("work", "w1").unwrap();
    store.append("todo", "t2").unwrap();
    store.append("todo", "t3").unwrap();
    store.append("work", "w2").unwrap();
    store.append("todo", "t4").unwrap();

    let range = IndexRange::from_endpoints(&[2, 3]).unwrap();
    assert_eq!(store.delete_range("todo", range).unwrap().affected, 2);

    assert_eq!(
        store.list("todo").unwrap().entries,
        vec![entry(1, false, "t1"), entry(2, false, "t4")]
    );
    assert_eq!(
        fs::read_to_string(store.path()).unwrap(),
        "# TI LOG\ntodo|||0|||t1\nwork|||0|||w1\nwork|||0|||w2\ntodo|||0|||t4\n"
    );
}

#[test]
fn test_delete_out_of_range_removes_fewer() {
    let (_temp_dir, store) = create_test_store();
    store.append("todo", "t1").unwrap();
    store.append("todo", "t2").unwrap();

    let range = IndexRange::from_endpoints(&[2, 10]).unwrap();
    assert_eq!(store.delete_range("todo", range).unwrap().affected, 1);
    assert_eq!(
        store.list("todo").unwrap().entries,
        vec![entry(1, false, "t1")]
    );

    let range = IndexRange::single(7);
    assert_eq!(store.delete_range("todo", range).unwrap().affected, 0);
}

#[test]
fn test_list_missing_file_is_empty() {
    let (_temp_dir, store) = create_test_store();
    let listing = store.list("todo").unwrap();
    assert!(listing.entries.is_empty());
    assert!(!store.exists());
}

#[test]
fn test_mutation_on_missing_file_creates_it() {
    let (_temp_dir, store) = create_test_store();
    let mutation = store.delete_range("todo", IndexRange::single(1)).unwrap();
    assert_eq!(mutation.affected, 0);
    assert_eq!(fs::read_to_string(store.path()).unwrap(), "# TI LOG\n");
}

#[test]
fn test_malformed_lines_warn_and_survive_mutation() {
    let (_temp_dir, store) = create_test_store();
    fs::write(
        store.path(),
        "# TI LOG\ntodo|||0|||t1\nnot an entry\ntodo|||0|||t2\n",
    )
    .unwrap();

    let listing = store.list("todo").unwrap();
    assert_eq!(
        listing.entries,
        vec![entry(1, false, "t1"), entry(2, false, "t2")]
    );
    assert_eq!(listing.warnings, vec![FormatWarning { line: 3, fields: 1 }]);

    let mutation = store
        .set_marked("todo", IndexRange::single(2), true)
        .unwrap();
    assert_eq!(mutation.affected, 1);
    assert_eq!(mutation.warnings.len(), 1);
    assert_eq!(
        fs::read_to_string(store.path()).unwrap(),
        "# TI LOG\ntodo|||0|||t1\nnot an entry\ntodo|||1|||t2\n"
    );
}

#[test]
fn test_delimiter_in_message_is_a_known_limitation() {
    let (_temp_dir, store) = create_test_store();
    store.append("todo", "a|||b").unwrap();
    store.append("todo", "c").unwrap();

    let listing = store.list("todo").unwrap();
    assert_eq!(listing.entries, vec![entry(1, false, "c")]);
    assert_eq!(listing.warnings, vec![FormatWarning { line: 2, fields: 4 }]);
}

#[test]
fn test_hash_line_after_first_is_not_a_header() {
    let (_temp_dir, store) = create_test_store();
    fs::write(store.path(), "todo|||0|||t1\n# note\ntodo|||0|||t2\n").unwrap();

    let listing = store.list("todo").unwrap();
    assert_eq!(
        listing.entries,
        vec![entry(1, false, "t1"), entry(2, false, "t2")]
    );
    assert_eq!(listing.warnings, vec![FormatWarning { line: 2, fields: 1 }]);
}

#[test]
fn test_append_rejects_multiline_message() {
    let (_temp_dir, store) = create_test_store();
    let result = store.append("todo", "line one\nline two");
    assert!(matches!(result, Err(LogError::InvalidEntry { .. })));
}

#[test]
fn test_mark_keeps_crlf_line_endings() {
    let (_temp_dir, store) = create_test_store();
    fs::write(store.path(), "# TI LOG\r\ntodo|||0|||a\r\nwork|||0|||b\r\n").unwrap();

    let mutation = store.set_marked("todo", IndexRange::single(1), true).unwrap();
    assert_eq!(mutation.affected, 1);
    assert_eq!(
        fs::read_to_string(store.path()).unwrap(),
        "# TI LOG\r\ntodo|||1|||a\r\nwork|||0|||b\r\n"
    );
    assert_eq!(store.list("todo").unwrap().entries, vec![entry(1, true, "a")]);
}

#[cfg(unix)]
#[test]
fn test_mutation_through_symlink_updates_target() {
    let temp_dir = TempDir::new().unwrap();
    let real = temp_dir.path().join("real.log");
    let link = temp_dir.path().join("link.log");
    fs::write(&real, "# TI LOG\ntodo|||0|||a\ntodo|||0|||b\n").unwrap();
    std::os::unix::fs::symlink(&real, &link).unwrap();

    let store = LogStore::new(&link);
    store.set_marked("todo", IndexRange::single(1), true).unwrap();
    store.delete_range("todo", IndexRange::single(2)).unwrap();

    assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    assert_eq!(fs::read_to_string(&real).unwrap(), "# TI LOG\ntodo|||1|||a\n");
    assert!(!temp_dir.path().join("real.log.tmp").exists());
}
