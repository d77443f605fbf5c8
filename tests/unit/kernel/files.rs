use super::*;

fn sample_tree() -> SeedTree {
    let mut tree = SeedTree::new();
    tree.add_file("root/a.txt", "A").unwrap();
    tree.add_file("root/b.txt", "B").unwrap();
    tree.add_file("root/sub/c.txt", "C").unwrap();
    tree
}

fn new_store() -> VirtualFileStore {
    VirtualFileStore::new(sample_tree(), "root/a.txt")
}

#[test]
fn starts_with_default_file_open() {
    let store = new_store();
    assert_eq!(store.open_paths(), ["root/a.txt".to_string()]);
    assert_eq!(store.active_path(), Some("root/a.txt"));
    assert_eq!(store.active_text(), "A");
    assert!(store.dirty_paths().is_empty());
}

#[test]
fn missing_default_file_leaves_editor_empty() {
    let store = VirtualFileStore::new(sample_tree(), "root/missing.txt");
    assert!(store.open_paths().is_empty());
    assert_eq!(store.active_path(), None);
    assert_eq!(store.active_text(), "");
}

#[test]
fn resolve_returns_seed_body() {
    let store = new_store();
    assert_eq!(store.resolve("root/sub/c.txt"), Ok("C"));
    assert_eq!(
        store.resolve("root/sub"),
        Err(FileStoreError::NotFound("root/sub".to_string()))
    );
    assert_eq!(
        store.resolve("root/a.txt/x"),
        Err(FileStoreError::NotFound("root/a.txt/x".to_string()))
    );
}

#[test]
fn open_unknown_path_changes_nothing() {
    let mut store = new_store();
    for path in ["root/zzz.txt", "root", "root/sub", "root/a.txt/more", ""] {
        assert!(!store.open(path));
        assert_eq!(store.open_paths(), ["root/a.txt".to_string()]);
        assert_eq!(store.active_path(), Some("root/a.txt"));
        assert_eq!(store.contents(path), None);
    }
}

#[test]
fn open_appends_and_focuses() {
    let mut store = new_store();
    assert!(store.open("root/b.txt"));
    assert_eq!(
        store.open_paths(),
        ["root/a.txt".to_string(), "root/b.txt".to_string()]
    );
    assert_eq!(store.active_path(), Some("root/b.txt"));
    assert_eq!(store.active_text(), "B");
}

#[test]
fn reopening_moves_focus_without_duplicating() {
    let mut store = new_store();
    store.open("root/b.txt");
    store.open("root/sub/c.txt");

    assert!(store.open("root/a.txt"));
    assert_eq!(store.open_paths().len(), 3);
    assert_eq!(store.active_path(), Some("root/a.txt"));
    assert_eq!(store.open_paths()[0], "root/a.txt");
}

#[test]
fn edit_marks_dirty_and_updates_active_text() {
    let mut store = new_store();
    store.edit("root/a.txt", "A2").unwrap();
    assert_eq!(store.active_text(), "A2");
    assert!(store.is_dirty("root/a.txt"));
    assert_eq!(store.saved_contents("root/a.txt"), Some("A"));
}

#[test]
fn edit_rejects_paths_that_are_not_open() {
    let mut store = new_store();
    assert_eq!(
        store.edit("root/b.txt", "B2"),
        Err(FileStoreError::NotOpen("root/b.txt".to_string()))
    );
    assert_eq!(
        store.edit("root/nope.txt", "x"),
        Err(FileStoreError::NotOpen("root/nope.txt".to_string()))
    );
    assert!(store.dirty_paths().is_empty());
    assert_eq!(store.contents("root/b.txt"), None);
}

#[test]
fn open_does_not_clear_other_dirty_files() {
    let mut store = new_store();
    store.edit("root/a.txt", "A2").unwrap();
    store.open("root/b.txt");
    assert!(store.is_dirty("root/a.txt"));
    assert_eq!(store.contents("root/a.txt"), Some("A2"));
}

#[test]
fn save_clears_dirty_and_is_idempotent() {
    let mut store = new_store();
    store.edit("root/a.txt", "A2").unwrap();

    assert!(store.save("root/a.txt"));
    assert!(!store.is_dirty("root/a.txt"));
    assert_eq!(store.saved_contents("root/a.txt"), Some("A2"));
    assert_eq!(store.active_text(), "A2");

    assert!(!store.save("root/a.txt"));
    assert!(!store.is_dirty("root/a.txt"));
    assert_eq!(store.saved_contents("root/a.txt"), Some("A2"));
}

#[test]
fn save_of_clean_file_is_noop() {
    let mut store = new_store();
    assert!(!store.save("root/a.txt"));
    assert!(!store.save_active());
}

#[test]
fn save_active_targets_active_path() {
    let mut store = new_store();
    store.edit("root/a.txt", "A2").unwrap();
    store.open("root/b.txt");
    store.edit("root/b.txt", "B2").unwrap();

    assert!(store.save_active());
    assert!(!store.is_dirty("root/b.txt"));
    assert!(store.is_dirty("root/a.txt"));
}

#[test]
fn closing_only_tab_clears_active() {
    let mut store = new_store();
    assert!(store.close("root/a.txt"));
    assert!(store.open_paths().is_empty());
    assert_eq!(store.active_path(), None);
    assert_eq!(store.active_text(), "");
    assert!(!store.save_active());
}

#[test]
fn closing_active_tab_falls_back_to_first() {
    let mut store = new_store();
    store.open("root/b.txt");
    store.open("root/sub/c.txt");

    assert!(store.close("root/sub/c.txt"));
    assert_eq!(store.active_path(), Some("root/a.txt"));
}

#[test]
fn closing_inactive_tab_keeps_focus() {
    let mut store = new_store();
    store.open("root/b.txt");
    assert!(store.close("root/a.txt"));
    assert_eq!(store.active_path(), Some("root/b.txt"));
    assert!(!store.close("root/a.txt"));
}

#[test]
fn scenario_close_keeps_edits_for_reopen() {
    let mut store = new_store();

    store.open("root/b.txt");
    assert_eq!(
        store.open_paths(),
        ["root/a.txt".to_string(), "root/b.txt".to_string()]
    );
    assert_eq!(store.active_path(), Some("root/b.txt"));

    store.edit("root/b.txt", "B2").unwrap();
    assert_eq!(store.dirty_paths(), vec!["root/b.txt"]);
    assert_eq!(store.active_text(), "B2");

    store.close("root/b.txt");
    assert_eq!(store.open_paths(), ["root/a.txt".to_string()]);
    assert_eq!(store.active_path(), Some("root/a.txt"));
    assert_eq!(store.contents("root/b.txt"), Some("B2"));
    assert!(store.is_dirty("root/b.txt"));

    store.open("root/b.txt");
    assert_eq!(store.active_text(), "B2");
}

#[test]
fn tabs_report_title_dirty_and_active() {
    let mut store = new_store();
    store.open("root/sub/c.txt");
    store.edit("root/sub/c.txt", "C2").unwrap();

    let tabs = store.tabs();
    assert_eq!(tabs.len(), 2);
    assert_eq!(tabs[0].title, "a.txt");
    assert!(!tabs[0].dirty);
    assert!(!tabs[0].active);
    assert_eq!(tabs[1].title, "c.txt");
    assert!(tabs[1].dirty);
    assert!(tabs[1].active);
}

#[test]
fn neighbor_tab_wraps() {
    let mut store = new_store();
    store.open("root/b.txt");
    store.open("root/sub/c.txt");

    assert_eq!(store.neighbor_tab(1), Some("root/a.txt"));
    assert_eq!(store.neighbor_tab(-1), Some("root/b.txt"));

    let empty = VirtualFileStore::empty(sample_tree());
    assert_eq!(empty.neighbor_tab(1), None);
}
