use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tally::io::storage::{FileStorage, KeyValueStore, STORAGE_FILE, TODOS_KEY};
use tally::model::{Filter, ThemeMode, TodoId};
use tally::ops::session::Session;

/// Helper: copy a fixture into a fresh data dir and open a session on it
fn open_fixture(fixture_name: &str, data_dir: &Path) -> Session {
    let src = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(fixture_name);
    fs::copy(&src, data_dir.join(STORAGE_FILE))
        .unwrap_or_else(|e| panic!("Could not copy fixture {}: {}", fixture_name, e));
    Session::open(Box::new(FileStorage::open_dir(data_dir).unwrap()))
}

fn reopen(data_dir: &Path) -> Session {
    Session::open(Box::new(FileStorage::open_dir(data_dir).unwrap()))
}

#[test]
fn browser_storage_loads() {
    let tmp = tempfile::TempDir::new().unwrap();
    let session = open_fixture("browser_storage.json", tmp.path());

    assert_eq!(session.theme(), ThemeMode::Light);
    let texts: Vec<&str> = session.store().todos().iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["walk dog", "buy milk"]);
    assert_eq!(session.store().remaining(), 1);
    assert_eq!(session.filter(), Filter::All);
}

#[test]
fn untouched_list_re_encodes_byte_for_byte() {
    let tmp = tempfile::TempDir::new().unwrap();
    let mut session = open_fixture("browser_storage.json", tmp.path());
    let original = FileStorage::open_dir(tmp.path())
        .unwrap()
        .get(TODOS_KEY)
        .unwrap();

    // Toggle twice: same list, but forces a write
    session.toggle(TodoId(1_747_215_000_000)).unwrap();
    session.toggle(TodoId(1_747_215_000_000)).unwrap();

    let written = FileStorage::open_dir(tmp.path())
        .unwrap()
        .get(TODOS_KEY)
        .unwrap();
    assert_eq!(written, original);
}

#[test]
fn mutations_survive_reopen() {
    let tmp = tempfile::TempDir::new().unwrap();
    let mut session = open_fixture("browser_storage.json", tmp.path());

    session.add("call mum").unwrap();
    session.toggle(TodoId(1_747_215_000_000)).unwrap();
    assert_eq!(session.clear_completed().unwrap(), 2);
    session.toggle_theme().unwrap();
    session.set_filter(Filter::Completed);
    let before = session.store().todos().to_vec();

    let session = reopen(tmp.path());
    assert_eq!(session.store().todos(), before.as_slice());
    assert_eq!(session.store().todos()[0].text, "call mum");
    assert_eq!(session.theme(), ThemeMode::Dark);
    // Filter is session-only
    assert_eq!(session.filter(), Filter::All);
}

#[test]
fn corrupt_todos_value_starts_empty_and_recovers() {
    let tmp = tempfile::TempDir::new().unwrap();
    fs::write(
        tmp.path().join(STORAGE_FILE),
        r#"{"todos":"{not json","theme":"sepia"}"#,
    )
    .unwrap();

    let mut session = reopen(tmp.path());
    assert!(session.store().is_empty());
    assert_eq!(session.theme(), ThemeMode::Dark);

    session.add("fresh start").unwrap();
    let session = reopen(tmp.path());
    assert_eq!(session.store().len(), 1);
}
