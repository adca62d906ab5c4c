use keepsake_core::db::migrations::latest_version;
use keepsake_core::db::open_db_or_in_memory;
use keepsake_core::{KvRepository, SqliteKvRepository};

#[test]
fn unusable_file_path_degrades_to_a_working_in_memory_store() {
    // A path whose parent is a regular file cannot be opened as a database.
    let blocker = tempfile::NamedTempFile::new().unwrap();
    let bogus_path = blocker.path().join("nested").join("keepsake.sqlite3");

    let conn = open_db_or_in_memory(&bogus_path).unwrap();

    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());

    let repo = SqliteKvRepository::new(&conn);
    repo.put("settings", "{\"winterMode\":true}").unwrap();
    assert_eq!(
        repo.get("settings").unwrap().as_deref(),
        Some("{\"winterMode\":true}")
    );
}

#[test]
fn usable_file_path_keeps_state_across_reopens() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("keepsake.sqlite3");

    {
        let conn = open_db_or_in_memory(&path).unwrap();
        SqliteKvRepository::new(&conn)
            .put("guestbook", "[{\"name\":\"An\",\"message\":\"hi\"}]")
            .unwrap();
    }

    let conn = open_db_or_in_memory(&path).unwrap();
    let raw = SqliteKvRepository::new(&conn).get("guestbook").unwrap();
    assert_eq!(raw.as_deref(), Some("[{\"name\":\"An\",\"message\":\"hi\"}]"));
}
