// tests/artifacts.rs
use std::fs;

use chrono::NaiveDate;
use ga_dph_scrape::file::{artifact_path, date_prefix, ensure_directory, write_artifact};

#[test]
fn writes_prefix_name_json_with_trailing_newline() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_artifact(dir.path(), "2020-09-15-", "foo", "abc").unwrap();

    assert_eq!(path, dir.path().join("2020-09-15-foo.json"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "abc\n");
}

#[test]
fn creates_missing_root() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("artifacts").join("nested");
    let path = write_artifact(&root, "", "last_updated", "\"2020-09-15\"").unwrap();

    assert!(root.is_dir());
    assert_eq!(fs::read_to_string(path).unwrap(), "\"2020-09-15\"\n");
}

#[test]
fn overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    write_artifact(dir.path(), "", "iqr", "a much longer first payload").unwrap();
    let path = write_artifact(dir.path(), "", "iqr", "{}").unwrap();

    assert_eq!(fs::read_to_string(path).unwrap(), "{}\n");
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn content_is_not_reencoded() {
    let dir = tempfile::tempdir().unwrap();
    let raw = r#"{"name":"O\'Brien","u":"é"}"#;
    let path = write_artifact(dir.path(), "", "deaths", raw).unwrap();
    assert_eq!(fs::read_to_string(path).unwrap(), format!("{raw}\n"));
}

#[test]
fn ensure_directory_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("out");
    ensure_directory(&root).unwrap();
    ensure_directory(&root).unwrap();
    assert!(root.is_dir());
}

#[test]
fn ensure_directory_rejects_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("artifacts");
    fs::write(&file, "").unwrap();
    assert!(ensure_directory(&file).is_err());
    assert!(write_artifact(&file, "", "x", "1").is_err());
}

#[test]
fn artifact_path_shape() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(
        artifact_path(dir.path(), "p-", "23"),
        dir.path().join("p-23.json")
    );
}

#[test]
fn date_prefix_format() {
    let d = NaiveDate::from_ymd_opt(2020, 9, 15).unwrap();
    assert_eq!(date_prefix(d), "2020-09-15-");
}
