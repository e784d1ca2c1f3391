// tests/naming.rs
use std::fs;

use ga_dph_scrape::specs::tables::{name_for, PositionTable, REVISIONS};

#[test]
fn in_range_uses_table() {
    let table = ["alpha", "beta"];
    assert_eq!(name_for(0, &table), "alpha");
    assert_eq!(name_for(1, &table), "beta");
}

#[test]
fn out_of_range_falls_back_to_padded_ordinal() {
    let table = ["alpha", "beta"];
    assert_eq!(name_for(2, &table), "02");
    assert_eq!(name_for(23, &table), "23");
    assert_eq!(name_for(123, &table), "123");

    let empty: [&str; 0] = [];
    assert_eq!(name_for(0, &empty), "00");
    assert_eq!(name_for(7, &empty), "07");
}

#[test]
fn naming_is_stable() {
    let table = PositionTable::latest();
    for i in 0..30 {
        assert_eq!(table.name_for(i), table.name_for(i));
    }
}

#[test]
fn builtin_revisions() {
    let old = PositionTable::revision("2020-09-15").unwrap();
    assert_eq!(old.len(), 23);
    assert_eq!(old.name_for(0), "geometry_county");
    assert_eq!(old.name_for(22), "current_status_tests");
    assert_eq!(old.name_for(23), "23");

    let new = PositionTable::revision("2020-09-22").unwrap();
    assert_eq!(new.len(), 24);
    assert_eq!(new.name_for(23), "lab_testing_summary");

    assert_eq!(PositionTable::latest(), new);
    assert_eq!(REVISIONS.last().map(|(rev, _)| *rev), Some("2020-09-22"));
    assert!(PositionTable::revision("1999-01-01").is_none());
}

#[test]
fn revisions_only_ever_append() {
    // a later revision must keep earlier positions, or old snapshots get relabelled
    for pair in REVISIONS.windows(2) {
        let (_, older) = pair[0];
        let (_, newer) = pair[1];
        assert!(newer.len() >= older.len());
        assert_eq!(&newer[..older.len()], older);
    }
}

#[test]
fn parse_skips_blanks_and_comments() {
    let text = "# revision 2021-01-04\nalpha\n\n  beta  \n# retired: gamma\ndelta\n";
    let table = PositionTable::parse("custom", text);
    assert_eq!(table.names(), ["alpha", "beta", "delta"]);
    assert_eq!(table.revision_tag(), "custom");
    assert_eq!(table.name_for(3), "03");
}

#[test]
fn load_uses_file_stem_as_revision() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("2021-01-04.txt");
    fs::write(&path, "alpha\nbeta\n").unwrap();

    let table = PositionTable::load(&path).unwrap();
    assert_eq!(table.revision_tag(), "2021-01-04");
    assert_eq!(table.len(), 2);

    let listed: Vec<(usize, &str)> = table.describe().collect();
    assert_eq!(listed, vec![(0, "alpha"), (1, "beta")]);
}

#[test]
fn load_missing_file_errors() {
    let dir = tempfile::tempdir().unwrap();
    assert!(PositionTable::load(&dir.path().join("nope.txt")).is_err());
}
