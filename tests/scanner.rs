use std::fs;

use teacup_viz::data::scanner::{is_csv_name, scan_csv_folder};
use teacup_viz::Error;

fn sorted(mut v: Vec<String>) -> Vec<String> {
    v.sort();
    v
}

#[test]
fn lists_only_csv_files_directly_in_folder() {
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path();
    fs::write(p.join("cup_a.csv"), "time,temp\n").unwrap();
    fs::write(p.join("cup_b.csv"), "time,temp\n").unwrap();
    fs::write(p.join("notes.txt"), "").unwrap();
    fs::write(p.join("archive.csv.bak"), "").unwrap();
    fs::create_dir(p.join("nested.csv")).unwrap();
    fs::create_dir(p.join("sub")).unwrap();
    fs::write(p.join("sub").join("inner.csv"), "time,temp\n").unwrap();

    let listing = scan_csv_folder(p).unwrap();
    assert_eq!(listing.folder, p);
    assert_eq!(sorted(listing.files), vec!["cup_a.csv", "cup_b.csv"]);
}

#[test]
fn suffix_match_is_case_sensitive() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("upper.CSV"), "").unwrap();
    fs::write(dir.path().join("mixed.Csv"), "").unwrap();
    fs::write(dir.path().join("lower.csv"), "").unwrap();

    let listing = scan_csv_folder(dir.path()).unwrap();
    assert_eq!(listing.files, vec!["lower.csv"]);
    assert!(is_csv_name("a.csv"));
    assert!(!is_csv_name("a.CSV"));
}

#[test]
fn empty_folder_gives_empty_listing() {
    let dir = tempfile::tempdir().unwrap();
    let listing = scan_csv_folder(dir.path()).unwrap();
    assert!(listing.is_empty());
}

#[test]
fn missing_folder_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = scan_csv_folder(dir.path().join("does_not_exist")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }), "got {err:?}");
}

#[test]
fn listing_resolves_file_paths() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("log.csv"), "").unwrap();
    let listing = scan_csv_folder(dir.path()).unwrap();
    assert!(listing.contains("log.csv"));
    assert!(!listing.contains("other.csv"));
    assert_eq!(listing.path_of("log.csv"), dir.path().join("log.csv"));
}
