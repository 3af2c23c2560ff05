use std::path::Path;

use super::*;

#[test]
fn archive_with_one_file() {
    let archive = "dir/a.go\n12\npackage main";
    let overlay = Overlay::from_archive(&mut archive.as_bytes()).unwrap();
    let file = FileId::from_path(Path::new("dir/a.go"));
    assert_eq!(overlay.get(&file), Some("package main"));
}

#[test]
fn archive_with_multiple_files() {
    let archive = "a.go\n3\nfoo\nb.go\n4\nbarb";
    let overlay = Overlay::from_archive(&mut archive.as_bytes()).unwrap();
    assert_eq!(overlay.get(&FileId::from_path(Path::new("a.go"))), Some("foo"));
    assert_eq!(overlay.get(&FileId::from_path(Path::new("b.go"))), Some("barb"));
}

#[test]
fn truncated_archive_is_rejected() {
    let archive = "a.go\n100\nshort";
    let err = Overlay::from_archive(&mut archive.as_bytes()).unwrap_err();
    assert!(err.to_string().contains("truncated"), "error was {err}");
}

#[test]
fn bad_size_is_rejected() {
    let archive = "a.go\nxyz\ncontents";
    assert!(Overlay::from_archive(&mut archive.as_bytes()).is_err());
}

#[test]
fn empty_archive_is_empty_overlay() {
    let overlay = Overlay::from_archive(&mut "".as_bytes()).unwrap();
    assert!(overlay.is_empty());
}

#[test]
fn read_prefers_overlay_over_disk() {
    let archive = "missing-from-disk.go\n11\npackage foo";
    let overlay = Overlay::from_archive(&mut archive.as_bytes()).unwrap();
    let file = FileId::from_path(Path::new("missing-from-disk.go"));
    assert_eq!(read_file(&overlay, &file).unwrap(), "package foo");
}
