use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use benchfs_core::{base_name, list_by_prefix, FileLocator, LocatorError, NullObserver};
use std::sync::Arc;
use tempfile::TempDir;

fn locator() -> FileLocator {
    FileLocator::default().with_observer(Arc::new(NullObserver))
}

/// Creates a checkout with a sentinel at every level of `depth` nested dirs.
fn checkout(tmp: &TempDir, depth: usize) -> (PathBuf, Vec<PathBuf>) {
    let root = fs::canonicalize(tmp.path()).unwrap();
    let mut levels = vec![root.clone()];
    let mut current = root.clone();
    for i in 0..depth {
        current = current.join(format!("level{i}"));
        levels.push(current.clone());
    }
    for level in &levels {
        fs::create_dir_all(level.join(".svn")).unwrap();
    }
    (root, levels)
}

// --- content round trips ---

#[test]
fn text_round_trip_plain_and_compressed_agree() {
    let tmp = TempDir::new().unwrap();
    let locator = locator();
    let content = "GetPageAnonymous\nGetPageAuthenticated\nUpdatePage";
    let plain = tmp.path().join("procs.txt");
    let zipped = tmp.path().join("procs.txt.gz");

    locator.write_text(&plain, content).unwrap();
    locator.write_text(&zipped, content).unwrap();

    let from_plain = locator.read_text(&plain).unwrap();
    let from_zipped = locator.read_text(&zipped).unwrap();
    assert_eq!(from_plain, format!("{content}\n"));
    assert_eq!(from_plain, from_zipped);
}

#[test]
fn temp_round_trip_reads_back() {
    let locator = locator();
    let temp = locator.write_text_to_temp("logging,log_id\n", Some("csv")).unwrap();

    assert_eq!(locator.read_text(temp.path()).unwrap(), "logging,log_id\n");
    assert_eq!(
        locator.read_all_bytes(temp.path()).unwrap(),
        b"logging,log_id\n".to_vec()
    );
    temp.delete().unwrap();
}

#[test]
fn unicode_content_survives_compression() {
    let tmp = TempDir::new().unwrap();
    let locator = locator();
    let path = tmp.path().join("pages.gz");
    let content = "제목\nTitel\n題名\n";

    locator.write_text(&path, content).unwrap();

    assert_eq!(locator.read_text(&path).unwrap(), content);
}

// --- search ---

#[test]
fn search_succeeds_from_every_descendant() {
    let tmp = TempDir::new().unwrap();
    let (root, levels) = checkout(&tmp, 4);
    fs::create_dir(root.join("T")).unwrap();
    let locator = locator();

    for start in &levels {
        let found = locator.find_directory_from(start, "T").unwrap();
        assert_eq!(found, root.join("T"));
        assert_eq!(base_name(&found), "T");
    }
}

#[test]
fn search_prefers_nearest_level() {
    let tmp = TempDir::new().unwrap();
    let (root, levels) = checkout(&tmp, 3);
    fs::create_dir(root.join("T")).unwrap();
    fs::create_dir(levels[2].join("T")).unwrap();

    let found = locator().find_directory_from(&levels[3], "T").unwrap();

    assert_eq!(found, levels[2].join("T"));
}

#[test]
fn search_overruns_past_unmarked_level() {
    let tmp = TempDir::new().unwrap();
    let root = fs::canonicalize(tmp.path()).unwrap();
    fs::create_dir(root.join("T")).unwrap();
    let unmarked = root.join("unmarked");
    let inner = unmarked.join("inner");
    fs::create_dir_all(inner.join(".svn")).unwrap();

    let err = locator().find_directory_from(&inner, "T").unwrap_err();

    assert!(matches!(
        err,
        LocatorError::SearchOverrun { ref last_dir, .. } if *last_dir == unmarked
    ));
}

#[test]
fn search_for_file_ignores_directories() {
    let tmp = TempDir::new().unwrap();
    let (root, levels) = checkout(&tmp, 2);
    fs::create_dir(levels[2].join("T")).unwrap();
    fs::write(root.join("T"), "marker").unwrap();

    let found = locator().find_file_from(&levels[2], "T").unwrap();

    assert_eq!(found, root.join("T"));
    assert!(found.is_file());
}

// --- listing ---

#[test]
fn prefix_filter_returns_exact_set() {
    let tmp = TempDir::new().unwrap();
    for name in ["a1", "a2", "b1"] {
        fs::write(tmp.path().join(name), "").unwrap();
    }

    let found: HashSet<String> = list_by_prefix(tmp.path(), "a")
        .unwrap()
        .iter()
        .map(|p| base_name(p))
        .collect();

    assert_eq!(found, HashSet::from(["a1".to_string(), "a2".to_string()]));
}

// --- temp files ---

#[test]
fn concurrent_temp_files_are_distinct() {
    let locator = locator();
    let paths: HashSet<PathBuf> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..16)
            .map(|_| {
                s.spawn(|| {
                    let temp = locator.create_temp_file("dat", false).unwrap();
                    temp.keep().unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(paths.len(), 16);
    for path in paths {
        fs::remove_file(path).unwrap();
    }
}
