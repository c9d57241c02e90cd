/*!
 * Tests for file and directory utilities
 */

use std::path::Path;
use asstran::file_utils::FileManager;
use crate::common;

/// Test the output path suffix for translated files
#[test]
fn test_translated_output_path_shouldAppendSuffix() {
    let output = FileManager::translated_output_path(Path::new("/subs/episode.ass"));
    assert_eq!(output, Path::new("/subs/episode.ass.translated.ass"));
}

/// Test .ass extension detection
#[test]
fn test_is_ass_file_shouldMatchExtensionCaseInsensitively() {
    assert!(FileManager::is_ass_file("episode.ass"));
    assert!(FileManager::is_ass_file("EPISODE.ASS"));
    assert!(!FileManager::is_ass_file("episode.srt"));
    assert!(!FileManager::is_ass_file("episode"));
}

/// Test discovery of .ass files under a directory
#[test]
fn test_find_ass_files_withMixedFiles_shouldOnlyReturnSubtitles() {
    let temp_dir = common::create_temp_dir().unwrap();
    let dir = temp_dir.path().to_path_buf();

    common::create_test_ass(&dir, "one.ass").unwrap();
    common::create_test_file(&dir, "notes.txt", "not a subtitle").unwrap();
    std::fs::create_dir(dir.join("nested")).unwrap();
    common::create_test_ass(&dir.join("nested"), "two.ass").unwrap();

    let mut found = FileManager::find_ass_files(&dir).unwrap();
    found.sort();

    assert_eq!(found.len(), 2);
    assert!(found.iter().all(|path| FileManager::is_ass_file(path)));
}

/// Test write then read round trip with directory creation
#[test]
fn test_write_to_file_withMissingParent_shouldCreateIt() {
    let temp_dir = common::create_temp_dir().unwrap();
    let path = temp_dir.path().join("deep/nested/out.ass");

    FileManager::write_to_file(&path, "content").unwrap();

    assert!(FileManager::file_exists(&path));
    assert_eq!(FileManager::read_to_string(&path).unwrap(), "content");
}

/// Test existence helpers
#[test]
fn test_existence_checks_shouldDistinguishFilesAndDirs() {
    let temp_dir = common::create_temp_dir().unwrap();
    let dir = temp_dir.path().to_path_buf();
    let file = common::create_test_ass(&dir, "a.ass").unwrap();

    assert!(FileManager::file_exists(&file));
    assert!(!FileManager::file_exists(&dir));
    assert!(FileManager::dir_exists(&dir));
    assert!(!FileManager::dir_exists(&file));
}
