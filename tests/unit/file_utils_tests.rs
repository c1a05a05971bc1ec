/*!
 * Tests for file utility functions
 */

use anyhow::Result;
use granthika::file_utils::FileManager;
use crate::common;

/// Test extension filtering and lexicographic ordering
#[test]
fn test_find_files_sorted_should_filter_and_sort() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path();

    common::create_test_file(dir, "B_second.vtt", "WEBVTT\n")?;
    common::create_test_file(dir, "A_first.vtt", "WEBVTT\n")?;
    common::create_test_file(dir, "notes.txt", "not a caption")?;
    common::create_test_file(dir, "C_third.VTT", "WEBVTT\n")?;

    let files = FileManager::find_files_sorted(dir, "vtt")?;
    let names: Vec<String> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();

    assert_eq!(names, vec!["A_first.vtt", "B_second.vtt", "C_third.VTT"]);
    Ok(())
}

/// Test that nested files are not picked up
#[test]
fn test_find_files_sorted_should_ignore_subdirectories() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path();

    common::create_test_file(dir, "top.vtt", "WEBVTT\n")?;
    let nested = dir.join("nested");
    FileManager::ensure_dir(&nested)?;
    common::create_test_file(&nested, "inner.vtt", "WEBVTT\n")?;

    let files = FileManager::find_files_sorted(dir, "vtt")?;
    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("top.vtt"));
    Ok(())
}

/// Test empty result for a directory without matches
#[test]
fn test_find_files_sorted_with_no_matches_should_return_empty() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_file(temp_dir.path(), "readme.md", "nothing here")?;

    let files = FileManager::find_files_sorted(temp_dir.path(), ".vtt")?;
    assert!(files.is_empty());
    Ok(())
}

/// Test writing with parent directory creation
#[test]
fn test_write_to_file_should_create_parents() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let target = temp_dir.path().join("out").join("page.html");

    FileManager::write_to_file(&target, "<html></html>")?;

    assert!(FileManager::file_exists(&target));
    assert_eq!(FileManager::read_to_string(&target)?, "<html></html>");
    Ok(())
}

/// Test the modification time helper
#[test]
fn test_modified_epoch_secs_should_return_recent_time() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let secs = FileManager::modified_epoch_secs(temp_dir.path())?;

    // A freshly created directory is well past 2020 and not in the far future
    assert!(secs > 1_577_836_800.0);
    Ok(())
}
