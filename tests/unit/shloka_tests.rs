/*!
 * Tests for Devanagari verse marker detection
 */

use granthika::shloka::ends_with_shloka_marker;

/// Test the numbered double-danda marker
#[test]
fn test_detector_with_numbered_marker_should_return_true() {
    assert!(ends_with_shloka_marker("राम राम ॥ १ ॥"));
    assert!(ends_with_shloka_marker("नारायणाय नमः ॥१००॥"));
    assert!(ends_with_shloka_marker("गुरवे नमः ॥ २५ ॥   "));
}

/// Test the bare double danda
#[test]
fn test_detector_with_bare_double_danda_should_return_true() {
    assert!(ends_with_shloka_marker("इति प्रथमः सर्गः ॥"));
    assert!(ends_with_shloka_marker("॥"));
}

/// Test the bare single danda
#[test]
fn test_detector_with_single_danda_should_return_true() {
    assert!(ends_with_shloka_marker("अथ कथा ।"));
    assert!(ends_with_shloka_marker("।"));
}

/// Test trailing whitespace after the marker
#[test]
fn test_detector_with_trailing_whitespace_should_return_true() {
    assert!(ends_with_shloka_marker("राम ॥  "));
    assert!(ends_with_shloka_marker("राम ।\t"));
}

/// Test ordinary script text without a marker
#[test]
fn test_detector_with_plain_text_should_return_false() {
    assert!(!ends_with_shloka_marker("एक"));
    assert!(!ends_with_shloka_marker("राम राम"));
    assert!(!ends_with_shloka_marker("some latin narration"));
}

/// Test empty and whitespace-only input
#[test]
fn test_detector_with_empty_input_should_return_false() {
    assert!(!ends_with_shloka_marker(""));
    assert!(!ends_with_shloka_marker("   "));
    assert!(!ends_with_shloka_marker("\n\t"));
}

/// Test that a danda mid-text does not count
#[test]
fn test_detector_with_mid_text_danda_should_return_false() {
    assert!(!ends_with_shloka_marker("प्रथमः । द्वितीयः"));
    assert!(!ends_with_shloka_marker("॥ १ ॥ इति"));
}

/// The match is suffix-anchored: leading content is not validated as
/// Devanagari, only the trailing marker matters
#[test]
fn test_detector_with_mixed_leading_content_should_return_true() {
    assert!(ends_with_shloka_marker("Om shanti ॥"));
    assert!(ends_with_shloka_marker("verse 12 ॥ १२ ॥"));
}
