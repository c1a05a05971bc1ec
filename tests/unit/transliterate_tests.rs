/*!
 * Tests for Devanagari to IAST transliteration
 */

use granthika::transliterate::Transliterator;

/// Test a simple word
#[test]
fn test_romanize_with_simple_word_should_produce_iast() {
    let mut mapper = Transliterator::new();
    assert_eq!(mapper.romanize("राम"), "rāma");
}

/// Test a word with retroflex and long vowels
#[test]
fn test_romanize_with_diacritics_should_produce_iast() {
    let mut mapper = Transliterator::new();
    assert_eq!(mapper.romanize("नारायण"), "nārāyaṇa");
}

/// Test that internal line breaks survive the conversion
#[test]
fn test_romanize_with_multiline_text_should_preserve_line_breaks() {
    let mut mapper = Transliterator::new();
    let result = mapper.romanize("राम\nराम");
    assert_eq!(result, "rāma\nrāma");
}

/// Test repeated calls carry no state between them
#[test]
fn test_romanize_with_repeated_calls_should_be_deterministic() {
    let mut mapper = Transliterator::new();
    let first = mapper.romanize("राम");
    let second = mapper.romanize("राम");
    assert_eq!(first, second);
}

/// Test empty input
#[test]
fn test_romanize_with_empty_input_should_return_empty() {
    let mut mapper = Transliterator::new();
    assert_eq!(mapper.romanize(""), "");
}
