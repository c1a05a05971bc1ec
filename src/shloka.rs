use once_cell::sync::Lazy;
use regex::Regex;

// @module: Devanagari verse marker detection

// @const: Shloka-ending marker regex
//
// Suffix-anchored: leading content is matched permissively and is not
// validated as Devanagari. The marker itself is one of
//   - double danda enclosing a run of Devanagari digits, e.g. "॥ १ ॥"
//   - a bare double danda "॥"
//   - a bare single danda "।"
// followed by optional trailing whitespace.
static SHLOKA_MARKER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\u{0900}-\u{097F}\s\u{0964}\u{0965}]*(\s*॥\s*[\u{0966}-\u{096F}]+\s*॥|\s*॥|\s*।)\s*$").unwrap()
});

/// Returns true iff the text ends with a Devanagari shloka verse marker.
///
/// Cues that end a complete verse line conventionally close with a danda,
/// a double danda, or a double danda pair enclosing the verse number. The
/// detector lets the assembler style such cues distinctly from mid-verse
/// continuations and narration. Empty input is never a verse ending.
pub fn ends_with_shloka_marker(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }

    SHLOKA_MARKER_REGEX.is_match(text)
}
