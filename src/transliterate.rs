use vidyut_lipi::{Lipika, Scheme};

// @module: Devanagari to IAST transliteration

/// Romanizes Devanagari text into the IAST scheme.
///
/// The mapping tables themselves are delegated to the vidyut-lipi crate;
/// this wrapper only fixes the scheme pair and guarantees that cue
/// boundaries and line breaks survive the conversion. No semantic state is
/// carried between calls (the inner engine only memoizes its mapping
/// tables).
pub struct Transliterator {
    lipika: Lipika,
}

impl Transliterator {
    /// Create a new Devanagari -> IAST transliterator
    pub fn new() -> Self {
        Transliterator {
            lipika: Lipika::new(),
        }
    }

    /// Transliterate one string, preserving internal line breaks
    pub fn romanize(&mut self, text: &str) -> String {
        text.split('\n')
            .map(|line| {
                self.lipika
                    .transliterate(line, Scheme::Devanagari, Scheme::Iast)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Transliterator {
    fn default() -> Self {
        Self::new()
    }
}
