use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use regex::Regex;
use once_cell::sync::Lazy;
use log::debug;

use crate::errors::VttError;

// @module: WebVTT caption parsing

// @const: VTT cue timing regex, hours optional per the WebVTT spec
static TIMING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^((?:\d{2,}:)?\d{2}:\d{2}\.\d{3})[ \t]+-->[ \t]+((?:\d{2,}:)?\d{2}:\d{2}\.\d{3})(?:[ \t].*)?$").unwrap()
});

// @struct: Single timed caption cue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cue {
    // @field: Start timestamp, verbatim from the timing line
    pub start: String,

    // @field: End timestamp, verbatim from the timing line
    pub end: String,

    // @field: Cue payload, possibly multi-line
    pub text: String,
}

impl Cue {
    /// Creates a new cue - used by tests and external consumers
    #[allow(dead_code)]
    pub fn new(start: impl Into<String>, end: impl Into<String>, text: impl Into<String>) -> Self {
        Cue {
            start: start.into(),
            end: end.into(),
            text: text.into(),
        }
    }
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{} --> {}", self.start, self.end)?;
        writeln!(f, "{}", self.text)
    }
}

/// Ordered collection of cues read from one caption file
#[derive(Debug)]
pub struct CueTrack {
    /// Source filename
    pub source_file: PathBuf,

    /// List of cues in input order
    pub cues: Vec<Cue>,
}

impl CueTrack {
    /// Parse a WebVTT file into a cue track
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Self, VttError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let cues = Self::parse_string(&content)?;
        Ok(CueTrack {
            source_file: path.to_path_buf(),
            cues,
        })
    }

    /// Parse WebVTT content into cues.
    ///
    /// The content must start with a `WEBVTT` signature line (an optional UTF-8
    /// BOM is tolerated). Blank-line separated blocks follow; `NOTE`, `STYLE`
    /// and `REGION` blocks are skipped, and each cue block may carry an
    /// identifier line before its timing line. Timestamps are captured
    /// verbatim, without reformatting.
    pub fn parse_string(content: &str) -> Result<Vec<Cue>, VttError> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);

        let mut lines = content.lines().enumerate();

        // Signature check - the first line must begin with WEBVTT
        match lines.next() {
            Some((_, first)) if first.trim_end().starts_with("WEBVTT") => {}
            _ => return Err(VttError::MissingHeader),
        }

        let mut cues = Vec::new();
        let mut block: Vec<(usize, &str)> = Vec::new();

        for (idx, line) in lines {
            if line.trim().is_empty() {
                if !block.is_empty() {
                    Self::parse_block(&block, &mut cues)?;
                    block.clear();
                }
            } else {
                block.push((idx + 1, line));
            }
        }

        if !block.is_empty() {
            Self::parse_block(&block, &mut cues)?;
        }

        Ok(cues)
    }

    // @parses: One blank-line delimited block into at most one cue
    fn parse_block(block: &[(usize, &str)], cues: &mut Vec<Cue>) -> Result<(), VttError> {
        let (_, first) = block[0];
        let first_trimmed = first.trim_start();

        // Metadata blocks carry no cue payload
        if first_trimmed.starts_with("NOTE")
            || first_trimmed.starts_with("STYLE")
            || first_trimmed.starts_with("REGION")
        {
            return Ok(());
        }

        // Locate the timing line: first line of the block, or second when the
        // block opens with a cue identifier
        let timing_pos = block.iter().position(|(_, line)| line.contains("-->"));

        let Some(pos) = timing_pos else {
            // Stray identifier or text without timing - not a cue
            debug!("Skipping block without cue timing: {:?}", first_trimmed);
            return Ok(());
        };

        let (line_no, timing_line) = block[pos];
        let caps = TIMING_REGEX
            .captures(timing_line.trim())
            .ok_or_else(|| VttError::BadTimestamp {
                line: line_no,
                text: timing_line.trim().to_string(),
            })?;

        let start = caps.get(1).map_or("", |m| m.as_str()).to_string();
        let end = caps.get(2).map_or("", |m| m.as_str()).to_string();

        let text = block[pos + 1..]
            .iter()
            .map(|(_, line)| *line)
            .collect::<Vec<_>>()
            .join("\n");

        cues.push(Cue { start, end, text });
        Ok(())
    }
}

impl fmt::Display for CueTrack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Cue Track")?;
        writeln!(f, "Source: {:?}", self.source_file)?;
        writeln!(f, "Cues: {}", self.cues.len())?;
        Ok(())
    }
}
