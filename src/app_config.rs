use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Directory holding the source .vtt caption files
    #[serde(default = "default_input_dir")]
    pub input_dir: String,

    /// Output HTML file path; derived from the corpus title and render
    /// mode when absent
    #[serde(default)]
    pub output_file: Option<String>,

    /// Render mode
    #[serde(default)]
    pub mode: RenderMode,

    /// Corpus display name used in page titles and output filenames
    #[serde(default = "default_corpus_title")]
    pub corpus_title: String,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Page render mode
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    // @mode: Original Devanagari text with verse styling
    #[default]
    Text,
    // @mode: IAST transliteration, no verse styling
    Transliteration,
}

impl RenderMode {
    // @returns: Capitalized mode name for page titles
    pub fn display_name(&self) -> &str {
        match self {
            Self::Text => "Text",
            Self::Transliteration => "Transliteration",
        }
    }

    // @returns: Lowercase mode identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::Text => "text".to_string(),
            Self::Transliteration => "transliteration".to_string(),
        }
    }
}

// Implement Display trait for RenderMode
impl std::fmt::Display for RenderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

// Implement FromStr trait for RenderMode
impl std::str::FromStr for RenderMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "transliteration" | "translit" => Ok(Self::Transliteration),
            _ => Err(anyhow!("Invalid render mode: {}", s)),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl Config {
    /// The title line shown in the page head and header
    pub fn page_title(&self) -> String {
        format!("{} {} Compilation", self.corpus_title, self.mode.display_name())
    }

    /// Resolve the output file path, deriving one from the corpus title
    /// and mode when none is configured
    pub fn resolved_output_file(&self) -> String {
        match &self.output_file {
            Some(path) => path.clone(),
            None => {
                let stem = self
                    .corpus_title
                    .to_lowercase()
                    .replace(|c: char| c.is_whitespace(), "_");
                match self.mode {
                    RenderMode::Text => format!("{}_text.html", stem),
                    RenderMode::Transliteration => format!("{}_transliteration.html", stem),
                }
            }
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.input_dir.trim().is_empty() {
            return Err(anyhow!("Input directory must not be empty"));
        }

        if self.corpus_title.trim().is_empty() {
            return Err(anyhow!("Corpus title must not be empty"));
        }

        if let Some(output_file) = &self.output_file {
            if output_file.trim().is_empty() {
                return Err(anyhow!("Output file path must not be empty when set"));
            }
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            output_file: None,
            mode: RenderMode::default(),
            corpus_title: default_corpus_title(),
            log_level: LogLevel::default(),
        }
    }
}

fn default_input_dir() -> String {
    "vtt_all".to_string()
}

fn default_corpus_title() -> String {
    "Narayaneeyam".to_string()
}
