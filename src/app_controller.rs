use anyhow::{Context, Result};
use log::{error, info, debug};
use std::path::Path;
use indicatif::{ProgressBar, ProgressStyle};

use crate::app_config::{Config, RenderMode};
use crate::errors::ConvertError;
use crate::file_utils::FileManager;
use crate::html_render::{self, Chapter, PageFooter, PageTemplate};
use crate::transliterate::Transliterator;
use crate::vtt::{Cue, CueTrack};

// @module: Batch driver for the caption to HTML conversion

/// Main application controller for the conversion run
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    #[allow(dead_code)]
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self { config })
    }

    /// Run the conversion: enumerate caption files, render one section per
    /// file, and write the assembled page once.
    ///
    /// A malformed file is recovered locally: its section is replaced with an
    /// error placeholder and processing continues. Zero matching files is
    /// fatal and nothing is written.
    pub fn run(&self) -> Result<()> {
        let input_dir = Path::new(&self.config.input_dir);

        if !FileManager::dir_exists(input_dir) {
            return Err(anyhow::anyhow!(
                "Input directory does not exist: {:?}",
                input_dir
            ));
        }

        let files = FileManager::find_files_sorted(input_dir, "vtt")?;

        if files.is_empty() {
            error!("No VTT files found in {}", input_dir.display());
            return Err(ConvertError::NoInputFound(self.config.input_dir.clone()).into());
        }

        debug!("Found {} VTT file(s) in {}", files.len(), input_dir.display());

        let progress_bar = ProgressBar::new(files.len() as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(template_result);

        let mut mapper = match self.config.mode {
            RenderMode::Transliteration => Some(Transliterator::new()),
            RenderMode::Text => None,
        };

        let mut sections = Vec::with_capacity(files.len());

        for path in &files {
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string());

            info!("Processing {}...", file_name);
            progress_bar.set_message(file_name.clone());

            // Read errors are not recoverable per file; parse errors are
            let content = FileManager::read_to_string(path)?;

            match CueTrack::parse_string(&content) {
                Ok(cues) => {
                    let stem = path
                        .file_stem()
                        .map(|stem| stem.to_string_lossy().to_string())
                        .unwrap_or_default();

                    let cues = match &mut mapper {
                        Some(mapper) => cues
                            .into_iter()
                            .map(|cue| Cue {
                                text: mapper.romanize(&cue.text),
                                ..cue
                            })
                            .collect(),
                        None => cues,
                    };

                    let chapter = Chapter::from_stem(&stem, cues);
                    let style_verses = self.config.mode == RenderMode::Text;
                    sections.push(html_render::render_chapter(&chapter, style_verses));
                }
                Err(e) => {
                    error!("Error parsing {}: {}", file_name, e);
                    sections.push(html_render::render_error_section(&file_name, &e.to_string()));
                }
            }

            progress_bar.inc(1);
        }

        progress_bar.finish_and_clear();

        let template = self.page_template(input_dir)?;
        let page = template.render_page(&sections);

        let output_file = self.config.resolved_output_file();
        FileManager::write_to_file(&output_file, &page)
            .with_context(|| format!("Failed to write output page: {}", output_file))?;

        info!("HTML file '{}' generated successfully!", output_file);

        Ok(())
    }

    // @builds: Page chrome for the configured render mode
    fn page_template(&self, input_dir: &Path) -> Result<PageTemplate> {
        let footer = match self.config.mode {
            RenderMode::Text => {
                let source_name = input_dir
                    .file_name()
                    .map(|name| name.to_string_lossy().to_string())
                    .unwrap_or_else(|| input_dir.display().to_string());
                let mtime = FileManager::modified_epoch_secs(input_dir)?;

                Some(PageFooter {
                    source_name,
                    generated_at: format!("{:.1}", mtime),
                })
            }
            RenderMode::Transliteration => None,
        };

        Ok(PageTemplate {
            title: self.config.page_title(),
            inline_style: self.config.mode == RenderMode::Text,
            footer,
        })
    }
}
