use std::fmt::Write;

use crate::shloka::ends_with_shloka_marker;
use crate::vtt::Cue;

// @module: HTML assembly for chapter sections and the page template

/// Cues of one source file, grouped under a slug id and display title
#[derive(Debug)]
pub struct Chapter {
    /// Slug id derived from the source file stem
    pub id: String,

    /// Display title derived from the source file stem
    pub title: String,

    /// Cues in input order
    pub cues: Vec<Cue>,
}

impl Chapter {
    /// Build a chapter from a source file stem.
    ///
    /// The slug lowercases the stem and replaces spaces with hyphens; the
    /// title replaces underscores with spaces. "Chapter_1" thus becomes
    /// id "chapter_1" and title "Chapter 1".
    pub fn from_stem(stem: &str, cues: Vec<Cue>) -> Self {
        Chapter {
            id: stem.replace(' ', "-").to_lowercase(),
            title: stem.replace('_', " "),
            cues,
        }
    }
}

/// Escape text for safe embedding in HTML element content and
/// double-quoted attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render one chapter as a `<section>` fragment.
///
/// Each cue becomes a paragraph with a `cue_<slug>_<index>` id and
/// `data-start`/`data-end` attributes carrying the raw timestamps
/// verbatim. When `style_verses` is set, cues whose trimmed text ends
/// with a shloka marker are wrapped in the verse-style span.
pub fn render_chapter(chapter: &Chapter, style_verses: bool) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "<section id=\"{}\">", chapter.id);
    let _ = writeln!(
        out,
        "<h2 data-chapter=\"{}\">{}</h2>",
        escape_html(&chapter.title),
        escape_html(&chapter.title)
    );

    for (i, cue) in chapter.cues.iter().enumerate() {
        let raw_text = cue.text.trim();
        let escaped_text = escape_html(raw_text).replace('\n', "<br>");

        let body = if style_verses && ends_with_shloka_marker(raw_text) {
            format!("<span class='cue-text'>{}</span>", escaped_text)
        } else {
            escaped_text
        };

        let _ = writeln!(
            out,
            "<p id=\"cue_{}_{}\" data-start=\"{}\" data-end=\"{}\">{}</p>",
            chapter.id, i, cue.start, cue.end, body
        );
    }

    out.push_str("</section>");
    out
}

/// Render the error placeholder section for a file that failed to parse
pub fn render_error_section(file_name: &str, message: &str) -> String {
    let mut out = String::new();
    out.push_str("<section>\n");
    let _ = writeln!(out, "<h2>Error processing {}</h2>", escape_html(file_name));
    let _ = writeln!(
        out,
        "<p>There was an error reading this VTT file: {}</p>",
        escape_html(message)
    );
    out.push_str("</section>");
    out
}

/// Footer line content for the text variant
#[derive(Debug)]
pub struct PageFooter {
    /// Base name of the source directory
    pub source_name: String,

    /// Source directory modification time, seconds since the epoch
    pub generated_at: String,
}

/// Static page chrome wrapped around the chapter sections
#[derive(Debug)]
pub struct PageTemplate {
    /// Document and header title
    pub title: String,

    /// Whether the inline stylesheet is embedded (text variant only)
    pub inline_style: bool,

    /// Footer line, absent in the transliteration variant
    pub footer: Option<PageFooter>,
}

// Inline stylesheet of the text variant
const PAGE_STYLE: &str = r#"    <style>
        body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif; line-height: 1.6; margin: 20px; }
        h1 { color: #2e8b57; }
        h2 { margin-top: 40px; color: #2e8b57; border-bottom: 2px solid #ccc; padding-bottom: 5px; }
        p { margin: 10px 0; }
        .cue-text {
            font-size: 1.25em;
            color: #004d40;
        }
    </style>
"#;

impl PageTemplate {
    /// Embed the chapter sections into the full page document
    pub fn render_page(&self, sections: &[String]) -> String {
        let main = format!("<main> {} </main>", sections.join(" "));

        let mut page = String::new();
        page.push_str("<!DOCTYPE html>\n");
        page.push_str("<html lang=\"en\">\n");
        page.push_str("<head>\n");
        page.push_str("    <meta charset=\"UTF-8\">\n");
        page.push_str("    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
        let _ = writeln!(page, "    <title>{}</title>", escape_html(&self.title));
        if self.inline_style {
            page.push_str(PAGE_STYLE);
        }
        page.push_str("</head>\n");
        page.push_str("<body>\n");
        page.push_str("    <header>\n");
        let _ = writeln!(page, "        <h1>{}</h1>", escape_html(&self.title));
        page.push_str("    </header>\n");
        page.push_str("    ");
        page.push_str(&main);
        page.push('\n');
        if let Some(footer) = &self.footer {
            page.push_str("    <footer>\n");
            let _ = writeln!(
                page,
                "        <p>&copy; {} | Generated on {}</p>",
                escape_html(&footer.source_name),
                footer.generated_at
            );
            page.push_str("    </footer>\n");
        }
        page.push_str("</body>\n");
        page.push_str("</html>\n");
        page
    }
}
