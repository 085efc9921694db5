//! # Markdown Renderer
//!
//! Turns a [`Catalog`] into a single Markdown document: title block, table
//! of contents, then one section per technique with its Before/After code
//! and benefits. Rendering is pure; equal catalogs give byte-identical output.

use crate::anchor::catalog_anchors;
use crate::config::{CodeLayout, RenderConfig};
use crate::cookbook::{Catalog, Entry};
use crate::errors::CookbookError;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct MarkdownRenderer {
    config: RenderConfig,
}

impl MarkdownRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render the whole catalog.
    ///
    /// Anchors are resolved before any text is produced, so a collision
    /// fails the call without partial output.
    pub fn render(&self, catalog: &Catalog) -> Result<String, CookbookError> {
        let anchors = catalog_anchors(catalog, self.config.anchor_separator)?;

        let mut out = self.render_title_block(catalog);
        out.push_str(&self.render_toc(catalog, &anchors));

        for (entry, anchor) in catalog.all().zip(&anchors) {
            out.push('\n');
            out.push_str(&self.render_entry(entry, anchor));
        }

        debug!("Rendered {} techniques into {} bytes", catalog.len(), out.len());
        Ok(out)
    }

    fn render_title_block(&self, catalog: &Catalog) -> String {
        let title = catalog.title().unwrap_or(self.config.title.as_str());
        let mut block = format!("# {}\n", title.trim());

        let introduction = catalog
            .introduction()
            .or(self.config.introduction.as_deref());
        if let Some(introduction) = introduction.map(str::trim).filter(|i| !i.is_empty()) {
            block.push_str(&format!("\n{introduction}\n"));
        }

        block
    }

    fn render_toc(&self, catalog: &Catalog, anchors: &[String]) -> String {
        let mut toc = format!("\n## {}\n\n", self.config.toc_heading);
        for (entry, anchor) in catalog.all().zip(anchors) {
            toc.push_str(&format!("- [{}](#{})\n", escape_markdown(entry.name()), anchor));
        }
        toc
    }

    fn render_entry(&self, entry: &Entry, anchor: &str) -> String {
        let language = code_language(entry.language().unwrap_or(self.config.code_language.as_str()));

        let mut section = format!(
            "<a id=\"{}\"></a>\n\n## {}\n\n{}\n\n",
            anchor,
            escape_markdown(entry.name()),
            entry.rationale()
        );

        match self.config.layout {
            CodeLayout::SideBySide => {
                section.push_str(&side_by_side(entry, &language));
            }
            CodeLayout::Stacked => {
                section.push_str("**Before**\n\n");
                section.push_str(&fenced(entry.before_code(), &language));
                section.push_str("\n**After**\n\n");
                section.push_str(&fenced(entry.after_code(), &language));
            }
        }

        section.push_str("\n### Benefits\n\n");
        for benefit in entry.benefits() {
            section.push_str(&list_item(benefit));
        }

        section
    }
}

/// Render a catalog with the default configuration
pub fn render(catalog: &Catalog) -> Result<String, CookbookError> {
    MarkdownRenderer::default().render(catalog)
}

fn side_by_side(entry: &Entry, language: &str) -> String {
    let cell = |code: &str| {
        format!(
            "<td>\n<pre><code class=\"language-{}\">{}</code></pre>\n</td>\n",
            language,
            encode_line_breaks(&escape_html(strip_final_newline(code)))
        )
    };

    let mut table = String::from("<table>\n<tr>\n<th>Before</th>\n<th>After</th>\n</tr>\n<tr>\n");
    table.push_str(&cell(entry.before_code()));
    table.push_str(&cell(entry.after_code()));
    table.push_str("</tr>\n</table>\n");
    table
}

/// A bullet whose continuation lines are indented into the item
fn list_item(text: &str) -> String {
    let mut lines = text.lines();
    let mut item = format!("- {}\n", lines.next().unwrap_or_default());
    for line in lines {
        if line.trim().is_empty() {
            item.push('\n');
        } else {
            item.push_str(&format!("  {line}\n"));
        }
    }
    item
}

/// Replace line breaks with `&#10;` so an HTML block holding the code
/// never contains a blank line, which would end the block early.
fn encode_line_breaks(text: &str) -> String {
    text.replace("\r\n", "&#10;")
        .replace(['\r', '\n'], "&#10;")
}

/// Fence `code` with one more backtick than its longest backtick run,
/// so nothing inside can close the block.
fn fenced(code: &str, language: &str) -> String {
    let longest_run = code
        .split(|c| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    let fence = "`".repeat((longest_run + 1).max(3));
    format!("{fence}{language}\n{}\n{fence}\n", strip_final_newline(code))
}

fn strip_final_newline(code: &str) -> &str {
    code.strip_suffix("\r\n")
        .or_else(|| code.strip_suffix('\n'))
        .unwrap_or(code)
}

/// Keep only characters that are safe in both an info string and a class attribute
fn code_language(language: &str) -> String {
    language
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '#' | '_' | '.'))
        .collect()
}

pub(crate) fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escape inline Markdown syntax in a technique name
pub(crate) fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '`' | '*' | '_' | '[' | ']' | '<' | '>' | '#' | '|') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
