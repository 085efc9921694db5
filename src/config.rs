/// How the Before/After pair of an entry is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CodeLayout {
    /// Two-column HTML table, code HTML-escaped
    #[default]
    SideBySide,
    /// Before block followed by After block, fenced
    Stacked,
}

#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Document title, used when the catalog source does not carry one
    pub title: String,
    /// Optional paragraph under the title
    pub introduction: Option<String>,
    /// Heading of the table of contents
    pub toc_heading: String,
    /// Language tag for code blocks when an entry does not name one
    pub code_language: String,
    /// Before/After presentation
    pub layout: CodeLayout,
    /// Character joining the words of an anchor
    pub anchor_separator: char,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            title: "Refactoring Cookbook".to_string(),
            introduction: None,
            toc_heading: "Table of Contents".to_string(),
            code_language: "cpp".to_string(),
            layout: CodeLayout::SideBySide,
            anchor_separator: '-',
        }
    }
}
