//! Render a draft as a downloadable document.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Output format for an exported draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ExportFormat {
    /// Plain text with an underlined title.
    #[default]
    #[serde(rename = "txt")]
    #[cfg_attr(feature = "clap", value(name = "txt"))]
    Text,
    /// Markdown with a level-one heading.
    #[serde(rename = "md")]
    #[cfg_attr(feature = "clap", value(name = "md"))]
    Markdown,
    /// Standalone HTML page.
    Html,
}

impl ExportFormat {
    /// File extension, without the dot.
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Markdown => "md",
            Self::Html => "html",
        }
    }

    /// MIME type of the rendered document.
    pub const fn mime_type(&self) -> &'static str {
        match self {
            Self::Text => "text/plain",
            Self::Markdown => "text/markdown",
            Self::Html => "text/html",
        }
    }

    /// Default file name for a draft titled `title`.
    pub fn file_name(&self, title: &str) -> String {
        format!("{title}.{}", self.extension())
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Render `content` under `title` in the given format.
#[tracing::instrument(skip(title, content), fields(content_len = content.len()))]
pub fn render(title: &str, content: &str, format: ExportFormat) -> String {
    match format {
        ExportFormat::Text => render_text(title, content),
        ExportFormat::Markdown => format!("# {title}\n\n{content}"),
        ExportFormat::Html => render_html(title, content),
    }
}

fn render_text(title: &str, content: &str) -> String {
    let underline = "=".repeat(title.chars().count());
    format!("{title}\n{underline}\n\n{content}")
}

fn render_html(title: &str, content: &str) -> String {
    let title = escape_html(title);
    let body: String = content
        .split('\n')
        .map(|line| format!("<p>{}</p>", escape_html(line)))
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="UTF-8">
  <title>{title}</title>
  <style>
    body {{ font-family: serif; max-width: 800px; margin: 2em auto; line-height: 1.6; }}
    h1 {{ color: #333; }}
  </style>
</head>
<body>
  <h1>{title}</h1>
  <div>{body}</div>
</body>
</html>"#
    )
}

/// Escape the characters HTML treats as markup.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
