//! Markdown drafts reduced to prose.
//!
//! Uses pulldown-cmark for CommonMark parsing. Paragraph boundaries survive as
//! blank lines so that paragraph counts match the rendered draft.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Strip markdown formatting, returning plain prose text.
///
/// Removes:
/// - Code blocks (fenced and indented)
/// - Inline code
/// - HTML tags
/// - YAML frontmatter
/// - Headings (chapter titles are not prose)
/// - Image alt text
///
/// Preserves:
/// - Link text
/// - Blockquote and list item text
/// - Emphasis/strong text (without markers)
/// - Paragraph breaks, as a blank line
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn strip_to_prose(text: &str) -> String {
    let text = strip_frontmatter(text);

    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES;
    let parser = Parser::new_ext(text, options);

    let mut result = String::with_capacity(text.len());
    let mut skip_depth: usize = 0;

    for event in parser {
        match event {
            Event::Start(Tag::CodeBlock(_) | Tag::Heading { .. } | Tag::Image { .. }) => {
                skip_depth += 1;
            }
            Event::End(TagEnd::CodeBlock | TagEnd::Heading(_) | TagEnd::Image) => {
                skip_depth = skip_depth.saturating_sub(1);
            }

            Event::Text(t) if skip_depth == 0 => result.push_str(&t),
            Event::SoftBreak | Event::HardBreak if skip_depth == 0 => result.push(' '),

            Event::End(TagEnd::Paragraph | TagEnd::Item | TagEnd::TableRow)
                if skip_depth == 0 =>
            {
                end_block(&mut result);
            }

            _ => {}
        }
    }

    result.truncate(result.trim_end().len());
    result
}

/// Close a block with a blank line, once.
fn end_block(out: &mut String) {
    let kept = out.trim_end().len();
    if kept == 0 {
        out.clear();
        return;
    }
    out.truncate(kept);
    out.push_str("\n\n");
}

/// Drop YAML frontmatter delimited by `---` lines.
fn strip_frontmatter(text: &str) -> &str {
    let trimmed = text.trim_start();
    let Some(after_opening) = trimmed.strip_prefix("---") else {
        return text;
    };
    let Some(close_pos) = after_opening.find("\n---") else {
        return text;
    };

    let remainder = &after_opening[close_pos + 4..];
    remainder.strip_prefix('\n').unwrap_or(remainder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_removes_code_blocks() {
        let input = "Some text.\n\n```rust\nlet x = 1;\n```\n\nMore text.";
        let result = strip_to_prose(input);
        assert!(!result.contains("let x"));
        assert_eq!(result, "Some text.\n\nMore text.");
    }

    #[test]
    fn strip_removes_frontmatter() {
        let input = "---\ntitle: Chapter One\ndraft: 3\n---\n\nSome text.";
        assert_eq!(strip_to_prose(input), "Some text.");
    }

    #[test]
    fn strip_removes_headings() {
        let input = "# Chapter One\n\nShe ran.\n\n## Part Two\n\nHe followed.";
        let result = strip_to_prose(input);
        assert!(!result.contains("Chapter"));
        assert!(!result.contains("Part Two"));
        assert_eq!(result, "She ran.\n\nHe followed.");
    }

    #[test]
    fn strip_preserves_link_text() {
        let input = "Check [the map](https://example.com) again.";
        assert_eq!(strip_to_prose(input), "Check the map again.");
    }

    #[test]
    fn strip_removes_inline_code_and_images() {
        let input = "Use `foo()` here ![a lighthouse](light.png) now.";
        let result = strip_to_prose(input);
        assert!(!result.contains("foo()"));
        assert!(!result.contains("lighthouse"));
        assert!(result.starts_with("Use"));
    }

    #[test]
    fn strip_removes_emphasis_markers() {
        let input = "This is **bold** and *italic* text.";
        assert_eq!(strip_to_prose(input), "This is bold and italic text.");
    }

    #[test]
    fn soft_breaks_join_lines() {
        let input = "The night\nwas long.";
        assert_eq!(strip_to_prose(input), "The night was long.");
    }

    #[test]
    fn blockquote_and_list_text_survive() {
        let input = "> A quote.\n\n- first\n- second\n\nRegular text.";
        let result = strip_to_prose(input);
        assert!(result.contains("A quote."));
        assert!(result.contains("first"));
        assert!(result.contains("second"));
        assert!(result.ends_with("Regular text."));
    }

    #[test]
    fn empty_input_returns_empty() {
        assert!(strip_to_prose("").is_empty());
        assert!(strip_to_prose("# Only a heading").is_empty());
    }
}
