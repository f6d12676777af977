use unicode_width::UnicodeWidthStr;

use crate::config::TextConfig;
use crate::node::{Node, Span};

const ANSI_BOLD: &str = "\x1b[1m";
const ANSI_RESET: &str = "\x1b[0m";

/// Convert display nodes to terminal text, one line per node plus heading
/// underlines when enabled.
pub fn nodes_to_text(nodes: &[Node], config: &TextConfig) -> String {
    let mut out = String::new();

    for node in nodes {
        match node {
            Node::Spacer => {}
            Node::Heading { level, text } => {
                push_bold(text, config, &mut out);
                if config.underline_headings {
                    let underline = if *level == 2 { "=" } else { "-" };
                    out.push('\n');
                    out.push_str(&underline.repeat(text.width()));
                }
            }
            Node::BoldLine { text } => push_bold(text, config, &mut out),
            Node::NumberedItem { label, content } => {
                out.push_str("  ");
                out.push_str(label);
                out.push(' ');
                spans_to_text(content, config, &mut out);
            }
            Node::BulletItem { content } => {
                out.push_str("  ");
                out.push_str(&config.bullet);
                out.push(' ');
                spans_to_text(content, config, &mut out);
            }
            Node::Rule => out.push_str(&config.rule_char.repeat(config.rule_width)),
            Node::Paragraph { content } => spans_to_text(content, config, &mut out),
        }
        out.push('\n');
    }

    out
}

fn push_bold(text: &str, config: &TextConfig, out: &mut String) {
    if config.ansi_bold {
        out.push_str(ANSI_BOLD);
        out.push_str(text);
        out.push_str(ANSI_RESET);
    } else {
        out.push_str(text);
    }
}

fn spans_to_text(spans: &[Span], config: &TextConfig, out: &mut String) {
    for span in spans {
        match span {
            Span::Plain(text) => out.push_str(text),
            Span::Bold(text) => push_bold(text, config, out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use pretty_assertions::assert_eq;

    fn render(markdown: &str, config: &TextConfig) -> String {
        nodes_to_text(&parse(markdown), config)
    }

    #[test]
    fn headings_are_underlined() {
        assert_eq!(
            render("## Title\n### Sub", &TextConfig::default()),
            "Title\n=====\nSub\n---\n"
        );
    }

    #[test]
    fn underline_matches_display_width() {
        // The combining vowel mark takes no column
        assert_eq!(
            render("## สรุป", &TextConfig::default()),
            "สรุป\n===\n"
        );
    }

    #[test]
    fn wide_characters_take_two_columns() {
        assert_eq!(
            render("### 概要", &TextConfig::default()),
            "概要\n----\n"
        );
    }

    #[test]
    fn lists_rules_and_spacers() {
        let config = TextConfig {
            rule_char: "-".to_string(),
            rule_width: 5,
            ..TextConfig::default()
        };
        assert_eq!(
            render("1. One\n\n- two\n---", &config),
            "  1. One\n\n  • two\n-----\n"
        );
    }

    #[test]
    fn ansi_bold_wraps_bold_spans() {
        let config = TextConfig {
            ansi_bold: true,
            ..TextConfig::default()
        };
        assert_eq!(
            render("a **b** c", &config),
            "a \x1b[1mb\x1b[0m c\n"
        );
    }

    #[test]
    fn plain_mode_drops_markers() {
        assert_eq!(
            render("**Note:**\na **b** c", &TextConfig::default()),
            "Note:\na b c\n"
        );
    }
}
