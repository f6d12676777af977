use crate::config::Config;
use crate::node::{Node, Span};

/// Fallback chain for the sans option; the first installed family wins
const SANS_FONTS: &str = "(\"Open Sans\", \"Noto Sans\", \"Noto Sans Thai\", \"DejaVu Sans\")";

/// Convert display nodes to Typst markup
pub fn nodes_to_typst(nodes: &[Node], config: &Config) -> String {
    let mut out = String::new();

    // Set up paragraph settings to prevent widows/orphans
    out.push_str("#set par(linebreaks: \"optimized\")\n");
    if config.page.numbers {
        out.push_str("#set page(numbering: \"1\")\n");
    }
    if config.font.sans {
        out.push_str("#set text(font: ");
        out.push_str(SANS_FONTS);
        out.push_str(")\n");
    }
    out.push('\n');

    let mut i = 0;
    while i < nodes.len() {
        match &nodes[i] {
            Node::Heading { .. } => {
                // Keep heading with following content using a block that prevents breaks
                out.push_str("#block(breakable: false)[\n");
                emit_node(&nodes[i], None, &mut out);

                // Spacers between a heading and its content don't count
                let mut next = i + 1;
                while matches!(nodes.get(next), Some(Node::Spacer)) {
                    next += 1;
                }
                if let Some(node) = nodes.get(next) {
                    if !matches!(node, Node::Heading { .. }) {
                        i = next;
                        emit_node(node, nodes.get(i + 1), &mut out);
                    }
                }
                out.push_str("]\n\n");
            }
            node => emit_node(node, nodes.get(i + 1), &mut out),
        }

        i += 1;
    }

    out
}

fn emit_node(node: &Node, next: Option<&Node>, out: &mut String) {
    match node {
        // Blank lines already separate paragraphs
        Node::Spacer => {}
        Node::Heading { level, text } => {
            for _ in 0..*level {
                out.push('=');
            }
            out.push(' ');
            escape_text(text, out);
            out.push_str("\n\n");
        }
        Node::BoldLine { text } if text.trim().is_empty() => {}
        Node::BoldLine { text } => {
            out.push('*');
            escape_text(text, out);
            out.push_str("*\n\n");
        }
        Node::NumberedItem { label, content } => {
            out.push_str(label);
            out.push(' ');
            spans_to_typst(content, out);
            end_item(node, next, out);
        }
        Node::BulletItem { content } => {
            out.push_str("- ");
            spans_to_typst(content, out);
            end_item(node, next, out);
        }
        Node::Rule => {
            out.push_str("#line(length: 100%)\n\n");
        }
        Node::Paragraph { content } => {
            escape_line_start(content, out);
            spans_to_typst(content, out);
            out.push_str("\n\n");
        }
    }
}

/// Items of the same kind run together as one list; anything else closes it.
fn end_item(node: &Node, next: Option<&Node>, out: &mut String) {
    out.push('\n');
    let continues = next.is_some_and(|next| {
        std::mem::discriminant(next) == std::mem::discriminant(node)
    });
    if !continues {
        out.push('\n');
    }
}

/// A paragraph must not open with something Typst reads as markup.
fn escape_line_start(content: &[Span], out: &mut String) {
    let first = content
        .first()
        .filter(|span| matches!(span, Span::Plain(_)))
        .and_then(|span| span.text().chars().next());
    if matches!(first, Some('=' | '-' | '+')) {
        out.push('\\');
    }
}

fn spans_to_typst(spans: &[Span], out: &mut String) {
    for span in spans {
        match span {
            Span::Plain(text) => escape_text(text, out),
            // `**` means nothing to Typst
            Span::Bold(text) if text.is_empty() => {}
            Span::Bold(text) => {
                out.push('*');
                escape_text(text, out);
                out.push('*');
            }
        }
    }
}

fn escape_text(text: &str, out: &mut String) {
    // Escape special Typst characters; `/` can open a comment next to a
    // neighbouring span, so it is always escaped
    for ch in text.chars() {
        match ch {
            '#' | '*' | '_' | '@' | '$' | '\\' | '`' | '<' | '>' | '[' | ']' | '~' | '/' => {
                out.push('\\');
                out.push(ch);
            }
            '\r' => {}
            _ => out.push(ch),
        }
    }
}
