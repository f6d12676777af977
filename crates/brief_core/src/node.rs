use serde::Serialize;

/// Inline text spans with formatting
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Span {
    Plain(String),
    Bold(String),
}

impl Span {
    pub fn text(&self) -> &str {
        match self {
            Span::Plain(text) | Span::Bold(text) => text,
        }
    }
}

/// Concatenated text of a span run, ignoring formatting.
///
/// An empty run and a single plain span render the same, so comparisons
/// of inline content usually go through this.
pub fn spans_text(spans: &[Span]) -> String {
    spans.iter().map(Span::text).collect()
}

/// One display node per source line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Spacer,
    /// Level is 2 (`## `) or 3 (`### `)
    Heading {
        level: u8,
        text: String,
    },
    BoldLine {
        text: String,
    },
    NumberedItem {
        /// Digits plus the trailing dot, e.g. `"12."`
        label: String,
        content: Vec<Span>,
    },
    BulletItem {
        content: Vec<Span>,
    },
    Rule,
    Paragraph {
        content: Vec<Span>,
    },
}

impl Node {
    /// Inline content for the variants that carry spans.
    pub fn content(&self) -> Option<&[Span]> {
        match self {
            Node::NumberedItem { content, .. }
            | Node::BulletItem { content }
            | Node::Paragraph { content } => Some(content),
            _ => None,
        }
    }
}
