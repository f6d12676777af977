use crate::inline::{find_close, parse_inline};
use crate::node::Node;

/// A named line classifier. Rules are tried in table order.
struct Rule {
    name: &'static str,
    apply: fn(&str) -> Option<Node>,
}

/// Precedence order; the first rule returning a node claims the line.
/// Lines no rule claims become paragraphs.
const RULES: &[Rule] = &[
    Rule {
        name: "spacer",
        apply: spacer,
    },
    Rule {
        name: "heading2",
        apply: heading2,
    },
    Rule {
        name: "heading3",
        apply: heading3,
    },
    Rule {
        name: "bold_line",
        apply: bold_line,
    },
    Rule {
        name: "numbered_item",
        apply: numbered_item,
    },
    Rule {
        name: "bullet_item",
        apply: bullet_item,
    },
    Rule {
        name: "rule",
        apply: rule,
    },
];

/// Parse a summary block into display nodes, one per `\n`-separated line.
pub fn parse(text: &str) -> Vec<Node> {
    if text.is_empty() {
        return Vec::new();
    }

    let nodes: Vec<Node> = text.split('\n').map(classify).collect();
    log::debug!("parsed {} lines into display nodes", nodes.len());
    nodes
}

/// Classify a single line.
pub fn classify(line: &str) -> Node {
    RULES
        .iter()
        .find_map(|rule| (rule.apply)(line))
        .unwrap_or_else(|| paragraph(line))
}

/// Name of the rule that claims `line`, or `"paragraph"` for the fallback.
pub fn matching_rule(line: &str) -> &'static str {
    RULES
        .iter()
        .find(|rule| (rule.apply)(line).is_some())
        .map_or("paragraph", |rule| rule.name)
}

/// Whitespace for blank lines, rules and list markers. The BOM counts,
/// NEXT LINE (U+0085) does not.
fn is_line_space(ch: char) -> bool {
    (ch.is_whitespace() && ch != '\u{85}') || ch == '\u{feff}'
}

fn trim_line(line: &str) -> &str {
    line.trim_matches(is_line_space)
}

/// Strip one marker-space character from the front of `rest`.
fn after_marker_space(rest: &str) -> Option<&str> {
    let mut chars = rest.chars();
    match chars.next() {
        Some(ch) if is_line_space(ch) => Some(chars.as_str()),
        _ => None,
    }
}

fn spacer(line: &str) -> Option<Node> {
    trim_line(line).is_empty().then_some(Node::Spacer)
}

fn heading2(line: &str) -> Option<Node> {
    line.strip_prefix("## ").map(|text| Node::Heading {
        level: 2,
        text: text.to_string(),
    })
}

fn heading3(line: &str) -> Option<Node> {
    line.strip_prefix("### ").map(|text| Node::Heading {
        level: 3,
        text: text.to_string(),
    })
}

/// A line opening with `**` that closes somewhere later. Every `**` in the
/// line is dropped, not just the leading pair.
fn bold_line(line: &str) -> Option<Node> {
    if !line.starts_with("**") {
        return None;
    }
    find_close(line, 0)?;
    Some(Node::BoldLine {
        text: line.replace("**", ""),
    })
}

fn numbered_item(line: &str) -> Option<Node> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let rest = line[digits..].strip_prefix('.')?;
    let body = after_marker_space(rest)?;
    Some(Node::NumberedItem {
        label: line[..=digits].to_string(),
        content: parse_inline(body),
    })
}

fn bullet_item(line: &str) -> Option<Node> {
    let rest = line
        .strip_prefix('-')
        .or_else(|| line.strip_prefix('•'))?;
    let body = after_marker_space(rest)?;
    Some(Node::BulletItem {
        content: parse_inline(body),
    })
}

fn rule(line: &str) -> Option<Node> {
    (trim_line(line) == "---").then_some(Node::Rule)
}

fn paragraph(line: &str) -> Node {
    Node::Paragraph {
        content: parse_inline(line),
    }
}
