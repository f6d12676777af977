use crate::node::Span;

const DELIMITER: &str = "**";

/// A bold pair never spans one of these
fn is_line_terminator(ch: char) -> bool {
    matches!(ch, '\r' | '\u{2028}' | '\u{2029}')
}

/// End of the terminator-free run starting at `from`
fn segment_end(text: &str, from: usize) -> usize {
    text[from..]
        .find(is_line_terminator)
        .map_or(text.len(), |offset| from + offset)
}

/// Byte offset of the delimiter closing the one opened at `open`.
pub(crate) fn find_close(text: &str, open: usize) -> Option<usize> {
    let start = open + DELIMITER.len();
    let end = segment_end(text, start);
    text[start..end]
        .find(DELIMITER)
        .map(|offset| start + offset)
}

/// Split a line body into plain and bold runs.
///
/// Delimiters pair up left to right with the shortest match. An opener
/// without a partner is left in the plain text untouched.
pub fn parse_inline(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    // Everything before `emitted` already belongs to a span
    let mut emitted = 0;
    let mut cursor = 0;

    while let Some(offset) = text[cursor..].find(DELIMITER) {
        let open = cursor + offset;
        match find_close(text, open) {
            Some(close) => {
                if open > emitted {
                    spans.push(Span::Plain(text[emitted..open].to_string()));
                }
                spans.push(Span::Bold(
                    text[open + DELIMITER.len()..close].to_string(),
                ));
                emitted = close + DELIMITER.len();
                cursor = emitted;
            }
            None => {
                // No opener in this run can close; resume past the terminator
                let end = segment_end(text, open + DELIMITER.len());
                if end == text.len() {
                    break;
                }
                cursor = end;
            }
        }
    }

    if emitted < text.len() {
        spans.push(Span::Plain(text[emitted..].to_string()));
    }

    spans
}
