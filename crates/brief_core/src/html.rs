use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::config::HtmlConfig;
use crate::node::{Node, Span};

/// Convert display nodes to an HTML fragment
pub fn nodes_to_html(nodes: &[Node], config: &HtmlConfig) -> String {
    let mut out = String::new();

    out.push_str("<div");
    push_class(&config.wrapper, &mut out);
    out.push_str(">\n");

    for node in nodes {
        emit_node(node, config, &mut out);
        out.push('\n');
    }

    out.push_str("</div>\n");
    out
}

fn push_class(class: &str, out: &mut String) {
    if class.is_empty() {
        return;
    }
    out.push_str(" class=\"");
    out.push_str(&encode_double_quoted_attribute(class));
    out.push('"');
}

fn open(tag: &str, class: &str, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    push_class(class, out);
    out.push('>');
}

fn close(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn emit_node(node: &Node, config: &HtmlConfig, out: &mut String) {
    match node {
        Node::Spacer => {
            open("div", &config.spacer, out);
            close("div", out);
        }
        Node::Heading { level, text } => {
            let (tag, class) = if *level == 2 {
                ("h2", &config.heading2)
            } else {
                ("h3", &config.heading3)
            };
            open(tag, class, out);
            out.push_str(&encode_text(text));
            close(tag, out);
        }
        Node::BoldLine { text } => {
            open("div", &config.bold_line, out);
            out.push_str(&encode_text(text));
            close("div", out);
        }
        Node::NumberedItem { label, content } => {
            open("div", &config.numbered, out);
            open("span", &config.numbered_label, out);
            out.push_str(&encode_text(label));
            close("span", out);
            out.push(' ');
            spans_to_html(content, config, out);
            close("div", out);
        }
        Node::BulletItem { content } => {
            open("div", &config.bullet, out);
            open("span", &config.bullet_marker, out);
            out.push('•');
            close("span", out);
            out.push_str("<span>");
            spans_to_html(content, config, out);
            close("span", out);
            close("div", out);
        }
        Node::Rule => {
            out.push_str("<hr");
            push_class(&config.rule, out);
            out.push_str(" />");
        }
        Node::Paragraph { content } => {
            open("p", &config.paragraph, out);
            spans_to_html(content, config, out);
            close("p", out);
        }
    }
}

fn spans_to_html(spans: &[Span], config: &HtmlConfig, out: &mut String) {
    for span in spans {
        match span {
            Span::Plain(text) => {
                out.push_str("<span>");
                out.push_str(&encode_text(text));
                out.push_str("</span>");
            }
            Span::Bold(text) => {
                open("strong", &config.bold, out);
                out.push_str(&encode_text(text));
                close("strong", out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use pretty_assertions::assert_eq;

    fn bare() -> HtmlConfig {
        HtmlConfig {
            wrapper: String::new(),
            spacer: String::new(),
            heading2: String::new(),
            heading3: String::new(),
            bold_line: String::new(),
            numbered: String::new(),
            numbered_label: String::new(),
            bullet: String::new(),
            bullet_marker: String::new(),
            rule: String::new(),
            paragraph: String::new(),
            bold: String::new(),
        }
    }

    fn render(markdown: &str) -> String {
        nodes_to_html(&parse(markdown), &bare())
    }

    #[test]
    fn empty_input_is_an_empty_wrapper() {
        assert_eq!(render(""), "<div>\n</div>\n");
    }

    #[test]
    fn heading_and_paragraph() {
        assert_eq!(
            render("## Title\nHello **world**"),
            "<div>\n<h2>Title</h2>\n<p><span>Hello </span><strong>world</strong></p>\n</div>\n"
        );
    }

    #[test]
    fn list_items() {
        assert_eq!(
            render("1. One\n- two"),
            "<div>\n<div><span>1.</span> <span>One</span></div>\n\
             <div><span>•</span><span><span>two</span></span></div>\n</div>\n"
        );
    }

    #[test]
    fn spacer_rule_and_bold_line() {
        assert_eq!(
            render("**Note:**\n\n---"),
            "<div>\n<div>Note:</div>\n<div></div>\n<hr />\n</div>\n"
        );
    }

    #[test]
    fn escapes_text() {
        assert_eq!(
            render("a < b & **<c>**"),
            "<div>\n<p><span>a &lt; b &amp; </span><strong>&lt;c&gt;</strong></p>\n</div>\n"
        );
    }

    #[test]
    fn default_classes_follow_dashboard_styles() {
        let html = nodes_to_html(&parse("## Title\n---"), &HtmlConfig::default());
        assert_eq!(
            html,
            "<div class=\"markdown-content\">\n\
             <h2 class=\"text-2xl font-bold text-slate-800 mt-8 mb-4 flex items-center gap-2\">Title</h2>\n\
             <hr class=\"my-6 border-slate-200\" />\n</div>\n"
        );
    }
}
