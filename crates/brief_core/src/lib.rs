mod config;
mod error;
mod findings;
mod html;
mod inline;
mod node;
mod parser;
mod summary;
mod text;
mod typst;

pub use config::{Config, FontConfig, HtmlConfig, PageConfig, TextConfig};
pub use error::{Error, Result};
pub use findings::{KeyFinding, extract_key_findings};
pub use inline::parse_inline;
pub use node::{Node, Span, spans_text};
pub use parser::{classify, matching_rule};
pub use summary::{DataContext, ExecutiveSummary};

use typst_as_lib::TypstEngine;
use typst_as_lib::typst_kit_options::TypstKitFontOptions;
use typst_pdf::PdfOptions;

/// Render a summary block into display nodes.
///
/// Absent and empty input both give no nodes; otherwise there is exactly
/// one node per `\n`-separated line.
pub fn render(text: Option<&str>) -> Vec<Node> {
    text.map(parser::parse).unwrap_or_default()
}

/// Parse summary text into display nodes.
pub fn parse(text: &str) -> Vec<Node> {
    parser::parse(text)
}

/// Convert summary text to an HTML fragment using default config.
pub fn summary_to_html(summary: &str) -> String {
    summary_to_html_with_config(summary, &Config::compiled_default())
}

/// Convert summary text to an HTML fragment with custom config.
pub fn summary_to_html_with_config(summary: &str, config: &Config) -> String {
    html::nodes_to_html(&parse(summary), &config.html)
}

/// Convert summary text to terminal text using default config.
pub fn summary_to_text(summary: &str) -> String {
    summary_to_text_with_config(summary, &Config::compiled_default())
}

/// Convert summary text to terminal text with custom config.
pub fn summary_to_text_with_config(summary: &str, config: &Config) -> String {
    text::nodes_to_text(&parse(summary), &config.text)
}

/// Convert summary text to Typst markup using default config.
pub fn summary_to_typst(summary: &str) -> String {
    summary_to_typst_with_config(summary, &Config::compiled_default())
}

/// Convert summary text to Typst markup with custom config.
pub fn summary_to_typst_with_config(summary: &str, config: &Config) -> String {
    typst::nodes_to_typst(&parse(summary), config)
}

/// Convert summary text to PDF bytes using default config.
pub fn summary_to_pdf(summary: &str) -> Result<Vec<u8>> {
    summary_to_pdf_with_config(summary, &Config::compiled_default())
}

/// Convert summary text to PDF bytes with custom config.
pub fn summary_to_pdf_with_config(summary: &str, config: &Config) -> Result<Vec<u8>> {
    use typst_library::layout::PagedDocument;

    let typst_content = summary_to_typst_with_config(summary, config);

    let font_options = TypstKitFontOptions::new()
        .include_embedded_fonts(true)
        .include_system_fonts(config.font.system);

    let engine = TypstEngine::builder()
        .main_file(typst_content)
        .search_fonts_with(font_options)
        .build();

    let doc: PagedDocument = engine
        .compile()
        .output
        .map_err(|e| Error::Typst(format!("{:?}", e)))?;

    log::debug!("compiled summary into {} pages", doc.pages.len());

    typst_pdf::pdf(&doc, &PdfOptions::default()).map_err(|e| Error::Pdf(format!("{:?}", e)))
}
