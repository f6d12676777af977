use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Default configuration bundled into the binary
const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub html: HtmlConfig,
    pub text: TextConfig,
    pub page: PageConfig,
    pub font: FontConfig,
}

/// CSS classes applied to each kind of display node
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HtmlConfig {
    pub wrapper: String,
    pub spacer: String,
    pub heading2: String,
    pub heading3: String,
    pub bold_line: String,
    pub numbered: String,
    pub numbered_label: String,
    pub bullet: String,
    pub bullet_marker: String,
    pub rule: String,
    pub paragraph: String,
    pub bold: String,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            wrapper: "markdown-content".to_string(),
            spacer: "h-4".to_string(),
            heading2: "text-2xl font-bold text-slate-800 mt-8 mb-4 flex items-center gap-2"
                .to_string(),
            heading3: "text-xl font-semibold text-slate-700 mt-6 mb-3 flex items-center gap-2"
                .to_string(),
            bold_line: "font-bold text-slate-800 mt-4 mb-2".to_string(),
            numbered: "ml-6 mb-2 text-slate-700".to_string(),
            numbered_label: "font-semibold text-slate-800".to_string(),
            bullet: "ml-6 mb-2 text-slate-700 flex gap-2".to_string(),
            bullet_marker: "text-slate-500".to_string(),
            rule: "my-6 border-slate-200".to_string(),
            paragraph: "text-slate-700 mb-3 leading-relaxed".to_string(),
            bold: "font-semibold text-slate-800".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    pub bullet: String,
    pub rule_char: String,
    pub rule_width: usize,
    pub underline_headings: bool,
    pub ansi_bold: bool,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            bullet: "•".to_string(),
            rule_char: "─".to_string(),
            rule_width: 40,
            underline_headings: true,
            ansi_bold: false,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct PageConfig {
    pub numbers: bool,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub sans: bool,
    /// Search installed fonts as well as the embedded set. Thai text needs this.
    pub system: bool,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            sans: false,
            system: true,
        }
    }
}

impl Config {
    /// The configuration shipped in `default_config.toml`.
    ///
    /// `build.rs` rejects a malformed file, so falling back to the
    /// `Default` impls only happens if the two drift apart in shape.
    pub fn compiled_default() -> Self {
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Load config from `path` when it exists, otherwise the compiled default.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            log::debug!("no config at {}, using defaults", path.display());
            Ok(Self::compiled_default())
        }
    }

    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
