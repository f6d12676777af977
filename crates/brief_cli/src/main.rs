use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use brief_core::{Config, ExecutiveSummary};
use clap::{Parser, ValueEnum};
use thiserror::Error;

/// Config picked up from the working directory when `--config` is absent
const LOCAL_CONFIG: &str = "brief.toml";
/// PDF file name used when reading from stdin
const STDIN_PDF: &str = "summary.pdf";

#[derive(Parser)]
#[command(name = "brief")]
#[command(about = "Render executive summaries to HTML, text, Typst or PDF")]
struct Cli {
    /// Input summary file, or `-` for stdin
    input: PathBuf,

    /// Output file (PDF defaults to input name with .pdf extension, others to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Html)]
    format: Format,

    /// Config file (defaults to ./brief.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Treat input as an executive-summary JSON payload from the insights API
    #[arg(long)]
    payload: bool,

    /// Print the key findings as JSON instead of rendering the summary
    #[arg(long)]
    findings: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Html,
    Text,
    Typst,
    Pdf,
    Json,
}

fn main() {
    // RUST_LOG overrides the default level
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        log::error!("{e}");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] brief_core::Error),
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let input = read_input(&cli.input)?;
    let config = load_config(cli.config.as_deref())?;

    let (summary, payload) = if cli.payload {
        let payload = ExecutiveSummary::from_json(&input)?;
        (payload.renderable_text()?.to_string(), Some(payload))
    } else {
        (input, None)
    };

    if cli.findings {
        let findings = match &payload {
            Some(payload) => payload.findings(),
            None => brief_core::extract_key_findings(&summary),
        };
        let json = serde_json::to_string_pretty(&findings)?;
        return write_output(cli.output.as_deref(), format!("{json}\n").as_bytes());
    }

    let rendered = match cli.format {
        Format::Html => brief_core::summary_to_html_with_config(&summary, &config).into_bytes(),
        Format::Text => brief_core::summary_to_text_with_config(&summary, &config).into_bytes(),
        Format::Typst => brief_core::summary_to_typst_with_config(&summary, &config).into_bytes(),
        Format::Json => {
            let nodes = brief_core::parse(&summary);
            format!("{}\n", serde_json::to_string_pretty(&nodes)?).into_bytes()
        }
        Format::Pdf => {
            let pdf_bytes = brief_core::summary_to_pdf_with_config(&summary, &config)?;
            let output = cli
                .output
                .clone()
                .unwrap_or_else(|| default_pdf_path(&cli.input));
            fs::write(&output, pdf_bytes).map_err(|source| CliError::Write {
                path: output.clone(),
                source,
            })?;
            println!("Created {}", output.display());
            return Ok(());
        }
    };

    write_output(cli.output.as_deref(), &rendered)
}

fn read_input(path: &Path) -> Result<String, CliError> {
    let result = if is_stdin(path) {
        let mut content = String::new();
        io::stdin().read_to_string(&mut content).map(|_| content)
    } else {
        fs::read_to_string(path)
    };
    result.map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn load_config(path: Option<&Path>) -> brief_core::Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => Config::load_or_default(Path::new(LOCAL_CONFIG)),
    }
}

fn write_output(path: Option<&Path>, bytes: &[u8]) -> Result<(), CliError> {
    match path {
        Some(path) => {
            fs::write(path, bytes).map_err(|source| CliError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            log::info!("wrote {}", path.display());
        }
        None => io::stdout()
            .write_all(bytes)
            .map_err(|source| CliError::Write {
                path: PathBuf::from("<stdout>"),
                source,
            })?,
    }
    Ok(())
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn default_pdf_path(input: &Path) -> PathBuf {
    if is_stdin(input) {
        PathBuf::from(STDIN_PDF)
    } else {
        input.with_extension("pdf")
    }
}
