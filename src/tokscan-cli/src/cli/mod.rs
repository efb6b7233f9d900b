// tokscan-cli/src/cli/mod.rs

//! Command-line surface: prompt, scan standard input, print a summary.

mod report;

pub use report::{ErrorReport, Report};

use anyhow::{Context, Result};
use clap::builder::RangedU64ValueParser;
use clap::{Parser, ValueEnum};
use log::{debug, info};
use std::io::{BufRead, Write};
use tokscan::scanner::DEFAULT_MAX_TOKEN_LEN;
use tokscan::{Destination, ScanOptions, Scanner};

pub const DEFAULT_PROMPT: &str = "Enter two strings separated by a space";

/// Upper bound for `--count`; every slot is allocated before reading.
pub const MAX_COUNT: u64 = 4096;

#[derive(Parser, Debug, Clone)]
#[command(name = "tokscan")]
#[command(about = "Read whitespace-separated strings from standard input", long_about = None)]
#[command(version = env!("TOKSCAN_CLI_VERSION"))]
pub struct Cli {
    /// Number of strings to read
    #[arg(
        short = 'n',
        long,
        env = "TOKSCAN_COUNT",
        default_value_t = 2,
        value_parser = RangedU64ValueParser::<usize>::new().range(0..=MAX_COUNT)
    )]
    pub count: usize,

    /// Text printed before reading
    #[arg(long, env = "TOKSCAN_PROMPT", default_value = DEFAULT_PROMPT)]
    pub prompt: String,

    /// Do not print the prompt
    #[arg(long)]
    pub no_prompt: bool,

    /// Read all strings from a single line; a newline ends the input
    #[arg(short, long)]
    pub line: bool,

    /// Reject tokens longer than this many bytes
    #[arg(
        long,
        value_name = "BYTES",
        env = "TOKSCAN_MAX_TOKEN_LEN",
        default_value_t = DEFAULT_MAX_TOKEN_LEN
    )]
    pub max_token_len: usize,

    /// Output format for the summary
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `Number of args: N String 1: ...`
    Text,
    /// One JSON object; implies --no-prompt
    Json,
}

impl Cli {
    fn shows_prompt(&self) -> bool {
        !self.no_prompt && self.format == OutputFormat::Text
    }
}

/// Prompt on `out`, fill `cli.count` strings from `input` and print the report.
///
/// Scan failures are part of the returned [`Report`]; only failures to write
/// the output are returned as errors.
pub fn run<R, W, E>(cli: &Cli, input: R, out: &mut W, err: &mut E) -> Result<Report>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    if cli.shows_prompt() {
        writeln!(out, "{}", cli.prompt).context("Failed to write prompt")?;
        out.flush().context("Failed to flush prompt")?;
    }

    let options = ScanOptions::new().with_max_token_len(cli.max_token_len);
    let mut scanner = Scanner::with_options(input, options);
    let mut values = vec![String::new(); cli.count];

    debug!(
        "reading {} string(s) in {} mode",
        cli.count,
        if cli.line { "line" } else { "word" }
    );

    let outcome = {
        let mut slots: Vec<&mut dyn Destination> = values
            .iter_mut()
            .map(|v| v as &mut dyn Destination)
            .collect();
        if cli.line {
            scanner.scan_line(&mut slots)
        } else {
            scanner.scan(&mut slots)
        }
    };
    info!("filled {} of {} slot(s)", outcome.filled, cli.count);

    let report = Report::new(values, outcome);
    match cli.format {
        OutputFormat::Text => {
            if let Some(error) = &report.error {
                writeln!(err, "{}", error.message).context("Failed to write error")?;
            }
            writeln!(out, "{}", report.summary_line()).context("Failed to write summary")?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &report)
                .context("Failed to serialize report")?;
            writeln!(out).context("Failed to write summary")?;
        }
    }

    Ok(report)
}
