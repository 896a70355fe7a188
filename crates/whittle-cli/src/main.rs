//! CLI entry point for whittle.
//!
//! This module is intentionally thin: it handles argument parsing, file I/O,
//! and exit codes. All filtering logic lives in the `whittle-app` crate.

use std::fs::File;
use std::io::{self, BufReader, BufWriter};

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Parser;
use whittle_app::{render_summary, run_filter, FilterOutput};
use whittle_domain::policy::{Policy, DEFAULT_MIN_LENGTH};

#[derive(Parser, Debug)]
#[command(
    name = "whittle",
    version,
    about = "Refine large password wordlists against a policy"
)]
struct Cli {
    /// Minimum password length.
    #[arg(short = 'm', long, default_value_t = DEFAULT_MIN_LENGTH)]
    minimum_length: usize,

    /// Maximum password length (must not be below the minimum).
    #[arg(short = 'M', long)]
    maximum_length: Option<usize>,

    /// Enforce the password-complexity categories rule.
    #[arg(short = 'c', long)]
    complexity_check: bool,

    /// Account name(s) rejected as case-insensitive substrings.
    #[arg(long, value_name = "NAME", num_args = 1..)]
    account_name: Vec<String>,

    /// Display name(s); tokens of three or more characters are rejected as
    /// case-insensitive substrings.
    #[arg(long, value_name = "NAME", num_args = 1..)]
    display_name: Vec<String>,

    /// Path to the wordlist to filter.
    #[arg(short = 'w', long)]
    wordlist: Utf8PathBuf,

    /// Destination for accepted passwords (stdout when omitted).
    #[arg(short = 'o', long)]
    output: Option<Utf8PathBuf>,

    /// Print run statistics to stderr.
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let policy = Policy::new(
        cli.minimum_length,
        cli.maximum_length,
        cli.complexity_check,
        cli.account_name,
        cli.display_name,
    )
    .context("invalid policy")?;

    let file = File::open(&cli.wordlist)
        .with_context(|| format!("open wordlist {}", cli.wordlist))?;
    let reader = BufReader::new(file);

    let output: FilterOutput = match &cli.output {
        Some(path) => {
            let sink = File::create(path).with_context(|| format!("create output {path}"))?;
            run_filter(reader, BufWriter::new(sink), &policy)?
        }
        None => {
            let stdout = io::stdout();
            run_filter(reader, BufWriter::new(stdout.lock()), &policy)?
        }
    };

    if cli.verbose {
        eprintln!("{}", render_summary(&output));
    }
    Ok(())
}
