//! kids-kanji-checker CLI - mark kanji above a reader's school grade
//!
//! Usage:
//!   kids-kanji-checker --input-file story.docx --max-year 3
//!   cat story.txt | kids-kanji-checker --stdin --no-color --is-quiet

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use kids_kanji_checker::highlight::{self, TITLE_COLOR};
use kids_kanji_checker::{CheckOptions, Checker, DocumentFormat, GradeTable, RenderMode};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "kids-kanji-checker")]
#[command(version, about = "Mark the kanji a child has not learned yet")]
#[command(group(ArgGroup::new("input").required(true).args(["input_file", "stdin"])))]
struct Cli {
    /// Document to check (.txt, .docx or .odp)
    #[arg(short, long)]
    input_file: Option<PathBuf>,

    /// Read plain text from standard input
    #[arg(long)]
    stdin: bool,

    /// Last school grade whose kanji count as learned (7 for secondary school)
    #[arg(long, default_value_t = kids_kanji_checker::checker::DEFAULT_MAX_YEAR, allow_negative_numbers = true)]
    max_year: i32,

    /// Mark kanji with _x_ instead of color
    #[arg(long)]
    no_color: bool,

    /// Input type (txt, docx or odp), detected from the extension by default
    #[arg(long, alias = "fileType")]
    file_type: Option<String>,

    /// Do not print the title banner
    #[arg(long)]
    is_quiet: bool,

    /// JSON grade table to use instead of the built-in one
    #[arg(long)]
    grades: Option<PathBuf>,

    /// Print debug logs to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if !cli.is_quiet {
        highlight::paint(
            &mut out,
            TITLE_COLOR,
            highlight::title_banner("kids-kanji-checker"),
        )?;
    }

    let options = CheckOptions {
        max_year: cli.max_year,
        mode: if cli.no_color {
            RenderMode::BracketMarker
        } else {
            RenderMode::ColorHighlight
        },
    };

    let checker = match &cli.grades {
        Some(path) => {
            let table = GradeTable::from_path(path)
                .with_context(|| format!("loading grade table {}", path.display()))?;
            Checker::with_table(&table, options)
        }
        None => Checker::new(options),
    };

    let file_type = cli
        .file_type
        .as_deref()
        .map(str::parse::<DocumentFormat>)
        .transpose()?;

    if cli.stdin {
        debug!("input file is stdin");
        if matches!(file_type, Some(f) if f != DocumentFormat::Text) {
            anyhow::bail!("only plain text can be read from stdin");
        }
        checker.check_text(io::stdin().lock(), &mut out)?;
    } else if let Some(path) = &cli.input_file {
        checker
            .check_path(path, file_type, &mut out)
            .with_context(|| format!("checking {}", path.display()))?;
    }

    out.flush()?;
    Ok(())
}
