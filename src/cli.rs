// src/cli.rs
use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::eyre::{bail, eyre, Result, WrapErr};
use tracing_subscriber::EnvFilter;

use crate::{
    config::{
        consts::{DEFAULT_OUT_DIR, ENTRY_URL, SCRIPT_MARKER, SCRIPT_URL},
        options::{RunOptions, ScriptSource, WritePolicy},
    },
    core::HttpFetcher,
    error::WriteError,
    file::today_prefix,
    progress::Progress,
    runner,
    specs::tables::{PositionTable, REVISIONS},
};

/// Snapshot the JSON datasets embedded in the Georgia DPH COVID-19 dashboard.
#[derive(Debug, Parser)]
#[command(name = "ga_dph_scrape", version, about)]
pub struct Args {
    /// Script bundle URL, or the entry page URL with --resolve
    #[arg(long)]
    pub url: Option<String>,

    /// Find the bundle by scanning the entry page's <script> tags
    #[arg(long)]
    pub resolve: bool,

    /// Substring a <script src> must contain to be picked (with --resolve)
    #[arg(long, default_value = SCRIPT_MARKER)]
    pub marker: String,

    /// Output directory
    #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
    pub out: PathBuf,

    /// Filename prefix, e.g. "2020-09-15-"
    #[arg(long, conflicts_with = "date_prefix")]
    pub prefix: Option<String>,

    /// Use today's date (YYYY-MM-DD-) as the prefix
    #[arg(long)]
    pub date_prefix: bool,

    /// Built-in position table revision (default: newest)
    #[arg(long, conflicts_with = "table_file")]
    pub revision: Option<String>,

    /// Custom position table: one dataset name per line
    #[arg(long)]
    pub table_file: Option<PathBuf>,

    /// Keep writing the remaining artifacts when one fails
    #[arg(long)]
    pub keep_going: bool,

    /// Print the position table and exit
    #[arg(long)]
    pub list_datasets: bool,
}

impl Args {
    pub fn table(&self) -> Result<PositionTable> {
        if let Some(path) = &self.table_file {
            return PositionTable::load(path)
                .wrap_err_with(|| format!("reading position table {}", path.display()));
        }
        match &self.revision {
            None => Ok(PositionTable::latest()),
            Some(tag) => PositionTable::revision(tag).ok_or_else(|| {
                let known: Vec<&str> = REVISIONS.iter().map(|(rev, _)| *rev).collect();
                eyre!("unknown revision {tag} (known: {})", known.join(", "))
            }),
        }
    }

    pub fn source(&self) -> ScriptSource {
        if self.resolve {
            ScriptSource::Resolved {
                entry_url: self.url.clone().unwrap_or_else(|| ENTRY_URL.to_string()),
                marker: self.marker.clone(),
            }
        } else {
            ScriptSource::Fixed(self.url.clone().unwrap_or_else(|| SCRIPT_URL.to_string()))
        }
    }

    pub fn to_options(&self) -> Result<RunOptions> {
        let prefix = if self.date_prefix {
            today_prefix()
        } else {
            self.prefix.clone().unwrap_or_default()
        };
        let policy = if self.keep_going { WritePolicy::Continue } else { WritePolicy::Abort };

        Ok(RunOptions::default()
            .with_source(self.source())
            .with_out_dir(&self.out)
            .with_prefix(prefix)
            .with_table(self.table()?)
            .with_write_policy(policy))
    }
}

/// Prints one line per artifact.
struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn stage(&mut self, name: &str, detail: &str) {
        eprintln!("[{name}] {detail}");
    }
    fn item_done(&mut self, index: usize, name: &str, path: &Path) {
        println!("{index:02} {name} -> {}", path.display());
    }
    fn item_failed(&mut self, err: &WriteError) {
        eprintln!("FAILED {err}");
    }
    fn finish(&mut self, written: usize) {
        eprintln!("Wrote {written} artifact(s)");
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("ga_dph_scrape=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn run() -> Result<()> {
    run_with(Args::parse())
}

pub fn run_with(args: Args) -> Result<()> {
    init_tracing();
    let options = args.to_options()?;

    if args.list_datasets {
        let table = &options.export.table;
        println!("# revision {}", table.revision_tag());
        for (index, name) in table.describe() {
            println!("{index:02},{name}");
        }
        return Ok(());
    }

    let fetcher = HttpFetcher::new()?;
    let mut progress = ConsoleProgress;
    let summary = runner::run(&fetcher, &options, Some(&mut progress))?;

    if !summary.is_complete() {
        for err in &summary.failed {
            eprintln!("  {err}");
        }
        bail!(
            "{} of {} artifact(s) could not be written",
            summary.failed.len(),
            summary.failed.len() + summary.written.len()
        );
    }
    Ok(())
}
