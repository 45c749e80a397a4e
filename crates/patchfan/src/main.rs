//! patchfan CLI
//!
//! Thin argument-parsing layer over the diff pipeline: validates the commit
//! range, sets up logging, runs one diff-and-patch pass and decides the exit
//! code. All actual work lives in `patchfan-diff`.

use std::path::PathBuf;

use clap::Parser;
use patchfan_core::{init_logging, CommitRange, LogTarget, PatchOptions, RunConfig};
use patchfan_diff::Error;
use tracing::error;

#[derive(Debug, Parser)]
#[command(
    name = "patchfan",
    version,
    about = "Fan a git commit range out into one patch file per changed path"
)]
struct Cli {
    /// Directory of the git repository
    #[arg(short = 'r', long = "repository", value_name = "DIR", default_value = ".")]
    repository: PathBuf,

    /// Commit range to diff, as OLD..NEW
    #[arg(short = 'c', long = "commits", value_name = "RANGE")]
    commits: String,

    /// Compute patches without writing them to disk
    #[arg(short = 'd', long = "dry-run")]
    dry_run: bool,

    /// Directory for patch files, defaults to the repository directory
    #[arg(short = 'o', long = "output", value_name = "DIR")]
    output: Option<PathBuf>,

    /// Log progress, optionally to a file (--log=FILE)
    #[arg(short = 'l', long = "log", value_name = "FILE", num_args = 0..=1)]
    log: Option<Option<PathBuf>>,

    /// Context lines around each hunk in the generated patches
    #[arg(long = "context", value_name = "N", default_value_t = 3)]
    context: usize,

    /// Bound diff computation time per file, in seconds
    #[arg(long = "diff-timeout", value_name = "SECS")]
    diff_timeout: Option<u64>,
}

impl Cli {
    fn log_target(&self) -> LogTarget {
        match &self.log {
            None => LogTarget::Disabled,
            Some(None) => LogTarget::Stderr,
            Some(Some(path)) => LogTarget::File(path.clone()),
        }
    }
}

fn fatal(err: Error) -> ! {
    error!(error = %err, "run aborted");
    eprintln!("Error: {err}");
    std::process::exit(err.exit_code());
}

fn main() {
    let cli = Cli::parse();
    let _log_guard = init_logging(&cli.log_target());

    let range: CommitRange = match cli.commits.parse() {
        Ok(range) => range,
        Err(e) => fatal(Error::from(e)),
    };

    let mut config = RunConfig::new(cli.repository, range);
    config.output_dir = cli.output;
    config.dry_run = cli.dry_run;
    config.patch = PatchOptions {
        context_lines: cli.context,
        timeout: cli.diff_timeout.map(std::time::Duration::from_secs),
    };

    let report = match patchfan_diff::run(&config) {
        Ok(report) => report,
        Err(e) => fatal(e),
    };

    if cli.dry_run {
        println!(
            "dry run: {} patch file(s) would be written",
            report.written.len()
        );
    } else {
        println!("wrote {} patch file(s)", report.written.len());
    }

    if !report.skipped.is_empty() {
        eprintln!("skipped {} file(s):", report.skipped.len());
        for skip in &report.skipped {
            eprintln!("  {}: {}", skip.new_path, skip.reason);
        }
    }
}
