use clap::Parser;

/// Command-line surface of the `jobkit` binary.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "jobkit")]
#[command(version)]
#[command(about = "Run a registered data-processing job")]
pub struct Cli {
    /// Name of the job to run (e.g. `word`)
    #[arg(long = "job", value_name = "NAME", required_unless_present = "list_jobs")]
    pub job: Option<String>,

    /// Extra arguments for the job, as key=value pairs
    /// Example: --job-args template=manual-email foo=bar
    #[arg(long = "job-args", value_name = "KEY=VALUE", num_args = 0..)]
    pub job_args: Vec<String>,

    /// Print the registered job names and exit
    #[arg(long, conflicts_with_all = ["job", "job_args"])]
    pub list_jobs: bool,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
