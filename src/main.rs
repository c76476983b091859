// Entry point: one batch run from CSV to dashboard JSON.
//
// The run either completes and prints a short summary, or fails before the
// output file is written and exits with status 1.
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use umkm_dss::{logging, output, pipeline};

#[derive(Parser, Debug)]
#[command(name = "umkm-dss", version, about = "Build the UMKM dashboard document from a CSV dataset")]
struct Cli {
    /// Input CSV with one row per kecamatan.
    #[arg(long, default_value = "dataset_umkm_jabar_1000rows.csv")]
    input: PathBuf,
    /// Where the JSON document is written (overwritten on every run).
    #[arg(long, default_value = "src/data/umkm-dashboard.json")]
    output: PathBuf,
    /// Value for `meta.sumber`; defaults to the input file name.
    #[arg(long)]
    source_name: Option<String>,
    /// Print Markdown tables of the priority regions and DSS alternatives.
    #[arg(long)]
    preview: bool,
    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run(cli: &Cli) -> Result<()> {
    let source = cli
        .source_name
        .clone()
        .unwrap_or_else(|| pipeline::default_source_name(&cli.input));
    let summary = pipeline::run(&cli.input, &cli.output, &source)
        .with_context(|| format!("failed to build dashboard from {}", cli.input.display()))?;

    output::print_summary(&cli.output, &summary);
    if cli.preview {
        output::print_preview(&summary);
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
