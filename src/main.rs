use clap::Parser;
use mastersheet::cli;
use mastersheet::error::SheetResult;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mastersheet")]
#[command(about = "Compile vendor price-list workbooks into one master sheet")]
#[command(long_about = "Mastersheet - vendor price-list consolidation

Reads per-vendor .xlsx price lists and writes a single normalized sheet:
  Manufacturer | Type | Part Number | Description | List Price

VENDORS (matched by filename substring):
  aruba, cradlepoint, fortinet, meraki, snapav

INPUTS:
  Files are processed in the order given. Directories contribute their
  immediate *.xlsx children. Files matching no known vendor are skipped.

EXAMPLES:
  mastersheet pricelists/
  mastersheet -o q3_master.xlsx aruba_2024.xlsx meraki_report.xlsx")]
#[command(version)]
struct Cli {
    /// Path to the output master workbook
    #[arg(short, long, default_value = "master.xlsx")]
    output: PathBuf,

    /// Input price-list files, or directories of .xlsx files
    #[arg(required = true)]
    infiles: Vec<PathBuf>,

    /// Show per-file row counts
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> SheetResult<()> {
    let cli = Cli::parse();
    cli::compile(cli.output, cli.infiles, cli.verbose)
}
