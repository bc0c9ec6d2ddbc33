use std::fs;
use std::path::PathBuf;

use colored::Colorize;

use crate::error::{SheetError, SheetResult};
use crate::excel::{self, SourceWorkbook};
use crate::types::NormalizedRow;
use crate::vendor::Vendor;

/// Execute the compile command: resolve the input list, run each
/// recognized vendor file through its extractor, and write the aggregated
/// master sheet.
pub fn compile(output: PathBuf, infiles: Vec<PathBuf>, verbose: bool) -> SheetResult<()> {
    println!(
        "{}",
        "📋 Mastersheet - compiling vendor price lists".bold().green()
    );
    println!("   Output: {}\n", output.display());

    let files = resolve_inputs(&infiles)?;
    if verbose {
        println!("   {} input file(s) after expansion\n", files.len());
    }

    let mut rows: Vec<NormalizedRow> = Vec::new();
    for path in &files {
        let Some(vendor) = Vendor::classify(path) else {
            // Not a known vendor's list; leave it alone.
            continue;
        };
        println!("Processing {} file: {}", vendor, path.display());

        let mut book = SourceWorkbook::open(path)?;
        let extracted = vendor.extract(&mut book)?;
        if verbose {
            println!("   {} row(s)", extracted.len());
        }
        rows.extend(extracted);
    }

    let saved = excel::write_master(&output, &rows)?;
    println!();
    if saved {
        println!("{}", "✅ Master sheet written".bold().green());
        println!("   {} rows: {}", rows.len(), output.display());
    } else {
        println!(
            "{}",
            "⚠️  No rows extracted - master sheet not written".yellow()
        );
    }

    Ok(())
}

/// Expand the raw CLI paths into the ordered, deduplicated list of
/// workbooks to process. Directories contribute their immediate `*.xlsx`
/// children in name order; a path that does not exist aborts the run.
fn resolve_inputs(infiles: &[PathBuf]) -> SheetResult<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = Vec::new();
    for path in infiles {
        if !path.exists() {
            return Err(SheetError::InputNotFound(path.clone()));
        }
        if path.is_dir() {
            let mut children: Vec<PathBuf> = fs::read_dir(path)?
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|p| {
                    p.is_file() && p.extension().map_or(false, |ext| ext == "xlsx")
                })
                .collect();
            children.sort();
            for child in children {
                if !files.contains(&child) {
                    files.push(child);
                }
            }
        } else if !files.contains(path) {
            files.push(path.clone());
        }
    }
    Ok(files)
}
