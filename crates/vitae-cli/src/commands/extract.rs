//! Extract command implementation.

use crate::batch::{collect_inputs, process_batch};
use crate::cli::ExtractArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use crate::summary::BatchSummary;
use std::fs;
use tracing::info;
use vitae_extractor::Extractor;

/// Execute the extract command.
pub fn execute_extract(args: ExtractArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let extractor = Extractor::new(config.extractor.clone())?;

    let files = collect_inputs(&args.paths, args.recursive)?;
    if files.is_empty() {
        eprintln!("{}", formatter.warning("No .txt files found"));
        return Ok(());
    }
    info!("Processing {} document(s)", files.len());

    let results = process_batch(&extractor, &files);
    let rendered = formatter.format_results(&results)?;
    let rendered = rendered.trim_end_matches('\n');
    match &args.output {
        Some(path) => {
            fs::write(path, format!("{}\n", rendered))?;
            eprintln!(
                "{}",
                formatter.success(&format!("Wrote {} row(s) to {}", results.len(), path.display()))
            );
        }
        None => println!("{}", rendered),
    }

    let summary = BatchSummary::from_results(&results);
    if args.summary {
        eprintln!();
        eprintln!("{}", formatter.heading("Summary"));
        eprintln!("{}", summary);
    }
    if !summary.failures.is_empty() {
        eprintln!(
            "{}",
            formatter.warning(&format!("{} document(s) could not be read", summary.failures.len()))
        );
    }

    Ok(())
}
