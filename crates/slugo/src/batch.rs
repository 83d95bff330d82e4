use crate::prelude::{println, *};
use slugo_core::{BatchEngine, BatchItem, BatchReport, PartialBatch, SlugOptions};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::ops::ControlFlow;
use std::path::Path;

/// Slugify every line of the file at `path`
pub fn run_file(path: &Path, options: SlugOptions, global: &crate::Global) -> Result<()> {
    let file =
        File::open(path).with_context(|| format!("Failed to open file '{}'", path.display()))?;
    log::info!("reading lines from {}", path.display());

    run(BufReader::new(file).lines(), options, global)
}

/// Slugify every line piped on stdin
pub fn run_stdin(options: SlugOptions, global: &crate::Global) -> Result<()> {
    log::info!("reading lines from stdin");

    run(io::stdin().lock().lines(), options, global)
}

fn run<I>(lines: I, options: SlugOptions, global: &crate::Global) -> Result<()>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    let engine = BatchEngine::with_options(options);

    let (report, fault) = if global.json {
        let (report, fault) = collect(&engine, lines);
        println!(
            "{}",
            serde_json::to_string_pretty(&report)
                .map_err(|e| eyre!("JSON serialization failed: {}", e))?
        );
        (report, fault)
    } else {
        let (report, fault) = stream(&engine, lines);
        println!();
        println!("--- Summary ---");
        crate::output::summary_table(&report.summary()).printstd();
        (report, fault)
    };

    if global.copy {
        let slugs: Vec<&str> = report.slugs().collect();
        crate::clipboard::copy_slugs(&slugs);
    }

    if let Some(fault) = fault {
        log::warn!("line source failed after {} item(s)", report.total());
        return Err(fault).context("Input could not be read to the end");
    }

    Ok(())
}

/// Run the whole batch, keeping partial results if the source fails
fn collect<I>(engine: &BatchEngine, lines: I) -> (BatchReport, Option<slugo_core::Error>)
where
    I: IntoIterator<Item = io::Result<String>>,
{
    match engine.process(lines) {
        Ok(report) => (report, None),
        Err(PartialBatch { report, source }) => (report, Some(source)),
    }
}

/// Print each item as soon as it is produced
fn stream<I>(engine: &BatchEngine, lines: I) -> (BatchReport, Option<slugo_core::Error>)
where
    I: IntoIterator<Item = io::Result<String>>,
{
    let mut items: Vec<BatchItem> = Vec::new();

    let outcome = engine.process_with_callback(lines, |item| {
        println!("{}", crate::output::format_item(&item));
        items.push(item);
        ControlFlow::Continue(())
    });

    (items.into_iter().collect(), outcome.err())
}
