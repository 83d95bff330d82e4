//! Human readable rendering of slugs, failures and batch reports

use colored::Colorize;
use slugo_core::{BatchItem, BatchSummary, SlugError, SlugOptions};

/// Render a classified slug failure
pub fn format_failure(err: &SlugError) -> String {
    let mut result = String::new();

    result.push_str(&format!("{}: {}\n", "Status".red().bold(), "ValidationError"));
    result.push_str(&format!(
        "{}: Input text validation error. Please check your input.\n",
        "Message".red()
    ));
    result.push_str(&format!(
        "{}: Field: '{}', Value: '{}', Reason: {}",
        "Details".red(),
        err.field,
        err.value,
        err.reason()
    ));

    result
}

/// Render a successfully generated slug
pub fn format_success(slug: &str) -> String {
    format!(
        "{}: {}\n{}: {}",
        "Status".green().bold(),
        "Success",
        "Slug".green(),
        slug.bright_white().bold()
    )
}

/// Render one batch item on a single line (failures span several lines)
pub fn format_item(item: &BatchItem) -> String {
    let label = format!("Line {}:", item.line_number);

    match &item.result {
        Ok(slug) => format!(
            "{} {} -> {}",
            label.yellow(),
            item.original,
            slug.bright_white().bold()
        ),
        Err(err) => format!("{}\n{}", label.yellow(), format_failure(err)),
    }
}

/// Summary table printed after a batch
pub fn summary_table(summary: &BatchSummary) -> prettytable::Table {
    let mut table = crate::prelude::new_table();

    table.add_row(prettytable::row!["Total lines", summary.total]);
    table.add_row(prettytable::row!["Succeeded", summary.succeeded]);
    table.add_row(prettytable::row!["Failed", summary.failed]);

    table
}

/// Describe the active slug options
pub fn format_options(options: &SlugOptions, copy: bool) -> String {
    let mut lines = Vec::new();

    if copy {
        lines.push(format!("{} Clipboard copying enabled", "✓".green()));
    }
    if !options.prefix.is_empty() {
        lines.push(format!("{} Prefix: {}", "✓".green(), options.prefix));
    }
    if !options.suffix.is_empty() {
        lines.push(format!("{} Suffix: {}", "✓".green(), options.suffix));
    }
    if let Some(max_length) = options.max_length {
        lines.push(format!(
            "{} Max length: {} characters",
            "✓".green(),
            max_length
        ));
    }

    lines.join("\n")
}

/// Welcome text shown when the interactive prompt starts
pub fn format_banner(options: &SlugOptions, copy: bool) -> String {
    let mut result = String::new();

    result.push_str(&format!("{}\n", "----- Slugo Slug Generator -----".bright_cyan().bold()));
    result.push_str("Enter text and press Enter.\n");
    result.push_str("Type 'exit' or 'quit' to exit.\n");
    result.push_str(&format!(
        "To read from file: {}\n",
        "slugo --file filename.txt".cyan()
    ));

    let active = format_options(options, copy);
    if !active.is_empty() {
        result.push_str(&active);
        result.push('\n');
    }

    result.push_str(&format!("{}", "--------------------------------".bright_cyan()));

    result
}
