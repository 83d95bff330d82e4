use crate::prelude::{eprintln, *};
use clap::Parser;
use slugo_core::SlugOptions;
use std::io::IsTerminal;
use std::path::PathBuf;

mod batch;
mod clipboard;
mod error;
mod input;
mod interactive;
mod output;
mod prelude;
mod single;

use input::InputMode;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Convert text into URL-safe slugs. Pass the text as arguments, read lines \
                  from a file with --file, pipe lines on stdin, or run without input for an \
                  interactive prompt."
)]
pub struct App {
    /// Text to convert. Multiple words are joined with a space.
    #[arg(value_name = "TEXT", conflicts_with = "file")]
    pub text: Vec<String>,

    /// File to read from, one text per line
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    #[clap(flatten)]
    slug: SlugArgs,

    #[clap(flatten)]
    global: Global,
}

/// Decoration applied to every generated slug
#[derive(Debug, Clone, clap::Args)]
pub struct SlugArgs {
    /// Add prefix to slug (e.g., blog-)
    #[arg(long, env = "SLUGO_PREFIX", default_value = "", allow_hyphen_values = true)]
    pub prefix: String,

    /// Add suffix to slug (e.g., -v2)
    #[arg(long, env = "SLUGO_SUFFIX", default_value = "", allow_hyphen_values = true)]
    pub suffix: String,

    /// Maximum slug length (0 = unlimited)
    #[arg(long, env = "SLUGO_MAX_LENGTH", default_value_t = 0)]
    pub max_length: usize,
}

impl From<&SlugArgs> for SlugOptions {
    fn from(args: &SlugArgs) -> Self {
        SlugOptions::new()
            .prefix(&args.prefix)
            .suffix(&args.suffix)
            .max_length(args.max_length)
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Copy result to clipboard
    #[arg(short = 'c', long = "copy", env = "SLUGO_COPY")]
    pub copy: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Whether to display additional information.
    #[arg(short, long, env = "SLUGO_VERBOSE")]
    pub verbose: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();
    let options = SlugOptions::from(&app.slug);

    let mode = InputMode::detect(
        &app.text,
        app.file.as_deref(),
        std::io::stdin().is_terminal(),
    );
    log::debug!("input mode: {:?}", mode);

    if app.global.verbose && !matches!(mode, InputMode::Interactive) {
        eprintln!("{}", output::format_options(&options, app.global.copy));
    }

    match mode {
        InputMode::Single(text) => single::run(&text, &options, &app.global),
        InputMode::File(path) => batch::run_file(&path, options, &app.global),
        InputMode::Stdin => batch::run_stdin(options, &app.global),
        InputMode::Interactive => interactive::run(&options, &app.global),
    }
}
