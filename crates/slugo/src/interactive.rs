use crate::prelude::{println, *};
use slugo_core::{slugify_with_options, SlugError, SlugOptions};
use std::io::{self, BufRead, Write};

/// What to do with one line typed at the prompt
#[derive(Debug, PartialEq, Eq)]
pub enum Prompt {
    Exit,
    Slug(Result<String, SlugError>),
}

/// Interpret one line of user input
pub fn evaluate(line: &str, options: &SlugOptions) -> Prompt {
    let input = line.trim();

    if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
        return Prompt::Exit;
    }

    Prompt::Slug(slugify_with_options(input, options))
}

/// Prompt for text until the user exits or stdin closes
pub fn run(options: &SlugOptions, global: &crate::Global) -> Result<()> {
    println!("{}", crate::output::format_banner(options, global.copy));

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();

    loop {
        anstream::print!("Enter text: ");
        io::stdout().flush().context("Failed to flush stdout")?;

        line.clear();
        if input.read_line(&mut line).context("Failed to read input")? == 0 {
            log::debug!("stdin closed");
            println!();
            break;
        }

        match evaluate(&line, options) {
            Prompt::Exit => {
                println!("Exiting. Goodbye!");
                break;
            }
            Prompt::Slug(Ok(slug)) => {
                println!("{}\n", crate::output::format_success(&slug));

                if global.copy {
                    crate::clipboard::copy_slugs(&[slug.as_str()]);
                }
            }
            Prompt::Slug(Err(err)) => {
                println!("{}\n", crate::output::format_failure(&err));
            }
        }
    }

    Ok(())
}
