use crate::prelude::{println, *};
use slugo_core::{slugify_with_options, SlugError, SlugOptions};

/// JSON shape for a single conversion
#[derive(Debug, serde::Serialize)]
struct SingleOutput<'a> {
    input: &'a str,
    slug: Option<&'a str>,
    error: Option<&'a SlugError>,
}

fn format_json(input: &str, result: &Result<String, SlugError>) -> Result<String> {
    let output = SingleOutput {
        input,
        slug: result.as_deref().ok(),
        error: result.as_ref().err(),
    };

    serde_json::to_string_pretty(&output).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

/// Convert one text given on the command line
pub fn run(text: &str, options: &SlugOptions, global: &crate::Global) -> Result<()> {
    let result = slugify_with_options(text, options);

    if global.json {
        println!("{}", format_json(text, &result)?);
    }

    let slug = result.wrap_err("Could not generate a slug")?;

    if !global.json {
        println!("{}", slug);
    }

    if global.copy {
        crate::clipboard::copy_slugs(&[slug.as_str()]);
    }

    Ok(())
}
