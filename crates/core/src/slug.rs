//! Text to slug transformation
//!
//! Pure functions that turn arbitrary text into a lowercase, ASCII-only,
//! hyphen-separated slug. Character handling is done in a single pass with
//! explicit predicates instead of pattern matching.

use crate::error::{FailureKind, SlugError};

/// Field name reported in failures raised by `slugify`
pub const TEXT_FIELD: &str = "text";

/// Decoration applied around a generated slug
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlugOptions {
    /// Inserted verbatim before the slug
    pub prefix: String,
    /// Inserted verbatim after the slug
    pub suffix: String,
    /// Hard limit on the final length in characters. `None` or `Some(0)` means unlimited.
    pub max_length: Option<usize>,
}

impl SlugOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = (max_length > 0).then_some(max_length);
        self
    }

    /// True when the options leave a slug untouched
    pub fn is_plain(&self) -> bool {
        self.prefix.is_empty() && self.suffix.is_empty() && self.limit().is_none()
    }

    fn limit(&self) -> Option<usize> {
        self.max_length.filter(|n| *n > 0)
    }
}

/// Map one of the supported Latin-extended letters to its ASCII counterpart
///
/// The table is fixed: ç→c, ğ→g, ı→i, ö→o, ş→s, ü→u. Any other character is
/// returned unchanged.
pub fn transliterate(c: char) -> char {
    match c {
        'ç' => 'c',
        'ğ' => 'g',
        'ı' => 'i',
        'ö' => 'o',
        'ş' => 's',
        'ü' => 'u',
        c => c,
    }
}

/// Characters allowed to survive filtering: lowercase ASCII letters and digits
pub fn is_slug_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit()
}

/// Lowercase, transliterate and filter `text`
///
/// Every character that is not a slug character becomes a space, so symbols
/// separate tokens instead of gluing them together ("a&b" → "a b").
fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for c in text.chars() {
        // Dotted capital I lowercases to "i" plus a combining dot; keep it a single letter.
        if c == 'İ' {
            out.push('i');
            continue;
        }

        for lower in c.to_lowercase() {
            let c = transliterate(lower);
            out.push(if is_slug_char(c) { c } else { ' ' });
        }
    }

    out
}

fn classify_empty(original: &str) -> FailureKind {
    if original
        .trim_matches(|c: char| c.is_ascii_whitespace())
        .is_empty()
    {
        FailureKind::EmptyInput
    } else {
        FailureKind::AllInvalidCharacters
    }
}

/// Convert `text` into a slug
///
/// Fails with `EmptyInput` when the text is empty or whitespace only, and with
/// `AllInvalidCharacters` when nothing in it survives filtering.
pub fn slugify(text: &str) -> Result<String, SlugError> {
    let normalized = normalize(text);

    // Splitting on whitespace collapses runs and trims both ends; joining with a
    // single hyphen never produces repeated hyphens.
    let slug = normalized.split_whitespace().collect::<Vec<_>>().join("-");

    if slug.is_empty() {
        return Err(SlugError::new(classify_empty(text), TEXT_FIELD, text));
    }

    Ok(slug)
}

/// Convert `text` into a slug and decorate it with `options`
///
/// The prefix and suffix are inserted verbatim. The result is then cut to
/// `max_length` characters without regard for word boundaries, which may
/// leave a trailing hyphen or a partial token.
pub fn slugify_with_options(text: &str, options: &SlugOptions) -> Result<String, SlugError> {
    let slug = slugify(text)?;

    let mut decorated = format!("{}{}{}", options.prefix, slug, options.suffix);

    if let Some(limit) = options.limit() {
        truncate_chars(&mut decorated, limit);
    }

    Ok(decorated)
}

/// Cut `s` to at most `limit` characters
fn truncate_chars(s: &mut String, limit: usize) {
    if let Some((idx, _)) = s.char_indices().nth(limit) {
        s.truncate(idx);
    }
}

/// True if `s` is already a well formed slug
pub fn is_slug(s: &str) -> bool {
    !s.is_empty()
        && !s.starts_with('-')
        && !s.ends_with('-')
        && !s.contains("--")
        && s.chars().all(|c| is_slug_char(c) || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============================================================================
    // slugify tests
    // ============================================================================

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Hello World").unwrap(), "hello-world");
    }

    #[test]
    fn test_slugify_transliterates() {
        assert_eq!(slugify("Çocuklar & Gençler").unwrap(), "cocuklar-gencler");
        assert_eq!(slugify("ĞÜŞÖÇI ığüşöç").unwrap(), "gusoci-igusoc");
    }

    #[test]
    fn test_slugify_dotted_capital_i() {
        assert_eq!(slugify("İstanbul").unwrap(), "istanbul");
    }

    #[test]
    fn test_slugify_punctuation_splits_tokens() {
        assert_eq!(slugify("Web Sitesi URL'si").unwrap(), "web-sitesi-url-si");
        assert_eq!(slugify("a&b").unwrap(), "a-b");
    }

    #[test]
    fn test_slugify_collapses_whitespace_and_hyphens() {
        assert_eq!(slugify("  a \t\n b  ").unwrap(), "a-b");
        assert_eq!(slugify("a - - b").unwrap(), "a-b");
        assert_eq!(slugify("--leading and trailing--").unwrap(), "leading-and-trailing");
    }

    #[test]
    fn test_slugify_keeps_digits() {
        assert_eq!(slugify("Top 10 Tips for 2024!").unwrap(), "top-10-tips-for-2024");
    }

    #[test]
    fn test_slugify_drops_other_non_ascii() {
        assert_eq!(slugify("café olé").unwrap(), "caf-ol");
        assert_eq!(slugify("hello 😀 world").unwrap(), "hello-world");
    }

    #[test]
    fn test_slugify_empty_input() {
        let err = slugify("").unwrap_err();
        assert_eq!(err.kind, FailureKind::EmptyInput);
        assert_eq!(err.field, TEXT_FIELD);
        assert_eq!(err.value, "");

        let err = slugify("   ").unwrap_err();
        assert_eq!(err.kind, FailureKind::EmptyInput);
        assert_eq!(err.value, "   ");
    }

    #[test]
    fn test_slugify_all_invalid_characters() {
        let err = slugify("@#$%^&*()").unwrap_err();
        assert_eq!(err.kind, FailureKind::AllInvalidCharacters);
        assert_eq!(err.value, "@#$%^&*()");

        let err = slugify("---").unwrap_err();
        assert_eq!(err.kind, FailureKind::AllInvalidCharacters);
    }

    #[test]
    fn test_slugify_non_ascii_whitespace_is_invalid_not_empty() {
        let err = slugify("\u{00a0}\u{00a0}").unwrap_err();
        assert_eq!(err.kind, FailureKind::AllInvalidCharacters);
    }

    #[test]
    fn test_slugify_is_idempotent() {
        let inputs = [
            "Hello World",
            "Çocuklar & Gençler",
            "Web Sitesi URL'si",
            "  --a--b--  ",
            "Top 10 Tips for 2024!",
        ];

        for input in inputs {
            let once = slugify(input).unwrap();
            assert_eq!(slugify(&once).unwrap(), once, "input: {input}");
        }
    }

    #[test]
    fn test_slugify_output_is_well_formed() {
        let inputs = [
            "x",
            "A  B",
            "!!a!!",
            "Ünlü Şarkıcı: Öğle Yemeği",
            "tab\tseparated\tvalues",
            "mixed-CASE_with_underscores",
        ];

        for input in inputs {
            let slug = slugify(input).unwrap();
            assert!(is_slug(&slug), "{input:?} produced {slug:?}");
        }
    }

    // ============================================================================
    // slugify_with_options tests
    // ============================================================================

    #[test]
    fn test_slugify_with_default_options_matches_slugify() {
        let options = SlugOptions::default();
        assert!(options.is_plain());
        assert_eq!(
            slugify_with_options("Merhaba Dünya!", &options).unwrap(),
            "merhaba-dunya"
        );
    }

    #[test]
    fn test_slugify_with_options_prefix_suffix_verbatim() {
        let options = SlugOptions::new().prefix("Blog_").suffix("!V2");
        assert_eq!(
            slugify_with_options("Merhaba Dünya!", &options).unwrap(),
            "Blog_merhaba-dunya!V2"
        );
    }

    #[test]
    fn test_slugify_with_options_truncates() {
        let options = SlugOptions::new().prefix("blog-").suffix("-v2").max_length(20);
        let slug = slugify_with_options("Merhaba Dünya!", &options).unwrap();
        assert!(slug.starts_with("blog-"));
        assert_eq!(slug, "blog-merhaba-dunya-v");
        assert!(slug.chars().count() <= 20);

        let long = "a very long title ".repeat(50);
        let slug = slugify_with_options(&long, &options).unwrap();
        assert_eq!(slug.chars().count(), 20);
        assert!(slug.starts_with("blog-"));
    }

    #[test]
    fn test_slugify_with_options_hard_cut_may_leave_hyphen() {
        let options = SlugOptions::new().max_length(6);
        assert_eq!(
            slugify_with_options("Hello World", &options).unwrap(),
            "hello-"
        );
    }

    #[test]
    fn test_slugify_with_options_zero_max_length_is_unlimited() {
        let options = SlugOptions::new().max_length(0);
        assert_eq!(options.max_length, None);

        let options = SlugOptions {
            max_length: Some(0),
            ..Default::default()
        };
        assert_eq!(
            slugify_with_options("Hello World", &options).unwrap(),
            "hello-world"
        );
    }

    #[test]
    fn test_slugify_with_options_cuts_on_char_boundary() {
        let options = SlugOptions::new().prefix("ğğ").max_length(3);
        assert_eq!(slugify_with_options("abc", &options).unwrap(), "ğğa");
    }

    #[test]
    fn test_slugify_with_options_propagates_failure() {
        let options = SlugOptions::new().prefix("blog-");
        let err = slugify_with_options("@@@", &options).unwrap_err();
        assert_eq!(err.kind, FailureKind::AllInvalidCharacters);
    }

    // ============================================================================
    // predicate tests
    // ============================================================================

    #[test]
    fn test_is_slug_char() {
        assert!(is_slug_char('a'));
        assert!(is_slug_char('7'));
        assert!(!is_slug_char('A'));
        assert!(!is_slug_char('-'));
        assert!(!is_slug_char(' '));
        assert!(!is_slug_char('ç'));
    }

    #[test]
    fn test_transliterate_table() {
        assert_eq!(transliterate('ç'), 'c');
        assert_eq!(transliterate('ğ'), 'g');
        assert_eq!(transliterate('ı'), 'i');
        assert_eq!(transliterate('ö'), 'o');
        assert_eq!(transliterate('ş'), 's');
        assert_eq!(transliterate('ü'), 'u');
        assert_eq!(transliterate('é'), 'é');
    }

    #[test]
    fn test_is_slug() {
        assert!(is_slug("hello-world"));
        assert!(!is_slug(""));
        assert!(!is_slug("-hello"));
        assert!(!is_slug("hello-"));
        assert!(!is_slug("hello--world"));
        assert!(!is_slug("Hello"));
    }
}
