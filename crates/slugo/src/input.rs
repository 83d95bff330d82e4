use std::path::{Path, PathBuf};

/// Where the text to slugify comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Text given as command line arguments
    Single(String),
    /// Lines read from a named file
    File(PathBuf),
    /// Lines piped on stdin
    Stdin,
    /// Prompt the user on a terminal
    Interactive,
}

impl InputMode {
    /// Pick the input mode from the parsed arguments
    ///
    /// Arguments win over a file, a file wins over piped stdin, and a terminal
    /// on stdin means interactive mode.
    pub fn detect(text: &[String], file: Option<&Path>, stdin_is_terminal: bool) -> Self {
        if !text.is_empty() {
            return InputMode::Single(text.join(" "));
        }

        if let Some(path) = file {
            return InputMode::File(path.to_path_buf());
        }

        if stdin_is_terminal {
            InputMode::Interactive
        } else {
            InputMode::Stdin
        }
    }
}
