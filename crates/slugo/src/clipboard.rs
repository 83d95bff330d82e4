use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use std::io::Write;
use std::process::{Command, Stdio};

/// An external program that copies its stdin to the system clipboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipboardCommand {
    pub program: &'static str,
    pub args: &'static [&'static str],
}

const MACOS: &[ClipboardCommand] = &[ClipboardCommand {
    program: "pbcopy",
    args: &[],
}];

const LINUX: &[ClipboardCommand] = &[
    ClipboardCommand {
        program: "wl-copy",
        args: &[],
    },
    ClipboardCommand {
        program: "xclip",
        args: &["-selection", "clipboard"],
    },
    ClipboardCommand {
        program: "xsel",
        args: &["--clipboard", "--input"],
    },
];

const WINDOWS: &[ClipboardCommand] = &[ClipboardCommand {
    program: "clip",
    args: &[],
}];

/// Clipboard helpers to try, in order, for the given `std::env::consts::OS`
pub fn candidates(os: &str) -> Result<&'static [ClipboardCommand], Error> {
    match os {
        "macos" => Ok(MACOS),
        "linux" | "freebsd" | "openbsd" | "netbsd" => Ok(LINUX),
        "windows" => Ok(WINDOWS),
        os => Err(Error::UnsupportedPlatform(os.to_string())),
    }
}

/// First candidate whose program is found on `PATH`
fn resolve(candidates: &[ClipboardCommand]) -> Result<ClipboardCommand, Error> {
    candidates
        .iter()
        .copied()
        .find(|cmd| which::which(cmd.program).is_ok())
        .ok_or_else(|| {
            let tried: Vec<&str> = candidates.iter().map(|cmd| cmd.program).collect();
            Error::ClipboardUnavailable(tried.join(", "))
        })
}

/// Copy `text` to the system clipboard
pub fn copy(text: &str) -> Result<()> {
    let command = resolve(candidates(std::env::consts::OS)?)?;
    log::debug!("copying {} bytes with {}", text.len(), command.program);

    let mut child = Command::new(command.program)
        .args(command.args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .spawn()
        .with_context(|| format!("Failed to start {}", command.program))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .with_context(|| format!("Failed to write to {}", command.program))?;
    }

    let status = child
        .wait()
        .with_context(|| format!("Failed to wait for {}", command.program))?;

    if !status.success() {
        return Err(Error::ClipboardFailed(command.program.to_string(), status.to_string()).into());
    }

    Ok(())
}

/// Copy `slugs` joined by newlines and tell the user how it went
///
/// Clipboard problems are reported but never abort the run.
pub fn copy_slugs(slugs: &[&str]) {
    if slugs.is_empty() {
        println!("{}", "No successful slugs to copy.".yellow());
        return;
    }

    match copy(&slugs.join("\n")) {
        Ok(()) if slugs.len() == 1 => {
            println!("{} Slug copied to clipboard", "✓".green());
        }
        Ok(()) => {
            println!("{} {} slugs copied to clipboard", "✓".green(), slugs.len());
        }
        Err(err) => {
            log::warn!("clipboard copy failed: {err:?}");
            eprintln!("{}: {}", "Clipboard copy error".red(), err);
        }
    }
}
