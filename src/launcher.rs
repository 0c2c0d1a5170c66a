//! Running clipboard text as a command or opening it as a path
//!
//! Both spawn a detached child with null stdio so nothing it prints lands on
//! the terminal UI. Every failure comes back as
//! `ClipmarkError::ExternalProcessFailure`; callers report it and carry on.

use std::io;
use std::path::PathBuf;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};

use crate::error::{ClipmarkError, Result};

/// Spawn `command_line` as a new process. Returns the child's pid.
pub fn execute(command_line: &str) -> Result<u32> {
    let args = split_command_line(command_line);
    let Some((program, rest)) = args.split_first() else {
        return Err(ClipmarkError::process(command_line, "nothing to execute"));
    };

    let resolved = resolve_program(program)
        .ok_or_else(|| ClipmarkError::process(command_line, "program not found"))?;

    spawn(Command::new(resolved).args(rest), command_line)
}

/// Open `path` with the platform's default handler. Returns the handler's pid.
pub fn open(path: &str) -> Result<u32> {
    let target = path.trim();
    if target.is_empty() {
        return Err(ClipmarkError::process(path, "nothing to open"));
    }

    let (program, args) = opener_command(target);
    let display = format!("{} {}", program, target);
    let resolved = which::which(program)
        .map_err(|_| ClipmarkError::process(&display, "no default handler available"))?;

    spawn(Command::new(resolved).args(&args), &display)
}

/// The command that opens `target` on this platform
pub fn opener_command(target: &str) -> (&'static str, Vec<String>) {
    if cfg!(target_os = "macos") {
        ("open", vec![target.to_string()])
    } else if cfg!(target_os = "windows") {
        // The empty string is the window title `start` expects first
        (
            "cmd",
            vec![
                "/C".to_string(),
                "start".to_string(),
                String::new(),
                target.to_string(),
            ],
        )
    } else {
        ("xdg-open", vec![target.to_string()])
    }
}

/// Split a command line into words.
///
/// Whitespace separates words; single or double quotes group text containing
/// whitespace. Backslashes are literal so Windows paths pass through intact.
pub fn split_command_line(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }

    // An unterminated quote runs to the end of the line
    if in_word {
        words.push(current);
    }
    words
}

fn resolve_program(program: &str) -> Option<PathBuf> {
    which::which(program).ok()
}

fn spawn(command: &mut Command, display: &str) -> Result<u32> {
    let child = command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| ClipmarkError::process(display, e))?;

    let pid = child.id();
    log::debug!("Spawned '{}' as pid {}", display, pid);
    reap(child, display.to_string());
    Ok(pid)
}

/// Wait for `child` on a background thread so it does not linger as a zombie
fn reap(mut child: Child, display: String) -> JoinHandle<io::Result<ExitStatus>> {
    thread::spawn(move || {
        let status = child.wait();
        match &status {
            Ok(status) => log::debug!("'{}' exited with {}", display, status),
            Err(e) => log::debug!("Waiting on '{}' failed: {}", display, e),
        }
        status
    })
}

#[cfg(test)]
#[path = "launcher_tests.rs"]
mod launcher_tests;
