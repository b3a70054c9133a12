use std::process::Command;

use crate::error::{BasecoatError, Result};

/// Run an application's post-write hook and return its combined output.
///
/// The command is split on whitespace into a program and its arguments;
/// there is no shell in between, so quoting and metacharacters are not
/// supported and arguments containing spaces cannot be expressed. The
/// child inherits the environment and gets no stdin.
pub fn run_hook(command: &str) -> Result<String> {
    let mut parts = command.split_whitespace();
    let program = match parts.next() {
        Some(program) => program,
        None => return Ok(String::new()),
    };

    let output = Command::new(program)
        .args(parts)
        .stdin(std::process::Stdio::null())
        .output()
        .map_err(|e| BasecoatError::Hook {
            command: command.to_string(),
            reason: format!("failed to spawn: {e}"),
            output: String::new(),
        })?;

    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));

    if !output.status.success() {
        return Err(BasecoatError::Hook {
            command: command.to_string(),
            reason: format!("exited with {}", output.status),
            output: combined,
        });
    }

    Ok(combined)
}
