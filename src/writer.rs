use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::{FileRule, WriteMode};
use crate::error::{BasecoatError, Result};

/// Write rendered content into a file rule's destination.
///
/// This is the only place the tool mutates filesystem state. Overwrite
/// mode replaces the whole file; replace mode splices the content between
/// the rule's markers inside the existing file.
pub fn write(file: &str, rule: &FileRule, rendered: &str) -> Result<()> {
    let destination = expand_path(&rule.destination);
    info!(%file, destination = %destination.display(), "writing template file");

    match rule.mode {
        WriteMode::Overwrite => write_full(&destination, rendered),
        WriteMode::Replace => write_spliced(file, rule, &destination, rendered),
    }
}

/// Replace the destination's entire content, creating the file if absent.
fn write_full(destination: &Path, rendered: &str) -> Result<()> {
    std::fs::write(destination, rendered).map_err(|e| BasecoatError::Io {
        context: format!("writing {}", destination.display()),
        source: e,
    })
}

fn write_spliced(file: &str, rule: &FileRule, destination: &Path, rendered: &str) -> Result<()> {
    if rule.start_marker.is_empty() {
        return Err(BasecoatError::EmptyMarker {
            which: "start",
            file: file.to_string(),
        });
    }
    if rule.end_marker.is_empty() {
        return Err(BasecoatError::EmptyMarker {
            which: "end",
            file: file.to_string(),
        });
    }

    let original =
        std::fs::read_to_string(destination).map_err(|e| BasecoatError::MissingDestination {
            path: destination.to_path_buf(),
            source: e,
        })?;

    let spliced = splice(&original, &rule.start_marker, &rule.end_marker, rendered);
    write_atomic(destination, &spliced)
}

/// Rebuild a file's content with `rendered` spliced between the markers.
///
/// Lines are copied verbatim. A line exactly equal to the start marker is
/// copied, then followed by the rendered text; the lines after it are
/// dropped until one exactly equals the end marker, which is copied
/// before normal copying resumes. Every marker pair in the input is
/// handled in a single left-to-right pass.
///
/// Reaching end of input while still looking for an end marker is
/// tolerated: the last skipped line (possibly empty) is emitted and the
/// scan ends.
pub fn splice(original: &str, start_marker: &str, end_marker: &str, rendered: &str) -> String {
    let mut out = String::with_capacity(original.len() + rendered.len());
    let mut lines = original.lines();

    while let Some(line) = lines.next() {
        out.push_str(line);
        out.push('\n');

        if line != start_marker {
            continue;
        }

        out.push_str(rendered);
        out.push('\n');

        let mut last = "";
        for skipped in lines.by_ref() {
            last = skipped;
            if skipped == end_marker {
                break;
            }
        }
        out.push_str(last);
        out.push('\n');
    }

    out
}

/// Write through a temp file in the destination's directory and rename it
/// into place, so the destination never holds a half-written buffer.
fn write_atomic(destination: &Path, content: &str) -> Result<()> {
    let dir = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| BasecoatError::Io {
        context: format!("creating temp file in {}", dir.display()),
        source: e,
    })?;
    tmp.write_all(content.as_bytes())
        .map_err(|e| BasecoatError::Io {
            context: format!("writing temp file for {}", destination.display()),
            source: e,
        })?;
    tmp.persist(destination).map_err(|e| BasecoatError::Io {
        context: format!("replacing {}", destination.display()),
        source: e.error,
    })?;

    Ok(())
}

/// Expand a destination path: a leading `~` becomes `$HOME`, then `$VAR`
/// and `${VAR}` substitute from the environment.
pub fn expand_path(path: &str) -> PathBuf {
    let path = match path.strip_prefix('~') {
        Some(rest) => format!("$HOME{rest}"),
        None => path.to_string(),
    };
    PathBuf::from(expand_env(&path))
}

/// Substitute `$VAR` and `${VAR}` references. Unset variables expand to
/// the empty string; a `$` that introduces no variable name is kept
/// literally.
fn expand_env(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(idx) = rest.find('$') {
        out.push_str(&rest[..idx]);
        rest = &rest[idx + 1..];

        if let Some(braced) = rest.strip_prefix('{') {
            match braced.find('}') {
                Some(end) => {
                    out.push_str(&std::env::var(&braced[..end]).unwrap_or_default());
                    rest = &braced[end + 1..];
                }
                None => out.push('$'),
            }
            continue;
        }

        let end = rest
            .find(|c: char| !c.is_ascii_alphanumeric() && c != '_')
            .unwrap_or(rest.len());
        if end == 0 {
            out.push('$');
        } else {
            out.push_str(&std::env::var(&rest[..end]).unwrap_or_default());
            rest = &rest[end..];
        }
    }

    out.push_str(rest);
    out
}
