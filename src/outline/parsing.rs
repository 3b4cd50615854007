//! Line parser: outline text to flat records
//!
//!     Every non-blank line of the outline becomes one [`FlatRecord`] carrying its trimmed
//!     name, its indentation and the depth derived from it. The output keeps input order
//!     and is flat: nesting is only implied by the depth values, and the building stage
//!     turns it into an actual tree.
//!
//! Indentation
//!
//!     The first line of the text sets the baseline. Its leading whitespace is cut from
//!     every line before the indentation is measured, so an outline that is itself
//!     indented inside a template block still starts at depth 0. The baseline is taken
//!     from the literal first line, not the first non-blank one: a block whose body opens
//!     with a blank line gets a baseline of 0.
//!
//!     Only ASCII whitespace counts as indentation. A no-break or ideographic space at
//!     the start of a line belongs to the name.
//!
//!     Two spaces make one level. A line must be indented by an even amount and may sit at
//!     most one level deeper than the line emitted before it. Dedenting any number of
//!     levels is fine. Blank lines are skipped before validation, so they never break
//!     the chain.
//!
//! Files and folders
//!
//!     A name with an extension (`about.md`) is a file; anything else is a container.
//!     Dotfiles such as `.bashrc` have no extension and count as containers.

use crate::outline::error::ParseError;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// First character that is not ASCII whitespace. Unicode spaces such as U+00A0 are
/// part of the name, not indentation.
static NON_WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^ \t\n\x0B\x0C\r]").unwrap());

/// Spaces per nesting level
pub const INDENT_WIDTH: usize = 2;

/// One outline entry, before nesting is resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlatRecord {
    pub name: String,
    /// Leading whitespace count after the baseline is removed
    pub indent: usize,
    pub depth: usize,
    /// True for folders (names without an extension)
    pub is_container: bool,
}

impl FlatRecord {
    pub fn new(name: impl Into<String>, indent: usize) -> Self {
        let name = name.into();
        let is_container = !has_extension(&name);
        FlatRecord {
            name,
            indent,
            depth: indent / INDENT_WIDTH,
            is_container,
        }
    }
}

/// Parse outline text into flat records.
///
/// Fails with [`ParseError::IllegalNesting`] on the first line whose indentation is odd or
/// jumps more than one level past the previous entry. Nothing is returned for the lines
/// that were already read.
pub fn parse(text: &str) -> Result<Vec<FlatRecord>, ParseError> {
    let baseline = text.lines().next().map(leading_whitespace).unwrap_or(0);
    let mut records: Vec<FlatRecord> = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let name = trim_name(line);
        if name.is_empty() {
            continue;
        }

        let indent = leading_whitespace(strip_baseline(line, baseline));
        let previous = records.last().map(|record| record.indent);
        debug!(
            "line {}, prev: {:?}, indent: {}",
            index + 1,
            previous,
            indent
        );

        if !valid_nesting(previous, indent) {
            return Err(ParseError::IllegalNesting {
                line: index + 1,
                indent,
                name: name.to_string(),
            });
        }

        records.push(FlatRecord::new(name, indent));
    }

    Ok(records)
}

/// Cut ASCII whitespace and NUL from both ends of a name.
///
/// Non-ASCII spaces are kept: `"\u{a0}notes"` stays as it is.
pub fn trim_name(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_ascii_whitespace() || c == '\x0B' || c == '\0')
}

/// Whether a name carries a file extension.
///
/// Only the last path segment is looked at, and its leading dots are ignored, so
/// `.config.yml` has an extension while `.bashrc` and `v1.2/docs` don't. A trailing dot
/// (`notes.`) still counts.
pub fn has_extension(name: &str) -> bool {
    let trimmed = name.trim_end_matches('/');
    let base = trimmed
        .rsplit_once('/')
        .map_or(trimmed, |(_, base)| base);
    base.trim_start_matches('.').contains('.')
}

/// Count of whitespace characters before the first non-whitespace one, or 0 when the
/// line has none.
fn leading_whitespace(line: &str) -> usize {
    NON_WHITESPACE
        .find(line)
        .map(|m| line[..m.start()].chars().count())
        .unwrap_or(0)
}

/// Drop the first `baseline` characters, whatever they are.
fn strip_baseline(line: &str, baseline: usize) -> &str {
    match line.char_indices().nth(baseline) {
        Some((offset, _)) => &line[offset..],
        None => "",
    }
}

fn valid_nesting(previous: Option<usize>, current: usize) -> bool {
    current % INDENT_WIDTH == 0
        && previous.map_or(true, |previous| current <= previous + INDENT_WIDTH)
}
