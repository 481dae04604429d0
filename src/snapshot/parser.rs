//! Snapshot parsing.
//!
//! The parser is line oriented. Header lines before the details marker are
//! read for diagnostics only (root, format version, declared file count).
//! After the marker, every `Chemin :` line contributes one path: the text
//! after the label and its leading blanks, up to the end of the line, with
//! control-character escapes decoded.
//!
//! What happens to anything else is governed by [`Leniency`]:
//! lenient parsing (the default) counts and skips unrecognized lines, strict
//! parsing turns them into [`InventoryError::PartialParse`].

use super::{labels, unescape_field};
use crate::error::{InventoryError, InventoryResult};
use crate::inventory::PathSet;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{Level, debug, span, warn};

/// Path reported in errors for documents parsed from memory.
const MEMORY_SOURCE: &str = "<memory>";

/// How the parser treats lines it does not recognize.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Leniency {
    /// Skip unrecognized content and report how much was skipped.
    #[default]
    Lenient,
    /// Fail on unrecognized content, missing paths or a file count mismatch.
    Strict,
}

impl Leniency {
    /// `Strict` when `strict` is set.
    #[must_use]
    pub const fn from_strict(strict: bool) -> Self {
        if strict { Self::Strict } else { Self::Lenient }
    }
}

/// Everything recovered from a snapshot document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSnapshot {
    /// Directory named in the header, if present.
    pub root_path: Option<String>,
    /// Declared format version; `None` for legacy documents.
    pub format_version: Option<u32>,
    /// File count declared in the header.
    pub declared_total: Option<usize>,
    /// Paths found in the details section.
    pub paths: PathSet,
    /// Lines after the marker that were neither blank nor a known field.
    pub skipped_lines: usize,
    /// Whether the details marker was found at all.
    pub has_details: bool,
}

impl ParsedSnapshot {
    /// Whether the recovered paths disagree with the header's file count.
    #[must_use]
    pub fn count_mismatch(&self) -> bool {
        self.declared_total
            .is_some_and(|total| total != self.paths.len())
    }
}

/// Snapshot parser with a configurable [`Leniency`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SnapshotParser {
    leniency: Leniency,
}

impl SnapshotParser {
    /// Creates a parser.
    #[must_use]
    pub const fn new(leniency: Leniency) -> Self {
        Self { leniency }
    }

    /// Strict parser.
    #[must_use]
    pub const fn strict() -> Self {
        Self::new(Leniency::Strict)
    }

    /// Parses the snapshot at `path`.
    ///
    /// Invalid UTF-8 is replaced rather than rejected.
    ///
    /// # Errors
    ///
    /// - [`InventoryError::SnapshotNotFound`] if the file does not exist
    /// - [`InventoryError::Io`] if it cannot be read
    /// - [`InventoryError::PartialParse`] in strict mode, see [`Leniency::Strict`]
    pub fn parse_file(&self, path: &Path) -> InventoryResult<ParsedSnapshot> {
        let _span = span!(Level::DEBUG, "parse_snapshot", path = %path.display()).entered();

        let bytes = fs::read(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => InventoryError::SnapshotNotFound(path.to_path_buf()),
            _ => InventoryError::io(path, e),
        })?;
        let text = String::from_utf8_lossy(&bytes);
        self.parse_document(&text, path)
    }

    /// Parses a snapshot document held in memory.
    ///
    /// # Errors
    ///
    /// [`InventoryError::PartialParse`] in strict mode.
    pub fn parse_str(&self, text: &str) -> InventoryResult<ParsedSnapshot> {
        self.parse_document(text, Path::new(MEMORY_SOURCE))
    }

    fn parse_document(&self, text: &str, source: &Path) -> InventoryResult<ParsedSnapshot> {
        let mut parsed = ParsedSnapshot::default();
        let mut in_details = false;
        let mut saw_content = false;
        // Open `Nom :` block still waiting for its `Chemin :` line.
        let mut pending_name: Option<(usize, String)> = None;

        for (index, raw) in text.lines().enumerate() {
            let line_no = index + 1;
            let body = raw.trim_start().trim_end_matches('\r');
            let line = body.trim_end();
            if line.is_empty() {
                continue;
            }
            saw_content = true;

            if !in_details {
                if line.starts_with(labels::DETAILS) {
                    in_details = true;
                    parsed.has_details = true;
                } else {
                    read_header_line(line, &mut parsed);
                }
                continue;
            }

            // Trailing blanks belong to the path.
            if let Some(rest) = body.strip_prefix(labels::PATH) {
                parsed
                    .paths
                    .insert(unescape_field(rest.trim_start()).into_owned());
                pending_name = None;
            } else if let Some(rest) = line.strip_prefix(labels::NAME) {
                if let Some((at, name)) = pending_name.take() {
                    self.incomplete_block(source, at, &name)?;
                }
                pending_name = Some((line_no, unescape_field(rest.trim()).into_owned()));
            } else if labels::FIELDS.iter().any(|label| line.starts_with(label)) {
                // Informational field, nothing to collect.
            } else {
                parsed.skipped_lines += 1;
                if self.leniency == Leniency::Strict {
                    return Err(InventoryError::partial_parse(
                        source,
                        format!("unrecognized line {line_no}: {line}"),
                    ));
                }
                debug!(line = line_no, content = line, "skipping unrecognized line");
            }
        }

        if let Some((at, name)) = pending_name {
            self.incomplete_block(source, at, &name)?;
        }

        self.check_complete(&parsed, saw_content, source)?;
        Ok(parsed)
    }

    fn incomplete_block(&self, source: &Path, line_no: usize, name: &str) -> InventoryResult<()> {
        if self.leniency == Leniency::Strict {
            return Err(InventoryError::partial_parse(
                source,
                format!("entry '{name}' at line {line_no} has no path"),
            ));
        }
        warn!(line = line_no, name, "snapshot entry without a path");
        Ok(())
    }

    fn check_complete(
        &self,
        parsed: &ParsedSnapshot,
        saw_content: bool,
        source: &Path,
    ) -> InventoryResult<()> {
        let problem = if saw_content && !parsed.has_details {
            Some("no details section".to_string())
        } else if parsed.count_mismatch() {
            Some(format!(
                "header declares {} file(s) but {} path(s) were found",
                parsed.declared_total.unwrap_or_default(),
                parsed.paths.len()
            ))
        } else {
            None
        };

        match problem {
            Some(reason) if self.leniency == Leniency::Strict => {
                Err(InventoryError::partial_parse(source, reason))
            }
            Some(reason) => {
                warn!(source = %source.display(), %reason, "snapshot may be incomplete");
                Ok(())
            }
            None => {
                if parsed.skipped_lines > 0 {
                    warn!(
                        source = %source.display(),
                        skipped = parsed.skipped_lines,
                        "skipped unrecognized snapshot lines"
                    );
                }
                Ok(())
            }
        }
    }
}

fn read_header_line(line: &str, parsed: &mut ParsedSnapshot) {
    if let Some(rest) = line.strip_prefix(labels::ROOT) {
        parsed.root_path = Some(unescape_field(rest.trim()).into_owned());
    } else if let Some(rest) = line.strip_prefix(labels::TOTAL) {
        parsed.declared_total = rest.trim().parse().ok();
    } else if let Some(rest) = line.strip_prefix(labels::VERSION) {
        parsed.format_version = rest.trim().parse().ok();
    }
}

/// Parse the path set of the snapshot at `path`, leniently
///
/// # Errors
///
/// Returns [`InventoryError::SnapshotNotFound`] if the file does not exist
/// and [`InventoryError::Io`] if it cannot be read. Malformed content never
/// fails; it yields a partial or empty set.
pub fn parse(path: &Path) -> InventoryResult<PathSet> {
    SnapshotParser::default()
        .parse_file(path)
        .map(|parsed| parsed.paths)
}
