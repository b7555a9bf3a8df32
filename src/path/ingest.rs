//! Offline ingestion of `progress,x,y` text files into a [`CheckpointTable`].

use std::{collections::BTreeMap, path::Path};

use anyhow::Context as _;

use crate::{
    foundation::error::{TrailError, TrailResult},
    path::checkpoint::{Checkpoint, CheckpointTable},
};

/// What to do when a progress value appears on more than one line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Fail ingestion with [`TrailError::InvalidPath`].
    #[default]
    Reject,
    /// Keep the first occurrence and report the later line numbers.
    Flag,
}

/// Ingestion knobs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IngestOptions {
    /// Lines with progress outside `[0, max_progress]` are discarded when set.
    pub max_progress: Option<i64>,
    /// Duplicate progress handling.
    pub duplicates: DuplicatePolicy,
}

/// A progress value seen again after its first occurrence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct DuplicateLine {
    /// Repeated progress value.
    pub progress: i64,
    /// 1-based line of the first (kept) occurrence.
    pub first_line: usize,
    /// 1-based line of the discarded occurrence.
    pub line: usize,
}

/// Result of parsing a checkpoint file.
#[derive(Clone, Debug)]
pub struct IngestReport {
    /// Validated, sorted table.
    pub table: CheckpointTable,
    /// 1-based numbers of discarded malformed lines.
    pub malformed_lines: Vec<usize>,
    /// Duplicates kept out of the table under [`DuplicatePolicy::Flag`].
    pub duplicates: Vec<DuplicateLine>,
}

/// Parse newline-delimited `progress,x,y` records.
///
/// Blank lines are skipped silently; lines with fewer than three fields, unparsable numbers or
/// (when `max_progress` is set) progress outside `[0, max_progress]` are discarded and reported.
/// Extra trailing fields are ignored.
#[tracing::instrument(skip(text), fields(bytes = text.len()))]
pub fn parse_checkpoints(text: &str, opts: &IngestOptions) -> TrailResult<IngestReport> {
    let mut by_progress = BTreeMap::<i64, (usize, Checkpoint)>::new();
    let mut malformed_lines = Vec::new();
    let mut duplicates = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let Some(cp) = parse_line(line, opts.max_progress) else {
            tracing::debug!(line = line_no, "discarding malformed checkpoint line");
            malformed_lines.push(line_no);
            continue;
        };

        if let Some(&(first_line, _)) = by_progress.get(&cp.progress) {
            match opts.duplicates {
                DuplicatePolicy::Reject => {
                    return Err(TrailError::invalid_path(format!(
                        "progress {} appears on lines {} and {}",
                        cp.progress, first_line, line_no
                    )));
                }
                DuplicatePolicy::Flag => {
                    tracing::warn!(
                        progress = cp.progress,
                        first_line,
                        line = line_no,
                        "duplicate checkpoint progress; keeping first occurrence"
                    );
                    duplicates.push(DuplicateLine {
                        progress: cp.progress,
                        first_line,
                        line: line_no,
                    });
                    continue;
                }
            }
        }
        by_progress.insert(cp.progress, (line_no, cp));
    }

    if !malformed_lines.is_empty() {
        tracing::warn!(count = malformed_lines.len(), "discarded malformed lines");
    }

    let table = CheckpointTable::new(by_progress.into_values().map(|(_, cp)| cp).collect())?;
    tracing::info!(checkpoints = table.len(), "checkpoint table ingested");

    Ok(IngestReport {
        table,
        malformed_lines,
        duplicates,
    })
}

/// Read and parse a checkpoint file from disk.
pub fn load_checkpoints(path: &Path, opts: &IngestOptions) -> TrailResult<IngestReport> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read checkpoint file '{}'", path.display()))?;
    parse_checkpoints(&text, opts)
}

fn parse_line(line: &str, max_progress: Option<i64>) -> Option<Checkpoint> {
    let mut parts = line.split(',').map(str::trim);
    let progress = parts.next()?.parse::<i64>().ok()?;
    let x = parts.next()?.parse::<f64>().ok()?;
    let y = parts.next()?.parse::<f64>().ok()?;

    if !x.is_finite() || !y.is_finite() {
        return None;
    }
    if let Some(max) = max_progress
        && !(0..=max).contains(&progress)
    {
        return None;
    }
    Some(Checkpoint::new(progress, x, y))
}

#[cfg(test)]
#[path = "../../tests/unit/path/ingest.rs"]
mod tests;
