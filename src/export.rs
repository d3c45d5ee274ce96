//! Record export: CSV (default) or JSON, chosen by file extension.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use tui_hanoi_core::SessionRecord;

pub const CSV_HEADER: [&str; 7] = [
    "Name",
    "Num of Disc",
    "Move",
    "Breaking rules",
    "Timer",
    "Remaining time",
    "Time spent(ms)",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// `.json` (any case) selects JSON; everything else is CSV
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ExportFormat::Json,
            _ => ExportFormat::Csv,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Export was requested with an empty record store
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no records to export")]
pub struct NoRecords;

/// Records as CSV with CRLF line endings
pub fn to_csv(records: &[SessionRecord]) -> String {
    let mut out = String::new();
    out.push_str(&CSV_HEADER.join(","));
    out.push_str("\r\n");
    for rec in records {
        let fields = [
            csv_field(&rec.name),
            rec.num_discs.to_string(),
            rec.moves.to_string(),
            rec.rule_break_attempts.to_string(),
            rec.timer_label(),
            rec.remaining_label(),
            rec.elapsed_ms.to_string(),
        ];
        out.push_str(&fields.join(","));
        out.push_str("\r\n");
    }
    out
}

pub fn to_json(records: &[SessionRecord]) -> Result<String> {
    serde_json::to_string_pretty(records).context("serialize records")
}

/// Write every record to `path`; an empty store is rejected with [`NoRecords`].
pub fn write_records(path: &Path, records: &[SessionRecord]) -> Result<ExportFormat> {
    if records.is_empty() {
        return Err(NoRecords.into());
    }

    let format = ExportFormat::from_path(path);
    let body = match format {
        ExportFormat::Csv => to_csv(records),
        ExportFormat::Json => to_json(records)?,
    };
    fs::write(path, body).with_context(|| format!("write {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        format = format.as_str(),
        count = records.len(),
        "records exported"
    );
    Ok(format)
}

fn csv_field(s: &str) -> String {
    if s.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
