use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use crate::data::models::DictEntry;

#[derive(Error, Debug)]
pub enum KamusError {
    #[error("failed to read dictionary file: {0}")]
    Io(#[from] io::Error),
    #[error("dictionary file contains no entries")]
    Empty,
}

/// Parses the tab-separated dictionary file into memory. Lines starting with
/// `#` and blank lines are skipped; short or malformed lines are logged and
/// dropped rather than aborting the load.
pub fn parse_kamus(path: &Path) -> Result<Vec<DictEntry>, KamusError> {
    let content = fs::read_to_string(path)?;

    let mut entries = Vec::new();

    for (lineno, line) in content.lines().enumerate() {
        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }

        let cols: Vec<&str> = line.split('\t').collect();
        if cols.len() < 3 {
            log::warn!("skipping malformed dictionary line {}", lineno + 1);
            continue;
        }

        let id = match cols[0].trim().parse::<i32>() {
            Ok(id) => id,
            Err(_) => {
                log::warn!("skipping dictionary line {} with bad id", lineno + 1);
                continue;
            }
        };

        entries.push(DictEntry {
            id,
            idkata: cols[1].trim().to_string(),
            lpgkata: cols[2].trim().to_string(),
            lpgdialek: optional_col(&cols, 3),
            lpgaksara: optional_col(&cols, 4),
        });
    }

    if entries.is_empty() {
        return Err(KamusError::Empty);
    }

    Ok(entries)
}

fn optional_col(cols: &[&str], idx: usize) -> Option<String> {
    cols.get(idx)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
