use super::coverage::coverage;
use crate::error::Error;
use crate::strategy::StrategyTable;
use serde::Serialize;
use std::fs;
use std::io::Write as _;
use std::path::Path;

#[derive(Serialize)]
struct ProfileColumns {
    profile_dealer: Vec<f64>,
    profile_pone: Vec<f64>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SnapdataLine {
    n_snapshot: u64,
    n_deals: u64,
    timestamp: String,
    d_coverage: f64,
    d_min: u64,
    d_max: u64,
    p_coverage: f64,
    p_min: u64,
    p_max: u64,
}

/// Scans `dir` for `snapshot_<digits>.jls` filenames and returns one more
/// than the largest digit run found (0 if the directory is absent or empty
/// of matches). The whole digit run is parsed, not a fixed-width slice, per
/// SPEC_FULL.md §9's resolution of the source's ambiguity.
fn next_sequence(dir: &Path) -> std::io::Result<u64> {
    if !dir.exists() {
        return Ok(0);
    }
    let mut max_seen: Option<u64> = None;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let name = name.to_string_lossy();
        let Some(rest) = name.strip_prefix("snapshot_") else {
            continue;
        };
        let Some(digits) = rest.strip_suffix(".jls") else {
            continue;
        };
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            continue;
        }
        if let Ok(n) = digits.parse::<u64>() {
            max_seen = Some(max_seen.map_or(n, |m| m.max(n)));
        }
    }
    Ok(max_seen.map_or(0, |m| m + 1))
}

/// Writes one snapshot: the binary profile-column payload first, then the
/// appended coverage line — in that order, so a crash between the two never
/// leaves a `snapdata.txt` entry pointing at a missing `.jls` file
/// (SPEC_FULL.md §4.8).
pub fn write_snapshot(table: &StrategyTable, dir: &Path, timestamp: &str) -> Result<u64, Error> {
    fs::create_dir_all(dir)?;
    let n = next_sequence(dir)?;

    let columns = ProfileColumns {
        profile_dealer: table.rows().iter().map(|r| r.profile_dealer).collect(),
        profile_pone: table.rows().iter().map(|r| r.profile_pone).collect(),
    };
    let payload = bincode::serialize(&columns)?;
    fs::write(dir.join(format!("snapshot_{n}.jls")), &payload)?;

    let (d_total, d_min, d_max, d_coverage, p_total, p_min, p_max, p_coverage) =
        coverage(table);
    let line = SnapdataLine {
        n_snapshot: n,
        n_deals: d_total.max(p_total),
        timestamp: timestamp.to_string(),
        d_coverage,
        d_min,
        d_max,
        p_coverage,
        p_min,
        p_max,
    };
    let json = serde_json::to_string(&line)
        .map_err(|e| Error::InvariantViolation(format!("snapdata serialization: {e}")))?;

    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("snapdata.txt"))?;
    writeln!(file, "{json}")?;

    Ok(n)
}
