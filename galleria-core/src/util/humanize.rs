//! src/util/humanize.rs
//! ============================================================================

use chrono::{DateTime, Utc};

const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Format an optional byte count for the file table.
pub fn file_size(size: Option<u64>) -> String {
    let Some(size) = size else {
        return "Unknown".to_string();
    };

    let mut value = size as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{size} {}", SIZE_UNITS[0])
    } else {
        format!("{value:.1} {}", SIZE_UNITS[unit])
    }
}

pub fn short_date(at: Option<DateTime<Utc>>) -> String {
    at.map_or_else(|| "Unknown".to_string(), |at| at.format("%d/%m/%Y").to_string())
}

/// Recycle bin countdown label.
pub fn days_left(days: i64) -> String {
    match days {
        0 => "Purging soon".to_string(),
        1 => "1 day left".to_string(),
        n => format!("{n} days left"),
    }
}
