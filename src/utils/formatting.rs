use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::models::heroku::app_record::value_text;

const SIZE_UNITS: [&str; 5] = ["K", "M", "G", "T", "P"];

/// Human readable size: `(empty)`, `512B`, `3.4M`, `12K`.
pub fn human_bytes(amount: u64) -> String {
    if amount == 0 {
        return "(empty)".to_string();
    }
    if amount < 1024 {
        return format!("{amount}B");
    }

    let mut scaled = amount as f64 / 1024.0;
    let mut unit = 0;
    while scaled >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        scaled /= 1024.0;
        unit += 1;
    }

    if scaled < 10.0 {
        format!("{:.1}{}", scaled, SIZE_UNITS[unit])
    } else {
        format!("{:.0}{}", scaled, SIZE_UNITS[unit])
    }
}

/// Formats a byte count from the API. Values that are not a count (the
/// server sometimes pre-formats sizes) are shown as-is.
pub fn format_bytes(value: &Value) -> String {
    let amount = match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };

    match amount {
        Some(amount) => human_bytes(amount),
        None => value_text(value),
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, "%Y/%m/%d %H:%M:%S %z"))
        .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S %z"))
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Timestamps are shown in UTC as `2012/06/01 12:00:00 UTC`.
pub fn format_date(value: &Value) -> String {
    let parsed = match value {
        Value::String(s) => parse_timestamp(s),
        Value::Number(n) => n.as_i64().and_then(|secs| DateTime::from_timestamp(secs, 0)),
        _ => None,
    };

    parsed
        .map(|dt| dt.format("%Y/%m/%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| value_text(value))
}

pub fn quantify(noun: &str, count: i64) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Integer reading of a count field; anything unparseable counts as zero.
pub fn integer_value(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)).unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

/// Dollar amount with at least two and at most three decimals.
pub fn format_dollars(amount: f64) -> String {
    let mut text = format!("{amount:.3}");
    if text.ends_with('0') {
        text.pop();
    }
    text
}

#[cfg(test)]
#[path = "../../tests/utils/formatting.rs"]
mod tests;
