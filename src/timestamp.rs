use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ConversionError;

// @module: ASS and WebVTT timestamp conversion

// @const: ASS timestamp regex (H+:MM:SS.CC)
static ASS_TIMESTAMP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+):(\d{2}):(\d{2})\.(\d{2})$").unwrap()
});

/// Convert an ASS timestamp (`H:MM:SS.CC`) to seconds
pub fn convert_timestamp(timestamp: &str) -> Result<f64, ConversionError> {
    let caps = ASS_TIMESTAMP_REGEX
        .captures(timestamp.trim())
        .ok_or_else(|| ConversionError::InvalidTimestamp(timestamp.to_string()))?;

    let component = |idx: usize| -> Result<f64, ConversionError> {
        caps[idx]
            .parse::<u64>()
            .map(|v| v as f64)
            .map_err(|_| ConversionError::InvalidTimestamp(timestamp.to_string()))
    };

    let hours = component(1)?;
    let minutes = component(2)?;
    let seconds = component(3)?;
    let centis = component(4)?;

    Ok(hours * 3600.0 + minutes * 60.0 + seconds + centis / 100.0)
}

/// Format seconds as a WebVTT timestamp (`HH:MM:SS.mmm`)
pub fn format_vtt_timestamp(seconds: f64) -> String {
    let total_ms = (seconds.max(0.0) * 1000.0).round() as u64;
    let hours = total_ms / 3_600_000;
    let minutes = (total_ms % 3_600_000) / 60_000;
    let secs = (total_ms % 60_000) / 1_000;
    let millis = total_ms % 1_000;

    format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, secs, millis)
}
