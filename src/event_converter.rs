use once_cell::sync::Lazy;
use regex::Regex;

use crate::ass_parser::Record;
use crate::errors::ConversionError;
use crate::timestamp::convert_timestamp;
use crate::vtt_model::VttCue;

// @module: ASS dialogue → WebVTT cue conversion

// @const: Two or more consecutive line breaks
static BLANK_LINES_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{2,}").unwrap());

/// Convert one `Dialogue:` row into a cue.
///
/// Override blocks such as `{\b1}` or `{\pos(10,20)}` stay in the text
/// verbatim; they are neither interpreted nor stripped.
pub fn convert_event(record: &Record) -> Result<VttCue, ConversionError> {
    let start_time = timestamp_field(record, "Start")?;
    let end_time = timestamp_field(record, "End")?;

    Ok(VttCue::new(
        record.get("Name").unwrap_or_default(),
        start_time,
        end_time,
        normalize_text(record.get("Text").unwrap_or_default()),
    ))
}

/// Replace ASS hard breaks (`\N`) with line breaks.
///
/// A blank line ends a cue in WebVTT, so each run of two or more breaks
/// collapses to a single space.
pub fn normalize_text(text: &str) -> String {
    let with_breaks = text.replace("\\N", "\n");
    BLANK_LINES_REGEX.replace_all(&with_breaks, " ").into_owned()
}

fn timestamp_field(record: &Record, name: &str) -> Result<f64, ConversionError> {
    let raw = record
        .get(name)
        .ok_or_else(|| ConversionError::InvalidTimestamp(String::new()))?;
    convert_timestamp(raw)
}
