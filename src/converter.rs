/*!
 * ASS → WebVTT conversion pipeline.
 *
 * Walks the parsed sections, hands each row to the matching field converter
 * and assembles the result as notes, then styles, then cues. WebVTT does not
 * allow a `STYLE` block after the first cue, so that order holds no matter
 * how the source sections are arranged.
 */

use log::{debug, warn};

use crate::ass_parser::{self, Item, ItemValue, ParseOptions, Section, SectionKind};
use crate::errors::ConversionError;
use crate::event_converter::convert_event;
use crate::style_converter::convert_style;
use crate::vtt_model::{VttItem, WebVttNote};

/// Receiver for non-fatal conversion diagnostics
pub trait DiagnosticSink {
    /// Report a condition that was skipped without aborting the conversion
    fn warn(&mut self, message: &str);
}

/// Sink forwarding diagnostics to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn warn(&mut self, message: &str) {
        warn!("{}", message);
    }
}

/// Sink keeping diagnostics in memory
#[derive(Debug, Default, Clone)]
pub struct CollectingSink {
    pub messages: Vec<String>,
}

impl DiagnosticSink for CollectingSink {
    fn warn(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

/// Per-call accumulation of the three output lists
#[derive(Default)]
struct Output {
    notes: Vec<VttItem>,
    styles: Vec<VttItem>,
    body: Vec<VttItem>,
    reference_height: Option<f64>,
}

impl Output {
    fn into_items(self) -> Vec<VttItem> {
        let mut items = self.notes;
        items.extend(self.styles);
        items.extend(self.body);
        items
    }
}

/// Convert a complete ASS script, reporting diagnostics through `log`
pub fn convert_document(source: &str) -> Result<Vec<VttItem>, ConversionError> {
    convert(source, &mut LogSink)
}

/// Convert a complete ASS script into notes, styles and cues
pub fn convert(source: &str, sink: &mut dyn DiagnosticSink) -> Result<Vec<VttItem>, ConversionError> {
    let sections = ass_parser::parse(source, &ParseOptions { comments: true });
    convert_sections(&sections, sink)
}

/// Convert already parsed sections
pub fn convert_sections(
    sections: &[Section],
    sink: &mut dyn DiagnosticSink,
) -> Result<Vec<VttItem>, ConversionError> {
    let mut output = Output::default();

    for section in sections {
        match &section.kind {
            SectionKind::ScriptInfo => convert_script_info(section, &mut output)?,
            kind if kind.is_styles() => convert_styles(section, &mut output, sink)?,
            SectionKind::Events => convert_events(section, &mut output, sink)?,
            other => sink.warn(&format!("Ignoring unsupported section [{}]", other)),
        }
    }

    debug!(
        "Converted {} notes, {} styles, {} cue entries",
        output.notes.len(),
        output.styles.len(),
        output.body.len()
    );

    Ok(output.into_items())
}

fn convert_script_info(section: &Section, output: &mut Output) -> Result<(), ConversionError> {
    for item in &section.items {
        match item {
            Item::Comment(text) => output.notes.push(WebVttNote::new(text.clone()).into()),
            Item::KeyValue { key, value } => {
                if key == "PlayResY" {
                    output.reference_height = Some(parse_reference_height(value)?);
                }
                output.notes.push(WebVttNote::new(format!("{}: {}", key, value)).into());
            }
        }
    }
    Ok(())
}

fn parse_reference_height(value: &ItemValue) -> Result<f64, ConversionError> {
    let raw = value.to_string();
    match raw.trim().parse::<f64>() {
        Ok(height) if height.is_finite() && height > 0.0 => Ok(height),
        _ => Err(ConversionError::InvalidReferenceHeight(raw)),
    }
}

fn convert_styles(
    section: &Section,
    output: &mut Output,
    sink: &mut dyn DiagnosticSink,
) -> Result<(), ConversionError> {
    let height = output
        .reference_height
        .ok_or(ConversionError::MissingReferenceHeight)?;

    for item in &section.items {
        match item {
            Item::Comment(text) => output.styles.push(WebVttNote::new(text.clone()).into()),
            Item::KeyValue { key, .. } if key == "Format" => {}
            Item::KeyValue { key, value: ItemValue::Record(record) } => {
                debug!("Converting {} row '{}'", key, record.get("Name").unwrap_or_default());
                output.styles.push(convert_style(record, height)?.into());
            }
            Item::KeyValue { key, .. } => {
                sink.warn(&format!("Skipping {} row in [{}]: no Format row declared", key, section.kind));
            }
        }
    }
    Ok(())
}

fn convert_events(
    section: &Section,
    output: &mut Output,
    sink: &mut dyn DiagnosticSink,
) -> Result<(), ConversionError> {
    for item in &section.items {
        match item {
            Item::Comment(text) => output.body.push(WebVttNote::new(text.clone()).into()),
            Item::KeyValue { key, .. } if key == "Format" => {}
            Item::KeyValue { value: ItemValue::Record(record), .. } => {
                output.body.push(convert_event(record)?.into());
            }
            Item::KeyValue { key, .. } => {
                sink.warn(&format!("Skipping {} row in [{}]: no Format row declared", key, section.kind));
            }
        }
    }
    Ok(())
}
