/*!
 * WebVTT text serializer.
 *
 * Renders converted items as a WebVTT file: the `WEBVTT` header followed by
 * one block per item, blocks separated by a blank line. Styles become
 * `::cue(.name)` rules inside `STYLE` blocks.
 */

use std::fmt::Write;

use crate::timestamp::format_vtt_timestamp;
use crate::vtt_model::{AutoOr, LineAlign, PositionAlign, TextAlign, Vertical, VttCue, VttItem, WebVttStyle};

/// Options controlling what the writer emits
#[derive(Debug, Clone)]
pub struct WriterOptions {
    /// Emit `NOTE` blocks
    pub include_notes: bool,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self { include_notes: true }
    }
}

/// Serializer for converted documents
#[derive(Debug, Clone, Default)]
pub struct VttWriter {
    options: WriterOptions,
}

impl VttWriter {
    pub fn new(options: WriterOptions) -> Self {
        Self { options }
    }

    /// Render items to WebVTT text
    pub fn render(&self, items: &[VttItem]) -> String {
        let mut out = String::from("WEBVTT\n");

        for item in items {
            let block = match item {
                VttItem::Note(note) if self.options.include_notes => render_note(&note.text),
                VttItem::Note(_) => continue,
                VttItem::Style(style) => render_style(style),
                VttItem::Cue(cue) => render_cue(cue),
            };
            out.push('\n');
            out.push_str(&block);
        }

        out
    }
}

/// Render items with default options
pub fn render(items: &[VttItem]) -> String {
    VttWriter::default().render(items)
}

/// CSS class name for a style: anything outside `[A-Za-z0-9_-]` becomes `_`.
///
/// Names that would not start a valid identifier (empty, a digit, or `-`
/// followed by a digit or `-`) get a leading `_`.
pub fn style_class_name(name: &str) -> String {
    let class: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '_' })
        .collect();

    let mut chars = class.chars();
    let needs_prefix = match (chars.next(), chars.next()) {
        (None, _) => true,
        (Some(first), _) if first.is_ascii_digit() => true,
        (Some('-'), Some(second)) => second.is_ascii_digit() || second == '-',
        (Some('-'), None) => true,
        _ => false,
    };

    if needs_prefix { format!("_{}", class) } else { class }
}

fn render_note(text: &str) -> String {
    // "-->" ends a note early; blank lines would end the block.
    let text = text.replace("-->", "->");
    let lines: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();
    format!("NOTE {}\n", lines.join("\n"))
}

fn render_style(style: &WebVttStyle) -> String {
    let mut block = String::from("STYLE\n");
    let _ = writeln!(block, "::cue(.{}) {{", style_class_name(&style.name));
    for (property, value) in &style.properties {
        let _ = writeln!(block, "  {}: {};", property, value.replace("-->", "->"));
    }
    block.push_str("}\n");
    block
}

fn render_cue(cue: &VttCue) -> String {
    let mut block = String::new();

    let id = cue.id.replace("-->", "->");
    let id = id.lines().next().unwrap_or_default().trim();
    if !id.is_empty() {
        let _ = writeln!(block, "{}", id);
    }

    let _ = write!(
        block,
        "{} --> {}",
        format_vtt_timestamp(cue.start_time),
        format_vtt_timestamp(cue.end_time)
    );
    for setting in cue_settings(cue) {
        let _ = write!(block, " {}", setting);
    }
    block.push('\n');

    // A blank line would end the cue early.
    let text = escape_cue_text(&cue.text);
    let lines: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();
    let _ = writeln!(block, "{}", lines.join("\n"));
    block
}

/// Settings that differ from the WebVTT defaults
fn cue_settings(cue: &VttCue) -> Vec<String> {
    let mut settings = Vec::new();

    match cue.vertical {
        Vertical::Horizontal => {}
        Vertical::RightToLeft => settings.push("vertical:rl".to_string()),
        Vertical::LeftToRight => settings.push("vertical:lr".to_string()),
    }

    if let AutoOr::Value(line) = cue.line {
        let unit = if cue.snap_to_lines { "" } else { "%" };
        if cue.line_align == LineAlign::Start {
            settings.push(format!("line:{}{}", line, unit));
        } else {
            settings.push(format!("line:{}{},{}", line, unit, cue.line_align));
        }
    }

    if let AutoOr::Value(position) = cue.position {
        if cue.position_align == PositionAlign::Auto {
            settings.push(format!("position:{}%", position));
        } else {
            settings.push(format!("position:{}%,{}", position, cue.position_align));
        }
    }

    if cue.size != 100.0 {
        settings.push(format!("size:{}%", cue.size));
    }

    if cue.align != TextAlign::Center {
        settings.push(format!("align:{}", cue.align));
    }

    settings
}

fn escape_cue_text(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
