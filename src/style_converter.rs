/*!
 * ASS style → WebVTT style conversion.
 *
 * Each CSS property is produced by one entry of `STYLE_RULES`: a predicate
 * deciding whether the source row carries the field, and a transform
 * producing the CSS value. Rules run in table order, so the property order
 * of every converted style is stable.
 *
 * Only properties the WebVTT `::cue` pseudo-element accepts are emitted.
 * Outline width, scaling, spacing and rotation have no counterpart there and
 * are never mapped; BackColour goes to a custom property instead of a
 * shadow/stroke colour for the same reason.
 */

use crate::ass_parser::Record;
use crate::color::convert_color;
use crate::errors::ConversionError;
use crate::vtt_model::WebVttStyle;

/// Divisor turning an ASS shadow depth into `em`
const SHADOW_EM_DIVISOR: f64 = 36.0;

/// One row of the property mapping table
pub struct StyleRule {
    /// CSS property written when the rule applies
    pub property: &'static str,
    /// Whether the source row carries what this rule needs
    pub applies: fn(&Record) -> bool,
    /// CSS value for the property, given the reference frame height
    pub value: fn(&Record, f64) -> Result<String, ConversionError>,
}

/// Property mapping, in output order
pub const STYLE_RULES: &[StyleRule] = &[
    StyleRule {
        property: "font-family",
        applies: |r| r.get("Fontname").is_some(),
        value: |r, _| Ok(field(r, "Fontname").to_string()),
    },
    StyleRule {
        property: "font-size",
        applies: |r| r.get("Fontsize").is_some(),
        value: |r, height| {
            let size = number(r, "Fontsize")?;
            Ok(format!("{:.2}vh", size / height * 100.0))
        },
    },
    StyleRule {
        property: "color",
        applies: |r| r.get("PrimaryColour").is_some(),
        value: |r, _| convert_color(field(r, "PrimaryColour")),
    },
    StyleRule {
        property: "--text-shadow-color",
        applies: |r| r.get("BackColour").is_some(),
        value: |r, _| convert_color(field(r, "BackColour")),
    },
    StyleRule {
        property: "font-weight",
        applies: |r| is_truthy(r, "Bold"),
        value: |_, _| Ok("bold".to_string()),
    },
    StyleRule {
        property: "font-style",
        applies: |r| is_truthy(r, "Italic"),
        value: |_, _| Ok("italic".to_string()),
    },
    StyleRule {
        // WebVTT cannot combine both decorations; strike-out wins.
        property: "text-decoration",
        applies: |r| is_truthy(r, "Underline") || is_truthy(r, "StrikeOut"),
        value: |r, _| {
            let decoration = if is_truthy(r, "StrikeOut") { "line-through" } else { "underline" };
            Ok(decoration.to_string())
        },
    },
    StyleRule {
        property: "text-shadow",
        applies: |r| r.get("BorderStyle") == Some("1") && r.get("Shadow").is_some(),
        value: |r, _| {
            let depth = number(r, "Shadow")?;
            Ok(format!("{}em", depth / SHADOW_EM_DIVISOR))
        },
    },
];

/// Convert one `Style:` row into a WebVTT style.
///
/// `reference_height` is the script's `PlayResY`; font sizes become a
/// percentage of the viewport height relative to it.
pub fn convert_style(record: &Record, reference_height: f64) -> Result<WebVttStyle, ConversionError> {
    let mut style = WebVttStyle {
        name: record.get("Name").unwrap_or_default().to_string(),
        properties: Vec::new(),
    };

    for rule in STYLE_RULES.iter().filter(|rule| (rule.applies)(record)) {
        let value = (rule.value)(record, reference_height)?;
        style.set_property(rule.property, value);
    }

    Ok(style)
}

fn field<'a>(record: &'a Record, name: &str) -> &'a str {
    record.get(name).unwrap_or_default()
}

fn number(record: &Record, name: &str) -> Result<f64, ConversionError> {
    let raw = field(record, name);
    raw.trim()
        .parse::<f64>()
        .map_err(|_| ConversionError::InvalidNumber {
            field: name.to_string(),
            value: raw.to_string(),
        })
}

/// ASS booleans are `-1`/`0`; any non-zero integer counts as set
fn is_truthy(record: &Record, name: &str) -> bool {
    record
        .get(name)
        .and_then(|v| v.trim().parse::<i64>().ok())
        .is_some_and(|v| v != 0)
}
