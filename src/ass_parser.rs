/*!
 * Section parser for ASS/SSA scripts.
 *
 * Splits a script into its `[Section]` blocks and each block into typed
 * items: comments, `Key: value` rows, `Format:` declarations and data rows
 * keyed by the most recent `Format:` declaration. The parser knows nothing
 * about WebVTT; it only produces the structure the converter walks.
 */

use log::debug;
use std::fmt;

/// Kind of an ASS section, derived from its `[Header]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionKind {
    /// `[Script Info]`
    ScriptInfo,
    /// `[V4 Styles]` (SSA)
    V4Styles,
    /// `[V4+ Styles]` (ASS)
    V4PlusStyles,
    /// `[Events]`
    Events,
    /// Any other header, e.g. `[Fonts]` or `[Graphics]`
    Unknown(String),
}

impl SectionKind {
    /// Map a header name (without brackets) to its kind
    pub fn from_header(name: &str) -> Self {
        let name = name.trim();
        match name.to_lowercase().as_str() {
            "script info" => Self::ScriptInfo,
            "v4 styles" => Self::V4Styles,
            "v4+ styles" => Self::V4PlusStyles,
            "events" => Self::Events,
            _ => Self::Unknown(name.to_string()),
        }
    }

    /// Whether this section holds style definitions
    pub fn is_styles(&self) -> bool {
        matches!(self, Self::V4Styles | Self::V4PlusStyles)
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ScriptInfo => write!(f, "Script Info"),
            Self::V4Styles => write!(f, "V4 Styles"),
            Self::V4PlusStyles => write!(f, "V4+ Styles"),
            Self::Events => write!(f, "Events"),
            Self::Unknown(name) => write!(f, "{}", name),
        }
    }
}

/// A data row (`Style:`, `Dialogue:`, ...) keyed by the section's Format names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    /// Build a record from `(name, value)` pairs
    pub fn new<K, V, I>(fields: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Record {
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Look up a field by name, ignoring ASCII case.
    ///
    /// Empty values count as absent.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
            .filter(|value| !value.is_empty())
    }

    /// Fields in declaration order
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values: Vec<&str> = self.fields.iter().map(|(_, v)| v.as_str()).collect();
        write!(f, "{}", values.join(","))
    }
}

/// Value part of a `Key: value` row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemValue {
    /// Plain text, as in `[Script Info]`
    Text(String),
    /// Column names of a `Format:` row
    Format(Vec<String>),
    /// Data row split by the preceding `Format:` row
    Record(Record),
}

impl fmt::Display for ItemValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{}", text),
            Self::Format(names) => write!(f, "{}", names.join(", ")),
            Self::Record(record) => write!(f, "{}", record),
        }
    }
}

/// One parsed line of a section
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    /// `; comment` line, text after the semicolon
    Comment(String),
    /// `Key: value` line
    KeyValue { key: String, value: ItemValue },
}

/// A `[Header]` block and its items in source order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub kind: SectionKind,
    pub items: Vec<Item>,
}

/// Parser options
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Keep `;` comment lines as `Item::Comment` instead of dropping them
    pub comments: bool,
}

/// Parse an ASS script into its sections.
///
/// Never fails: lines that fit no known shape are skipped.
pub fn parse(text: &str, options: &ParseOptions) -> Vec<Section> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut sections: Vec<Section> = Vec::new();
    let mut format: Option<Vec<String>> = None;

    for (line_index, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            sections.push(Section {
                kind: SectionKind::from_header(&line[1..line.len() - 1]),
                items: Vec::new(),
            });
            format = None;
            continue;
        }

        let Some(section) = sections.last_mut() else {
            debug!("Ignoring line {} outside of any section", line_index + 1);
            continue;
        };

        if let Some(comment) = line.strip_prefix(';') {
            if options.comments {
                section.items.push(Item::Comment(comment.trim_start().to_string()));
            }
            continue;
        }

        let Some((key, value)) = line.split_once(':') else {
            debug!("Ignoring line {} without a key: {}", line_index + 1, line);
            continue;
        };
        let key = key.trim().to_string();
        let value = value.trim();

        let value = if key == "Format" {
            let names: Vec<String> = value.split(',').map(|name| name.trim().to_string()).collect();
            format = Some(names.clone());
            ItemValue::Format(names)
        } else if let Some(names) = &format {
            ItemValue::Record(split_record(value, names))
        } else {
            ItemValue::Text(value.to_string())
        };

        section.items.push(Item::KeyValue { key, value });
    }

    sections
}

/// Split a data row into at most `names.len()` fields.
///
/// The last field keeps any remaining commas since dialogue text may contain them.
fn split_record(value: &str, names: &[String]) -> Record {
    let parts = value.splitn(names.len().max(1), ',');
    Record::new(
        names
            .iter()
            .zip(parts)
            .map(|(name, part)| (name.clone(), part.trim().to_string())),
    )
}
