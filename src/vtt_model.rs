/*!
 * WebVTT output model.
 *
 * The converter produces these structures; `vtt_writer` renders them to text.
 */

use std::fmt;

/// `NOTE` block carrying script metadata or a source comment
#[derive(Debug, Clone, PartialEq)]
pub struct WebVttNote {
    pub text: String,
}

impl WebVttNote {
    pub fn new(text: impl Into<String>) -> Self {
        WebVttNote { text: text.into() }
    }
}

/// Named set of CSS properties, rendered as a `STYLE` block
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WebVttStyle {
    /// ASS style name
    pub name: String,

    /// CSS property/value pairs in mapping order
    pub properties: Vec<(String, String)>,
}

impl WebVttStyle {
    /// Value of a property, if set
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Set a property, replacing an earlier value of the same name
    pub fn set_property(&mut self, name: &str, value: String) {
        match self.properties.iter_mut().find(|(key, _)| key == name) {
            Some(existing) => existing.1 = value,
            None => self.properties.push((name.to_string(), value)),
        }
    }
}

/// Cue text direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Vertical {
    #[default]
    Horizontal,
    RightToLeft,
    LeftToRight,
}

/// Line or position value that is either computed by the renderer or fixed
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AutoOr {
    #[default]
    Auto,
    Value(f64),
}

/// Alignment of the cue box along the line axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineAlign {
    #[default]
    Start,
    Center,
    End,
}

/// Alignment of the cue box along the position axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PositionAlign {
    LineLeft,
    Center,
    LineRight,
    #[default]
    Auto,
}

/// Text alignment inside the cue box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    Start,
    #[default]
    Center,
    End,
    Left,
    Right,
}

impl fmt::Display for LineAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
        };
        write!(f, "{}", s)
    }
}

impl fmt::Display for PositionAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::LineLeft => "line-left",
            Self::Center => "center",
            Self::LineRight => "line-right",
            Self::Auto => "auto",
        };
        write!(f, "{}", s)
    }
}

impl fmt::Display for TextAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
            Self::Left => "left",
            Self::Right => "right",
        };
        write!(f, "{}", s)
    }
}

/// A timed cue converted from one dialogue row.
///
/// Positioning fields always hold the WebVTT defaults: ASS margins,
/// alignment and effects are not translated.
#[derive(Debug, Clone, PartialEq)]
pub struct VttCue {
    pub id: String,
    /// Seconds
    pub start_time: f64,
    /// Seconds
    pub end_time: f64,
    pub pause_on_exit: bool,
    pub vertical: Vertical,
    pub snap_to_lines: bool,
    pub line: AutoOr,
    pub line_align: LineAlign,
    pub position: AutoOr,
    pub position_align: PositionAlign,
    /// Percentage of the video width
    pub size: f64,
    pub align: TextAlign,
    pub text: String,
}

impl VttCue {
    /// Create a cue with default positioning
    pub fn new(id: impl Into<String>, start_time: f64, end_time: f64, text: impl Into<String>) -> Self {
        VttCue {
            id: id.into(),
            start_time,
            end_time,
            pause_on_exit: false,
            vertical: Vertical::default(),
            snap_to_lines: true,
            line: AutoOr::default(),
            line_align: LineAlign::default(),
            position: AutoOr::default(),
            position_align: PositionAlign::default(),
            size: 100.0,
            align: TextAlign::default(),
            text: text.into(),
        }
    }
}

/// One record of the converted document
#[derive(Debug, Clone, PartialEq)]
pub enum VttItem {
    Note(WebVttNote),
    Style(WebVttStyle),
    Cue(VttCue),
}

impl From<WebVttNote> for VttItem {
    fn from(note: WebVttNote) -> Self {
        VttItem::Note(note)
    }
}

impl From<WebVttStyle> for VttItem {
    fn from(style: WebVttStyle) -> Self {
        VttItem::Style(style)
    }
}

impl From<VttCue> for VttItem {
    fn from(cue: VttCue) -> Self {
        VttItem::Cue(cue)
    }
}
