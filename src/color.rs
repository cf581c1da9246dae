/*!
 * ASS colour conversion.
 *
 * ASS stores colours as 32-bit integers in ABGR order, written either as
 * `&HAABBGGRR` hex or as a plain decimal number. WebVTT cue styling wants CSS
 * colours, and the CSS profile it allows has no 8-digit hex form, so
 * translucent colours come out as `rgba()`.
 */

use crate::errors::ConversionError;

const SIGN_CORRECTION: i64 = 1 << 31;

/// Colour channels unpacked from an ABGR value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Unpack an ABGR value: red is the low byte, alpha the high byte.
    ///
    /// A zero alpha is read as fully opaque, since many producers write
    /// `&H00BBGGRR` meaning "no transparency".
    pub fn from_abgr(value: u32) -> Self {
        let a = ((value >> 24) & 0xFF) as u8;
        Rgba {
            r: (value & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: ((value >> 16) & 0xFF) as u8,
            a: if a == 0 { 255 } else { a },
        }
    }

    /// CSS representation: `#rrggbb` when opaque, `rgba()` otherwise
    pub fn to_css(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!(
                "rgba({}, {}, {}, {})",
                self.r,
                self.g,
                self.b,
                f64::from(self.a) / 255.0
            )
        }
    }
}

/// Parse an ASS colour field into its 32-bit ABGR value
pub fn parse_ass_color(value: &str) -> Result<u32, ConversionError> {
    let invalid = || ConversionError::InvalidColor(value.to_string());
    let trimmed = value.trim();

    let parsed: i64 = match trimmed
        .strip_prefix("&H")
        .or_else(|| trimmed.strip_prefix("&h"))
    {
        Some(hex) => {
            let hex = hex.trim_end_matches('&');
            if hex.is_empty() || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            i64::from_str_radix(hex, 16).map_err(|_| invalid())?
        }
        None => trimmed.parse::<i64>().map_err(|_| invalid())?,
    };

    // Values written as signed 32-bit integers come out negative.
    let corrected = if parsed < 0 { parsed + SIGN_CORRECTION } else { parsed };

    u32::try_from(corrected).map_err(|_| invalid())
}

/// Convert an ASS colour field to a CSS colour string
pub fn convert_color(value: &str) -> Result<String, ConversionError> {
    parse_ass_color(value).map(|abgr| Rgba::from_abgr(abgr).to_css())
}
