/*!
 * Tests for the style and event row converters
 */

use ass2vtt::ass_parser::Record;
use ass2vtt::errors::ConversionError;
use ass2vtt::event_converter::{convert_event, normalize_text};
use ass2vtt::style_converter::{convert_style, STYLE_RULES};

/// Test that the rule table lists every property once, in output order
#[test]
fn test_styleRules_shouldListPropertiesInOutputOrder() {
    let properties: Vec<&str> = STYLE_RULES.iter().map(|rule| rule.property).collect();
    assert_eq!(
        properties,
        vec![
            "font-family",
            "font-size",
            "color",
            "--text-shadow-color",
            "font-weight",
            "font-style",
            "text-decoration",
            "text-shadow",
        ]
    );
}

/// Test the font size ratio against several reference heights
#[test]
fn test_convertStyle_withReferenceHeights_shouldScaleFontSize() {
    let row = Record::new([("Name", "Default"), ("Fontsize", "54")]);

    for (height, expected) in [(1080.0, "5.00vh"), (720.0, "7.50vh"), (288.0, "18.75vh")] {
        let style = convert_style(&row, height).unwrap();
        assert_eq!(style.property("font-size"), Some(expected));
    }
}

/// Test that an SSA style row without StrikeOut converts
#[test]
fn test_convertStyle_withSsaRow_shouldConvert() {
    let row = Record::new([
        ("Name", "Default"),
        ("Fontname", "Tahoma"),
        ("Fontsize", "24"),
        ("PrimaryColour", "16777215"),
        ("Bold", "-1"),
        ("Italic", "0"),
        ("BorderStyle", "1"),
        ("Shadow", "0"),
    ]);

    let style = convert_style(&row, 480.0).unwrap();

    assert_eq!(style.property("font-family"), Some("Tahoma"));
    assert_eq!(style.property("font-size"), Some("5.00vh"));
    assert_eq!(style.property("color"), Some("#ffffff"));
    assert_eq!(style.property("font-weight"), Some("bold"));
    assert_eq!(style.property("font-style"), None);
    assert_eq!(style.property("text-decoration"), None);
    assert_eq!(style.property("text-shadow"), Some("0em"));
}

/// Test that StrikeOut alone produces a line-through decoration
#[test]
fn test_convertStyle_withStrikeOutOnly_shouldUseLineThrough() {
    let row = Record::new([("Name", "Gone"), ("StrikeOut", "-1")]);
    let style = convert_style(&row, 720.0).unwrap();
    assert_eq!(style.property("text-decoration"), Some("line-through"));
}

/// Test that a non-numeric font size names the field
#[test]
fn test_convertStyle_withBadFontSize_shouldFail() {
    let row = Record::new([("Name", "Default"), ("Fontsize", "big")]);
    assert_eq!(
        convert_style(&row, 720.0),
        Err(ConversionError::InvalidNumber {
            field: "Fontsize".to_string(),
            value: "big".to_string(),
        })
    );
}

/// Test that a malformed colour aborts the style
#[test]
fn test_convertStyle_withBadColour_shouldFail() {
    let row = Record::new([("Name", "Default"), ("PrimaryColour", "&HXYZ")]);
    assert_eq!(
        convert_style(&row, 720.0),
        Err(ConversionError::InvalidColor("&HXYZ".to_string()))
    );
}

/// Test that a dialogue row without a name gets an empty id
#[test]
fn test_convertEvent_withoutName_shouldHaveEmptyId() {
    let row = Record::new([
        ("Start", "0:00:10.00"),
        ("End", "0:00:12.34"),
        ("Name", ""),
        ("Text", "Plain"),
    ]);

    let cue = convert_event(&row).unwrap();

    assert_eq!(cue.id, "");
    assert!((cue.end_time - 12.34).abs() < 1e-9);
    assert_eq!(cue.text, "Plain");
}

/// Test that a bad end time is reported with its text
#[test]
fn test_convertEvent_withBadEnd_shouldFail() {
    let row = Record::new([("Start", "0:00:10.00"), ("End", "soon"), ("Text", "x")]);
    assert_eq!(
        convert_event(&row),
        Err(ConversionError::InvalidTimestamp("soon".to_string()))
    );
}

/// Test that soft breaks are not converted
#[test]
fn test_normalizeText_withSoftBreak_shouldKeepIt() {
    assert_eq!(normalize_text("a\\nb\\Nc"), "a\\nb\nc");
}

/// Test that converting the same row twice gives the same style
#[test]
fn test_convertStyle_calledTwice_shouldBeIdempotent() {
    let row = Record::new([
        ("Name", "Default"),
        ("Fontname", "Arial"),
        ("Fontsize", "36"),
        ("PrimaryColour", "&H00FFFFFF"),
        ("BackColour", "&H80000000"),
        ("Underline", "-1"),
        ("BorderStyle", "1"),
        ("Shadow", "3"),
    ]);

    assert_eq!(convert_style(&row, 720.0), convert_style(&row, 720.0));
}
