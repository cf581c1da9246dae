/*!
 * Tests for the WebVTT serializer
 */

use ass2vtt::converter::convert_document;
use ass2vtt::event_converter::normalize_text;
use ass2vtt::vtt_model::{AutoOr, LineAlign, VttCue, VttItem, WebVttNote, WebVttStyle};
use ass2vtt::vtt_writer::{render, style_class_name, VttWriter, WriterOptions};

/// Test that an empty document is just the header
#[test]
fn test_render_withNoItems_shouldWriteHeaderOnly() {
    assert_eq!(render(&[]), "WEBVTT\n");
}

/// Test that multi-line notes keep their lines but lose blank ones
#[test]
fn test_render_withMultiLineNote_shouldDropBlankLines() {
    let text = render(&[VttItem::Note(WebVttNote::new("first\n\nsecond"))]);
    assert_eq!(text, "WEBVTT\n\nNOTE first\nsecond\n");
}

/// Test that notes disappear but styles and cues stay when notes are disabled
#[test]
fn test_render_withNotesDisabled_shouldKeepStylesAndCues() {
    let writer = VttWriter::new(WriterOptions { include_notes: false });
    let items = vec![
        VttItem::Note(WebVttNote::new("Title: x")),
        VttItem::Style(WebVttStyle {
            name: "Main".to_string(),
            properties: vec![("color".to_string(), "#ffffff".to_string())],
        }),
        VttItem::Cue(VttCue::new("", 0.0, 1.0, "hi")),
    ];

    let text = writer.render(&items);

    assert!(!text.contains("NOTE"));
    assert!(text.contains("::cue(.Main) {\n  color: #ffffff;\n}\n"));
    assert!(text.ends_with("00:00:00.000 --> 00:00:01.000\nhi\n"));
}

/// Test that a snapped line number renders without a percent sign
#[test]
fn test_render_withLineSetting_shouldAppendToTiming() {
    let mut cue = VttCue::new("", 0.0, 1.0, "x");
    cue.line = AutoOr::Value(-2.0);
    cue.line_align = LineAlign::End;

    let text = render(&[VttItem::Cue(cue)]);

    assert!(text.contains("00:00:00.000 --> 00:00:01.000 line:-2,end\n"));
}

/// Test that an id containing an arrow cannot be read as a timing line
#[test]
fn test_render_withArrowInId_shouldDefuseArrow() {
    let text = render(&[VttItem::Cue(VttCue::new("A-->B", 0.0, 1.0, "x"))]);
    assert!(text.contains("\nA->B\n00:00:00.000"));
}

/// Test class name sanitizing
#[test]
fn test_styleClassName_withValidName_shouldKeepIt() {
    assert_eq!(style_class_name("Sign-2_alt"), "Sign-2_alt");
    assert_eq!(style_class_name("Über"), "_ber");
}

/// Test that a leading line break does not split the cue
#[test]
fn test_render_withLeadingBreak_shouldKeepTextInCue() {
    let text = render(&convert_document("[Events]\nFormat: Start, End, Text\nDialogue: 0:00:00.00,0:00:01.00,\\NSecond\n").unwrap());
    assert_eq!(text, "WEBVTT\n\n00:00:00.000 --> 00:00:01.000\nSecond\n");
}

/// Test that a trailing line break leaves no blank payload line
#[test]
fn test_render_withTrailingBreak_shouldDropEmptyLine() {
    let cue = VttCue::new("", 0.0, 1.0, normalize_text("First\\N"));
    let text = render(&[VttItem::Cue(cue), VttItem::Cue(VttCue::new("", 1.0, 2.0, "Next"))]);
    assert_eq!(
        text,
        "WEBVTT\n\n00:00:00.000 --> 00:00:01.000\nFirst\n\n00:00:01.000 --> 00:00:02.000\nNext\n"
    );
}

/// Test that class names never start with a digit or a digit-leading dash
#[test]
fn test_styleClassName_withLeadingDigit_shouldPrefixUnderscore() {
    assert_eq!(style_class_name("1Sign"), "_1Sign");
    assert_eq!(style_class_name("-2"), "_-2");
    assert_eq!(style_class_name("--x"), "_--x");
    assert_eq!(style_class_name(""), "_");
    assert_eq!(style_class_name("-dash"), "-dash");
}

/// Test that an arrow inside a property value cannot end the style block
#[test]
fn test_render_withArrowInStyleValue_shouldDefuseArrow() {
    let text = render(&[VttItem::Style(WebVttStyle {
        name: "1Sign".to_string(),
        properties: vec![("font-family".to_string(), "Odd-->Font".to_string())],
    })]);

    assert_eq!(
        text,
        "WEBVTT\n\nSTYLE\n::cue(._1Sign) {\n  font-family: Odd->Font;\n}\n"
    );
}
