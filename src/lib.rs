/*!
 * # ass2vtt - ASS/SSA to WebVTT subtitle conversion
 *
 * A Rust library that turns Advanced SubStation Alpha scripts into the
 * WebVTT note/style/cue model and renders it as WebVTT text.
 *
 * ## Features
 *
 * - Script metadata and comments carried over as `NOTE` blocks
 * - Styles mapped to `::cue` CSS, with font sizes relative to `PlayResY`
 * - ABGR colours converted to CSS hex or `rgba()`
 * - Dialogue converted to timed cues, hard line breaks normalized
 * - Inline override tags passed through untouched
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `ass_parser`: Splits a script into typed sections and items
 * - `converter`: Routes sections to the field converters and orders the output
 * - `style_converter`, `event_converter`: Per-row conversion
 * - `color`, `timestamp`: Unit conversions
 * - `vtt_model`: Output data model
 * - `vtt_writer`: WebVTT text serializer
 * - `app_config`, `app_controller`, `file_utils`: Configuration and batch conversion
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod ass_parser;
pub mod color;
pub mod converter;
pub mod errors;
pub mod event_converter;
pub mod file_utils;
pub mod style_converter;
pub mod timestamp;
pub mod vtt_model;
pub mod vtt_writer;

// Re-export main types for easier usage
pub use app_config::Config;
pub use converter::{convert, convert_document, convert_sections, CollectingSink, DiagnosticSink, LogSink};
pub use errors::{AppError, ConversionError};
pub use vtt_model::{VttCue, VttItem, WebVttNote, WebVttStyle};
pub use vtt_writer::{render, VttWriter, WriterOptions};
