//! Stack frame extraction for JVM and Dart traces.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use crate::parser::parse_line_number;

lazy_static! {
    /// `at com.example.MyClass.method(MyClass.java:42)`
    static ref JVM_FRAME: Regex = Regex::new(r"at (.+?)\((.+?):(\d+)\)").unwrap();
    /// `#0   MyWidget.build (package:my_app/my_widget.dart:24:16)`
    static ref DART_FRAME: Regex =
        Regex::new(r"#\d+\s+(.+?)\s*\((.+?):(\d+)(?::\d+)?\)").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Language {
    #[serde(rename = "java/kotlin")]
    JavaKotlin,
    #[serde(rename = "dart/flutter")]
    DartFlutter,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Language::JavaKotlin => "java/kotlin",
            Language::DartFlutter => "dart/flutter",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StackFrame {
    pub symbol: String,
    pub file: String,
    pub line: u32,
    pub language: Language,
}

fn frame_from_line(line: &str) -> Option<StackFrame> {
    let (caps, language) = match JVM_FRAME.captures(line) {
        Some(caps) => (caps, Language::JavaKotlin),
        None => (DART_FRAME.captures(line)?, Language::DartFlutter),
    };
    Some(StackFrame {
        symbol: caps[1].trim().to_string(),
        file: caps[2].to_string(),
        line: parse_line_number(&caps[3], "stack frame")?,
        language,
    })
}

/// Extracts frames from `block` in source order. Lines that are not frames
/// are skipped.
pub fn extract_frames(block: &str) -> Vec<StackFrame> {
    block.lines().filter_map(frame_from_line).collect()
}
