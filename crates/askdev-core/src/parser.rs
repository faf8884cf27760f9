//! JVM stack trace header parsing.
//!
//! Recognises the first `Exception in thread "..."` header together with the
//! `at ...(File.java:NN)` frame that follows it. Java traces usually carry a
//! message after the exception type; Kotlin traces often do not.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    /// Header with `: message`, then the first frame.
    static ref WITH_MESSAGE: Regex =
        Regex::new(r#"Exception in thread "(.*?)" (.*?): (.*?)\n\s*at .*?\((.*?):(\d+)\)"#).unwrap();
    /// Header without message, then the first frame.
    static ref WITHOUT_MESSAGE: Regex =
        Regex::new(r#"Exception in thread "(.*?)" (.*?)\n\s*at .*?\((.*?):(\d+)\)"#).unwrap();
}

/// Fields of a parsed stack trace header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StackTrace {
    pub thread: String,
    /// Exception type as written, usually fully qualified.
    pub exception: String,
    /// Empty when the header has no message.
    pub message: String,
    pub file_path: String,
    pub line_number: u32,
}

/// Parses a captured line number; values past `u32::MAX` drop the match.
pub(crate) fn parse_line_number(raw: &str, context: &str) -> Option<u32> {
    match raw.parse() {
        Ok(n) => Some(n),
        Err(_) => {
            tracing::warn!(line = raw, context, "line number out of range, skipping");
            None
        }
    }
}

/// Parses the first stack trace header in `log_content`.
pub fn parse_stack_trace(log_content: &str) -> Option<StackTrace> {
    let text = log_content.trim();

    if let Some(caps) = WITH_MESSAGE.captures(text) {
        return Some(StackTrace {
            thread: caps[1].to_string(),
            exception: caps[2].to_string(),
            message: caps[3].to_string(),
            file_path: caps[4].to_string(),
            line_number: parse_line_number(&caps[5], "stack trace")?,
        });
    }

    let caps = WITHOUT_MESSAGE.captures(text)?;
    Some(StackTrace {
        thread: caps[1].to_string(),
        exception: caps[2].to_string(),
        message: String::new(),
        file_path: caps[3].to_string(),
        line_number: parse_line_number(&caps[4], "stack trace")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_java_trace_with_message() {
        let log = r#"
Exception in thread "main" java.lang.NullPointerException: Cannot invoke "String.length()" because "s" is null
	at com.example.MyClass.main(MyClass.java:10)
"#;
        let t = parse_stack_trace(log).expect("java trace should parse");
        assert_eq!(t.thread, "main");
        assert_eq!(t.exception, "java.lang.NullPointerException");
        assert_eq!(
            t.message,
            r#"Cannot invoke "String.length()" because "s" is null"#
        );
        assert_eq!(t.file_path, "MyClass.java");
        assert_eq!(t.line_number, 10);
    }

    #[test]
    fn parses_kotlin_trace_without_message() {
        let log = r#"
Exception in thread "main" kotlin.KotlinNullPointerException
	at com.example.MyKtClass.main(MyKtClass.kt:12)
"#;
        let t = parse_stack_trace(log).expect("kotlin trace should parse");
        assert_eq!(t.thread, "main");
        assert_eq!(t.exception, "kotlin.KotlinNullPointerException");
        assert_eq!(t.message, "");
        assert_eq!(t.file_path, "MyKtClass.kt");
        assert_eq!(t.line_number, 12);
    }

    #[test]
    fn returns_none_without_frame() {
        assert_eq!(
            parse_stack_trace("Exception in thread \"main\" java.lang.Error: boom"),
            None
        );
        assert_eq!(parse_stack_trace("all good"), None);
    }

    #[test]
    fn oversized_line_number_is_rejected() {
        let log = "Exception in thread \"t\" java.lang.Error: x\n at A.b(A.java:99999999999)";
        assert_eq!(parse_stack_trace(log), None);
    }

    #[test]
    fn exception_without_package_parses() {
        let log = "Exception in thread \"t\" Boom\n at A.b(A.java:3)";
        let t = parse_stack_trace(log).unwrap();
        assert_eq!(t.exception, "Boom");
        assert_eq!(t.line_number, 3);
    }
}
