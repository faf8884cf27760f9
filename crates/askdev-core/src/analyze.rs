//! Log analysis: find the first known error in a log and explain it.

use std::fmt;

use serde::Serialize;

use crate::blocks::split_error_blocks;
use crate::catalog::{Catalog, CatalogEntry};
use crate::frames::{extract_frames, StackFrame};
use crate::parser::{parse_stack_trace, StackTrace};

/// How a diagnosis was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchSource {
    /// The block's stack trace header named a catalogued exception.
    ParsedException,
    /// A catalog pattern occurred somewhere in the block.
    PatternSearch,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnosis {
    pub pattern: String,
    pub cause: String,
    pub suggestion: String,
    pub link: Option<String>,
    pub source: MatchSource,
    pub trace: Option<StackTrace>,
    pub frames: Vec<StackFrame>,
    pub block: String,
}

impl Diagnosis {
    fn new(
        entry: &CatalogEntry,
        source: MatchSource,
        trace: Option<StackTrace>,
        block: &str,
    ) -> Self {
        Self {
            pattern: entry.pattern.clone(),
            cause: entry.cause.clone(),
            suggestion: entry.suggestion.clone(),
            link: entry.link.clone(),
            source,
            trace,
            frames: extract_frames(block),
            block: block.to_string(),
        }
    }

    /// Plain-text report for the terminal.
    pub fn to_terminal(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matched Pattern: {}", self.pattern)?;
        writeln!(f, "Cause: {}", self.cause)?;
        writeln!(f, "Suggestion: {}", self.suggestion)?;
        writeln!(f, "Link: {}", self.link.as_deref().unwrap_or("N/A"))?;
        if let Some(trace) = &self.trace {
            writeln!(f, "Thread: {}", trace.thread)?;
            if !trace.message.is_empty() {
                writeln!(f, "Message: {}", trace.message)?;
            }
        }
        for frame in &self.frames {
            writeln!(
                f,
                "File: {}  Line: {}  ({})",
                frame.file, frame.line, frame.language
            )?;
        }
        Ok(())
    }
}

/// Matches log blocks against a [`Catalog`].
#[derive(Debug, Clone)]
pub struct Analyzer {
    catalog: Catalog,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}

impl Analyzer {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Diagnoses the first block that matches a catalog entry.
    ///
    /// Per block, the parsed exception type is tried before a pattern search,
    /// so `java.lang.IllegalStateException` wins over an unrelated pattern
    /// that happens to occur in a later line of the same block.
    pub fn diagnose(&self, log_content: &str) -> Option<Diagnosis> {
        for block in split_error_blocks(log_content) {
            let trace = parse_stack_trace(&block);

            if let Some(entry) = trace
                .as_ref()
                .and_then(|t| self.catalog.lookup(&t.exception))
            {
                tracing::debug!(pattern = %entry.pattern, "matched parsed exception");
                return Some(Diagnosis::new(
                    entry,
                    MatchSource::ParsedException,
                    trace,
                    &block,
                ));
            }

            if let Some(entry) = self.catalog.match_block(&block) {
                tracing::debug!(pattern = %entry.pattern, "matched catalog pattern");
                return Some(Diagnosis::new(
                    entry,
                    MatchSource::PatternSearch,
                    trace,
                    &block,
                ));
            }
        }

        tracing::debug!("no catalog entry matched");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NPE_LOG: &str = "05-12 10:31:02.114 I/App: boot\n\
                           05-12 10:31:02.115 E/AndroidRuntime: FATAL\n\
                           Exception in thread \"main\" java.lang.NullPointerException: s is null\n\
                           \tat com.example.Main.onCreate(Main.java:42)\n\
                           \tat android.app.Activity.performCreate(Activity.java:7)\n";

    #[test]
    fn diagnoses_parsed_exception() {
        let d = Analyzer::default().diagnose(NPE_LOG).expect("should match");
        assert_eq!(d.pattern, "NullPointerException");
        assert_eq!(d.source, MatchSource::ParsedException);
        assert_eq!(d.trace.as_ref().unwrap().message, "s is null");
        assert_eq!(d.frames.len(), 2);
        assert_eq!(d.frames[0].line, 42);
    }

    #[test]
    fn parsed_exception_beats_earlier_pattern() {
        let log = "Exception in thread \"main\" java.lang.IllegalStateException: after OutOfMemoryError\n\
                   \tat a.B.c(B.java:1)";
        let d = Analyzer::default().diagnose(log).unwrap();
        assert_eq!(d.pattern, "IllegalStateException");
    }

    #[test]
    fn falls_back_to_pattern_search() {
        let log = "E/AndroidRuntime: android.content.ActivityNotFoundException: no activity";
        let d = Analyzer::default().diagnose(log).unwrap();
        assert_eq!(d.pattern, "ActivityNotFoundException");
        assert_eq!(d.source, MatchSource::PatternSearch);
        assert!(d.trace.is_none());
        assert!(d.frames.is_empty());
    }

    #[test]
    fn unknown_errors_yield_none() {
        assert!(Analyzer::default()
            .diagnose("java.lang.UnknownThingError: ???")
            .is_none());
        assert!(Analyzer::default().diagnose("").is_none());
    }

    #[test]
    fn terminal_report_lists_frames() {
        let d = Analyzer::default().diagnose(NPE_LOG).unwrap();
        let text = d.to_terminal();
        assert!(text.starts_with("Matched Pattern: NullPointerException\n"));
        assert!(text.contains("Link: https://developer.android.com/reference/java/lang/NullPointerException"));
        assert!(text.contains("File: Main.java  Line: 42  (java/kotlin)\n"));
        assert!(text.contains("Message: s is null\n"));
    }

    #[test]
    fn diagnosis_serializes_source_snake_case() {
        let d = Analyzer::default().diagnose(NPE_LOG).unwrap();
        let v = serde_json::to_value(&d).unwrap();
        assert_eq!(v["source"], "parsed_exception");
        assert_eq!(v["frames"][0]["language"], "java/kotlin");
    }
}
