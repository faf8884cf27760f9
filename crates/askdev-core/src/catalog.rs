//! Known-error catalog.
//!
//! Entries are searched in order and the first hit wins, so the catalog is an
//! ordered list rather than a map. Patterns are regular expressions (most are
//! plain exception names) compiled with `.` matching newlines, since a block
//! may span many lines.
//!
//! The built-in catalog is embedded at compile time; there is no on-disk
//! error database.

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::errors::{AskdevError, Result};

const BUILTIN_JSON: &str = include_str!("catalog.json");

lazy_static! {
    static ref BUILTIN: Catalog =
        Catalog::from_json(BUILTIN_JSON).expect("embedded catalog.json must be valid");
}

/// HTTP status codes with one-line explanations.
pub const HTTP_STATUS: &[(&str, &str)] = &[
    ("404", "Not Found - The requested resource could not be found."),
    ("500", "Internal Server Error - The server encountered an unexpected condition."),
    ("403", "Forbidden - The server understood the request, but is refusing to fulfill it."),
    ("401", "Unauthorized - Authentication is required and has failed or has not yet been provided."),
    ("400", "Bad Request - The server could not understand the request due to invalid syntax."),
    ("408", "Request Timeout - The server timed out waiting for the request."),
    ("429", "Too Many Requests - The user has sent too many requests in a given amount of time."),
    ("503", "Service Unavailable - The server is currently unable to handle the request due to temporary overloading or maintenance."),
    ("504", "Gateway Timeout - The server, while acting as a gateway or proxy, did not receive a timely response from the upstream server."),
];

/// Message for an HTTP status code, if known.
pub fn status_message(code: &str) -> Option<&'static str> {
    let code = code.trim();
    HTTP_STATUS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, msg)| *msg)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub pattern: String,
    pub cause: String,
    pub suggestion: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone)]
struct Compiled {
    entry: CatalogEntry,
    regex: Regex,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<Compiled>,
}

impl Catalog {
    /// The embedded Android error catalog.
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Parses a JSON array of entries.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    pub fn from_entries(entries: Vec<CatalogEntry>) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut compiled = Vec::with_capacity(entries.len());

        for entry in entries {
            if !seen.insert(entry.pattern.to_ascii_lowercase()) {
                return Err(AskdevError::DuplicatePattern(entry.pattern));
            }
            let regex = RegexBuilder::new(&entry.pattern)
                .dot_matches_new_line(true)
                .build()
                .map_err(|source| AskdevError::InvalidPattern {
                    pattern: entry.pattern.clone(),
                    source,
                })?;
            compiled.push(Compiled { entry, regex });
        }

        Ok(Self { entries: compiled })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter().map(|c| &c.entry)
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.entries().map(|e| e.pattern.as_str())
    }

    /// First entry whose pattern occurs anywhere in `block`.
    pub fn match_block(&self, block: &str) -> Option<&CatalogEntry> {
        self.entries
            .iter()
            .find(|c| c.regex.is_match(block))
            .map(|c| &c.entry)
    }

    /// Case-insensitive lookup by pattern text.
    ///
    /// A qualified name such as `java.lang.NullPointerException` also tries
    /// its shorter dotted suffixes, so `NullPointerException` is found while
    /// `WindowManager.BadTokenException` still matches whole.
    pub fn lookup(&self, name: &str) -> Option<&CatalogEntry> {
        let name = name.trim();
        std::iter::successors(Some(name), |s| s.split_once('.').map(|(_, rest)| rest))
            .filter(|candidate| !candidate.is_empty())
            .find_map(|candidate| {
                self.entries()
                    .find(|e| e.pattern.eq_ignore_ascii_case(candidate))
            })
    }
}
