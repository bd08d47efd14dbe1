//! Snippet linting.
//!
//! Checks emitted or hand-edited code examples for the problems that most
//! often make a displayed request un-executable: placeholder hosts, values
//! that leaked in as `undefined`/`null`, missing content negotiation, and
//! stale or mis-shaped date literals. Linting never blocks; findings are
//! reported with a severity and the caller decides what to surface.

use crate::snippet::Language;
use chrono::{Datelike, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

static LEAKED_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)https?://[^\s'\x22]*(undefined|null)").unwrap());
static PLACEHOLDER_HOST_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)https?://(api\.)?example\.com").unwrap());
static BARE_LOCALHOST_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"http://localhost(?:[^:0-9]|$)").unwrap());
static DATE_LITERAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"['\x22](\d{4})-(\d{2})-(\d{2})['\x22]"#).unwrap());
static SLASHED_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"['\x22]\d{2}/\d{2}/\d{4}['\x22]"#).unwrap());

/// Severity of a lint finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintSeverity {
    /// The snippet will not work as displayed.
    Error,
    /// The snippet is suspicious but may still run.
    Warning,
}

impl std::fmt::Display for LintSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LintSeverity::Error => write!(f, "error"),
            LintSeverity::Warning => write!(f, "warning"),
        }
    }
}

/// A lint finding on a code snippet.
#[derive(Debug, Clone)]
pub struct LintIssue {
    /// Language of the offending snippet.
    pub language: Language,
    pub severity: LintSeverity,
    /// Stable machine-readable code (e.g. `placeholder_url`).
    pub kind: String,
    pub message: String,
}

impl LintIssue {
    fn new(
        language: Language,
        severity: LintSeverity,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        LintIssue {
            language,
            severity,
            kind: kind.into(),
            message: message.into(),
        }
    }
}

/// Lint one code snippet.
pub fn lint_snippet(language: Language, code: &str) -> Vec<LintIssue> {
    let mut issues = Vec::new();

    if let Some(found) = LEAKED_URL_RE.find(code) {
        issues.push(LintIssue::new(
            language,
            LintSeverity::Error,
            "malformed_url",
            format!(
                "Snippet contains a URL with \"undefined\" or \"null\": {}",
                found.as_str()
            ),
        ));
    }

    if PLACEHOLDER_HOST_RE.is_match(code) {
        issues.push(LintIssue::new(
            language,
            LintSeverity::Warning,
            "placeholder_url",
            "Snippet contains a placeholder URL (example.com) - use the actual API endpoint",
        ));
    }
    if BARE_LOCALHOST_RE.is_match(code) {
        issues.push(LintIssue::new(
            language,
            LintSeverity::Warning,
            "placeholder_url",
            "Snippet targets localhost without a port",
        ));
    }

    check_write_method_headers(language, code, &mut issues);
    check_date_literals(language, code, &mut issues);

    issues
}

/// POST/PUT/PATCH snippets should carry a Content-Type header.
fn check_write_method_headers(language: Language, code: &str, issues: &mut Vec<LintIssue>) {
    let upper = code.to_uppercase();
    let writes = ["POST", "PUT", "PATCH"].iter().any(|m| upper.contains(m));
    if writes && !upper.contains("CONTENT-TYPE") && !upper.contains("CONTENT_TYPE") {
        issues.push(LintIssue::new(
            language,
            LintSeverity::Warning,
            "missing_content_type",
            "POST/PUT/PATCH requests should include a Content-Type header",
        ));
    }
}

/// Date literals should be ISO-shaped and not come from a past year.
fn check_date_literals(language: Language, code: &str, issues: &mut Vec<LintIssue>) {
    if SLASHED_DATE_RE.is_match(code) {
        issues.push(LintIssue::new(
            language,
            LintSeverity::Warning,
            "invalid_date_format",
            "Date literals should use the YYYY-MM-DD format",
        ));
    }

    let current_year = Utc::now().year();
    for caps in DATE_LITERAL_RE.captures_iter(code) {
        let Ok(year) = caps[1].parse::<i32>() else {
            continue;
        };
        if year < current_year {
            issues.push(LintIssue::new(
                language,
                LintSeverity::Error,
                "outdated_year_in_date",
                format!(
                    "Date literal uses year {year}; the current year is {current_year}"
                ),
            ));
            break;
        }
    }
}
