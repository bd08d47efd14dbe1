//! Pre-execution validation of a structured request.
//!
//! Runs after a snippet edit has been parsed back into a descriptor and
//! before the execution collaborator is handed the request. Validation
//! never rejects with an error: it reports a list of structured issues and
//! leaves the decision to the caller.

use crate::compose::RequestDescriptor;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::collections::HashSet;

const VALID_METHODS: [&str; 7] = ["GET", "POST", "PUT", "DELETE", "PATCH", "HEAD", "OPTIONS"];
const METHODS_WITHOUT_BODY: [&str; 4] = ["GET", "DELETE", "HEAD", "OPTIONS"];
const METHODS_WITH_BODY: [&str; 3] = ["POST", "PUT", "PATCH"];

/// Field names that are treated as carrying calendar dates.
const DATE_FIELDS: [&str; 7] = [
    "date", "checkin", "checkout", "startdate", "enddate", "createdat", "updatedat",
];

static PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{[A-Za-z_][A-Za-z0-9_]*\}").unwrap());
static DATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

/// One finding from request validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// The request field the issue is about (e.g. `url`, `body.checkIn`).
    pub field: String,
    /// Stable machine-readable code (e.g. `unresolved_placeholders`).
    pub code: String,
    /// Human-readable description.
    pub message: String,
}

impl ValidationIssue {
    pub fn new(
        field: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        ValidationIssue {
            field: field.into(),
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Validate a request descriptor before execution.
///
/// Returns every issue found; an empty vector means the request is safe to
/// hand to the execution collaborator. Auth-credential checks are not done
/// here; credentials belong to an external collaborator.
pub fn validate_request(req: &RequestDescriptor) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    validate_url(req, &mut issues);
    validate_method(req, &mut issues);
    validate_headers(req, &mut issues);
    if let Some(body) = &req.body {
        validate_dates(body, "body", &mut issues);
    }

    issues
}

fn validate_url(req: &RequestDescriptor, issues: &mut Vec<ValidationIssue>) {
    let url = req.url.trim();
    if url.is_empty() {
        issues.push(ValidationIssue::new(
            "url",
            "missing_url",
            "Request URL is required and cannot be empty",
        ));
        return;
    }

    if let Some(found) = PLACEHOLDER_RE.find(url) {
        issues.push(ValidationIssue::new(
            "url",
            "unresolved_placeholders",
            format!(
                "URL contains unresolved placeholder {}. Replace it with an actual value.",
                found.as_str()
            ),
        ));
    }

    let lowered = url.to_lowercase();
    if lowered.contains("undefined") || lowered.contains("/null") {
        issues.push(ValidationIssue::new(
            "url",
            "malformed_url",
            "URL contains \"undefined\" or \"null\" - provide valid values",
        ));
    }

    let without_scheme = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    if without_scheme.contains("//") {
        issues.push(ValidationIssue::new(
            "url",
            "double_slashes",
            "URL contains double slashes - check base URL and path",
        ));
    }

    if url::Url::parse(url).is_err() {
        issues.push(ValidationIssue::new(
            "url",
            "invalid_url",
            format!("URL is not a valid absolute URL: {url}"),
        ));
    }
}

fn validate_method(req: &RequestDescriptor, issues: &mut Vec<ValidationIssue>) {
    let method = req.method.trim();
    if method.is_empty() {
        issues.push(ValidationIssue::new(
            "method",
            "missing_method",
            "HTTP method is required",
        ));
        return;
    }
    if !VALID_METHODS.contains(&method) {
        issues.push(ValidationIssue::new(
            "method",
            "invalid_method",
            format!(
                "Invalid HTTP method '{}'. Must be one of: {}",
                method,
                VALID_METHODS.join(", ")
            ),
        ));
        return;
    }

    let has_body = matches!(&req.body, Some(v) if !v.is_null());
    if METHODS_WITHOUT_BODY.contains(&method) && has_body {
        issues.push(ValidationIssue::new(
            "body",
            "unexpected_body",
            format!("{method} requests must not include a body"),
        ));
    } else if METHODS_WITH_BODY.contains(&method) {
        if !has_body {
            issues.push(ValidationIssue::new(
                "body",
                "missing_body",
                format!("{method} requests must include a valid JSON body"),
            ));
        } else if !req.body.as_ref().is_some_and(Value::is_object) {
            issues.push(ValidationIssue::new(
                "body",
                "invalid_body_format",
                "Request body must be a JSON object",
            ));
        }
    }
}

fn validate_headers(req: &RequestDescriptor, issues: &mut Vec<ValidationIssue>) {
    let mut empty = Vec::new();
    let mut seen = HashSet::new();
    let mut duplicated = false;

    for (name, value) in &req.headers {
        let text = match value {
            Value::String(s) => s.trim().to_string(),
            other => other.to_string(),
        };
        if text.is_empty() || text.eq_ignore_ascii_case("null") || text.eq_ignore_ascii_case("undefined")
        {
            empty.push(name.clone());
        }
        if !seen.insert(name.to_lowercase()) {
            duplicated = true;
        }
    }

    if !empty.is_empty() {
        issues.push(ValidationIssue::new(
            "headers",
            "invalid_header_values",
            format!(
                "Headers contain empty/null/undefined values: {}",
                empty.join(", ")
            ),
        ));
    }
    if duplicated {
        issues.push(ValidationIssue::new(
            "headers",
            "duplicate_headers",
            "Headers contain duplicate keys (case-insensitive)",
        ));
    }
}

/// Check date-named fields for `YYYY-MM-DD` shape and calendar validity.
fn validate_dates(data: &Value, prefix: &str, issues: &mut Vec<ValidationIssue>) {
    let Some(map) = data.as_object() else {
        return;
    };
    for (key, value) in map {
        let lowered = key.to_lowercase();
        if !DATE_FIELDS.iter().any(|f| lowered.contains(f)) {
            continue;
        }
        let Some(text) = value.as_str().map(str::trim).filter(|t| !t.is_empty()) else {
            continue;
        };
        if !DATE_RE.is_match(text) {
            issues.push(ValidationIssue::new(
                format!("{prefix}.{key}"),
                "invalid_date_format",
                format!("Date must follow YYYY-MM-DD format, got: {text}"),
            ));
        } else if NaiveDate::parse_from_str(text, "%Y-%m-%d").is_err() {
            issues.push(ValidationIssue::new(
                format!("{prefix}.{key}"),
                "invalid_date_value",
                format!("Invalid date value: {text}"),
            ));
        }
    }
}
