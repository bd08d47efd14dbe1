use serde_json::Value;
use std::fmt;
use std::path::Path;

/// Rejection of a document that is not OpenAPI/Swagger shaped
///
/// This is the only hard failure in the engine; everything downstream of
/// loading degrades softly instead of erroring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidSpecError {
    /// Neither an `openapi` nor a `swagger` top-level key is present.
    MissingVersionMarker,
    /// The raw text could not be parsed as JSON or YAML.
    Unparseable {
        /// Parser message for the JSON attempt (the YAML attempt ran too).
        detail: String,
    },
}

impl fmt::Display for InvalidSpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidSpecError::MissingVersionMarker => {
                write!(f, "not an OpenAPI/Swagger document")
            }
            InvalidSpecError::Unparseable { detail } => {
                write!(f, "document is not valid JSON or YAML: {detail}")
            }
        }
    }
}

impl std::error::Error for InvalidSpecError {}

/// A loaded API specification document.
///
/// Only the top-level version marker is validated at load time. `info`,
/// `servers` and `paths` are read lazily and may be missing or malformed;
/// later stages degrade per their own contracts. The inner [`Value`] keeps
/// object keys in source order, which the catalog relies on.
#[derive(Debug, Clone)]
pub struct SpecDocument {
    /// `info.title`, empty string when absent.
    pub title: String,
    /// `info.version`, empty string when absent.
    pub version: String,
    /// `servers[0].url`, when present.
    pub base_url: Option<String>,
    document: Value,
}

impl SpecDocument {
    /// Wrap an already-parsed document.
    ///
    /// # Errors
    ///
    /// [`InvalidSpecError::MissingVersionMarker`] when the value carries
    /// neither an `openapi` nor a `swagger` key.
    pub fn from_value(document: Value) -> Result<Self, InvalidSpecError> {
        if document.get("openapi").is_none() && document.get("swagger").is_none() {
            return Err(InvalidSpecError::MissingVersionMarker);
        }

        let title = document
            .pointer("/info/title")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let version = document
            .pointer("/info/version")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let base_url = document
            .pointer("/servers/0/url")
            .and_then(Value::as_str)
            .map(str::to_string);

        tracing::debug!(title = %title, version = %version, "loaded spec document");
        Ok(SpecDocument {
            title,
            version,
            base_url,
            document,
        })
    }

    /// Parse a raw document string. JSON is tried first, then YAML, so
    /// pasted Swagger YAML loads the same as exported JSON.
    pub fn parse(raw: &str) -> Result<Self, InvalidSpecError> {
        let value: Value = match serde_json::from_str(raw) {
            Ok(v) => v,
            Err(json_err) => serde_yaml::from_str(raw).map_err(|_| {
                InvalidSpecError::Unparseable {
                    detail: json_err.to_string(),
                }
            })?,
        };
        Self::from_value(value)
    }

    /// The raw `paths` object, when present and object-shaped.
    pub fn paths(&self) -> Option<&serde_json::Map<String, Value>> {
        self.document.get("paths").and_then(Value::as_object)
    }

    /// The raw parsed document.
    pub fn raw(&self) -> &Value {
        &self.document
    }
}

/// Load a specification document from a string or pre-parsed value.
pub fn load_document(raw: &str) -> Result<SpecDocument, InvalidSpecError> {
    SpecDocument::parse(raw)
}

/// Load a specification document from a file path.
///
/// File I/O lives at this boundary only; the engine itself never touches
/// the filesystem.
pub fn load_document_file(path: &Path) -> anyhow::Result<SpecDocument> {
    let raw = std::fs::read_to_string(path)?;
    Ok(SpecDocument::parse(&raw)?)
}
