//! Code snippet round-trip: emit a composed request as source text, and
//! parse hand-edited source text back into a structured request.
//!
//! Emission is exact; parsing is best-effort. Each language's extraction
//! sits behind [`parse`] returning `Option` so the strategy can be swapped
//! (regex today, a real tokenizer tomorrow) without touching callers.

mod emit;
mod parse;

pub use emit::{emit, emit_all, emit_curl, emit_javascript, emit_python};
pub use parse::{parse, ParsedRequest};

/// Target languages for code emission and parsing. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Javascript,
    Python,
    Curl,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Javascript => "javascript",
            Language::Python => "python",
            Language::Curl => "curl",
        }
    }

    /// Resolve a UI language tag. Accepts the aliases the snippet tabs and
    /// fenced code blocks use (`js`, `py`, `bash`, `sh`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "javascript" | "js" => Some(Language::Javascript),
            "python" | "py" => Some(Language::Python),
            "curl" | "bash" | "sh" => Some(Language::Curl),
            _ => None,
        }
    }

    pub fn all() -> [Language; 3] {
        [Language::Javascript, Language::Python, Language::Curl]
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One rendered code example. The engine produces and consumes the `code`
/// string only; it never retains snippets.
#[derive(Debug, Clone)]
pub struct ContentSnippet {
    pub language: Language,
    pub code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_aliases() {
        assert_eq!(Language::from_name("JS"), Some(Language::Javascript));
        assert_eq!(Language::from_name("py"), Some(Language::Python));
        assert_eq!(Language::from_name("bash"), Some(Language::Curl));
        assert_eq!(Language::from_name("ruby"), None);
    }
}
