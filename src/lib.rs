//! # apiforge
//!
//! **apiforge** is an OpenAPI/Swagger ingestion and example-synthesis engine:
//! it flattens an API document into a navigable endpoint catalog,
//! deterministically synthesizes a representative request for each operation
//! by walking its JSON-Schema-shaped type descriptions, renders that request
//! as idiomatic source code in several target languages, and performs the
//! inverse operation of parsing a hand-edited snippet back into a structured
//! request descriptor ready for validation and execution.
//!
//! ## Architecture
//!
//! The library is organized into several key modules:
//!
//! - **[`spec`]** - document loading, endpoint catalog flattening and search
//! - **[`sample`]** - deterministic example values from JSON-Schema nodes
//! - **[`compose`]** - request synthesis (URL, query, headers, body)
//! - **[`snippet`]** - code emitters and their best-effort inverse parsers
//! - **[`validate`]** - pre-execution request validation
//! - **[`lint`]** - snippet-level checks (placeholders, dates, headers)
//! - **[`cli`]** - thin command-line surface over the engine
//!
//! ## Data Flow
//!
//! ```text
//! raw document ──▶ spec::load_document ──▶ spec::flatten_endpoints
//!                                                   │
//!                                 per endpoint, on demand
//!                                                   ▼
//!                  sample::sample_schema ◀── compose::compose
//!                                                   │
//!                                                   ▼
//!                    snippet::emit_all ──▶ displayed snippets
//!
//! edited snippet ──▶ snippet::parse ──▶ validate::validate_request
//!                                                   │
//!                                                   ▼
//!                                      execution collaborator
//! ```
//!
//! Everything in the engine is a synchronous pure function over in-memory
//! values: no I/O, no shared state, no caching. Synthesis and emission are
//! cheap enough to recompute on every interaction. The only hard failure is
//! [`spec::InvalidSpecError`] at load time; every later stage degrades to a
//! documented default so one malformed fragment of a large document never
//! blocks the rest of the catalog.
//!
//! ## Quick Start
//!
//! ```
//! use apiforge::compose::compose;
//! use apiforge::snippet::{emit, Language};
//! use apiforge::spec::{flatten_endpoints, load_document};
//!
//! let doc = load_document(r#"{
//!     "openapi": "3.0.0",
//!     "servers": [{"url": "https://api.pets.dev/v1"}],
//!     "paths": {"/pets": {"get": {"operationId": "list_pets"}}}
//! }"#).expect("valid document");
//!
//! let endpoints = flatten_endpoints(&doc);
//! let request = compose(&endpoints[0], doc.base_url.as_deref().unwrap_or(""));
//! let curl = emit(Language::Curl, &request);
//! assert!(curl.starts_with("curl 'https://api.pets.dev/v1/pets'"));
//! ```

pub mod cli;
pub mod compose;
pub mod lint;
pub mod sample;
pub mod snippet;
pub mod spec;
pub mod validate;

pub use compose::{compose, compose_with_headers, RequestDescriptor};
pub use lint::{lint_snippet, LintIssue, LintSeverity};
pub use sample::sample_schema;
pub use snippet::{emit, emit_all, parse, ContentSnippet, Language, ParsedRequest};
pub use spec::{
    flatten_endpoints, load_document, load_document_file, search, EndpointDescriptor,
    InvalidSpecError, ParameterLocation, ParameterSpec, SpecDocument,
};
pub use validate::{validate_request, ValidationIssue};
