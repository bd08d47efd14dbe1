//! # CLI Module
//!
//! Thin inspection surface over the engine, in the shape of the original
//! product's expand/edit flow minus the network call.
//!
//! ## Commands
//!
//! ### `endpoints`
//!
//! List (or search) the flattened endpoint catalog of a specification:
//!
//! ```bash
//! apiforge endpoints --spec openapi.yaml --query pets
//! ```
//!
//! ### `snippet`
//!
//! Compose a request for one endpoint and print its code snippets:
//!
//! ```bash
//! apiforge snippet --spec openapi.yaml --endpoint "GET /pets/{id}" --lang curl
//! ```
//!
//! ### `parse`
//!
//! Parse an edited snippet file back into a structured request, optionally
//! running validation and lint over it:
//!
//! ```bash
//! apiforge parse --lang javascript --file edited.js --check
//! ```
//!
//! The engine itself reads no files and no environment; all I/O lives here.

mod commands;

pub use commands::{run_cli, Cli, Commands, LangArg};
