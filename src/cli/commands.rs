use crate::compose::compose;
use crate::lint::lint_snippet;
use crate::snippet::{emit, emit_all, Language};
use crate::spec::{flatten_endpoints, load_document_file, search};
use crate::validate::validate_request;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Command-line interface for apiforge
///
/// Loads OpenAPI/Swagger documents, synthesizes example requests, renders
/// them as code snippets and parses edited snippets back.
#[derive(Parser)]
#[command(name = "apiforge")]
#[command(about = "OpenAPI example synthesis and snippet round-trip", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// List or search the endpoint catalog of a specification
    Endpoints {
        /// Path to the OpenAPI/Swagger document (YAML or JSON)
        #[arg(short, long)]
        spec: PathBuf,

        /// Case-insensitive substring filter over method, path, summary
        /// and operationId
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Compose a request for one endpoint and print code snippets
    Snippet {
        /// Path to the OpenAPI/Swagger document (YAML or JSON)
        #[arg(short, long)]
        spec: PathBuf,

        /// Endpoint key, e.g. "GET /pets/{id}"
        #[arg(short, long)]
        endpoint: String,

        /// Limit output to one language (default: all three)
        #[arg(short, long, value_enum)]
        lang: Option<LangArg>,

        /// Override the server base URL from the document
        #[arg(long)]
        base_url: Option<String>,
    },
    /// Parse an edited snippet back into a structured request
    Parse {
        /// Snippet language
        #[arg(short, long, value_enum)]
        lang: LangArg,

        /// File containing the snippet text
        #[arg(short, long)]
        file: PathBuf,

        /// Also run request validation and snippet lint
        #[arg(long, default_value_t = false)]
        check: bool,
    },
}

/// Snippet language argument
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LangArg {
    Javascript,
    Python,
    Curl,
}

impl From<LangArg> for Language {
    fn from(lang: LangArg) -> Self {
        match lang {
            LangArg::Javascript => Language::Javascript,
            LangArg::Python => Language::Python,
            LangArg::Curl => Language::Curl,
        }
    }
}

/// Execute the CLI command provided by the user
///
/// # Errors
///
/// Returns an error if the document cannot be loaded, the requested
/// endpoint does not exist, or the snippet file cannot be read or parsed.
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Endpoints { spec, query } => {
            let doc = load_document_file(spec)?;
            let endpoints = flatten_endpoints(&doc);
            let shown = search(&endpoints, query.as_deref().unwrap_or(""));
            for ep in &shown {
                match &ep.summary {
                    Some(summary) => println!("{:<40} {}", ep.key(), summary),
                    None => println!("{}", ep.key()),
                }
            }
            eprintln!("{} endpoint(s)", shown.len());
            Ok(())
        }
        Commands::Snippet {
            spec,
            endpoint,
            lang,
            base_url,
        } => {
            let doc = load_document_file(spec)?;
            let endpoints = flatten_endpoints(&doc);
            let target = endpoints
                .iter()
                .find(|e| e.key().eq_ignore_ascii_case(endpoint))
                .ok_or_else(|| anyhow::anyhow!("no endpoint matches '{endpoint}'"))?;

            let base = base_url
                .clone()
                .or_else(|| doc.base_url.clone())
                .unwrap_or_default();
            let request = compose(target, &base);

            match lang {
                Some(selected) => println!("{}", emit((*selected).into(), &request)),
                None => {
                    for snippet in emit_all(&request) {
                        println!("--- {} ---", snippet.language);
                        println!("{}", snippet.code);
                    }
                }
            }
            Ok(())
        }
        Commands::Parse { lang, file, check } => {
            let code = std::fs::read_to_string(file)?;
            let language: Language = (*lang).into();
            let parsed = crate::snippet::parse(language, &code)
                .ok_or_else(|| anyhow::anyhow!("snippet could not be parsed as {language}"))?;

            if *check {
                for issue in lint_snippet(language, &code) {
                    eprintln!("[{}] {}: {}", issue.severity, issue.kind, issue.message);
                }
            }

            let descriptor = parsed.into_descriptor();
            if *check {
                for issue in validate_request(&descriptor) {
                    eprintln!("[{}] {}: {}", issue.field, issue.code, issue.message);
                }
            }

            println!("{}", serde_json::to_string_pretty(&descriptor)?);
            Ok(())
        }
    }
}
