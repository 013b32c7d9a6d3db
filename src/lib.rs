//! Maps a raw command-line string onto a caller-owned context record.
//!
//! A context type implements [`Context`] and declares its switches in a
//! [`Schema`]: each [`OptionDefinition`] binds a short and/or long alias to a
//! setter and a value kind. [`CommandLineParser::parse`] tokenizes the input,
//! writes values through those setters and returns a [`ValidationResult`].
//!
//! Switches start with `-` or `/` and are matched case-insensitively. The
//! aliases `h`, `help` and `?` are reserved: any of them anywhere on the line
//! sets the context's help flag and suppresses all other validation.

pub mod catalog;
pub mod config;
pub mod context;
pub mod errors;
pub mod help;
pub mod parser;
pub mod schema;
pub mod tokenizer;
pub mod validation;

pub use catalog::{OptionCatalog, HELP_ALIASES};
pub use config::ParserConfig;
pub use context::{Context, ContextBase};
pub use errors::{ParseIssue, Result, SchemaError};
pub use help::HelpWriter;
pub use parser::CommandLineParser;
pub use schema::{OptionDefinition, Positional, Schema, ValueKind};
pub use validation::ValidationResult;

/// Convenience: build a parser for `C` and parse `input` into `context`.
pub fn parse<C: Context>(input: &str, context: &mut C) -> Result<ValidationResult> {
    let parser = CommandLineParser::<C>::new()?;
    Ok(parser.parse(input, context))
}
