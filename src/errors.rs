use serde::Serialize;
use thiserror::Error;

/// Problems with an option schema. These are fatal: a parser cannot be built
/// from a schema that fails to validate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("alias '{alias}' is declared by more than one option")]
    DuplicateAlias { alias: String },

    #[error("alias '{alias}' is reserved for help")]
    ReservedAlias { alias: String },

    #[error("option '{display_name}' declares neither a short nor a long alias")]
    MissingAlias { display_name: String },
}

/// Per-token problems found while parsing. These are collected into a
/// `ValidationResult` instead of being returned as `Err`.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParseIssue {
    #[error("unknown option '{token}'")]
    UnknownOption { token: String },

    #[error("cannot convert '{value}' for option '{option}' to an integer")]
    InvalidValueFormat { option: String, value: String },

    #[error("option '{option}' expects a value")]
    MissingValue { option: String },

    #[error("required option '{option}' was not specified")]
    MissingRequired { option: String },

    #[error("unexpected argument '{value}'")]
    UnexpectedArgument { value: String },

    #[error("unterminated quote in '{token}'")]
    UnterminatedQuote { token: String },
}

// Result alias for schema construction
pub type Result<T> = std::result::Result<T, SchemaError>;
