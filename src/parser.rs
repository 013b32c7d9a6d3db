// src/parser.rs
use tracing::{debug, trace};

use crate::catalog::{is_help_alias, OptionCatalog};
use crate::config::ParserConfig;
use crate::context::Context;
use crate::errors::{ParseIssue, Result};
use crate::schema::Setter;
use crate::tokenizer::{tokenize, Token, Tokens};
use crate::validation::ValidationResult;

/// Maps a raw command line onto a [`Context`].
///
/// The catalog is built once in [`CommandLineParser::new`] and reused by every
/// call to [`CommandLineParser::parse`]; the parser holds no per-parse state
/// and can be shared across threads.
pub struct CommandLineParser<C> {
    catalog: OptionCatalog<C>,
    config: ParserConfig,
}

impl<C: Context> CommandLineParser<C> {
    pub fn new() -> Result<Self> {
        Ok(Self::from_catalog(OptionCatalog::build(C::schema())?))
    }
}

impl<C> CommandLineParser<C> {
    pub fn from_catalog(catalog: OptionCatalog<C>) -> Self {
        Self {
            catalog,
            config: ParserConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    pub fn catalog(&self) -> &OptionCatalog<C> {
        &self.catalog
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// The alias of a switch token with its prefix removed, or `None` for a
    /// bare argument. A `-` prefix may be doubled (`--boolean`). A prefix with
    /// nothing after it (`-`, `--`) is a bare argument.
    fn switch_name<'t>(&self, token: &'t Token) -> Option<&'t str> {
        if token.quoted {
            return None;
        }
        let first = token.text.chars().next()?;
        if !self.config.is_prefix(first) {
            return None;
        }
        let rest = &token.text[first.len_utf8()..];
        let name = if first == '-' {
            rest.strip_prefix('-').unwrap_or(rest)
        } else {
            rest
        };
        (!name.is_empty()).then_some(name)
    }

    fn is_help_token(&self, token: &Token) -> bool {
        self.switch_name(token).is_some_and(is_help_alias)
    }
}

impl<C: Context> CommandLineParser<C> {
    /// Parse `input` into `context`.
    ///
    /// A help alias anywhere in the input sets the help flag and returns an
    /// empty result without looking at any other token. Otherwise every token
    /// is matched left to right; problems are collected, never raised.
    pub fn parse(&self, input: &str, context: &mut C) -> ValidationResult {
        context.base_mut().original_command_line = input.to_string();

        let Tokens {
            tokens,
            unterminated,
        } = tokenize(input);
        debug!(tokens = tokens.len(), "parsing command line");

        if tokens.iter().any(|token| self.is_help_token(token)) {
            debug!("help requested, skipping validation");
            context.base_mut().is_help = true;
            return ValidationResult::new();
        }

        let mut result = ValidationResult::new();
        if let Some(token) = unterminated {
            result.add_warning(ParseIssue::UnterminatedQuote { token });
        }

        let mut seen = vec![false; self.catalog.len()];
        let mut positional_filled = false;
        let mut tokens = tokens.into_iter();

        while let Some(token) = tokens.next() {
            trace!(token = %token.text, quoted = token.quoted, "token");

            let Some(name) = self.switch_name(&token) else {
                self.assign_positional(token.text, &mut positional_filled, context, &mut result);
                continue;
            };

            let Some((index, definition)) = self.catalog.find(name) else {
                result.add_error(ParseIssue::UnknownOption { token: token.text.clone() });
                continue;
            };
            seen[index] = true;

            if let Setter::Flag(set) = definition.setter {
                set(context);
                continue;
            }

            let Some(value) = tokens.next() else {
                result.add_error(ParseIssue::MissingValue { option: definition.name() });
                break;
            };

            match definition.setter {
                Setter::Integer(set) => match value.text.parse::<i64>() {
                    Ok(number) => set(context, number),
                    Err(_) => result.add_error(ParseIssue::InvalidValueFormat {
                        option: definition.name(),
                        value: value.text,
                    }),
                },
                Setter::Text(set) => {
                    let text = if definition.trim_whitespace {
                        value.text.trim().to_string()
                    } else {
                        value.text
                    };
                    set(context, text);
                }
                Setter::Flag(_) => {}
            }
        }

        for (definition, seen) in self.catalog.definitions().iter().zip(&seen) {
            if definition.is_mandatory() && !seen {
                result.add_error(ParseIssue::MissingRequired { option: definition.name() });
            }
        }
        if let Some(positional) = self.catalog.positional() {
            if positional.is_mandatory && !positional_filled {
                result.add_error(ParseIssue::MissingRequired {
                    option: positional.display_name.to_string(),
                });
            }
        }

        debug!(
            errors = result.errors().len(),
            warnings = result.warnings().len(),
            "parsed command line"
        );
        result
    }

    fn assign_positional(
        &self,
        value: String,
        filled: &mut bool,
        context: &mut C,
        result: &mut ValidationResult,
    ) {
        match self.catalog.positional() {
            Some(positional) if !*filled => {
                (positional.setter)(context, value);
                *filled = true;
            }
            _ => {
                let issue = ParseIssue::UnexpectedArgument { value };
                if self.config.strict_positionals {
                    result.add_error(issue);
                } else {
                    result.add_warning(issue);
                }
            }
        }
    }
}
