use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::errors::{Result, SchemaError};
use crate::schema::{OptionDefinition, Positional, Schema};

/// Aliases reserved for help requests, matched with any switch prefix.
pub const HELP_ALIASES: [&str; 3] = ["h", "help", "?"];

/// True when `name` (prefix already stripped) is a help alias.
pub fn is_help_alias(name: &str) -> bool {
    let key = name.to_lowercase();
    HELP_ALIASES.contains(&key.as_str())
}

/// Alias lookup table for one context type.
///
/// Keys are stored lower-cased so a lookup folds the probe once instead of
/// comparing case-insensitively against every alias.
pub struct OptionCatalog<C> {
    inner: Arc<Inner<C>>,
}

struct Inner<C> {
    definitions: Vec<OptionDefinition<C>>,
    positional: Option<Positional<C>>,
    by_alias: HashMap<String, usize>,
}

impl<C> Clone for OptionCatalog<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C> OptionCatalog<C> {
    pub fn build(schema: Schema<C>) -> Result<Self> {
        let Schema {
            options,
            positional,
        } = schema;

        let mut by_alias = HashMap::new();
        for (index, definition) in options.iter().enumerate() {
            let keys = definition.alias_keys();
            if keys.is_empty() {
                return Err(SchemaError::MissingAlias {
                    display_name: definition.name(),
                });
            }
            for key in keys {
                if is_help_alias(&key) {
                    return Err(SchemaError::ReservedAlias { alias: key });
                }
                if by_alias.insert(key.clone(), index).is_some() {
                    return Err(SchemaError::DuplicateAlias { alias: key });
                }
            }
        }

        debug!(
            options = options.len(),
            aliases = by_alias.len(),
            positional = positional.is_some(),
            "built option catalog"
        );

        Ok(Self {
            inner: Arc::new(Inner {
                definitions: options,
                positional,
                by_alias,
            }),
        })
    }

    /// Case-insensitive lookup of an alias without its prefix.
    pub fn lookup(&self, alias: &str) -> Option<&OptionDefinition<C>> {
        self.find(alias).map(|(_, definition)| definition)
    }

    /// Like [`OptionCatalog::lookup`], also returning the declaration index.
    pub(crate) fn find(&self, alias: &str) -> Option<(usize, &OptionDefinition<C>)> {
        let index = *self.inner.by_alias.get(&alias.to_lowercase())?;
        self.inner.definitions.get(index).map(|definition| (index, definition))
    }

    pub fn definitions(&self) -> &[OptionDefinition<C>] {
        &self.inner.definitions
    }

    pub fn positional(&self) -> Option<&Positional<C>> {
        self.inner.positional.as_ref()
    }

    pub fn len(&self) -> usize {
        self.inner.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.definitions.is_empty()
    }
}
