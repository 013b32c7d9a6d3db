//! Static option declarations for a context type.
//!
//! A schema is a list of [`OptionDefinition`]s plus an optional
//! [`Positional`] slot. Each entry binds its aliases to a setter, a plain `fn`
//! pointer that writes the coerced value into the context.

use std::fmt;

/// What a switch expects after its alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Presence alone sets the target to `true`.
    Flag,
    /// Consumes the next token and parses it as `i64`.
    Integer,
    /// Consumes the next token verbatim.
    Text,
}

impl ValueKind {
    pub fn takes_value(self) -> bool {
        !matches!(self, ValueKind::Flag)
    }
}

pub(crate) enum Setter<C> {
    Flag(fn(&mut C)),
    Integer(fn(&mut C, i64)),
    Text(fn(&mut C, String)),
}

impl<C> Clone for Setter<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for Setter<C> {}

impl<C> Setter<C> {
    fn kind(&self) -> ValueKind {
        match self {
            Setter::Flag(_) => ValueKind::Flag,
            Setter::Integer(_) => ValueKind::Integer,
            Setter::Text(_) => ValueKind::Text,
        }
    }
}

/// One switch of a context type.
pub struct OptionDefinition<C> {
    pub(crate) short_name: Option<char>,
    pub(crate) long_name: Option<&'static str>,
    pub(crate) display_name: Option<&'static str>,
    pub(crate) help_text: &'static str,
    pub(crate) is_mandatory: bool,
    pub(crate) trim_whitespace: bool,
    pub(crate) setter: Setter<C>,
}

impl<C> OptionDefinition<C> {
    fn with_setter(setter: Setter<C>) -> Self {
        Self {
            short_name: None,
            long_name: None,
            display_name: None,
            help_text: "",
            is_mandatory: false,
            trim_whitespace: false,
            setter,
        }
    }

    /// A presence switch such as `/b`.
    pub fn flag(set: fn(&mut C)) -> Self {
        Self::with_setter(Setter::Flag(set))
    }

    /// A switch followed by an integer, such as `/i 42`.
    pub fn integer(set: fn(&mut C, i64)) -> Self {
        Self::with_setter(Setter::Integer(set))
    }

    /// A switch followed by a string, such as `/s somestring`.
    pub fn text(set: fn(&mut C, String)) -> Self {
        Self::with_setter(Setter::Text(set))
    }

    pub fn short(mut self, name: char) -> Self {
        self.short_name = Some(name);
        self
    }

    pub fn long(mut self, name: &'static str) -> Self {
        self.long_name = Some(name);
        self
    }

    pub fn display_name(mut self, name: &'static str) -> Self {
        self.display_name = Some(name);
        self
    }

    pub fn help(mut self, text: &'static str) -> Self {
        self.help_text = text;
        self
    }

    pub fn mandatory(mut self) -> Self {
        self.is_mandatory = true;
        self
    }

    /// Trim surrounding whitespace from text values (useful with quoted values).
    pub fn trim_whitespace(mut self) -> Self {
        self.trim_whitespace = true;
        self
    }

    pub fn kind(&self) -> ValueKind {
        self.setter.kind()
    }

    pub fn short_name(&self) -> Option<char> {
        self.short_name
    }

    pub fn long_name(&self) -> Option<&'static str> {
        self.long_name
    }

    pub fn help_text(&self) -> &'static str {
        self.help_text
    }

    pub fn is_mandatory(&self) -> bool {
        self.is_mandatory
    }

    /// Explicit display name, else the long alias, else the short one.
    pub fn name(&self) -> String {
        match (self.display_name, self.long_name, self.short_name) {
            (Some(name), _, _) | (None, Some(name), _) => name.to_string(),
            (None, None, Some(c)) => c.to_string(),
            (None, None, None) => String::new(),
        }
    }

    /// Lower-cased lookup keys for every declared alias.
    pub(crate) fn alias_keys(&self) -> Vec<String> {
        let mut keys = Vec::with_capacity(2);
        if let Some(c) = self.short_name {
            keys.push(c.to_lowercase().collect());
        }
        if let Some(name) = self.long_name {
            keys.push(name.to_lowercase());
        }
        keys
    }
}

impl<C> fmt::Debug for OptionDefinition<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionDefinition")
            .field("short_name", &self.short_name)
            .field("long_name", &self.long_name)
            .field("kind", &self.kind())
            .field("is_mandatory", &self.is_mandatory)
            .finish()
    }
}

/// The bare, unprefixed argument slot (typically a file name).
pub struct Positional<C> {
    pub(crate) display_name: &'static str,
    pub(crate) help_text: &'static str,
    pub(crate) is_mandatory: bool,
    pub(crate) setter: fn(&mut C, String),
}

impl<C> Positional<C> {
    pub fn new(display_name: &'static str, set: fn(&mut C, String)) -> Self {
        Self {
            display_name,
            help_text: "",
            is_mandatory: false,
            setter: set,
        }
    }

    pub fn help(mut self, text: &'static str) -> Self {
        self.help_text = text;
        self
    }

    pub fn mandatory(mut self) -> Self {
        self.is_mandatory = true;
        self
    }

    pub fn display_name(&self) -> &'static str {
        self.display_name
    }
}

/// Everything a context type declares about its command line.
pub struct Schema<C> {
    pub(crate) options: Vec<OptionDefinition<C>>,
    pub(crate) positional: Option<Positional<C>>,
}

impl<C> Default for Schema<C> {
    fn default() -> Self {
        Self {
            options: Vec::new(),
            positional: None,
        }
    }
}

impl<C> Schema<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn option(mut self, definition: OptionDefinition<C>) -> Self {
        self.options.push(definition);
        self
    }

    pub fn positional(mut self, positional: Positional<C>) -> Self {
        self.positional = Some(positional);
        self
    }
}
