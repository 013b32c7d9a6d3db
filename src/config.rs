/// Parser knobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Characters that mark a token as a switch.
    pub prefixes: Vec<char>,
    /// Report surplus bare arguments as errors rather than warnings.
    pub strict_positionals: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            prefixes: vec!['-', '/'],
            strict_positionals: false,
        }
    }
}

impl ParserConfig {
    pub fn with_prefixes(mut self, prefixes: impl IntoIterator<Item = char>) -> Self {
        self.prefixes = prefixes.into_iter().collect();
        self
    }

    pub fn strict_positionals(mut self, strict: bool) -> Self {
        self.strict_positionals = strict;
        self
    }

    pub(crate) fn is_prefix(&self, c: char) -> bool {
        self.prefixes.contains(&c)
    }
}
