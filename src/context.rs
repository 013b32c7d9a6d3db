use serde::Serialize;

use crate::schema::Schema;

/// State every context carries regardless of its own options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContextBase {
    /// The raw input of the most recent parse.
    pub original_command_line: String,
    /// Set when any help alias appears on the command line.
    pub is_help: bool,
}

/// A caller-owned record that a command line is parsed into.
///
/// Implementors declare their options once in [`Context::schema`]; the parser
/// writes values through the setters held by the schema, so no reflection is
/// involved.
pub trait Context: Sized + 'static {
    fn schema() -> Schema<Self>;

    fn base(&self) -> &ContextBase;

    fn base_mut(&mut self) -> &mut ContextBase;

    fn is_help(&self) -> bool {
        self.base().is_help
    }
}
