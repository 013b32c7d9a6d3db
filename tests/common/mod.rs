use cmdline_binding::{Context, ContextBase, OptionDefinition, Positional, Schema};

/// A file name plus one switch of every value kind.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TestContextWithFile {
    pub base: ContextBase,
    pub file_name: String,
    pub boolean_switch: bool,
    pub integer_switch: i64,
    pub string_switch: String,
}

impl Context for TestContextWithFile {
    fn schema() -> Schema<Self> {
        Schema::new()
            .positional(Positional::new("file", |c: &mut TestContextWithFile, v| c.file_name = v))
            .option(
                OptionDefinition::flag(|c: &mut TestContextWithFile| c.boolean_switch = true)
                    .short('b')
                    .long("boolean"),
            )
            .option(
                OptionDefinition::integer(|c: &mut TestContextWithFile, v| c.integer_switch = v)
                    .short('i')
                    .long("integer"),
            )
            .option(
                OptionDefinition::text(|c: &mut TestContextWithFile, v| c.string_switch = v)
                    .short('s')
                    .long("string"),
            )
    }

    fn base(&self) -> &ContextBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ContextBase {
        &mut self.base
    }
}
