use itertools::Itertools;

use crate::catalog::{OptionCatalog, HELP_ALIASES};
use crate::schema::OptionDefinition;

const VALUE_MARKER: &str = "<value>";
const INDENT: &str = "  ";
const GAP: usize = 4;

/// Renders usage text for a context type from its catalog.
pub struct HelpWriter<'a, C> {
    catalog: &'a OptionCatalog<C>,
}

impl<'a, C> HelpWriter<'a, C> {
    pub fn new(catalog: &'a OptionCatalog<C>) -> Self {
        Self { catalog }
    }

    /// One-line synopsis, e.g. `app [FILE] [-b] [-i <value>] [-h]`.
    pub fn usage(&self, program: &str) -> String {
        let positional = self.catalog.positional().map(|p| {
            if p.is_mandatory {
                p.display_name.to_uppercase()
            } else {
                format!("[{}]", p.display_name.to_uppercase())
            }
        });
        let options = self.catalog.definitions().iter().map(|definition| {
            let mut part = first_alias(definition);
            if definition.kind().takes_value() {
                part = format!("{part} {VALUE_MARKER}");
            }
            if definition.is_mandatory() {
                part
            } else {
                format!("[{part}]")
            }
        });

        std::iter::once(program.to_string())
            .chain(positional)
            .chain(options)
            .chain(std::iter::once("[-h]".to_string()))
            .join(" ")
    }

    /// One aligned line per option: positional first, help aliases last.
    pub fn lines(&self) -> Vec<String> {
        let mut rows: Vec<(String, String)> = Vec::new();

        if let Some(positional) = self.catalog.positional() {
            rows.push((
                positional.display_name.to_uppercase(),
                describe(positional.help_text, positional.is_mandatory),
            ));
        }
        for definition in self.catalog.definitions() {
            let mut aliases = aliases(definition);
            if definition.kind().takes_value() {
                aliases = format!("{aliases} {VALUE_MARKER}");
            }
            rows.push((aliases, describe(definition.help_text(), definition.is_mandatory())));
        }
        rows.push((
            HELP_ALIASES.iter().map(|alias| format!("-{alias}")).join(", "),
            "Show this help text.".to_string(),
        ));

        let width = rows.iter().map(|(left, _)| left.chars().count()).max().unwrap_or(0) + GAP;
        rows.into_iter()
            .map(|(left, right)| {
                if right.is_empty() {
                    format!("{INDENT}{left}")
                } else {
                    format!("{INDENT}{left:<width$}{right}")
                }
            })
            .collect()
    }
}

fn aliases(definition: &OptionDefinition<impl Sized>) -> String {
    definition
        .short_name()
        .map(|c| format!("-{c}"))
        .into_iter()
        .chain(definition.long_name().map(|name| format!("-{name}")))
        .join(", ")
}

fn first_alias(definition: &OptionDefinition<impl Sized>) -> String {
    match (definition.short_name(), definition.long_name()) {
        (Some(c), _) => format!("-{c}"),
        (None, Some(name)) => format!("-{name}"),
        (None, None) => String::new(),
    }
}

fn describe(help_text: &str, mandatory: bool) -> String {
    match (help_text.is_empty(), mandatory) {
        (_, false) => help_text.to_string(),
        (true, true) => "(required)".to_string(),
        (false, true) => format!("{help_text} (required)"),
    }
}
