use clap::Parser;
use cmdline_binding::{
    CommandLineParser, Context, ContextBase, HelpWriter, OptionDefinition, Positional, Schema,
};
use serde::Serialize;
use serde_json::json;
use tracing::Level;

/// Try out the binder: parse a command line into a sample context.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// The command line to parse, e.g. "somefile /b /s somestring /i 42"
    #[arg(allow_hyphen_values = true)]
    command_line: Option<String>,
    /// Print the sample context's usage instead of parsing
    #[arg(long)]
    usage: bool,
    /// Log parser decisions to stderr
    #[arg(long)]
    verbose: bool,
}

/// File plus one switch of each value kind.
#[derive(Debug, Default, Serialize)]
struct SampleContext {
    #[serde(flatten)]
    base: ContextBase,
    file_name: String,
    boolean_switch: bool,
    integer_switch: i64,
    string_switch: String,
}

impl Context for SampleContext {
    fn schema() -> Schema<Self> {
        Schema::new()
            .positional(
                Positional::new("file", |c: &mut SampleContext, v| c.file_name = v)
                    .help("File to operate on."),
            )
            .option(
                OptionDefinition::flag(|c: &mut SampleContext| c.boolean_switch = true)
                    .short('b')
                    .long("boolean")
                    .help("A boolean switch."),
            )
            .option(
                OptionDefinition::integer(|c: &mut SampleContext, v| c.integer_switch = v)
                    .short('i')
                    .long("integer")
                    .help("An integer switch."),
            )
            .option(
                OptionDefinition::text(|c: &mut SampleContext, v| c.string_switch = v)
                    .short('s')
                    .long("string")
                    .help("A string switch."),
            )
    }

    fn base(&self) -> &ContextBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ContextBase {
        &mut self.base
    }
}

fn main() {
    // Parse CLI arguments.
    let args = Args::parse();

    // Install logging.
    let level = if args.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    // Build the parser for the sample context.
    let parser = match CommandLineParser::<SampleContext>::new() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Invalid option schema: {e}");
            std::process::exit(2);
        }
    };

    let writer = HelpWriter::new(parser.catalog());
    if args.usage {
        println!("{}", writer.usage("sample"));
        for line in writer.lines() {
            println!("{line}");
        }
        return;
    }

    // Parse the supplied line.
    let mut context = SampleContext::default();
    let result = parser.parse(args.command_line.as_deref().unwrap_or_default(), &mut context);

    let out = json!({
        "context": context,
        "result": result,
        "messages": {
            "errors": result.error_messages(),
            "warnings": result.warning_messages(),
        },
    });
    match serde_json::to_string_pretty(&out) {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("Cannot render result: {e}");
            std::process::exit(2);
        }
    }

    if result.has_errors() {
        std::process::exit(1);
    }
}
