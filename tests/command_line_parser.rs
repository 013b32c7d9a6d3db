mod common;

use cmdline_binding::{CommandLineParser, Context, ParseIssue, ValidationResult};
use common::TestContextWithFile;
use pretty_assertions::assert_eq;

fn parse(input: &str) -> (TestContextWithFile, ValidationResult) {
    let parser = CommandLineParser::<TestContextWithFile>::new().unwrap();
    let mut context = TestContextWithFile::default();
    let result = parser.parse(input, &mut context);
    (context, result)
}

#[test]
fn test_parses_bare_file_name() {
    let (context, result) = parse("somefile");
    assert!(!result.has_errors());
    assert!(!result.has_warnings());

    assert_eq!(context.file_name, "somefile");
    assert!(!context.boolean_switch);
    assert_eq!(context.integer_switch, 0);
    assert_eq!(context.string_switch, "");
    assert!(!context.is_help());
}

#[test]
fn test_parses_file_name_with_switches() {
    let (context, result) = parse("somefile /b /s somestring /i 42");
    assert!(!result.has_errors());
    assert!(!result.has_warnings());

    assert_eq!(context.file_name, "somefile");
    assert!(context.boolean_switch);
    assert_eq!(context.integer_switch, 42);
    assert_eq!(context.string_switch, "somestring");
}

#[test]
fn test_switch_order_does_not_matter() {
    let (first, _) = parse("somefile /b /s somestring /i 42");
    let (second, _) = parse("somefile /i 42 /s somestring /b");
    assert_eq!(
        (first.file_name, first.boolean_switch, first.integer_switch, first.string_switch),
        (second.file_name, second.boolean_switch, second.integer_switch, second.string_switch)
    );
}

#[test]
fn test_aliases_are_case_insensitive_and_accept_either_prefix() {
    let (context, result) = parse("somefile -BOOLEAN /Integer 7 -S text");
    assert!(!result.has_errors());
    assert!(context.boolean_switch);
    assert_eq!(context.integer_switch, 7);
    assert_eq!(context.string_switch, "text");
}

#[test]
fn test_string_value_may_be_quoted() {
    let (context, result) = parse(r#"somefile /s "some string with spaces""#);
    assert!(!result.has_errors());
    assert_eq!(context.string_switch, "some string with spaces");
}

#[test]
fn test_recognizes_help_in_any_position() {
    for input in [
        "-h",
        "/h",
        "-help",
        "/help",
        "-?",
        "/?",
        "somefile -h",
        "somefile /b /s somestring /i 42 /help",
        "somefile /b /s somestring /i 42 -?",
    ] {
        let (context, result) = parse(input);
        assert!(!result.has_errors(), "{input}");
        assert!(!result.has_warnings(), "{input}");
        assert!(context.is_help(), "{input}");
    }
}

#[test]
fn test_help_suppresses_otherwise_invalid_input() {
    let (context, result) = parse("a b /unknown /i notanumber /s /HELP");
    assert!(context.is_help());
    assert!(!result.has_errors());
    assert!(!result.has_warnings());
}

#[test]
fn test_quoted_help_alias_is_not_help() {
    let (context, result) = parse(r#""-h""#);
    assert!(!context.is_help());
    assert!(!result.has_errors());
    assert_eq!(context.file_name, "-h");
}

#[test]
fn test_collects_every_problem_and_keeps_going() {
    let (context, result) = parse("somefile /x /i forty /b /s");
    assert!(context.boolean_switch);
    assert_eq!(context.integer_switch, 0);
    assert_eq!(
        result.errors(),
        &[
            ParseIssue::UnknownOption { token: "/x".into() },
            ParseIssue::InvalidValueFormat { option: "integer".into(), value: "forty".into() },
            ParseIssue::MissingValue { option: "string".into() },
        ]
    );
    assert_eq!(
        result.error_messages(),
        vec![
            "unknown option '/x'",
            "cannot convert 'forty' for option 'integer' to an integer",
            "option 'string' expects a value",
        ]
    );
}

#[test]
fn test_string_value_may_contain_an_apostrophe() {
    let (context, result) = parse("somefile /s O'Brien /b");
    assert!(!result.has_errors());
    assert!(!result.has_warnings());
    assert_eq!(context.string_switch, "O'Brien");
    assert!(context.boolean_switch);
}

#[test]
fn test_integer_out_of_range_is_reported() {
    let (context, result) = parse("somefile /i 99999999999999999999");
    assert_eq!(context.integer_switch, 0);
    assert_eq!(
        result.errors(),
        &[ParseIssue::InvalidValueFormat {
            option: "integer".into(),
            value: "99999999999999999999".into(),
        }]
    );
}

#[test]
fn test_dash_placeholder_is_the_file_name() {
    let (context, result) = parse("- /b");
    assert!(!result.has_errors());
    assert_eq!(context.file_name, "-");
    assert!(context.boolean_switch);
}

#[test]
fn test_parser_is_reusable_across_contexts() {
    let parser = CommandLineParser::<TestContextWithFile>::new().unwrap();

    let mut first = TestContextWithFile::default();
    assert!(!parser.parse("one /i 1", &mut first).has_errors());

    let mut second = TestContextWithFile::default();
    assert!(!parser.parse("two /b", &mut second).has_errors());

    assert_eq!((first.file_name.as_str(), first.integer_switch), ("one", 1));
    assert_eq!((second.file_name.as_str(), second.boolean_switch), ("two", true));
    assert!(!first.boolean_switch);
    assert_eq!(second.base.original_command_line, "two /b");
}

#[test]
fn test_top_level_parse_helper() {
    let mut context = TestContextWithFile::default();
    let result = cmdline_binding::parse("f /s v", &mut context).unwrap();
    assert!(!result.has_errors());
    assert_eq!(context.string_switch, "v");
}
