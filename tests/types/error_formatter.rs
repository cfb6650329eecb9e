use core::fmt::Display;
use schema_rail::types::error_formatter::{ErrorFormatConfig, ErrorFormatter};
use schema_rail::{Code, Failure};

struct TestDisplay(String);

impl Display for TestDisplay {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn chain(config: &ErrorFormatConfig, parts: &[&str]) -> String {
    let items: Vec<TestDisplay> = parts.iter().map(|p| TestDisplay((*p).into())).collect();
    config.format_chain(items.iter().map(|d| d as &dyn Display))
}

#[test]
fn test_default_formatter() {
    let result = chain(&ErrorFormatConfig::default(), &["user", "email", "pattern"]);
    assert_eq!(result, "user -> email -> pattern");
}

#[test]
fn test_pretty_formatter() {
    let result = chain(&ErrorFormatConfig::pretty(), &["user", "email", "pattern"]);
    assert_eq!(result, "├─ user\n├─ email\n└─ pattern");
}

#[test]
fn test_cascaded_formatter() {
    let result = chain(&ErrorFormatConfig::cascaded(), &["user", "email", "pattern"]);
    assert_eq!(result, "user\n  email\n    pattern");
}

#[test]
fn test_compact_formatter() {
    let result = chain(&ErrorFormatConfig::compact(), &["email", "pattern"]);
    assert_eq!(result, "email | pattern");
}

#[test]
fn test_empty_chain() {
    assert_eq!(chain(&ErrorFormatConfig::default(), &[]), "");
}

#[test]
fn test_builder_options() {
    let failure = Failure::new(Code::MaxLen, "abcdef").within("name");

    assert_eq!(failure.fmt().show_value(false).to_string(), "name -> maxlen");
    assert_eq!(failure.fmt().with_separator(": ").to_string(), "name: maxlen (got \"abcdef\")");
    assert_eq!(failure.fmt().cascade(true).to_string(), "name\n  maxlen (got \"abcdef\")");
}

#[test]
fn test_custom_formatter() {
    struct Slash;
    impl ErrorFormatter for Slash {
        fn separator(&self) -> &str {
            "/"
        }
    }

    let failure = Failure::new(Code::Number, true).within(0).within("rows");
    assert_eq!(failure.error_chain_with(Slash), "rows/[0]/number (got true)");
    assert_eq!(failure.error_chain_with(ErrorFormatConfig::compact()), "rows | [0] | number (got true)");
}
