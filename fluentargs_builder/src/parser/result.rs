use thiserror::Error;

use crate::constant::*;
use crate::matcher::ParsedOption;
use crate::prelude::InvalidValue;

/// A read-only view of a registered option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSummary {
    /// Every name of the option, in registration order.
    pub names: Vec<String>,
    /// The names matched exactly.
    pub case_sensitive_names: Vec<String>,
    /// The names matched ignoring case.
    pub case_insensitive_names: Vec<String>,
    /// Whether the option must appear on the Cli.
    pub required: bool,
    /// Whether a default value was set up.
    pub has_default: bool,
    /// Whether a callback was set up.
    pub has_callback: bool,
    /// Whether an additional arguments callback was set up.
    pub has_additional_arguments_callback: bool,
    /// The description shown in the help message.
    pub description: Option<String>,
}

impl OptionSummary {
    /// The names as they would be typed on the Cli (ex: `-v, --verbose`).
    ///
    /// Single character names are shown in short form, the rest in long form.
    pub fn flags(&self) -> String {
        self.names
            .iter()
            .map(|name| {
                if name.chars().count() == 1 {
                    format!("{SINGLE_DASH}{name}")
                } else {
                    format!("{DOUBLE_DASH}{name}")
                }
            })
            .collect::<Vec<String>>()
            .join(", ")
    }
}

/// The errors found while parsing the Cli input.
///
/// These never interrupt the parse; they are collected into the [`CommandLineParserResult`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A required option did not appear on the Cli.
    #[error("Option '{}' parse error: option is required but was not specified.", .option.flags())]
    ExpectedOptionNotFound {
        /// The missing option.
        option: OptionSummary,
    },
    /// The option appeared on the Cli, but its value could not be converted.
    #[error("Option '{}' parse error: {reason}", .option.flags())]
    OptionSyntax {
        /// The option whose value was rejected.
        option: OptionSummary,
        /// The option as found on the Cli.
        parsed_option: ParsedOption,
        /// Why the value was rejected.
        reason: InvalidValue,
    },
}

/// The outcome of parsing the Cli input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandLineParserResult {
    /// Whether `errors` is non-empty.
    pub has_errors: bool,
    /// The errors, in option registration order.
    pub errors: Vec<ParseError>,
    /// The options that did not appear on the Cli.
    pub unmatched_options: Vec<OptionSummary>,
    /// The `(key, value)` of each option on the Cli that matched no registered option.
    pub additional_options_found: Vec<(String, Option<String>)>,
    /// The bare values not associated with any option.
    pub additional_values: Vec<String>,
    /// Whether the Cli input contained no options at all.
    pub empty_args: bool,
    /// Whether the help option was triggered, in which case nothing else was processed.
    pub help_called: bool,
    /// The errors formatted one per line; empty when there are none.
    pub error_text: String,
}

impl CommandLineParserResult {
    pub(crate) fn push_error(&mut self, error: ParseError) {
        self.errors.push(error);
        self.has_errors = true;
    }

    pub(crate) fn finish(mut self) -> Self {
        self.error_text = self
            .errors
            .iter()
            .map(ParseError::to_string)
            .collect::<Vec<String>>()
            .join("\n");
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn summary(names: Vec<&str>) -> OptionSummary {
        OptionSummary {
            names: names.iter().map(|n| n.to_string()).collect(),
            case_sensitive_names: Vec::default(),
            case_insensitive_names: names.iter().map(|n| n.to_string()).collect(),
            required: false,
            has_default: false,
            has_callback: false,
            has_additional_arguments_callback: false,
            description: None,
        }
    }

    #[rstest]
    #[case(vec!["v"], "-v")]
    #[case(vec!["verbose"], "--verbose")]
    #[case(vec!["v", "verbose"], "-v, --verbose")]
    #[case(vec!["verbose", "v", "V"], "--verbose, -v, -V")]
    #[case(vec!["?"], "-?")]
    #[case(vec!["ä"], "-ä")]
    fn flags(#[case] names: Vec<&str>, #[case] expected: &str) {
        assert_eq!(summary(names).flags(), expected);
    }

    #[test]
    fn error_display() {
        let error = ParseError::ExpectedOptionNotFound {
            option: summary(vec!["r", "record"]),
        };
        assert_eq!(
            error.to_string(),
            "Option '-r, --record' parse error: option is required but was not specified."
        );

        let error = ParseError::OptionSyntax {
            option: summary(vec!["r"]),
            parsed_option: ParsedOption::new("r", Some("abc".to_string())),
            reason: InvalidValue::Conversion {
                token: "abc".to_string(),
                type_name: "u32",
            },
        };
        assert_eq!(
            error.to_string(),
            "Option '-r' parse error: cannot convert 'abc' to u32."
        );
    }

    #[test]
    fn finish_empty() {
        let result = CommandLineParserResult::default().finish();
        assert!(!result.has_errors);
        assert_eq!(result.error_text, "");
    }

    #[test]
    fn finish() {
        // Setup
        let mut result = CommandLineParserResult::default();
        result.push_error(ParseError::ExpectedOptionNotFound {
            option: summary(vec!["a"]),
        });
        result.push_error(ParseError::ExpectedOptionNotFound {
            option: summary(vec!["b"]),
        });

        // Execute
        let result = result.finish();

        // Verify
        assert!(result.has_errors);
        assert_eq!(
            result.error_text,
            r#"Option '-a' parse error: option is required but was not specified.
Option '-b' parse error: option is required but was not specified."#
        );
    }
}
