use terminal_size::{terminal_size, Width};

use crate::constant::*;
use crate::parser::interface::{ColumnRenderer, MINIMUM_MIDDLE_WIDTH};
use crate::parser::OptionSummary;

/// Behaviour to format the registered options into a help message.
///
/// ### Example
/// ```
/// # use fluentargs_builder as fluentargs;
/// use fluentargs::{CaseType, CommandLineParser, OptionFormatter, OptionSummary};
///
/// struct Terse {}
///
/// impl OptionFormatter for Terse {
///     fn format(&self, options: &[OptionSummary]) -> String {
///         options
///             .iter()
///             .map(|option| option.flags())
///             .collect::<Vec<String>>()
///             .join(" ")
///     }
/// }
///
/// let mut message = String::default();
/// let mut parser = CommandLineParser::new();
/// parser
///     .setup::<bool>(CaseType::CaseInsensitive, &["v", "verbose"])
///     .unwrap();
/// parser
///     .setup_help(&["?", "help"])
///     .unwrap()
///     .with_custom_formatter(Terse {})
///     .callback(|text| message = text.to_string());
///
/// let result = parser.parse_tokens(vec!["--help"].as_slice());
/// drop(parser);
///
/// assert!(result.help_called);
/// assert_eq!(message, "-v, --verbose");
/// ```
pub trait OptionFormatter {
    /// Format the options, in registration order.
    fn format(&self, options: &[OptionSummary]) -> String;
}

const NO_OPTIONS: &str = "No options have been set up.";
const REQUIRED: &str = "(required)";
// Used when the terminal width is unknown.
const DEFAULT_MIDDLE_WIDTH: usize = 40;
const PADDING_WIDTH: usize = 3;
const MAIN_INDENT: usize = 1;

/// Formats the options into two columns: the flags and the description.
#[derive(Debug, Default)]
pub(crate) struct ColumnFormatter {
    terminal_width: Option<usize>,
}

impl ColumnFormatter {
    pub(crate) fn terminal() -> Self {
        let terminal_width = if let Some((Width(terminal_width), _)) = terminal_size() {
            Some(terminal_width as usize)
        } else {
            None
        };

        Self::new(terminal_width)
    }

    pub(crate) fn new(terminal_width: Option<usize>) -> Self {
        Self { terminal_width }
    }
}

fn describe(option: &OptionSummary) -> String {
    match (&option.description, option.required) {
        (Some(description), true) => format!("{description} {REQUIRED}"),
        (Some(description), false) => description.clone(),
        (None, true) => REQUIRED.to_string(),
        (None, false) => String::default(),
    }
}

impl OptionFormatter for ColumnFormatter {
    fn format(&self, options: &[OptionSummary]) -> String {
        if options.is_empty() {
            return NO_OPTIONS.to_string();
        }

        let rows: Vec<(String, String)> = options
            .iter()
            .map(|option| (option.flags(), describe(option)))
            .collect();
        let left_column_width = rows
            .iter()
            .map(|(flags, _)| flags.chars().count())
            .max()
            .unwrap_or_default();
        let middle_column_width = rows
            .iter()
            .map(|(_, description)| description.chars().count())
            .max()
            .unwrap_or_default();

        let column_renderer = match &self.terminal_width {
            Some(tw) => ColumnRenderer::guided(
                MAIN_INDENT,
                PADDING_WIDTH,
                left_column_width,
                middle_column_width,
                *tw,
            ),
            None => ColumnRenderer::new(
                MAIN_INDENT,
                PADDING_WIDTH,
                left_column_width,
                std::cmp::max(
                    MINIMUM_MIDDLE_WIDTH,
                    std::cmp::min(middle_column_width, DEFAULT_MIDDLE_WIDTH),
                ),
            ),
        };

        let mut lines = vec![HELP_HEADER.to_string()];

        for (flags, description) in &rows {
            lines.extend(column_renderer.render(flags, description));
        }

        lines.join("\n")
    }
}
