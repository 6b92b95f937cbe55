use crate::parser::{HelpOption, OptionFormatter};

/// The fluent setup of the help option, returned by [`CommandLineParser::setup_help`](crate::CommandLineParser::setup_help).
///
/// ### Example
/// ```
/// # use fluentargs_builder as fluentargs;
/// use fluentargs::{CaseType, CommandLineParser};
///
/// let mut message = String::default();
/// let mut parser = CommandLineParser::new();
/// parser
///     .setup::<bool>(CaseType::CaseInsensitive, &["v", "verbose"])
///     .unwrap()
///     .with_description("Print every step.");
/// parser
///     .setup_help(&["?", "h", "help"])
///     .unwrap()
///     .with_header("usage: program [options]")
///     .callback(|text| message = text.to_string());
///
/// let result = parser.parse_tokens(vec!["/?"].as_slice());
/// drop(parser);
///
/// assert!(result.help_called);
/// assert!(message.starts_with("usage: program [options]"));
/// assert!(message.contains("Print every step."));
/// ```
pub struct HelpSetup<'p, 'a> {
    help_option: &'p mut HelpOption<'a>,
}

impl<'p, 'a> HelpSetup<'p, 'a> {
    pub(crate) fn new(help_option: &'p mut HelpOption<'a>) -> Self {
        Self { help_option }
    }

    /// Deliver the help message to `callback`, instead of printing it.
    pub fn callback(self, callback: impl FnMut(&str) + 'a) -> Self {
        self.help_option.set_callback(Box::new(callback));
        self
    }

    /// Show `header` above the options.
    pub fn with_header(self, header: impl Into<String>) -> Self {
        self.help_option.set_header(header.into());
        self
    }

    /// Replace the default two column formatting of the options.
    pub fn with_custom_formatter(self, formatter: impl OptionFormatter + 'a) -> Self {
        self.help_option.set_formatter(Box::new(formatter));
        self
    }

    /// Also show the help message when the Cli contains no options at all.
    pub fn use_for_empty_args(self) -> Self {
        self.help_option.set_use_for_empty_args();
        self
    }
}
