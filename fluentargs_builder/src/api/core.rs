use std::cell::RefCell;
use std::env;
use std::rc::Rc;

use crate::api::{Binding, HelpSetup, OptionSetup};
use crate::matcher::ParserEngine;
use crate::model::CaseType;
use crate::parser::{
    bind_options, CommandLineParserResult, ConsoleInterface, HelpOption,
    NoDuplicateOptionValidator, OptionNameValidator, OptionSummary, OptionValidator, Registry,
    SetupError, UserInterface,
};
use crate::prelude::OptionValue;

/// The command line parser.
///
/// Options are set up first, via [`CommandLineParser::setup`] (and optionally [`CommandLineParser::setup_help`]).
/// Then the Cli is parsed, which invokes the callbacks of the options found.
///
/// ### Example
/// ```
/// # use fluentargs_builder as fluentargs;
/// use fluentargs::CommandLineParser;
///
/// let mut parser = CommandLineParser::new();
/// // Configure with CommandLineParser::setup and CommandLineParser::setup_help.
/// let result = parser.parse_tokens(empty::slice());
///
/// assert!(result.empty_args);
/// assert!(!result.has_errors);
/// ```
pub struct CommandLineParser<'a> {
    pub(crate) registry: Registry<'a>,
    help_option: Option<HelpOption<'a>>,
    user_interface: Box<dyn UserInterface>,
}

impl<'a> Default for CommandLineParser<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> std::fmt::Debug for CommandLineParser<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandLineParser")
            .field("registry", &self.registry)
            .field("help_option", &self.help_option)
            .finish()
    }
}

impl<'a> CommandLineParser<'a> {
    /// Create a command line parser.
    pub fn new() -> Self {
        Self::with_interface(Box::new(ConsoleInterface::default()))
    }

    pub(crate) fn with_interface(user_interface: Box<dyn UserInterface>) -> Self {
        Self {
            registry: Registry::new(vec![
                Box::new(OptionNameValidator::default()),
                Box::new(NoDuplicateOptionValidator::default()),
            ]),
            help_option: None,
            user_interface,
        }
    }

    /// Set up an option of type `T`, under one or more names.
    ///
    /// Single character names are typically used in short form (`-v`), the rest in long form (`--verbose`).
    /// Either form matches any name, however.
    ///
    /// Fails with [`SetupError::InvalidOptionName`] when a name is empty, blank, or contains a reserved character (`=`, `:`, whitespace, control characters).
    /// Fails with [`SetupError::OptionAlreadyExists`] when a name conflicts with an existing option name.
    ///
    /// ### Example
    /// ```
    /// # use fluentargs_builder as fluentargs;
    /// use fluentargs::{CaseType, CommandLineParser, SetupError};
    ///
    /// let mut verbose = false;
    /// let mut parser = CommandLineParser::new();
    /// parser
    ///     .setup::<bool>(CaseType::CaseInsensitive, &["v", "verbose"])
    ///     .unwrap()
    ///     .callback(|value| verbose = value);
    ///
    /// assert!(matches!(
    ///     parser.setup::<bool>(CaseType::CaseSensitive, &["V"]),
    ///     Err(SetupError::OptionAlreadyExists { .. })
    /// ));
    ///
    /// parser.parse_tokens(vec!["-V"].as_slice());
    /// drop(parser);
    ///
    /// assert!(verbose);
    /// ```
    pub fn setup<'p, T>(
        &'p mut self,
        case_type: CaseType,
        names: &[&str],
    ) -> Result<OptionSetup<'p, 'a, T>, SetupError>
    where
        T: OptionValue + Clone + 'a,
    {
        let binding = Rc::new(RefCell::new(Binding::<'a, T>::default()));
        let index = self
            .registry
            .register(names, case_type, Box::new(binding.clone()))?;
        Ok(OptionSetup::new(self, index, binding))
    }

    /// Set up the help option, under one or more names.
    /// The help names are always matched ignoring case.
    /// If repeated, only the final help option will apply.
    ///
    /// When the help option appears on the Cli, the help message is shown and nothing else is processed.
    /// The message is printed to stdout, unless a callback is set up.
    pub fn setup_help<'p>(&'p mut self, names: &[&str]) -> Result<HelpSetup<'p, 'a>, SetupError> {
        OptionNameValidator::default().what_if_add_option(&[], names, CaseType::CaseInsensitive)?;
        NoDuplicateOptionValidator::default().what_if_add_option(
            &[],
            names,
            CaseType::CaseInsensitive,
        )?;
        let help_option = self.help_option.insert(HelpOption::new(names));
        Ok(HelpSetup::new(help_option))
    }

    /// Summarize the options, in registration order.
    pub fn options(&self) -> Vec<OptionSummary> {
        self.registry.summaries()
    }

    /// Show the help message, as if the help option appeared on the Cli.
    /// Does nothing when the help option has not been set up.
    pub fn show_help(&mut self) {
        let summaries = self.registry.summaries();

        if let Some(help_option) = self.help_option.as_mut() {
            help_option.show_help(&summaries, self.user_interface.as_ref());
        }
    }

    /// Parse the Cli of this process (`env::args`, without the program name).
    pub fn parse(&mut self) -> CommandLineParserResult {
        let command_input: Vec<String> = env::args().skip(1).collect();
        let tokens: Vec<&str> = command_input.iter().map(String::as_str).collect();
        self.parse_tokens(tokens.as_slice())
    }

    /// Parse the `tokens` as the Cli.
    ///
    /// Never fails outright: problems with the input are reported in the result.
    pub fn parse_tokens(&mut self, tokens: &[&str]) -> CommandLineParserResult {
        let engine_result = ParserEngine::default().parse(tokens);
        bind_options(
            engine_result,
            &mut self.registry,
            self.help_option.as_mut(),
            self.user_interface.as_ref(),
        )
    }
}
