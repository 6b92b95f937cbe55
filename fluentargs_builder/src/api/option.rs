use std::cell::RefCell;
use std::rc::Rc;

use crate::api::CommandLineParser;
use crate::matcher::ParsedOption;
use crate::model::CaseType;
use crate::parser::{AnonymousBinding, OptionSummary, SetupError};
use crate::prelude::{InvalidValue, OptionValue};

pub(crate) struct Binding<'a, T> {
    callback: Option<Box<dyn FnMut(T) + 'a>>,
    additional_arguments_callback: Option<Box<dyn FnMut(&[String]) + 'a>>,
    default: Option<T>,
}

impl<'a, T> Default for Binding<'a, T> {
    fn default() -> Self {
        Self {
            callback: None,
            additional_arguments_callback: None,
            default: None,
        }
    }
}

impl<'a, T> AnonymousBinding for Rc<RefCell<Binding<'a, T>>>
where
    T: OptionValue + Clone,
{
    fn bind(&mut self, parsed_option: &ParsedOption) -> Result<(), InvalidValue> {
        let value = T::from_parsed(parsed_option)?;
        let mut binding = self.borrow_mut();
        let Binding {
            callback,
            additional_arguments_callback,
            ..
        } = &mut *binding;

        if let Some(callback) = callback.as_mut() {
            callback(value);
        }

        if !parsed_option.additional_values.is_empty() {
            if let Some(additional_arguments_callback) = additional_arguments_callback.as_mut() {
                additional_arguments_callback(&parsed_option.additional_values);
            }
        }

        Ok(())
    }

    fn bind_default(&mut self) {
        let mut binding = self.borrow_mut();
        let Binding {
            callback, default, ..
        } = &mut *binding;

        if let (Some(callback), Some(default)) = (callback.as_mut(), default.as_ref()) {
            callback(default.clone());
        }
    }

    fn has_default(&self) -> bool {
        self.borrow().default.is_some()
    }

    fn has_callback(&self) -> bool {
        self.borrow().callback.is_some()
    }

    fn has_additional_arguments_callback(&self) -> bool {
        self.borrow().additional_arguments_callback.is_some()
    }
}

/// The fluent setup of one option, returned by [`CommandLineParser::setup`].
///
/// ### Example
/// ```
/// # use fluentargs_builder as fluentargs;
/// use fluentargs::{CaseType, CommandLineParser};
///
/// let mut record: u32 = 0;
/// let mut tags: Vec<String> = Vec::default();
/// let mut parser = CommandLineParser::new();
/// parser
///     .setup::<u32>(CaseType::CaseInsensitive, &["r", "record"])
///     .unwrap()
///     .callback(|value| record = value)
///     .capture_additional_arguments(|values| tags.extend_from_slice(values))
///     .with_description("The record to update.")
///     .required();
///
/// let result = parser.parse_tokens(vec!["--record", "10", "new", "urgent"].as_slice());
/// drop(parser);
///
/// assert!(!result.has_errors);
/// assert_eq!(record, 10);
/// assert_eq!(tags, vec!["new", "urgent"]);
/// ```
pub struct OptionSetup<'p, 'a, T> {
    parser: &'p mut CommandLineParser<'a>,
    index: usize,
    binding: Rc<RefCell<Binding<'a, T>>>,
}

impl<'p, 'a, T> OptionSetup<'p, 'a, T> {
    pub(crate) fn new(
        parser: &'p mut CommandLineParser<'a>,
        index: usize,
        binding: Rc<RefCell<Binding<'a, T>>>,
    ) -> Self {
        Self {
            parser,
            index,
            binding,
        }
    }

    /// Invoke `callback` with the converted value when the option is parsed.
    /// Also invoked with the default value, when the option falls back to its default.
    /// If repeated, only the final callback will apply.
    pub fn callback(self, callback: impl FnMut(T) + 'a) -> Self {
        self.binding
            .borrow_mut()
            .callback
            .replace(Box::new(callback));
        self
    }

    /// Invoke `callback` with the bare values that follow the option's value on the Cli.
    /// Not invoked when there are none.
    ///
    /// ### Example
    /// ```
    /// # use fluentargs_builder as fluentargs;
    /// use fluentargs::{CaseType, CommandLineParser};
    ///
    /// let mut additional: Vec<String> = Vec::default();
    /// let mut parser = CommandLineParser::new();
    /// parser
    ///     .setup::<String>(CaseType::CaseInsensitive, &["my-option"])
    ///     .unwrap()
    ///     .capture_additional_arguments(|values| additional = values.to_vec());
    ///
    /// parser.parse_tokens(vec!["--my-option", "value", "--", "addArg1", "addArg2"].as_slice());
    /// drop(parser);
    ///
    /// assert_eq!(additional, vec!["addArg1", "addArg2"]);
    /// ```
    pub fn capture_additional_arguments(self, callback: impl FnMut(&[String]) + 'a) -> Self {
        self.binding
            .borrow_mut()
            .additional_arguments_callback
            .replace(Box::new(callback));
        self
    }

    /// Require the option on the Cli.
    /// A missing required option is reported as [`ParseError::ExpectedOptionNotFound`](crate::ParseError::ExpectedOptionNotFound).
    pub fn required(self) -> Self {
        self.parser.registry.get_mut(self.index).required = true;
        self
    }

    /// Use `default` when the option is missing from the Cli, or its value cannot be converted.
    /// Requires a callback to take effect.
    pub fn set_default(self, default: T) -> Self {
        self.binding.borrow_mut().default.replace(default);
        self
    }

    /// Document the option for the help message.
    /// If repeated, only the final description will apply.
    pub fn with_description(self, description: impl Into<String>) -> Self {
        self.parser.registry.get_mut(self.index).description = Some(description.into());
        self
    }

    /// Add a further name, matched exactly.
    pub fn add_case_sensitive_option(self, name: &str) -> Result<Self, SetupError> {
        self.add_names(&[name], CaseType::CaseSensitive)
    }

    /// Add a further name, matched ignoring case.
    pub fn add_case_insensitive_option(self, name: &str) -> Result<Self, SetupError> {
        self.add_names(&[name], CaseType::CaseInsensitive)
    }

    fn add_names(self, names: &[&str], case_type: CaseType) -> Result<Self, SetupError> {
        self.parser.registry.add_names(self.index, names, case_type)?;
        Ok(self)
    }

    /// Summarize the option as set up so far.
    pub fn summary(&self) -> OptionSummary {
        self.parser.registry.descriptors()[self.index].summary()
    }
}
