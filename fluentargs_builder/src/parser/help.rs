#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::matcher::ParserEngineResult;
use crate::model::CaseType;
use crate::parser::{ColumnFormatter, OptionFormatter, OptionSummary, UserInterface};

/// The special option that triggers the help message.
/// Its names are always matched ignoring case.
pub(crate) struct HelpOption<'a> {
    names: Vec<String>,
    callback: Option<Box<dyn FnMut(&str) + 'a>>,
    header: Option<String>,
    formatter: Box<dyn OptionFormatter + 'a>,
    use_for_empty_args: bool,
}

impl<'a> std::fmt::Debug for HelpOption<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HelpOption")
            .field("names", &self.names)
            .field("header", &self.header)
            .field("use_for_empty_args", &self.use_for_empty_args)
            .finish()
    }
}

impl<'a> HelpOption<'a> {
    pub(crate) fn new(names: &[&str]) -> Self {
        Self::with_formatter(names, Box::new(ColumnFormatter::terminal()))
    }

    pub(crate) fn with_formatter(names: &[&str], formatter: Box<dyn OptionFormatter + 'a>) -> Self {
        Self {
            names: names.iter().map(|name| name.to_string()).collect(),
            callback: None,
            header: None,
            formatter,
            use_for_empty_args: false,
        }
    }

    pub(crate) fn set_callback(&mut self, callback: Box<dyn FnMut(&str) + 'a>) {
        self.callback.replace(callback);
    }

    pub(crate) fn set_header(&mut self, header: String) {
        self.header.replace(header);
    }

    pub(crate) fn set_formatter(&mut self, formatter: Box<dyn OptionFormatter + 'a>) {
        self.formatter = formatter;
    }

    pub(crate) fn set_use_for_empty_args(&mut self) {
        self.use_for_empty_args = true;
    }

    fn matches(&self, key: &str) -> bool {
        self.names
            .iter()
            .any(|name| CaseType::CaseInsensitive.matches(key, name))
    }

    /// Whether the input asks for help.
    ///
    /// Input without any options asks for help only when set up to do so.
    /// Otherwise, any option (or the unsplit token of a stacked option) may match a help name.
    pub(crate) fn should_show_help(&self, engine_result: &ParserEngineResult) -> bool {
        if engine_result.is_empty() {
            return self.use_for_empty_args;
        }

        engine_result.parsed_options.iter().any(|parsed_option| {
            self.matches(&parsed_option.key)
                || parsed_option
                    .stacked_from
                    .as_ref()
                    .map(|stacked_from| self.matches(stacked_from))
                    .unwrap_or(false)
        })
    }

    pub(crate) fn format(&self, options: &[OptionSummary]) -> String {
        let body = self.formatter.format(options);

        match &self.header {
            Some(header) => format!("{header}\n\n{body}"),
            None => body,
        }
    }

    /// Deliver the help message to the callback, or print it when there is no callback.
    pub(crate) fn show_help(
        &mut self,
        options: &[OptionSummary],
        user_interface: &(impl UserInterface + ?Sized),
    ) {
        let message = self.format(options);

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Showing help for {} option(s).", options.len());
        }

        match self.callback.as_mut() {
            Some(callback) => callback(&message),
            None => user_interface.print(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::ParserEngine;
    use crate::parser::util::InMemoryInterface;
    use rstest::rstest;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Names {}

    impl OptionFormatter for Names {
        fn format(&self, options: &[OptionSummary]) -> String {
            options
                .iter()
                .map(|option| option.names.join("|"))
                .collect::<Vec<String>>()
                .join(" ")
        }
    }

    fn summary(name: &str) -> OptionSummary {
        OptionSummary {
            names: vec![name.to_string()],
            case_sensitive_names: vec![name.to_string()],
            case_insensitive_names: Vec::default(),
            required: false,
            has_default: false,
            has_callback: true,
            has_additional_arguments_callback: false,
            description: None,
        }
    }

    #[rstest]
    #[case(vec!["-?"], true)]
    #[case(vec!["/?"], true)]
    #[case(vec!["--help"], true)]
    #[case(vec!["--HELP"], true)]
    #[case(vec!["/help"], true)]
    #[case(vec!["-h"], true)]
    #[case(vec!["-H"], true)]
    #[case(vec!["-v", "--x", "/?"], true)]
    #[case(vec!["-vh"], true)]
    #[case(vec!["--helper"], false)]
    #[case(vec!["-v"], false)]
    #[case(vec!["help"], false)]
    #[case(vec!["--", "--help"], false)]
    #[case(vec![], false)]
    fn should_show_help(#[case] tokens: Vec<&str>, #[case] expected: bool) {
        let help_option = HelpOption::new(&["?", "HELP", "h"]);
        let engine_result = ParserEngine::default().parse(tokens.as_slice());
        assert_eq!(help_option.should_show_help(&engine_result), expected);
    }

    #[rstest]
    #[case(vec![], true)]
    #[case(vec!["value"], true)]
    #[case(vec!["-v"], false)]
    fn should_show_help_empty_args(#[case] tokens: Vec<&str>, #[case] expected: bool) {
        let mut help_option = HelpOption::new(&["?"]);
        help_option.set_use_for_empty_args();
        let engine_result = ParserEngine::default().parse(tokens.as_slice());
        assert_eq!(help_option.should_show_help(&engine_result), expected);
    }

    #[test]
    fn show_help_callback() {
        // Setup
        let message = Rc::new(RefCell::new(None));
        let message_ref = message.clone();
        let mut help_option = HelpOption::with_formatter(&["?"], Box::new(Names {}));
        help_option.set_callback(Box::new(move |text: &str| {
            message_ref.borrow_mut().replace(text.to_string());
        }));
        let interface = InMemoryInterface::default();

        // Execute
        help_option.show_help(&[summary("a"), summary("b")], &interface);

        // Verify
        assert_eq!(message.borrow().as_deref(), Some("a b"));
        assert_eq!(interface.consume(), None);
    }

    #[test]
    fn show_help_print() {
        // Setup
        let mut help_option = HelpOption::with_formatter(&["?"], Box::new(Names {}));
        help_option.set_header("usage: program [options]".to_string());
        let interface = InMemoryInterface::default();

        // Execute
        help_option.show_help(&[summary("a")], &interface);

        // Verify
        assert_eq!(
            interface.consume_message(),
            r#"usage: program [options]

a"#
        );
    }

    #[test]
    fn set_formatter() {
        let mut help_option = HelpOption::new(&["?"]);
        help_option.set_formatter(Box::new(Names {}));
        assert_eq!(help_option.format(&[summary("a")]), "a");
    }
}
