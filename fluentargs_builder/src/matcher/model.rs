/// An option as found on the Cli input, before it is matched against any registered option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedOption {
    /// The option name, with its prefix and any value/suffix removed.
    pub key: String,
    /// The first value associated with the option.
    /// A boolean suffix (`-v+` or `-v-`) produces `"true"` or `"false"`.
    pub value: Option<String>,
    /// The bare tokens following the value, up until the next option.
    pub additional_values: Vec<String>,
    /// The full key of the token this option was split from (ex: `"abc"` for `-abc`).
    pub stacked_from: Option<String>,
}

impl ParsedOption {
    pub(crate) fn new(key: impl Into<String>, value: Option<String>) -> Self {
        Self {
            key: key.into(),
            value,
            additional_values: Vec::default(),
            stacked_from: None,
        }
    }

    /// *Available using 'unit_test' crate feature only.*</br></br>
    /// Build a [`ParsedOption`] for use in testing an [`OptionValue`](crate::prelude::OptionValue) implementation.
    ///
    /// ### Example
    /// ```
    /// # use fluentargs_builder as fluentargs;
    /// use fluentargs::prelude::*;
    /// use fluentargs::ParsedOption;
    ///
    /// let option = ParsedOption::test_dummy("count", Some("3"), &["4"]);
    /// assert_eq!(Vec::<u8>::from_parsed(&option), Ok(vec![3, 4]));
    /// ```
    #[cfg(feature = "unit_test")]
    pub fn test_dummy(key: &str, value: Option<&str>, additional_values: &[&str]) -> Self {
        Self {
            key: key.to_string(),
            value: value.map(str::to_string),
            additional_values: additional_values.iter().map(|v| v.to_string()).collect(),
            stacked_from: None,
        }
    }

    /// Whether this option was produced by splitting a stacked short option token.
    pub fn is_stacked(&self) -> bool {
        self.stacked_from.is_some()
    }

    /// All the values of this option, starting with the primary value.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.value
            .iter()
            .chain(self.additional_values.iter())
            .map(String::as_str)
    }
}

/// The output of the tokenizing engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserEngineResult {
    /// Options in input order.
    /// Unstacked keys are unique (the first occurrence wins); stacked keys may repeat.
    pub parsed_options: Vec<ParsedOption>,
    /// Tokens not associated with any option, in input order.
    pub additional_values: Vec<String>,
}

impl ParserEngineResult {
    /// Whether the input produced no options at all (additional values notwithstanding).
    pub fn is_empty(&self) -> bool {
        self.parsed_options.is_empty()
    }
}
