use std::collections::HashSet;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::constant::*;
use crate::matcher::model::*;

/// The tokenizing engine.
///
/// Splits a raw Cli token list into [`ParsedOption`]s and loose additional values.
/// The engine knows nothing about the registered options; matching happens afterwards.
#[derive(Debug, Default, Clone, Copy)]
pub struct ParserEngine {}

impl ParserEngine {
    /// Tokenize the input.
    /// Never fails: any token that is not an option ends up as a value somewhere in the result.
    pub fn parse(&self, tokens: &[&str]) -> ParserEngineResult {
        let mut token_matcher = TokenMatcher::default();

        for token in tokens {
            token_matcher.feed(token);
        }

        token_matcher.close()
    }
}

#[derive(Debug, PartialEq, Eq)]
struct OptionToken<'t> {
    prefix: &'t str,
    key: &'t str,
    value: Option<String>,
    awaits_value: bool,
}

fn recognize(token: &str) -> Option<OptionToken<'_>> {
    let (prefix, body) = OPTION_PREFIXES
        .iter()
        .find_map(|prefix| token.strip_prefix(prefix).map(|body| (*prefix, body)))?;

    // A lone '-' or '/' is a value.
    if body.is_empty() {
        return None;
    }

    // 1. Find an assigned value, such as:
    //  --key=..
    //  -k:..
    //  /k=..
    // 2. Find a boolean suffix (short forms only), such as:
    //  -k+
    //  /k-
    // 3. Otherwise, the value may follow as the next token.
    let option_token = if let Some(index) = body.find(&VALUE_ASSIGNMENTS[..]) {
        OptionToken {
            prefix,
            key: &body[..index],
            value: Some(body[index + 1..].to_string()),
            awaits_value: false,
        }
    } else {
        match boolean_suffix(prefix, body) {
            Some((key, flag)) => OptionToken {
                prefix,
                key,
                value: Some(flag.to_string()),
                awaits_value: false,
            },
            None => OptionToken {
                prefix,
                key: body,
                value: None,
                awaits_value: true,
            },
        }
    };

    if option_token.key.is_empty() {
        None
    } else {
        Some(option_token)
    }
}

fn boolean_suffix<'t>(prefix: &str, body: &'t str) -> Option<(&'t str, bool)> {
    if prefix == DOUBLE_DASH || body.chars().count() < 2 {
        return None;
    }

    if let Some(key) = body.strip_suffix(TRUE_SUFFIX) {
        Some((key, true))
    } else if let Some(key) = body.strip_suffix(FALSE_SUFFIX) {
        Some((key, false))
    } else {
        None
    }
}

fn is_negative_number(token: &str) -> bool {
    match token.strip_prefix(SINGLE_DASH) {
        Some(rest) => rest.starts_with(|c: char| c.is_ascii_digit()),
        None => false,
    }
}

/// The option (or stack of short options) currently receiving values.
#[derive(Debug)]
struct OpenOption {
    keys: Vec<String>,
    stacked_from: Option<String>,
    value: Option<String>,
    awaits_value: bool,
    additional_values: Vec<String>,
}

impl From<OptionToken<'_>> for OpenOption {
    fn from(option_token: OptionToken<'_>) -> Self {
        let OptionToken {
            prefix,
            key,
            value,
            awaits_value,
        } = option_token;

        // Short forms with more than one character are stacked: -abc is -a -b -c.
        let (keys, stacked_from) = if prefix != DOUBLE_DASH && key.chars().count() > 1 {
            (
                key.chars().map(String::from).collect(),
                Some(key.to_string()),
            )
        } else {
            (vec![key.to_string()], None)
        };

        Self {
            keys,
            stacked_from,
            value,
            awaits_value,
            additional_values: Vec::default(),
        }
    }
}

impl OpenOption {
    fn push(&mut self, token: &str) {
        if self.awaits_value {
            self.value.replace(token.to_string());
            self.awaits_value = false;
        } else {
            self.additional_values.push(token.to_string());
        }
    }

    fn close(self) -> impl Iterator<Item = ParsedOption> {
        let OpenOption {
            keys,
            stacked_from,
            value,
            additional_values,
            ..
        } = self;

        keys.into_iter().map(move |key| ParsedOption {
            key,
            value: value.clone(),
            additional_values: additional_values.clone(),
            stacked_from: stacked_from.clone(),
        })
    }
}

#[derive(Debug, Default)]
struct TokenMatcher {
    open: Option<OpenOption>,
    terminated: bool,
    seen: HashSet<String>,
    result: ParserEngineResult,
}

impl TokenMatcher {
    fn feed(&mut self, token: &str) {
        // Nothing after the terminator is interpreted.
        if self.terminated {
            self.push_value(token);
            return;
        }

        if token == ADDITIONAL_ARGUMENTS_TERMINATOR {
            self.terminated = true;
            return;
        }

        let awaits_value = self
            .open
            .as_ref()
            .map(|open| open.awaits_value)
            .unwrap_or(false);

        if awaits_value && is_negative_number(token) {
            self.push_value(token);
            return;
        }

        match recognize(token) {
            Some(option_token) => {
                self.flush();
                self.open.replace(OpenOption::from(option_token));
            }
            None => self.push_value(token),
        }
    }

    fn push_value(&mut self, token: &str) {
        match self.open.as_mut() {
            Some(open) => open.push(token),
            None => self.result.additional_values.push(token.to_string()),
        }
    }

    fn flush(&mut self) {
        if let Some(open) = self.open.take() {
            for parsed_option in open.close() {
                // Stacked keys are deduplicated once their stack is resolved.
                if parsed_option.is_stacked() || self.seen.insert(parsed_option.key.clone()) {
                    self.result.parsed_options.push(parsed_option);
                } else {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!(
                            "Dropping repeated option '{}'; the first occurrence wins.",
                            parsed_option.key
                        );
                    }
                }
            }
        }
    }

    fn close(mut self) -> ParserEngineResult {
        self.flush();

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Tokenized {} option(s) and {} additional value(s).",
                self.result.parsed_options.len(),
                self.result.additional_values.len()
            );
        }

        self.result
    }
}
