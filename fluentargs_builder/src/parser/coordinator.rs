use std::collections::HashSet;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::matcher::{ParsedOption, ParserEngineResult};
use crate::model::CaseType;
use crate::parser::{
    CommandLineParserResult, HelpOption, OptionDescriptor, ParseError, Registry, UserInterface,
};

/// Bind the tokenized input to the registered options.
///
/// Every registered option is visited, in registration order, and either bound, defaulted or reported.
/// Errors are collected into the result; nothing here fails outright.
pub(crate) fn bind_options<'a>(
    engine_result: ParserEngineResult,
    registry: &mut Registry<'a>,
    help_option: Option<&mut HelpOption<'a>>,
    user_interface: &(impl UserInterface + ?Sized),
) -> CommandLineParserResult {
    let mut result = CommandLineParserResult {
        empty_args: engine_result.is_empty(),
        ..CommandLineParserResult::default()
    };

    if let Some(help_option) = help_option {
        if help_option.should_show_help(&engine_result) {
            result.help_called = true;
            result.additional_values = engine_result.additional_values;
            help_option.show_help(&registry.summaries(), user_interface);
            return result.finish();
        }
    }

    let ParserEngineResult {
        parsed_options,
        additional_values,
    } = engine_result;
    result.additional_values = additional_values;
    let mut pool = drop_repeats(resolve_stacks(parsed_options, registry.descriptors()));

    for descriptor in registry.descriptors_mut() {
        match take_match(&mut pool, descriptor) {
            Some(parsed_option) => match descriptor.binding.bind(&parsed_option) {
                Ok(()) => {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Bound '{}' to {:?}.", parsed_option.key, descriptor.names);
                    }
                }
                Err(reason) => {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Failed to bind '{}': {reason}", parsed_option.key);
                    }

                    result.push_error(ParseError::OptionSyntax {
                        option: descriptor.summary(),
                        parsed_option,
                        reason,
                    });

                    if descriptor.binding.has_default() {
                        descriptor.binding.bind_default();
                    }
                }
            },
            None => {
                if descriptor.required {
                    result.push_error(ParseError::ExpectedOptionNotFound {
                        option: descriptor.summary(),
                    });
                } else if descriptor.binding.has_default() {
                    descriptor.binding.bind_default();
                }

                result.unmatched_options.push(descriptor.summary());
            }
        }
    }

    result.additional_options_found = pool
        .into_iter()
        .map(Candidate::into_parsed_option)
        .map(|parsed_option| (parsed_option.key, parsed_option.value))
        .collect();

    result.finish()
}

/// A parsed option, once its stack (if any) has been resolved against the registered options.
#[derive(Debug, PartialEq, Eq)]
enum Candidate {
    Bindable(ParsedOption),
    // Part of a stack that names no registered options; never bound, only reported.
    Rejected(ParsedOption),
}

impl Candidate {
    fn into_parsed_option(self) -> ParsedOption {
        match self {
            Candidate::Bindable(parsed_option) | Candidate::Rejected(parsed_option) => {
                parsed_option
            }
        }
    }
}

/// Find the input for the descriptor, removing it from the pool.
/// Case insensitive names take precedence over case sensitive names.
fn take_match(
    pool: &mut Vec<Candidate>,
    descriptor: &OptionDescriptor<'_>,
) -> Option<ParsedOption> {
    [CaseType::CaseInsensitive, CaseType::CaseSensitive]
        .into_iter()
        .find_map(|case_type| {
            pool.iter().position(|candidate| match candidate {
                Candidate::Bindable(parsed_option) => {
                    descriptor.names.matches(&parsed_option.key, case_type)
                }
                Candidate::Rejected(_) => false,
            })
        })
        .map(|index| pool.remove(index).into_parsed_option())
}

/// Decide how each stacked option group binds, keeping the input order.
///
/// A group binds as split when every one of its keys names a registered option.
/// Otherwise it binds as the single unsplit option, when that names a registered option (ex: `-record`).
/// Otherwise the whole group is rejected.
fn resolve_stacks(
    parsed_options: Vec<ParsedOption>,
    descriptors: &[OptionDescriptor<'_>],
) -> Vec<Candidate> {
    let registered = |key: &str| {
        descriptors
            .iter()
            .any(|descriptor| descriptor.names.matches_any(key))
    };
    let mut pool = Vec::default();

    for group in group_stacks(parsed_options) {
        let head = group
            .first()
            .expect("internal error - a group must not be empty");

        match head.stacked_from.clone() {
            None => pool.extend(group.into_iter().map(Candidate::Bindable)),
            Some(stacked_from) => {
                if group.iter().all(|parsed_option| registered(parsed_option.key.as_str())) {
                    pool.extend(group.into_iter().map(Candidate::Bindable));
                } else if registered(stacked_from.as_str()) {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Binding '{stacked_from}' unsplit.");
                    }

                    pool.push(Candidate::Bindable(ParsedOption {
                        key: stacked_from,
                        value: head.value.clone(),
                        additional_values: head.additional_values.clone(),
                        stacked_from: None,
                    }));
                } else {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Rejecting '{stacked_from}', it does not name registered options.");
                    }

                    pool.extend(group.into_iter().map(Candidate::Rejected));
                }
            }
        }
    }

    pool
}

/// Keep only the first of each bindable key.
/// The engine leaves stacked keys to this, since they only count once their stack binds split.
fn drop_repeats(pool: Vec<Candidate>) -> Vec<Candidate> {
    let mut seen: HashSet<String> = HashSet::default();

    pool.into_iter()
        .filter(|candidate| match candidate {
            Candidate::Bindable(parsed_option) => {
                let first = seen.insert(parsed_option.key.clone());

                #[cfg(feature = "tracing_debug")]
                {
                    if !first {
                        debug!(
                            "Dropping repeated option '{}'; the first occurrence wins.",
                            parsed_option.key
                        );
                    }
                }

                first
            }
            Candidate::Rejected(_) => true,
        })
        .collect()
}

// Split options arrive consecutively, sharing the same `stacked_from`.
fn group_stacks(parsed_options: Vec<ParsedOption>) -> Vec<Vec<ParsedOption>> {
    let mut groups: Vec<Vec<ParsedOption>> = Vec::default();

    for parsed_option in parsed_options {
        match groups.last_mut() {
            Some(group)
                if parsed_option.is_stacked()
                    && group.first().map(|head| &head.stacked_from)
                        == Some(&parsed_option.stacked_from) =>
            {
                group.push(parsed_option);
            }
            _ => groups.push(vec![parsed_option]),
        }
    }

    groups
}
