use thiserror::Error;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::constant::*;
use crate::model::CaseType;
use crate::parser::OptionDescriptor;

/// The errors raised while setting up a [`CommandLineParser`](crate::CommandLineParser).
///
/// These represent a programming error in the parser setup, never a problem with the Cli input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// The name may not be used as an option name.
    #[error("Setup error: option name '{name}' is invalid, {reason}.")]
    InvalidOptionName {
        /// The rejected name.
        name: String,
        /// What is wrong with the name.
        reason: String,
    },
    /// The name is already claimed by a registered option.
    #[error("Setup error: option name '{name}' conflicts with the existing option name '{existing}'.")]
    OptionAlreadyExists {
        /// The rejected name.
        name: String,
        /// The registered name it conflicts with.
        existing: String,
    },
}

/// Behaviour to check a prospective set of names before they are added to the registry.
pub(crate) trait OptionValidator {
    fn what_if_add_option(
        &self,
        existing: &[OptionDescriptor<'_>],
        names: &[&str],
        case_type: CaseType,
    ) -> Result<(), SetupError>;
}

#[derive(Debug, Default)]
pub(crate) struct OptionNameValidator {}

impl OptionNameValidator {
    fn validate(name: &str) -> Result<(), SetupError> {
        let invalid = |reason: String| SetupError::InvalidOptionName {
            name: name.to_string(),
            reason,
        };

        if name.is_empty() {
            return Err(invalid("it must not be empty".to_string()));
        }

        if name.chars().all(char::is_whitespace) {
            return Err(invalid("it must not be blank".to_string()));
        }

        if name.chars().any(char::is_control) {
            return Err(invalid("it must not contain control characters".to_string()));
        }

        if let Some(c) = name
            .chars()
            .find(|c| RESERVED_CHARACTERS.contains(c) || c.is_whitespace())
        {
            return Err(invalid(format!("it must not contain '{c}'")));
        }

        Ok(())
    }
}

impl OptionValidator for OptionNameValidator {
    fn what_if_add_option(
        &self,
        _existing: &[OptionDescriptor<'_>],
        names: &[&str],
        _case_type: CaseType,
    ) -> Result<(), SetupError> {
        if names.is_empty() {
            return Err(SetupError::InvalidOptionName {
                name: String::default(),
                reason: "at least one name is required".to_string(),
            });
        }

        for name in names {
            OptionNameValidator::validate(name)?;
        }

        Ok(())
    }
}

#[derive(Debug, Default)]
pub(crate) struct NoDuplicateOptionValidator {}

// Two names conflict when either side ignores case and they are equal ignoring case,
// or when they are exactly equal.
fn conflicts(name: &str, case_type: CaseType, other: &str, other_case_type: CaseType) -> bool {
    if case_type == CaseType::CaseInsensitive || other_case_type == CaseType::CaseInsensitive {
        CaseType::CaseInsensitive.matches(name, other)
    } else {
        CaseType::CaseSensitive.matches(name, other)
    }
}

impl OptionValidator for NoDuplicateOptionValidator {
    fn what_if_add_option(
        &self,
        existing: &[OptionDescriptor<'_>],
        names: &[&str],
        case_type: CaseType,
    ) -> Result<(), SetupError> {
        for (i, name) in names.iter().enumerate() {
            let registered = existing
                .iter()
                .flat_map(|descriptor| descriptor.names.iter());
            let pending = names[..i].iter().map(|n| (*n, case_type));

            if let Some((other, _)) = registered
                .chain(pending)
                .find(|(other, other_case_type)| {
                    conflicts(name, case_type, other, *other_case_type)
                })
            {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Rejecting '{name}' ({case_type}), it conflicts with '{other}'.");
                }

                return Err(SetupError::OptionAlreadyExists {
                    name: name.to_string(),
                    existing: other.to_string(),
                });
            }
        }

        Ok(())
    }
}
