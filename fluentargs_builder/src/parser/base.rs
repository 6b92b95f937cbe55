use crate::matcher::ParsedOption;
use crate::model::CaseType;
use crate::parser::{OptionSummary, OptionValidator, SetupError};
use crate::prelude::InvalidValue;

// We need a (dyn .. [ignoring T] ..) here in order to put all the options of varying types T under one collection.
// In other words, the bottom of the object graph knows the type T, but the registry works across all T.
/// Behaviour to bind an implicit generic type T from a [`ParsedOption`].
pub(crate) trait AnonymousBinding {
    /// Convert the parsed option and invoke the callbacks.
    /// Nothing is invoked when the conversion fails.
    fn bind(&mut self, parsed_option: &ParsedOption) -> Result<(), InvalidValue>;

    /// Invoke the callback with the default value, if there is one.
    fn bind_default(&mut self);

    fn has_default(&self) -> bool;

    fn has_callback(&self) -> bool;

    fn has_additional_arguments_callback(&self) -> bool;
}

/// The names of one option, in registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct OptionNames {
    names: Vec<(String, CaseType)>,
}

impl OptionNames {
    pub(crate) fn push(&mut self, name: impl Into<String>, case_type: CaseType) {
        self.names.push((name.into(), case_type));
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, CaseType)> {
        self.names
            .iter()
            .map(|(name, case_type)| (name.as_str(), *case_type))
    }

    pub(crate) fn of(&self, case_type: CaseType) -> impl Iterator<Item = &str> {
        self.iter()
            .filter(move |(_, ct)| *ct == case_type)
            .map(|(name, _)| name)
    }

    /// Whether `key` matches one of the names registered under `case_type`.
    pub(crate) fn matches(&self, key: &str, case_type: CaseType) -> bool {
        self.of(case_type).any(|name| case_type.matches(key, name))
    }

    pub(crate) fn matches_any(&self, key: &str) -> bool {
        self.matches(key, CaseType::CaseInsensitive) || self.matches(key, CaseType::CaseSensitive)
    }

    pub(crate) fn len(&self) -> usize {
        self.names.len()
    }
}

pub(crate) struct OptionDescriptor<'a> {
    pub(crate) names: OptionNames,
    pub(crate) required: bool,
    pub(crate) description: Option<String>,
    pub(crate) binding: Box<dyn AnonymousBinding + 'a>,
}

impl<'a> std::fmt::Debug for OptionDescriptor<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OptionDescriptor")
            .field("names", &self.names)
            .field("required", &self.required)
            .field("description", &self.description)
            .finish()
    }
}

impl<'a> OptionDescriptor<'a> {
    pub(crate) fn new(binding: Box<dyn AnonymousBinding + 'a>) -> Self {
        Self {
            names: OptionNames::default(),
            required: false,
            description: None,
            binding,
        }
    }

    pub(crate) fn summary(&self) -> OptionSummary {
        OptionSummary {
            names: self.names.iter().map(|(name, _)| name.to_string()).collect(),
            case_sensitive_names: self
                .names
                .of(CaseType::CaseSensitive)
                .map(str::to_string)
                .collect(),
            case_insensitive_names: self
                .names
                .of(CaseType::CaseInsensitive)
                .map(str::to_string)
                .collect(),
            required: self.required,
            has_default: self.binding.has_default(),
            has_callback: self.binding.has_callback(),
            has_additional_arguments_callback: self.binding.has_additional_arguments_callback(),
            description: self.description.clone(),
        }
    }
}

/// Owns every registered option, in registration order.
pub(crate) struct Registry<'a> {
    descriptors: Vec<OptionDescriptor<'a>>,
    validators: Vec<Box<dyn OptionValidator>>,
}

impl<'a> std::fmt::Debug for Registry<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("descriptors", &self.descriptors)
            .finish()
    }
}

impl<'a> Registry<'a> {
    pub(crate) fn new(validators: Vec<Box<dyn OptionValidator>>) -> Self {
        Self {
            descriptors: Vec::default(),
            validators,
        }
    }

    /// Check the names against every validator, without changing the registry.
    pub(crate) fn what_if_add_option(
        &self,
        names: &[&str],
        case_type: CaseType,
    ) -> Result<(), SetupError> {
        for validator in &self.validators {
            validator.what_if_add_option(&self.descriptors, names, case_type)?;
        }

        Ok(())
    }

    /// Register a new option under the (validated) names.
    /// Returns the index of the new option.
    pub(crate) fn register(
        &mut self,
        names: &[&str],
        case_type: CaseType,
        binding: Box<dyn AnonymousBinding + 'a>,
    ) -> Result<usize, SetupError> {
        self.what_if_add_option(names, case_type)?;
        let mut descriptor = OptionDescriptor::new(binding);

        for name in names {
            descriptor.names.push(*name, case_type);
        }

        self.descriptors.push(descriptor);
        Ok(self.descriptors.len() - 1)
    }

    /// Extend an existing option with further (validated) names.
    pub(crate) fn add_names(
        &mut self,
        index: usize,
        names: &[&str],
        case_type: CaseType,
    ) -> Result<(), SetupError> {
        self.what_if_add_option(names, case_type)?;
        let descriptor = self.get_mut(index);

        for name in names {
            descriptor.names.push(*name, case_type);
        }

        Ok(())
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> &mut OptionDescriptor<'a> {
        self.descriptors
            .get_mut(index)
            .expect("internal error - option index must be registered")
    }

    pub(crate) fn descriptors(&self) -> &[OptionDescriptor<'a>] {
        &self.descriptors
    }

    pub(crate) fn descriptors_mut(&mut self) -> &mut [OptionDescriptor<'a>] {
        &mut self.descriptors
    }

    pub(crate) fn summaries(&self) -> Vec<OptionSummary> {
        self.descriptors
            .iter()
            .map(OptionDescriptor::summary)
            .collect()
    }
}


#[cfg(test)]
mod tests {
    use super::test::BlackHole;
    use super::*;
    use crate::parser::{NoDuplicateOptionValidator, OptionNameValidator};

    fn registry<'a>() -> Registry<'a> {
        Registry::new(vec![
            Box::new(OptionNameValidator::default()),
            Box::new(NoDuplicateOptionValidator::default()),
        ])
    }

    #[test]
    fn option_names() {
        let mut names = OptionNames::default();
        names.push("a", CaseType::CaseSensitive);
        names.push("long", CaseType::CaseInsensitive);
        names.push("B", CaseType::CaseSensitive);

        assert_eq!(names.len(), 3);
        assert_eq!(
            names.of(CaseType::CaseSensitive).collect::<Vec<&str>>(),
            vec!["a", "B"]
        );
        assert_eq!(
            names.of(CaseType::CaseInsensitive).collect::<Vec<&str>>(),
            vec!["long"]
        );
        assert!(names.matches("LONG", CaseType::CaseInsensitive));
        assert!(!names.matches("LONG", CaseType::CaseSensitive));
        assert!(names.matches_any("a"));
        assert!(!names.matches_any("A"));
        assert!(!names.matches_any("b"));
        assert!(names.matches_any("Long"));
    }

    #[test]
    fn register() {
        // Setup
        let mut registry = registry();

        // Execute
        let first = registry
            .register(
                &["v", "verbose"],
                CaseType::CaseInsensitive,
                Box::new(BlackHole::default()),
            )
            .unwrap();
        let second = registry
            .register(&["q"], CaseType::CaseSensitive, Box::new(BlackHole::default()))
            .unwrap();
        registry
            .add_names(second, &["quiet"], CaseType::CaseInsensitive)
            .unwrap();

        // Verify
        assert_eq!(first, 0);
        assert_eq!(second, 1);
        let summaries = registry.summaries();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].names, vec!["v", "verbose"]);
        assert_eq!(summaries[0].case_insensitive_names, vec!["v", "verbose"]);
        assert_eq!(summaries[1].names, vec!["q", "quiet"]);
        assert_eq!(summaries[1].case_sensitive_names, vec!["q"]);
        assert_eq!(summaries[1].case_insensitive_names, vec!["quiet"]);
    }

    #[test]
    fn register_rejected_leaves_registry_untouched() {
        // Setup
        let mut registry = registry();
        registry
            .register(&["v"], CaseType::CaseInsensitive, Box::new(BlackHole::default()))
            .unwrap();

        // Execute
        let error = registry
            .register(
                &["x", "V"],
                CaseType::CaseSensitive,
                Box::new(BlackHole::default()),
            )
            .unwrap_err();

        // Verify
        assert_matches!(error, SetupError::OptionAlreadyExists { .. });
        assert_eq!(registry.descriptors().len(), 1);
    }

    #[test]
    fn add_names_rejected_leaves_descriptor_untouched() {
        // Setup
        let mut registry = registry();
        let index = registry
            .register(&["v"], CaseType::CaseInsensitive, Box::new(BlackHole::default()))
            .unwrap();

        // Execute
        let error = registry
            .add_names(index, &["verbose", "a=b"], CaseType::CaseInsensitive)
            .unwrap_err();

        // Verify
        assert_matches!(error, SetupError::InvalidOptionName { .. });
        assert_eq!(registry.summaries()[0].names, vec!["v"]);
    }
}
