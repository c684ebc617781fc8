//! Check registry
//!
//! Maps stable identifiers to check implementations. A registry is built once
//! when the process starts, then only read while hooks run. It is an ordinary
//! value passed by reference, so tests can assemble isolated registries out of
//! fake checks.

use crate::checks::{Check, NoBeforeCommit, NoNonAsciiFilenames, NoTrailingWhitespace};
use crate::config::ChecksConfig;
use crate::error::{ConfigError, RegistryError};
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Default)]
pub struct CheckRegistry {
    checks: BTreeMap<String, Arc<dyn Check>>,
}

impl CheckRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every builtin check, configured from `config`
    pub fn builtin(config: &ChecksConfig) -> Result<Self, ConfigError> {
        let mut registry = Self::new();
        registry.register(NoBeforeCommit::new(&config.no_before_commit.marker))?;
        registry.register(NoNonAsciiFilenames::new(
            &config.no_non_ascii_filenames.exclude,
        )?)?;
        registry.register(NoTrailingWhitespace::new(
            &config.no_trailing_whitespace.exclude,
        )?)?;
        Ok(registry)
    }

    /// Add a check; identifiers must be unique
    pub fn register(&mut self, check: impl Check + 'static) -> Result<(), RegistryError> {
        self.register_arc(Arc::new(check))
    }

    pub fn register_arc(&mut self, check: Arc<dyn Check>) -> Result<(), RegistryError> {
        let identifier = check.identifier().to_string();
        if self.checks.contains_key(&identifier) {
            return Err(RegistryError::DuplicateIdentifier(identifier));
        }

        tracing::trace!("Registered check {}", identifier);
        self.checks.insert(identifier, check);
        Ok(())
    }

    /// Look up a check by identifier
    pub fn resolve(&self, identifier: &str) -> Result<Arc<dyn Check>, RegistryError> {
        self.checks
            .get(identifier)
            .cloned()
            .ok_or_else(|| RegistryError::UnknownCheck(identifier.to_string()))
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.checks.contains_key(identifier)
    }

    /// Registered checks in identifier order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Check>> {
        self.checks.values()
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::CheckResult;
    use crate::context::CheckContext;

    struct Named(&'static str);

    impl Check for Named {
        fn identifier(&self) -> &str {
            self.0
        }

        fn description(&self) -> &str {
            "test check"
        }

        fn run(&self, _ctx: &CheckContext) -> anyhow::Result<CheckResult> {
            Ok(CheckResult::pass())
        }
    }

    #[test]
    fn test_register_and_resolve() {
        let mut registry = CheckRegistry::new();
        registry.register(Named("first")).unwrap();
        registry.register(Named("second")).unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.resolve("second").unwrap().identifier(), "second");
    }

    #[test]
    fn test_duplicate_identifier_is_rejected() {
        let mut registry = CheckRegistry::new();
        registry.register(Named("dup")).unwrap();

        assert_eq!(
            registry.register(Named("dup")),
            Err(RegistryError::DuplicateIdentifier("dup".to_string()))
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unknown_check() {
        let registry = CheckRegistry::new();
        let err = registry.resolve("no_such_check").err().unwrap();

        assert_eq!(err, RegistryError::UnknownCheck("no_such_check".to_string()));
    }

    #[test]
    fn test_builtin_registry() {
        let registry = CheckRegistry::builtin(&ChecksConfig::default()).unwrap();
        let identifiers: Vec<_> = registry.iter().map(|c| c.identifier().to_string()).collect();

        assert_eq!(
            identifiers,
            vec![
                "no_before_commit",
                "no_non_ascii_filenames",
                "no_trailing_whitespace"
            ]
        );
    }

    #[test]
    fn test_builtin_registry_rejects_bad_exclude_glob() {
        let mut config = ChecksConfig::default();
        config.no_trailing_whitespace.exclude = vec!["[".to_string()];

        assert!(matches!(
            CheckRegistry::builtin(&config),
            Err(ConfigError::InvalidPattern { .. })
        ));
    }
}
