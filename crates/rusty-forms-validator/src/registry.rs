// File: src/registry.rs
// Purpose: Lazily built, cached validator instances keyed by kind

use crate::error::{FormError, Result};
use crate::validator::{FieldValidator, ValidatorKind};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Builds a fresh validator of one kind
pub type ValidatorConstructor = fn() -> FieldValidator;

/// Shared handle to a cached validator
pub type SharedValidator = Rc<RefCell<FieldValidator>>;

/// Maps validator kinds to constructors and caches one instance per kind
///
/// The registry owns every instance it builds; callers get shared handles.
/// Repeated lookups of the same reference name return the same instance,
/// whatever config was last applied to it, so callers must configure before
/// each use. Confined to one thread (`Rc`/`RefCell`).
pub struct ValidatorRegistry {
    constructors: HashMap<ValidatorKind, ValidatorConstructor>,
    cache: HashMap<ValidatorKind, SharedValidator>,
}

impl ValidatorRegistry {
    /// Empty registry with no kinds registered
    pub fn new() -> Self {
        Self {
            constructors: HashMap::new(),
            cache: HashMap::new(),
        }
    }

    /// Registry with every built-in kind registered
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry
            .register(ValidatorKind::Date, || FieldValidator::for_kind(ValidatorKind::Date))
            .register(ValidatorKind::Email, || FieldValidator::for_kind(ValidatorKind::Email))
            .register(ValidatorKind::String, || FieldValidator::for_kind(ValidatorKind::String))
            .register(ValidatorKind::Username, || {
                FieldValidator::for_kind(ValidatorKind::Username)
            })
            .register(ValidatorKind::Password, || {
                FieldValidator::for_kind(ValidatorKind::Password)
            })
            .register(ValidatorKind::Url, || FieldValidator::for_kind(ValidatorKind::Url))
            .register(ValidatorKind::Number, || FieldValidator::for_kind(ValidatorKind::Number));
        registry
    }

    /// Registers (or replaces) the constructor for `kind`
    ///
    /// Replacing a constructor drops any instance already cached for the kind.
    pub fn register(&mut self, kind: ValidatorKind, constructor: ValidatorConstructor) -> &mut Self {
        self.constructors.insert(kind, constructor);
        self.cache.remove(&kind);
        self
    }

    pub fn is_registered(&self, kind: ValidatorKind) -> bool {
        self.constructors.contains_key(&kind)
    }

    /// Returns the cached instance for `reference_name`, building it on first use
    ///
    /// A constructor that builds a validator of another kind is rejected with
    /// [`FormError::KindMismatch`] and nothing is cached.
    pub fn get(&mut self, reference_name: &str) -> Result<SharedValidator> {
        let kind: ValidatorKind = reference_name.parse()?;

        if let Some(cached) = self.cache.get(&kind) {
            return Ok(Rc::clone(cached));
        }

        let constructor = self
            .constructors
            .get(&kind)
            .ok_or_else(|| FormError::unknown_kind(reference_name))?;

        tracing::debug!(validator = %kind, "constructing validator");
        let built = constructor();
        if built.kind() != kind {
            tracing::warn!(expected = %kind, actual = %built.kind(), "constructor built the wrong kind");
            return Err(FormError::KindMismatch {
                expected: kind,
                actual: built.kind(),
            });
        }

        let instance = Rc::new(RefCell::new(built));
        self.cache.insert(kind, Rc::clone(&instance));
        Ok(instance)
    }

    /// Number of instances built so far
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    /// Drops every cached instance; constructors stay registered
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}

impl Default for ValidatorRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl std::fmt::Debug for ValidatorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut registered: Vec<_> = self.constructors.keys().collect();
        registered.sort();
        f.debug_struct("ValidatorRegistry")
            .field("registered", &registered)
            .field("cached", &self.cache.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldConfig;
    use crate::validator::Validator;
    use rstest::rstest;

    #[rstest]
    #[case("validateDate")]
    #[case("validateEmail")]
    #[case("validateString")]
    #[case("validateUsername")]
    #[case("validatePassword")]
    #[case("validateUrl")]
    #[case("validateNumber")]
    fn test_repeated_get_returns_same_instance(#[case] name: &str) {
        let mut registry = ValidatorRegistry::with_defaults();
        let first = registry.get(name).unwrap();
        let second = registry.get(name).unwrap();
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(first.borrow().kind().reference_name(), name);
        assert_eq!(registry.cached_len(), 1);
    }

    #[test]
    fn test_unknown_name_fails() {
        let mut registry = ValidatorRegistry::with_defaults();
        assert_eq!(
            registry.get("unknown").unwrap_err(),
            FormError::unknown_kind("unknown")
        );
        assert_eq!(registry.cached_len(), 0);
    }

    #[test]
    fn test_unregistered_kind_fails() {
        let mut registry = ValidatorRegistry::new();
        assert!(!registry.is_registered(ValidatorKind::Email));
        assert!(matches!(
            registry.get("validateEmail"),
            Err(FormError::UnknownValidatorKind { .. })
        ));
    }

    #[test]
    fn test_cached_instance_keeps_config() {
        let mut registry = ValidatorRegistry::with_defaults();
        registry
            .get("validateString")
            .unwrap()
            .borrow_mut()
            .configure(&FieldConfig::new().with("max_length", "2"))
            .unwrap();

        let again = registry.get("validateString").unwrap();
        assert!(!again.borrow_mut().is_valid("long"));
    }

    #[test]
    fn test_register_replaces_and_evicts() {
        let mut registry = ValidatorRegistry::with_defaults();
        let before = registry.get("validateUrl").unwrap();

        registry.register(ValidatorKind::Url, || FieldValidator::for_kind(ValidatorKind::Url));
        let after = registry.get("validateUrl").unwrap();
        assert!(!Rc::ptr_eq(&before, &after));

        registry.clear_cache();
        assert_eq!(registry.cached_len(), 0);
    }

    #[test]
    fn test_constructor_of_wrong_kind_is_rejected() {
        let mut registry = ValidatorRegistry::with_defaults();
        registry.register(ValidatorKind::Url, || FieldValidator::for_kind(ValidatorKind::Email));

        assert_eq!(
            registry.get("validateUrl").unwrap_err(),
            FormError::KindMismatch {
                expected: ValidatorKind::Url,
                actual: ValidatorKind::Email,
            }
        );
        assert_eq!(registry.cached_len(), 0);

        registry.register(ValidatorKind::Url, || FieldValidator::for_kind(ValidatorKind::Url));
        assert_eq!(
            registry.get("validateUrl").unwrap().borrow().kind(),
            ValidatorKind::Url
        );
    }
}
