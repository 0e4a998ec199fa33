// File: src/chain.rs
// Purpose: AND-composition of validators that always runs every member

use crate::validator::Validator;
use std::fmt;

/// Ordered list of validators over the same value type, evaluated as a logical AND
///
/// Unlike a short-circuiting AND, every member runs on every call so each one
/// gets to record its own failure message. An empty chain accepts anything.
///
/// ```
/// use rusty_forms_validator::{Check, ValidatorChain, Validator};
///
/// let mut chain = ValidatorChain::<str>::new();
/// chain.add(Check::new(|v: &str| if v.len() >= 3 { Ok(()) } else { Err("too short".to_string()) }));
/// chain.add(Check::new(|v: &str| if v.is_ascii() { Ok(()) } else { Err("ascii only".to_string()) }));
///
/// assert!(chain.is_valid("abc"));
/// assert!(!chain.is_valid("é"));
/// assert_eq!(chain.message(), Some("too short"));
/// ```
pub struct ValidatorChain<T: ?Sized> {
    validators: Vec<Box<dyn Validator<T>>>,
    first_failure: Option<usize>,
}

impl<T: ?Sized> ValidatorChain<T> {
    pub fn new() -> Self {
        Self {
            validators: Vec::new(),
            first_failure: None,
        }
    }

    /// Appends a validator; evaluation follows insertion order
    pub fn add(&mut self, validator: impl Validator<T> + 'static) -> &mut Self {
        self.validators.push(Box::new(validator));
        self
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// `true` only if every member accepts `value`
    pub fn is_valid(&mut self, value: &T) -> bool {
        self.first_failure = None;
        for (index, validator) in self.validators.iter_mut().enumerate() {
            if !validator.is_valid(value) && self.first_failure.is_none() {
                self.first_failure = Some(index);
            }
        }
        self.first_failure.is_none()
    }

    /// Message of the first member that failed during the last evaluation
    pub fn message(&self) -> Option<&str> {
        self.first_failure
            .and_then(|index| self.validators.get(index))
            .and_then(|validator| validator.message())
    }

    /// Messages of every member that failed during the last evaluation
    pub fn messages(&self) -> Vec<&str> {
        self.validators.iter().filter_map(|v| v.message()).collect()
    }
}

impl<T: ?Sized> Default for ValidatorChain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Validator<T> for ValidatorChain<T> {
    fn is_valid(&mut self, value: &T) -> bool {
        ValidatorChain::is_valid(self, value)
    }

    fn message(&self) -> Option<&str> {
        ValidatorChain::message(self)
    }
}

impl<T: ?Sized> fmt::Debug for ValidatorChain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorChain")
            .field("validators", &format!("[{} validators]", self.validators.len()))
            .field("first_failure", &self.first_failure)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::Check;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Accepts or rejects everything and counts its calls
    struct Fixed {
        verdict: bool,
        calls: Rc<Cell<usize>>,
        name: &'static str,
    }

    impl Validator<str> for Fixed {
        fn is_valid(&mut self, _value: &str) -> bool {
            self.calls.set(self.calls.get() + 1);
            self.verdict
        }

        fn message(&self) -> Option<&str> {
            (!self.verdict).then_some(self.name)
        }
    }

    fn fixed(verdict: bool, name: &'static str) -> (Fixed, Rc<Cell<usize>>) {
        let calls = Rc::new(Cell::new(0));
        (
            Fixed {
                verdict,
                calls: Rc::clone(&calls),
                name,
            },
            calls,
        )
    }

    #[test]
    fn test_empty_chain_is_valid() {
        let mut chain = ValidatorChain::<str>::new();
        assert!(chain.is_empty());
        assert!(chain.is_valid(""));
        assert!(chain.is_valid("anything"));
        assert_eq!(chain.message(), None);
    }

    #[test]
    fn test_all_members_run_after_failure() {
        let (first, first_calls) = fixed(false, "first");
        let (second, second_calls) = fixed(true, "second");
        let (third, third_calls) = fixed(false, "third");

        let mut chain = ValidatorChain::<str>::new();
        chain.add(first).add(second).add(third);

        assert!(!chain.is_valid("value"));
        assert_eq!(first_calls.get(), 1);
        assert_eq!(second_calls.get(), 1);
        assert_eq!(third_calls.get(), 1);
        assert_eq!(chain.message(), Some("first"));
        assert_eq!(chain.messages(), vec!["first", "third"]);
    }

    #[test]
    fn test_valid_iff_every_member_valid() {
        for verdicts in [[true, true], [true, false], [false, true], [false, false]] {
            let mut chain = ValidatorChain::<str>::new();
            for verdict in verdicts {
                chain.add(fixed(verdict, "member").0);
            }
            assert_eq!(chain.is_valid("v"), verdicts.iter().all(|v| *v));
        }
    }

    #[test]
    fn test_chains_nest() {
        let mut inner = ValidatorChain::<str>::new();
        inner.add(Check::new(|v: &str| {
            if v.starts_with('a') {
                Ok(())
            } else {
                Err("must start with a".to_string())
            }
        }));

        let mut outer = ValidatorChain::<str>::new();
        outer.add(inner);
        assert_eq!(outer.len(), 1);
        assert!(outer.is_valid("apple"));
        assert!(!outer.is_valid("pear"));
        assert_eq!(outer.message(), Some("must start with a"));
    }
}
