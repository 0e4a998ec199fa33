// File: src/ui.rs
// Purpose: The two widget capabilities validation needs

use std::cell::RefCell;
use std::collections::BTreeSet;

/// A UI element whose value can be read and whose style classes can be toggled
///
/// Handles are shared with the host toolkit, so both style methods take
/// `&self`; implementations use interior mutability the way widget handles do.
pub trait UiField {
    /// Current text value of the field
    fn value(&self) -> String;

    /// Adds a style class; adding an existing class is a no-op
    fn add_style(&self, style: &str);

    /// Removes a style class; removing an absent class is a no-op
    fn remove_style(&self, style: &str);
}

/// In-memory text field, for headless hosts and tests
#[derive(Debug, Default)]
pub struct TextField {
    value: RefCell<String>,
    styles: RefCell<BTreeSet<String>>,
}

impl TextField {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: RefCell::new(value.into()),
            styles: RefCell::new(BTreeSet::new()),
        }
    }

    /// Simulates the user typing a new value
    pub fn set_value(&self, value: impl Into<String>) {
        *self.value.borrow_mut() = value.into();
    }

    pub fn has_style(&self, style: &str) -> bool {
        self.styles.borrow().contains(style)
    }

    /// Style classes currently applied, sorted
    pub fn styles(&self) -> Vec<String> {
        self.styles.borrow().iter().cloned().collect()
    }
}

impl UiField for TextField {
    fn value(&self) -> String {
        self.value.borrow().clone()
    }

    fn add_style(&self, style: &str) {
        self.styles.borrow_mut().insert(style.to_string());
    }

    fn remove_style(&self, style: &str) {
        self.styles.borrow_mut().remove(style);
    }
}
