//! Form submission record.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// A single named value collected from a form control.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct FormEntry {
    name: String,
    value: String,
}

impl FormEntry {
    /// Creates a new entry.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Returns the control name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the submitted value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Name to value mapping collected when a form is submitted.
///
/// Entries keep the order of the controls in the form. Lookup by name returns
/// the first matching entry. Values may be empty strings.
#[derive(Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Submission {
    entries: Vec<FormEntry>,
}

impl Submission {
    /// Creates an empty submission.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends an entry.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push(FormEntry::new(name, value));
    }

    /// Returns the value of the first entry with the given name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.name() == name)
            .map(FormEntry::value)
    }

    /// Returns whether an entry with the given name exists.
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry.name() == name)
    }

    /// Returns the entry names in form order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(FormEntry::name)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the submission has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for Submission {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, value)| FormEntry::new(name, value))
                .collect(),
        }
    }
}

impl fmt::Debug for Submission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Submission")
            .field("fields", &self.names().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
