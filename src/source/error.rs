//! Positioned errors and their aggregate.
//!
//! A [`SourceError`] ties a message to a [`Location`]. [`Errors`] collects any
//! number of errors, positioned or not, in the order they were found, and
//! renders them as a single `"; "`-joined message.

use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

use super::Location;

/// Boxed error stored by [`Errors`].
pub type BoxedError = Box<dyn StdError + Send + Sync + 'static>;

/// An error at a given location in a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{location}: {message}")]
pub struct SourceError {
    /// Where the error was found.
    pub location: Location,
    /// What went wrong.
    pub message: String,
}

impl SourceError {
    /// Creates an error at `location`.
    pub fn new(location: Location, message: impl Into<String>) -> Self {
        SourceError { location, message: message.into() }
    }

    /// Returns the same error moved from a substring starting at `base` into
    /// the coordinates of the enclosing document.
    pub fn rebased(self, base: Location) -> Self {
        SourceError { location: base.nested(self.location), message: self.message }
    }
}

/// Ordered collection of errors.
///
/// `None` values are ignored when extending, so optional failures can be fed
/// in directly:
///
/// ```rust
/// # use celplate::source::{Errors, Location, SourceError};
/// let mut errors = Errors::new();
/// errors.extend(None::<SourceError>);
/// assert!(errors.is_empty());
///
/// errors.extend(Some(SourceError::new(Location::start(), "foo")));
/// assert_eq!(errors.to_string(), "line 1, column 1: foo");
/// ```
#[derive(Debug, Default)]
pub struct Errors(Vec<BoxedError>);

impl Errors {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Errors(Vec::new())
    }

    /// Appends an error.
    pub fn push(&mut self, error: impl Into<BoxedError>) {
        self.0.push(error.into());
    }

    /// Moves every error of `other` to the end of this collection.
    pub fn append(&mut self, mut other: Errors) {
        self.0.append(&mut other.0);
    }

    /// Returns `true` if no error was recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of recorded errors.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over all errors in the order they were recorded.
    pub fn iter(&self) -> impl Iterator<Item = &(dyn StdError + Send + Sync + 'static)> {
        self.0.iter().map(|error| &**error)
    }

    /// Iterates over the errors that carry a [`Location`], preserving order.
    pub fn located(&self) -> impl Iterator<Item = &SourceError> {
        self.0.iter().filter_map(|error| error.downcast_ref::<SourceError>())
    }

    /// Consumes the collection, keeping only the errors that carry a
    /// [`Location`].
    pub fn into_located(self) -> Vec<SourceError> {
        self.0
            .into_iter()
            .filter_map(|error| error.downcast::<SourceError>().ok())
            .map(|error| *error)
            .collect()
    }

    /// `Ok(())` when empty, otherwise the collection itself as the error.
    pub fn into_result(self) -> Result<(), Errors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl StdError for Errors {}

impl From<SourceError> for Errors {
    fn from(error: SourceError) -> Self {
        Errors(vec![Box::new(error)])
    }
}

impl<E: Into<BoxedError>> Extend<E> for Errors {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

impl<E: Into<BoxedError>> FromIterator<E> for Errors {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Errors(iter.into_iter().map(Into::into).collect())
    }
}

impl IntoIterator for Errors {
    type Item = BoxedError;
    type IntoIter = std::vec::IntoIter<BoxedError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
