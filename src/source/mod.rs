//! Locations in a document and the errors attached to them.

mod error;
mod location;

pub use self::error::{BoxedError, Errors, SourceError};
pub use self::location::Location;
