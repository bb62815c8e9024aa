use thiserror::Error;

use crate::source::Errors;

/// Errors an [`Evaluator`](crate::evaluator::Evaluator) can report for one expression.
#[derive(Debug, Error)]
pub enum EvalError {
    /// The expression could not be compiled.
    ///
    /// Every positioned error is located relative to the start of the
    /// expression: line 1, column 1 is its first character.
    #[error("{0}")]
    Compile(Errors),
    /// The result has no textual form.
    #[error("cannot convert value of type {type_name} to a string")]
    Unsupported {
        /// Type name of the offending value.
        type_name: &'static str,
    },
    /// The expression compiled but failed while running.
    #[error("failed to evaluate expression: {0}")]
    Evaluation(String),
    /// A built-in operation was applied to values it does not accept.
    #[error("{name}: {message}")]
    Operation {
        /// Name of the operation.
        name: String,
        /// What was wrong with the receiver or arguments.
        message: String,
    },
    /// No operation with this name is registered.
    #[error("unknown operation '{0}'")]
    UnknownOperation(String),
    /// A variable name given at construction is not an identifier.
    #[error("invalid variable name {0:?}")]
    InvalidBinding(String),
}

/// Errors that can occur when expanding a document.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// An I/O error occurred while reading the document.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The document contained malformed blocks or failing expressions.
    #[error("{0}")]
    Template(#[from] Errors),
}

/// A specialized `Result` type for expanding documents.
pub type TemplateResult<T> = Result<T, TemplateError>;
