//! States of the delimiter recognizer.

pub(crate) const DOLLAR: char = '$';
pub(crate) const OPEN: char = '{';
pub(crate) const CLOSE: char = '}';

/// Where the scanner is relative to the `${{` and `}}` delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    /// Copying text to the output.
    #[default]
    Default,
    /// Saw `$`.
    SawDollar,
    /// Saw `${`.
    SawOpen,
    /// Inside `${{`, buffering the expression.
    InExpression,
    /// Saw the first `}` of the closing delimiter.
    SawClose,
}
