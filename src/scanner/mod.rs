//! Expands `${{ ... }}` blocks in a document.
//!
//! The scanner walks the input one character at a time through a small state
//! machine (see [`State`]). Text outside of blocks is copied verbatim, including
//! partial delimiters such as `$a` or `${a`. The body of every complete block
//! is handed to an [`Evaluator`] and replaced by its result.
//!
//! Errors do not stop the scan: each one is recorded with its location in the
//! document and the pass continues, so a single call reports every defect.

use std::io::Read;

use crate::errors::{EvalError, TemplateResult};
use crate::evaluator::Evaluator;
use crate::source::{Errors, Location, SourceError};

mod state;

pub use self::state::State;
use self::state::{CLOSE, DOLLAR, OPEN};

/// Expands `${{ ... }}` blocks using an [`Evaluator`].
///
/// # Examples
///
/// ```rust
/// # use celplate::evaluator::from_fn;
/// # use celplate::scanner::Scanner;
/// let scanner = Scanner::new(from_fn(|expr: &str| Ok(expr.trim().to_uppercase())));
///
/// let output = scanner.transform("region: ${{ eu }}").unwrap();
/// assert_eq!(output, "region: EU");
///
/// let err = scanner.transform("region: ${{ eu }").unwrap_err();
/// assert_eq!(err.to_string(), "line 1, column 17: unexpected end of input");
/// ```
///
/// Each call keeps its own cursor and buffers, so one scanner can transform
/// any number of documents.
#[derive(Debug, Clone, Default)]
pub struct Scanner<E> {
    evaluator: E,
}

impl<E: Evaluator> Scanner<E> {
    /// Creates a scanner bound to `evaluator` for its whole lifetime.
    pub fn new(evaluator: E) -> Self {
        Scanner { evaluator }
    }

    /// The evaluator expressions are handed to.
    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Expands every block of `input`.
    ///
    /// Returns either the fully expanded document, or all errors found during
    /// the pass, in the order they were found.
    #[tracing::instrument(level = "debug", skip_all, fields(len = input.len()))]
    pub fn transform(&self, input: &str) -> Result<String, Errors> {
        let mut pass = Pass::new(&self.evaluator, input.len());
        for ch in input.chars() {
            pass.consume(ch);
        }
        pass.finish()
    }

    /// Same as [`Scanner::transform`] for raw bytes.
    ///
    /// Invalid UTF-8 sequences are replaced by `U+FFFD`.
    pub fn transform_bytes(&self, input: &[u8]) -> Result<Vec<u8>, Errors> {
        self.transform(&String::from_utf8_lossy(input))
            .map(String::into_bytes)
    }

    /// Reads the whole of `source` and expands it.
    pub fn transform_reader<T: Read>(&self, source: &mut T) -> TemplateResult<String> {
        let mut input = Vec::new();
        source.read_to_end(&mut input)?;
        Ok(self.transform(&String::from_utf8_lossy(&input))?)
    }
}

/// State of a single [`Scanner::transform`] call.
struct Pass<'e, E: ?Sized> {
    evaluator: &'e E,
    state: State,
    /// Location of the character being consumed.
    location: Location,
    /// Location of the first character after `${{`.
    expression_start: Location,
    expression: String,
    output: String,
    errors: Errors,
}

impl<'e, E: Evaluator + ?Sized> Pass<'e, E> {
    fn new(evaluator: &'e E, capacity: usize) -> Self {
        Pass {
            evaluator,
            state: State::Default,
            location: Location::start(),
            expression_start: Location::start(),
            expression: String::new(),
            output: String::with_capacity(capacity),
            errors: Errors::new(),
        }
    }

    fn consume(&mut self, ch: char) {
        let next = match self.state {
            State::Default => self.on_default(ch),
            State::SawDollar => self.on_dollar(ch),
            State::SawOpen => self.on_open(ch),
            State::InExpression => self.on_expression(ch),
            State::SawClose => self.on_close(ch),
        };
        if next != self.state {
            tracing::trace!(from = ?self.state, to = ?next, at = %self.location, "state change");
            self.state = next;
        }
        self.location.advance(ch);
    }

    fn on_default(&mut self, ch: char) -> State {
        if ch == DOLLAR {
            return State::SawDollar;
        }
        self.output.push(ch);
        State::Default
    }

    fn on_dollar(&mut self, ch: char) -> State {
        if ch == OPEN {
            return State::SawOpen;
        }
        self.output.push(DOLLAR);
        self.output.push(ch);
        State::Default
    }

    fn on_open(&mut self, ch: char) -> State {
        if ch == OPEN {
            self.expression.clear();
            self.expression_start = self.location.advanced(ch);
            return State::InExpression;
        }
        self.output.push(DOLLAR);
        self.output.push(OPEN);
        self.output.push(ch);
        State::Default
    }

    fn on_expression(&mut self, ch: char) -> State {
        if ch == CLOSE {
            return State::SawClose;
        }
        self.expression.push(ch);
        State::InExpression
    }

    fn on_close(&mut self, ch: char) -> State {
        if ch != CLOSE {
            self.record(SourceError::new(
                self.location,
                format!("unexpected character {ch:?}, expected {CLOSE:?}"),
            ));
            // Still waiting for the second `}`.
            return State::SawClose;
        }

        self.evaluate();
        self.expression.clear();
        State::Default
    }

    fn evaluate(&mut self) {
        tracing::debug!(
            expression = %self.expression,
            at = %self.expression_start,
            "evaluating expression"
        );

        let errors = match self.evaluator.evaluate(&self.expression) {
            Ok(out) => {
                self.output.push_str(&out);
                return;
            }
            Err(EvalError::Compile(errors)) => errors,
            Err(err) => {
                self.record(SourceError::new(self.location, err.to_string()));
                return;
            }
        };

        if errors.is_empty() {
            self.record(SourceError::new(self.location, "failed to compile expression"));
        }
        for error in errors {
            // Compile errors are located relative to the expression body.
            let error = match error.downcast::<SourceError>() {
                Ok(located) => (*located).rebased(self.expression_start),
                Err(other) => SourceError::new(self.location, other.to_string()),
            };
            self.record(error);
        }
    }

    fn record(&mut self, error: SourceError) {
        tracing::debug!(%error, "recorded error");
        self.errors.push(error);
    }

    fn finish(mut self) -> Result<String, Errors> {
        if self.state != State::Default {
            self.record(SourceError::new(self.location, "unexpected end of input"));
        }
        self.errors.into_result()?;
        Ok(self.output)
    }
}
