//! Expands `${{ ... }}` expression blocks embedded in text.
//!
//! A [`Scanner`](scanner::Scanner) copies a document to its output and
//! replaces every `${{ expression }}` block with the text an
//! [`Evaluator`](evaluator::Evaluator) produces for it. It is meant for
//! templating structured documents such as YAML configuration:
//!
//! ```rust
//! use celplate::evaluator::LookupEvaluator;
//! use celplate::scanner::Scanner;
//! use celplate::value::Bindings;
//!
//! let bindings: Bindings = serde_json::from_str(
//!     r#"{ "inputs": { "environment": "production", "zones": ["a", "b"] } }"#,
//! ).unwrap();
//! let scanner = Scanner::new(LookupEvaluator::new(bindings).unwrap());
//!
//! let output = scanner
//!     .transform("env: ${{ inputs.environment }}\nzones: ${{ inputs.zones }}\n")
//!     .unwrap();
//! assert_eq!(output, "env: production\nzones: [a b]\n");
//! ```
//!
//! Malformed blocks and failing expressions do not stop the scan. All errors
//! are collected, each with its line and column in the document:
//!
//! ```rust
//! # use celplate::evaluator::from_fn;
//! # use celplate::scanner::Scanner;
//! let scanner = Scanner::new(from_fn(|_: &str| Ok(String::new())));
//! let err = scanner.transform("Hello, ${{ world }!").unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "line 1, column 19: unexpected character '!', expected '}'; \
//!      line 1, column 20: unexpected end of input"
//! );
//! ```

#![warn(missing_docs)]

mod errors;
pub mod evaluator;
pub mod scanner;
mod serde_impl;
pub mod source;
pub mod value;

pub use crate::errors::*;

#[cfg(doctest)]
doc_comment::doctest!("../README.md");
