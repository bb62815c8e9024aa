#![no_main]

use celplate::EvalError;
use celplate::evaluator::from_fn;
use celplate::scanner::Scanner;
use celplate::source::{Errors, Location, SourceError};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Fails every other expression with a compile error so rebasing is
    // exercised alongside substitution.
    let scanner = Scanner::new(from_fn(|expr: &str| {
        if expr.len() % 2 == 0 {
            Ok(expr.chars().rev().collect())
        } else {
            Err(EvalError::Compile(Errors::from(SourceError::new(
                Location::new(expr.len(), 1, 2),
                "odd",
            ))))
        }
    }));
    let _ = scanner.transform_bytes(data);
});
