//! Common test utilities and helpers

#![allow(dead_code)] // Test utilities may not all be used in every test file

pub mod builders;

/// Count the `*Begin..` and `*End..` lines in serialized output
pub fn count_begin_end(output: &str) -> (usize, usize) {
    let begins = output
        .lines()
        .filter(|l| l.trim_start().starts_with("*Begin"))
        .count();
    let ends = output
        .lines()
        .filter(|l| l.trim_start().starts_with("*End"))
        .count();
    (begins, ends)
}
