//! Compile-fail tests for the derive's error paths.
//!
//! These tests verify that `#[derive(RunTimeTyped)]` rejects malformed
//! types with a message pointing at the offending tokens.

#[test]
fn macro_compile_fail_tests() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/compile_fail/*.rs");
}
