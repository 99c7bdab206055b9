//! Domain-specific assertion macros for emprec harnesses.
//!
//! These add context-rich failure messages that make it clear *which* field
//! the loader was expected to blame and what it blamed instead.

/// Assert that a load failed with `MissingField` naming `$field`.
///
/// ```rust
/// assert_missing_field!(result, "salary");
/// ```
#[macro_export]
macro_rules! assert_missing_field {
    ($result:expr, $field:expr) => {{
        let expected: &str = $field;
        match &$result {
            Err(err) => match err.normalize_error() {
                Some(emprec::emprec_core::NormalizeError::MissingField { field }) => {
                    assert_eq!(field, expected, "wrong missing field; error: {err}")
                }
                _ => panic!(
                    "assert_missing_field! failed: expected MissingField({:?}), got: {err}",
                    expected
                ),
            },
            Ok(records) => panic!(
                "assert_missing_field! failed: load succeeded with {:?}",
                records
            ),
        }
    }};
}

/// Assert that a load failed with `MalformedField` naming `$field` and `$value`.
#[macro_export]
macro_rules! assert_malformed_field {
    ($result:expr, $field:expr, $value:expr) => {{
        let expected_field: &str = $field;
        let expected_value: &str = $value;
        match &$result {
            Err(err) => match err.normalize_error() {
                Some(emprec::emprec_core::NormalizeError::MalformedField { field, value }) => {
                    assert_eq!(field, expected_field, "wrong malformed field; error: {err}");
                    assert_eq!(value, expected_value, "wrong malformed value; error: {err}");
                }
                _ => panic!(
                    "assert_malformed_field! failed: expected MalformedField({:?}), got: {err}",
                    expected_field
                ),
            },
            Ok(records) => panic!(
                "assert_malformed_field! failed: load succeeded with {:?}",
                records
            ),
        }
    }};
}

/// Assert that a load failed as a whole with `SourceRead`.
#[macro_export]
macro_rules! assert_source_read {
    ($result:expr) => {{
        match &$result {
            Err(emprec::LoadError::SourceRead { .. }) => {}
            Err(other) => panic!("assert_source_read! failed: got per-record error: {other}"),
            Ok(records) => panic!("assert_source_read! failed: load succeeded with {:?}", records),
        }
    }};
}
