//! Input Validation
//!
//! Runs before any numeric work so malformed input never yields partial output.

use crate::error::StandardizeError;
use crate::quantities::HighLevelQuantities;

/// Check that the mapping is non-empty and every quantity has samples and
/// the same shape. Returns the common shape.
pub fn validate(quantities: &HighLevelQuantities) -> Result<&[usize], StandardizeError> {
    let mut iter = quantities.iter();
    let (first_name, first) = iter.next().ok_or(StandardizeError::EmptyInput)?;
    check_non_empty(first_name, first.len())?;

    let expected = first.shape();
    for (name, values) in iter {
        check_non_empty(name, values.len())?;
        if values.shape() != expected {
            return Err(StandardizeError::ShapeMismatch {
                name: name.to_string(),
                expected: expected.to_vec(),
                found: values.shape().to_vec(),
            });
        }
    }

    Ok(expected)
}

fn check_non_empty(name: &str, len: usize) -> Result<(), StandardizeError> {
    if len == 0 {
        Err(StandardizeError::EmptyQuantity {
            name: name.to_string(),
        })
    } else {
        Ok(())
    }
}
