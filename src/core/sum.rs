//! Numeric token coercion and summation

use crate::error::{MytoolError, Result};

/// Coerce each token to a float and accumulate the total.
///
/// The first token that fails to parse aborts with an error naming it.
pub fn sum_numbers(values: &[String]) -> Result<f64> {
    let mut total = 0.0;
    for value in values {
        let parsed: f64 = value
            .trim()
            .parse()
            .map_err(|e| MytoolError::invalid_number(value, e))?;
        total += parsed;
    }
    Ok(total)
}
