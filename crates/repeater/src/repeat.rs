//! String repetition

use crate::error::{RepeaterError, Result};

/// Repeat `text` into a list of `count` owned copies.
///
/// # Examples
///
/// - `repeat("Hello!", 3)` → `["Hello!", "Hello!", "Hello!"]`
/// - `repeat("x", 0)` → `[]`
pub fn repeat(text: &str, count: usize) -> Vec<String> {
    vec![text.to_owned(); count]
}

/// Returns a list containing `string_to_repeat` repeated `num_repeats` times.
///
/// A negative count yields an empty list.
///
/// # Errors
///
/// Returns `CountOverflow` if the count does not fit in `usize`.
pub fn list_of_strs_repeated(string_to_repeat: &str, num_repeats: i64) -> Result<Vec<String>> {
    if num_repeats < 0 {
        tracing::trace!(num_repeats, "negative repeat count, returning empty list");
        return Ok(Vec::new());
    }

    let count =
        usize::try_from(num_repeats).map_err(|_| RepeaterError::CountOverflow(num_repeats))?;

    Ok(repeat(string_to_repeat, count))
}

/// Parse a textual repeat count.
///
/// # Errors
///
/// Returns `InvalidCount` if `input` is not a base-10 integer.
pub fn parse_count(input: &str) -> Result<i64> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| RepeaterError::InvalidCount(input.to_string()))
}

/// Repeat `text` by a count given as text.
///
/// # Errors
///
/// Returns errors from [`parse_count`] and [`list_of_strs_repeated`].
pub fn repeat_parsed(text: &str, count: &str) -> Result<Vec<String>> {
    let num_repeats = parse_count(count)?;
    list_of_strs_repeated(text, num_repeats)
}
