//! Element-wise mapping: numeric scaling and string-to-integer parsing.

use crate::error::{TransformError, TransformResult};
use crate::observability::{FallbackEvent, Operation};
use crate::options::TransformOptions;
use crate::parse::{parse_int_strict, parse_leading_int};
use crate::types::Number;

/// Returns a new vector with every element multiplied by 3.
pub fn triple_numbers<T: Number>(numbers: &[T]) -> Vec<T> {
    numbers.iter().map(|n| n.times(3)).collect()
}

/// Parses each value as a leading base-10 integer, substituting `0` when there is none.
///
/// See [`crate::parse::parse_leading_int`] for the accepted syntax.
///
/// ```rust
/// use rust_array_transforms::processing::strings_to_integers;
///
/// assert_eq!(strings_to_integers(&["1", "2", "abc", " 42px"]), vec![1, 2, 0, 42]);
/// ```
pub fn strings_to_integers<S: AsRef<str>>(values: &[S]) -> Vec<i64> {
    strings_to_integers_with(values, &TransformOptions::default())
}

/// Like [`strings_to_integers`], reporting each fallback to `options.observer`.
pub fn strings_to_integers_with<S: AsRef<str>>(
    values: &[S],
    options: &TransformOptions,
) -> Vec<i64> {
    values
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            let raw = raw.as_ref();
            lenient_int(Operation::StringsToIntegers, index, raw, raw, options)
        })
        .collect()
}

/// Strict variant of [`strings_to_integers`].
///
/// Every value (ignoring surrounding whitespace) must be a complete integer. Returns
/// [`TransformError::Parse`] for the first value that is not.
pub fn try_strings_to_integers<S: AsRef<str>>(values: &[S]) -> TransformResult<Vec<i64>> {
    values
        .iter()
        .enumerate()
        .map(|(index, raw)| strict_int(index, raw.as_ref(), raw.as_ref()))
        .collect()
}

/// Strips one leading `$` from each amount, then parses it like [`strings_to_integers`].
///
/// Only the first character is stripped, so `"$$5"` parses as `0`.
pub fn remove_dollars<S: AsRef<str>>(amounts: &[S]) -> Vec<i64> {
    remove_dollars_with(amounts, &TransformOptions::default())
}

/// Like [`remove_dollars`], stripping `options.currency_prefix` and reporting fallbacks.
pub fn remove_dollars_with<S: AsRef<str>>(amounts: &[S], options: &TransformOptions) -> Vec<i64> {
    amounts
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            let raw = raw.as_ref();
            let value = strip_currency(raw, options.currency_prefix);
            lenient_int(Operation::RemoveDollars, index, raw, value, options)
        })
        .collect()
}

/// Strict variant of [`remove_dollars`].
pub fn try_remove_dollars<S: AsRef<str>>(amounts: &[S]) -> TransformResult<Vec<i64>> {
    try_remove_dollars_with(amounts, &TransformOptions::default())
}

/// Strict variant of [`remove_dollars_with`], stripping `options.currency_prefix`.
pub fn try_remove_dollars_with<S: AsRef<str>>(
    amounts: &[S],
    options: &TransformOptions,
) -> TransformResult<Vec<i64>> {
    amounts
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            let raw = raw.as_ref();
            strict_int(index, raw, strip_currency(raw, options.currency_prefix))
        })
        .collect()
}

fn strip_currency(raw: &str, prefix: char) -> &str {
    raw.strip_prefix(prefix).unwrap_or(raw)
}

fn lenient_int(
    operation: Operation,
    index: usize,
    raw: &str,
    value: &str,
    options: &TransformOptions,
) -> i64 {
    let parsed = parse_leading_int(value);
    if !parsed.valid {
        options.report_fallback(&FallbackEvent {
            operation,
            index,
            raw,
        });
    }
    parsed.or_zero()
}

fn strict_int(index: usize, raw: &str, value: &str) -> TransformResult<i64> {
    parse_int_strict(value).map_err(|message| TransformError::Parse {
        index,
        raw: raw.to_owned(),
        message,
    })
}
