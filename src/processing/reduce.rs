//! Reductions: totals, membership checks and expression formatting.

use crate::options::{TransformOptions, RGB_PALETTE};
use crate::types::Number;

/// Sum of all values, starting from zero.
///
/// Integer sums saturate at the type bounds.
pub fn sum<T: Number>(values: &[T]) -> T {
    values.iter().fold(T::ZERO, |acc, &v| acc.plus(v))
}

/// Returns `true` if every color is exactly `"red"`, `"blue"` or `"green"`.
///
/// Matching is case-sensitive. An empty input is vacuously `true`.
pub fn all_rgb<S: AsRef<str>>(colors: &[S]) -> bool {
    all_in_palette(colors, &RGB_PALETTE[..])
}

/// Like [`all_rgb`], using `options.palette`.
pub fn all_rgb_with<S: AsRef<str>>(colors: &[S], options: &TransformOptions) -> bool {
    all_in_palette(colors, &options.palette)
}

/// Returns `true` if every color exactly matches some entry of `palette`.
pub fn all_in_palette<S, P>(colors: &[S], palette: &[P]) -> bool
where
    S: AsRef<str>,
    P: AsRef<str>,
{
    colors
        .iter()
        .all(|c| palette.iter().any(|p| p.as_ref() == c.as_ref()))
}

/// Formats `addends` as `"<sum>=<a>+<b>+..."`.
///
/// Empty input renders as `"0=0"`. Negative addends keep their sign inside the expression, so
/// `[1, -2]` renders as `"-1=1+-2"`. Numbers are printed with [`Number::render`], so float
/// `-0.0` prints as `"0"` and infinities as `"Infinity"`.
///
/// ```rust
/// use rust_array_transforms::processing::make_math;
///
/// assert_eq!(make_math(&[1, 2, 3]), "6=1+2+3");
/// assert_eq!(make_math::<i64>(&[]), "0=0");
/// ```
pub fn make_math<T: Number>(addends: &[T]) -> String {
    let total = sum(addends);
    let expression = if addends.is_empty() {
        "0".to_owned()
    } else {
        addends
            .iter()
            .map(|a| a.render())
            .collect::<Vec<_>>()
            .join("+")
    };
    format!("{}={expression}", total.render())
}
