//! Structural transformations that pick or insert elements.

use crate::types::Number;

use super::reduce::sum;

/// Returns `[first, last]` of `items`.
///
/// - Empty input yields an empty vector.
/// - A single element yields that element twice.
pub fn book_end_list<T: Clone>(items: &[T]) -> Vec<T> {
    match items {
        [] => Vec::new(),
        [only] => vec![only.clone(), only.clone()],
        [first, .., last] => vec![first.clone(), last.clone()],
    }
}

/// Inserts a running sum after the first negative value.
///
/// If some element is strictly less than zero, the sum of every element *before* the leftmost
/// such element is inserted directly after it. Otherwise the sum of all elements is appended.
/// The result is always one element longer than `values`.
///
/// ```rust
/// use rust_array_transforms::processing::inject_positive;
///
/// assert_eq!(inject_positive(&[1, 9, -5, 7]), vec![1, 9, -5, 10, 7]);
/// assert_eq!(inject_positive(&[1, 9, 7]), vec![1, 9, 7, 17]);
/// ```
pub fn inject_positive<T: Number>(values: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(values.len() + 1);
    match values.iter().position(|v| v.is_below_zero()) {
        None => {
            out.extend_from_slice(values);
            out.push(sum(values));
        }
        Some(neg_idx) => {
            out.extend_from_slice(&values[..=neg_idx]);
            out.push(sum(&values[..neg_idx]));
            out.extend_from_slice(&values[neg_idx + 1..]);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{book_end_list, inject_positive};

    #[test]
    fn book_end_list_handles_all_lengths() {
        assert_eq!(book_end_list::<i64>(&[]), Vec::<i64>::new());
        assert_eq!(book_end_list(&[5]), vec![5, 5]);
        assert_eq!(book_end_list(&[1, 2]), vec![1, 2]);
        assert_eq!(book_end_list(&[1, 2, 3, 4]), vec![1, 4]);
    }

    #[test]
    fn book_end_list_works_for_non_numeric_elements() {
        let words = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(book_end_list(&words), vec!["a".to_string(), "c".to_string()]);
        // Original unchanged
        assert_eq!(words.len(), 3);
    }

    #[test]
    fn inject_positive_inserts_after_first_negative() {
        assert_eq!(inject_positive(&[1, 9, -5, 7]), vec![1, 9, -5, 10, 7]);
        assert_eq!(inject_positive(&[1, -1, -2, 3]), vec![1, -1, 1, -2, 3]);
    }

    #[test]
    fn inject_positive_appends_total_without_negatives() {
        assert_eq!(inject_positive(&[1, 9, 7]), vec![1, 9, 7, 17]);
        assert_eq!(inject_positive::<i32>(&[]), vec![0]);
        assert_eq!(inject_positive(&[0, 0]), vec![0, 0, 0]);
    }

    #[test]
    fn inject_positive_with_leading_or_trailing_negative() {
        assert_eq!(inject_positive(&[-1, 2]), vec![-1, 0, 2]);
        assert_eq!(inject_positive(&[4, 5, -3]), vec![4, 5, -3, 9]);
    }

    #[test]
    fn inject_positive_on_floats() {
        assert_eq!(
            inject_positive(&[0.5, 1.25, -2.0, 8.0]),
            vec![0.5, 1.25, -2.0, 1.75, 8.0]
        );
        // NaN is not negative; it poisons the appended total.
        let out = inject_positive(&[1.0, f64::NAN]);
        assert_eq!(out.len(), 3);
        assert!(out[2].is_nan());
    }

    #[test]
    fn inject_positive_treats_negative_zero_as_non_negative() {
        let out = inject_positive(&[2.0_f64, -0.0, 3.0]);
        assert_eq!(out.len(), 4);
        assert!(out[1].is_sign_negative());
        assert_eq!(out[3], 5.0);
    }

    #[test]
    fn inject_positive_leaves_input_untouched() {
        let values = vec![3, -1, 4];
        let out = inject_positive(&values);
        assert_eq!(out, vec![3, -1, 3, 4]);
        assert_eq!(values, vec![3, -1, 4]);
    }
}
