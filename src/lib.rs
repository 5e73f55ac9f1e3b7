//! `rust-array-transforms` is a small library of pure transformations over in-memory sequences:
//! picking and inserting elements, scaling numbers, lenient string-to-integer parsing,
//! conditional filtering/mapping, boolean aggregation and expression formatting.
//!
//! Every operation borrows its input as a slice, returns a newly allocated result and never
//! mutates the input. The core operations are total: they never panic and never return errors.
//!
//! ## Operations
//!
//! | Operation | Input | Output |
//! |---|---|---|
//! | [`book_end_list`] | `&[T]` | first and last element |
//! | [`triple_numbers`] | `&[T: Number]` | each element × 3 |
//! | [`strings_to_integers`] | `&[S: AsRef<str>]` | leading integers, `0` on failure |
//! | [`remove_dollars`] | `&[S: AsRef<str>]` | like above, after stripping one `$` |
//! | [`shout_if_exclaiming`] | `&[S: AsRef<str>]` | `!` messages uppercased, `?` messages dropped |
//! | [`count_short_words`] | `&[S: AsRef<str>]` | number of words shorter than 4 chars |
//! | [`all_rgb`] | `&[S: AsRef<str>]` | every color is red/blue/green |
//! | [`make_math`] | `&[T: Number]` | `"<sum>=<a>+<b>+..."` |
//! | [`inject_positive`] | `&[T: Number]` | running sum inserted after the first negative |
//!
//! Numeric operations are generic over [`types::Number`], implemented for the common integer
//! and float types. Integer arithmetic saturates instead of overflowing.
//!
//! ## Quick example
//!
//! ```rust
//! use rust_array_transforms::{
//!     all_rgb, book_end_list, count_short_words, inject_positive, make_math, remove_dollars,
//!     shout_if_exclaiming, strings_to_integers, triple_numbers,
//! };
//!
//! assert_eq!(book_end_list(&[1, 2, 3, 4]), vec![1, 4]);
//! assert_eq!(triple_numbers(&[1, 2, 3]), vec![3, 6, 9]);
//! assert_eq!(strings_to_integers(&["1", "2", "abc"]), vec![1, 2, 0]);
//! assert_eq!(remove_dollars(&["$1", "2", "$abc"]), vec![1, 2, 0]);
//! assert_eq!(shout_if_exclaiming(&["hi!", "bye?", "ok"]), vec!["HI!", "ok"]);
//! assert_eq!(count_short_words(&["a", "dog", "house"]), 2);
//! assert!(all_rgb(&["red", "blue"]));
//! assert_eq!(make_math(&[1, 2, 3]), "6=1+2+3");
//! assert_eq!(inject_positive(&[1, 9, -5, 7]), vec![1, 9, -5, 10, 7]);
//! ```
//!
//! ## Configuration and fallback reporting
//!
//! The `*_with` variants take a [`TransformOptions`] (currency prefix, short-word limit,
//! palette) and report every fallback-to-zero parse to an optional [`TransformObserver`]:
//!
//! ```rust
//! use std::sync::Arc;
//! use rust_array_transforms::{remove_dollars_with, TracingObserver, TransformOptions};
//!
//! let opts = TransformOptions::default().with_observer(Arc::new(TracingObserver));
//! assert_eq!(remove_dollars_with(&["$3", "$abc"], &opts), vec![3, 0]);
//! ```
//!
//! Strict variants ([`try_strings_to_integers`], [`try_remove_dollars`]) return a
//! [`TransformError`] instead of substituting `0`.
//!
//! ## Modules
//!
//! - [`processing`]: the transformations (reshape/map/filter/reduce)
//! - [`parse`]: lenient and strict integer parsing
//! - [`types`]: [`types::Number`] and [`types::ParsedInt`]
//! - [`options`]: [`TransformOptions`]
//! - [`observability`]: fallback observers
//! - [`error`]: error types used by strict variants and option loading

pub mod error;
pub mod observability;
pub mod options;
pub mod parse;
pub mod processing;
pub mod types;

pub use error::{TransformError, TransformResult};
pub use observability::{
    CompositeObserver, FallbackEvent, Operation, StdErrObserver, TracingObserver,
    TransformObserver,
};
pub use options::TransformOptions;
pub use processing::{
    all_in_palette, all_rgb, all_rgb_with, book_end_list, count_short_words,
    count_short_words_with, inject_positive, make_math, remove_dollars, remove_dollars_with,
    shout_if_exclaiming, strings_to_integers, strings_to_integers_with, sum, triple_numbers,
    try_remove_dollars, try_remove_dollars_with, try_strings_to_integers,
};
pub use types::{Number, ParsedInt};
