//! Sequence transformations.
//!
//! Every operation borrows its input as a slice and returns a freshly allocated result; inputs
//! are never mutated.
//!
//! Currently implemented:
//!
//! - [`reshape`]: [`book_end_list()`], [`inject_positive()`]
//! - [`map`]: [`triple_numbers()`], [`strings_to_integers()`], [`remove_dollars()`]
//! - [`filter`]: [`shout_if_exclaiming()`], [`count_short_words()`]
//! - [`reduce`]: [`sum()`], [`all_rgb()`], [`make_math()`]
//!
//! ## Example: parse → reshape → format
//!
//! ```rust
//! use rust_array_transforms::processing::{inject_positive, make_math, remove_dollars};
//!
//! let amounts = remove_dollars(&["$1", "9", "$-5", "7"]);
//! assert_eq!(amounts, vec![1, 9, -5, 7]);
//!
//! let injected = inject_positive(&amounts);
//! assert_eq!(injected, vec![1, 9, -5, 10, 7]);
//!
//! assert_eq!(make_math(&injected), "22=1+9+-5+10+7");
//! ```

pub mod filter;
pub mod map;
pub mod reduce;
pub mod reshape;

pub use filter::{count_short_words, count_short_words_with, shout_if_exclaiming};
pub use map::{
    remove_dollars, remove_dollars_with, strings_to_integers, strings_to_integers_with,
    triple_numbers, try_remove_dollars, try_remove_dollars_with, try_strings_to_integers,
};
pub use reduce::{all_in_palette, all_rgb, all_rgb_with, make_math, sum};
pub use reshape::{book_end_list, inject_positive};
