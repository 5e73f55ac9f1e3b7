//! Configuration for the configurable (`*_with`) transformation variants.
//!
//! The plain operations ([`crate::processing::count_short_words`], [`crate::processing::all_rgb`],
//! ...) behave exactly like their `*_with` counterparts called with
//! [`TransformOptions::default`].
//!
//! Options can be built in code or loaded from JSON; missing keys take their default:
//!
//! ```rust
//! use rust_array_transforms::TransformOptions;
//!
//! let opts = TransformOptions::from_json_str(r#"{ "currency_prefix": "€" }"#).unwrap();
//! assert_eq!(opts.currency_prefix, '€');
//! assert_eq!(opts.short_word_limit, 4);
//! ```

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{TransformError, TransformResult};
use crate::observability::{FallbackEvent, TransformObserver};

/// Colors accepted by [`crate::processing::all_rgb`].
pub const RGB_PALETTE: [&str; 3] = ["red", "blue", "green"];

/// Words shorter than this many characters count as short by default.
pub const DEFAULT_SHORT_WORD_LIMIT: usize = 4;

/// Prefix stripped by [`crate::processing::remove_dollars`] by default.
pub const DEFAULT_CURRENCY_PREFIX: char = '$';

/// Options controlling the configurable transformation variants.
///
/// Use [`Default`] for the standard behavior.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformOptions {
    /// Single character stripped from the front of amounts before parsing.
    pub currency_prefix: char,
    /// Words with fewer characters than this are counted as short.
    pub short_word_limit: usize,
    /// Exact, case-sensitive set of accepted color names.
    pub palette: Vec<String>,
    /// Optional observer notified of parse fallbacks.
    #[serde(skip)]
    pub observer: Option<Arc<dyn TransformObserver>>,
}

impl fmt::Debug for TransformOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformOptions")
            .field("currency_prefix", &self.currency_prefix)
            .field("short_word_limit", &self.short_word_limit)
            .field("palette", &self.palette)
            .field("observer_set", &self.observer.is_some())
            .finish()
    }
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            currency_prefix: DEFAULT_CURRENCY_PREFIX,
            short_word_limit: DEFAULT_SHORT_WORD_LIMIT,
            palette: RGB_PALETTE.iter().map(|c| (*c).to_owned()).collect(),
            observer: None,
        }
    }
}

impl TransformOptions {
    /// Deserialize options from JSON and validate them.
    pub fn from_json_str(json: &str) -> TransformResult<Self> {
        let opts: Self = serde_json::from_str(json)?;
        opts.validate()?;
        Ok(opts)
    }

    /// Check invariants that deserialization alone cannot enforce.
    ///
    /// Palette entries must be non-empty.
    pub fn validate(&self) -> TransformResult<()> {
        if let Some(pos) = self.palette.iter().position(|c| c.is_empty()) {
            return Err(TransformError::InvalidOptions {
                message: format!("palette entry {pos} is empty"),
            });
        }
        Ok(())
    }

    /// Attach an observer for fallback events.
    pub fn with_observer(mut self, observer: Arc<dyn TransformObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub(crate) fn report_fallback(&self, event: &FallbackEvent<'_>) {
        tracing::trace!(
            operation = event.operation.as_str(),
            index = event.index,
            "integer parse fell back to 0"
        );
        if let Some(obs) = &self.observer {
            obs.on_fallback(event);
        }
    }
}
