//! Observer hooks for lenient-parse fallbacks.
//!
//! The lenient operations substitute `0` for values without an integer prefix. When a
//! [`TransformObserver`] is configured on [`crate::options::TransformOptions`], each
//! substitution is reported as a [`FallbackEvent`].

use std::fmt;
use std::sync::Arc;

/// Operation that produced a fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// [`crate::processing::strings_to_integers`] and its variants.
    StringsToIntegers,
    /// [`crate::processing::remove_dollars`] and its variants.
    RemoveDollars,
}

impl Operation {
    /// Stable snake_case name, used in log output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::StringsToIntegers => "strings_to_integers",
            Self::RemoveDollars => "remove_dollars",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value that had no integer prefix and was replaced by `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackEvent<'a> {
    /// Operation that parsed the value.
    pub operation: Operation,
    /// Position of the value in the input sequence.
    pub index: usize,
    /// The value as given by the caller (before any prefix stripping).
    pub raw: &'a str,
}

/// Observer interface for transformation events.
///
/// Implementors can record metrics or logs.
pub trait TransformObserver: Send + Sync {
    /// Called once per value that fell back to `0`.
    fn on_fallback(&self, _event: &FallbackEvent<'_>) {}
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn TransformObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn TransformObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl TransformObserver for CompositeObserver {
    fn on_fallback(&self, event: &FallbackEvent<'_>) {
        for o in &self.observers {
            o.on_fallback(event);
        }
    }
}

/// Logs fallback events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl TransformObserver for StdErrObserver {
    fn on_fallback(&self, event: &FallbackEvent<'_>) {
        eprintln!(
            "[transform][fallback] op={} index={} raw={:?}",
            event.operation, event.index, event.raw
        );
    }
}

/// Emits fallback events as structured `tracing` events at WARN level.
///
/// Output depends on the subscriber installed by the application.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl TransformObserver for TracingObserver {
    fn on_fallback(&self, event: &FallbackEvent<'_>) {
        tracing::warn!(
            operation = event.operation.as_str(),
            index = event.index,
            raw = event.raw,
            "value has no integer prefix; substituted 0"
        );
    }
}
