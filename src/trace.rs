//! Span and event macros behind the `tracing` feature.
//!
//! Without the feature, spans become [`DisabledSpan`] and event values are
//! evaluated and dropped.

macro_rules! trace_span {
    ($name:expr $(, $($field:tt)*)?) => {{
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!($name $(, $($field)*)?);
        #[cfg(not(feature = "tracing"))]
        let span = $crate::trace::DisabledSpan;
        span
    }};
}

macro_rules! trace_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        #[cfg(feature = "tracing")]
        tracing::info!(name: $name, $($key = $value),+);
        #[cfg(not(feature = "tracing"))]
        let _ = ($($value,)+);
    };
}

pub(crate) use trace_event;
pub(crate) use trace_span;

/// Span guard stand-in; `entered()` keeps call sites feature-agnostic.
#[cfg(not(feature = "tracing"))]
pub struct DisabledSpan;

#[cfg(not(feature = "tracing"))]
impl DisabledSpan {
    #[inline]
    pub fn entered(self) -> Self {
        self
    }
}
