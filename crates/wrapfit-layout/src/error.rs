#![forbid(unsafe_code)]

use std::fmt;

use wrapfit_text::MeasureError;

/// Failure of a size computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Text measurement failed while sizing a widget.
    Measure {
        /// Name of the widget being sized.
        widget: String,
        /// Underlying measurement failure.
        source: MeasureError,
    },
    /// An accumulated extent does not fit in the unit range.
    Overflow {
        /// Which extent overflowed.
        what: &'static str,
    },
}

impl LayoutError {
    pub(crate) fn measure(widget: &str, source: MeasureError) -> Self {
        Self::Measure {
            widget: widget.to_string(),
            source,
        }
    }
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Measure { widget, source } => write!(f, "sizing {widget}: {source}"),
            Self::Overflow { what } => write!(f, "{what} overflows the unit range"),
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Measure { source, .. } => Some(source),
            Self::Overflow { .. } => None,
        }
    }
}
