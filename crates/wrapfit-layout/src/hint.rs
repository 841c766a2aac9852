#![forbid(unsafe_code)]

//! Size hints for wrapping labels.
//!
//! Toolkits usually measure a wrap-enabled label as if it were a single line
//! until someone hands it a width. Inside a dialog that makes the dialog as
//! wide as the longest sentence. [`SizeHintPolicy`] replaces that measurement
//! with one of three behaviours selected by [`HintMode`]:
//!
//! | mode           | width unspecified                      | width given |
//! |----------------|----------------------------------------|-------------|
//! | `DefaultHint`  | toolkit default (unwrapped)            | default     |
//! | `ReducedWidth` | default height, width 1 (both free)    | default     |
//! | `Proportional` | wrapped block of balanced proportions  | default     |
//!
//! Once a width is negotiated the default measurement has already reflowed
//! the text for it, so every mode defers to it.

use tracing::{debug, trace};
use wrapfit_core::config::{Config, HintMode, ProportionParams, WrapStrategy};
use wrapfit_core::geometry::{Size, SizeRequest};
use wrapfit_text::{MeasureError, TextLayout, TextMeasurer};

use crate::error::LayoutError;
use crate::widget::{Label, Widget};

/// Computes size hints for wrapping labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeHintPolicy {
    mode: HintMode,
    strategy: WrapStrategy,
    params: ProportionParams,
}

impl SizeHintPolicy {
    /// Build a policy from configuration.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            mode: config.hint_mode,
            strategy: config.strategy,
            params: config.params,
        }
    }

    /// Preferred size of `label` for `request`.
    pub fn compute_hint<M: TextMeasurer>(
        &self,
        label: &Label<M>,
        request: SizeRequest,
    ) -> Result<Size, LayoutError> {
        let size = match self.mode {
            HintMode::DefaultHint => label.default_size(request)?,
            HintMode::ReducedWidth => {
                let size = label.default_size(request)?;
                if request.is_unspecified() {
                    // Do not let this label dictate the container's width.
                    size.with_width(1)
                } else {
                    size
                }
            }
            HintMode::Proportional => match request.width {
                Some(_) => label.default_size(request)?,
                None => self
                    .proportional_size(label.measurer(), label.text())
                    .map_err(|err| LayoutError::measure(label.name(), err))?,
            },
        };
        debug!(
            widget = label.name(),
            mode = %self.mode,
            req_width = ?request.width,
            req_height = ?request.height,
            width = size.width,
            height = size.height,
            "label hint"
        );
        Ok(size)
    }

    /// Bounding box of `text` wrapped at a heuristically chosen width.
    pub fn proportional_size<M: TextMeasurer + ?Sized>(
        &self,
        measurer: &M,
        text: &str,
    ) -> Result<Size, MeasureError> {
        let mut layout = TextLayout::open(measurer, text)?;
        let metrics = layout.font_metrics()?;
        let chars_width = |chars: u16| {
            metrics
                .chars_width(chars)
                .ok_or(MeasureError::Overflow { what: "wrap width" })
        };

        match self.strategy {
            WrapStrategy::Simple => {
                layout.set_width(Some(chars_width(self.params.simple_chars)?));
                layout.bounds()
            }
            WrapStrategy::ProportionCorrecting => {
                let w = chars_width(self.params.balanced_chars)?;
                let mut bounds = layout.bounds()?;

                // A block of a few lines should not be wider than w/2.
                if layout.line_count()? < self.params.max_short_lines && bounds.width > w / 2 {
                    layout.set_width(Some(w / 2));
                    bounds = layout.bounds()?;
                    trace!(wrap = w / 2, width = bounds.width, "re-wrap short block");
                }

                // A single line should not be wider than w/4.
                if layout.line_count()? < self.params.max_single_lines && bounds.width > w / 4 {
                    layout.set_width(Some(w / 4));
                    bounds = layout.bounds()?;
                    trace!(wrap = w / 4, width = bounds.width, "re-wrap single line");
                }

                Ok(bounds)
            }
        }
    }
}

impl Default for SizeHintPolicy {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
