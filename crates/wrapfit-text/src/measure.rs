#![forbid(unsafe_code)]

//! Text measurement facility.
//!
//! [`TextMeasurer`] is the seam between the sizing heuristics and whatever
//! actually lays out glyphs. A host toolkit plugs in its own implementation;
//! [`CellMeasurer`] is a deterministic one based on terminal cell widths,
//! scaled to arbitrary units.

use std::cell::Cell;
use std::fmt;

use wrapfit_core::geometry::{Size, SizeRequest};

use crate::wrap::{WrapMode, WrapOptions, block_width, wrap_with_options};

/// Font metrics in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontMetrics {
    /// Width of an average character.
    pub average_char_width: u16,
    /// Height of one line of text.
    pub line_height: u16,
}

impl FontMetrics {
    /// One unit per cell, one unit per line.
    pub const CELL: Self = Self {
        average_char_width: 1,
        line_height: 1,
    };

    /// Width of `chars` average characters, or `None` on overflow.
    #[inline]
    pub fn chars_width(&self, chars: u16) -> Option<u16> {
        chars.checked_mul(self.average_char_width)
    }
}

/// A block of text laid out at some wrap width.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextBlock {
    /// The wrapped lines.
    pub lines: Vec<String>,
    /// Bounding box of the lines.
    pub bounds: Size,
}

impl TextBlock {
    /// Number of lines in the block.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.bounds.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.bounds.height
    }
}

/// Failure reported by a text-measurement backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeasureError {
    /// Font metrics with a zero character width or line height.
    InvalidMetrics(FontMetrics),
    /// A measured extent does not fit in the unit type.
    Overflow {
        /// Which extent overflowed.
        what: &'static str,
    },
    /// The backend itself failed.
    Backend(String),
}

impl fmt::Display for MeasureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMetrics(metrics) => write!(
                f,
                "invalid font metrics (char width {}, line height {})",
                metrics.average_char_width, metrics.line_height
            ),
            Self::Overflow { what } => write!(f, "text {what} overflows the unit range"),
            Self::Backend(msg) => write!(f, "text measurement failed: {msg}"),
        }
    }
}

impl std::error::Error for MeasureError {}

/// Capability interface of a host toolkit's text layout subsystem.
///
/// Implementations must tolerate repeated [`measure_wrapped`] calls on the
/// same text with different widths; each call is independent.
///
/// [`measure_wrapped`]: TextMeasurer::measure_wrapped
pub trait TextMeasurer {
    /// Metrics of the font labels are drawn with.
    fn font_metrics(&self) -> Result<FontMetrics, MeasureError>;

    /// The toolkit's baseline label measurement.
    ///
    /// With no width request this is the unwrapped size of the text, even when
    /// `wrap` is set.
    fn measure_default(
        &self,
        text: &str,
        wrap: bool,
        request: SizeRequest,
    ) -> Result<Size, MeasureError>;

    /// Lay out `text` wrapped at `wrap_width` (or only at explicit newlines).
    fn measure_wrapped(
        &self,
        text: &str,
        wrap_width: Option<u16>,
    ) -> Result<TextBlock, MeasureError>;

    /// Acquire a layout resource. Paired with [`release`](Self::release) by
    /// [`TextLayout`](crate::layout::TextLayout).
    fn acquire(&self) -> Result<(), MeasureError> {
        Ok(())
    }

    /// Release a resource taken by [`acquire`](Self::acquire).
    fn release(&self) {}
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for &M {
    fn font_metrics(&self) -> Result<FontMetrics, MeasureError> {
        (**self).font_metrics()
    }

    fn measure_default(
        &self,
        text: &str,
        wrap: bool,
        request: SizeRequest,
    ) -> Result<Size, MeasureError> {
        (**self).measure_default(text, wrap, request)
    }

    fn measure_wrapped(
        &self,
        text: &str,
        wrap_width: Option<u16>,
    ) -> Result<TextBlock, MeasureError> {
        (**self).measure_wrapped(text, wrap_width)
    }

    fn acquire(&self) -> Result<(), MeasureError> {
        (**self).acquire()
    }

    fn release(&self) {
        (**self).release()
    }
}

/// Deterministic measurer over terminal cell widths.
///
/// A string's width is its Unicode display width times the average character
/// width; its height is its line count times the line height. Wrap widths are
/// converted to whole cells (at least one), and wrapping breaks at whitespace
/// with grapheme fallback for words wider than a line. Widths beyond the unit
/// range saturate at `u16::MAX`; a height beyond it is an error.
///
/// Following the usual wrap-label convention, [`measure_default`] takes a
/// requested width as-is and wraps to it, and a requested height overrides
/// the measured one.
///
/// [`measure_default`]: TextMeasurer::measure_default
#[derive(Debug)]
pub struct CellMeasurer {
    metrics: FontMetrics,
    open_layouts: Cell<usize>,
}

impl CellMeasurer {
    /// One unit per cell and per line.
    #[must_use]
    pub fn new() -> Self {
        Self {
            metrics: FontMetrics::CELL,
            open_layouts: Cell::new(0),
        }
    }

    /// Measurer with explicit metrics. Both must be non-zero.
    pub fn with_metrics(metrics: FontMetrics) -> Result<Self, MeasureError> {
        if metrics.average_char_width == 0 || metrics.line_height == 0 {
            return Err(MeasureError::InvalidMetrics(metrics));
        }
        Ok(Self {
            metrics,
            open_layouts: Cell::new(0),
        })
    }

    /// Number of layouts currently acquired and not yet released.
    pub fn open_layouts(&self) -> usize {
        self.open_layouts.get()
    }

    fn layout(&self, text: &str, wrap_width: Option<u16>) -> Result<TextBlock, MeasureError> {
        let options = match wrap_width {
            Some(width) => {
                let cells = (width / self.metrics.average_char_width).max(1);
                WrapOptions::new(usize::from(cells)).mode(WrapMode::WordChar)
            }
            None => WrapOptions::new(0).mode(WrapMode::None),
        };
        let lines = wrap_with_options(text, &options);
        // Long unwrapped text can exceed the unit range in width only.
        let width = scale(block_width(&lines), self.metrics.average_char_width)
            .unwrap_or(u16::MAX);
        let height = scale(lines.len(), self.metrics.line_height)
            .ok_or(MeasureError::Overflow { what: "height" })?;
        Ok(TextBlock {
            lines,
            bounds: Size::new(width, height),
        })
    }
}

fn scale(count: usize, unit: u16) -> Option<u16> {
    count
        .checked_mul(usize::from(unit))
        .and_then(|units| u16::try_from(units).ok())
}

impl Default for CellMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasurer for CellMeasurer {
    fn font_metrics(&self) -> Result<FontMetrics, MeasureError> {
        Ok(self.metrics)
    }

    fn measure_default(
        &self,
        text: &str,
        wrap: bool,
        request: SizeRequest,
    ) -> Result<Size, MeasureError> {
        let measured = match request.width {
            Some(width) if wrap => self.layout(text, Some(width))?.bounds.with_width(width),
            _ => self.layout(text, None)?.bounds,
        };
        Ok(request.resolve(measured))
    }

    fn measure_wrapped(
        &self,
        text: &str,
        wrap_width: Option<u16>,
    ) -> Result<TextBlock, MeasureError> {
        self.layout(text, wrap_width)
    }

    fn acquire(&self) -> Result<(), MeasureError> {
        self.open_layouts.set(self.open_layouts.get() + 1);
        Ok(())
    }

    fn release(&self) {
        self.open_layouts.set(self.open_layouts.get().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HELP_TEXT: &str =
        "What is the best way to put a label with long text in UI, like some help text?";

    fn seven_px() -> CellMeasurer {
        CellMeasurer::with_metrics(FontMetrics {
            average_char_width: 7,
            line_height: 15,
        })
        .expect("valid metrics")
    }

    #[test]
    fn zero_metrics_rejected() {
        let metrics = FontMetrics {
            average_char_width: 0,
            line_height: 15,
        };
        assert_eq!(
            CellMeasurer::with_metrics(metrics).unwrap_err(),
            MeasureError::InvalidMetrics(metrics)
        );
    }

    #[test]
    fn natural_block_is_single_line() {
        let block = seven_px().measure_wrapped(HELP_TEXT, None).unwrap();
        assert_eq!(block.line_count(), 1);
        assert_eq!(block.bounds, Size::new(78 * 7, 15));
    }

    #[test]
    fn wrapped_block_scales_cells() {
        let block = seven_px().measure_wrapped(HELP_TEXT, Some(280)).unwrap();
        assert_eq!(block.line_count(), 2);
        assert_eq!(block.bounds, Size::new(280, 30));
    }

    #[test]
    fn wrap_width_rounds_down_to_cells() {
        let measurer = seven_px();
        let a = measurer.measure_wrapped(HELP_TEXT, Some(280)).unwrap();
        let b = measurer.measure_wrapped(HELP_TEXT, Some(286)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn tiny_wrap_width_still_one_cell() {
        let block = seven_px().measure_wrapped("ab", Some(3)).unwrap();
        assert_eq!(block.lines, vec!["a", "b"]);
        assert_eq!(block.bounds, Size::new(7, 30));
    }

    #[test]
    fn default_ignores_wrap_without_width() {
        let measurer = seven_px();
        let size = measurer
            .measure_default(HELP_TEXT, true, SizeRequest::UNSPECIFIED)
            .unwrap();
        assert_eq!(size, Size::new(546, 15));
    }

    #[test]
    fn default_wraps_to_requested_width() {
        let measurer = seven_px();
        let size = measurer
            .measure_default(HELP_TEXT, true, SizeRequest::width(280))
            .unwrap();
        assert_eq!(size, Size::new(280, 30));

        // Requested width is taken as-is even if the text is narrower.
        let size = measurer
            .measure_default("short", true, SizeRequest::width(280))
            .unwrap();
        assert_eq!(size, Size::new(280, 15));
    }

    #[test]
    fn default_without_wrap_keeps_single_line() {
        let size = seven_px()
            .measure_default(HELP_TEXT, false, SizeRequest::width(280))
            .unwrap();
        assert_eq!(size, Size::new(280, 15));
    }

    #[test]
    fn default_height_request_wins() {
        let size = seven_px()
            .measure_default(HELP_TEXT, true, SizeRequest::new(Some(280), Some(4)))
            .unwrap();
        assert_eq!(size, Size::new(280, 4));
    }

    #[test]
    fn empty_text_is_one_empty_line() {
        let block = seven_px().measure_wrapped("", None).unwrap();
        assert_eq!(block.line_count(), 1);
        assert_eq!(block.bounds, Size::new(0, 15));
    }

    #[test]
    fn unwrapped_width_saturates() {
        let measurer = seven_px();
        let text = "lorem ipsum ".repeat(800);
        let block = measurer.measure_wrapped(&text, None).unwrap();
        assert_eq!(block.bounds, Size::new(u16::MAX, 15));

        // The same text fits once wrapped.
        let block = measurer.measure_wrapped(&text, Some(280)).unwrap();
        assert!(block.width() <= 280);
        assert!(block.line_count() > 1);
    }

    #[test]
    fn height_overflow_is_reported() {
        let measurer = CellMeasurer::with_metrics(FontMetrics {
            average_char_width: 1,
            line_height: 1000,
        })
        .unwrap();
        let text = "x\n".repeat(100);
        assert_eq!(
            measurer.measure_wrapped(&text, None).unwrap_err(),
            MeasureError::Overflow { what: "height" }
        );
    }

    #[test]
    fn acquire_release_counts() {
        let measurer = CellMeasurer::new();
        measurer.acquire().unwrap();
        measurer.acquire().unwrap();
        assert_eq!(measurer.open_layouts(), 2);
        measurer.release();
        measurer.release();
        measurer.release();
        assert_eq!(measurer.open_layouts(), 0);
    }

    #[test]
    fn chars_width_overflow() {
        let metrics = FontMetrics {
            average_char_width: 1000,
            line_height: 1,
        };
        assert_eq!(metrics.chars_width(65), Some(65_000));
        assert_eq!(metrics.chars_width(80), None);
    }

    #[test]
    fn error_display() {
        assert_eq!(
            MeasureError::Backend("font gone".into()).to_string(),
            "text measurement failed: font gone"
        );
        assert_eq!(
            MeasureError::Overflow { what: "height" }.to_string(),
            "text height overflows the unit range"
        );
    }
}
