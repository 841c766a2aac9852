#![forbid(unsafe_code)]

//! Scoped text layout.
//!
//! A [`TextLayout`] holds one acquired measurement resource for the duration
//! of a hint computation and releases it when dropped, whichever way the
//! computation exits.

use wrapfit_core::geometry::Size;

use crate::measure::{FontMetrics, MeasureError, TextBlock, TextMeasurer};

/// A text layout re-wrappable at different widths.
///
/// The block for the current wrap width is measured lazily and cached until
/// the width changes.
pub struct TextLayout<'a, M: TextMeasurer + ?Sized> {
    measurer: &'a M,
    text: &'a str,
    wrap_width: Option<u16>,
    block: Option<TextBlock>,
}

impl<'a, M: TextMeasurer + ?Sized> TextLayout<'a, M> {
    /// Acquire a layout for `text`, initially unwrapped.
    pub fn open(measurer: &'a M, text: &'a str) -> Result<Self, MeasureError> {
        measurer.acquire()?;
        Ok(Self {
            measurer,
            text,
            wrap_width: None,
            block: None,
        })
    }

    /// Font metrics of the underlying measurer.
    pub fn font_metrics(&self) -> Result<FontMetrics, MeasureError> {
        self.measurer.font_metrics()
    }

    /// Current wrap width; `None` means only explicit newlines break.
    pub fn wrap_width(&self) -> Option<u16> {
        self.wrap_width
    }

    /// Change the wrap width. The next query re-measures.
    pub fn set_width(&mut self, wrap_width: Option<u16>) {
        if self.wrap_width != wrap_width {
            self.wrap_width = wrap_width;
            self.block = None;
        }
    }

    /// The block at the current wrap width.
    pub fn block(&mut self) -> Result<&TextBlock, MeasureError> {
        let block = match self.block.take() {
            Some(block) => block,
            None => self.measurer.measure_wrapped(self.text, self.wrap_width)?,
        };
        Ok(self.block.insert(block))
    }

    /// Bounding box at the current wrap width.
    pub fn bounds(&mut self) -> Result<Size, MeasureError> {
        Ok(self.block()?.bounds)
    }

    /// Line count at the current wrap width.
    pub fn line_count(&mut self) -> Result<usize, MeasureError> {
        Ok(self.block()?.line_count())
    }
}

impl<M: TextMeasurer + ?Sized> Drop for TextLayout<'_, M> {
    fn drop(&mut self) {
        self.measurer.release();
    }
}
