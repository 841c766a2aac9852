#![forbid(unsafe_code)]

//! Single-column container.

use tracing::trace;
use wrapfit_core::geometry::{Sides, Size, SizeRequest};

use crate::error::LayoutError;
use crate::widget::Widget;

/// A widget that owns children and can be given a final size.
pub trait Container: Widget {
    /// Apply the final on-screen size.
    fn set_size(&mut self, size: Size);

    /// The last size applied with [`set_size`](Self::set_size).
    fn size(&self) -> Size;
}

/// Children stacked top to bottom, each filling the column's width.
///
/// With no width request the column is as wide as its widest child. With a
/// width request every child is asked again with the inner width pinned, so
/// children whose height depends on their width (wrapping labels) reflow.
pub struct Column {
    name: String,
    children: Vec<Box<dyn Widget>>,
    margin: Sides,
    gap: u16,
    size: Size,
}

impl Column {
    pub fn new() -> Self {
        Self {
            name: "column".to_string(),
            children: Vec::new(),
            margin: Sides::default(),
            gap: 0,
            size: Size::ZERO,
        }
    }

    /// Add a child below the existing ones.
    #[must_use]
    pub fn child(mut self, widget: impl Widget + 'static) -> Self {
        self.children.push(Box::new(widget));
        self
    }

    /// Add a child below the existing ones.
    pub fn push(&mut self, widget: Box<dyn Widget>) {
        self.children.push(widget);
    }

    /// Set the margin around all children.
    #[must_use]
    pub fn margin(mut self, margin: Sides) -> Self {
        self.margin = margin;
        self
    }

    /// Set the vertical gap between children.
    #[must_use]
    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn margin_sides(&self) -> Sides {
        self.margin
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Default for Column {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Column {
    fn name(&self) -> &str {
        &self.name
    }

    fn compute_size(&self, request: SizeRequest) -> Result<Size, LayoutError> {
        let inner_width = request
            .width
            .map(|width| width.saturating_sub(self.margin.horizontal_sum()));
        let child_request = SizeRequest::new(inner_width, None);

        let mut width: u16 = 0;
        let mut height: u32 = 0;
        for (idx, child) in self.children.iter().enumerate() {
            let size = child.compute_size(child_request)?;
            trace!(
                column = %self.name,
                child = child.name(),
                width = size.width,
                height = size.height,
                "child size"
            );
            width = width.max(size.width);
            height += u32::from(size.height);
            if idx > 0 {
                height += u32::from(self.gap);
            }
        }

        let overflow = |what: &'static str| LayoutError::Overflow { what };
        let height = u16::try_from(height)
            .ok()
            .and_then(|height| height.checked_add(self.margin.vertical_sum()))
            .ok_or_else(|| overflow("column height"))?;
        let width = width
            .checked_add(self.margin.horizontal_sum())
            .ok_or_else(|| overflow("column width"))?;
        Ok(request.resolve(Size::new(width, height)))
    }
}

impl Container for Column {
    fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    fn size(&self) -> Size {
        self.size
    }
}
