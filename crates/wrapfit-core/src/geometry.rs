#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All quantities are unsigned units (pixels for a graphical host, cells for a
//! terminal host), so a size can never be negative.

/// A width/height pair.
///
/// This is the value every size computation produces: a widget's size hint, a
/// container's natural size, or the size finally applied by a pack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    /// Width in units.
    pub width: u16,
    /// Height in units.
    pub height: u16,
}

impl Size {
    /// Zero size.
    pub const ZERO: Self = Self {
        width: 0,
        height: 0,
    };

    /// Create a new size.
    #[inline]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Same size with a different width.
    #[inline]
    #[must_use]
    pub const fn with_width(self, width: u16) -> Self {
        Self {
            width,
            height: self.height,
        }
    }

    /// Check if either dimension is zero.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Grow by the given sides, saturating at `u16::MAX`.
    #[must_use]
    pub fn outset(self, sides: Sides) -> Self {
        Self {
            width: self.width.saturating_add(sides.horizontal_sum()),
            height: self.height.saturating_add(sides.vertical_sum()),
        }
    }

    /// Shrink by the given sides, saturating at zero.
    #[must_use]
    pub fn inset(self, sides: Sides) -> Self {
        Self {
            width: self.width.saturating_sub(sides.horizontal_sum()),
            height: self.height.saturating_sub(sides.vertical_sum()),
        }
    }
}

/// Sides for padding/margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Sides {
    /// Top side.
    pub top: u16,
    /// Right side.
    pub right: u16,
    /// Bottom side.
    pub bottom: u16,
    /// Left side.
    pub left: u16,
}

impl Sides {
    /// Create new sides with equal values.
    pub const fn all(val: u16) -> Self {
        Self {
            top: val,
            right: val,
            bottom: val,
            left: val,
        }
    }

    /// Create new sides with horizontal values only.
    pub const fn horizontal(val: u16) -> Self {
        Self {
            top: 0,
            right: val,
            bottom: 0,
            left: val,
        }
    }

    /// Create new sides with vertical values only.
    pub const fn vertical(val: u16) -> Self {
        Self {
            top: val,
            right: 0,
            bottom: val,
            left: 0,
        }
    }

    /// Create new sides with distinct vertical and horizontal values.
    pub const fn symmetric(vertical: u16, horizontal: u16) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Sum of left and right.
    #[inline]
    pub const fn horizontal_sum(&self) -> u16 {
        self.left.saturating_add(self.right)
    }

    /// Sum of top and bottom.
    #[inline]
    pub const fn vertical_sum(&self) -> u16 {
        self.top.saturating_add(self.bottom)
    }
}

/// A size request passed down by a layout pass.
///
/// `None` in either dimension means "unspecified": the widget decides. A
/// concrete value means the layout has already negotiated that dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SizeRequest {
    /// Requested width, if negotiated.
    pub width: Option<u16>,
    /// Requested height, if negotiated.
    pub height: Option<u16>,
}

impl SizeRequest {
    /// Both dimensions unspecified.
    pub const UNSPECIFIED: Self = Self {
        width: None,
        height: None,
    };

    /// Create a request from optional dimensions.
    #[inline]
    pub const fn new(width: Option<u16>, height: Option<u16>) -> Self {
        Self { width, height }
    }

    /// Request with a pinned width and free height.
    #[inline]
    pub const fn width(width: u16) -> Self {
        Self {
            width: Some(width),
            height: None,
        }
    }

    /// True when neither dimension has been negotiated.
    #[inline]
    pub const fn is_unspecified(&self) -> bool {
        self.width.is_none() && self.height.is_none()
    }

    /// Replace unspecified dimensions with the measured ones.
    #[must_use]
    pub fn resolve(&self, measured: Size) -> Size {
        Size {
            width: self.width.unwrap_or(measured.width),
            height: self.height.unwrap_or(measured.height),
        }
    }
}
