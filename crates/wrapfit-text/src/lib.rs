#![forbid(unsafe_code)]

//! Text handling for wrapfit.
//!
//! - [`wrap`] - grapheme and width correct line wrapping
//! - [`TextMeasurer`] - capability interface of a host text layout subsystem
//! - [`CellMeasurer`] - deterministic measurer over terminal cell widths
//! - [`TextLayout`] - scoped, re-wrappable layout of one string
//!
//! # Example
//! ```
//! use wrapfit_text::{CellMeasurer, TextLayout};
//!
//! let measurer = CellMeasurer::new();
//! let mut layout = TextLayout::open(&measurer, "hello world").unwrap();
//! layout.set_width(Some(5));
//! assert_eq!(layout.line_count().unwrap(), 2);
//! drop(layout);
//! assert_eq!(measurer.open_layouts(), 0);
//! ```

pub mod layout;
pub mod measure;
pub mod wrap;

pub use layout::TextLayout;
pub use measure::{CellMeasurer, FontMetrics, MeasureError, TextBlock, TextMeasurer};
pub use wrap::{WrapMode, WrapOptions, display_width, wrap_text};
