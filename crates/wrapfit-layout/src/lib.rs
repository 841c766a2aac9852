#![forbid(unsafe_code)]

//! Size negotiation for dialogs with wrapping text.
//!
//! - [`Widget`] - anything that reports a size for a [`SizeRequest`]
//! - [`WrappingLabel`] - a label whose hint comes from a [`SizeHintPolicy`]
//! - [`Column`] - single-column [`Container`]
//! - [`TwoPassPacker`] - [`PackStrategy`] that re-measures at the chosen width
//! - [`Dialog`] - top-level window packed by an injected strategy
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use wrapfit_core::{Config, Size};
//! use wrapfit_layout::{Button, Column, Dialog, SizeHintPolicy, TwoPassPacker, WrappingLabel};
//! use wrapfit_text::CellMeasurer;
//!
//! let config = Config::new();
//! let measurer = Rc::new(CellMeasurer::new());
//! let root = Column::new()
//!     .child(WrappingLabel::new(
//!         Rc::clone(&measurer),
//!         "a rather long line of help text",
//!         SizeHintPolicy::new(&config),
//!     ))
//!     .child(Button::new(measurer, "OK").min_width(12));
//!
//! let mut dialog = Dialog::new("Help", root, TwoPassPacker::new(&config));
//! // The button sets the width; the label wraps into it.
//! assert_eq!(dialog.pack().unwrap(), Size::new(12, 4));
//! ```

pub mod column;
pub mod error;
pub mod hint;
pub mod pack;
pub mod widget;

pub use column::{Column, Container};
pub use error::LayoutError;
pub use hint::SizeHintPolicy;
pub use pack::{Dialog, PackStrategy, TwoPassPacker};
pub use widget::{Button, Label, Widget, WrappingLabel};
pub use wrapfit_core::geometry::{Sides, Size, SizeRequest};
