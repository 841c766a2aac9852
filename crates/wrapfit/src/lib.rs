#![forbid(unsafe_code)]

//! wrapfit public facade crate.
//!
//! Re-exports the sizing types from the internal crates and adds a top-level
//! error for applications that load configuration, pack, and then draw.

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use wrapfit_core::config::{Config, ConfigError, HintMode, ProportionParams, WrapStrategy};
pub use wrapfit_core::geometry::{Sides, Size, SizeRequest};

// --- Text re-exports -------------------------------------------------------

pub use wrapfit_text::{
    CellMeasurer, FontMetrics, MeasureError, TextBlock, TextLayout, TextMeasurer, WrapMode,
    WrapOptions, display_width, wrap_text,
};

// --- Layout re-exports -----------------------------------------------------

pub use wrapfit_layout::{
    Button, Column, Container, Dialog, Label, LayoutError, PackStrategy, SizeHintPolicy,
    TwoPassPacker, Widget, WrappingLabel,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for wrapfit apps.
#[derive(Debug)]
pub enum Error {
    /// One or more configuration values were rejected.
    Config(Vec<ConfigError>),
    /// Sizing failed.
    Layout(LayoutError),
    /// I/O failure while drawing.
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(errors) => {
                write!(f, "invalid configuration")?;
                for (idx, err) in errors.iter().enumerate() {
                    let sep = if idx == 0 { ": " } else { "; " };
                    write!(f, "{sep}{err}")?;
                }
                Ok(())
            }
            Self::Layout(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(_) => None,
            Self::Layout(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<Vec<ConfigError>> for Error {
    fn from(errors: Vec<ConfigError>) -> Self {
        Self::Config(errors)
    }
}

impl From<LayoutError> for Error {
    fn from(err: LayoutError) -> Self {
        Self::Layout(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Standard result type for wrapfit APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Button, CellMeasurer, Column, Config, Dialog, Error, HintMode, PackStrategy, Result,
        Size, SizeHintPolicy, SizeRequest, TwoPassPacker, Widget, WrapStrategy, WrappingLabel,
    };

    pub use crate::{core, layout, text};
}

pub use wrapfit_core as core;
pub use wrapfit_layout as layout;
pub use wrapfit_text as text;
