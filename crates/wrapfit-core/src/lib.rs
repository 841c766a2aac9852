#![forbid(unsafe_code)]

//! Core: geometry and sizing configuration shared by the text and layout crates.

pub mod config;
pub mod geometry;

pub use config::{Config, ConfigError, HintMode, ProportionParams, WrapStrategy};
pub use geometry::{Sides, Size, SizeRequest};
