#![forbid(unsafe_code)]

//! Sizing configuration.
//!
//! A [`Config`] is an immutable value built once (usually from the
//! environment) and handed to the hint policy and the packer when they are
//! constructed. Nothing reads configuration from globals.
//!
//! # Environment Variables
//! - `WRAPFIT_HINT_MODE` = default|reduced|proportional
//! - `WRAPFIT_PROPORTION_CORRECTING` (bool)
//! - `WRAPFIT_DOUBLE_PACK` (bool)
//! - `WRAPFIT_SIMPLE_CHARS` (positive integer)
//! - `WRAPFIT_BALANCED_CHARS` (positive integer)
//! - `WRAPFIT_MAX_SHORT_LINES` (positive integer)
//! - `WRAPFIT_MAX_SINGLE_LINES` (positive integer)
//!
//! Unknown values are reported as errors; they never fall back to defaults.

use std::env;
use std::fmt;

const ENV_HINT_MODE: &str = "WRAPFIT_HINT_MODE";
const ENV_PROPORTION_CORRECTING: &str = "WRAPFIT_PROPORTION_CORRECTING";
const ENV_DOUBLE_PACK: &str = "WRAPFIT_DOUBLE_PACK";
const ENV_SIMPLE_CHARS: &str = "WRAPFIT_SIMPLE_CHARS";
const ENV_BALANCED_CHARS: &str = "WRAPFIT_BALANCED_CHARS";
const ENV_MAX_SHORT_LINES: &str = "WRAPFIT_MAX_SHORT_LINES";
const ENV_MAX_SINGLE_LINES: &str = "WRAPFIT_MAX_SINGLE_LINES";

/// How a wrapping label computes its size hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HintMode {
    /// Use the host toolkit's measurement unchanged (full unwrapped width).
    DefaultHint,
    /// Report a width of 1 until a width has been negotiated.
    #[default]
    ReducedWidth,
    /// Wrap the text into a block of reasonable proportions.
    Proportional,
}

impl HintMode {
    /// Parse a mode name, case-insensitively.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "default" | "default-hint" | "default_hint" => Some(Self::DefaultHint),
            "reduced" | "reduced-width" | "reduced_width" => Some(Self::ReducedWidth),
            "proportional" => Some(Self::Proportional),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DefaultHint => "default",
            Self::ReducedWidth => "reduced",
            Self::Proportional => "proportional",
        }
    }
}

impl fmt::Display for HintMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wrap width selection for [`HintMode::Proportional`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WrapStrategy {
    /// Always wrap at a fixed readable line length.
    Simple,
    /// Start from the natural block and narrow it while it is too flat.
    #[default]
    ProportionCorrecting,
}

impl WrapStrategy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::ProportionCorrecting => "proportion-correcting",
        }
    }
}

impl fmt::Display for WrapStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tunable constants of the proportional heuristics.
///
/// Widths are counted in average characters and scaled by the font's average
/// character width at measurement time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProportionParams {
    /// Wrap width used by [`WrapStrategy::Simple`].
    pub simple_chars: u16,
    /// Reference width `w` of [`WrapStrategy::ProportionCorrecting`]; blocks
    /// are narrowed to `w/2` and then `w/4`.
    pub balanced_chars: u16,
    /// A block with fewer lines than this and wider than `w/2` is narrowed.
    pub max_short_lines: usize,
    /// A block with fewer lines than this and wider than `w/4` is narrowed again.
    pub max_single_lines: usize,
}

impl Default for ProportionParams {
    fn default() -> Self {
        Self {
            simple_chars: 65,
            balanced_chars: 80,
            max_short_lines: 4,
            max_single_lines: 2,
        }
    }
}

/// Immutable sizing configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Config {
    /// Label hint mode.
    pub hint_mode: HintMode,
    /// Strategy for [`HintMode::Proportional`].
    pub strategy: WrapStrategy,
    /// Run a second pack pass with the first pass's width pinned.
    pub double_pack: bool,
    /// Heuristic constants.
    pub params: ProportionParams,
}

impl Config {
    /// Default configuration: reduced width, proportion correcting, double pack.
    #[must_use]
    pub fn new() -> Self {
        Self {
            hint_mode: HintMode::default(),
            strategy: WrapStrategy::default(),
            double_pack: true,
            params: ProportionParams::default(),
        }
    }

    #[must_use]
    pub fn hint_mode(mut self, mode: HintMode) -> Self {
        self.hint_mode = mode;
        self
    }

    #[must_use]
    pub fn strategy(mut self, strategy: WrapStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    #[must_use]
    pub fn double_pack(mut self, enabled: bool) -> Self {
        self.double_pack = enabled;
        self
    }

    #[must_use]
    pub fn params(mut self, params: ProportionParams) -> Self {
        self.params = params;
        self
    }

    /// Load configuration from the process environment.
    ///
    /// Every malformed variable is reported; the first one does not hide the
    /// rest.
    pub fn from_env() -> Result<Self, Vec<ConfigError>> {
        from_env_with(|key| env::var(key).ok())
    }

    /// Validate heuristic constants and return all violations.
    pub fn validate(&self) -> Result<(), Vec<ConfigError>> {
        let mut errors = Vec::new();
        let params = &self.params;
        validate_positive("simple_chars", usize::from(params.simple_chars), &mut errors);
        validate_positive(
            "balanced_chars",
            usize::from(params.balanced_chars),
            &mut errors,
        );
        validate_positive("max_short_lines", params.max_short_lines, &mut errors);
        validate_positive("max_single_lines", params.max_single_lines, &mut errors);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Short human-readable summary for logs.
    #[must_use]
    pub fn summary_short(&self) -> String {
        let pack = if self.double_pack { "double" } else { "single" };
        format!(
            "hint={} strategy={} pack={pack}",
            self.hint_mode, self.strategy
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration error with field context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub field: &'static str,
    pub value: String,
    pub message: String,
}

impl ConfigError {
    fn new(field: &'static str, value: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={} ({})", self.field, self.value, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Build a configuration from an arbitrary variable lookup.
pub fn from_env_with<F>(mut get: F) -> Result<Config, Vec<ConfigError>>
where
    F: FnMut(&str) -> Option<String>,
{
    let mut config = Config::new();
    let mut errors = Vec::new();

    if let Some(value) = get(ENV_HINT_MODE) {
        match HintMode::parse(&value) {
            Some(parsed) => config.hint_mode = parsed,
            None => errors.push(ConfigError::new(
                "hint_mode",
                value,
                "expected default|reduced|proportional",
            )),
        }
    }

    if let Some(value) = get(ENV_PROPORTION_CORRECTING) {
        match parse_bool(&value) {
            Some(true) => config.strategy = WrapStrategy::ProportionCorrecting,
            Some(false) => config.strategy = WrapStrategy::Simple,
            None => errors.push(ConfigError::new(
                "proportion_correcting",
                value,
                "expected bool (1/0/true/false)",
            )),
        }
    }

    if let Some(value) = get(ENV_DOUBLE_PACK) {
        match parse_bool(&value) {
            Some(parsed) => config.double_pack = parsed,
            None => errors.push(ConfigError::new(
                "double_pack",
                value,
                "expected bool (1/0/true/false)",
            )),
        }
    }

    if let Some(value) = get(ENV_SIMPLE_CHARS) {
        match parse_u16(&value) {
            Some(parsed) => config.params.simple_chars = parsed,
            None => errors.push(ConfigError::new(
                "simple_chars",
                value,
                "expected positive integer",
            )),
        }
    }

    if let Some(value) = get(ENV_BALANCED_CHARS) {
        match parse_u16(&value) {
            Some(parsed) => config.params.balanced_chars = parsed,
            None => errors.push(ConfigError::new(
                "balanced_chars",
                value,
                "expected positive integer",
            )),
        }
    }

    if let Some(value) = get(ENV_MAX_SHORT_LINES) {
        match parse_usize(&value) {
            Some(parsed) => config.params.max_short_lines = parsed,
            None => errors.push(ConfigError::new(
                "max_short_lines",
                value,
                "expected positive integer",
            )),
        }
    }

    if let Some(value) = get(ENV_MAX_SINGLE_LINES) {
        match parse_usize(&value) {
            Some(parsed) => config.params.max_single_lines = parsed,
            None => errors.push(ConfigError::new(
                "max_single_lines",
                value,
                "expected positive integer",
            )),
        }
    }

    if let Err(mut invalid) = config.validate() {
        errors.append(&mut invalid);
    }

    if errors.is_empty() {
        tracing::debug!(config = %config.summary_short(), "loaded sizing config");
        Ok(config)
    } else {
        Err(errors)
    }
}

fn validate_positive(field: &'static str, value: usize, errors: &mut Vec<ConfigError>) {
    if value == 0 {
        errors.push(ConfigError::new(field, "0", "must be greater than zero"));
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[inline]
fn parse_usize(value: &str) -> Option<usize> {
    value.trim().parse::<usize>().ok()
}

#[inline]
fn parse_u16(value: &str) -> Option<u16> {
    value.trim().parse::<u16>().ok()
}
