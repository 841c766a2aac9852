//! The facade surface: prelude, error conversions, and an end-to-end pack.

use std::error::Error as _;
use std::rc::Rc;

use wrapfit::prelude::*;
use wrapfit::{ConfigError, LayoutError};

#[test]
fn prelude_packs_a_dialog() -> wrapfit::Result<()> {
    let config = Config::new().hint_mode(HintMode::Proportional);
    let measurer = Rc::new(CellMeasurer::new());
    let root = Column::new()
        .child(WrappingLabel::new(
            Rc::clone(&measurer),
            "short help",
            SizeHintPolicy::new(&config),
        ))
        .child(Button::new(Rc::clone(&measurer), "OK"));
    let mut dialog = Dialog::new("Help", root, TwoPassPacker::new(&config));
    let size = dialog.pack()?;
    assert_eq!(size, Size::new(10, 2));
    assert_eq!(measurer.open_layouts(), 0);
    Ok(())
}

#[test]
fn config_errors_are_listed() {
    let result = wrapfit::core::config::from_env_with(|key| match key {
        "WRAPFIT_HINT_MODE" => Some("sideways".to_string()),
        "WRAPFIT_DOUBLE_PACK" => Some("maybe".to_string()),
        _ => None,
    });
    let err: Error = result.unwrap_err().into();
    let text = err.to_string();
    assert!(text.starts_with("invalid configuration: hint_mode=sideways"), "{text}");
    assert!(text.contains("; double_pack=maybe"), "{text}");
    assert!(err.source().is_none());
}

#[test]
fn layout_errors_keep_their_source() {
    let err: Error = LayoutError::Overflow { what: "column height" }.into();
    assert!(matches!(err, Error::Layout(_)));
    assert!(err.source().is_some());
}

#[test]
fn single_config_error_formats_without_separator() {
    let err = Error::Config(vec![ConfigError {
        field: "simple_chars",
        value: "0".to_string(),
        message: "must be positive".to_string(),
    }]);
    assert_eq!(
        err.to_string(),
        "invalid configuration: simple_chars=0 (must be positive)"
    );
}
