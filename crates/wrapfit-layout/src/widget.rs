#![forbid(unsafe_code)]

//! Widgets that take part in size negotiation.

use std::rc::Rc;

use wrapfit_core::geometry::{Sides, Size, SizeRequest};
use wrapfit_text::TextMeasurer;

use crate::error::LayoutError;
use crate::hint::SizeHintPolicy;

/// Anything a container can ask for a size.
pub trait Widget {
    /// Short name used in logs and errors.
    fn name(&self) -> &str;

    /// Preferred size for the given request.
    ///
    /// A concrete dimension in `request` has already been negotiated by the
    /// caller; an unspecified one is the widget's to choose.
    fn compute_size(&self, request: SizeRequest) -> Result<Size, LayoutError>;
}

impl<W: Widget + ?Sized> Widget for Box<W> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn compute_size(&self, request: SizeRequest) -> Result<Size, LayoutError> {
        (**self).compute_size(request)
    }
}

/// A plain text label, sized by the measurer's default computation.
#[derive(Debug)]
pub struct Label<M: TextMeasurer> {
    name: String,
    text: String,
    wrap: bool,
    measurer: Rc<M>,
}

impl<M: TextMeasurer> Label<M> {
    /// Create a non-wrapping label.
    pub fn new(measurer: Rc<M>, text: impl Into<String>) -> Self {
        Self {
            name: "label".to_string(),
            text: text.into(),
            wrap: false,
            measurer,
        }
    }

    /// Set whether the text wraps once a width is negotiated.
    #[must_use]
    pub fn wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    /// Set the name reported in logs and errors.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_wrapping(&self) -> bool {
        self.wrap
    }

    pub fn measurer(&self) -> &M {
        &self.measurer
    }

    /// The host toolkit's default measurement of this label.
    pub fn default_size(&self, request: SizeRequest) -> Result<Size, LayoutError> {
        self.measurer
            .measure_default(&self.text, self.wrap, request)
            .map_err(|err| LayoutError::measure(&self.name, err))
    }
}

impl<M: TextMeasurer> Widget for Label<M> {
    fn name(&self) -> &str {
        &self.name
    }

    fn compute_size(&self, request: SizeRequest) -> Result<Size, LayoutError> {
        self.default_size(request)
    }
}

/// A wrapping label whose size hint comes from a [`SizeHintPolicy`].
///
/// Wraps a plain [`Label`] rather than replacing it: the default measurement
/// stays available to the policy as a fallback.
#[derive(Debug)]
pub struct WrappingLabel<M: TextMeasurer> {
    label: Label<M>,
    policy: SizeHintPolicy,
}

impl<M: TextMeasurer> WrappingLabel<M> {
    pub fn new(measurer: Rc<M>, text: impl Into<String>, policy: SizeHintPolicy) -> Self {
        Self {
            label: Label::new(measurer, text).wrap(true),
            policy,
        }
    }

    /// Set the name reported in logs and errors.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.label = self.label.named(name);
        self
    }

    pub fn label(&self) -> &Label<M> {
        &self.label
    }

    pub fn policy(&self) -> &SizeHintPolicy {
        &self.policy
    }
}

impl<M: TextMeasurer> Widget for WrappingLabel<M> {
    fn name(&self) -> &str {
        self.label.name()
    }

    fn compute_size(&self, request: SizeRequest) -> Result<Size, LayoutError> {
        self.policy.compute_hint(&self.label, request)
    }
}

/// A push button: one line of text inside padding.
#[derive(Debug)]
pub struct Button<M: TextMeasurer> {
    name: String,
    text: String,
    padding: Sides,
    min_width: u16,
    measurer: Rc<M>,
}

impl<M: TextMeasurer> Button<M> {
    pub fn new(measurer: Rc<M>, text: impl Into<String>) -> Self {
        Self {
            name: "button".to_string(),
            text: text.into(),
            padding: Sides::horizontal(2),
            min_width: 0,
            measurer,
        }
    }

    #[must_use]
    pub fn padding(mut self, padding: Sides) -> Self {
        self.padding = padding;
        self
    }

    /// Never report a natural width below `width`.
    #[must_use]
    pub fn min_width(mut self, width: u16) -> Self {
        self.min_width = width;
        self
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl<M: TextMeasurer> Widget for Button<M> {
    fn name(&self) -> &str {
        &self.name
    }

    fn compute_size(&self, request: SizeRequest) -> Result<Size, LayoutError> {
        let text = self
            .measurer
            .measure_default(&self.text, false, SizeRequest::UNSPECIFIED)
            .map_err(|err| LayoutError::measure(&self.name, err))?;
        let natural = text.outset(self.padding);
        let natural = natural.with_width(natural.width.max(self.min_width));
        Ok(request.resolve(natural))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wrapfit_core::config::{Config, HintMode};
    use wrapfit_text::CellMeasurer;

    #[test]
    fn label_uses_default_measurement() {
        let measurer = Rc::new(CellMeasurer::new());
        let label = Label::new(measurer, "hello world").wrap(true);
        assert_eq!(
            label.compute_size(SizeRequest::UNSPECIFIED).unwrap(),
            Size::new(11, 1)
        );
        assert_eq!(
            label.compute_size(SizeRequest::width(5)).unwrap(),
            Size::new(5, 2)
        );
    }

    #[test]
    fn wrapping_label_wraps() {
        let measurer = Rc::new(CellMeasurer::new());
        let policy = SizeHintPolicy::new(&Config::new().hint_mode(HintMode::DefaultHint));
        let label = WrappingLabel::new(measurer, "hello world", policy).named("help");
        assert!(label.label().is_wrapping());
        assert_eq!(label.name(), "help");
        assert_eq!(
            label.compute_size(SizeRequest::width(5)).unwrap(),
            Size::new(5, 2)
        );
    }

    #[test]
    fn button_pads_text() {
        let measurer = Rc::new(CellMeasurer::new());
        let button = Button::new(measurer, "Got it");
        assert_eq!(
            button.compute_size(SizeRequest::UNSPECIFIED).unwrap(),
            Size::new(10, 1)
        );
    }

    #[test]
    fn button_min_width_and_request() {
        let measurer = Rc::new(CellMeasurer::new());
        let button = Button::new(measurer, "Got it")
            .padding(Sides::symmetric(1, 1))
            .min_width(80);
        assert_eq!(
            button.compute_size(SizeRequest::UNSPECIFIED).unwrap(),
            Size::new(80, 3)
        );
        assert_eq!(
            button.compute_size(SizeRequest::width(120)).unwrap(),
            Size::new(120, 3)
        );
    }

    #[test]
    fn boxed_widget_delegates() {
        let measurer = Rc::new(CellMeasurer::new());
        let boxed: Box<dyn Widget> = Box::new(Label::new(measurer, "abc").named("boxed"));
        assert_eq!(boxed.name(), "boxed");
        assert_eq!(
            boxed.compute_size(SizeRequest::UNSPECIFIED).unwrap(),
            Size::new(3, 1)
        );
    }
}
