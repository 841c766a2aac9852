#![forbid(unsafe_code)]

//! Packing: sizing a top-level container to its preferred size.

use tracing::{debug, debug_span};
use wrapfit_core::config::Config;
use wrapfit_core::geometry::{Size, SizeRequest};

use crate::column::{Column, Container};
use crate::error::LayoutError;

/// Sizes a container and applies the result.
pub trait PackStrategy {
    /// Compute the container's size, apply it with
    /// [`Container::set_size`], and return it.
    ///
    /// On error the container's size is left untouched.
    fn pack(&self, container: &mut dyn Container) -> Result<Size, LayoutError>;
}

/// Packs in one or two passes.
///
/// The first pass asks for the natural size. A container's natural width may
/// come from a different child than the one that wraps, and a wrapping child
/// sized without a width does not know the final width. The second pass
/// therefore asks again with the first pass's width pinned, letting wrapped
/// text report its height for that exact width. Exactly two passes run; this
/// does not iterate to a fixed point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TwoPassPacker {
    double_pack: bool,
}

impl TwoPassPacker {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            double_pack: config.double_pack,
        }
    }

    /// Whether the second pass runs.
    pub fn double_pack(&self) -> bool {
        self.double_pack
    }
}

impl Default for TwoPassPacker {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl PackStrategy for TwoPassPacker {
    fn pack(&self, container: &mut dyn Container) -> Result<Size, LayoutError> {
        let span = debug_span!("pack", container = container.name());
        let _guard = span.enter();

        let mut size = container.compute_size(SizeRequest::UNSPECIFIED)?;
        debug!(width = size.width, height = size.height, "first pass");

        if self.double_pack {
            size = container.compute_size(SizeRequest::width(size.width))?;
            debug!(width = size.width, height = size.height, "second pass");
        }

        container.set_size(size);
        Ok(size)
    }
}

/// A top-level window: a title, a root column, and the strategy that packs it.
pub struct Dialog {
    title: String,
    root: Column,
    packer: Box<dyn PackStrategy>,
    size: Option<Size>,
}

impl Dialog {
    pub fn new(title: impl Into<String>, root: Column, packer: impl PackStrategy + 'static) -> Self {
        Self {
            title: title.into(),
            root,
            packer: Box::new(packer),
            size: None,
        }
    }

    /// Pack the root column.
    ///
    /// A failed pack leaves the dialog without a size.
    pub fn pack(&mut self) -> Result<Size, LayoutError> {
        let size = self.packer.pack(&mut self.root)?;
        self.size = Some(size);
        Ok(size)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn root(&self) -> &Column {
        &self.root
    }

    /// The packed size, if [`pack`](Self::pack) has succeeded.
    pub fn size(&self) -> Option<Size> {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::Widget;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Records the requests it sees; height depends on the width it gets.
    struct Probe {
        calls: Rc<Cell<usize>>,
        fail: bool,
    }

    impl Widget for Probe {
        fn name(&self) -> &str {
            "probe"
        }

        fn compute_size(&self, request: SizeRequest) -> Result<Size, LayoutError> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                return Err(LayoutError::Overflow { what: "probe" });
            }
            Ok(match request.width {
                None => Size::new(20, 1),
                Some(width) => Size::new(width, 40u16.div_ceil(width.max(1))),
            })
        }
    }

    fn probe(fail: bool) -> (Probe, Rc<Cell<usize>>) {
        let calls = Rc::new(Cell::new(0));
        (
            Probe {
                calls: Rc::clone(&calls),
                fail,
            },
            calls,
        )
    }

    #[test]
    fn single_pass_uses_natural_size() {
        let (p, calls) = probe(false);
        let mut column = Column::new().child(p);
        let packer = TwoPassPacker::new(&Config::new().double_pack(false));
        assert_eq!(packer.pack(&mut column).unwrap(), Size::new(20, 1));
        assert_eq!(column.size(), Size::new(20, 1));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn double_pass_reflows_at_first_width() {
        let (p, calls) = probe(false);
        let mut column = Column::new().child(p);
        let packer = TwoPassPacker::default();
        assert!(packer.double_pack());
        assert_eq!(packer.pack(&mut column).unwrap(), Size::new(20, 2));
        assert_eq!(column.size(), Size::new(20, 2));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn failure_leaves_size_untouched() {
        let (p, _) = probe(true);
        let mut column = Column::new().child(p);
        column.set_size(Size::new(7, 7));
        let err = TwoPassPacker::default().pack(&mut column).unwrap_err();
        assert_eq!(err, LayoutError::Overflow { what: "probe" });
        assert_eq!(column.size(), Size::new(7, 7));
    }

    #[test]
    fn dialog_records_size_only_on_success() {
        let (ok, _) = probe(false);
        let mut dialog = Dialog::new("ok", Column::new().child(ok), TwoPassPacker::default());
        assert_eq!(dialog.size(), None);
        assert_eq!(dialog.pack().unwrap(), Size::new(20, 2));
        assert_eq!(dialog.size(), Some(Size::new(20, 2)));
        assert_eq!(dialog.root().size(), Size::new(20, 2));
        assert_eq!(dialog.title(), "ok");

        let (bad, _) = probe(true);
        let mut dialog = Dialog::new("bad", Column::new().child(bad), TwoPassPacker::default());
        assert!(dialog.pack().is_err());
        assert_eq!(dialog.size(), None);
    }
}
