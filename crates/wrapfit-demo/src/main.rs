#![forbid(unsafe_code)]

//! Label wrapping demo.
//!
//! Packs a dialog holding a long help label above a button and draws it at
//! the packed size. Sizing is controlled by the `WRAPFIT_*` variables.
//!
//! # Running
//!
//! ```sh
//! WRAPFIT_HINT_MODE=proportional RUST_LOG=debug cargo run -p wrapfit-demo
//! ```

use std::io::{self, Write};
use std::process::ExitCode;
use std::rc::Rc;

use crossterm::queue;
use crossterm::style::{Print, Stylize};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use wrapfit::prelude::*;
use wrapfit::{LayoutError, Sides, TextMeasurer, display_width};

const TITLE: &str = "Label Wrapping";
const HELP_TEXT: &str =
    "What is the best way to put a label with long text in UI, like some help text?";
const BUTTON: &str = "Got it";

/// Exit status for rejected configuration.
const EXIT_CONFIG: u8 = 2;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(errors) => {
            for err in &errors {
                eprintln!("wrapfit-demo: {err}");
            }
            return ExitCode::from(EXIT_CONFIG);
        }
    };
    info!(config = %config.summary_short(), "starting");

    match run(&config) {
        Ok(size) => {
            info!(width = size.width, height = size.height, "dialog packed");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "demo failed");
            eprintln!("wrapfit-demo: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<Size> {
    let measurer = Rc::new(CellMeasurer::new());
    let root = help_column(config, &measurer);
    let mut dialog = Dialog::new(TITLE, root, TwoPassPacker::new(config));
    let size = dialog.pack()?;

    let margin = dialog.root().margin_sides();
    let frame = Frame::layout(&*measurer, size, margin, HELP_TEXT, BUTTON)?;
    let mut out = io::stdout().lock();
    frame.draw(&mut out, dialog.title())?;
    out.flush()?;
    Ok(size)
}

/// The help label above the button, one cell of margin left and right.
fn help_column(config: &Config, measurer: &Rc<CellMeasurer>) -> Column {
    Column::new()
        .child(
            WrappingLabel::new(Rc::clone(measurer), HELP_TEXT, SizeHintPolicy::new(config))
                .named("help"),
        )
        .child(Button::new(Rc::clone(measurer), BUTTON).named("ok"))
        .gap(1)
        .margin(Sides::horizontal(1))
}

/// Text rows of a packed dialog, ready to draw inside a border.
///
/// Widths are in cells: the demo measures with one unit per cell.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Frame {
    width: usize,
    margin: Sides,
    label: Vec<String>,
    button: String,
}

impl Frame {
    /// Lay the label out at the column's inner width, with the same measurer
    /// that sized it, and center the button under it.
    fn layout(
        measurer: &impl TextMeasurer,
        size: Size,
        margin: Sides,
        text: &str,
        button: &str,
    ) -> wrapfit::Result<Self> {
        let inner = size.inset(margin);
        let block = measurer
            .measure_wrapped(text, Some(inner.width.max(1)))
            .map_err(|err| LayoutError::Measure {
                widget: "help".to_string(),
                source: err,
            })?;
        Ok(Self {
            width: usize::from(size.width),
            margin,
            label: block.lines,
            button: format!("[ {button} ]"),
        })
    }

    fn inner_width(&self) -> usize {
        self.width
            .saturating_sub(usize::from(self.margin.horizontal_sum()))
    }

    /// Rows between the borders: label lines, a blank gap, the button.
    fn rows(&self) -> Vec<String> {
        let mut rows: Vec<String> = self.label.iter().map(|line| self.pad(line)).collect();
        rows.push(" ".repeat(self.width));
        let fill = self.inner_width().saturating_sub(display_width(&self.button));
        let left = fill / 2;
        let button = format!("{}{}", " ".repeat(left), self.button);
        rows.push(self.pad(&button));
        rows
    }

    /// Indent by the left margin and fill to the full width.
    fn pad(&self, line: &str) -> String {
        let indent = usize::from(self.margin.left);
        let fill = self.width.saturating_sub(indent + display_width(line));
        format!("{}{line}{}", " ".repeat(indent), " ".repeat(fill))
    }

    fn draw(&self, out: &mut impl Write, title: &str) -> io::Result<()> {
        let rule = "─".repeat(self.width);
        queue!(out, Print(title.bold()), Print("\r\n"))?;
        queue!(out, Print(format!("┌{rule}┐\r\n")))?;
        let rows = self.rows();
        let last = rows.len().saturating_sub(1);
        for (idx, row) in rows.iter().enumerate() {
            if idx == last {
                queue!(out, Print("│"), Print(row.as_str().reverse()), Print("│\r\n"))?;
            } else {
                queue!(out, Print(format!("│{row}│\r\n")))?;
            }
        }
        queue!(out, Print(format!("└{rule}┘\r\n")))?;
        Ok(())
    }
}
