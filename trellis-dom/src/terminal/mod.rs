use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::buffer::Buffer;
use crate::element::Element;
use crate::layout::{layout, LayoutResult, Rect};
use crate::render::render_to_buffer;
use crate::text::char_width;
use crate::types::{ColorContext, Rgb, TextStyle};

/// Raw-mode alternate-screen terminal that redraws by diffing frames.
///
/// The terminal is restored when this value is dropped.
pub struct Terminal {
    stdout: io::Stdout,
    current: Buffer,
    previous: Buffer,
    last_layout: LayoutResult,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture,
            event::EnableBracketedPaste
        )?;

        let (width, height) = terminal::size()?;
        log::debug!("terminal initialised at {width}x{height}");

        Ok(Self {
            stdout,
            current: Buffer::new(width, height),
            previous: Buffer::new(width, height),
            last_layout: LayoutResult::new(),
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.current.width(), self.current.height())
    }

    /// Wait up to `timeout` for input, then drain whatever else is pending.
    /// `None` blocks until at least one event arrives.
    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();

        let ready = match timeout {
            Some(dur) => event::poll(dur)?,
            None => true,
        };
        if ready {
            events.push(event::read()?);
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }

        Ok(events)
    }

    /// Lay out, draw and flush one frame. Returns the layout used, for hit testing.
    pub fn render(&mut self, root: &Element, colors: &ColorContext) -> io::Result<&LayoutResult> {
        let (width, height) = terminal::size()?;
        if (width, height) != self.size() {
            self.current = Buffer::new(width, height);
            // Blank cells are skipped by the diff, so the screen must be blank too.
            self.previous = Buffer::new(width, height);
            queue!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
        }

        self.current.clear();
        self.last_layout = layout(root, Rect::from_size(width, height));
        render_to_buffer(root, &self.last_layout, &mut self.current, colors);

        self.flush_diff()?;
        std::mem::swap(&mut self.current, &mut self.previous);

        Ok(&self.last_layout)
    }

    /// Get the layout from the last render.
    pub fn layout(&self) -> &LayoutResult {
        &self.last_layout
    }

    fn flush_diff(&mut self) -> io::Result<()> {
        let mut next_x = u16::MAX;
        let mut last_y = u16::MAX;
        let mut last_fg: Option<Rgb> = None;
        let mut last_bg: Option<Rgb> = None;
        let mut last_style: Option<TextStyle> = None;

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;

        for (x, y, cell) in self.current.diff(&self.previous) {
            if cell.wide_continuation {
                continue;
            }

            if y != last_y || x != next_x {
                queue!(self.stdout, cursor::MoveTo(x, y))?;
            }

            if last_fg != Some(cell.fg) {
                queue!(self.stdout, SetForegroundColor(to_crossterm(cell.fg)))?;
                last_fg = Some(cell.fg);
            }
            if last_bg != Some(cell.bg) {
                queue!(self.stdout, SetBackgroundColor(to_crossterm(cell.bg)))?;
                last_bg = Some(cell.bg);
            }
            if last_style != Some(cell.style) {
                // Attributes don't toggle off individually on every terminal;
                // reset and re-apply, then restore colours.
                queue!(self.stdout, SetAttribute(Attribute::Reset))?;
                for (on, attr) in [
                    (cell.style.bold, Attribute::Bold),
                    (cell.style.dim, Attribute::Dim),
                    (cell.style.italic, Attribute::Italic),
                    (cell.style.underline, Attribute::Underlined),
                ] {
                    if on {
                        queue!(self.stdout, SetAttribute(attr))?;
                    }
                }
                queue!(
                    self.stdout,
                    SetForegroundColor(to_crossterm(cell.fg)),
                    SetBackgroundColor(to_crossterm(cell.bg))
                )?;
                last_style = Some(cell.style);
            }

            write!(self.stdout, "{}", cell.char)?;

            last_y = y;
            next_x = x.saturating_add(char_width(cell.char).max(1) as u16);
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()
    }
}

fn to_crossterm(rgb: Rgb) -> CtColor {
    CtColor::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableBracketedPaste,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
