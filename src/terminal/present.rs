//! Presenter: turn buffer changes into one write of terminal commands.
//!
//! The presenter remembers the last frame it emitted. Each call compares
//! the new frame against it cell by cell and queues crossterm commands for
//! the cells that changed. Cursor position, colors and attributes are
//! tracked so redundant sequences are skipped. The whole frame goes out in
//! a single `write_all` to avoid tearing.

use crate::buffer::{Buffer, Cell, Modifiers, Rgb};
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

/// What the terminal currently has set, as far as we know.
#[derive(Debug, Clone, Copy, Default)]
struct Pen {
    cursor: Option<(u16, u16)>,
    fg: Option<Rgb>,
    bg: Option<Rgb>,
    modifiers: Option<Modifiers>,
}

/// Statistics about one presented frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Cells that were emitted.
    pub cells_changed: usize,
    /// Bytes written to the terminal.
    pub bytes: usize,
    /// Whether the frame was a full redraw.
    pub full_redraw: bool,
}

/// Diffing frame writer.
#[derive(Debug, Default)]
pub struct Presenter {
    previous: Option<Buffer>,
    output: Vec<u8>,
    pen: Pen,
}

const fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

impl Presenter {
    /// Create a presenter that will fully redraw its first frame.
    pub fn new() -> Self {
        Self {
            previous: None,
            output: Vec::with_capacity(16 * 1024),
            pen: Pen::default(),
        }
    }

    /// Forget the last frame so the next one is a full redraw.
    ///
    /// Call after a resize or anything else that disturbs the screen.
    pub fn invalidate(&mut self) {
        self.previous = None;
        self.pen = Pen::default();
    }

    /// Encode `next` and write it to `out` in one call.
    pub fn present<W: Write>(&mut self, next: &Buffer, out: &mut W) -> io::Result<FrameStats> {
        let mut stats = self.encode(next)?;
        out.write_all(&self.output)?;
        out.flush()?;
        stats.bytes = self.output.len();
        Ok(stats)
    }

    /// Encode `next` into the internal byte buffer and return it.
    pub fn encode_frame(&mut self, next: &Buffer) -> io::Result<&[u8]> {
        self.encode(next)?;
        Ok(&self.output)
    }

    fn encode(&mut self, next: &Buffer) -> io::Result<FrameStats> {
        self.output.clear();

        let previous = self
            .previous
            .take()
            .filter(|prev| prev.width() == next.width() && prev.height() == next.height());
        let full_redraw = previous.is_none();

        if full_redraw {
            self.pen = Pen::default();
            queue!(self.output, SetAttribute(Attribute::Reset), Clear(ClearType::All))?;
        }

        let mut stats = FrameStats {
            full_redraw,
            ..FrameStats::default()
        };

        for y in 0..next.height() {
            for x in 0..next.width() {
                let Some(cell) = next.get(x, y) else {
                    continue;
                };
                if cell.is_wide_continuation() {
                    continue;
                }
                if previous.as_ref().and_then(|prev| prev.get(x, y)) == Some(cell) {
                    continue;
                }
                self.emit_cell(x, y, cell)?;
                stats.cells_changed += 1;
            }
        }

        queue!(self.output, SetAttribute(Attribute::Reset))?;
        self.pen.fg = None;
        self.pen.bg = None;
        self.pen.modifiers = None;

        self.previous = Some(next.clone());
        Ok(stats)
    }

    fn emit_cell(&mut self, x: u16, y: u16, cell: &Cell) -> io::Result<()> {
        if self.pen.cursor != Some((x, y)) {
            queue!(self.output, MoveTo(x, y))?;
        }

        // Attributes can only be cleared all at once, which also clears colors
        let current = self.pen.modifiers.unwrap_or_else(Modifiers::empty);
        if !current.difference(cell.modifiers()).is_empty() {
            queue!(self.output, SetAttribute(Attribute::Reset))?;
            self.pen.fg = None;
            self.pen.bg = None;
            self.pen.modifiers = None;
        }

        if self.pen.fg != Some(cell.fg()) {
            queue!(self.output, SetForegroundColor(to_color(cell.fg())))?;
            self.pen.fg = Some(cell.fg());
        }
        if self.pen.bg != Some(cell.bg()) {
            queue!(self.output, SetBackgroundColor(to_color(cell.bg())))?;
            self.pen.bg = Some(cell.bg());
        }

        let have = self.pen.modifiers.unwrap_or_else(Modifiers::empty);
        let added = cell.modifiers().difference(have);
        for (flag, attribute) in [
            (Modifiers::BOLD, Attribute::Bold),
            (Modifiers::DIM, Attribute::Dim),
            (Modifiers::ITALIC, Attribute::Italic),
            (Modifiers::UNDERLINE, Attribute::Underlined),
            (Modifiers::REVERSED, Attribute::Reverse),
            (Modifiers::STRIKETHROUGH, Attribute::CrossedOut),
        ] {
            if added.contains(flag) {
                queue!(self.output, SetAttribute(attribute))?;
            }
        }
        self.pen.modifiers = Some(cell.modifiers());

        let symbol = if cell.symbol().is_empty() { " " } else { cell.symbol() };
        queue!(self.output, Print(symbol))?;

        let advance = u16::from(cell.display_width().max(1));
        self.pen.cursor = Some((x.saturating_add(advance), y));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Style;

    fn contains(haystack: &[u8], needle: &str) -> bool {
        haystack
            .windows(needle.len())
            .any(|w| w == needle.as_bytes())
    }

    #[test]
    fn test_first_frame_is_full_redraw() {
        let mut presenter = Presenter::new();
        let mut buffer = Buffer::new(10, 2);
        buffer.set_grapheme(0, 0, "H", Style::default());

        let mut out = Vec::new();
        let stats = presenter.present(&buffer, &mut out).unwrap();
        assert!(stats.full_redraw);
        assert_eq!(stats.cells_changed, 20);
        assert_eq!(stats.bytes, out.len());
        assert!(contains(&out, "\x1b[2J"));
        assert!(contains(&out, "H"));
    }

    #[test]
    fn test_unchanged_frame_emits_no_cells() {
        let mut presenter = Presenter::new();
        let buffer = Buffer::new(10, 2);
        let mut out = Vec::new();
        presenter.present(&buffer, &mut out).unwrap();

        out.clear();
        let stats = presenter.present(&buffer, &mut out).unwrap();
        assert!(!stats.full_redraw);
        assert_eq!(stats.cells_changed, 0);
    }

    #[test]
    fn test_only_changed_cells_emitted() {
        let mut presenter = Presenter::new();
        let mut buffer = Buffer::new(10, 2);
        presenter.encode_frame(&buffer).unwrap();

        buffer.set_grapheme(4, 1, "Z", Style::new(Rgb::new(1, 2, 3), Rgb::BLACK));
        let mut out = Vec::new();
        let stats = presenter.present(&buffer, &mut out).unwrap();
        assert_eq!(stats.cells_changed, 1);
        assert!(contains(&out, "Z"));
        assert!(contains(&out, "38;2;1;2;3"));
        // MoveTo is 1-indexed on the wire
        assert!(contains(&out, "\x1b[2;5H"));
    }

    #[test]
    fn test_invalidate_forces_full_redraw() {
        let mut presenter = Presenter::new();
        let buffer = Buffer::new(4, 1);
        presenter.encode_frame(&buffer).unwrap();
        presenter.invalidate();

        let mut out = Vec::new();
        assert!(presenter.present(&buffer, &mut out).unwrap().full_redraw);
    }

    #[test]
    fn test_resized_frame_is_full_redraw() {
        let mut presenter = Presenter::new();
        presenter.encode_frame(&Buffer::new(4, 1)).unwrap();

        let mut out = Vec::new();
        let stats = presenter.present(&Buffer::new(6, 1), &mut out).unwrap();
        assert!(stats.full_redraw);
        assert_eq!(stats.cells_changed, 6);
    }
}
