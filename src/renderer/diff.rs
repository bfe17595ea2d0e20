//! Differential renderer.
//!
//! Compares each frame with the previous one and writes only the cells that
//! changed, wrapped in a synchronized-output block and flushed in a single
//! write. A size change or [`invalidate`](DiffRenderer::invalidate) forces a
//! full redraw.

use std::io::{self, Stdout, Write};

use super::ansi;
use super::buffer::FrameBuffer;
use super::output::{OutputBuffer, StatefulCellRenderer};

pub struct DiffRenderer<W: Write = Stdout> {
    sink: W,
    output: OutputBuffer,
    cell_renderer: StatefulCellRenderer,
    previous: Option<FrameBuffer>,
}

impl DiffRenderer<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> DiffRenderer<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            output: OutputBuffer::new(),
            cell_renderer: StatefulCellRenderer::new(),
            previous: None,
        }
    }

    /// Write the cells that differ from the last frame.
    ///
    /// Returns the number of cells written.
    pub fn render(&mut self, buffer: &FrameBuffer) -> io::Result<usize> {
        let comparable = self
            .previous
            .as_ref()
            .filter(|prev| prev.width() == buffer.width() && prev.height() == buffer.height());

        ansi::begin_sync(&mut self.output)?;
        self.cell_renderer.reset();

        let mut changed = 0;
        for y in 0..buffer.height() {
            for x in 0..buffer.width() {
                let Some(cell) = buffer.get(x, y) else {
                    continue;
                };
                if comparable.and_then(|prev| prev.get(x, y)) == Some(cell) {
                    continue;
                }
                self.cell_renderer.render_cell(&mut self.output, x, y, cell)?;
                changed += 1;
            }
        }

        ansi::end_sync(&mut self.output)?;
        self.output.flush_to(&mut self.sink)?;
        self.previous = Some(buffer.clone());
        Ok(changed)
    }

    /// Next render redraws every cell.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    pub fn sink(&self) -> &W {
        &self.sink
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Attr, Rgba};

    fn renderer() -> DiffRenderer<Vec<u8>> {
        DiffRenderer::new(Vec::new())
    }

    #[test]
    fn test_first_render_writes_every_cell() {
        let mut r = renderer();
        let buf = FrameBuffer::new(4, 3);
        assert_eq!(r.render(&buf).unwrap(), 12);
        assert!(r.has_previous());
    }

    #[test]
    fn test_unchanged_frame_writes_nothing() {
        let mut r = renderer();
        let buf = FrameBuffer::new(4, 3);
        r.render(&buf).unwrap();
        assert_eq!(r.render(&buf).unwrap(), 0);
    }

    #[test]
    fn test_only_changed_cells_written() {
        let mut r = renderer();
        let mut buf = FrameBuffer::new(10, 2);
        r.render(&buf).unwrap();

        buf.draw_text(3, 1, "ok", Rgba::ansi(2), None, Attr::NONE);
        let before = r.sink().len();
        assert_eq!(r.render(&buf).unwrap(), 2);

        let written = String::from_utf8_lossy(&r.sink()[before..]).to_string();
        assert!(written.contains("\x1b[2;4H"));
        assert!(written.contains("ok"));
    }

    #[test]
    fn test_resize_forces_full_redraw() {
        let mut r = renderer();
        r.render(&FrameBuffer::new(4, 2)).unwrap();
        assert_eq!(r.render(&FrameBuffer::new(5, 2)).unwrap(), 10);
    }

    #[test]
    fn test_invalidate_forces_full_redraw() {
        let mut r = renderer();
        let buf = FrameBuffer::new(3, 1);
        r.render(&buf).unwrap();
        r.invalidate();
        assert_eq!(r.render(&buf).unwrap(), 3);
    }

    #[test]
    fn test_output_wrapped_in_sync_block() {
        let mut r = renderer();
        r.render(&FrameBuffer::new(1, 1)).unwrap();
        let out = String::from_utf8_lossy(r.sink()).to_string();
        assert!(out.starts_with("\x1b[?2026h"));
        assert!(out.ends_with("\x1b[?2026l"));
    }
}
