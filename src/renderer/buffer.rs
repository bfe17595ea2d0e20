//! FrameBuffer and drawing primitives.
//!
//! A 2D grid of [`Cell`]s in row-major order (`index = y * width + x`).
//! Every drawing call clips to the buffer bounds; out-of-range writes are
//! dropped, never panics.

use crate::types::{Attr, Cell, Rgba};

#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    /// Buffer filled with default (blank) cells.
    pub fn new(width: u16, height: u16) -> Self {
        Self::with_background(width, height, Rgba::TERMINAL_DEFAULT)
    }

    pub fn with_background(width: u16, height: u16, bg: Rgba) -> Self {
        let cell = Cell {
            bg,
            ..Cell::default()
        };
        Self {
            width,
            height,
            cells: vec![cell; width as usize * height as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    pub fn in_bounds(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if self.in_bounds(x, y) {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    // =========================================================================
    // Drawing
    // =========================================================================

    /// Returns true if the cell was inside the buffer.
    pub fn set_cell(&mut self, x: u16, y: u16, cell: Cell) -> bool {
        match self.get_mut(x, y) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    /// Draw one character. `bg: None` keeps the background already there.
    pub fn draw_char(
        &mut self,
        x: u16,
        y: u16,
        ch: char,
        fg: Rgba,
        bg: Option<Rgba>,
        attrs: Attr,
    ) -> bool {
        match self.get_mut(x, y) {
            Some(cell) => {
                cell.char = ch;
                cell.fg = fg;
                if let Some(bg) = bg {
                    cell.bg = bg;
                }
                cell.attrs = attrs;
                true
            }
            None => false,
        }
    }

    /// Draw text left to right, truncated at the right edge.
    ///
    /// Returns the number of columns written. Control characters are skipped.
    pub fn draw_text(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        fg: Rgba,
        bg: Option<Rgba>,
        attrs: Attr,
    ) -> u16 {
        let mut col = x;
        for ch in text.chars().filter(|c| !c.is_control()) {
            if !self.draw_char(col, y, ch, fg, bg, attrs) {
                break;
            }
            col += 1;
        }
        col - x
    }

    /// Draw text centered in `[x, x + width)`.
    pub fn draw_text_centered(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        text: &str,
        fg: Rgba,
        attrs: Attr,
    ) -> u16 {
        let len = text_width(text);
        let offset = width.saturating_sub(len) / 2;
        self.draw_text(x + offset, y, text, fg, None, attrs)
    }

    /// Fill a rectangle with blank cells of background `bg`.
    pub fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16, bg: Rgba) {
        let x2 = x.saturating_add(width).min(self.width);
        let y2 = y.saturating_add(height).min(self.height);
        for row in y..y2 {
            for col in x..x2 {
                let idx = self.index(col, row);
                self.cells[idx] = Cell {
                    bg,
                    ..Cell::default()
                };
            }
        }
    }

    /// Characters of row `y` with trailing blanks trimmed.
    pub fn row_text(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        let start = self.index(0, y);
        let end = start + self.width as usize;
        let row: String = self.cells[start..end].iter().map(|c| c.char).collect();
        row.trim_end().to_string()
    }
}

/// Columns a string occupies. Every non-control char counts as one.
pub fn text_width(text: &str) -> u16 {
    text.chars().filter(|c| !c.is_control()).count().min(u16::MAX as usize) as u16
}

// =============================================================================
// Tests
// =============================================================================
