//! Bar chart.
//!
//! One bar per array element, bottom aligned. Heights are in eighths of a
//! cell so the top of each bar uses a partial block glyph.

use crate::renderer::FrameBuffer;
use crate::theme::{BarRole, Palette};
use crate::trace::Step;
use crate::types::{Attr, Rgba};

/// Partial tops, index = eighths filled.
const EIGHTHS: [char; 9] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Screen rectangle in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn bottom(&self) -> u16 {
        self.y + self.height
    }
}

/// Height of a bar in eighths of a cell.
///
/// Proportional to `value / scale_max`. Positive values always get at least
/// one eighth so they stay visible.
pub fn bar_eighths(value: i32, scale_max: i32, rows: u16) -> u32 {
    if value <= 0 || rows == 0 {
        return 0;
    }
    let scale = scale_max.max(1) as u64;
    let full = rows as u64 * 8;
    let eighths = (value as u64 * full / scale).min(full);
    eighths.max(1) as u32
}

/// Which bar column `x` (0-based inside the chart) belongs to, and whether it
/// is the gap column at the bar's right edge.
fn column_owner(x: u16, width: u16, bars: usize) -> (usize, bool) {
    let index = x as usize * bars / width as usize;
    let end = ((index + 1) * width as usize).div_ceil(bars);
    let start = (index * width as usize).div_ceil(bars);
    let span = end - start;
    let is_gap = span >= 3 && x as usize + 1 == end;
    (index, is_gap)
}

/// Draw `step` into `area`.
pub fn draw_bars(
    buf: &mut FrameBuffer,
    area: Rect,
    step: &Step,
    scale_max: i32,
    palette: &Palette,
) {
    buf.fill_rect(area.x, area.y, area.width, area.height, palette.chart_background);

    let bars = step.len();
    if bars == 0 || area.width == 0 || area.height == 0 {
        return;
    }

    for col in 0..area.width {
        let (index, is_gap) = column_owner(col, area.width, bars);
        if is_gap {
            continue;
        }

        let color = palette.bar(BarRole::of(step, index));
        let eighths = bar_eighths(step.array()[index], scale_max, area.height);
        draw_column(buf, area, area.x + col, eighths, color, palette.chart_background);
    }
}

fn draw_column(buf: &mut FrameBuffer, area: Rect, x: u16, eighths: u32, fg: Rgba, bg: Rgba) {
    let full_rows = (eighths / 8) as u16;
    let partial = (eighths % 8) as usize;

    for row in 0..full_rows {
        buf.draw_char(x, area.bottom() - 1 - row, EIGHTHS[8], fg, Some(bg), Attr::NONE);
    }
    if partial > 0 && full_rows < area.height {
        buf.draw_char(x, area.bottom() - 1 - full_rows, EIGHTHS[partial], fg, Some(bg), Attr::NONE);
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_eighths_proportional() {
        assert_eq!(bar_eighths(100, 100, 10), 80);
        assert_eq!(bar_eighths(50, 100, 10), 40);
        assert_eq!(bar_eighths(1, 100, 10), 1);
    }

    #[test]
    fn test_bar_eighths_edge_cases() {
        assert_eq!(bar_eighths(0, 100, 10), 0);
        assert_eq!(bar_eighths(-3, 100, 10), 0);
        assert_eq!(bar_eighths(10, 100, 0), 0);
        // Values above the scale are capped.
        assert_eq!(bar_eighths(200, 100, 4), 32);
    }

    #[test]
    fn test_column_owner_wide_bars_have_gaps() {
        // 4 bars over 12 columns: 3 columns each, last one is a gap.
        assert_eq!(column_owner(0, 12, 4), (0, false));
        assert_eq!(column_owner(2, 12, 4), (0, true));
        assert_eq!(column_owner(3, 12, 4), (1, false));
        assert_eq!(column_owner(11, 12, 4), (3, true));
    }

    #[test]
    fn test_column_owner_narrow_bars_no_gaps() {
        assert_eq!(column_owner(0, 4, 4), (0, false));
        assert_eq!(column_owner(3, 4, 4), (3, false));
        // More bars than columns: some bars are skipped.
        assert_eq!(column_owner(1, 2, 4), (2, false));
    }

    #[test]
    fn test_draw_bars_heights_and_colors() {
        let palette = Palette::default();
        let step = Step::new(&[100, 50], &[1], &[], &[], None);
        let mut buf = FrameBuffer::new(2, 4);

        draw_bars(&mut buf, Rect::new(0, 0, 2, 4), &step, 100, &palette);

        // Tallest bar fills the column.
        for y in 0..4 {
            assert_eq!(buf.get(0, y).unwrap().char, '█');
            assert_eq!(buf.get(0, y).unwrap().fg, palette.unsorted);
        }
        // Half-height bar in the comparing color.
        assert_eq!(buf.get(1, 1).unwrap().char, ' ');
        assert_eq!(buf.get(1, 2).unwrap().char, '█');
        assert_eq!(buf.get(1, 3).unwrap().fg, palette.comparing);
    }

    #[test]
    fn test_draw_bars_partial_top() {
        let palette = Palette::default();
        let step = Step::initial(&[100, 25]);
        let mut buf = FrameBuffer::new(2, 3);

        draw_bars(&mut buf, Rect::new(0, 0, 2, 3), &step, 100, &palette);

        // 25% of 24 eighths = 6 eighths: no full rows, one partial.
        assert_eq!(buf.get(1, 2).unwrap().char, '▆');
        assert_eq!(buf.get(1, 1).unwrap().char, ' ');
    }

    #[test]
    fn test_draw_bars_empty_step() {
        let palette = Palette::default();
        let mut buf = FrameBuffer::new(3, 3);
        draw_bars(&mut buf, Rect::new(0, 0, 3, 3), &Step::default(), 100, &palette);
        assert!(buf.cells().iter().all(|c| c.char == ' '));
    }
}
