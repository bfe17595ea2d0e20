//! Screen composition.
//!
//! [`compose_screen`] turns the controller state into a [`FrameBuffer`]. It is
//! a pure function of its inputs; the render pipeline calls it from a derived
//! and diffs the result against the previous frame.
//!
//! ```text
//!  0  title
//!  1  subtitle
//!  3  algorithm picker
//!  4  speed / size
//!  6  ┐
//!     │ bar chart
//! -5  ┘
//! -4  legend
//! -3  status
//! -1  key help
//! ```

pub mod chart;
pub mod panels;
pub mod text;

pub use chart::{bar_eighths, draw_bars, Rect};
pub use text::frame_line;

use crate::playback::PlaybackController;
use crate::renderer::FrameBuffer;
use crate::theme::Palette;
use crate::types::Attr;

pub const MIN_WIDTH: u16 = 40;
pub const MIN_HEIGHT: u16 = 14;

const CHART_TOP: u16 = 6;
const CHART_MARGIN_X: u16 = 2;
/// Rows below the chart: gap, legend, status, gap, help.
const FOOTER_ROWS: u16 = 5;

/// Chart rectangle for a screen of the given size.
pub fn chart_area(width: u16, height: u16) -> Rect {
    Rect::new(
        CHART_MARGIN_X,
        CHART_TOP,
        width.saturating_sub(CHART_MARGIN_X * 2),
        height.saturating_sub(CHART_TOP + FOOTER_ROWS),
    )
}

/// Draw the whole screen for the controller's current frame.
pub fn compose_screen(
    ctl: &PlaybackController,
    palette: &Palette,
    width: u16,
    height: u16,
) -> FrameBuffer {
    let mut buf = FrameBuffer::with_background(width, height, palette.background);

    if width < MIN_WIDTH || height < MIN_HEIGHT {
        let msg = format!("Terminal too small ({}x{})", width, height);
        buf.draw_text_centered(0, height / 2, width, &msg, palette.text_muted, Attr::NONE);
        return buf;
    }

    panels::draw_header(&mut buf, 0, palette);
    panels::draw_algorithm_picker(&mut buf, 3, ctl, palette);
    panels::draw_settings(&mut buf, 4, ctl, palette);

    let frame = ctl.current_frame();
    draw_bars(&mut buf, chart_area(width, height), &frame, ctl.scale_max(), palette);

    panels::draw_legend(&mut buf, height - 4, palette);
    panels::draw_status(&mut buf, height - 3, ctl, palette);
    panels::draw_key_help(&mut buf, height - 1, ctl, palette);

    buf
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::Algorithm;

    fn setup() -> (PlaybackController, Palette) {
        (
            PlaybackController::with_array(Algorithm::Bubble, vec![10, 100, 40, 70]),
            Palette::default(),
        )
    }

    #[test]
    fn test_chart_area() {
        assert_eq!(chart_area(80, 24), Rect::new(2, 6, 76, 13));
    }

    #[test]
    fn test_compose_screen_layout() {
        let (ctl, palette) = setup();
        let buf = compose_screen(&ctl, &palette, 80, 24);

        assert!(buf.row_text(0).contains("Sorting Visualizer"));
        assert!(buf.row_text(3).contains("Bubble Sort"));
        assert!(buf.row_text(20).contains("Comparing"));
        assert!(buf.row_text(21).contains("Step: 0"));
    }

    #[test]
    fn test_compose_screen_tallest_bar_reaches_top() {
        let (ctl, palette) = setup();
        let buf = compose_screen(&ctl, &palette, 80, 24);
        let area = chart_area(80, 24);

        // Value 100 is the second of four bars.
        let x = area.x + area.width * 3 / 8;
        assert_eq!(buf.get(x, area.y).unwrap().char, '█');
        assert_eq!(buf.get(x, area.bottom() - 1).unwrap().fg, palette.unsorted);
    }

    #[test]
    fn test_compose_screen_follows_playback() {
        let (mut ctl, palette) = setup();
        ctl.step_forward();
        let buf = compose_screen(&ctl, &palette, 80, 24);
        let area = chart_area(80, 24);

        // Frame 1 is the second recorded step, comparing bars 1 and 2.
        let x = area.x + area.width * 3 / 8;
        assert_eq!(buf.get(x, area.bottom() - 1).unwrap().fg, palette.comparing);
        assert!(buf.row_text(21).contains("Step: 1 /"));
    }

    #[test]
    fn test_compose_screen_too_small() {
        let (ctl, palette) = setup();
        let buf = compose_screen(&ctl, &palette, 30, 10);
        assert!(buf.row_text(5).contains("Terminal too small"));
    }
}
