//! Text rows around the chart: header, algorithm picker, settings, legend,
//! status and key help.

use crate::algorithms::Algorithm;
use crate::playback::PlaybackController;
use crate::renderer::{text_width, FrameBuffer};
use crate::theme::{BarRole, Palette};
use crate::types::{Attr, Rgba};

pub const TITLE: &str = "Sorting Visualizer";
pub const SUBTITLE: &str = "Interactive tool to visualize sorting algorithms";

const LEGEND_SWATCH: char = '■';

pub fn draw_header(buf: &mut FrameBuffer, y: u16, palette: &Palette) {
    let width = buf.width();
    buf.draw_text_centered(0, y, width, TITLE, palette.title, Attr::BOLD);
    buf.draw_text_centered(0, y + 1, width, SUBTITLE, palette.text_muted, Attr::NONE);
}

/// `1 Bubble Sort  2 Insertion Sort ...`, current choice inverted in its
/// accent color. Dimmed while the choice is locked.
pub fn draw_algorithm_picker(
    buf: &mut FrameBuffer,
    y: u16,
    ctl: &PlaybackController,
    palette: &Palette,
) {
    let enabled = ctl.can_edit_input();
    let labels: Vec<String> = Algorithm::ALL
        .iter()
        .enumerate()
        .map(|(i, a)| format!(" {} {} ", i + 1, a.display_name()))
        .collect();
    let total: u16 = labels.iter().map(|l| text_width(l) + 1).sum();
    let mut x = buf.width().saturating_sub(total) / 2;

    for (algorithm, label) in Algorithm::ALL.iter().zip(&labels) {
        let accent = palette.accent(*algorithm);
        let (fg, attrs) = if *algorithm == ctl.algorithm() {
            (accent, Attr::INVERSE | Attr::BOLD)
        } else if enabled {
            (accent, Attr::NONE)
        } else {
            (palette.text_disabled, Attr::NONE)
        };
        x += buf.draw_text(x, y, label, fg, None, attrs) + 1;
    }
}

/// Speed multiplier and array size.
pub fn draw_settings(buf: &mut FrameBuffer, y: u16, ctl: &PlaybackController, palette: &Palette) {
    let size_fg = if ctl.can_edit_input() {
        palette.text
    } else {
        palette.text_disabled
    };
    let speed = format!("Speed: {:.1}x", ctl.speed().multiplier());
    let size = format!("Array Size: {} elements", ctl.array_size());

    let total = text_width(&speed) + 4 + text_width(&size);
    let x = buf.width().saturating_sub(total) / 2;
    let used = buf.draw_text(x, y, &speed, palette.text, None, Attr::NONE);
    buf.draw_text(x + used + 4, y, &size, size_fg, None, Attr::NONE);
}

pub fn draw_legend(buf: &mut FrameBuffer, y: u16, palette: &Palette) {
    let total: u16 = BarRole::LEGEND
        .iter()
        .map(|role| 2 + text_width(role.label()) + 3)
        .sum::<u16>()
        .saturating_sub(3);
    let mut x = buf.width().saturating_sub(total) / 2;

    for role in BarRole::LEGEND {
        let swatch = LEGEND_SWATCH.to_string();
        x += buf.draw_text(x, y, &swatch, palette.bar(role), None, Attr::NONE) + 1;
        x += buf.draw_text(x, y, role.label(), palette.text, None, Attr::NONE) + 3;
    }
}

/// `Step: n / m   [ Start ]   Bubble Sort`
pub fn draw_status(buf: &mut FrameBuffer, y: u16, ctl: &PlaybackController, palette: &Palette) {
    let progress = ctl.progress_label();
    let button = format!("[ {} ]", ctl.play_label());
    let name = ctl.algorithm().display_name();

    let total = text_width(&progress) + 3 + text_width(&button) + 3 + text_width(name);
    let mut x = buf.width().saturating_sub(total) / 2;

    x += buf.draw_text(x, y, &progress, palette.text_muted, None, Attr::NONE) + 3;
    let button_fg = if ctl.can_start() || ctl.is_playing() {
        palette.text
    } else {
        palette.sorted
    };
    x += buf.draw_text(x, y, &button, button_fg, None, Attr::BOLD) + 3;
    buf.draw_text(x, y, name, palette.accent(ctl.algorithm()), None, Attr::BOLD);
}

/// Key help. Entries whose control is disabled are dimmed.
pub fn draw_key_help(buf: &mut FrameBuffer, y: u16, ctl: &PlaybackController, palette: &Palette) {
    let editable = ctl.can_edit_input();
    let entries: [(&str, bool); 8] = [
        ("space play", ctl.can_start() || ctl.is_playing()),
        ("→ step", ctl.can_step_forward()),
        ("r reset", ctl.can_reset_to_beginning()),
        ("g new", editable),
        ("1-5 algo", editable),
        ("+/- speed", true),
        ("[/] size", editable),
        ("t theme  q quit", true),
    ];

    let total: u16 = entries
        .iter()
        .map(|(label, _)| text_width(label) + 2)
        .sum::<u16>()
        .saturating_sub(2);
    let mut x = buf.width().saturating_sub(total) / 2;

    for (label, enabled) in entries {
        let fg: Rgba = if enabled {
            palette.text_muted
        } else {
            palette.text_disabled
        };
        let attrs = if enabled { Attr::NONE } else { Attr::DIM };
        x += buf.draw_text(x, y, label, fg, None, attrs) + 2;
    }
}
