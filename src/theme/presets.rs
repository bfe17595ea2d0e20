//! Built-in palettes.
//!
//! - default (the web visualizer's purple/yellow/red/green)
//! - terminal (ANSI, follows the terminal scheme)
//! - dracula
//! - nord

use super::Palette;
use crate::types::Rgba;

// =============================================================================
// Default
// =============================================================================

pub fn default_palette() -> Palette {
    Palette {
        name: "default".to_string(),
        description: "Purple bars, yellow compares, red swaps, green sorted".to_string(),
        unsorted: Rgba::from_rgb_int(0xa855f7),  // purple-500
        comparing: Rgba::from_rgb_int(0xfacc15), // yellow-400
        swapping: Rgba::from_rgb_int(0xef4444),  // red-500
        sorted: Rgba::from_rgb_int(0x22c55e),    // green-500
        pivot: Rgba::from_rgb_int(0x6b21a8),     // purple-800
        title: Rgba::from_rgb_int(0xa855f7),
        text: Rgba::TERMINAL_DEFAULT,
        text_muted: Rgba::from_rgb_int(0x94a3b8),
        text_disabled: Rgba::from_rgb_int(0x475569),
        background: Rgba::TERMINAL_DEFAULT,
        chart_background: Rgba::TERMINAL_DEFAULT,
        accents: [
            Rgba::from_rgb_int(0x3b82f6), // bubble
            Rgba::from_rgb_int(0x10b981), // insertion
            Rgba::from_rgb_int(0xf59e0b), // selection
            Rgba::from_rgb_int(0xec4899), // merge
            Rgba::from_rgb_int(0x8b5cf6), // quick
        ],
    }
}

// =============================================================================
// Terminal
// =============================================================================

pub fn terminal() -> Palette {
    Palette {
        name: "terminal".to_string(),
        description: "Uses the terminal's ANSI colors".to_string(),
        unsorted: Rgba::ansi(13),
        comparing: Rgba::ansi(11),
        swapping: Rgba::ansi(9),
        sorted: Rgba::ansi(10),
        pivot: Rgba::ansi(5),
        title: Rgba::ansi(13),
        text: Rgba::TERMINAL_DEFAULT,
        text_muted: Rgba::ansi(8),
        text_disabled: Rgba::ansi(8),
        background: Rgba::TERMINAL_DEFAULT,
        chart_background: Rgba::TERMINAL_DEFAULT,
        accents: [
            Rgba::ansi(12),
            Rgba::ansi(10),
            Rgba::ansi(11),
            Rgba::ansi(13),
            Rgba::ansi(14),
        ],
    }
}

// =============================================================================
// Dracula
// =============================================================================

pub fn dracula() -> Palette {
    Palette {
        name: "dracula".to_string(),
        description: "Dracula dark theme".to_string(),
        unsorted: Rgba::from_rgb_int(0xbd93f9),
        comparing: Rgba::from_rgb_int(0xf1fa8c),
        swapping: Rgba::from_rgb_int(0xff5555),
        sorted: Rgba::from_rgb_int(0x50fa7b),
        pivot: Rgba::from_rgb_int(0xff79c6),
        title: Rgba::from_rgb_int(0xbd93f9),
        text: Rgba::from_rgb_int(0xf8f8f2),
        text_muted: Rgba::from_rgb_int(0x6272a4),
        text_disabled: Rgba::from_rgb_int(0x44475a),
        background: Rgba::from_rgb_int(0x282a36),
        chart_background: Rgba::from_rgb_int(0x21222c),
        accents: [
            Rgba::from_rgb_int(0x8be9fd),
            Rgba::from_rgb_int(0x50fa7b),
            Rgba::from_rgb_int(0xffb86c),
            Rgba::from_rgb_int(0xff79c6),
            Rgba::from_rgb_int(0xbd93f9),
        ],
    }
}

// =============================================================================
// Nord
// =============================================================================

pub fn nord() -> Palette {
    Palette {
        name: "nord".to_string(),
        description: "Nord arctic theme".to_string(),
        unsorted: Rgba::from_rgb_int(0x81a1c1),
        comparing: Rgba::from_rgb_int(0xebcb8b),
        swapping: Rgba::from_rgb_int(0xbf616a),
        sorted: Rgba::from_rgb_int(0xa3be8c),
        pivot: Rgba::from_rgb_int(0xb48ead),
        title: Rgba::from_rgb_int(0x88c0d0),
        text: Rgba::from_rgb_int(0xd8dee9),
        text_muted: Rgba::from_rgb_int(0x4c566a),
        text_disabled: Rgba::from_rgb_int(0x3b4252),
        background: Rgba::from_rgb_int(0x2e3440),
        chart_background: Rgba::from_rgb_int(0x3b4252),
        accents: [
            Rgba::from_rgb_int(0x88c0d0),
            Rgba::from_rgb_int(0xa3be8c),
            Rgba::from_rgb_int(0xd08770),
            Rgba::from_rgb_int(0xb48ead),
            Rgba::from_rgb_int(0x5e81ac),
        ],
    }
}

// =============================================================================
// Lookup
// =============================================================================

/// Palette by name, ignoring case. `None` for unknown names.
pub fn get_preset(name: &str) -> Option<Palette> {
    match name.trim().to_lowercase().as_str() {
        "default" => Some(default_palette()),
        "terminal" => Some(terminal()),
        "dracula" => Some(dracula()),
        "nord" => Some(nord()),
        _ => None,
    }
}

/// Preset names in cycling order.
pub fn preset_names() -> &'static [&'static str] {
    &["default", "terminal", "dracula", "nord"]
}

/// Name of the preset after `current`, wrapping around.
pub fn next_preset_name(current: &str) -> &'static str {
    let names = preset_names();
    let pos = names
        .iter()
        .position(|n| n.eq_ignore_ascii_case(current))
        .map_or(0, |i| (i + 1) % names.len());
    names[pos]
}
