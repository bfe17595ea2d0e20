//! ANSI escape sequences used by the renderer and terminal setup.

use std::io::Write;

use crate::types::{Attr, Rgba};

// =============================================================================
// Cursor
// =============================================================================

/// Move cursor to a 0-indexed position.
#[inline]
pub fn cursor_to<W: Write>(w: &mut W, x: u16, y: u16) -> std::io::Result<()> {
    write!(w, "\x1b[{};{}H", y + 1, x + 1)
}

#[inline]
pub fn cursor_hide<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[?25l")
}

#[inline]
pub fn cursor_show<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[?25h")
}

// =============================================================================
// Screen
// =============================================================================

/// Clear screen and home the cursor.
#[inline]
pub fn clear_screen<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[2J\x1b[H")
}

#[inline]
pub fn enter_alt_screen<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[?1049h")
}

#[inline]
pub fn exit_alt_screen<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[?1049l")
}

/// Terminal buffers output until [`end_sync`].
#[inline]
pub fn begin_sync<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[?2026h")
}

#[inline]
pub fn end_sync<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[?2026l")
}

/// Window title (OSC 0).
#[inline]
pub fn set_title<W: Write>(w: &mut W, title: &str) -> std::io::Result<()> {
    write!(w, "\x1b]0;{}\x07", title)
}

// =============================================================================
// Colors and attributes
// =============================================================================

#[inline]
pub fn reset<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "\x1b[0m")
}

pub fn fg<W: Write>(w: &mut W, color: Rgba) -> std::io::Result<()> {
    if color.is_terminal_default() {
        write!(w, "\x1b[39m")
    } else if color.is_ansi() {
        match color.ansi_index() {
            i @ 0..=7 => write!(w, "\x1b[{}m", 30 + i),
            i @ 8..=15 => write!(w, "\x1b[{}m", 90 + i - 8),
            i => write!(w, "\x1b[38;5;{}m", i),
        }
    } else {
        write!(w, "\x1b[38;2;{};{};{}m", color.r, color.g, color.b)
    }
}

pub fn bg<W: Write>(w: &mut W, color: Rgba) -> std::io::Result<()> {
    if color.is_terminal_default() {
        write!(w, "\x1b[49m")
    } else if color.is_ansi() {
        match color.ansi_index() {
            i @ 0..=7 => write!(w, "\x1b[{}m", 40 + i),
            i @ 8..=15 => write!(w, "\x1b[{}m", 100 + i - 8),
            i => write!(w, "\x1b[48;5;{}m", i),
        }
    } else {
        write!(w, "\x1b[48;2;{};{};{}m", color.r, color.g, color.b)
    }
}

/// SGR sequence for every flag set in `attr`.
pub fn attrs<W: Write>(w: &mut W, attr: Attr) -> std::io::Result<()> {
    const CODES: [(Attr, u8); 5] = [
        (Attr::BOLD, 1),
        (Attr::DIM, 2),
        (Attr::ITALIC, 3),
        (Attr::UNDERLINE, 4),
        (Attr::INVERSE, 7),
    ];

    let codes: Vec<String> = CODES
        .iter()
        .filter(|(flag, _)| attr.contains(*flag))
        .map(|(_, code)| code.to_string())
        .collect();

    if codes.is_empty() {
        return Ok(());
    }
    write!(w, "\x1b[{}m", codes.join(";"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit(f: impl FnOnce(&mut Vec<u8>) -> std::io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_cursor_to_is_one_indexed() {
        assert_eq!(emit(|w| cursor_to(w, 0, 0)), "\x1b[1;1H");
        assert_eq!(emit(|w| cursor_to(w, 4, 2)), "\x1b[3;5H");
    }

    #[test]
    fn test_fg_variants() {
        assert_eq!(emit(|w| fg(w, Rgba::TERMINAL_DEFAULT)), "\x1b[39m");
        assert_eq!(emit(|w| fg(w, Rgba::ansi(2))), "\x1b[32m");
        assert_eq!(emit(|w| fg(w, Rgba::ansi(9))), "\x1b[91m");
        assert_eq!(emit(|w| fg(w, Rgba::ansi(200))), "\x1b[38;5;200m");
        assert_eq!(emit(|w| fg(w, Rgba::rgb(1, 2, 3))), "\x1b[38;2;1;2;3m");
    }

    #[test]
    fn test_bg_variants() {
        assert_eq!(emit(|w| bg(w, Rgba::TERMINAL_DEFAULT)), "\x1b[49m");
        assert_eq!(emit(|w| bg(w, Rgba::ansi(1))), "\x1b[41m");
        assert_eq!(emit(|w| bg(w, Rgba::ansi(12))), "\x1b[104m");
    }

    #[test]
    fn test_attrs() {
        assert_eq!(emit(|w| attrs(w, Attr::NONE)), "");
        assert_eq!(emit(|w| attrs(w, Attr::BOLD | Attr::UNDERLINE)), "\x1b[1;4m");
    }
}
