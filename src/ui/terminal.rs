use std::io::{self, Write};

use crossterm::style::Color;
use crossterm::{cursor, execute, terminal};
use is_terminal::IsTerminal;

use crate::config::ColorMode;

use super::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub is_tty: bool,
    pub supports_color: bool,
    pub supports_256_color: bool,
    pub supports_true_color: bool,
    pub supports_unicode: bool,
    pub width: u16,
    pub height: u16,
}

pub fn detect_capabilities() -> TerminalCapabilities {
    detect_capabilities_impl(
        |key| std::env::var(key).ok(),
        io::stdout().is_terminal(),
        terminal::size().ok(),
    )
}

fn detect_capabilities_impl(
    get_env: impl Fn(&str) -> Option<String>,
    is_tty: bool,
    size: Option<(u16, u16)>,
) -> TerminalCapabilities {
    let term = get_env("TERM").unwrap_or_default();
    let term_is_dumb = term.eq_ignore_ascii_case("dumb");

    let no_color = get_env("NO_COLOR").is_some();

    let supports_color = is_tty && !term_is_dumb && !no_color;
    let supports_256_color = supports_color && term.to_lowercase().contains("256color");
    let supports_true_color = supports_color && supports_true_color_env(&get_env);
    let supports_unicode = !term_is_dumb && unicode_locale(&get_env);

    let (width, height) = size.unwrap_or((80, 24));
    TerminalCapabilities {
        is_tty,
        supports_color,
        supports_256_color,
        supports_true_color,
        supports_unicode,
        width,
        height,
    }
}

fn supports_true_color_env(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    let colorterm = get_env("COLORTERM").unwrap_or_default().to_lowercase();
    colorterm.contains("truecolor") || colorterm.contains("24bit")
}

fn unicode_locale(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    const KEYS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];
    for k in KEYS {
        if let Some(val) = get_env(k) {
            let v = val.to_lowercase();
            if v.contains("utf-8") || v.contains("utf8") {
                return true;
            }
        }
    }

    // Default to true on modern systems unless explicitly "dumb".
    true
}

/// How colors and glyphs are emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub color: bool,
    pub true_color: bool,
    pub unicode: bool,
}

impl Palette {
    pub fn resolve(mode: ColorMode, unicode: bool, caps: &TerminalCapabilities) -> Self {
        let color = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => caps.supports_color,
        };
        Self {
            color,
            true_color: color && (caps.supports_true_color || mode == ColorMode::Always),
            unicode: unicode && caps.supports_unicode,
        }
    }

    /// Monochrome ASCII, used by tests and dumb terminals
    pub fn plain() -> Self {
        Self {
            color: false,
            true_color: false,
            unicode: false,
        }
    }

    /// The color to emit for a theme color, `None` when colors are off
    pub fn paint(&self, color: Color) -> Option<Color> {
        match (self.color, self.true_color) {
            (false, _) => None,
            (true, true) => Some(color),
            (true, false) => Some(theme::downgrade(color)),
        }
    }
}

/// Raw mode, alternate screen and hidden cursor for as long as it lives
pub struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    pub fn enter(mut out: W) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        if let Err(e) = execute!(out, terminal::EnterAlternateScreen, cursor::Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(e);
        }
        Ok(Self { out })
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        let _ = execute!(self.out, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
