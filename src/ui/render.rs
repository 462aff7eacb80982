//! Pane content rendering
//!
//! Turns a tree or the log buffer into fixed-width lines. Nothing here
//! touches the terminal; `screen` positions and paints the result.

use crossterm::style::Color;
use log::Level;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::browser::LazyTree;
use crate::logging::LogLine;

use super::terminal::Palette;
use super::theme::{self, icons, icons_ascii};

/// One rendered row of a pane
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneLine {
    pub text: String,
    pub color: Option<Color>,
    /// Drawn in reverse video
    pub selected: bool,
}

/// Keep `current` inside a window of `height` rows starting at `offset`
pub fn scroll_to(offset: usize, current: usize, height: usize) -> usize {
    if height == 0 {
        return 0;
    }
    if current < offset {
        current
    } else if current >= offset + height {
        current + 1 - height
    } else {
        offset
    }
}

/// Visible rows of `tree` that fit in `width` x `height`.
///
/// `scroll` is the first row shown; it is adjusted so the focused row stays
/// in view.
pub fn tree_lines(
    tree: &LazyTree,
    width: usize,
    height: usize,
    scroll: &mut usize,
    palette: &Palette,
) -> Vec<PaneLine> {
    let display = tree.display();
    let rows = display.visible_rows();
    let current = rows
        .iter()
        .position(|r| r.id == display.current())
        .unwrap_or(0);
    *scroll = scroll_to(*scroll, current, height);

    let (cursor_icon, expanded_icon, collapsed_icon) = if palette.unicode {
        (icons::CURSOR, icons::EXPANDED, icons::COLLAPSED)
    } else {
        (icons_ascii::CURSOR, icons_ascii::EXPANDED, icons_ascii::COLLAPSED)
    };

    rows.iter()
        .enumerate()
        .skip(*scroll)
        .take(height)
        .map(|(index, row)| {
            let node = display.reference(row.id);
            let selected = index == current;
            let cursor = if selected { cursor_icon } else { " " };
            let expander = if display.is_expanded(row.id) && !display.children(row.id).is_empty()
            {
                expanded_icon
            } else if node.is_expandable() {
                collapsed_icon
            } else {
                " "
            };
            let text = format!(
                "{} {}{} {}",
                cursor,
                "  ".repeat(row.depth),
                expander,
                display.label(row.id)
            );
            PaneLine {
                text: fit(&text, width),
                color: display.color(row.id).and_then(|c| palette.paint(c)),
                selected,
            }
        })
        .collect()
}

/// The newest log lines that fit in `height` rows
pub fn log_lines(lines: &[LogLine], width: usize, height: usize, palette: &Palette) -> Vec<PaneLine> {
    let skip = lines.len().saturating_sub(height);
    lines
        .iter()
        .skip(skip)
        .map(|line| {
            let color = match line.level {
                Level::Error => Some(theme::colors::REMOVED),
                Level::Warn => Some(Color::Yellow),
                Level::Info => None,
                Level::Debug | Level::Trace => Some(theme::colors::DIM),
            };
            PaneLine {
                text: fit(&line.to_string(), width),
                color: color.and_then(|c| palette.paint(c)),
                selected: false,
            }
        })
        .collect()
}

/// Truncate to `width` display columns, then pad with spaces
pub fn fit(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    let mut used = 0;
    if text.width() > width {
        let budget = width.saturating_sub(1);
        for ch in text.chars() {
            let w = ch.width().unwrap_or(0);
            if used + w > budget {
                break;
            }
            out.push(ch);
            used += w;
        }
        if width > 0 {
            out.push('…');
            used += 1;
        }
    } else {
        out.push_str(text);
        used = text.width();
    }
    out.extend(std::iter::repeat(' ').take(width.saturating_sub(used)));
    out
}
