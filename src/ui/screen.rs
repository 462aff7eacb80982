//! Screen layout and painting
//!
//! Two tree panes side by side over a log pane taking the bottom quarter.

use std::io::{self, Write};

use crossterm::style::{
    Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor,
};
use crossterm::{cursor, queue, terminal};

use super::render::{fit, PaneLine};
use super::terminal::Palette;
use super::theme::{self, Borders};

/// Minimum rows given to the log pane, borders included
const MIN_LOG_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    /// Area inside a one-cell border
    pub fn inner(&self) -> Rect {
        Rect {
            x: self.x + 1,
            y: self.y + 1,
            width: self.width.saturating_sub(2),
            height: self.height.saturating_sub(2),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub artists: Rect,
    pub playlists: Rect,
    pub log: Rect,
}

impl Layout {
    pub fn compute(width: u16, height: u16) -> Self {
        let log_height = (height / 4).max(MIN_LOG_HEIGHT).min(height);
        let top_height = height - log_height;
        let left_width = width / 2;
        Self {
            artists: Rect {
                x: 0,
                y: 0,
                width: left_width,
                height: top_height,
            },
            playlists: Rect {
                x: left_width,
                y: 0,
                width: width - left_width,
                height: top_height,
            },
            log: Rect {
                x: 0,
                y: top_height,
                width,
                height: log_height,
            },
        }
    }
}

/// A bordered pane ready to paint
pub struct Pane<'a> {
    pub area: Rect,
    pub title: &'a str,
    pub focused: bool,
    pub lines: &'a [PaneLine],
}

pub fn clear(out: &mut impl Write) -> io::Result<()> {
    queue!(out, terminal::Clear(terminal::ClearType::All))
}

pub fn draw_pane(out: &mut impl Write, pane: &Pane<'_>, palette: &Palette) -> io::Result<()> {
    let area = pane.area;
    if area.width < 2 || area.height < 2 {
        return Ok(());
    }
    let borders = theme::borders(palette.unicode);
    let border_color = if pane.focused {
        theme::colors::FOCUS
    } else {
        theme::colors::DIM
    };
    set_color(out, palette.paint(border_color))?;
    draw_border(out, area, pane.title, &borders)?;
    queue!(out, ResetColor)?;

    let inner = area.inner();
    let width = inner.width as usize;
    for row in 0..inner.height {
        queue!(out, cursor::MoveTo(inner.x, inner.y + row))?;
        match pane.lines.get(row as usize) {
            Some(line) => {
                set_color(out, line.color)?;
                if line.selected && pane.focused {
                    queue!(out, SetAttribute(Attribute::Reverse))?;
                }
                queue!(
                    out,
                    Print(fit(&line.text, width)),
                    SetAttribute(Attribute::Reset),
                    ResetColor
                )?;
            }
            None => queue!(out, Print(" ".repeat(width)))?,
        }
    }
    Ok(())
}

fn set_color(out: &mut impl Write, color: Option<Color>) -> io::Result<()> {
    match color {
        Some(c) => queue!(out, SetForegroundColor(c)),
        None => Ok(()),
    }
}

fn draw_border(out: &mut impl Write, area: Rect, title: &str, b: &Borders) -> io::Result<()> {
    let span = area.width.saturating_sub(2) as usize;
    let title = fit(&format!(" {} ", title), span.min(title.len() + 2));
    let top = format!(
        "{}{}{}{}",
        b.top_left,
        title,
        b.horizontal.repeat(span.saturating_sub(title.chars().count())),
        b.top_right
    );
    let bottom = format!(
        "{}{}{}",
        b.bottom_left,
        b.horizontal.repeat(span),
        b.bottom_right
    );

    queue!(out, cursor::MoveTo(area.x, area.y), Print(top))?;
    for row in 1..area.height - 1 {
        queue!(
            out,
            cursor::MoveTo(area.x, area.y + row),
            Print(b.vertical),
            cursor::MoveTo(area.x + area.width - 1, area.y + row),
            Print(b.vertical)
        )?;
    }
    queue!(
        out,
        cursor::MoveTo(area.x, area.y + area.height - 1),
        Print(bottom)
    )
}
