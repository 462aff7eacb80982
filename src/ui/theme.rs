use crossterm::style::Color;

use crate::browser::node::Highlight;

/// Design tokens for the trackwalk UI.
///
/// All colors, icons and borders used by the screen come from this module.
pub mod colors {
    use super::Color;

    /// Tree roots
    pub const HEADING: Color = Color::Rgb {
        r: 0xAD,
        g: 0xFF,
        b: 0x2F,
    };
    /// Tracks already in the library
    pub const IN_LIBRARY: Color = Color::Rgb {
        r: 0xAD,
        g: 0xD8,
        b: 0xE6,
    };
    /// Tracks just added to a playlist
    pub const ADDED: Color = Color::Rgb {
        r: 0x90,
        g: 0xEE,
        b: 0x90,
    };
    /// Tracks removed from a playlist
    pub const REMOVED: Color = Color::Red;
    /// Border of the focused pane
    pub const FOCUS: Color = Color::Cyan;
    /// Borders of unfocused panes, log timestamps
    pub const DIM: Color = Color::DarkGrey;
}

/// Basic 16-color fallbacks for terminals without true color
pub mod colors_basic {
    use super::Color;

    pub const HEADING: Color = Color::Yellow;
    pub const IN_LIBRARY: Color = Color::Blue;
    pub const ADDED: Color = Color::Green;
}

pub mod icons {
    pub const EXPANDED: &str = "▼";
    pub const COLLAPSED: &str = "▶";
    pub const CURSOR: &str = "›";
}

pub mod icons_ascii {
    pub const EXPANDED: &str = "v";
    pub const COLLAPSED: &str = ">";
    pub const CURSOR: &str = ">";
}

pub mod borders {
    pub const TOP_LEFT: &str = "╭";
    pub const TOP_RIGHT: &str = "╮";
    pub const BOTTOM_LEFT: &str = "╰";
    pub const BOTTOM_RIGHT: &str = "╯";
    pub const HORIZONTAL: &str = "─";
    pub const VERTICAL: &str = "│";
}

pub mod borders_ascii {
    pub const TOP_LEFT: &str = "+";
    pub const TOP_RIGHT: &str = "+";
    pub const BOTTOM_LEFT: &str = "+";
    pub const BOTTOM_RIGHT: &str = "+";
    pub const HORIZONTAL: &str = "-";
    pub const VERTICAL: &str = "|";
}

/// Color a highlight renders with
pub fn highlight_color(highlight: Highlight) -> Color {
    match highlight {
        Highlight::Heading => colors::HEADING,
        Highlight::InLibrary => colors::IN_LIBRARY,
        Highlight::Added => colors::ADDED,
        Highlight::Removed => colors::REMOVED,
    }
}

/// Downgrade true-color tokens for terminals that only know 16 colors
pub fn downgrade(color: Color) -> Color {
    match color {
        c if c == colors::HEADING => colors_basic::HEADING,
        c if c == colors::IN_LIBRARY => colors_basic::IN_LIBRARY,
        c if c == colors::ADDED => colors_basic::ADDED,
        Color::Rgb { .. } => Color::White,
        other => other,
    }
}

/// Border glyph set
#[derive(Debug, Clone, Copy)]
pub struct Borders {
    pub top_left: &'static str,
    pub top_right: &'static str,
    pub bottom_left: &'static str,
    pub bottom_right: &'static str,
    pub horizontal: &'static str,
    pub vertical: &'static str,
}

pub fn borders(unicode: bool) -> Borders {
    if unicode {
        Borders {
            top_left: borders::TOP_LEFT,
            top_right: borders::TOP_RIGHT,
            bottom_left: borders::BOTTOM_LEFT,
            bottom_right: borders::BOTTOM_RIGHT,
            horizontal: borders::HORIZONTAL,
            vertical: borders::VERTICAL,
        }
    } else {
        Borders {
            top_left: borders_ascii::TOP_LEFT,
            top_right: borders_ascii::TOP_RIGHT,
            bottom_left: borders_ascii::BOTTOM_LEFT,
            bottom_right: borders_ascii::BOTTOM_RIGHT,
            horizontal: borders_ascii::HORIZONTAL,
            vertical: borders_ascii::VERTICAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_highlight_has_a_distinct_color() {
        let all = [
            Highlight::Heading,
            Highlight::InLibrary,
            Highlight::Added,
            Highlight::Removed,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(highlight_color(*a), highlight_color(*b));
            }
        }
    }

    #[test]
    fn downgrade_maps_tokens_to_basic_colors() {
        assert_eq!(downgrade(colors::ADDED), Color::Green);
        assert_eq!(downgrade(colors::REMOVED), Color::Red);
        assert_eq!(downgrade(Color::Rgb { r: 1, g: 2, b: 3 }), Color::White);
    }

    #[test]
    fn ascii_borders() {
        let b = borders(false);
        assert_eq!(b.vertical, "|");
        assert_eq!(borders(true).top_left, "╭");
    }
}
