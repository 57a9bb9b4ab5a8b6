//! Colors for both themes and the element category palette.

use crate::models::Theme;
use crate::table::ElementCategory;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub title: Color,
    pub text: Color,
    pub muted: Color,
    pub highlight: Color,
    pub key: Color,
    pub correct: Color,
    pub wrong: Color,
    pub cell_text: Color,
}

pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Light => Palette {
            title: Color::Blue,
            text: Color::Black,
            muted: Color::DarkGray,
            highlight: Color::Magenta,
            key: Color::Blue,
            correct: Color::Green,
            wrong: Color::Red,
            cell_text: Color::Black,
        },
        Theme::Dark => Palette {
            title: Color::Cyan,
            text: Color::White,
            muted: Color::Gray,
            highlight: Color::Yellow,
            key: Color::Cyan,
            correct: Color::LightGreen,
            wrong: Color::LightRed,
            cell_text: Color::Black,
        },
    }
}

pub fn category_color(category: ElementCategory) -> Color {
    match category {
        ElementCategory::AlkaliMetal => Color::Rgb(0xFF, 0xD7, 0x00),
        ElementCategory::AlkalineEarthMetal => Color::Rgb(0xEE, 0xE8, 0xAA),
        ElementCategory::Lanthanide => Color::Rgb(0xDE, 0xB8, 0x87),
        ElementCategory::Actinide => Color::Rgb(0xB0, 0xC4, 0xDE),
        ElementCategory::TransitionMetal => Color::Rgb(0xFF, 0xE4, 0xC4),
        ElementCategory::BoronGroup => Color::Rgb(0x98, 0xFB, 0x98),
        ElementCategory::CarbonGroup => Color::Rgb(0x90, 0xEE, 0x90),
        ElementCategory::Pnictogen => Color::Rgb(0xAD, 0xFF, 0x2F),
        ElementCategory::Chalcogen => Color::Rgb(0x7F, 0xFF, 0x00),
        ElementCategory::Halogen => Color::Rgb(0x7C, 0xFC, 0x00),
        ElementCategory::NobleGas => Color::Rgb(0x87, 0xCE, 0xFA),
        ElementCategory::Hydrogen => Color::Rgb(0xAD, 0xFF, 0x2F),
        ElementCategory::Unclassified => Color::Rgb(0xD3, 0xD3, 0xD3),
    }
}

pub fn title_style(palette: &Palette) -> Style {
    Style::default()
        .fg(palette.title)
        .add_modifier(Modifier::BOLD)
}

/// Bold key name followed by its description, as used in the help bars.
pub fn key_hint<'a>(palette: &Palette, key: &'a str, description: &'a str) -> [Span<'a>; 2] {
    [
        Span::styled(
            key,
            Style::default()
                .fg(palette.key)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(format!(" {}  ", description)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hydrogen_and_pnictogens_share_color() {
        assert_eq!(
            category_color(ElementCategory::Hydrogen),
            category_color(ElementCategory::Pnictogen)
        );
        assert_ne!(
            category_color(ElementCategory::AlkaliMetal),
            category_color(ElementCategory::Hydrogen)
        );
    }

    #[test]
    fn test_themes_differ() {
        assert_ne!(palette(Theme::Light), palette(Theme::Dark));
    }

    #[test]
    fn test_key_hint_spans() {
        let p = palette(Theme::Dark);
        let [key, desc] = key_hint(&p, "Esc", "Back");
        assert_eq!(key.content, "Esc");
        assert_eq!(desc.content, " Back  ");
    }
}
