use ratatui::style::{Color, Modifier, Style};

use crate::models::TransactionType;

pub(crate) const BASE: Color = Color::Rgb(30, 30, 46);
pub(crate) const ACCENT: Color = Color::Rgb(137, 180, 250);
pub(crate) const GREEN: Color = Color::Rgb(166, 227, 161);
pub(crate) const RED: Color = Color::Rgb(243, 139, 168);
pub(crate) const YELLOW: Color = Color::Rgb(249, 226, 175);
pub(crate) const SURFACE: Color = Color::Rgb(49, 50, 68);
pub(crate) const TEXT: Color = Color::Rgb(205, 214, 244);
pub(crate) const TEXT_DIM: Color = Color::Rgb(127, 132, 156);
pub(crate) const BORDER: Color = Color::Rgb(69, 71, 90);
pub(crate) const BAR_BG: Color = Color::Rgb(24, 24, 37);

pub(crate) fn title_style() -> Style {
    Style::default().fg(TEXT_DIM).add_modifier(Modifier::BOLD)
}

pub(crate) fn border_style() -> Style {
    Style::default().fg(BORDER)
}

pub(crate) fn header_style() -> Style {
    Style::default().fg(TEXT).bg(BASE).add_modifier(Modifier::BOLD)
}

pub(crate) fn cursor_style() -> Style {
    Style::default().fg(BASE).bg(ACCENT)
}

pub(crate) fn normal_style() -> Style {
    Style::default().fg(TEXT)
}

pub(crate) fn dim_style() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub(crate) fn alt_row_style() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}

pub(crate) fn error_style() -> Style {
    Style::default().fg(RED).add_modifier(Modifier::BOLD)
}

/// Price colour for a row of the given type.
pub(crate) fn price_style(kind: TransactionType) -> Style {
    match kind {
        TransactionType::Income => Style::default().fg(GREEN),
        TransactionType::Outcome => Style::default().fg(RED),
    }
}

pub(crate) fn bar_style() -> Style {
    Style::default().fg(TEXT_DIM).bg(BAR_BG)
}

pub(crate) fn mode_style(bg: Color) -> Style {
    Style::default().fg(BASE).bg(bg).add_modifier(Modifier::BOLD)
}
