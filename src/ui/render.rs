use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::app::{App, LoadState};
use super::theme;

const HELP_LINES: &[(&str, &str)] = &[
    ("j/k or Up/Down", "Move cursor"),
    ("g/G", "Top/Bottom"),
    ("Ctrl-d/u", "Half page down/up"),
    ("?", "Show this help"),
    ("q or Ctrl-c", "Quit"),
];

pub(crate) fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(10),   // Dashboard
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], app);
    super::screens::dashboard::render(f, chunks[1], app);
    render_status_bar(f, chunks[2], app);

    if app.show_help {
        render_help_overlay(f, f.area());
    }
}

fn render_title_bar(f: &mut Frame, area: Rect, app: &App) {
    let bar = Paragraph::new(Line::from(vec![
        Span::styled(
            " Cashboard ",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("| {} ", app.api_url), theme::dim_style()),
    ]))
    .style(Style::default().bg(theme::BASE));
    f.render_widget(bar, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mode_label = format!(" {} ", app.state);
    let mode_style = match app.state {
        LoadState::Loading => theme::mode_style(theme::YELLOW),
        LoadState::Loaded(_) => theme::mode_style(theme::ACCENT),
        LoadState::Failed(_) => theme::mode_style(theme::RED),
    };

    let info = format!(" {} | {}", app.currency.code.to_uppercase(), app.status_message);
    let right = " j/k scroll | ? help | q quit ";

    let available = area.width as usize;
    let used = mode_label.chars().count() + info.chars().count() + right.len();
    let pad = available.saturating_sub(used);

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(mode_label, mode_style),
        Span::styled(info, theme::bar_style()),
        Span::styled(" ".repeat(pad), theme::bar_style()),
        Span::styled(right, theme::bar_style()),
    ]));
    f.render_widget(bar, area);
}

fn render_help_overlay(f: &mut Frame, area: Rect) {
    let mut help_text = vec![
        Line::from(Span::styled(
            " Cashboard Help ",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for (keys, action) in HELP_LINES {
        help_text.push(Line::from(Span::styled(
            format!("  {keys:<18} {action}"),
            theme::normal_style(),
        )));
    }
    help_text.push(Line::from(""));
    help_text.push(Line::from(Span::styled(
        " Press any key to close ",
        theme::dim_style(),
    )));

    let popup_height = (help_text.len() as u16 + 2).min(area.height.saturating_sub(2));
    let popup_width = 48.min(area.width.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);
    let help = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .style(Style::default().bg(theme::BASE)),
    );
    f.render_widget(help, popup_area);
}
