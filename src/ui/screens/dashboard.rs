use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::ui::app::{App, LoadState};
use crate::ui::theme;
use crate::ui::util::truncate;
use crate::view::{table_rows, FormattedBalance, TABLE_HEADERS};

/// One summary card: label, icon glyph and the amount (empty until loaded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Card<'a> {
    pub(crate) label: &'static str,
    pub(crate) icon: &'static str,
    pub(crate) amount: &'a str,
}

/// Cards in display order: income, outcome, total.
pub(crate) fn cards(balance: Option<&FormattedBalance>) -> [Card<'_>; 3] {
    let (income, outcome, total) = match balance {
        Some(b) => (b.income.as_str(), b.outcome.as_str(), b.total.as_str()),
        None => ("", "", ""),
    };
    [
        Card {
            label: "Income",
            icon: "↑",
            amount: income,
        },
        Card {
            label: "Outcome",
            icon: "↓",
            amount: outcome,
        },
        Card {
            label: "Total",
            icon: "$",
            amount: total,
        },
    ]
}

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Summary cards
            Constraint::Min(5),    // Transactions table
        ])
        .split(area);

    render_summary_cards(f, chunks[0], app);
    render_table(f, chunks[1], app);
}

fn render_summary_cards(f: &mut Frame, area: Rect, app: &App) {
    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let colors = [theme::GREEN, theme::RED, theme::YELLOW];
    for ((card, slot), color) in cards(app.balance()).iter().zip(slots.iter()).zip(colors) {
        render_card(f, *slot, card, color, card.label == "Total");
    }
}

fn render_card(f: &mut Frame, area: Rect, card: &Card<'_>, color: Color, highlight: bool) {
    let border = if highlight {
        Style::default().fg(theme::YELLOW)
    } else {
        theme::border_style()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(Line::from(vec![
            Span::styled(format!(" {} ", card.label), theme::title_style()),
            Span::styled(format!("{} ", card.icon), Style::default().fg(color)),
        ]));

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            card.amount.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ])
    .centered()
    .block(block);

    f.render_widget(text, area);
}

fn render_table(f: &mut Frame, area: Rect, app: &App) {
    let transactions = app.transactions();

    let header_cells = TABLE_HEADERS
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let page = area.height.saturating_sub(3) as usize;
    let rows: Vec<Row> = table_rows(transactions)
        .into_iter()
        .zip(transactions)
        .enumerate()
        .skip(app.transaction_scroll)
        .take(page)
        .map(|(i, (cells, txn))| {
            let [title, price, category, date] = cells;
            let style = if i == app.transaction_index {
                theme::cursor_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            Row::new(vec![
                Cell::from(truncate(&title, 40)),
                Cell::from(Span::styled(price, theme::price_style(txn.transaction.kind))),
                Cell::from(truncate(&category, 18)),
                Cell::from(date),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Min(20),
        Constraint::Length(20),
        Constraint::Length(18),
        Constraint::Length(12),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_style())
            .title(Span::styled(
                format!(" Transactions ({}) ", transactions.len()),
                theme::title_style(),
            )),
    );

    f.render_widget(table, area);

    if transactions.is_empty() {
        render_empty_note(f, area, &app.state);
    }
}

/// Note under the header row of an empty table.
fn render_empty_note(f: &mut Frame, area: Rect, state: &LoadState) {
    if area.height < 5 || area.width < 4 {
        return;
    }
    let line = match state {
        LoadState::Loading => Line::from(Span::styled(
            "Loading transactions…",
            theme::dim_style(),
        )),
        LoadState::Failed(msg) => Line::from(Span::styled(
            format!("Could not load transactions: {msg}"),
            theme::error_style(),
        )),
        LoadState::Loaded(_) => Line::from(Span::styled("No transactions", theme::dim_style())),
    };
    let note = Rect::new(area.x + 1, area.y + 3, area.width - 2, 1);
    f.render_widget(Paragraph::new(line).centered(), note);
}
