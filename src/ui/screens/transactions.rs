use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::models::DATE_FORMAT;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::format_amount;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let title = if app.filter.is_empty() {
        format!(" Transactions ({}) ", app.view.len())
    } else {
        format!(
            " Transactions ({} of {}) filter: {} ",
            app.view.len(),
            app.total_count,
            app.filter.describe()
        )
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(title, theme::title_style()));

    if app.view.is_empty() {
        let hint = if app.filter.is_empty() {
            "No transactions yet. Press a to add one"
        } else {
            "No transactions match the filter. Press x to clear it"
        };
        let msg = vec![
            Line::from(""),
            Line::from(Span::styled(hint, theme::dim_style())),
        ];
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let header_cells = ["ID", "Date", "Amount", "Type", "Category"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = app
        .view
        .iter()
        .enumerate()
        .skip(app.transaction_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, txn)| {
            let style = if i == app.transaction_index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            let kind_cell = if i == app.transaction_index {
                Cell::from(txn.kind.as_str())
            } else {
                Cell::from(Span::styled(txn.kind.as_str(), theme::kind_style(txn.kind)))
            };

            Row::new(vec![
                Cell::from(format!("{:>4}", txn.id)),
                Cell::from(txn.date.format(DATE_FORMAT).to_string()),
                Cell::from(format!("{:>14}", format_amount(txn.amount))),
                kind_cell,
                Cell::from(txn.category.as_str()),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(6),
        Constraint::Length(12),
        Constraint::Length(16),
        Constraint::Length(9),
        Constraint::Min(14),
    ];

    let table = Table::new(rows, widths).header(header).block(block);
    f.render_widget(table, area);
}
