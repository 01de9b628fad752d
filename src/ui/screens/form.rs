use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::form::{Form, FormField};
use crate::ui::theme;

const LABEL_WIDTH: usize = 10;

/// Column just past `value` inside the popup: border, indent, label, then text.
pub(crate) fn cursor_column(value: &str) -> u16 {
    LABEL_WIDTH as u16 + 3 + value.chars().count() as u16
}

pub(crate) fn render(f: &mut Frame, area: Rect, form: &Form) {
    let mut lines = vec![Line::from("")];
    let mut cursor = None;

    for (row, field) in FormField::all().iter().enumerate() {
        let focused = *field == form.focus;
        let label_style = if focused {
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            theme::dim_style()
        };
        let value = form.value(*field);
        let shown = if field.is_choice() {
            format!("< {value} >")
        } else {
            value.clone()
        };
        let value_style = if focused {
            theme::selected_style()
        } else {
            theme::normal_style()
        };

        if focused && !field.is_choice() {
            // +1 for the blank first line, +1 for the border
            cursor = Some((cursor_column(&value), row as u16 + 2));
        }

        lines.push(Line::from(vec![
            Span::styled(format!("  {:<LABEL_WIDTH$}", field.label()), label_style),
            Span::styled(shown, value_style),
        ]));
    }

    lines.push(Line::from(""));
    match &form.error {
        Some(err) => lines.push(Line::from(Span::styled(
            format!("  {err}"),
            theme::error_style(),
        ))),
        None => lines.push(Line::from("")),
    }
    lines.push(Line::from(Span::styled(
        "  Tab next | ←/→ change choice | Enter save | Esc close",
        theme::dim_style(),
    )));

    let popup_height = (lines.len() as u16 + 2).min(area.height);
    let popup_width = 60.min(area.width.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);
    let popup = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .title(Span::styled(
                format!(" {} ", form.title()),
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ))
            .style(theme::popup_block_style()),
    );
    f.render_widget(popup, popup_area);

    if let Some((dx, dy)) = cursor {
        if dy < popup_area.height.saturating_sub(1) {
            f.set_cursor_position((popup_area.x + dx, popup_area.y + dy));
        }
    }
}
