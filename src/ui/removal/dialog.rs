use crate::actions::removal_prompt;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::removal::state::RemovalState;
use crate::ui::theme::{ACCENT, HEADER_TEXT, HINT_TEXT, POPUP_BORDER};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

/// Yes/no prompt shown while a removal awaits confirmation.
pub fn render_removal_dialog(frame: &mut Frame<'_>, area: Rect, state: &RemovalState) {
    let Some(bus_id) = state.confirming else {
        return;
    };

    let lines = vec![
        Line::from(Span::styled(
            format!(" {} ", removal_prompt(bus_id)),
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " y/Enter: Remove   n/Esc: Keep",
            Style::default().fg(HINT_TEXT),
        )),
    ];

    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let popup = centered_rect_by_size(
        area,
        content_width.saturating_add(2),
        (lines.len() as u16).saturating_add(2),
    );

    frame.render_widget(Clear, popup);
    let block = Block::default()
        .title(Span::styled(" Remove Bus ", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}
