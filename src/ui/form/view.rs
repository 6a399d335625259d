use crate::actions::FieldWidget;
use crate::ui::form::state::FormState;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, HINT_TEXT, STATUS_ERROR, STATUS_OK,
};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

const LABEL_WIDTH: usize = 16;

pub fn render_form(frame: &mut Frame<'_>, area: Rect, state: &FormState, has_focus: bool) {
    let border = if has_focus { ACCENT } else { GLOBAL_BORDER };
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", state.kind.title()),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    let mut lines = Vec::with_capacity(state.inputs.len() + 3);
    for (index, input) in state.inputs.iter().enumerate() {
        let selected = has_focus && index == state.focused;
        let label = format!("{:<width$}", input.id.label(), width = LABEL_WIDTH);
        let value = if input.value.is_empty() {
            Span::styled(input.id.hint().to_string(), Style::default().fg(HINT_TEXT))
        } else {
            Span::styled(
                input.id.display_value(&input.value),
                Style::default().fg(HEADER_TEXT),
            )
        };
        let mut line = Line::from(vec![
            Span::styled(if selected { "› " } else { "  " }, Style::default().fg(ACCENT)),
            Span::styled(label, Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM)),
            value,
        ]);
        if selected {
            line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
        }
        lines.push(line);
    }

    lines.push(Line::from(""));
    let button_style = if state.is_submitting() {
        Style::default().fg(HINT_TEXT)
    } else {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    };
    lines.push(Line::from(Span::styled(
        format!("  [ {} ]", state.button_label()),
        button_style,
    )));

    if let Some((message, is_error)) = state.message() {
        let color = if is_error { STATUS_ERROR } else { STATUS_OK };
        lines.push(Line::from(Span::styled(
            format!("  {}", message),
            Style::default().fg(color),
        )));
    }

    let widget = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(widget, area);

    if has_focus && !state.is_submitting() {
        place_cursor(frame, area, state);
    }
}

fn place_cursor(frame: &mut Frame<'_>, area: Rect, state: &FormState) {
    let Some(input) = state.inputs.get(state.focused) else {
        return;
    };
    if input.id.widget() == FieldWidget::Choice {
        return;
    }
    let offset = 2 + LABEL_WIDTH + input.value.chars().count();
    let x = area.x + 1 + offset as u16;
    let y = area.y + 1 + state.focused as u16;
    if x < area.x + area.width.saturating_sub(1) && y < area.y + area.height.saturating_sub(1) {
        frame.set_cursor_position((x, y));
    }
}
