use crate::ui::app::Screen;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    screen: Screen,
    endpoint: &'a str,
    healthy: bool,
}

impl<'a> Header<'a> {
    /// `healthy` is false while the last bus list fetch failed.
    pub fn new(screen: Screen, endpoint: &'a str, healthy: bool) -> Self {
        Self {
            screen,
            endpoint,
            healthy,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let dot_color = if self.healthy { STATUS_OK } else { STATUS_ERROR };

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled("●", Style::default().fg(dot_color)),
            Span::styled("  ", text_style),
            Span::styled("Bus Ticket Booking", text_style.add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
        ];
        for screen in [Screen::Book, Screen::Admin] {
            let style = if screen == self.screen {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                text_style.add_modifier(Modifier::DIM)
            };
            spans.push(Span::styled(screen.title(), style));
            spans.push(Span::styled("  ", text_style));
        }
        spans.push(Span::styled("│  ", separator_style));
        spans.push(Span::styled(self.endpoint.to_string(), text_style.add_modifier(Modifier::DIM)));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
