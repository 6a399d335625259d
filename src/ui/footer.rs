use crate::ui::app::{Focus, Screen};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer {
    screen: Screen,
    focus: Focus,
}

impl Footer {
    pub fn new(screen: Screen, focus: Focus) -> Self {
        Self { screen, focus }
    }

    pub fn hints(&self) -> &'static str {
        match (self.focus, self.screen) {
            (Focus::BusList, Screen::Admin) => {
                " ↑↓: Select │ r: Refresh │ d: Remove │ Tab: Next │ F2: Book │ Ctrl+Q: Quit"
            }
            (Focus::BusList, Screen::Book) => {
                " ↑↓: Select │ r: Refresh │ Tab: Next │ F2: Admin │ Ctrl+Q: Quit"
            }
            (Focus::Form(_), _) => {
                " ↑↓: Field │ ←→: Choice │ Enter: Submit │ Tab: Next │ F2: Screen │ Ctrl+R: Refresh │ Ctrl+Q: Quit"
            }
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = self.hints();
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
