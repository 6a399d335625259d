//! Bus list pane.
//!
//! [`BusListView::from_snapshot`] decides what the pane shows; rendering is a
//! straight mapping of that value onto ratatui widgets.

use crate::api::{format_fare, Bus};
use crate::registry::RegistrySnapshot;
use crate::ui::removal::{RemovalNotice, RemovalState};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, HINT_TEXT, STATUS_ERROR, STATUS_OK,
    STATUS_PENDING,
};
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table, TableState, Wrap};
use ratatui::Frame;

pub const LOADING_TEXT: &str = "Loading available buses...";
pub const EMPTY_TEXT: &str = "No buses available.";

/// Per-row removal control, admin screen only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveControl {
    Ready,
    Pending,
}

impl RemoveControl {
    pub fn label(self) -> &'static str {
        match self {
            RemoveControl::Ready => "Remove",
            RemoveControl::Pending => "...",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusRow {
    pub bus_id: u64,
    pub title: String,
    pub route: String,
    pub seats: String,
    pub fare: String,
    pub remove: Option<RemoveControl>,
}

impl BusRow {
    fn new(bus: &Bus, remove: Option<RemoveControl>) -> Self {
        Self {
            bus_id: bus.bus_id,
            title: format!("({}) {}", bus.bus_id, bus.bus_name),
            route: format!("{}→{}", bus.source, bus.destination),
            seats: format!("{} seats", bus.available_seats),
            fare: format!("₹{}", format_fare(bus.fare_per_seat)),
            remove,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BusListView {
    Loading,
    Error(String),
    Empty,
    Rows(Vec<BusRow>),
}

impl BusListView {
    /// `removal` is `Some` on the admin screen, where rows get a removal
    /// control.
    pub fn from_snapshot(snapshot: &RegistrySnapshot, removal: Option<&RemovalState>) -> Self {
        if snapshot.loading && snapshot.buses.is_empty() {
            return BusListView::Loading;
        }
        if let Some(error) = &snapshot.error {
            return BusListView::Error(format!("Error fetching buses: {}", error));
        }
        if snapshot.buses.is_empty() {
            return BusListView::Empty;
        }
        BusListView::Rows(
            snapshot
                .buses
                .iter()
                .map(|bus| {
                    let remove = removal.map(|state| {
                        if state.is_removing(bus.bus_id) {
                            RemoveControl::Pending
                        } else {
                            RemoveControl::Ready
                        }
                    });
                    BusRow::new(bus, remove)
                })
                .collect(),
        )
    }
}

pub fn render_bus_list(
    frame: &mut Frame<'_>,
    area: Rect,
    view: &BusListView,
    selected: usize,
    has_focus: bool,
    notice: Option<&RemovalNotice>,
    refreshing: bool,
) {
    let border = if has_focus { ACCENT } else { GLOBAL_BORDER };
    let mut title = vec![Span::styled(
        " Available Buses ",
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
    )];
    if refreshing {
        title.push(Span::styled("⟳ ", Style::default().fg(STATUS_PENDING)));
    }
    let block = Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (table_area, notice_area) = split_notice(inner, notice.is_some());

    match view {
        BusListView::Loading => {
            frame.render_widget(
                Paragraph::new(LOADING_TEXT).style(Style::default().fg(HINT_TEXT)),
                table_area,
            );
        }
        BusListView::Error(message) => {
            frame.render_widget(
                Paragraph::new(message.as_str())
                    .style(Style::default().fg(STATUS_ERROR))
                    .wrap(Wrap { trim: true }),
                table_area,
            );
        }
        BusListView::Empty => {
            frame.render_widget(
                Paragraph::new(EMPTY_TEXT).style(Style::default().fg(HINT_TEXT)),
                table_area,
            );
        }
        BusListView::Rows(rows) => render_rows(frame, table_area, rows, selected, has_focus),
    }

    if let (Some(notice), Some(area)) = (notice, notice_area) {
        let (text, color) = match notice {
            RemovalNotice::Removed(text) => (text, STATUS_OK),
            RemovalNotice::Failed(text) => (text, STATUS_ERROR),
        };
        frame.render_widget(
            Paragraph::new(text.as_str())
                .style(Style::default().fg(color))
                .wrap(Wrap { trim: true }),
            area,
        );
    }
}

fn render_rows(frame: &mut Frame<'_>, area: Rect, rows: &[BusRow], selected: usize, has_focus: bool) {
    let admin = rows.iter().any(|row| row.remove.is_some());

    let mut header = vec!["Bus", "Route", "Seats", "Fare"];
    let mut widths = vec![
        Constraint::Fill(3),
        Constraint::Fill(3),
        Constraint::Length(10),
        Constraint::Length(10),
    ];
    if admin {
        header.push("");
        widths.push(Constraint::Length(8));
    }

    let body = rows.iter().map(|row| {
        let mut cells = vec![
            Span::raw(row.title.clone()),
            Span::raw(row.route.clone()),
            Span::raw(row.seats.clone()),
            Span::raw(row.fare.clone()),
        ];
        if let Some(control) = row.remove {
            let style = match control {
                RemoveControl::Ready => Style::default().fg(STATUS_ERROR),
                RemoveControl::Pending => Style::default().fg(HINT_TEXT),
            };
            cells.push(Span::styled(control.label(), style));
        }
        Row::new(cells).style(Style::default().fg(HEADER_TEXT))
    });

    let table = Table::new(body, widths)
        .header(
            Row::new(header).style(Style::default().fg(HINT_TEXT).add_modifier(Modifier::BOLD)),
        )
        .row_highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT));

    let mut state = TableState::default();
    if has_focus {
        state.select(Some(selected.min(rows.len().saturating_sub(1))));
    }
    frame.render_stateful_widget(table, area, &mut state);
}

fn split_notice(area: Rect, with_notice: bool) -> (Rect, Option<Rect>) {
    if !with_notice || area.height < 3 {
        return (area, None);
    }
    let notice_height = 2;
    let table = Rect {
        height: area.height - notice_height,
        ..area
    };
    let notice = Rect {
        y: area.y + area.height - notice_height,
        height: notice_height,
        ..area
    };
    (table, Some(notice))
}
