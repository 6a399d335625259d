use crate::ui::app::{App, Focus};
use crate::ui::bus_list::render_bus_list;
use crate::ui::footer::Footer;
use crate::ui::form::render_form;
use crate::ui::header::Header;
use crate::ui::layout::{body_panes, layout_regions};
use crate::ui::removal::render_removal_dialog;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let healthy = app.buses().error.is_none();
    frame.render_widget(
        Header::new(app.screen(), app.endpoint(), healthy).widget(),
        header,
    );
    frame.render_widget(Clear, body);

    let forms = app.screen().forms();
    let (form_areas, list_area) = body_panes(body, forms.len());
    for (kind, form_area) in forms.iter().zip(form_areas) {
        let has_focus = app.focus() == Focus::Form(*kind);
        render_form(frame, form_area, app.form(*kind), has_focus);
    }

    let notice = if app.is_admin() {
        app.removal().notice.as_ref()
    } else {
        None
    };
    render_bus_list(
        frame,
        list_area,
        &app.bus_list_view(),
        app.selected(),
        app.focus() == Focus::BusList,
        notice,
        app.buses().loading,
    );

    let footer_widget = Footer::new(app.screen(), app.focus());
    frame.render_widget(footer_widget.widget(footer), footer);

    render_removal_dialog(frame, body, app.removal());
}
