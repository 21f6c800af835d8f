// LogWidget - ui/widget.rs
//
// The complete logger widget: header, formatting row, status line and the
// record list, drawn into whatever `Ui` the host provides.

use crate::app::state::LoggerState;
use crate::ui::panels;

/// Drain pending records and draw the widget.
///
/// Call once per frame. Hosts should also request periodic repaints so
/// records emitted on other threads show up without user input.
pub fn show(ui: &mut egui::Ui, state: &mut LoggerState) {
    let appended = state.poll();
    if appended > 0 {
        ui.ctx().request_repaint();
    }

    panels::controls::render_header(ui, state);
    panels::controls::render_format_row(ui, state);
    panels::controls::render_status(ui, state);
    ui.separator();
    panels::log_list::render(ui, state);
}
