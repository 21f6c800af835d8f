// LogWidget - ui/panels/controls.rs
//
// Header controls: level selector, formatting checkboxes, save buttons.

use crate::app::state::LoggerState;
use crate::core::model::Severity;
use crate::ui::theme;

/// Render the level selector row.
pub fn render_header(ui: &mut egui::Ui, state: &mut LoggerState) {
    ui.horizontal(|ui| {
        ui.label("Log Level:");

        let current = state.level();
        let mut selected = current;
        egui::ComboBox::from_id_salt("log_level")
            .width(theme::LEVEL_COMBO_WIDTH)
            .selected_text(current.name())
            .show_ui(ui, |ui| {
                for level in Severity::all() {
                    ui.selectable_value(&mut selected, *level, level.name());
                }
            });
        if selected != current {
            state.set_level(selected);
        }

        ui.separator();
        ui.label(format!(
            "{} / {} shown",
            state.visible_count(),
            state.store().count()
        ));
    });
}

/// Render the formatting checkboxes and the save buttons.
pub fn render_format_row(ui: &mut egui::Ui, state: &mut LoggerState) {
    ui.horizontal(|ui| {
        let mut format = state.format();
        let mut changed = false;
        changed |= ui.checkbox(&mut format.colorize, "Colors").changed();
        changed |= ui.checkbox(&mut format.show_name, "Logger Name").changed();
        changed |= ui.checkbox(&mut format.show_date, "Date").changed();
        changed |= ui
            .checkbox(&mut format.show_location, "Filename Line")
            .changed();
        if changed {
            state.set_format(format);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .button("Save As…")
                .on_hover_text("Choose where to save the visible lines")
                .clicked()
            {
                let dialog = rfd::FileDialog::new()
                    .set_title("Save log")
                    .set_file_name(state.export_path().display().to_string());
                if let Some(path) = dialog.save_file() {
                    // Errors are surfaced in the status line by save_log_to.
                    let _ = state.save_log_to(&path);
                }
            }
            if ui
                .button("Save")
                .on_hover_text(format!(
                    "Save the visible lines to {}",
                    state.export_path().display()
                ))
                .clicked()
            {
                let _ = state.save_log();
            }
        });
    });
}

/// Render the status line, if there is anything to report.
pub fn render_status(ui: &mut egui::Ui, state: &LoggerState) {
    if state.status_message.is_empty() {
        return;
    }
    let colour = if state.status_is_error {
        theme::STATUS_ERROR_TEXT
    } else {
        theme::STATUS_TEXT
    };
    ui.label(egui::RichText::new(&state.status_message).small().color(colour));
}
