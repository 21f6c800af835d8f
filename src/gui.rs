// LogWidget - gui.rs
//
// Demo eframe::App hosting the logger widget in its central panel.

use crate::app::state::LoggerState;
use crate::ui;
use crate::util::constants;

/// The demo application.
pub struct LogWidgetApp {
    pub state: LoggerState,
}

impl LogWidgetApp {
    pub fn new(state: LoggerState) -> Self {
        Self { state }
    }
}

impl eframe::App for LogWidgetApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui::widget::show(ui, &mut self.state);
        });

        // Records can arrive from any thread; keep polling while idle.
        ctx.request_repaint_after(std::time::Duration::from_millis(
            constants::POLL_REPAINT_INTERVAL_MS,
        ));
    }
}
