// LogWidget - ui/panels/log_list.rs
//
// Virtualised list of the visible rendered lines. Each row has a context
// menu with "Copy log".
//
// Rows are not uniform: a record with exception text spans several lines.
// Row heights are measured from the line count, and only the rows that
// intersect the viewport are laid out, with spacers standing in for the
// rest.

use crate::app::state::LoggerState;
use crate::ui::theme;
use std::ops::Range;

/// Rows to lay out for a viewport and the space the skipped rows occupy.
#[derive(Debug, Clone, PartialEq)]
pub struct RowSpan {
    pub rows: Range<usize>,
    pub space_before: f32,
    pub space_after: f32,
}

/// Height of a row showing `text` when one text line is `line_height` tall
/// and rows are separated by `spacing`.
pub fn row_height(text: &str, line_height: f32, spacing: f32) -> f32 {
    let lines = text.split('\n').count().max(1);
    lines as f32 * line_height + spacing
}

/// Rows of `heights` intersecting the vertical range `top..bottom`.
pub fn visible_span(heights: &[f32], top: f32, bottom: f32) -> RowSpan {
    let total: f32 = heights.iter().sum();
    let mut y = 0.0;
    let mut first = heights.len();
    let mut space_before = total;
    for (row, &height) in heights.iter().enumerate() {
        if y + height > top {
            first = row;
            space_before = y;
            break;
        }
        y += height;
    }

    let mut end = first;
    let mut y = space_before;
    while end < heights.len() && y < bottom {
        y += heights[end];
        end += 1;
    }

    RowSpan {
        rows: first..end,
        space_before,
        space_after: (total - y).max(0.0),
    }
}

/// Render the list of visible lines.
pub fn render(ui: &mut egui::Ui, state: &LoggerState) {
    let total_rows = state.visible_count();
    if total_rows == 0 {
        ui.centered_and_justified(|ui| {
            ui.label(egui::RichText::new("No log records at this level.").weak());
        });
        return;
    }

    let line_height = ui.text_style_height(&egui::TextStyle::Monospace);
    let spacing = ui.spacing().item_spacing.y;
    let heights: Vec<f32> = state
        .visible_lines()
        .map(|line| row_height(&line.text, line_height, spacing))
        .collect();

    egui::ScrollArea::both()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show_viewport(ui, |ui, viewport| {
            let span = visible_span(&heights, viewport.min.y, viewport.max.y);
            ui.add_space(span.space_before);
            for row in span.rows {
                let Some((_, line)) = state.visible_row(row) else {
                    continue;
                };
                let text = egui::RichText::new(&line.text)
                    .monospace()
                    .color(theme::to_color32(line.foreground))
                    .background_color(theme::to_color32(line.background));
                let response = ui.add(
                    egui::Label::new(text)
                        .extend()
                        .sense(egui::Sense::click()),
                );
                response.context_menu(|ui| {
                    if ui.button("Copy log").clicked() {
                        ui.ctx().copy_text(line.text.clone());
                        tracing::debug!(text = %line.text, "Copied log line");
                        ui.close_menu();
                    }
                });
            }
            ui.add_space(span.space_after);
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exception_rows_are_taller() {
        assert_eq!(row_height("INFO: one line", 14.0, 4.0), 18.0);
        assert_eq!(
            row_height("ERROR: failed\ninvalid digit\nCaused by: parse", 14.0, 4.0),
            46.0
        );
    }

    #[test]
    fn test_span_accounts_for_multiline_rows_above_viewport() {
        // Row 1 is a three-line exception record.
        let heights = [18.0, 46.0, 18.0, 18.0, 18.0];
        let span = visible_span(&heights, 70.0, 100.0);
        assert_eq!(span.rows, 2..4);
        assert_eq!(span.space_before, 64.0);
        assert_eq!(span.space_after, 18.0);
    }

    #[test]
    fn test_span_includes_partially_visible_tall_row() {
        let heights = [18.0, 46.0, 18.0];
        let span = visible_span(&heights, 30.0, 40.0);
        assert_eq!(span.rows, 1..2);
        assert_eq!(span.space_before, 18.0);
        assert_eq!(span.space_after, 18.0);
    }

    #[test]
    fn test_span_past_end_is_empty() {
        let heights = [18.0, 18.0];
        let span = visible_span(&heights, 500.0, 600.0);
        assert!(span.rows.is_empty());
        assert_eq!(span.space_before, 36.0);
        assert_eq!(span.space_after, 0.0);
    }
}
