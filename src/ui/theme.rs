// LogWidget - ui/theme.rs
//
// Colour conversion and layout constants.
// No dependencies on app state or business logic.

use crate::core::render::Colour;
use egui::Color32;

/// Convert a core colour to egui's premultiplied representation.
pub fn to_color32(colour: Colour) -> Color32 {
    Color32::from_rgba_unmultiplied(colour.r, colour.g, colour.b, colour.a)
}

/// Status line colours.
pub const STATUS_TEXT: Color32 = Color32::from_rgb(209, 213, 219); // Gray 300
pub const STATUS_ERROR_TEXT: Color32 = Color32::from_rgb(248, 113, 113); // Red 400

/// Layout constants.
pub const LEVEL_COMBO_WIDTH: f32 = 110.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transparent_maps_to_transparent() {
        assert_eq!(to_color32(Colour::TRANSPARENT), Color32::TRANSPARENT);
    }

    #[test]
    fn test_opaque_colours_are_preserved() {
        assert_eq!(to_color32(Colour::RED), Color32::from_rgb(255, 0, 0));
        assert_eq!(to_color32(Colour::DARK_GREEN), Color32::from_rgb(0, 128, 0));
    }
}
