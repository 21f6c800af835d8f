// LogWidget - core/render.rs
//
// Line rendering: display text and colours for a record under the current
// formatting toggles. Colours are plain RGBA values here; the UI layer
// converts them to its own colour type.

use crate::core::model::{LogRecord, Severity};

/// An 8-bit RGBA colour (unmultiplied alpha).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    pub const TRANSPARENT: Colour = Colour::rgba(0, 0, 0, 0);
    pub const WHITE: Colour = Colour::rgb(255, 255, 255);
    pub const DARK_GREEN: Colour = Colour::rgb(0, 128, 0);
    pub const YELLOW: Colour = Colour::rgb(255, 255, 0);
    pub const RED: Colour = Colour::rgb(255, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Foreground/background pair for one severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityColours {
    pub foreground: Colour,
    pub background: Colour,
}

/// Colours used for every line when colourising is switched off.
pub const NEUTRAL_COLOURS: SeverityColours = SeverityColours {
    foreground: Colour::WHITE,
    background: Colour::TRANSPARENT,
};

/// Fixed severity colour table. Only CRITICAL gets a filled background.
pub fn severity_colours(level: Severity) -> SeverityColours {
    let (foreground, background) = match level {
        Severity::Debug => (Colour::DARK_GREEN, Colour::TRANSPARENT),
        Severity::Info => (Colour::WHITE, Colour::TRANSPARENT),
        Severity::Warning => (Colour::YELLOW, Colour::TRANSPARENT),
        Severity::Error => (Colour::RED, Colour::TRANSPARENT),
        Severity::Critical => (Colour::WHITE, Colour::RED),
    };
    SeverityColours {
        foreground,
        background,
    }
}

/// Formatting toggles applied to every rendered line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatState {
    /// Prefix `[logger_name] `.
    pub show_name: bool,
    /// Prefix `[timestamp] `.
    pub show_date: bool,
    /// Prefix `[file:line] `.
    pub show_location: bool,
    /// Use the severity colour table instead of neutral colours.
    pub colorize: bool,
}

impl Default for FormatState {
    fn default() -> Self {
        Self {
            show_name: true,
            show_date: true,
            show_location: true,
            colorize: true,
        }
    }
}

/// Display text and colours of one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    pub text: String,
    pub foreground: Colour,
    pub background: Colour,
}

/// Builds the display text: optional `[name] [date] [location] ` prefixes
/// in that fixed order (each only when enabled and non-empty), then
/// `LEVEL: message`.
pub fn render_text(record: &LogRecord, format: &FormatState) -> String {
    let mut text = String::new();
    let prefixes = [
        (format.show_name, &record.logger_name),
        (format.show_date, &record.timestamp),
        (format.show_location, &record.source_location),
    ];
    for (enabled, field) in prefixes {
        if enabled && !field.is_empty() {
            text.push('[');
            text.push_str(field);
            text.push_str("] ");
        }
    }
    text.push_str(record.level.name());
    text.push_str(": ");
    text.push_str(&record.message);
    text
}

/// Picks the colour pair for a record under the current formatting state.
pub fn render_colours(record: &LogRecord, format: &FormatState) -> SeverityColours {
    if format.colorize {
        severity_colours(record.level)
    } else {
        NEUTRAL_COLOURS
    }
}

/// Renders text and colours together.
pub fn render(record: &LogRecord, format: &FormatState) -> RenderedLine {
    let colours = render_colours(record, format);
    RenderedLine {
        text: render_text(record, format),
        foreground: colours.foreground,
        background: colours.background,
    }
}
