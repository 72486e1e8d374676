//! Color theme and glyphs for the Sentience TUI.
//!
//! Uses the Kanagawa Wave palette by default with an optional high-contrast override.

use ratatui::style::{Color, Modifier, Style};

use sentience_types::ui::UiOptions;
use sentience_types::{Tone, Verdict};

/// Kanagawa Wave color palette constants.
mod colors {
    use super::Color;

    // === Backgrounds (Sumi Ink) ===
    pub const BG_DARK: Color = Color::Rgb(22, 22, 29); // sumiInk0
    pub const BG_PANEL: Color = Color::Rgb(31, 31, 40); // sumiInk3
    pub const BG_HIGHLIGHT: Color = Color::Rgb(42, 42, 55); // sumiInk4
    pub const BG_BORDER: Color = Color::Rgb(84, 84, 109); // sumiInk6

    // === Foregrounds (Fuji) ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 215, 186); // fujiWhite
    pub const TEXT_SECONDARY: Color = Color::Rgb(200, 192, 147); // oldWhite
    pub const TEXT_MUTED: Color = Color::Rgb(114, 113, 105); // fujiGray

    // === Primary/Brand ===
    pub const PRIMARY: Color = Color::Rgb(149, 127, 184); // oniViolet

    // === Accent Colors ===
    pub const CYAN: Color = Color::Rgb(127, 180, 202); // springBlue
    pub const GREEN: Color = Color::Rgb(152, 187, 108); // springGreen
    pub const YELLOW: Color = Color::Rgb(230, 195, 132); // carpYellow
    pub const ORANGE: Color = Color::Rgb(255, 160, 102); // surimiOrange
    pub const RED: Color = Color::Rgb(255, 93, 98); // peachRed
    pub const BLUE: Color = Color::Rgb(126, 156, 216); // crystalBlue

    // === Semantic Aliases ===
    pub const ACCENT: Color = CYAN;
    pub const ERROR: Color = RED;
    pub const PEACH: Color = ORANGE;

    // === Verdict Colors ===
    pub const VERDICT_CONSCIOUS: Color = GREEN;
    pub const VERDICT_NOT: Color = RED;
    pub const VERDICT_META: Color = BLUE;
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_highlight: Color,
    pub bg_border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub primary: Color,
    pub accent: Color,
    pub error: Color,
    pub peach: Color,
    pub green: Color,
    pub yellow: Color,
    pub red: Color,
    pub verdict_conscious: Color,
    pub verdict_not: Color,
    pub verdict_meta: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_panel: colors::BG_PANEL,
            bg_highlight: colors::BG_HIGHLIGHT,
            bg_border: colors::BG_BORDER,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            primary: colors::PRIMARY,
            accent: colors::ACCENT,
            error: colors::ERROR,
            peach: colors::PEACH,
            green: colors::GREEN,
            yellow: colors::YELLOW,
            red: colors::RED,
            verdict_conscious: colors::VERDICT_CONSCIOUS,
            verdict_not: colors::VERDICT_NOT,
            verdict_meta: colors::VERDICT_META,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            bg_highlight: Color::DarkGray,
            bg_border: Color::Gray,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::Gray,
            primary: Color::White,
            accent: Color::Cyan,
            error: Color::Red,
            peach: Color::Yellow,
            green: Color::Green,
            yellow: Color::Yellow,
            red: Color::Red,
            verdict_conscious: Color::Green,
            verdict_not: Color::Red,
            verdict_meta: Color::Cyan,
        }
    }

    #[must_use]
    pub fn verdict(&self, verdict: Verdict) -> Color {
        match verdict {
            Verdict::Conscious => self.verdict_conscious,
            Verdict::Not => self.verdict_not,
            Verdict::Meta => self.verdict_meta,
        }
    }

    #[must_use]
    pub fn tone(&self, tone: Tone) -> Color {
        match tone {
            Tone::Affirmative => self.green,
            Tone::Negative => self.red,
            Tone::Neutral => self.yellow,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// ASCII/Unicode glyphs for markers and separators.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub selected: &'static str,
    pub affirmative: &'static str,
    pub negative: &'static str,
    pub neutral: &'static str,
    pub result: &'static str,
    pub bullet: &'static str,
    pub dash: &'static str,
    pub separator: &'static str,
    pub track: &'static str,
    pub thumb: &'static str,
}

impl Glyphs {
    #[must_use]
    pub fn tone(&self, tone: Tone) -> &'static str {
        match tone {
            Tone::Affirmative => self.affirmative,
            Tone::Negative => self.negative,
            Tone::Neutral => self.neutral,
        }
    }
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            selected: ">",
            affirmative: "+",
            negative: "-",
            neutral: "~",
            result: "=",
            bullet: "*",
            dash: "-",
            separator: "|",
            track: "|",
            thumb: "#",
        }
    } else {
        Glyphs {
            selected: "▸",
            affirmative: "✓",
            negative: "✗",
            neutral: "◦",
            result: "◆",
            bullet: "•",
            dash: "—",
            separator: "·",
            track: "│",
            thumb: "█",
        }
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Color, Modifier, Palette, Style};

    #[must_use]
    pub fn title(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn badge(color: Color, palette: &Palette) -> Style {
        Style::default()
            .fg(palette.bg_dark)
            .bg(color)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn selected_option(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .bg(palette.bg_highlight)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn detail(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_secondary)
            .add_modifier(Modifier::ITALIC)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.peach)
            .add_modifier(Modifier::BOLD)
    }
}
