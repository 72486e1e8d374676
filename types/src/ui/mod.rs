//! UI option types shared by configuration and the TUI layer.
//!
//! Pure data with no ratatui dependency.

/// Rendering preferences resolved from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiOptions {
    /// Use ASCII-only glyphs for markers and badges.
    pub ascii_only: bool,
    /// Use a high-contrast color palette.
    pub high_contrast: bool,
}
