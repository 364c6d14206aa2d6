//! Raw palette constants as ratatui Color::Rgb values.

use ratatui::style::Color;

/// Dark slate surfaces with an amber accent.
pub struct EmberColors;

#[allow(dead_code)]
impl EmberColors {
    pub const BG: Color = Color::Rgb(2, 6, 23); // #020617
    pub const SURFACE: Color = Color::Rgb(15, 23, 42); // #0F172A
    pub const BORDER: Color = Color::Rgb(30, 41, 59); // #1E293B
    pub const ACCENT: Color = Color::Rgb(245, 158, 11); // #F59E0B
    pub const TEXT_PRIMARY: Color = Color::Rgb(226, 232, 240); // #E2E8F0
    pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184); // #94A3B8
    pub const SUCCESS: Color = Color::Rgb(16, 185, 129); // #10B981
    pub const WARNING: Color = Color::Rgb(251, 191, 36); // #FBBF24
    pub const ERROR: Color = Color::Rgb(248, 113, 113); // #F87171
}

/// Light palette for bright terminals.
pub struct PaperColors;

#[allow(dead_code)]
impl PaperColors {
    pub const BG: Color = Color::Rgb(248, 250, 252); // #F8FAFC
    pub const SURFACE: Color = Color::Rgb(255, 255, 255); // #FFFFFF
    pub const BORDER: Color = Color::Rgb(203, 213, 225); // #CBD5E1
    pub const ACCENT: Color = Color::Rgb(180, 83, 9); // #B45309
    pub const TEXT_PRIMARY: Color = Color::Rgb(30, 41, 59); // #1E293B
    pub const TEXT_SECONDARY: Color = Color::Rgb(100, 116, 139); // #64748B
    pub const SUCCESS: Color = Color::Rgb(4, 120, 87); // #047857
    pub const WARNING: Color = Color::Rgb(180, 83, 9); // #B45309
    pub const ERROR: Color = Color::Rgb(185, 28, 28); // #B91C1C
}
