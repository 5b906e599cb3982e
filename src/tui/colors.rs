use ratatui::style::Color;

pub const BACKGROUND: Color = Color::Rgb(0x18, 0x19, 0x1A);
pub const SURFACE: Color = Color::Rgb(0x23, 0x26, 0x29);
pub const TEXT: Color = Color::Rgb(0xE4, 0xE6, 0xEB);
pub const TEXT_DIM: Color = Color::Rgb(0xB0, 0xB3, 0xB8);
pub const ACCENT: Color = Color::Rgb(0x2D, 0x88, 0xFF);

/// Border colour for the focused or unfocused pane
pub fn border(focused: bool) -> Color {
    if focused {
        ACCENT
    } else {
        TEXT_DIM
    }
}
