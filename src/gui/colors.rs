use eframe::egui::{self, Color32};

/// Window and panel background
pub const BACKGROUND: Color32 = Color32::from_rgb(0x18, 0x19, 0x1A);
/// Tiles and the search box
pub const SURFACE: Color32 = Color32::from_rgb(0x23, 0x26, 0x29);
/// Tile under the pointer
pub const SURFACE_HOVER: Color32 = Color32::from_rgb(0x3A, 0x3B, 0x3C);
/// Search box while an emoji is dragged over it
pub const DROP_TARGET: Color32 = Color32::from_rgb(0x2D, 0x88, 0xFF);
pub const TEXT: Color32 = Color32::from_rgb(0xE4, 0xE6, 0xEB);
pub const TEXT_DIM: Color32 = Color32::from_rgb(0xB0, 0xB3, 0xB8);

pub const CORNER_RADIUS: f32 = 8.0;

/// Dark theme applied once at start-up.
pub fn visuals() -> egui::Visuals {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = BACKGROUND;
    visuals.window_fill = BACKGROUND;
    visuals.extreme_bg_color = SURFACE;
    visuals.override_text_color = Some(TEXT);
    visuals
}
