//! Theme constants for the replay viewer

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(245, 245, 240);
pub const GRID_LINE: Color32 = Color32::from_rgb(128, 128, 128);

// Token colors: agent 0 red, agent 1 blue
pub const AGENT0_TOKEN: Color32 = Color32::from_rgb(220, 50, 47);
pub const AGENT1_TOKEN: Color32 = Color32::from_rgb(38, 110, 210);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(250, 250, 250);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 200, 50);

// Panel colors
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Sizes
pub const BOARD_MARGIN: f32 = 12.0;
pub const TOKEN_RADIUS_RATIO: f32 = 0.4;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;

/// Token color of agent `index` (0 or 1)
pub fn token_color(index: usize) -> Color32 {
    if index == 0 {
        AGENT0_TOKEN
    } else {
        AGENT1_TOKEN
    }
}
