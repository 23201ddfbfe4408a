use raylib::prelude::Color;

pub(super) const WHITE: Color = Color { r: 255, g: 255, b: 255, a: 255 };
pub(super) const BLACK: Color = Color { r: 0, g: 0, b: 0, a: 255 };
pub(super) const BLUE: Color = Color { r: 50, g: 150, b: 255, a: 255 };
pub(super) const RED: Color = Color { r: 255, g: 50, b: 50, a: 255 };
pub(super) const GREEN: Color = Color { r: 50, g: 255, b: 50, a: 255 };
pub(super) const YELLOW: Color = Color { r: 255, g: 255, b: 50, a: 255 };
pub(super) const GLOW: Color = Color { r: 100, g: 200, b: 255, a: 255 };

pub(super) const EXIT_BUTTON_SIZE: f32 = 80.0;
pub(super) const EXIT_BUTTON_MARGIN: f32 = 20.0;
pub(super) const EXIT_CROSS_OFFSET: f32 = 20.0;
pub(super) const OUTLINE: f32 = 5.0;
pub(super) const GLOW_GAP: f32 = 10.0;
pub(super) const STATUS_FONT_SIZE: i32 = 36;
