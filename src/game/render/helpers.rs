use raylib::prelude::{Color, RaylibDraw, RaylibDrawHandle, Rectangle, Vector2};

use crate::entities::{Spike, SpikeOrientation};
use crate::math::{rect_center, vec2};

use super::super::constants::{BLACK, EXIT_CROSS_OFFSET, GREEN, OUTLINE, RED, WHITE};

pub(super) fn draw_text_centered(
    d: &mut RaylibDrawHandle,
    text: &str,
    center: Vector2,
    size: i32,
    color: Color,
) {
    let width = d.measure_text(text, size);
    d.draw_text(
        text,
        center.x as i32 - width / 2,
        center.y as i32 - size / 2,
        size,
        color,
    );
}

pub(super) fn draw_button(d: &mut RaylibDrawHandle, rect: &Rectangle, label: &str, size: i32) {
    d.draw_rectangle_rec(*rect, GREEN);
    d.draw_rectangle_lines_ex(*rect, 2.0, WHITE);
    draw_text_centered(d, label, rect_center(rect), size, WHITE);
}

pub(super) fn draw_exit_button(d: &mut RaylibDrawHandle, rect: &Rectangle) {
    d.draw_rectangle_rec(*rect, RED);
    d.draw_rectangle_lines_ex(*rect, 3.0, WHITE);
    let c = rect_center(rect);
    let off = EXIT_CROSS_OFFSET;
    d.draw_line_ex(vec2(c.x - off, c.y - off), vec2(c.x + off, c.y + off), OUTLINE, WHITE);
    d.draw_line_ex(vec2(c.x + off, c.y - off), vec2(c.x - off, c.y + off), OUTLINE, WHITE);
}

/// Tip first, then the two base corners, wound the way raylib fills.
pub(super) fn spike_triangle(spike: &Spike) -> [Vector2; 3] {
    let tip = spike.tip();
    let left = spike.x;
    let right = spike.x + spike.width;
    match spike.orientation() {
        SpikeOrientation::Up => {
            let base = spike.y() + spike.height;
            [tip, vec2(left, base), vec2(right, base)]
        }
        SpikeOrientation::Down => {
            let base = spike.y();
            [tip, vec2(right, base), vec2(left, base)]
        }
    }
}

pub(super) fn draw_spike(d: &mut RaylibDrawHandle, spike: &Spike) {
    let [a, b, c] = spike_triangle(spike);
    d.draw_triangle(a, b, c, RED);
    for (from, to) in [(a, b), (b, c), (c, a)] {
        d.draw_line_ex(from, to, OUTLINE, BLACK);
    }
}

pub(super) fn draw_outline_circle(
    d: &mut RaylibDrawHandle,
    center: Vector2,
    radius: f32,
    thickness: f32,
    color: Color,
) {
    d.draw_ring(center, radius - thickness, radius, 0.0, 360.0, 64, color);
}
