use raylib::prelude::{Rectangle, Vector2};

pub fn vec2(x: f32, y: f32) -> Vector2 {
    Vector2 { x, y }
}

pub fn vec2_sub(a: Vector2, b: Vector2) -> Vector2 {
    vec2(a.x - b.x, a.y - b.y)
}

pub fn vec2_length(v: Vector2) -> f32 {
    (v.x * v.x + v.y * v.y).sqrt()
}

pub fn vec2_distance(a: Vector2, b: Vector2) -> f32 {
    vec2_length(vec2_sub(a, b))
}

pub fn rect(x: f32, y: f32, width: f32, height: f32) -> Rectangle {
    Rectangle {
        x,
        y,
        width,
        height,
    }
}

pub fn rect_center(r: &Rectangle) -> Vector2 {
    vec2(r.x + r.width * 0.5, r.y + r.height * 0.5)
}

pub fn point_in_bounds(pos: Vector2, bounds: &Rectangle) -> bool {
    pos.x >= bounds.x
        && pos.x <= bounds.x + bounds.width
        && pos.y >= bounds.y
        && pos.y <= bounds.y + bounds.height
}

/// Strict overlap: rectangles that only share an edge do not intersect.
pub fn rects_intersect(a: &Rectangle, b: &Rectangle) -> bool {
    a.x < b.x + b.width && b.x < a.x + a.width && a.y < b.y + b.height && b.y < a.y + a.height
}
