//! Primitive emitters into an [`egui::epaint::Mesh`].
//!
//! Each function appends colored vertices and triangle indices for one
//! shape; none of them clears or otherwise owns the mesh, so a body draw
//! is just a sequence of these calls. All coordinates are chart-local
//! (origin bottom-left, y up).

use egui::epaint::Mesh;
use egui::{Color32, Pos2, Vec2};

use crate::data::series::{SerieLabel, SymbolType};

/// Rotate `point` around `center` by `degrees`, counter-clockwise.
pub fn rotate_around(point: Pos2, center: Pos2, degrees: f32) -> Pos2 {
    let radians = degrees.to_radians();
    let (sin, cos) = radians.sin_cos();
    let d = point - center;
    Pos2::new(
        center.x + d.x * cos - d.y * sin,
        center.y + d.x * sin + d.y * cos,
    )
}

/// A filled triangle, vertices in the given order.
pub fn draw_triangle(mesh: &mut Mesh, p1: Pos2, p2: Pos2, p3: Pos2, color: Color32) {
    let base = mesh.vertices.len() as u32;
    mesh.colored_vertex(p1, color);
    mesh.colored_vertex(p2, color);
    mesh.colored_vertex(p3, color);
    mesh.add_triangle(base, base + 1, base + 2);
}

/// A filled quad from four corners in winding order (two triangles).
pub fn draw_polygon(mesh: &mut Mesh, p1: Pos2, p2: Pos2, p3: Pos2, p4: Pos2, color: Color32) {
    let base = mesh.vertices.len() as u32;
    mesh.colored_vertex(p1, color);
    mesh.colored_vertex(p2, color);
    mesh.colored_vertex(p3, color);
    mesh.colored_vertex(p4, color);
    mesh.add_triangle(base, base + 1, base + 2);
    mesh.add_triangle(base, base + 2, base + 3);
}

/// An axis-aligned square centered on `center` with the given
/// half-extent.
pub fn draw_rect(mesh: &mut Mesh, center: Pos2, half_extent: f32, color: Color32) {
    draw_polygon(
        mesh,
        Pos2::new(center.x - half_extent, center.y + half_extent),
        Pos2::new(center.x + half_extent, center.y + half_extent),
        Pos2::new(center.x + half_extent, center.y - half_extent),
        Pos2::new(center.x - half_extent, center.y - half_extent),
        color,
    );
}

/// A filled circle as a triangle fan: one center vertex plus one ring
/// vertex per segment. Degenerate segment counts are clamped to 3.
pub fn draw_circle(mesh: &mut Mesh, center: Pos2, radius: f32, color: Color32, segments: u32) {
    let segments = segments.max(3);
    let base = mesh.vertices.len() as u32;
    mesh.colored_vertex(center, color);
    for i in 0..segments {
        let angle = std::f32::consts::TAU * i as f32 / segments as f32;
        mesh.colored_vertex(
            Pos2::new(center.x + radius * angle.cos(), center.y + radius * angle.sin()),
            color,
        );
    }
    for i in 0..segments {
        let next = (i + 1) % segments;
        mesh.add_triangle(base, base + 1 + i, base + 1 + next);
    }
}

/// A ring: an outer filled circle with the center punched back out in
/// the background color at `radius - thickness`.
pub fn draw_empty_circle(
    mesh: &mut Mesh,
    center: Pos2,
    radius: f32,
    thickness: f32,
    color: Color32,
    background: Color32,
    segments: u32,
) {
    draw_circle(mesh, center, radius, color, segments);
    draw_circle(mesh, center, radius - thickness, background, segments);
}

/// A thick line segment as a quad; `width` is the half-thickness on each
/// side of the segment. Zero-length segments draw nothing.
pub fn draw_line(mesh: &mut Mesh, from: Pos2, to: Pos2, width: f32, color: Color32) {
    let delta = to - from;
    let length = delta.length();
    if length == 0.0 {
        return;
    }
    let dir = delta / length;
    let offset = Vec2::new(-dir.y, dir.x) * width;
    draw_polygon(mesh, from - offset, from + offset, to + offset, to - offset, color);
}

/// The marker symbol for a data point. `thickness` and `background` only
/// apply to the hollow variants; `segments` to the round ones.
#[allow(clippy::too_many_arguments)]
pub fn draw_symbol(
    mesh: &mut Mesh,
    symbol: SymbolType,
    size: f32,
    thickness: f32,
    pos: Pos2,
    color: Color32,
    background: Color32,
    segments: u32,
) {
    match symbol {
        SymbolType::None => {}
        SymbolType::Circle => draw_circle(mesh, pos, size, color, segments),
        SymbolType::EmptyCircle => {
            draw_empty_circle(mesh, pos, size, thickness, color, background, segments)
        }
        SymbolType::Rect => draw_rect(mesh, pos, size, color),
        SymbolType::Triangle => {
            // Equilateral, apex up: base corners sit 30 degrees below the
            // horizontal through the center.
            let x = size * 30f32.to_radians().cos();
            let y = size * 30f32.to_radians().sin();
            draw_triangle(
                mesh,
                Pos2::new(pos.x - x, pos.y - y),
                Pos2::new(pos.x, pos.y + size),
                Pos2::new(pos.x + x, pos.y - y),
                color,
            );
        }
        SymbolType::Diamond => draw_polygon(
            mesh,
            Pos2::new(pos.x - size, pos.y),
            Pos2::new(pos.x, pos.y + size),
            Pos2::new(pos.x + size, pos.y),
            Pos2::new(pos.x, pos.y - size),
            color,
        ),
    }
}

/// The background box of a data label, plus its border when enabled.
///
/// The box is centered on `label_pos` shifted by the style offset; a
/// positive `rotate` spins every corner around that center. Border
/// strokes sit outside the box, offset outward by the border width, with
/// each segment's ends extended by twice the border width so the four
/// strokes tile the corners.
pub fn draw_label_background(
    mesh: &mut Mesh,
    label_pos: Pos2,
    half_width: f32,
    half_height: f32,
    style: &SerieLabel,
) {
    let center = label_pos + style.offset;
    let place = |x: f32, y: f32| -> Pos2 {
        let p = Pos2::new(center.x + x, center.y + y);
        if style.rotate > 0.0 {
            rotate_around(p, center, style.rotate)
        } else {
            p
        }
    };

    draw_polygon(
        mesh,
        place(-half_width, half_height),
        place(half_width, half_height),
        place(half_width, -half_height),
        place(-half_width, -half_height),
        style.background_color,
    );

    if style.border {
        let bw = style.border_width;
        let edges = [
            // top, right, bottom, left
            (
                place(-half_width, half_height + bw),
                place(half_width + 2.0 * bw, half_height + bw),
            ),
            (
                place(half_width + bw, half_height),
                place(half_width + bw, -half_height - 2.0 * bw),
            ),
            (
                place(half_width, -half_height - bw),
                place(-half_width - 2.0 * bw, -half_height - bw),
            ),
            (
                place(-half_width - bw, -half_height),
                place(-half_width - bw, half_height + 2.0 * bw),
            ),
        ];
        for (from, to) in edges {
            draw_line(mesh, from, to, bw, style.border_color);
        }
    }
}
