use eframe::egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, Ui};

use crate::camera::{Camera, Point3, ViewPreset};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// 3D bar chart (central panel)
// ---------------------------------------------------------------------------

/// Fraction of the panel kept free around the fitted scene.
const FIT_MARGIN: f32 = 0.92;

/// Per-axis face shading so the cuboids read as volumes under a flat
/// orthographic projection: top lightest, x-facing sides darkest.
const FACE_SHADE_TOP: f32 = 1.0;
const FACE_SHADE_Y: f32 = 0.82;
const FACE_SHADE_X: f32 = 0.68;

const AXIS_COLOR: Color32 = Color32::from_gray(120);

/// Render one pass of the bar chart.  Both passes go through here; the view
/// preset supplies the camera and axis decoration.
pub fn block_chart(ui: &mut Ui, state: &AppState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(state.view.title);
    });
    ui.add_space(4.0);

    let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
    let text_color = ui.visuals().text_color();

    draw_scene(&painter, response.rect, state, text_color);
}

fn draw_scene(
    painter: &eframe::egui::Painter,
    rect: Rect,
    state: &AppState,
    text_color: Color32,
) {
    let scene = &state.scene;
    let view = &state.view;
    let side = scene.grid.side_length() as f32;
    let z_max = (scene.dataset.max_layer + 1) as f32 * state.bar_height;

    let frame = ChartFrame::fit(view.camera, rect, side, z_max);

    draw_axes(painter, &frame, scene.grid.side_length(), scene.dataset.max_layer,
        state.bar_height, view, text_color);

    // One cuboid per record at (col, row, layer * height).  Records whose
    // derived cell falls outside the square are skipped; the derivation
    // guarantees this never fires for in-layout blocks.
    let mut bars: Vec<Bar> = scene
        .dataset
        .records
        .iter()
        .filter_map(|record| {
            let cell = scene.grid.cell(record.block);
            if !scene.grid.contains(cell) {
                return None;
            }
            let x = cell.col as f32;
            let y = cell.row as f32;
            let z = record.layer as f32 * state.bar_height;
            let center = Point3::new(x + 0.5, y + 0.5, z + state.bar_height * 0.5);
            Some(Bar {
                x,
                y,
                z,
                color: scene.colors.color_for(record.value),
                depth: view.camera.depth(center),
            })
        })
        .collect();

    // Painter's algorithm: furthest bars first.
    bars.sort_by(|a, b| b.depth.total_cmp(&a.depth));

    for bar in &bars {
        for face in visible_faces(bar.x, bar.y, bar.z, state.bar_height, &view.camera) {
            let points: Vec<Pos2> = face.corners.iter().map(|&p| frame.to_screen(p)).collect();
            let fill = shade(bar.color, face.shade);
            painter.add(Shape::convex_polygon(points, fill, Stroke::NONE));
        }
    }
}

struct Bar {
    x: f32,
    y: f32,
    z: f32,
    color: Color32,
    depth: f32,
}

// ---------------------------------------------------------------------------
// Screen fitting
// ---------------------------------------------------------------------------

/// Maps chart space into the panel rect: project, center, scale, flip y.
struct ChartFrame {
    camera: Camera,
    center: (f32, f32),
    scale: f32,
    rect: Rect,
}

impl ChartFrame {
    /// Fit the scene volume (padded for tick and axis labels) into `rect`.
    fn fit(camera: Camera, rect: Rect, side: f32, z_max: f32) -> Self {
        let pad = 1.4;
        let mut min = (f32::INFINITY, f32::INFINITY);
        let mut max = (f32::NEG_INFINITY, f32::NEG_INFINITY);
        for &x in &[-pad, side] {
            for &y in &[-pad, side] {
                for &z in &[0.0, z_max] {
                    let (px, py) = camera.project(Point3::new(x, y, z));
                    min.0 = min.0.min(px);
                    min.1 = min.1.min(py);
                    max.0 = max.0.max(px);
                    max.1 = max.1.max(py);
                }
            }
        }

        let span_x = (max.0 - min.0).max(f32::EPSILON);
        let span_y = (max.1 - min.1).max(f32::EPSILON);
        let scale = (rect.width() / span_x).min(rect.height() / span_y) * FIT_MARGIN;

        ChartFrame {
            camera,
            center: ((min.0 + max.0) * 0.5, (min.1 + max.1) * 0.5),
            scale,
            rect,
        }
    }

    fn to_screen(&self, p: Point3) -> Pos2 {
        let (px, py) = self.camera.project(p);
        Pos2::new(
            self.rect.center().x + (px - self.center.0) * self.scale,
            self.rect.center().y - (py - self.center.1) * self.scale,
        )
    }

    fn line(&self, painter: &eframe::egui::Painter, a: Point3, b: Point3, stroke: Stroke) {
        painter.line_segment([self.to_screen(a), self.to_screen(b)], stroke);
    }
}

// ---------------------------------------------------------------------------
// Axes and labels
// ---------------------------------------------------------------------------

fn draw_axes(
    painter: &eframe::egui::Painter,
    frame: &ChartFrame,
    side: usize,
    max_layer: u32,
    bar_height: f32,
    view: &ViewPreset,
    text_color: Color32,
) {
    let stroke = Stroke::new(1.0, AXIS_COLOR);
    let side_f = side as f32;
    let tick_font = FontId::proportional(10.0);
    let label_font = FontId::proportional(13.0);

    // x axis: block columns.
    frame.line(painter, Point3::new(0.0, 0.0, 0.0), Point3::new(side_f, 0.0, 0.0), stroke);
    for i in 0..=side {
        painter.text(
            frame.to_screen(Point3::new(i as f32, -0.35, 0.0)),
            Align2::CENTER_CENTER,
            i.to_string(),
            tick_font.clone(),
            text_color,
        );
    }
    painter.text(
        frame.to_screen(Point3::new(side_f * 0.5, -1.1, 0.0)),
        Align2::CENTER_CENTER,
        "Block Column Index",
        label_font.clone(),
        text_color,
    );

    // y axis: block rows.
    frame.line(painter, Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, side_f, 0.0), stroke);
    for i in 0..=side {
        painter.text(
            frame.to_screen(Point3::new(-0.35, i as f32, 0.0)),
            Align2::CENTER_CENTER,
            i.to_string(),
            tick_font.clone(),
            text_color,
        );
    }
    painter.text(
        frame.to_screen(Point3::new(-1.1, side_f * 0.5, 0.0)),
        Align2::CENTER_CENTER,
        "Block Row Index",
        label_font.clone(),
        text_color,
    );

    // z axis: layers.  Suppressed entirely in the top-down pass.
    if view.show_z_axis {
        let z_top = (max_layer + 1) as f32 * bar_height;
        frame.line(painter, Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 0.0, z_top), stroke);
        for k in 0..=(max_layer + 1) {
            painter.text(
                frame.to_screen(Point3::new(-0.3, -0.3, k as f32 * bar_height)),
                Align2::CENTER_CENTER,
                k.to_string(),
                tick_font.clone(),
                text_color,
            );
        }
        painter.text(
            frame.to_screen(Point3::new(-0.9, -0.9, z_top * 0.6)),
            Align2::CENTER_CENTER,
            "Layer Number",
            label_font,
            text_color,
        );
    }
}

// ---------------------------------------------------------------------------
// Cuboid geometry
// ---------------------------------------------------------------------------

struct Face3 {
    corners: [Point3; 4],
    shade: f32,
}

/// Camera-facing faces of a unit-footprint cuboid with base corner
/// `(x, y, z)` and extrusion `h`.  Side faces come first so the top paints
/// over their shared edges.
fn visible_faces(x: f32, y: f32, z: f32, h: f32, camera: &Camera) -> Vec<Face3> {
    let (vx, vy, vz) = camera.view_vector();
    let (x1, y1, z1) = (x + 1.0, y + 1.0, z + h);
    let mut faces = Vec::with_capacity(3);

    if vy < -f32::EPSILON {
        faces.push(Face3 {
            corners: [
                Point3::new(x, y, z),
                Point3::new(x1, y, z),
                Point3::new(x1, y, z1),
                Point3::new(x, y, z1),
            ],
            shade: FACE_SHADE_Y,
        });
    } else if vy > f32::EPSILON {
        faces.push(Face3 {
            corners: [
                Point3::new(x, y1, z),
                Point3::new(x1, y1, z),
                Point3::new(x1, y1, z1),
                Point3::new(x, y1, z1),
            ],
            shade: FACE_SHADE_Y,
        });
    }

    if vx < -f32::EPSILON {
        faces.push(Face3 {
            corners: [
                Point3::new(x, y, z),
                Point3::new(x, y1, z),
                Point3::new(x, y1, z1),
                Point3::new(x, y, z1),
            ],
            shade: FACE_SHADE_X,
        });
    } else if vx > f32::EPSILON {
        faces.push(Face3 {
            corners: [
                Point3::new(x1, y, z),
                Point3::new(x1, y1, z),
                Point3::new(x1, y1, z1),
                Point3::new(x1, y, z1),
            ],
            shade: FACE_SHADE_X,
        });
    }

    if vz > f32::EPSILON {
        faces.push(Face3 {
            corners: [
                Point3::new(x, y, z1),
                Point3::new(x1, y, z1),
                Point3::new(x1, y1, z1),
                Point3::new(x, y1, z1),
            ],
            shade: FACE_SHADE_TOP,
        });
    }

    faces
}

/// Darken the rgb channels, keeping opacity.  `Color32` stores
/// premultiplied components, so they are scaled and rebuilt as-is.
fn shade(color: Color32, factor: f32) -> Color32 {
    let f = factor.clamp(0.0, 1.0);
    Color32::from_rgba_premultiplied(
        (color.r() as f32 * f) as u8,
        (color.g() as f32 * f) as u8,
        (color.b() as f32 * f) as u8,
        color.a(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{ISOMETRIC, TOP_DOWN};

    #[test]
    fn isometric_bars_show_three_faces() {
        let faces = visible_faces(0.0, 0.0, 0.0, 1.0, &ISOMETRIC.camera);
        assert_eq!(faces.len(), 3);
        // Top face is drawn last.
        assert_eq!(faces.last().unwrap().shade, FACE_SHADE_TOP);
    }

    #[test]
    fn top_down_bars_show_only_the_top_face() {
        let faces = visible_faces(2.0, 1.0, 3.0, 1.0, &TOP_DOWN.camera);
        assert_eq!(faces.len(), 1);
        assert_eq!(faces[0].shade, FACE_SHADE_TOP);
        // All four corners sit at the extruded height.
        assert!(faces[0].corners.iter().all(|c| c.z == 4.0));
    }

    #[test]
    fn shading_preserves_opacity() {
        let c = Color32::from_rgba_premultiplied(100, 150, 200, 230);
        let shaded = shade(c, 0.5);
        assert_eq!(shaded.a(), 230);
        assert_eq!(shaded.r(), 50);
    }
}
