use eframe::egui::{Align2, Color32, CornerRadius, FontId, Pos2, Rect, RichText, Sense, Ui, Vec2};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – legend and dataset summary
// ---------------------------------------------------------------------------

/// Render the left legend panel.
pub fn side_panel(ui: &mut Ui, state: &AppState) {
    ui.heading("Value Bins");
    ui.separator();
    color_bar(ui, state);

    ui.add_space(12.0);
    ui.heading("Dataset");
    ui.separator();
    let scene = &state.scene;
    ui.label(format!("{} records", scene.dataset.len()));
    ui.label(format!("{} blocks", scene.dataset.block_count()));
    ui.label(format!(
        "grid {0} × {0}",
        scene.grid.side_length()
    ));
    ui.label(format!("layers 0..={}", scene.dataset.max_layer));
    let realized = scene.colors.bins().realized_bin_count();
    ui.label(format!("{realized} value bins"));

    ui.add_space(12.0);
    ui.heading("View");
    ui.separator();
    let cam = state.view.camera;
    ui.label(format!("elevation {:.0}°", cam.elevation_deg));
    ui.label(format!("azimuth {:.0}°", cam.azimuth_deg));
    if !state.view.show_z_axis {
        ui.label("z axis hidden");
    }
}

/// Vertical color-scale legend: the full ramp, darkest (max) at the top,
/// annotated with the observed value range.
fn color_bar(ui: &mut Ui, state: &AppState) {
    let ramp = state.scene.colors.ramp();
    let (min_label, max_label) = state.scene.colors.range_labels();

    let desired = Vec2::new(ui.available_width().min(140.0), 220.0);
    let (response, painter) = ui.allocate_painter(desired, Sense::hover());
    let rect = response.rect;

    let strip = Rect::from_min_size(rect.min, Vec2::new(22.0, rect.height()));
    let slice_h = strip.height() / ramp.len() as f32;
    for (i, &color) in ramp.iter().enumerate() {
        // Index 0 is the lightest shade; draw it at the bottom.
        let top = strip.bottom() - (i + 1) as f32 * slice_h;
        let slice = Rect::from_min_size(
            Pos2::new(strip.left(), top),
            Vec2::new(strip.width(), slice_h + 0.5),
        );
        painter.rect_filled(slice, CornerRadius::ZERO, color);
    }

    let text_color = ui.visuals().text_color();
    let font = FontId::proportional(11.0);
    painter.text(
        Pos2::new(strip.right() + 8.0, strip.top()),
        Align2::LEFT_TOP,
        max_label,
        font.clone(),
        text_color,
    );
    painter.text(
        Pos2::new(strip.right() + 8.0, strip.bottom()),
        Align2::LEFT_BOTTOM,
        min_label,
        font,
        text_color,
    );
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top status bar.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(RichText::new(state.view.window_label).strong());
        ui.separator();

        let scene = &state.scene;
        ui.label(format!(
            "{} records in {} blocks",
            scene.dataset.len(),
            scene.dataset.block_count()
        ));
        ui.separator();

        let (min, max) = scene.colors.value_range();
        ui.label(
            RichText::new(format!("values {min:.2} – {max:.2}")).color(Color32::GRAY),
        );
    });
}
