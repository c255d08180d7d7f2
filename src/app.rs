use eframe::egui;

use crate::camera::ViewPreset;
use crate::state::{AppState, Scene};
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

/// One rendering pass: a window that blocks until the viewer dismisses it.
pub struct StrataApp {
    state: AppState,
}

impl StrataApp {
    pub fn new(scene: Scene, view: ViewPreset) -> Self {
        Self {
            state: AppState::new(scene, view),
        }
    }
}

impl eframe::App for StrataApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: status bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: legend ----
        egui::SidePanel::left("legend_panel")
            .default_width(200.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &self.state);
            });

        // ---- Central panel: the bar chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::block_chart(ui, &self.state);
        });
    }
}
