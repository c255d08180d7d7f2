use crate::camera::ViewPreset;
use crate::color::ValueColorMap;
use crate::data::binner::QUANTILE_BIN_COUNT;
use crate::data::model::BlockDataset;
use crate::grid::GridLayout;

// ---------------------------------------------------------------------------
// Scene – the immutable per-run data bundle
// ---------------------------------------------------------------------------

/// Everything the renderer needs, computed once from the loaded dataset and
/// shared read-only by both rendering passes.
#[derive(Clone)]
pub struct Scene {
    pub dataset: BlockDataset,
    pub grid: GridLayout,
    pub colors: ValueColorMap,
}

impl Scene {
    /// Derive bins, ramp, and grid layout from a loaded dataset.
    pub fn from_dataset(dataset: BlockDataset) -> Self {
        let grid = GridLayout::for_block_count(dataset.block_count());
        let colors = ValueColorMap::new(&dataset.values());

        let realized = colors.bins().realized_bin_count();
        if realized < QUANTILE_BIN_COUNT {
            // Tied values collapsed quantile edges; colors will cluster at
            // the light end of the ramp.
            log::warn!(
                "quantile binning collapsed to {realized} of {QUANTILE_BIN_COUNT} bins"
            );
        }

        Scene {
            dataset,
            grid,
            colors,
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Default bar extrusion height in chart units.
pub const DEFAULT_BAR_HEIGHT: f32 = 1.0;

/// Per-window state: the shared scene plus this pass's view configuration.
pub struct AppState {
    pub scene: Scene,
    pub view: ViewPreset,
    pub bar_height: f32,
}

impl AppState {
    pub fn new(scene: Scene, view: ViewPreset) -> Self {
        Self {
            scene,
            view,
            bar_height: DEFAULT_BAR_HEIGHT,
        }
    }
}
