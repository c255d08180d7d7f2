// ---------------------------------------------------------------------------
// Orthographic camera for the 3D bar chart
// ---------------------------------------------------------------------------

/// A point in chart space: x = grid column, y = grid row, z = bar height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3 {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Point3 { x, y, z }
    }
}

/// Default view angles for the 3D plot.
pub const DEFAULT_ELEV: f32 = 30.0;
pub const DEFAULT_AZIM: f32 = -60.0;

/// Orthographic camera at spherical (elevation, azimuth), both in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub elevation_deg: f32,
    pub azimuth_deg: f32,
}

impl Camera {
    /// (sin az, cos az, sin elev, cos elev)
    fn angles(&self) -> (f32, f32, f32, f32) {
        let (sa, ca) = self.azimuth_deg.to_radians().sin_cos();
        let (se, ce) = self.elevation_deg.to_radians().sin_cos();
        (sa, ca, se, ce)
    }

    /// Project onto the screen plane.  Returns (x right, y up) in chart
    /// units; callers scale and flip y for pixel space.
    pub fn project(&self, p: Point3) -> (f32, f32) {
        let (sa, ca, se, ce) = self.angles();
        let x = -p.x * sa + p.y * ca;
        let y = -p.x * ca * se - p.y * sa * se + p.z * ce;
        (x, y)
    }

    /// Depth along the view direction, positive = further from the viewer.
    /// Painter's algorithm draws the largest depth first.
    pub fn depth(&self, p: Point3) -> f32 {
        let (sa, ca, se, ce) = self.angles();
        -(p.x * ce * ca + p.y * ce * sa + p.z * se)
    }

    /// Unit vector pointing from the scene toward the viewer.  A face is
    /// visible when its outward normal has a positive component along it.
    pub fn view_vector(&self) -> (f32, f32, f32) {
        let (sa, ca, se, ce) = self.angles();
        (ce * ca, ce * sa, se)
    }
}

// ---------------------------------------------------------------------------
// View presets – the two rendering passes
// ---------------------------------------------------------------------------

/// Camera and axis decoration for one rendering pass.  Both passes share the
/// same draw routine; only this configuration differs.
#[derive(Debug, Clone, Copy)]
pub struct ViewPreset {
    /// Figure title drawn above the chart.
    pub title: &'static str,
    /// Short label for the window title bar.
    pub window_label: &'static str,
    pub camera: Camera,
    /// The top-down pass suppresses the z axis: height is not visible from
    /// directly above.
    pub show_z_axis: bool,
}

pub const ISOMETRIC: ViewPreset = ViewPreset {
    title: "3D Bar Chart of Each Block and Layer Values",
    window_label: "Isometric View",
    camera: Camera {
        elevation_deg: DEFAULT_ELEV,
        azimuth_deg: DEFAULT_AZIM,
    },
    show_z_axis: true,
};

pub const TOP_DOWN: ViewPreset = ViewPreset {
    title: "Top-Down View of 3D Bar Chart of Each Block and Layer Values",
    window_label: "Top-Down View",
    camera: Camera {
        elevation_deg: 90.0,
        azimuth_deg: -90.0,
    },
    show_z_axis: false,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_down_projection_ignores_height() {
        let cam = TOP_DOWN.camera;
        let (x0, y0) = cam.project(Point3::new(2.0, 3.0, 0.0));
        let (x1, y1) = cam.project(Point3::new(2.0, 3.0, 7.0));
        assert!((x0 - x1).abs() < 1e-5);
        assert!((y0 - y1).abs() < 1e-5);
    }

    #[test]
    fn top_down_keeps_grid_axes_separated() {
        let cam = TOP_DOWN.camera;
        let origin = cam.project(Point3::new(0.0, 0.0, 0.0));
        let along_x = cam.project(Point3::new(1.0, 0.0, 0.0));
        let along_y = cam.project(Point3::new(0.0, 1.0, 0.0));
        // x moves the screen x, y moves the screen y.
        assert!((along_x.0 - origin.0).abs() > 0.9);
        assert!((along_x.1 - origin.1).abs() < 1e-5);
        assert!((along_y.1 - origin.1).abs() > 0.9);
        assert!((along_y.0 - origin.0).abs() < 1e-5);
    }

    #[test]
    fn isometric_depth_orders_near_over_far() {
        let cam = ISOMETRIC.camera;
        // With azimuth -60°, the viewer sits at low y looking toward high y:
        // larger y is further away.
        let near = cam.depth(Point3::new(0.0, 0.0, 0.0));
        let far = cam.depth(Point3::new(0.0, 5.0, 0.0));
        assert!(far > near);
    }

    #[test]
    fn view_vector_is_normalized() {
        for preset in [ISOMETRIC, TOP_DOWN] {
            let (x, y, z) = preset.camera.view_vector();
            let len = (x * x + y * y + z * z).sqrt();
            assert!((len - 1.0).abs() < 1e-5);
        }
    }
}
