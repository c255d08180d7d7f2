use eframe::egui::Color32;
use palette::{LinSrgb, Mix, Srgb};

use crate::data::binner::{QUANTILE_BIN_COUNT, QuantileBins};

// ---------------------------------------------------------------------------
// Blue ramp generator
// ---------------------------------------------------------------------------

/// Number of shades in the bar-color ramp.
pub const RAMP_LEN: usize = 100;

/// The ramp samples the blue colormap between these relative intensities,
/// skipping the near-white start so the lightest bars stay visible.
const RAMP_START: f32 = 0.4;
const RAMP_END: f32 = 1.0;

/// Anchor stops of the ColorBrewer "Blues" sequential colormap, light to
/// dark, evenly spaced over `[0, 1]`.
const BLUES: [[u8; 3]; 9] = [
    [247, 251, 255],
    [222, 235, 247],
    [198, 219, 239],
    [158, 202, 225],
    [107, 174, 214],
    [66, 146, 198],
    [33, 113, 181],
    [8, 81, 156],
    [8, 48, 107],
];

/// Sample the Blues colormap at relative intensity `t` in `[0, 1]`.
fn blues_at(t: f32) -> Color32 {
    let scaled = t.clamp(0.0, 1.0) * (BLUES.len() - 1) as f32;
    let lo = (scaled.floor() as usize).min(BLUES.len() - 2);
    let frac = scaled - lo as f32;
    lerp_srgb(BLUES[lo], BLUES[lo + 1], frac)
}

/// Interpolate two sRGB colors through linear light.
fn lerp_srgb(a: [u8; 3], b: [u8; 3], t: f32) -> Color32 {
    let la: LinSrgb = Srgb::new(a[0], a[1], a[2]).into_format::<f32>().into_linear();
    let lb: LinSrgb = Srgb::new(b[0], b[1], b[2]).into_format::<f32>().into_linear();
    let mixed: Srgb<f32> = Srgb::from_linear(la.mix(lb, t));
    let out = mixed.into_format::<u8>();
    Color32::from_rgb(out.red, out.green, out.blue)
}

/// Generate the fixed 100-shade blue ramp, lightest first.
pub fn blue_ramp() -> Vec<Color32> {
    (0..RAMP_LEN)
        .map(|i| {
            let t = RAMP_START + (RAMP_END - RAMP_START) * i as f32 / (RAMP_LEN - 1) as f32;
            blues_at(t)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: record value → Color32
// ---------------------------------------------------------------------------

/// Bars with a value of exactly zero render in this fixed neutral color
/// (white-smoke) at low opacity, overriding the ramp lookup entirely.
const ZERO_COLOR: [u8; 3] = [245, 245, 245];
const ZERO_ALPHA: u8 = 26; // 0.1
const BAR_ALPHA: u8 = 230; // 0.9

/// Maps record values to bar colors through quantile bins over the blue ramp.
///
/// The ramp always has [`RAMP_LEN`] entries; when tied values collapse the
/// realized bin count below that, bin indices still reference the full ramp
/// without renormalization, clustering colors at the light end.
#[derive(Debug, Clone)]
pub struct ValueColorMap {
    bins: QuantileBins,
    ramp: Vec<Color32>,
    value_min: f64,
    value_max: f64,
}

impl ValueColorMap {
    /// Build the quantile bins and ramp for a value sample.
    pub fn new(values: &[f64]) -> Self {
        let bins = QuantileBins::from_values(values, QUANTILE_BIN_COUNT);
        let value_min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let value_max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        ValueColorMap {
            bins,
            ramp: blue_ramp(),
            value_min,
            value_max,
        }
    }

    /// Look up the display color (including opacity) for a value.
    pub fn color_for(&self, value: f64) -> Color32 {
        if value == 0.0 {
            return Color32::from_rgba_unmultiplied(
                ZERO_COLOR[0],
                ZERO_COLOR[1],
                ZERO_COLOR[2],
                ZERO_ALPHA,
            );
        }
        let idx = self.bins.bin_index(value).min(self.ramp.len() - 1);
        let c = self.ramp[idx];
        Color32::from_rgba_unmultiplied(c.r(), c.g(), c.b(), BAR_ALPHA)
    }

    /// The underlying quantile bins.
    pub fn bins(&self) -> &QuantileBins {
        &self.bins
    }

    /// The full ramp, lightest first, for drawing the legend.
    pub fn ramp(&self) -> &[Color32] {
        &self.ramp
    }

    /// Observed value range.
    pub fn value_range(&self) -> (f64, f64) {
        (self.value_min, self.value_max)
    }

    /// Legend annotations: observed min and max to two decimal places.
    pub fn range_labels(&self) -> (String, String) {
        (
            format!("{:.2}", self.value_min),
            format!("{:.2}", self.value_max),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_has_exactly_one_hundred_shades() {
        let ramp = blue_ramp();
        assert_eq!(ramp.len(), RAMP_LEN);
    }

    #[test]
    fn ramp_darkens_monotonically_enough() {
        // Sampled from a sequential colormap: the ends must clearly differ
        // and brightness must trend downward.
        let ramp = blue_ramp();
        let brightness =
            |c: Color32| c.r() as i32 + c.g() as i32 + c.b() as i32;
        assert!(brightness(ramp[0]) > brightness(ramp[RAMP_LEN / 2]));
        assert!(brightness(ramp[RAMP_LEN / 2]) > brightness(ramp[RAMP_LEN - 1]));
    }

    #[test]
    fn zero_override_beats_the_quantile_position() {
        // 0 sits above most of this sample, so its bin would be high; the
        // neutral override must fire anyway.
        let mut values: Vec<f64> = (1..=99).map(|i| f64::from(i) * -1.0).collect();
        values.push(0.0);
        let cm = ValueColorMap::new(&values);

        let zero = cm.color_for(0.0);
        assert_eq!(zero, Color32::from_rgba_unmultiplied(245, 245, 245, 26));
    }

    #[test]
    fn nonzero_values_use_the_ramp_at_high_opacity() {
        let values: Vec<f64> = (1..=100).map(f64::from).collect();
        let cm = ValueColorMap::new(&values);

        let low = cm.color_for(1.0);
        let high = cm.color_for(100.0);
        assert_eq!(low.a(), 230);
        assert_eq!(high.a(), 230);
        // Higher quantile → darker blue.
        assert!(low.r() > high.r());
    }

    #[test]
    fn range_labels_use_two_decimals() {
        let cm = ValueColorMap::new(&[1.234, 5.678]);
        assert_eq!(cm.range_labels(), ("1.23".to_string(), "5.68".to_string()));
    }
}
