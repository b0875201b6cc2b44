use hsl::HSL;

pub type RgbColor = (u8, u8, u8);

/// Fallback for unknown categories and for heatmap groups without any
/// defined value to normalize.
pub const NEUTRAL_COLOR: RgbColor = (100, 116, 139);

const CATEGORY_COLORS: &[(&str, RgbColor)] = &[
    ("Sport", (239, 68, 68)),
    ("Naked", (245, 158, 11)),
    ("Adventure", (16, 185, 129)),
    ("Touring", (14, 165, 233)),
    ("Cruiser", (139, 92, 246)),
    ("Dual-Sport", (6, 182, 212)),
    ("Sport Touring", (59, 130, 246)),
    ("Retro", (249, 115, 22)),
    ("Supermoto", (234, 179, 8)),
    ("Bagger", (168, 85, 247)),
    ("Enduro", (34, 197, 94)),
    ("Motocross", (132, 204, 22)),
    ("Scrambler", (251, 146, 60)),
    ("Electric", (20, 184, 166)),
];

pub fn category_color(label: &str) -> RgbColor {
    CATEGORY_COLORS
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, color)| *color)
        .unwrap_or(NEUTRAL_COLOR)
}

/// Golden-angle hue step keeps consecutive brand hues far apart without a
/// lookup table.
const BRAND_HUE_STEP: f64 = 137.5;

pub fn brand_color(index: usize) -> RgbColor {
    let hue = (index as f64 * BRAND_HUE_STEP) % 360.0;
    HSL {
        h: hue,
        s: 0.70,
        l: 0.55,
    }
    .to_rgb()
}

/// Heatmap hue sweeps 240 (blue, low) down to 0 (red, high). When min == max
/// the normalized value is defined as 0, so every group lands on the blue end.
pub fn heatmap_hue(value: f64, min: f64, max: f64) -> f64 {
    let normalized = if max > min {
        ((value - min) / (max - min)).clamp(0.0, 1.0)
    } else {
        0.0
    };
    (1.0 - normalized) * 240.0
}

pub fn heatmap_color(value: f64, min: f64, max: f64) -> RgbColor {
    HSL {
        h: heatmap_hue(value, min, max),
        s: 1.0,
        l: 0.5,
    }
    .to_rgb()
}
