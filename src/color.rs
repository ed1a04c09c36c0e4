// Dot-color policies for the plotted curve.
// Visual outcomes:
// - Plain: every dot is white.
// - HueCycle: the curve sweeps through the rainbow as it is traced.
// - Gradient: dot color depends on where the dot lands on the canvas.

pub const BLACK: u32 = 0x00000000;
pub const WHITE: u32 = 0x00FFFFFF;

/// Which color policy is applied to each new dot.
/// Read every frame at exactly one match site; changed only by the mode buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawingMode {
    Plain,
    HueCycle,
    Gradient,
}

/// Pack 8-bit channels into the 0x00RRGGBB layout minifb expects.
#[inline]
pub fn pack_rgb(r: u32, g: u32, b: u32) -> u32 {
    (r << 16) | (g << 8) | b
}

/// Convert a hue in [0, 1) at full saturation and brightness to 0x00RRGGBB.
/// Hue wraps: 1.0 lands back on red, matching a seamless rainbow sweep.
pub fn hsv_to_rgb(hue: f64) -> u32 {
    let h = hue.rem_euclid(1.0) * 6.0;
    let i = h.floor();
    let f = h - i;
    // Full S and V collapse the usual HSV formulas: p = 0, q = 1 - f, t = f.
    let q = 1.0 - f;
    let (r, g, b) = match i as u32 {
        0 => (1.0, f, 0.0),
        1 => (q, 1.0, 0.0),
        2 => (0.0, 1.0, f),
        3 => (0.0, q, 1.0),
        4 => (f, 0.0, 1.0),
        _ => (1.0, 0.0, q),
    };
    pack_rgb((r * 255.0) as u32, (g * 255.0) as u32, (b * 255.0) as u32)
}

/// Position gradient: R follows x, G follows y, B is their average.
/// Channels truncate to integers, so the exact canvas center is (127,127,127).
pub fn gradient_color(x: f64, y: f64, width: f64, drawing_h: f64) -> u32 {
    let nx = x / width;
    let ny = y / drawing_h;
    let r = (nx * 255.0) as u32;
    let g = (ny * 255.0) as u32;
    let b = ((nx + ny) / 2.0 * 255.0) as u32;
    pack_rgb(r.min(255), g.min(255), b.min(255))
}
