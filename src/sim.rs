// The Lissajous simulation: one new curve point per frame.
// Visual: the figure is traced dot by dot; higher frequencies weave a denser
// braid, and the color of each dot follows the current drawing mode.

use crate::color::{self, DrawingMode, WHITE};

/// Time advance per frame. Never reset — mode changes clear the canvas only,
/// so the trace resumes from wherever the oscillators currently are.
pub const T_STEP: f64 = 0.02;
/// Hue advance per frame while in HueCycle (slow rainbow sweep).
pub const HUE_STEP: f64 = 0.001;
/// Constant phase offset on the X oscillator; shifts where the trace starts
/// without changing the figure's shape.
pub const PHASE_SHIFT: f64 = 2.0;

/// All mutable simulation state, carried explicitly instead of as globals.
pub struct SimState {
    pub t: f64,
    pub hue: f64,
    pub mode: DrawingMode,
    width: usize,
    drawing_h: usize,
    amp_x: f64,
    amp_y: f64,
}

impl SimState {
    /// Amplitudes are fixed at a third of the canvas size (integer division),
    /// so the figure always fits with a margin.
    pub fn new(width: usize, drawing_h: usize) -> Self {
        Self {
            t: 0.0,
            hue: 0.0,
            mode: DrawingMode::Plain,
            width,
            drawing_h,
            amp_x: (width / 3) as f64,
            amp_y: (drawing_h / 3) as f64,
        }
    }

    /// Next point of the curve for the given frequencies, in canvas pixels.
    pub fn curve_point(&self, freq_x: f64, freq_y: f64) -> (i32, i32) {
        let x = self.width as f64 / 2.0 + self.amp_x * (freq_x * self.t + PHASE_SHIFT).sin();
        let y = self.drawing_h as f64 / 2.0 + self.amp_y * (freq_y * self.t).cos();
        (x as i32, y as i32)
    }

    /// Color for the dot about to be plotted at (x, y).
    /// HueCycle also advances the hue accumulator, wrapping mod 1.0.
    pub fn dot_color(&mut self, x: i32, y: i32) -> u32 {
        match self.mode {
            DrawingMode::Plain => WHITE,
            DrawingMode::HueCycle => {
                let c = color::hsv_to_rgb(self.hue);
                self.hue = (self.hue + HUE_STEP).rem_euclid(1.0);
                c
            }
            DrawingMode::Gradient => {
                color::gradient_color(x as f64, y as f64, self.width as f64, self.drawing_h as f64)
            }
        }
    }

    pub fn advance(&mut self) {
        self.t += T_STEP;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::pack_rgb;

    #[test]
    fn first_point_matches_the_reference_arithmetic() {
        // t = 0, phase 2: x = w/2 + (w/3)*sin(2), y = h/2 + (h/3)*cos(0).
        let sim = SimState::new(1000, 800);
        let (x, y) = sim.curve_point(2.7, 3.3);
        assert_eq!(x, (500.0 + 333.0 * 2.0f64.sin()) as i32);
        assert_eq!(y, (400.0 + 266.0) as i32);
    }

    #[test]
    fn t_advances_by_a_fixed_step() {
        let mut sim = SimState::new(1000, 800);
        sim.advance();
        sim.advance();
        assert!((sim.t - 0.04).abs() < 1e-15);
    }

    #[test]
    fn plain_mode_is_always_white_and_leaves_hue_alone() {
        let mut sim = SimState::new(1000, 800);
        assert_eq!(sim.dot_color(123, 456), WHITE);
        assert_eq!(sim.hue, 0.0);
    }

    #[test]
    fn hue_cycle_advances_and_wraps() {
        let mut sim = SimState::new(1000, 800);
        sim.mode = DrawingMode::HueCycle;
        assert_eq!(sim.dot_color(0, 0), pack_rgb(255, 0, 0)); // hue 0 -> red
        assert!((sim.hue - HUE_STEP).abs() < 1e-15);
        sim.hue = 0.9995;
        sim.dot_color(0, 0);
        assert!(sim.hue < 0.001); // wrapped past 1.0
    }

    #[test]
    fn gradient_mode_depends_on_position_only() {
        let mut sim = SimState::new(1000, 800);
        sim.mode = DrawingMode::Gradient;
        let center = sim.dot_color(500, 400);
        assert_eq!(center, pack_rgb(127, 127, 127));
        let again = sim.dot_color(500, 400);
        assert_eq!(center, again);
    }
}
