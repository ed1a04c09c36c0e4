// Application state: the two frequency sliders, the five action buttons,
// the persistent canvas the curve accumulates on, and the simulation state.
// The window loop in main feeds pointer edges in and gets frames out, so
// everything here can also be driven headlessly by the tests.

use crate::color::{BLACK, DrawingMode, WHITE};
use crate::draw::{draw_dot, draw_text_5x7, fill_rect};
use crate::rng::Rng32;
use crate::sim::SimState;
use crate::types::FrameBuffer;
use crate::ui::{Button, Layout, Slider};

pub const FREQ_MIN: f64 = 0.1;
pub const FREQ_MAX: f64 = 9.0;
const FREQ_X_INITIAL: f64 = 2.7;
const FREQ_Y_INITIAL: f64 = 3.3;

/// What a button does when clicked. Every action clears the canvas;
/// only Reset leaves the mode and frequencies alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Reset,
    Randomize,
    ColorCycle,
    Gradient,
    ResetMode,
}

pub struct App {
    pub layout: Layout,
    pub slider_freq_x: Slider,
    pub slider_freq_y: Slider,
    pub buttons: Vec<(Button, Action)>,
    pub canvas: FrameBuffer,
    pub sim: SimState,
    rng: Rng32,
    width: usize,
    height: usize,
}

impl App {
    pub fn new(width: usize, height: usize, seed: u32) -> Self {
        let layout = Layout::new(width, height);

        let slider_freq_x = Slider::new(
            layout.slider_margin_x as f64,
            layout.freq_slider_y as f64,
            layout.slider_w as f64,
            layout.slider_h as f64,
            FREQ_MIN,
            FREQ_MAX,
            FREQ_X_INITIAL,
            "FREQUENCY X",
        );
        let slider_freq_y = Slider::new(
            (layout.slider_margin_x * 2 + layout.slider_w) as f64,
            layout.freq_slider_y as f64,
            layout.slider_w as f64,
            layout.slider_h as f64,
            FREQ_MIN,
            FREQ_MAX,
            FREQ_Y_INITIAL,
            "FREQUENCY Y",
        );

        let col = |i: i32| layout.start_x_row2 + i * (layout.button_w + layout.button_gap);
        let buttons = vec![
            (
                Button::new(layout.start_x_row1, layout.button_row1_y, layout.button_w, layout.button_h, "RESET"),
                Action::Reset,
            ),
            (
                Button::new(
                    layout.start_x_row1 + layout.button_w + layout.button_gap,
                    layout.button_row1_y,
                    layout.button_w,
                    layout.button_h,
                    "RANDOMIZE",
                ),
                Action::Randomize,
            ),
            (
                Button::new(col(0), layout.button_row2_y, layout.button_w, layout.button_h, "COLOR CYCLE"),
                Action::ColorCycle,
            ),
            (
                Button::new(col(1), layout.button_row2_y, layout.button_w, layout.button_h, "GRADIENT"),
                Action::Gradient,
            ),
            (
                Button::new(col(2), layout.button_row2_y, layout.button_w, layout.button_h, "RESET MODE"),
                Action::ResetMode,
            ),
        ];

        let canvas = FrameBuffer::new(width, layout.drawing_h, BLACK);
        let sim = SimState::new(width, layout.drawing_h);

        Self {
            layout,
            slider_freq_x,
            slider_freq_y,
            buttons,
            canvas,
            sim,
            rng: Rng32::from_seed(seed),
            width,
            height,
        }
    }

    /// Pointer went down at (x, y): sliders first (start a drag when the
    /// pointer is on the track), then whichever button was hit.
    pub fn pointer_down(&mut self, x: f64, y: f64) {
        for s in [&mut self.slider_freq_x, &mut self.slider_freq_y] {
            if s.hit(x, y) {
                s.dragging = true;
            }
        }

        let (px, py) = (x as i32, y as i32);
        let mut hit = None;
        for (button, action) in &self.buttons {
            if button.hit(px, py) {
                hit = Some(*action);
            }
        }
        if let Some(action) = hit {
            self.apply(action);
        }
    }

    /// Pointer moved to x while the button is held: dragged sliders follow.
    pub fn pointer_move(&mut self, x: f64) {
        for s in [&mut self.slider_freq_x, &mut self.slider_freq_y] {
            if s.dragging {
                s.update(x);
            }
        }
    }

    /// Pointer went up: all drags end.
    pub fn pointer_up(&mut self) {
        self.slider_freq_x.dragging = false;
        self.slider_freq_y.dragging = false;
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Reset => {
                // Canvas only; mode and frequencies stay as they are.
                self.canvas.fill(BLACK);
            }
            Action::Randomize => {
                let vx = self.rng.range(self.slider_freq_x.min_val(), self.slider_freq_x.max_val());
                let vy = self.rng.range(self.slider_freq_y.min_val(), self.slider_freq_y.max_val());
                self.slider_freq_x.set_value(vx);
                self.slider_freq_y.set_value(vy);
                self.canvas.fill(BLACK);
            }
            Action::ColorCycle => {
                self.sim.mode = DrawingMode::HueCycle;
                self.sim.hue = 0.0;
                self.canvas.fill(BLACK);
            }
            Action::Gradient => {
                self.sim.mode = DrawingMode::Gradient;
                self.canvas.fill(BLACK);
            }
            Action::ResetMode => {
                self.sim.mode = DrawingMode::Plain;
                self.canvas.fill(BLACK);
            }
        }
    }

    /// One simulation step: plot the next curve point onto the canvas and
    /// advance time. Nothing already on the canvas is touched.
    pub fn step(&mut self) {
        let (x, y) = self
            .sim
            .curve_point(self.slider_freq_x.value(), self.slider_freq_y.value());
        let color = self.sim.dot_color(x, y);
        draw_dot(&mut self.canvas, x, y, color);
        self.sim.advance();
    }

    /// Composite the frame: accumulated canvas on top, then the control
    /// strip with freshly redrawn widgets and the HUD line.
    pub fn render(&self, screen: &mut FrameBuffer, hud: &str) {
        for row in 0..self.canvas.height {
            let src = &self.canvas.pixels[row * self.canvas.width..(row + 1) * self.canvas.width];
            screen.pixels[row * screen.width..(row + 1) * screen.width].copy_from_slice(src);
        }

        fill_rect(
            screen,
            0,
            self.layout.drawing_h as i32,
            self.width as i32,
            self.layout.control_h as i32,
            BLACK,
        );
        self.slider_freq_x.draw(screen);
        self.slider_freq_y.draw(screen);
        for (button, _) in &self.buttons {
            button.draw(screen);
        }
        draw_text_5x7(screen, 8, self.height as i32 - 12, hud, WHITE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(1000, 1000, 0xC0FFEE)
    }

    fn canvas_is_blank(app: &App) -> bool {
        app.canvas.pixels.iter().all(|&p| p == BLACK)
    }

    /// Click the button bound to `action` at its rectangle center.
    fn click(app: &mut App, action: Action) {
        let (cx, cy) = app
            .buttons
            .iter()
            .find(|(_, a)| *a == action)
            .map(|(b, _)| b.rect.center())
            .unwrap();
        app.pointer_down(cx as f64, cy as f64);
        app.pointer_up();
    }

    #[test]
    fn first_step_plots_the_reference_point_in_white() {
        let mut a = app();
        a.step();
        let x = (500.0 + 333.0 * 2.0f64.sin()) as i32;
        let y = 666; // 400 + 800/3
        assert_eq!(a.canvas.pixels[y as usize * 1000 + x as usize], WHITE);
        assert!((a.sim.t - 0.02).abs() < 1e-15);
    }

    #[test]
    fn reset_clears_the_canvas_and_nothing_else() {
        let mut a = app();
        click(&mut a, Action::Gradient);
        for _ in 0..50 {
            a.step();
        }
        assert!(!canvas_is_blank(&a));
        let (fx, fy) = (a.slider_freq_x.value(), a.slider_freq_y.value());
        let t_before = a.sim.t;

        click(&mut a, Action::Reset);
        assert!(canvas_is_blank(&a));
        assert_eq!(a.sim.mode, DrawingMode::Gradient);
        assert_eq!(a.slider_freq_x.value(), fx);
        assert_eq!(a.slider_freq_y.value(), fy);
        assert_eq!(a.sim.t, t_before); // t is never reset
    }

    #[test]
    fn randomize_stays_in_range_and_clears_plotted_points() {
        let mut a = app();
        for _ in 0..20 {
            a.step();
        }
        assert!(!canvas_is_blank(&a));

        click(&mut a, Action::Randomize);
        assert!(canvas_is_blank(&a));
        for v in [a.slider_freq_x.value(), a.slider_freq_y.value()] {
            assert!((FREQ_MIN..FREQ_MAX).contains(&v), "frequency out of range: {v}");
        }
    }

    #[test]
    fn mode_buttons_are_idempotent() {
        let mut a = app();
        click(&mut a, Action::ColorCycle);
        assert_eq!(a.sim.mode, DrawingMode::HueCycle);
        assert_eq!(a.sim.hue, 0.0);
        assert!(canvas_is_blank(&a));

        for _ in 0..10 {
            a.step();
        }
        click(&mut a, Action::ColorCycle);
        assert_eq!(a.sim.mode, DrawingMode::HueCycle);
        assert_eq!(a.sim.hue, 0.0);
        assert!(canvas_is_blank(&a));
    }

    #[test]
    fn reset_mode_returns_to_plain_white_dots() {
        let mut a = app();
        click(&mut a, Action::Gradient);
        click(&mut a, Action::ResetMode);
        assert_eq!(a.sim.mode, DrawingMode::Plain);
        a.step();
        assert!(a.canvas.pixels.iter().any(|&p| p == WHITE));
    }

    #[test]
    fn slider_drag_follows_the_pointer_and_stops_on_release() {
        let mut a = app();
        // Down on the X-frequency track, drag to the right edge.
        a.pointer_down(100.0, 815.0);
        assert!(a.slider_freq_x.dragging);
        a.pointer_move(450.0);
        assert_eq!(a.slider_freq_x.value(), FREQ_MAX);

        a.pointer_up();
        a.pointer_move(50.0);
        assert_eq!(a.slider_freq_x.value(), FREQ_MAX); // no drag, no change
        assert_eq!(a.slider_freq_y.value(), 3.3); // other slider untouched
    }

    #[test]
    fn pointer_down_outside_everything_changes_nothing() {
        let mut a = app();
        let mode = a.sim.mode;
        a.step();
        a.pointer_down(10.0, 10.0); // inside the drawing area
        assert!(!a.slider_freq_x.dragging && !a.slider_freq_y.dragging);
        assert_eq!(a.sim.mode, mode);
        assert!(!canvas_is_blank(&a));
    }

    #[test]
    fn render_composites_canvas_and_control_strip() {
        let mut a = app();
        a.step();
        let mut screen = FrameBuffer::new(1000, 1000, 0x00123456);
        a.render(&mut screen, "FPS: 60.0");

        // The plotted dot shows through in the drawing area.
        let x = (500.0 + 333.0 * 2.0f64.sin()) as usize;
        assert_eq!(screen.pixels[666 * 1000 + x], WHITE);
        // The control strip was repainted (no stale screen pixels survive).
        assert_eq!(screen.pixels[999 * 1000 + 999], BLACK);
    }
}
