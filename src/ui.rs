// Control-area widgets: two frequency sliders and five action buttons.
// Visual: a red track with a round yellow handle per slider, gray labeled
// buttons underneath, all drawn into the bottom strip of the window.

use crate::color::{BLACK, WHITE};
use crate::draw::{draw_text_5x7, fill_circle, fill_rect, text_width_5x7};
use crate::types::{FrameBuffer, Rect};

const TRACK_COLOR: u32 = 0x00FF0000;  // red bar
const HANDLE_COLOR: u32 = 0x00FFFF00; // yellow disc
const BUTTON_FACE: u32 = 0x00B4B4B4;  // light gray

/// Horizontal slider with a linear value range.
/// The handle position is always a pure function of `value`.
pub struct Slider {
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    min_val: f64,
    max_val: f64,
    value: f64,
    handle_x: f64,
    label: &'static str,
    pub dragging: bool,
}

impl Slider {
    pub fn new(x: f64, y: f64, w: f64, h: f64, min_val: f64, max_val: f64, initial: f64, label: &'static str) -> Self {
        let mut s = Self {
            x, y, w, h, min_val, max_val,
            value: initial,
            handle_x: 0.0,
            label,
            dragging: false,
        };
        s.update_handle();
        s
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn min_val(&self) -> f64 {
        self.min_val
    }

    pub fn max_val(&self) -> f64 {
        self.max_val
    }

    /// True iff the pointer is over the track rectangle (drag start region).
    pub fn hit(&self, px: f64, py: f64) -> bool {
        px >= self.x && px <= self.x + self.w && py >= self.y && py <= self.y + self.h
    }

    /// Move the handle to the pointer, clamped to the track, and recompute
    /// the value linearly. Pointer positions outside the track are silently
    /// clamped, so the value can never leave [min_val, max_val].
    pub fn update(&mut self, mouse_x: f64) {
        self.handle_x = mouse_x.clamp(self.x, self.x + self.w);
        let ratio = (self.handle_x - self.x) / self.w;
        self.value = self.min_val + ratio * (self.max_val - self.min_val);
    }

    /// Set the value directly (Randomize) and snap the handle to match.
    pub fn set_value(&mut self, value: f64) {
        self.value = value;
        self.update_handle();
    }

    fn update_handle(&mut self) {
        self.handle_x = self.x + (self.value - self.min_val) / (self.max_val - self.min_val) * self.w;
    }

    /// Visual: red 2px track, yellow handle, and "LABEL: 1.23" above the track.
    pub fn draw(&self, fb: &mut FrameBuffer) {
        let line_y = (self.y + self.h / 2.0) as i32 - 1;
        fill_rect(fb, self.x as i32, line_y, self.w as i32, 2, TRACK_COLOR);
        let handle_r = (self.h / 4.0) as i32;
        fill_circle(fb, self.handle_x as i32, (self.y + self.h / 2.0) as i32, handle_r, HANDLE_COLOR);
        let text = format!("{}: {:.2}", self.label, self.value);
        draw_text_5x7(fb, self.x as i32, self.y as i32 - 25, &text, WHITE);
    }
}

/// Push button: a rectangle plus a label. Stateless — hit testing and
/// drawing only; the action it triggers lives with the caller.
pub struct Button {
    pub rect: Rect,
    label: &'static str,
}

impl Button {
    pub fn new(x: i32, y: i32, w: i32, h: i32, label: &'static str) -> Self {
        Self { rect: Rect { x, y, w, h }, label }
    }

    /// Inclusive-bounds hit test.
    pub fn hit(&self, px: i32, py: i32) -> bool {
        self.rect.contains(px, py)
    }

    /// Visual: a gray face with the label centered in black.
    pub fn draw(&self, fb: &mut FrameBuffer) {
        fill_rect(fb, self.rect.x, self.rect.y, self.rect.w, self.rect.h, BUTTON_FACE);
        let (cx, cy) = self.rect.center();
        let tx = cx - text_width_5x7(self.label) / 2;
        draw_text_5x7(fb, tx, cy - 3, self.label, BLACK);
    }
}

/// Fixed control-area geometry, all derived from the window size.
/// The drawing area is the top 80% of the window; everything below is the
/// control strip holding the slider row and two button rows.
pub struct Layout {
    pub drawing_h: usize,
    pub control_h: usize,
    pub slider_margin_x: i32,
    pub slider_w: i32,
    pub slider_h: i32,
    pub freq_slider_y: i32,
    pub button_w: i32,
    pub button_h: i32,
    pub button_gap: i32,
    pub button_row1_y: i32,
    pub button_row2_y: i32,
    pub start_x_row1: i32,
    pub start_x_row2: i32,
}

impl Layout {
    pub fn new(width: usize, height: usize) -> Self {
        let drawing_h = (height as f64 * 0.8) as usize;
        let control_h = height - drawing_h;

        let slider_row_gap = (0.05 * control_h as f64) as i32;
        let slider_margin_x = (0.05 * width as f64) as i32;
        let slider_w = (0.4 * width as f64) as i32;
        let slider_h = 20;
        let freq_slider_y = drawing_h as i32 + slider_row_gap;

        let button_w = (0.12 * width as f64) as i32;
        let button_h = 30;
        let button_gap = (0.05 * width as f64) as i32;

        let button_row1_y = freq_slider_y + slider_h + slider_row_gap;
        let row1_total = 2 * button_w + button_gap;
        let start_x_row1 = (width as i32 - row1_total) / 2;

        let button_row2_y = button_row1_y + button_h + slider_row_gap;
        let row2_total = 3 * button_w + 2 * button_gap;
        let start_x_row2 = (width as i32 - row2_total) / 2;

        Self {
            drawing_h,
            control_h,
            slider_margin_x,
            slider_w,
            slider_h,
            freq_slider_y,
            button_w,
            button_h,
            button_gap,
            button_row1_y,
            button_row2_y,
            start_x_row1,
            start_x_row2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn test_slider() -> Slider {
        Slider::new(50.0, 810.0, 400.0, 20.0, 0.1, 9.0, 2.7, "FREQUENCY X")
    }

    #[test]
    fn left_edge_yields_min_right_edge_yields_max() {
        let mut s = test_slider();
        s.update(50.0);
        assert_eq!(s.value(), 0.1);
        s.update(450.0);
        assert_eq!(s.value(), 9.0);
    }

    #[test]
    fn pointer_beyond_track_is_clamped() {
        let mut s = test_slider();
        s.update(-1e6);
        assert_eq!(s.value(), 0.1);
        s.update(1e6);
        assert_eq!(s.value(), 9.0);
    }

    #[test]
    fn repeated_update_with_same_pointer_is_idempotent() {
        let mut s = test_slider();
        s.update(237.0);
        let first = s.value();
        s.update(237.0);
        assert_eq!(s.value(), first);
        s.update(237.0);
        assert_eq!(s.value(), first);
    }

    #[test]
    fn set_value_moves_handle_consistently() {
        let mut s = test_slider();
        s.set_value(9.0);
        // Dragging to the handle's own position must not change the value.
        s.update(450.0);
        assert_eq!(s.value(), 9.0);
    }

    #[test]
    fn hit_covers_track_rect_only() {
        let s = test_slider();
        assert!(s.hit(50.0, 810.0));
        assert!(s.hit(450.0, 830.0));
        assert!(!s.hit(49.0, 820.0));
        assert!(!s.hit(250.0, 831.0));
    }

    #[test]
    fn button_center_hits_and_just_outside_misses() {
        let b = Button::new(355, 840, 120, 30, "RESET");
        let (cx, cy) = b.rect.center();
        assert!(b.hit(cx, cy));
        assert!(!b.hit(354, cy));
        assert!(!b.hit(476, cy));
        assert!(!b.hit(cx, 839));
        assert!(!b.hit(cx, 871));
    }

    #[test]
    fn layout_matches_a_1000x1000_window() {
        let l = Layout::new(1000, 1000);
        assert_eq!(l.drawing_h, 800);
        assert_eq!(l.control_h, 200);
        assert_eq!(l.slider_margin_x, 50);
        assert_eq!(l.slider_w, 400);
        assert_eq!(l.freq_slider_y, 810);
        assert_eq!(l.button_row1_y, 840);
        assert_eq!(l.button_row2_y, 880);
        assert_eq!(l.start_x_row1, 355);
        assert_eq!(l.start_x_row2, 270);
    }

    proptest! {
        #[test]
        fn value_never_leaves_range(mouse_x in -2000.0f64..2000.0) {
            let mut s = test_slider();
            s.update(mouse_x);
            prop_assert!(s.value() >= 0.1 && s.value() <= 9.0);
        }

        #[test]
        fn value_to_handle_to_value_round_trips(mouse_x in 50.0f64..=450.0) {
            let mut s = test_slider();
            s.update(mouse_x);
            let v = s.value();
            let mut s2 = test_slider();
            s2.set_value(v);
            s2.update(mouse_x);
            prop_assert!((s2.value() - v).abs() < 1e-12);
        }
    }
}
