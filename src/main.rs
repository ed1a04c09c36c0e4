// What you SEE:
// • A Lissajous figure traced dot by dot in the upper 80% of the window.
// • Two sliders at the bottom set the X and Y frequencies; drag to reshape.
// • Buttons: Reset (wipe canvas), Randomize (new frequencies), and three
//   color modes — Color Cycle (rainbow sweep), Gradient (position tint),
//   Reset Mode (plain white). Every mode change wipes the canvas.
// • ESC or closing the window quits.

mod app;
mod color;
mod draw;
mod error;
mod rng;
mod sim;
mod types;
mod ui;

use app::App;
use color::BLACK;
use draw::Drawer;
use error::Error;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};
use types::FrameBuffer;

const WIDTH: usize = 1000;
const HEIGHT: usize = 1000;
const TARGET_FPS: usize = 120;

fn main() -> Result<(), Error> {
    /* --- Window setup ---
       Visual: a black window opens, curve on top, controls in the bottom strip. */
    let mut drawer = Drawer::new(
        "Animated Lissajous Figure: Frequencies and Color",
        WIDTH,
        HEIGHT,
        TARGET_FPS,
    )?;

    /* --- Application state ---
       Randomize needs a seed; wall-clock nanos are plenty for visual variety. */
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0xC0FFEE);
    let mut app = App::new(WIDTH, HEIGHT, seed);

    /* --- Reusable screen buffer ---
       Visual: this is the composited image you actually see each frame. */
    let mut screen = FrameBuffer::new(WIDTH, HEIGHT, BLACK);

    /* --- FPS HUD --- */
    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;
    let mut hud_fps_text = String::from("FPS: 0.0");

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        /* 1) Pointer input. Sliders are tested before buttons on each press;
           a held button keeps the dragged slider glued to the pointer. */
        let mouse = drawer.poll_mouse();
        if let Some((mx, my)) = mouse.pos {
            if mouse.pressed {
                app.pointer_down(mx as f64, my as f64);
            }
            if mouse.held {
                app.pointer_move(mx as f64);
            }
        }
        if mouse.released {
            app.pointer_up();
        }

        /* 2) One simulation step: plot the next curve point, advance t.
           Visual: the figure grows by one small dot. */
        app.step();

        /* 3) Composite canvas + control strip and present.
           Visual: the accumulated curve plus freshly redrawn widgets. */
        app.render(&mut screen, &hud_fps_text);
        drawer.present(&screen)?;

        /* 4) FPS counter (prints to terminal + HUD once per second) */
        frames_this_second += 1;
        let now = Instant::now();
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            let fps = frames_this_second as f32 / secs;
            println!("FPS: {:.1}", fps);                   // terminal
            hud_fps_text = format!("FPS: {:.1}", fps);     // HUD part
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    Ok(())
}
