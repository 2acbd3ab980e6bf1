//! Scratchoff demo host
//!
//! Renders a prize phrase, lays the erase mask over it, and forwards
//! mouse drags to the overlay so the user can scratch the text free.
//! R re-enables erase mode (restoring the mask), Esc quits.

mod config;
mod render;
mod text;

use erase::{EraseOverlay, TouchSink};
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const WINDOW_WIDTH: usize = 480;
const WINDOW_HEIGHT: usize = 270;
const CARD_WIDTH: i32 = 320;
const CARD_HEIGHT: i32 = 120;

const BACKDROP: u32 = 0x001A_2230;
const CARD_COLOR: u32 = 0x0026_3244;
const TEXT_COLOR: u32 = 0x00F2_C14E;

/// Translates window mouse state into pointer transitions on a sink
#[derive(Default)]
struct PointerState {
    was_down: bool,
}

impl PointerState {
    fn forward(&mut self, sink: &mut impl TouchSink, down: bool, x: f32, y: f32) {
        match (self.was_down, down) {
            (false, true) => sink.pointer_down(x, y),
            (true, true) => sink.pointer_move(x, y),
            (true, false) => sink.pointer_up(x, y),
            (false, false) => {}
        }
        self.was_down = down;
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let card_x = (WINDOW_WIDTH - CARD_WIDTH as usize) / 2;
    let card_y = (WINDOW_HEIGHT - CARD_HEIGHT as usize) / 2;

    let erase_config = config::load_erase_config(CARD_WIDTH, CARD_HEIGHT);
    let mut overlay = EraseOverlay::new(erase_config);
    if let Err(err) = overlay.enable() {
        error!("running without erase overlay: {err}");
    }

    let mut window = match Window::new(
        "Scratchoff - drag to scratch, R resets, Esc quits",
        WINDOW_WIDTH,
        WINDOW_HEIGHT,
        WindowOptions::default(),
    ) {
        Ok(window) => window,
        Err(err) => {
            error!("window init failed: {err}");
            return;
        }
    };
    window.set_target_fps(60);

    let mut frame = vec![BACKDROP; WINDOW_WIDTH * WINDOW_HEIGHT];
    let mut pointer = PointerState::default();

    while window.is_open() && !window.is_key_down(Key::Escape) {
        if window.is_key_pressed(Key::R, KeyRepeat::No) {
            info!("restoring mask");
            let _ = overlay.enable();
        }

        let down = window.get_mouse_down(MouseButton::Left);
        if let Some((mx, my)) = window.get_mouse_pos(MouseMode::Clamp) {
            pointer.forward(&mut overlay, down, mx - card_x as f32, my - card_y as f32);
        }

        draw_scene(&mut frame, card_x, card_y);
        render::draw_overlay(
            &mut frame,
            WINDOW_WIDTH,
            WINDOW_HEIGHT,
            (card_x, card_y),
            &overlay,
        );

        if let Err(err) = window.update_with_buffer(&frame, WINDOW_WIDTH, WINDOW_HEIGHT) {
            error!("window update failed: {err}");
            break;
        }
    }
}

/// Backdrop, card, and the phrase the mask hides
fn draw_scene(frame: &mut [u32], card_x: usize, card_y: usize) {
    frame.fill(BACKDROP);
    text::fill_rect(
        frame,
        WINDOW_WIDTH,
        WINDOW_HEIGHT,
        card_x,
        card_y,
        CARD_WIDTH as usize,
        CARD_HEIGHT as usize,
        CARD_COLOR,
    );

    let phrase = "WIN 100";
    let scale = 6;
    let tx = card_x + (CARD_WIDTH as usize - text::text_width(phrase, scale)) / 2;
    let ty = card_y + (CARD_HEIGHT as usize - text::text_height(scale)) / 2;
    text::draw_text(
        frame,
        WINDOW_WIDTH,
        WINDOW_HEIGHT,
        tx,
        ty,
        phrase,
        scale,
        TEXT_COLOR,
    );
}
