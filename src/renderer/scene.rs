//! Draws the movie's entities onto a [`Canvas`]
//!
//! Geometry is in playfield pixels relative to the character, mirroring the
//! hand-placed shapes of the original drawing.

use glam::Vec2;

use super::canvas::{Canvas, Rect};
use super::vertex::colors;
use crate::consts::*;
use crate::sim::{Bubble, SimState};

/// Draw one frame: character, decorations, then bubbles on top
pub fn draw_scene(state: &SimState, canvas: &mut dyn Canvas) {
    let character = state.character.pos.as_vec2();
    draw_character(canvas, character);
    draw_flag(canvas, character + FLAG_OFFSET);
    draw_blaster(canvas, character + BLASTER_OFFSET);

    for bubble in state.active_bubbles() {
        draw_bubble(canvas, bubble);
    }
}

/// Round body with two eyes looking left
pub fn draw_character(canvas: &mut dyn Canvas, center: Vec2) {
    let r = CHARACTER_RADIUS;
    canvas.fill_ellipse(Rect::at(center, -r, -r, r, r), colors::CHARACTER_BODY);
    canvas.fill_ellipse(
        Rect::at(center, -25.0, -10.0, -15.0, 0.0),
        colors::CHARACTER_EYE,
    );
    canvas.fill_ellipse(
        Rect::at(center, -10.0, -10.0, 0.0, 0.0),
        colors::CHARACTER_EYE,
    );
}

/// Pole with a red flag to its right; `origin` is the top of the pole
pub fn draw_flag(canvas: &mut dyn Canvas, origin: Vec2) {
    canvas.fill_rect(Rect::at(origin, 0.0, 0.0, 10.0, 100.0), colors::FLAG_POLE);
    canvas.fill_rect(Rect::at(origin, 10.0, 0.0, 60.0, 30.0), colors::FLAG_CLOTH);
}

/// Left-facing bubble blaster; `origin` is the back top corner of the body
pub fn draw_blaster(canvas: &mut dyn Canvas, origin: Vec2) {
    let color = colors::BLASTER;
    // body
    canvas.fill_rect(Rect::at(origin, -50.0, 0.0, 0.0, 20.0), color);
    // barrel
    canvas.fill_rect(Rect::at(origin, -65.0, -5.0, -40.0, 5.0), color);
    // sight
    canvas.fill_rect(Rect::at(origin, -15.0, -8.0, -5.0, -3.0), color);
    // trigger guard
    canvas.fill_ellipse(Rect::at(origin, -25.0, 10.0, -15.0, 20.0), color);

    let handle = [
        origin + Vec2::new(-10.0, 20.0),
        origin + Vec2::new(-25.0, 20.0),
        origin + Vec2::new(-20.0, 40.0),
        origin + Vec2::new(-5.0, 40.0),
    ];
    canvas.fill_polygon(&handle, color);
}

pub fn draw_bubble(canvas: &mut dyn Canvas, bubble: &Bubble) {
    if !bubble.active {
        return;
    }
    let color = if bubble.pulling_back {
        colors::BUBBLE_CHARGING
    } else {
        colors::BUBBLE
    };
    canvas.fill_ellipse(
        Rect::at(bubble.pos, 0.0, 0.0, BUBBLE_SIZE, BUBBLE_SIZE),
        color,
    );
}
