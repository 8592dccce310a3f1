//! Pixel-exact drawing primitives over a [`Surface`].
//!
//! Every primitive is clipped or bounds-checked so that it can never write
//! outside the canvas, letting game code draw without pre-checking
//! coordinates.

pub mod clip;

use crate::surface::Surface;
use crate::types::Color;

/// Plots a single pixel; no-op outside the canvas.
pub fn plot(surface: &mut Surface, x: i32, y: i32, colour: Color) {
    surface.put(x, y, colour);
}

/// Draws a line, clipped to the canvas.
///
/// The segment is first shortened with Cohen-Sutherland clipping; whatever
/// remains is rasterized with Bresenham's algorithm. A segment entirely
/// outside the canvas draws nothing.
pub fn line(surface: &mut Surface, x1: i32, y1: i32, x2: i32, y2: i32, colour: Color) {
    let Some((x1, y1, x2, y2)) =
        clip::clip_line(x1, y1, x2, y2, surface.width() - 1, surface.height() - 1)
    else {
        return;
    };

    let dx = (x2 - x1).abs();
    let dy = -(y2 - y1).abs();
    let sx = if x1 < x2 { 1 } else { -1 };
    let sy = if y1 < y2 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x1, y1);

    loop {
        surface.put(x, y, colour);
        if x == x2 && y == y2 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Draws an ellipse outline centred on `(cx, cy)` using midpoint stepping.
///
/// Degenerate radii (`rx < 1` or `ry < 1`) draw nothing. Each of the four
/// symmetric points written per step is bounds-checked on its own, so a point
/// falling off the canvas never suppresses the other three.
pub fn ellipse(surface: &mut Surface, cx: i32, cy: i32, rx: i32, ry: i32, colour: Color) {
    if rx < 1 || ry < 1 {
        return;
    }

    let (rx, ry) = (rx as i64, ry as i64);
    let two_rx_sq = 2 * rx * rx;
    let two_ry_sq = 2 * ry * ry;

    // First region: step y outward while the tangent slope magnitude is <= 1.
    let mut x = rx;
    let mut y = 0i64;
    let mut x_change = ry * ry * (1 - 2 * rx);
    let mut y_change = rx * rx;
    let mut err = 0i64;
    let mut x_stop = two_ry_sq * rx;
    let mut y_stop = 0i64;

    while x_stop >= y_stop {
        put_symmetric(surface, cx, cy, x as i32, y as i32, colour);

        y += 1;
        y_stop += two_rx_sq;
        err += y_change;
        y_change += two_rx_sq;
        if x_change + 2 * err > 0 {
            x -= 1;
            x_stop -= two_ry_sq;
            err += x_change;
            x_change += two_ry_sq;
        }
    }

    // Second region: step x outward while the tangent slope magnitude is > 1.
    x = 0;
    y = ry;
    x_change = ry * ry;
    y_change = rx * rx * (1 - 2 * ry);
    err = 0;
    x_stop = 0;
    y_stop = two_rx_sq * ry;

    while x_stop <= y_stop {
        put_symmetric(surface, cx, cy, x as i32, y as i32, colour);

        x += 1;
        x_stop += two_ry_sq;
        err += x_change;
        x_change += two_ry_sq;
        if y_change + 2 * err > 0 {
            y -= 1;
            y_stop -= two_rx_sq;
            err += y_change;
            y_change += two_rx_sq;
        }
    }
}

/// Draws a circle outline; shorthand for an ellipse with equal radii.
pub fn circle(surface: &mut Surface, cx: i32, cy: i32, r: i32, colour: Color) {
    ellipse(surface, cx, cy, r, r, colour);
}

/// Writes the four quadrant points of an ellipse step, each independently
/// bounds-checked by the surface.
fn put_symmetric(surface: &mut Surface, cx: i32, cy: i32, x: i32, y: i32, colour: Color) {
    surface.put(cx + x, cy + y, colour);
    surface.put(cx - x, cy + y, colour);
    surface.put(cx - x, cy - y, colour);
    surface.put(cx + x, cy - y, colour);
}
