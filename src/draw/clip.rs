//! Cohen-Sutherland line clipping against an inclusive pixel rectangle.

const INSIDE: u8 = 0;
const LEFT: u8 = 1;
const RIGHT: u8 = 2;
const BELOW: u8 = 4;
const ABOVE: u8 = 8;

/// Outcode of a point relative to `[0, xmax] x [0, ymax]`, an OR of the
/// independent axis tests.
fn outcode(x: f64, y: f64, xmax: f64, ymax: f64) -> u8 {
    let mut code = INSIDE;
    if x < 0.0 {
        code |= LEFT;
    } else if x > xmax {
        code |= RIGHT;
    }
    if y < 0.0 {
        code |= BELOW;
    } else if y > ymax {
        code |= ABOVE;
    }
    code
}

/// Clips the segment `(x1,y1)-(x2,y2)` against `[0, xmax] x [0, ymax]`.
///
/// Returns the clipped endpoints, or `None` when the segment lies entirely
/// outside the rectangle. Each iteration moves the outside endpoint to its
/// intersection with the nearest violated edge until the segment is trivially
/// accepted (both outcodes zero) or rejected (outcodes share a violated edge).
pub fn clip_line(
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    xmax: i32,
    ymax: i32,
) -> Option<(i32, i32, i32, i32)> {
    let (xmax, ymax) = (xmax as f64, ymax as f64);
    let (mut x1, mut y1) = (x1 as f64, y1 as f64);
    let (mut x2, mut y2) = (x2 as f64, y2 as f64);

    let mut code1 = outcode(x1, y1, xmax, ymax);
    let mut code2 = outcode(x2, y2, xmax, ymax);

    loop {
        if code1 | code2 == 0 {
            return Some((
                x1.round() as i32,
                y1.round() as i32,
                x2.round() as i32,
                y2.round() as i32,
            ));
        }
        if code1 & code2 != 0 {
            return None;
        }

        let out = if code1 != 0 { code1 } else { code2 };
        let (x, y);
        if out & ABOVE != 0 {
            x = x1 + (x2 - x1) * (ymax - y1) / (y2 - y1);
            y = ymax;
        } else if out & BELOW != 0 {
            x = x1 + (x2 - x1) * (0.0 - y1) / (y2 - y1);
            y = 0.0;
        } else if out & RIGHT != 0 {
            y = y1 + (y2 - y1) * (xmax - x1) / (x2 - x1);
            x = xmax;
        } else {
            y = y1 + (y2 - y1) * (0.0 - x1) / (x2 - x1);
            x = 0.0;
        }

        if out == code1 {
            x1 = x;
            y1 = y;
            code1 = outcode(x1, y1, xmax, ymax);
        } else {
            x2 = x;
            y2 = y;
            code2 = outcode(x2, y2, xmax, ymax);
        }
    }
}
