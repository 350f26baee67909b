//! Sobel edge boost applied to a pixel grid before glyph mapping.

use super::resample::PixelGrid;

/// Gradient magnitude above which a pixel is boosted.
pub const EDGE_THRESHOLD: f32 = 50.0;

/// Fraction of the gradient magnitude added to each color channel.
pub const EDGE_BOOST: f32 = 0.5;

const SOBEL_X: [[i32; 3]; 3] = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];
const SOBEL_Y: [[i32; 3]; 3] = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];

/// Sobel gradient magnitude at an interior pixel.
///
/// Per-pixel intensity is the plain average of R, G and B.
/// The kernels used are:
/// ```text
/// Gx:          Gy:
/// [-1  0  1]   [-1 -2 -1]
/// [-2  0  2]   [ 0  0  0]
/// [-1  0  1]   [ 1  2  1]
/// ```
pub fn gradient_magnitude(grid: &PixelGrid, x: u32, y: u32) -> f32 {
    let mut gx = 0.0f32;
    let mut gy = 0.0f32;

    for ky in 0..3 {
        for kx in 0..3 {
            let [r, g, b, _] = grid.pixel(x + kx - 1, y + ky - 1);
            let intensity = (r as f32 + g as f32 + b as f32) / 3.0;
            gx += intensity * SOBEL_X[ky as usize][kx as usize] as f32;
            gy += intensity * SOBEL_Y[ky as usize][kx as usize] as f32;
        }
    }

    (gx * gx + gy * gy).sqrt()
}

/// Brighten pixels that sit on strong edges.
///
/// Gradients are always computed from `grid` itself; boosts are written to a
/// fresh copy, so boosting one pixel never changes the gradient seen by its
/// neighbours. The 1-pixel border is returned untouched, as is any grid
/// narrower or shorter than 3 pixels. Alpha is never modified.
pub fn apply_edge_detection(grid: &PixelGrid) -> PixelGrid {
    let mut out = grid.clone();
    let (width, height) = (grid.width(), grid.height());
    if width < 3 || height < 3 {
        return out;
    }

    let mut boosted = 0usize;
    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let magnitude = gradient_magnitude(grid, x, y);
            if magnitude <= EDGE_THRESHOLD {
                continue;
            }
            let boost = magnitude * EDGE_BOOST;
            let [r, g, b, a] = grid.pixel(x, y);
            let lift = |c: u8| (c as f32 + boost).round().min(255.0) as u8;
            out.set_pixel(x, y, [lift(r), lift(g), lift(b), a]);
            boosted += 1;
        }
    }

    log::debug!(
        "Edge filter boosted {} of {} interior pixels",
        boosted,
        (width as usize - 2) * (height as usize - 2)
    );
    out
}
