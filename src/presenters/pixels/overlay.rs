//! Drawing on top of an RGBA frame.

const OUTLINE: [u8; 4] = [255, 255, 255, 255];

/// Draws the 1px outline of the rectangle spanned by two pixel corners.
///
/// Corners may be given in any order and are clamped to the frame.
pub fn draw_selection_outline(
    frame: &mut [u8],
    width: usize,
    height: usize,
    a: (usize, usize),
    b: (usize, usize),
) {
    if width == 0 || height == 0 {
        return;
    }

    let x0 = a.0.min(b.0).min(width - 1);
    let x1 = a.0.max(b.0).min(width - 1);
    let y0 = a.1.min(b.1).min(height - 1);
    let y1 = a.1.max(b.1).min(height - 1);

    let mut put = |x: usize, y: usize| {
        let index = (y * width + x) * 4;
        frame[index..index + 4].copy_from_slice(&OUTLINE);
    };

    for x in x0..=x1 {
        put(x, y0);
        put(x, y1);
    }
    for y in y0..=y1 {
        put(x0, y);
        put(x1, y);
    }
}
