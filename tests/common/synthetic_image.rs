/// Dark background with a bright stroke of `thickness` pixels following the
/// polyline through `points`.
pub fn polyline_u8(
    width: usize,
    height: usize,
    points: &[(f32, f32)],
    thickness: f32,
) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(points.len() >= 2, "polyline needs at least two points");

    let half = thickness * 0.5;
    let mut img = vec![25u8; width * height];
    for y in 0..height {
        for x in 0..width {
            let p = (x as f32 + 0.5, y as f32 + 0.5);
            let on_stroke = points
                .windows(2)
                .any(|w| distance_to_segment(p, w[0], w[1]) <= half);
            if on_stroke {
                img[y * width + x] = 230;
            }
        }
    }
    img
}

fn distance_to_segment(p: (f32, f32), a: (f32, f32), b: (f32, f32)) -> f32 {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let len_sq = dx * dx + dy * dy;
    let t = if len_sq > 0.0 {
        (((p.0 - a.0) * dx + (p.1 - a.1) * dy) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let (cx, cy) = (a.0 + t * dx, a.1 + t * dy);
    ((p.0 - cx).powi(2) + (p.1 - cy).powi(2)).sqrt()
}
