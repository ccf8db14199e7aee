//! End-to-end pipeline test: generate a field, render a frame through the
//! viewport transform, export it as a PNG, and verify the decoded pixels.

use scatter_circles::color::Rgba8;
use scatter_circles::view::ScatterView;

#[test]
fn test_render_export_decode_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("CirclesOutput.png");

    let mut view = ScatterView::new(500.0, 500.0, 1234);
    view.resize(500, 500);
    view.export_png(&path).unwrap();

    let img = image::open(&path).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (500, 500));

    // The decoded image must match the live buffer byte for byte.
    let buf = view.buffer().unwrap();
    assert_eq!(img.as_raw().as_slice(), buf.bytes());

    // Background corners stay opaque white (the scatter ring and the label
    // never reach them).
    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
    assert_eq!(img.get_pixel(499, 0).0, [255, 255, 255, 255]);

    // With default parameters every point is drawn, so the counter reads
    // 00010000 and the frame is far from blank.
    assert_eq!(view.points_drawn(), 10_000);
    let non_white = img
        .pixels()
        .filter(|p| p.0 != [255, 255, 255, 255])
        .count();
    assert!(non_white > 1000, "only {} non-white pixels", non_white);
}

#[test]
fn test_exported_circle_center_matches_composited_color() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("single.png");

    // A 1-point field: the circle center must decode to the generation
    // color (fully opaque over white, so no compositing residue).
    let mut view = ScatterView::new(500.0, 500.0, 77);
    let delta = -(view.point_count() as i64) + 1;
    view.change_point_count(delta);
    view.set_radius_scale(100); // radius 5 logical units
    view.resize(500, 500);
    view.export_png(&path).unwrap();

    let img = image::open(&path).unwrap().to_rgba8();
    let buf = view.buffer().unwrap();

    // Find the darkest-from-white pixel above the label band (the label
    // sits at y >= 480; the scatter ring stays above y = 470).
    let mut best = (0u32, 0u32, i32::MAX);
    for y in 0..470u32 {
        for x in 0..500u32 {
            let p = buf.pixel(x, y);
            let d = p.r as i32 + p.g as i32 + p.b as i32;
            if d < best.2 {
                best = (x, y, d);
            }
        }
    }
    let (cx, cy, darkest) = best;
    assert!(darkest < 3 * 250, "no circle found in the ring area");
    assert_eq!(img.get_pixel(cx, cy).0, {
        let p = buf.pixel(cx, cy);
        [p.r, p.g, p.b, p.a]
    });
    let Rgba8 { r, g, b, a } = buf.pixel(cx, cy);
    // Generation colors are spline values scaled by 0.8, so each channel
    // stays at or below ~0.8 of full.
    assert!(r <= 210 && g <= 210 && b <= 210);
    assert_eq!(a, 255);
}
