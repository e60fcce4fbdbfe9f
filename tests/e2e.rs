mod common;

use bend_detector::image::ImageU8;
use bend_detector::report::format_report;
use bend_detector::{BendDetector, BendError, DetectorParams};
use common::synthetic_image::polyline_u8;

const WIDTH: usize = 320;
const HEIGHT: usize = 240;

fn bent_wire() -> Vec<u8> {
    polyline_u8(
        WIDTH,
        HEIGHT,
        &[(20.0, 180.0), (120.0, 60.0), (200.0, 60.0), (300.0, 200.0)],
        6.0,
    )
}

#[test]
fn bent_wire_produces_segments_and_consistent_bends() {
    let _ = env_logger::builder().is_test(true).try_init();
    let buffer = bent_wire();
    let image = ImageU8::packed(WIDTH, HEIGHT, &buffer).unwrap();

    let detector = BendDetector::new(DetectorParams::default());
    let report = detector.process(image).expect("valid image");

    assert_eq!((report.width, report.height), (WIDTH, HEIGHT));
    assert!(report.edge_pixels > 0, "expected Canny edges on the stroke");
    assert!(report.dilated_pixels >= report.edge_pixels);
    assert!(
        !report.segments.is_empty(),
        "expected Hough segments along the wire"
    );
    for s in &report.segments {
        assert!(s.x1 >= 0 && (s.x1 as usize) < WIDTH && s.x2 >= 0 && (s.x2 as usize) < WIDTH);
        assert!(s.y1 >= 0 && (s.y1 as usize) < HEIGHT && s.y2 >= 0 && (s.y2 as usize) < HEIGHT);
    }

    let bends = &report.bends;
    assert!(!bends.bend_points.is_empty(), "expected bends on the wire");
    for (vx, vy) in [(200, 60), (20, 180)] {
        assert!(
            bends
                .bend_points
                .iter()
                .any(|p| (p.x - vx).abs() <= 10 && (p.y - vy).abs() <= 10),
            "no bend point near vertex ({vx}, {vy}): {:?}",
            bends.bend_points
        );
    }
    assert_eq!(
        bends.angles.len(),
        bends.bend_points.len().saturating_sub(1)
    );
    assert!(bends
        .angles
        .iter()
        .all(|r| (0.0..180.0).contains(&r.angle_deg)));
    assert_eq!(format_report(bends).len(), bends.angles.len());

    let labels: Vec<&str> = report.timings.stages.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, ["blur", "canny", "dilate", "hough", "bends"]);
}

#[test]
fn repeated_runs_are_identical() {
    let buffer = bent_wire();
    let image = ImageU8::packed(WIDTH, HEIGHT, &buffer).unwrap();
    let detector = BendDetector::default();
    let a = detector.process(image).unwrap();
    let b = detector.process(image).unwrap();
    assert_eq!(a.segments, b.segments);
    assert_eq!(a.bends, b.bends);
}

#[test]
fn blank_image_yields_empty_outputs() {
    let buffer = vec![128u8; WIDTH * HEIGHT];
    let image = ImageU8::packed(WIDTH, HEIGHT, &buffer).unwrap();
    let report = BendDetector::default().process(image).unwrap();
    assert_eq!(report.edge_pixels, 0);
    assert!(report.segments.is_empty());
    assert!(report.bends.bend_points.is_empty());
    assert!(report.bends.angles.is_empty());
}

#[test]
fn empty_image_is_invalid_input() {
    let image = ImageU8 {
        w: 0,
        h: 10,
        stride: 0,
        data: &[],
    };
    assert!(matches!(
        BendDetector::default().process(image),
        Err(BendError::InvalidInput(_))
    ));
}

#[test]
fn short_buffer_is_rejected() {
    let buffer = vec![0u8; 10];
    assert!(ImageU8::packed(4, 4, &buffer).is_err());
}

#[test]
fn malformed_view_is_invalid_input() {
    let detector = BendDetector::default();
    let buffer = [0u8; 3];
    let short = ImageU8 {
        w: 4,
        h: 4,
        stride: 4,
        data: &buffer,
    };
    assert!(matches!(
        detector.process(short),
        Err(BendError::InvalidInput(_))
    ));

    let buffer = vec![0u8; 64];
    let narrow_stride = ImageU8 {
        w: 8,
        h: 4,
        stride: 2,
        data: &buffer,
    };
    assert!(matches!(
        detector.process(narrow_stride),
        Err(BendError::InvalidInput(_))
    ));
}

#[test]
fn padded_stride_matches_packed_image() {
    let wire = bent_wire();
    let pad = 16;
    let mut padded = vec![0u8; (WIDTH + pad) * HEIGHT];
    for (dst, src) in padded.chunks_mut(WIDTH + pad).zip(wire.chunks(WIDTH)) {
        dst[..WIDTH].copy_from_slice(src);
    }
    let strided = ImageU8 {
        w: WIDTH,
        h: HEIGHT,
        stride: WIDTH + pad,
        data: &padded,
    };
    let detector = BendDetector::default();
    let a = detector.process(strided).unwrap();
    let b = detector
        .process(ImageU8::packed(WIDTH, HEIGHT, &wire).unwrap())
        .unwrap();
    assert_eq!(a.segments, b.segments);
    assert_eq!(a.bends, b.bends);
}

#[test]
fn batch_matches_sequential_processing() {
    let wire = bent_wire();
    let blank = vec![90u8; WIDTH * HEIGHT];
    let images = [
        ImageU8::packed(WIDTH, HEIGHT, &wire).unwrap(),
        ImageU8::packed(WIDTH, HEIGHT, &blank).unwrap(),
        ImageU8 {
            w: 0,
            h: 0,
            stride: 0,
            data: &[],
        },
    ];
    let detector = BendDetector::default();
    let batch = detector.process_batch(&images);
    assert_eq!(batch.len(), 3);

    let first = batch[0].as_ref().unwrap();
    let single = detector.process(images[0]).unwrap();
    assert_eq!(first.segments, single.segments);
    assert_eq!(first.bends, single.bends);
    assert!(batch[1].as_ref().unwrap().segments.is_empty());
    assert!(batch[2].is_err());
}
