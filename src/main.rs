use bend_detector::image::ImageU8;
use bend_detector::report::format_report;
use bend_detector::{BendDetector, DetectorParams};

fn main() {
    env_logger::init();
    // Demo stub: draws an L-shaped stroke into a blank buffer and runs the detector
    let (w, h) = (320usize, 240usize);
    let mut gray = vec![20u8; w * h];
    for y in 60..66 {
        for x in 40..280 {
            gray[y * w + x] = 230;
        }
    }
    for y in 60..220 {
        for x in 40..46 {
            gray[y * w + x] = 230;
        }
    }
    let img = ImageU8 {
        w,
        h,
        stride: w,
        data: &gray,
    };

    let det = BendDetector::new(DetectorParams::default());
    match det.process(img) {
        Ok(report) => {
            println!(
                "segments={} bends={} total_ms={:.3}",
                report.segments.len(),
                report.bends.bend_points.len(),
                report.timings.total_ms
            );
            for line in format_report(&report.bends) {
                println!("{line}");
            }
        }
        Err(err) => eprintln!("Error: {err}"),
    }
}
