use bend_detector::config::load_config;
use bend_detector::image::io::{load_grayscale_image, save_mask_png, write_json_file};
use bend_detector::report::format_report;
use bend_detector::{BendDetector, DetectionReport};
use rayon::prelude::*;
use serde::Serialize;
use std::env;
use std::path::{Path, PathBuf};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;
    if config.inputs.is_empty() {
        return Err(format!("Config {config_path} lists no inputs"));
    }

    let images = config
        .inputs
        .iter()
        .map(|path| load_grayscale_image(path))
        .collect::<Result<Vec<_>, _>>()?;
    let detector = BendDetector::new(config.detector);
    let traces: Vec<_> = images
        .par_iter()
        .map(|img| detector.trace(img.as_view()))
        .collect();

    let mut entries = Vec::with_capacity(traces.len());
    for (path, trace) in config.inputs.iter().zip(traces) {
        let trace = trace.map_err(|e| format!("Failed to analyse {}: {e}", path.display()))?;
        println!(
            "{}: {} segments, {} bend points",
            path.display(),
            trace.report.segments.len(),
            trace.report.bends.bend_points.len()
        );
        for line in format_report(&trace.report.bends) {
            println!("  {line}");
        }

        if let Some(dir) = &config.output.debug_dir {
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "image".to_string());
            save_mask_png(&trace.edges, &dir.join(format!("{stem}_edges.png")))?;
            save_mask_png(&trace.dilated, &dir.join(format!("{stem}_dilated.png")))?;
        }

        entries.push(ImageReport {
            input: path.clone(),
            report: trace.report,
        });
    }

    if let Some(path) = &config.output.report_json {
        write_json_file(path, &entries)?;
        println!("Saved {} reports to {}", entries.len(), path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: detect_bends <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageReport {
    input: PathBuf,
    report: DetectionReport,
}
