//! JSON configuration for the `detect_bends` tool.
use crate::detector::DetectorParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct BendToolConfig {
    /// Images to analyse; processed in parallel.
    pub inputs: Vec<PathBuf>,
    #[serde(default)]
    pub detector: DetectorParams,
    #[serde(default)]
    pub output: BendOutputConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BendOutputConfig {
    /// Report for every input, as a JSON array.
    pub report_json: Option<PathBuf>,
    /// Directory receiving `<stem>_edges.png` and `<stem>_dilated.png`.
    pub debug_dir: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<BendToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn parse_config(json: &str) -> Result<BendToolConfig, serde_json::Error> {
    serde_json::from_str(json)
}
