//! Default chart location.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable that overrides the directory holding the sample chart.
pub const SAMPLE_DIR_ENV: &str = "CHART_SAMPLE_DIR";

pub const SAMPLE_FILE_NAME: &str = "sample_chart.json";

/// Path of the sample chart used when no `--chart` is given.
pub fn sample_path() -> PathBuf {
    sample_dir(env::var_os(SAMPLE_DIR_ENV)).join(SAMPLE_FILE_NAME)
}

fn sample_dir(dir_override: Option<OsString>) -> PathBuf {
    dir_override
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../../assets")))
}
