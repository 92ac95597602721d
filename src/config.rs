use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Name of the data file shipped next to the executable.
pub const DATA_FILE_NAME: &str = "periodic_table.csv";

/// Environment variable that overrides the data file location.
pub const DATA_PATH_ENV: &str = "PERIODIC_TABLE_CSV";

/// Candidate locations for the data file, in priority order.
pub fn candidate_paths(env_override: Option<OsString>, exe: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(path) = env_override.filter(|p| !p.is_empty()) {
        candidates.push(PathBuf::from(path));
    }
    if let Some(dir) = exe.and_then(Path::parent) {
        candidates.push(dir.join(DATA_FILE_NAME));
    }
    candidates.push(
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("data")
            .join(DATA_FILE_NAME),
    );

    candidates
}

/// Pick the first existing candidate, or the first one at all so a load
/// failure reports a meaningful path.
pub fn select_path(candidates: Vec<PathBuf>) -> PathBuf {
    let first = candidates.first().cloned().unwrap_or_else(|| PathBuf::from(DATA_FILE_NAME));
    candidates.into_iter().find(|p| p.is_file()).unwrap_or(first)
}

/// Resolve the data file from the process environment.
pub fn data_path() -> PathBuf {
    let exe = std::env::current_exe().ok();
    let candidates = candidate_paths(std::env::var_os(DATA_PATH_ENV), exe.as_deref());
    log::debug!("data file candidates: {candidates:?}");
    select_path(candidates)
}
