//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "trellis";
const APPLICATION: &str = "trellis-demo";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Cache directory for regenerable output such as logs.
///
/// - Linux: `$XDG_CACHE_HOME/trellis-demo` or `~/.cache/trellis-demo`
/// - macOS: `~/Library/Caches/dev.trellis.trellis-demo`
/// - Windows: `C:\Users\<User>\AppData\Local\trellis\trellis-demo\cache`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Get the path to the latest log file.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join("latest.log"))
}
