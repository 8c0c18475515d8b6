//! Application profile directory resolution
//!
//! Settings files and logs live under %APPDATA%\Vitrina, falling back to the
//! working directory when APPDATA is unset.

use std::path::PathBuf;

/// Directory name under the platform data directory
const PROFILE_DIR_NAME: &str = "Vitrina";

/// Resolve the application profile directory
///
/// The directory is not created here; callers create it on first write.
pub fn profile_dir() -> PathBuf {
    let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(appdata).join(PROFILE_DIR_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_dir_ends_with_app_name() {
        let dir = profile_dir();
        assert!(dir.to_string_lossy().ends_with(PROFILE_DIR_NAME));
    }
}
