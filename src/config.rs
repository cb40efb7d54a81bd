use std::path::PathBuf;

/// Environment variable that overrides the location of the version file.
pub const VERSION_FILE_ENV: &str = "UNMANIC_VERSION_FILE";

/// File name of the version file when no override is given.
pub const VERSION_FILE_NAME: &str = "version.json";

/// Returns the path of the version file.
/// Uses $UNMANIC_VERSION_FILE if it is set and non-empty,
/// otherwise `version.json` next to the running executable,
/// or ./version.json if the executable location is unknown.
pub fn version_file_path() -> PathBuf {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(PathBuf::from));

    version_file_path_with_env(std::env::var(VERSION_FILE_ENV).ok(), exe_dir)
}

/// Returns the path to the data directory for unmanic.
/// Uses $XDG_DATA_HOME/unmanic if XDG_DATA_HOME is set to an absolute path,
/// otherwise falls back to ~/.local/share/unmanic,
/// or ./unmanic if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("unmanic-metadata.log")
}

fn version_file_path_with_env(override_path: Option<String>, exe_dir: Option<PathBuf>) -> PathBuf {
    override_path
        .filter(|path| !path.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| exe_dir.map(|dir| dir.join(VERSION_FILE_NAME)))
        .unwrap_or_else(|| PathBuf::from(".").join(VERSION_FILE_NAME))
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    // Relative or empty XDG_DATA_HOME values are invalid and ignored
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .filter(|path| path.is_absolute())
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("unmanic")
}
