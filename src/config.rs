//! Server install layout.
//!
//! Weather presets live in `<install path>/content/weather`, one directory per
//! preset. The install path comes from the command line or the
//! `WEATHER_PRESETS_SERVER_PATH` environment variable.

use std::path::{Path, PathBuf};

/// Environment variable naming the server install path
pub const SERVER_PATH_ENV: &str = "WEATHER_PRESETS_SERVER_PATH";

/// Locations inside a simulation server installation
#[derive(Debug, Clone)]
pub struct ServerLayout {
    install_path: PathBuf,
    weather_override: Option<PathBuf>,
}

impl ServerLayout {
    pub fn new(install_path: impl Into<PathBuf>) -> Self {
        Self {
            install_path: install_path.into(),
            weather_override: None,
        }
    }

    /// Use `dir` as the preset directory instead of the derived one
    #[must_use]
    pub fn with_weather_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.weather_override = dir;
        self
    }

    #[must_use]
    pub fn install_path(&self) -> &Path {
        &self.install_path
    }

    /// Directory holding one subdirectory per installed weather preset
    #[must_use]
    pub fn weather_dir(&self) -> PathBuf {
        match &self.weather_override {
            Some(dir) => dir.clone(),
            None => self.install_path.join("content").join("weather"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weather_dir_from_install_path() {
        let layout = ServerLayout::new("/srv/acserver");
        assert_eq!(
            layout.weather_dir(),
            PathBuf::from("/srv/acserver/content/weather")
        );
    }

    #[test]
    fn test_weather_dir_override() {
        let layout =
            ServerLayout::new("/srv/acserver").with_weather_dir(Some(PathBuf::from("/tmp/w")));
        assert_eq!(layout.weather_dir(), PathBuf::from("/tmp/w"));
        assert_eq!(layout.install_path(), Path::new("/srv/acserver"));
    }
}
