//! Game configuration resource.
//!
//! Settings live in an INI file under the user's config directory
//! (`~/.config/flappy-disk/app.conf` on Linux). When the file does not exist
//! it is generated from the bundled template and the run continues with the
//! template values, even if the template cannot be written. Any other failure
//! is fatal and carries its own exit code.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! fullscreen = false
//! width = 640
//! height = 480
//! target_fps = 30
//!
//! [input]
//! jump = space
//! quit = escape
//! debug = f11
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Template written when no config file exists.
pub const DEFAULT_CONFIG_TEMPLATE: &str = include_str!("../../assets/default.conf");

const APP_DIR: &str = "flappy-disk";
const CONFIG_NAME: &str = "app.conf";

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 640;
const DEFAULT_WINDOW_HEIGHT: u32 = 480;
const DEFAULT_TARGET_FPS: u32 = 30;
const DEFAULT_FULLSCREEN: bool = false;

/// Failure classes of configuration handling. Each maps to its own exit code.
#[derive(Debug)]
pub enum ConfigError {
    /// Writing the template failed during `--reset-conf`.
    Write { path: PathBuf, source: io::Error },
    /// The file exists but could not be read.
    Read { path: PathBuf, source: io::Error },
    /// The file was read but is not valid INI.
    Parse { path: PathBuf, message: String },
}

impl ConfigError {
    pub fn exit_code(&self) -> i32 {
        match self {
            ConfigError::Write { .. } => 1,
            ConfigError::Read { .. } => 2,
            ConfigError::Parse { .. } => 3,
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Write { path, source } => {
                write!(f, "could not write config {}: {}", path.display(), source)
            }
            ConfigError::Read { path, source } => {
                write!(f, "could not read config {}: {}", path.display(), source)
            }
            ConfigError::Parse { path, message } => {
                write!(f, "could not parse config {}: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Write { source, .. } | ConfigError::Read { source, .. } => Some(source),
            ConfigError::Parse { .. } => None,
        }
    }
}

/// Key names as written in the `[input]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    pub jump: String,
    pub quit: String,
    pub debug: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            jump: "space".into(),
            quit: "escape".into(),
            debug: "f11".into(),
        }
    }
}

/// Per-user location of the config file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(CONFIG_NAME)
}

/// Game configuration resource.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Start in fullscreen mode.
    pub fullscreen: bool,
    /// Tick rate cap.
    pub target_fps: u32,
    pub keys: KeyBindings,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            fullscreen: DEFAULT_FULLSCREEN,
            target_fps: DEFAULT_TARGET_FPS,
            keys: KeyBindings::default(),
            config_path: default_config_path(),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load the config at `path`, generating it from the template when missing.
    ///
    /// With `reset`, the template is written first even if a file exists.
    pub fn load_or_create(path: impl Into<PathBuf>, reset: bool) -> Result<Self, ConfigError> {
        let mut config = Self::with_path(path);
        if reset {
            info!("Resetting config to defaults");
            write_default(&config.config_path)?;
        }
        config.load_from_file()?;
        Ok(config)
    }

    /// Load configuration from the INI file.
    ///
    /// A missing file is replaced by the template; if that write fails the
    /// template values are still used. Missing values retain their current values.
    pub fn load_from_file(&mut self) -> Result<(), ConfigError> {
        let contents = match std::fs::read_to_string(&self.config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!(
                    "No config at {}, creating default",
                    self.config_path.display()
                );
                if let Err(e) = write_default(&self.config_path) {
                    warn!("{}, continuing with built-in defaults", e);
                }
                DEFAULT_CONFIG_TEMPLATE.to_string()
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: self.config_path.clone(),
                    source,
                });
            }
        };

        let mut ini = Ini::new();
        ini.read(contents).map_err(|message| ConfigError::Parse {
            path: self.config_path.clone(),
            message,
        })?;
        self.apply_ini(&ini);

        info!(
            "Loaded config: {}x{} window, fullscreen={}, fps={}, keys={:?}",
            self.window_width, self.window_height, self.fullscreen, self.target_fps, self.keys
        );

        Ok(())
    }

    fn apply_ini(&mut self, ini: &Ini) {
        // [window] section
        match ini.getuint("window", "width") {
            Ok(Some(width)) if width > 0 => self.window_width = width as u32,
            Ok(_) => {}
            Err(e) => warn!("Ignoring window.width: {}", e),
        }
        match ini.getuint("window", "height") {
            Ok(Some(height)) if height > 0 => self.window_height = height as u32,
            Ok(_) => {}
            Err(e) => warn!("Ignoring window.height: {}", e),
        }
        match ini.getuint("window", "target_fps") {
            Ok(Some(fps)) if fps > 0 => self.target_fps = fps as u32,
            Ok(_) => {}
            Err(e) => warn!("Ignoring window.target_fps: {}", e),
        }
        match ini.getbool("window", "fullscreen") {
            Ok(Some(fullscreen)) => self.fullscreen = fullscreen,
            Ok(None) => {}
            Err(e) => warn!("Ignoring window.fullscreen: {}", e),
        }

        // [input] section
        if let Some(jump) = ini.get("input", "jump") {
            self.keys.jump = jump;
        }
        if let Some(quit) = ini.get("input", "quit") {
            self.keys.quit = quit;
        }
        if let Some(debug) = ini.get("input", "debug") {
            self.keys.debug = debug;
        }
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file and its directory if they don't exist.
    pub fn save_to_file(&self) -> Result<(), ConfigError> {
        let mut config = Ini::new();

        config.set("window", "fullscreen", Some(self.fullscreen.to_string()));
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));

        config.set("input", "jump", Some(self.keys.jump.clone()));
        config.set("input", "quit", Some(self.keys.quit.clone()));
        config.set("input", "debug", Some(self.keys.debug.clone()));

        let write_err = |source| ConfigError::Write {
            path: self.config_path.clone(),
            source,
        };
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        config.write(&self.config_path).map_err(write_err)?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

/// Write the bundled template to `path`, creating parent directories.
pub fn write_default(path: &Path) -> Result<(), ConfigError> {
    let write_err = |source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    std::fs::write(path, DEFAULT_CONFIG_TEMPLATE).map_err(write_err)?;
    info!("Wrote default config to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_created_from_template() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flappy-disk").join("app.conf");

        let config = GameConfig::load_or_create(&path, false).unwrap();

        assert!(path.exists());
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, DEFAULT_CONFIG_TEMPLATE);
        assert_eq!(config.window_size(), (640, 480));
        assert!(!config.fullscreen);
        assert_eq!(config.keys, KeyBindings::default());
    }

    #[test]
    fn test_existing_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.conf");
        std::fs::write(
            &path,
            "[window]\nwidth = 800\nheight = 600\nfullscreen = true\n\n[input]\njump = up\n",
        )
        .unwrap();

        let config = GameConfig::load_or_create(&path, false).unwrap();

        assert_eq!(config.window_size(), (800, 600));
        assert!(config.fullscreen);
        assert_eq!(config.target_fps, 30);
        assert_eq!(config.keys.jump, "up");
        assert_eq!(config.keys.quit, "escape");
    }

    #[test]
    fn test_bad_values_keep_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.conf");
        std::fs::write(&path, "[window]\nwidth = wide\nfullscreen = maybe\n").unwrap();

        let config = GameConfig::load_or_create(&path, false).unwrap();

        assert_eq!(config.window_width, 640);
        assert!(!config.fullscreen);
    }

    #[test]
    fn test_reset_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.conf");
        std::fs::write(&path, "[window]\nwidth = 1024\n").unwrap();

        let config = GameConfig::load_or_create(&path, true).unwrap();

        assert_eq!(config.window_width, 640);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            DEFAULT_CONFIG_TEMPLATE
        );
    }

    #[test]
    fn test_unreadable_path_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        // a directory exists where the file should be
        let path = dir.path().join("app.conf");
        std::fs::create_dir(&path).unwrap();

        let err = GameConfig::load_or_create(&path, false).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[cfg(unix)]
    #[test]
    fn test_unwritable_missing_config_uses_template() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let locked = dir.path().join("locked");
        std::fs::create_dir(&locked).unwrap();
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o555)).unwrap();
        let path = locked.join("flappy-disk").join("app.conf");

        let result = GameConfig::load_or_create(&path, false);
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();

        let config = result.unwrap();
        assert_eq!(config.window_size(), (640, 480));
        assert_eq!(config.keys, KeyBindings::default());
    }

    #[test]
    fn test_reset_into_unwritable_location_is_a_write_error() {
        let dir = tempfile::tempdir().unwrap();
        // a regular file sits where the config directory should be
        let blocker = dir.path().join("flappy-disk");
        std::fs::write(&blocker, "").unwrap();
        let path = blocker.join("app.conf");

        let err = GameConfig::load_or_create(&path, true).unwrap_err();
        assert!(matches!(err, ConfigError::Write { .. }));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_malformed_ini_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.conf");
        std::fs::write(&path, "[window\nwidth = 640\n").unwrap();

        let err = GameConfig::load_or_create(&path, false).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_save_round_trips_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("app.conf");
        let mut config = GameConfig::with_path(&path);
        config.window_width = 1280;
        config.keys.quit = "q".into();
        config.save_to_file().unwrap();

        let loaded = GameConfig::load_or_create(&path, false).unwrap();
        assert_eq!(loaded.window_width, 1280);
        assert_eq!(loaded.keys.quit, "q");
    }

    #[test]
    fn test_exit_codes_are_distinct() {
        let io = || io::Error::other("boom");
        let codes = [
            ConfigError::Write {
                path: PathBuf::new(),
                source: io(),
            }
            .exit_code(),
            ConfigError::Read {
                path: PathBuf::new(),
                source: io(),
            }
            .exit_code(),
            ConfigError::Parse {
                path: PathBuf::new(),
                message: String::new(),
            }
            .exit_code(),
        ];
        assert_eq!(codes, [1, 2, 3]);
    }
}
