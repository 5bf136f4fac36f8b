use crate::layout;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Config {
    pub window: WindowConfig,
    pub scroll: ScrollConfig,
    pub ui: UiConfig,
}

/// Window configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct WindowConfig {
    /// Initial window width (in pixels)
    pub width: f32,
    /// Initial window height (in pixels)
    pub height: f32,
}

/// Scroll behavior configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ScrollConfig {
    /// Duration of the animated scroll to a section (in milliseconds)
    pub animation_ms: u64,
    /// Jump to sections instantly instead of animating
    pub reduce_motion: bool,
}

/// UI behavior configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UiConfig {
    /// Show the keyboard shortcut hints in the footer
    pub show_keyboard_hints: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            window: WindowConfig {
                width: 1280.0,
                height: 800.0,
            },
            scroll: ScrollConfig {
                animation_ms: layout::SCROLL_ANIMATION_MS_DEFAULT,
                reduce_motion: false,
            },
            ui: UiConfig {
                show_keyboard_hints: true,
            },
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "zillio") {
            let config_dir = proj_dirs.config_dir();
            return Some(config_dir.join("config.toml"));
        }
        None
    }

    /// Load configuration from file, or return defaults if file doesn't exist
    pub fn load() -> Self {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                match fs::read_to_string(&path) {
                    Ok(contents) => match toml::from_str::<Config>(&contents) {
                        Ok(config) => return config,
                        Err(e) => {
                            log::warn!("failed to parse config file: {e}; using defaults");
                        }
                    },
                    Err(e) => {
                        log::warn!("failed to read config file: {e}; using defaults");
                    }
                }
            }
        }
        Config::default()
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }

            let contents = toml::to_string_pretty(self)?;
            fs::write(&path, contents)?;
            return Ok(());
        }

        Err("Could not determine config directory".into())
    }

    /// Create a default config file if it doesn't exist
    pub fn create_default() -> Result<(), Box<dyn std::error::Error>> {
        if let Some(path) = Self::config_path() {
            if !path.exists() {
                let config = Config::default();
                config.save()?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.window.width, 1280.0);
        assert_eq!(config.window.height, 800.0);
        assert_eq!(config.scroll.animation_ms, 450);
        assert!(!config.scroll.reduce_motion);
        assert!(config.ui.show_keyboard_hints);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).expect("Failed to serialize");
        let deserialized: Config = toml::from_str(&toml_str).expect("Failed to deserialize");
        assert_eq!(config.scroll.animation_ms, deserialized.scroll.animation_ms);
        assert_eq!(config.window.width, deserialized.window.width);
    }
}
