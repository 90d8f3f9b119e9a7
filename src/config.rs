use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::theme::Theme;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub editor: EditorConfig,
    pub layout: LayoutConfig,
    pub theme_name: String,
    #[serde(skip)]
    pub theme: Theme,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub tab_size: usize,
    pub show_line_numbers: bool,
    pub format_on_paste: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_size: 2,
            show_line_numbers: true,
            format_on_paste: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub results_width: u16,
    pub results_min_width: u16,
    pub results_max_width: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            results_width: 44,
            results_min_width: 24,
            results_max_width: 80,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            editor: EditorConfig::default(),
            layout: LayoutConfig::default(),
            theme_name: String::from("dark"),
            theme: Theme::dark(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if config_path.exists() {
            let content = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config: {}", config_path.display()))?;
            let mut config: Config =
                toml::from_str(&content).with_context(|| "Failed to parse config file")?;
            config.theme = Theme::from_name(&config.theme_name);
            Ok(config)
        } else {
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn set_theme(&mut self, name: &str) {
        self.theme_name = name.to_string();
        self.theme = Theme::from_name(name);
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_file_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(&config_path, content)?;
        Ok(())
    }

    fn config_file_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "jsonlens", "jsonlens")
            .context("Could not determine config directory")?;
        Ok(proj_dirs.config_dir().join("config.toml"))
    }
}
