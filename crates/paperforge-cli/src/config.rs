//! CLI configuration file handling.
//!
//! Settings that belong to the operator rather than the quiz author: where
//! rendered output goes and the fallback layout style. A paper's own
//! `[paper.style]` always wins over the config file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use paperforge_core::PaperStyle;

/// Top-level paperforge configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaperforgeConfig {
    #[serde(default)]
    pub render: RenderConfig,
    /// Layout for papers that do not set their own style.
    #[serde(default)]
    pub style: Option<PaperStyle>,
}

/// Rendering output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Directory rendered papers are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./rendered")
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

/// Loads config from an explicit path, or searches the default locations.
///
/// Search order:
/// 1. `paperforge.toml` in the current directory
/// 2. `~/.config/paperforge/config.toml`
///
/// No config file anywhere means built-in defaults.
pub fn load_config_from(path: Option<&Path>) -> Result<PaperforgeConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("paperforge.toml");
        if local.exists() {
            Some(local)
        } else if let Some(dir) = config_dir() {
            let global = dir.join("config.toml");
            global.exists().then_some(global)
        } else {
            None
        }
    };

    match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))
        }
        None => Ok(PaperforgeConfig::default()),
    }
}

fn config_dir() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("paperforge"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PaperforgeConfig::default();
        assert_eq!(config.render.output_dir, PathBuf::from("./rendered"));
        assert!(config.style.is_none());
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
[render]
output_dir = "out/papers"

[style]
options_per_row = 3
key_columns = 0
"#;
        let config: PaperforgeConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.render.output_dir, PathBuf::from("out/papers"));
        let style = config.style.unwrap();
        assert_eq!(style.options_per_row, 3);
        assert_eq!(style.key_columns, 0);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: PaperforgeConfig = toml::from_str("[render]\n").unwrap();
        assert_eq!(config.render.output_dir, PathBuf::from("./rendered"));
        assert!(config.style.is_none());
    }

    #[test]
    fn partial_style_fills_defaults() {
        let config: PaperforgeConfig = toml::from_str("[style]\nkey_columns = 0\n").unwrap();
        let style = config.style.unwrap();
        assert_eq!(style.key_columns, 0);
        assert_eq!(style.options_per_row, 4);
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let result = load_config_from(Some(Path::new("/no/such/paperforge.toml")));
        assert!(result.is_err());
    }
}
