//! Garagiste configuration.
//!
//! Output preferences, chat pacing and knowledge base location.
//! Config file: ~/.config/garagiste/config.toml or /etc/garagiste/config.toml

use anyhow::{Context, Result};
use garage_shared::{KnowledgeBase, RenderStyle, APP_DIR};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment override for the thinking delay, in milliseconds
pub const THINKING_DELAY_ENV: &str = "GARAGISTE_THINKING_MS";

/// Default pause before a reply is shown
pub const DEFAULT_THINKING_DELAY_MS: u64 = 800;

/// Emoji display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmojiMode {
    /// Emojis on a terminal, ASCII markers when piped
    #[default]
    Auto,
    Enabled,
    Disabled,
}

/// Color display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Output configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub emojis: EmojiMode,

    #[serde(default)]
    pub color: ColorMode,
}

/// Chat session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Pause before the bot reply is appended
    #[serde(default = "default_thinking_delay_ms")]
    pub thinking_delay_ms: u64,
}

fn default_thinking_delay_ms() -> u64 {
    DEFAULT_THINKING_DELAY_MS
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            thinking_delay_ms: DEFAULT_THINKING_DELAY_MS,
        }
    }
}

impl ChatConfig {
    /// Effective delay; GARAGISTE_THINKING_MS wins over the file
    pub fn thinking_delay(&self) -> Duration {
        let env = std::env::var(THINKING_DELAY_ENV).ok();
        Duration::from_millis(resolve_delay_ms(self.thinking_delay_ms, env.as_deref()))
    }
}

/// Pick the override when it parses, the configured value otherwise
pub fn resolve_delay_ms(configured: u64, env_override: Option<&str>) -> u64 {
    env_override
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(configured)
}

/// Knowledge base configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnowledgeConfig {
    /// Custom knowledge file (TOML); built-in pack when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GarageConfig {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub chat: ChatConfig,

    #[serde(default)]
    pub knowledge: KnowledgeConfig,
}

impl GarageConfig {
    /// User config path: ~/.config/garagiste/config.toml
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
    }

    /// System config path: /etc/garagiste/config.toml
    pub fn system_config_path() -> PathBuf {
        PathBuf::from("/etc").join(APP_DIR).join("config.toml")
    }

    /// Load configuration
    ///
    /// Priority:
    /// 1. User config (~/.config/garagiste/config.toml)
    /// 2. System config (/etc/garagiste/config.toml)
    /// 3. Defaults
    pub fn load() -> Result<Self> {
        if let Some(user_path) = Self::user_config_path() {
            if user_path.exists() {
                return Self::load_from(&user_path);
            }
        }

        let system_path = Self::system_config_path();
        if system_path.exists() {
            return Self::load_from(&system_path);
        }

        Ok(Self::default())
    }

    /// Load configuration from an explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: GarageConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// Build the knowledge base this config points at
    pub fn knowledge_base(&self) -> Result<KnowledgeBase> {
        match &self.knowledge.path {
            Some(path) => KnowledgeBase::load(path)
                .with_context(|| format!("Failed to load knowledge base {}", path.display())),
            None => KnowledgeBase::builtin().context("Built-in knowledge base is invalid"),
        }
    }

    /// Set output emoji mode
    pub fn set_emoji_mode(&mut self, mode: &str) -> Result<()> {
        self.output.emojis = match mode.to_lowercase().as_str() {
            "auto" => EmojiMode::Auto,
            "on" | "enabled" | "yes" | "true" => EmojiMode::Enabled,
            "off" | "disabled" | "no" | "false" => EmojiMode::Disabled,
            _ => anyhow::bail!("Invalid emoji mode: '{}'. Valid values: auto, on, off", mode),
        };
        Ok(())
    }

    /// Set output color mode
    pub fn set_color_mode(&mut self, mode: &str) -> Result<()> {
        self.output.color = match mode.to_lowercase().as_str() {
            "auto" => ColorMode::Auto,
            "always" | "on" => ColorMode::Always,
            "never" | "none" | "off" => ColorMode::Never,
            _ => anyhow::bail!("Invalid color mode: '{}'. Valid values: auto, always, never", mode),
        };
        Ok(())
    }

    /// Marker set for rendered replies
    pub fn render_style(&self, is_tty: bool) -> RenderStyle {
        let emojis = match self.output.emojis {
            EmojiMode::Auto => is_tty,
            EmojiMode::Enabled => true,
            EmojiMode::Disabled => false,
        };
        RenderStyle::from_emojis(emojis)
    }

    /// Whether to emit ANSI styling
    pub fn use_color(&self, is_tty: bool) -> bool {
        match self.output.color {
            ColorMode::Auto => is_tty && std::env::var_os("NO_COLOR").is_none(),
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}
