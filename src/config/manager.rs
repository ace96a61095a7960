use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::paths;
use crate::translation::{TranslationError, TranslationResult};

/// Endpoint used when none is configured (Groq's OpenAI-compatible API).
pub const DEFAULT_ENDPOINT: &str = "https://api.groq.com/openai";

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemma2-9b-it";

/// Environment variable holding the API credential by default.
pub const DEFAULT_API_KEY_ENV: &str = "GROQ_API_KEY";

/// Default settings in the `[xl8]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Xl8Config {
    /// Default target language (ISO 639-1 code or English name).
    pub to: Option<String>,
    /// Default model name.
    pub model: Option<String>,
    /// API endpoint URL override.
    pub endpoint: Option<String>,
    /// Environment variable name containing the API key.
    #[serde(default)]
    pub api_key_env: Option<String>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/xl8/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Default settings.
    #[serde(default)]
    pub xl8: Xl8Config,
}

/// Resolved configuration after merging CLI arguments, config file,
/// environment, and built-in defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// The API endpoint URL.
    pub endpoint: String,
    /// The model to use for translation.
    pub model: String,
    /// The target language as given (code or name).
    pub target_language: String,
    /// The API credential, read from the environment at resolve time.
    pub api_key: Option<String>,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Target language override.
    pub to: Option<String>,
    /// Model name override.
    pub model: Option<String>,
    /// API endpoint URL override.
    pub endpoint: Option<String>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// Priority order: CLI options, then the config file, then built-in
/// defaults. The target language has no default and must come from one of
/// the first two. The API key is read from the environment variable named
/// by `api_key_env` (default `GROQ_API_KEY`); a missing or empty value is
/// a configuration error, raised here, before any network call.
///
/// # Errors
///
/// Returns [`TranslationError::Configuration`] if the target language or
/// the API credential is missing.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> TranslationResult<ResolvedConfig> {
    let target_language = options
        .to
        .as_ref()
        .or(config_file.xl8.to.as_ref())
        .cloned()
        .ok_or_else(|| {
            TranslationError::Configuration(
                "Missing required configuration: 'to' (target language)\n\n\
                 Please provide it via:\n  \
                 - CLI option: xl8 --to <lang>\n  \
                 - Config file: ~/.config/xl8/config.toml"
                    .to_string(),
            )
        })?;

    let model = options
        .model
        .as_ref()
        .or(config_file.xl8.model.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    let endpoint = options
        .endpoint
        .as_ref()
        .or(config_file.xl8.endpoint.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    let api_key_env = config_file
        .xl8
        .api_key_env
        .as_deref()
        .unwrap_or(DEFAULT_API_KEY_ENV);

    let api_key = std::env::var(api_key_env).ok().filter(|key| !key.is_empty());

    if api_key.is_none() {
        return Err(TranslationError::Configuration(format!(
            "Missing API key\n\n\
             Set the {api_key_env} environment variable:\n  \
             export {api_key_env}=\"your-api-key\"\n\n\
             Keys can also be placed in a .env file in the working directory."
        )));
    }

    Ok(ResolvedConfig {
        endpoint,
        model,
        target_language,
        api_key,
    })
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/xl8/config.toml`
    /// or `~/.config/xl8/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile =
            toml::from_str(&contents).with_context(|| "Failed to parse config file")?;

        Ok(config_file)
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }

    pub fn load_or_default(&self) -> ConfigFile {
        self.load().unwrap_or_default()
    }
}
