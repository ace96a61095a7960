use anyhow::{Result, bail};
use std::io::{self, Write};

use crate::config::{ConfigFile, ConfigManager, ResolveOptions, resolve_config};
use crate::input::InputReader;
use crate::translation::{self, TranslationClient, TranslationRequest};
use crate::ui::{Spinner, Style};

pub struct TranslateOptions {
    pub text: Option<String>,
    pub to: Option<String>,
    pub model: Option<String>,
    pub endpoint: Option<String>,
}

/// Runs the translation pipeline: resolve configuration, read the source
/// text, perform one chat-completion round trip, print the result.
pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let config_file = load_config_file()?;

    let resolve_options = ResolveOptions {
        to: options.to,
        model: options.model,
        endpoint: options.endpoint,
    };
    let config = resolve_config(&resolve_options, &config_file)?;

    let language = translation::language_name(&config.target_language)?;

    let source_text = InputReader::read(options.text.as_deref())?;
    if source_text.is_empty() {
        bail!("Error: Input is empty");
    }

    let client = TranslationClient::new(config.endpoint, config.api_key);
    let request = TranslationRequest {
        source_text,
        target_language: language.to_string(),
        model: config.model,
    };

    let spinner = Spinner::start("Translating...");
    let translated = client.translate(&request).await;
    spinner.stop();

    println!("{}", translated?);
    io::stdout().flush()?;

    Ok(())
}

fn load_config_file() -> Result<ConfigFile> {
    let manager = ConfigManager::new()?;
    match manager.load() {
        Ok(file) => Ok(file),
        Err(e) => {
            // Only warn when a config file is present but unreadable
            if manager.config_path().exists() {
                crate::warn!("{} {e:#}", Style::warning("Warning:"));
            }
            Ok(ConfigFile::default())
        }
    }
}
