//! Configuration loading

use crate::error::CliError;
use anyhow::Result;
use std::path::Path;
use wordedge_engine::EngineConfig;

/// Load the engine configuration from `path`, or the defaults
pub fn load(path: Option<&Path>) -> Result<EngineConfig> {
    match path {
        Some(path) => {
            log::info!("Loading configuration from {}", path.display());
            EngineConfig::from_file(path)
                .map_err(|e| anyhow::Error::new(CliError::ConfigError(e.to_string())))
        }
        None => Ok(EngineConfig::default()),
    }
}

/// Default configuration as commented TOML
pub fn default_template() -> Result<String> {
    let body = EngineConfig::default()
        .to_toml_string()
        .map_err(|e| CliError::ConfigError(e.to_string()))?;
    Ok(format!(
        "# wordedge configuration\n\
         #\n\
         # classifier.extra_word_chars: characters counted as word characters\n\
         #   in addition to letters and digits, e.g. [\"'\", \"_\"]\n\
         # context.max_context_chars: context taken on each side before trimming\n\
         # context.trim_order: \"alternate\", \"prefix-first\" or \"suffix-first\"\n\
         \n{body}"
    ))
}
